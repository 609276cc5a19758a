use crate::error::BizErrorEnum;
use crate::login::{FormInput, Navigator, Notifier};
use colored::Colorize;
use dialoguer::{Input, Password};
use reqwest::Url;
use secrecy::Secret;

/// Interactive console stand-ins for the browser collaborators: the two
/// input fields, the blocking alert and the location change.
pub struct ConsoleForm;

impl FormInput for ConsoleForm {
    fn login(&self) -> Result<String, BizErrorEnum> {
        // Empty input is allowed: the form does not validate.
        Input::<String>::new()
            .with_prompt("Login")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| {
                tracing::error!("Failed to read login from console: {:?}", e);
                BizErrorEnum::ReadConsoleInputError(e)
            })
    }

    fn password(&self) -> Result<Secret<String>, BizErrorEnum> {
        Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map(Secret::new)
            .map_err(|e| {
                tracing::error!("Failed to read password from console: {:?}", e);
                BizErrorEnum::ReadConsoleInputError(e)
            })
    }
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) -> Result<(), BizErrorEnum> {
        eprintln!("{}", message.red().bold());
        Ok(())
    }
}

pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, url: &Url) -> Result<(), BizErrorEnum> {
        println!("{} {}", "Signed in, continue at".green(), url.as_str());
        Ok(())
    }
}
