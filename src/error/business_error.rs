use reqwest::StatusCode;
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // VALIDATE URL
    #[error("Url is incorrect.")]
    ParseUrlError,

    #[error("Url join path error.")]
    JoinUrlError,

    // SIGNIN
    #[error("Failed to send the signin request.")]
    SigninRequestError(#[source] reqwest::Error),

    #[error("The auth service rejected the signin: {message}")]
    SigninRejected { status: StatusCode, message: String },

    // SIGNUP
    #[error("Failed to send the signup request.")]
    SignupRequestError(#[source] reqwest::Error),

    #[error("The auth service rejected the signup: {message}")]
    SignupRejected { status: StatusCode, message: String },

    // USER ROLES
    #[error("Failed to send the save-user-roles request.")]
    SaveUserRolesRequestError(#[source] reqwest::Error),

    #[error("The auth service rejected the role update: {message}")]
    SaveUserRolesRejected { status: StatusCode, message: String },

    #[error("Failed to send the get-user-roles request.")]
    GetUserRolesRequestError(#[source] reqwest::Error),

    #[error("The auth service rejected the role lookup: {message}")]
    GetUserRolesRejected { status: StatusCode, message: String },

    #[error("Failed to deserialize the user roles response.")]
    DeserializeUserRolesError(#[source] reqwest::Error),

    // RESPONSE BODY
    #[error("Failed to read the response body.")]
    ReadResponseBodyError(#[source] reqwest::Error),

    // CONSOLE
    #[error("Failed to read input from the console.")]
    ReadConsoleInputError(#[source] dialoguer::Error),

    // CONFIGURATION
    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
