use crate::auth_client::AuthClient;
use crate::constant::{LOGIN_SUCCESS_PATH, SIGNIN_REJECTED_LABEL, SIGNIN_REQUEST_FAILED_LABEL};
use crate::domain::{AuthToken, Credentials};
use crate::error::BizErrorEnum;
use crate::telemetry;
use reqwest::Url;
use secrecy::Secret;

/// Supplies the current contents of the login form.
///
/// Both fields are read synchronously before the request is issued.
/// Implementations must hand the values back as-is: an empty field is
/// still submitted.
pub trait FormInput {
    fn login(&self) -> Result<String, BizErrorEnum>;
    fn password(&self) -> Result<Secret<String>, BizErrorEnum>;
}

/// Presents a blocking failure message to the user.
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<(), BizErrorEnum>;
}

/// Takes the user to the success page.
pub trait Navigator {
    fn navigate_to(&self, url: &Url) -> Result<(), BizErrorEnum>;
}

/// Terminal state of one submission attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
}

/// One-shot login submission flow.
///
/// Each `submit` call reads the form, issues exactly one signin request
/// and either navigates (2xx) or notifies the user (anything else).
/// Overlapping calls are not coordinated: every invocation owns its
/// request and there is no ordering guarantee between their responses.
pub struct LoginSubmitter<F, N, V> {
    auth_client: AuthClient,
    form: F,
    notifier: N,
    navigator: V,
}

impl<F, N, V> LoginSubmitter<F, N, V>
where
    F: FormInput,
    N: Notifier,
    V: Navigator,
{
    pub fn new(auth_client: AuthClient, form: F, notifier: N, navigator: V) -> Self {
        Self {
            auth_client,
            form,
            notifier,
            navigator,
        }
    }

    /// Submit the current form contents.
    ///
    /// A rejected signin and a transport failure are both terminal for
    /// this invocation and resolve to `SubmitOutcome::Failed` after the
    /// user has been notified; retrying means calling `submit` again.
    /// `Err` is reserved for the collaborators themselves failing
    /// (e.g. console I/O), which the flow cannot report to the user.
    #[tracing::instrument(
        name = "Submit login",
        skip(self),
        fields(login = tracing::field::Empty, outcome = tracing::field::Empty)
    )]
    pub async fn submit(&self) -> Result<SubmitOutcome, BizErrorEnum> {
        let credentials = Credentials::new(self.form.login()?, self.form.password()?);
        telemetry::record_field("login", &credentials.login);

        match self.auth_client.sign_in(&credentials).await {
            Ok(token) => {
                telemetry::record_field("outcome", "succeeded");
                let url = success_url(self.auth_client.base_url(), &token)?;
                self.navigator.navigate_to(&url)?;
                Ok(SubmitOutcome::Succeeded)
            }
            Err(BizErrorEnum::SigninRejected { message, .. }) => {
                telemetry::record_field("outcome", "rejected");
                self.notifier
                    .notify(&format!("{}{}", SIGNIN_REJECTED_LABEL, message))?;
                Ok(SubmitOutcome::Failed)
            }
            Err(BizErrorEnum::SigninRequestError(error)) => {
                telemetry::record_field("outcome", "request_failed");
                self.notifier
                    .notify(&format!("{}{}", SIGNIN_REQUEST_FAILED_LABEL, error))?;
                Ok(SubmitOutcome::Failed)
            }
            Err(BizErrorEnum::ReadResponseBodyError(error)) => {
                telemetry::record_field("outcome", "request_failed");
                self.notifier
                    .notify(&format!("{}{}", SIGNIN_REQUEST_FAILED_LABEL, error))?;
                Ok(SubmitOutcome::Failed)
            }
            Err(other) => Err(other),
        }
    }
}

/// Build `{base_url}/login/success?token=<token>`.
///
/// The token is percent-encoded: it is an opaque string and nothing
/// stops the service from issuing one with reserved URL characters.
fn success_url(base_url: &str, token: &AuthToken) -> Result<Url, BizErrorEnum> {
    let mut url = Url::parse(base_url)
        .map_err(|e| {
            tracing::error!("Failed to parse url: url={}, e={:?}", base_url, e);
            BizErrorEnum::ParseUrlError
        })?
        .join(LOGIN_SUCCESS_PATH)
        .map_err(|e| {
            tracing::error!("Url failed to join {}: {:?}", LOGIN_SUCCESS_PATH, e);
            BizErrorEnum::JoinUrlError
        })?;
    url.set_query(Some(&format!(
        "token={}",
        urlencoding::Encoded::new(token.as_ref())
    )));
    Ok(url)
}
