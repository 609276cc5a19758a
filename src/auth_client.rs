use crate::constant::{SIGNIN_PATH, SIGNUP_PATH, USER_ROLES_PATH, USER_ROLES_SAVE_PATH};
use crate::domain::{AuthToken, Credentials};
use crate::error::BizErrorEnum;
use crate::request::{SignUpData, UserRoleData};
use crate::response::{ErrorData, UserRolesData};
use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

/// HTTP client for the auth service.
///
/// One instance per service; every operation issues exactly one request
/// and performs no retries. Failures come in two kinds: the transport
/// failed (the `*RequestError` variants) or the service answered with a
/// non-2xx status (the `*Rejected` variants, carrying the response
/// message).
#[derive(Debug)]
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .unwrap();
        AuthClient {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Exchange credentials for a token.
    ///
    /// `POST /auth/signin` with a JSON body; a 2xx body is the token,
    /// taken verbatim. A non-2xx body is the error message, also taken
    /// verbatim: the signin endpoint answers in plain text, not in the
    /// service's structured error format.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, BizErrorEnum> {
        let url = self.endpoint(SIGNIN_PATH)?;
        let request_body = SignInRequest {
            login: credentials.login.as_str(),
            password: credentials.password.expose_secret(),
        };
        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send signin request: {:?}", e);
                BizErrorEnum::SigninRequestError(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read signin response body: {:?}", e);
            BizErrorEnum::ReadResponseBodyError(e)
        })?;

        if status.is_success() {
            Ok(AuthToken::new(body))
        } else {
            Err(BizErrorEnum::SigninRejected {
                status,
                message: body,
            })
        }
    }

    /// Register a new user.
    ///
    /// `PUT /auth/signup`; the service answers 2xx with an empty body.
    pub async fn sign_up(&self, new_user: &SignUpData) -> Result<(), BizErrorEnum> {
        let url = self.endpoint(SIGNUP_PATH)?;
        let request_body = SignUpRequest {
            login: new_user.login.as_str(),
            password: new_user.password.expose_secret(),
            email: new_user.email.as_str(),
        };
        let response = self
            .http_client
            .put(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send signup request: {:?}", e);
                BizErrorEnum::SignupRequestError(e)
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = self.rejection_message(response).await?;
        Err(BizErrorEnum::SignupRejected { status, message })
    }

    /// Replace the role set of a user. Requires an admin token.
    ///
    /// `PUT /user-roles/save` with a bearer token.
    pub async fn save_user_roles(
        &self,
        request: &UserRoleData,
        token: &AuthToken,
    ) -> Result<(), BizErrorEnum> {
        let url = self.endpoint(USER_ROLES_SAVE_PATH)?;
        let response = self
            .http_client
            .put(url)
            .bearer_auth(token.as_ref())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send save-user-roles request: {:?}", e);
                BizErrorEnum::SaveUserRolesRequestError(e)
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = self.rejection_message(response).await?;
        Err(BizErrorEnum::SaveUserRolesRejected { status, message })
    }

    /// Fetch the role set of a user. Requires a token for the user
    /// themselves or for an admin.
    ///
    /// `GET /user-roles/{login}` with a bearer token.
    pub async fn get_user_roles(
        &self,
        login: &str,
        token: &AuthToken,
    ) -> Result<UserRolesData, BizErrorEnum> {
        let url = self.endpoint(&format!("{}/{}", USER_ROLES_PATH, login))?;
        let response = self
            .http_client
            .get(url)
            .bearer_auth(token.as_ref())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send get-user-roles request: {:?}", e);
                BizErrorEnum::GetUserRolesRequestError(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = self.rejection_message(response).await?;
            return Err(BizErrorEnum::GetUserRolesRejected { status, message });
        }
        response.json::<UserRolesData>().await.map_err(|e| {
            tracing::error!("Failed to deserialize user roles response: {:?}", e);
            BizErrorEnum::DeserializeUserRolesError(e)
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BizErrorEnum> {
        Url::parse(&self.base_url)
            .map_err(|e| {
                tracing::error!("Failed to parse url: url={}, e={:?}", &self.base_url, e);
                BizErrorEnum::ParseUrlError
            })?
            .join(path)
            .map_err(|e| {
                tracing::error!("Url failed to join {}: {:?}", path, e);
                BizErrorEnum::JoinUrlError
            })
    }

    /// The structured endpoints wrap errors in a JSON payload; pull the
    /// message out of it, or fall back to the raw body.
    async fn rejection_message(&self, response: reqwest::Response) -> Result<String, BizErrorEnum> {
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read rejection response body: {:?}", e);
            BizErrorEnum::ReadResponseBodyError(e)
        })?;
        match serde_json::from_str::<ErrorData>(&body) {
            Ok(error_data) => Ok(error_data.message),
            Err(_) => Ok(body),
        }
    }
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    login: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    login: &'a str,
    password: &'a str,
    email: &'a str,
}
