use secrecy::Secret;

/// Registration data for `/auth/signup`.
///
/// Carries the raw field contents; the service performs all validation.
#[derive(Debug)]
pub struct SignUpData {
    pub login: String,
    pub password: Secret<String>,
    pub email: String,
}
