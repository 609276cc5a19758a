/// Opaque token issued by the auth service on a successful signin.
///
/// The body of a 2xx signin response, taken verbatim. The client never
/// inspects or validates it; it is only forwarded, as a query parameter
/// on the success page or as a bearer credential on later calls.
#[derive(Debug, Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
