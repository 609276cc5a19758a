use chrono::NaiveDateTime;
use serde::Deserialize;

/// Error payload returned by the auth service's structured endpoints,
/// e.g. `{"message": "User with login user1 already exists",
/// "timestamp": "2025-07-21T18:08:00"}`.
///
/// The timestamp is optional so a bare `{"message": ...}` body still
/// parses. Signin failures are NOT parsed with this type: their body is
/// shown to the user verbatim.
#[derive(Debug, Deserialize)]
pub struct ErrorData {
    pub message: String,
    pub timestamp: Option<NaiveDateTime>,
}
