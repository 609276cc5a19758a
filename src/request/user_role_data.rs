use serde::Serialize;

/// Role assignment for `/user-roles/save`.
///
/// The service expects camelCase keys and a list of role identifiers
/// (e.g. "USER", "ADMIN").
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleData {
    pub user_login: String,
    pub roles: Vec<String>,
}
