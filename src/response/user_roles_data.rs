use serde::Deserialize;

/// Role listing returned by `/user-roles/{login}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRolesData {
    pub user_login: String,
    pub roles: Vec<String>,
}
