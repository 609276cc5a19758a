/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// auth-service endpoints
pub const SIGNIN_PATH: &str = "/auth/signin";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const USER_ROLES_SAVE_PATH: &str = "/user-roles/save";
pub const USER_ROLES_PATH: &str = "/user-roles";

/// page the browser lands on after a successful signin
pub const LOGIN_SUCCESS_PATH: &str = "/login/success";

/// prefixes for the failure notification shown to the user
pub const SIGNIN_REJECTED_LABEL: &str = "Error: ";
pub const SIGNIN_REQUEST_FAILED_LABEL: &str = "Request error: ";
