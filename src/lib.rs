pub mod auth_client;
pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod login;
pub mod request;
pub mod response;
pub mod telemetry;
