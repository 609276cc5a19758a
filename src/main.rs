use auth_service_client::auth_client::AuthClient;
use auth_service_client::configuration;
use auth_service_client::login::{
    ConsoleForm, ConsoleNavigator, ConsoleNotifier, LoginSubmitter, SubmitOutcome,
};
use auth_service_client::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber(
        "auth-service-client".into(),
        "warn".into(),
        std::io::stderr,
    );
    telemetry::init_subscriber(subscriber)?;

    // Panic if we can't read configuration
    let config = configuration::get_configuration().expect("Failed to read configuration");
    let timeout = config.auth_service.timeout();
    let auth_client = AuthClient::new(config.auth_service.base_url, timeout);

    let submitter =
        LoginSubmitter::new(auth_client, ConsoleForm, ConsoleNotifier, ConsoleNavigator);
    match submitter.submit().await? {
        SubmitOutcome::Succeeded => Ok(()),
        SubmitOutcome::Failed => std::process::exit(1),
    }
}
