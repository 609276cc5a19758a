use auth_service_client::auth_client::AuthClient;
use auth_service_client::error::BizErrorEnum;
use auth_service_client::login::{FormInput, LoginSubmitter, Navigator, Notifier};
use auth_service_client::telemetry;
use once_cell::sync::Lazy;
use reqwest::Url;
use secrecy::Secret;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    let subscriber =
        telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
    telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
});

pub struct TestClient {
    pub server: MockServer,
    pub client: AuthClient,
}

/// Spin up a mock auth service and a client pointed at it.
pub async fn spawn_client() -> TestClient {
    Lazy::force(&TRACING);

    let server = MockServer::start().await;
    let client = AuthClient::new(server.uri(), Duration::from_secs(5));
    TestClient { server, client }
}

/// A full login flow wired with recording collaborators, so tests can
/// assert on what the user would have seen.
pub struct TestFlow {
    pub server: MockServer,
    pub submitter: LoginSubmitter<FixedForm, RecordingNotifier, RecordingNavigator>,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
}

pub async fn spawn_flow(login: &str, password: &str) -> TestFlow {
    Lazy::force(&TRACING);

    let server = MockServer::start().await;
    let (submitter, notifier, navigator) = submitter_against(server.uri(), login, password);
    TestFlow {
        server,
        submitter,
        notifier,
        navigator,
    }
}

pub fn submitter_against(
    base_url: String,
    login: &str,
    password: &str,
) -> (
    LoginSubmitter<FixedForm, RecordingNotifier, RecordingNavigator>,
    RecordingNotifier,
    RecordingNavigator,
) {
    Lazy::force(&TRACING);

    let client = AuthClient::new(base_url, Duration::from_secs(5));
    let form = FixedForm {
        login: login.to_string(),
        password: password.to_string(),
    };
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();
    let submitter = LoginSubmitter::new(client, form, notifier.clone(), navigator.clone());
    (submitter, notifier, navigator)
}

/// An address nothing is listening on, to simulate a network failure.
pub fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Form whose two fields always hold the given values.
pub struct FixedForm {
    pub login: String,
    pub password: String,
}

impl FormInput for FixedForm {
    fn login(&self) -> Result<String, BizErrorEnum> {
        Ok(self.login.clone())
    }

    fn password(&self) -> Result<Secret<String>, BizErrorEnum> {
        Ok(Secret::new(self.password.clone()))
    }
}

/// Notifier that records every message the user would have been shown.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) -> Result<(), BizErrorEnum> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Navigator that records every URL the browser would have visited.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, url: &Url) -> Result<(), BizErrorEnum> {
        self.visited.lock().unwrap().push(url.as_str().to_string());
        Ok(())
    }
}
