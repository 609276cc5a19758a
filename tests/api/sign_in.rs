use crate::helpers;
use claims::assert_ok;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn submit_issues_exactly_one_post_with_the_form_contents() {
    // Arrange
    let app = helpers::spawn_flow("user1", "password123").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("a-token"))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let outcome = app.submitter.submit().await;

    // Assert
    assert_ok!(outcome);
    let requests = app.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.method.to_string(), "POST");
    assert_eq!(request.url.path(), "/auth/signin");

    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "login": "user1",
            "password": "password123"
        })
    );
}

#[tokio::test]
async fn empty_fields_are_submitted_as_is() {
    // Arrange
    // The form does not validate: an empty login and password still go out.
    let app = helpers::spawn_flow("", "").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("a-token"))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let outcome = app.submitter.submit().await;

    // Assert
    assert_ok!(outcome);
    let requests = app.server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "login": "",
            "password": ""
        })
    );
}
