use crate::helpers::{STUDENTS_PATH, TestApp, student};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn reload_redirects_back_to_the_page() {
    // Arrange
    let scores_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STUDENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&scores_server)
        .await;
    let app = TestApp::spawn(scores_server).await;
    app.wait_until_settled().await;

    // Act
    let response = app.post_reload().await;

    // Assert
    assert_eq!(303, response.status().as_u16());
    assert_eq!(
        Some("/"),
        response
            .headers()
            .get("Location")
            .and_then(|location| location.to_str().ok())
    );
    app.wait_until_settled().await;
}

#[tokio::test]
async fn reloading_after_an_error_fetches_again() {
    // Arrange
    let scores_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STUDENTS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&scores_server)
        .await;
    Mock::given(method("GET"))
        .and(path(STUDENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            student(1, "Ann", 50),
            student(2, "Bo", 90),
        ])))
        .expect(1)
        .mount(&scores_server)
        .await;
    let app = TestApp::spawn(scores_server).await;
    let first = app.wait_until_settled().await;
    assert_eq!(first["state"], "error");

    // Act
    app.post_reload().await;
    let second = app.wait_until_settled().await;

    // Assert
    assert_eq!(second["state"], "ready");
    assert_eq!(second["students"], 2);
    let html = app.get_page_html("").await;
    assert!(html.contains(r#"data-rank="1" data-tier="Big Three""#));
    assert!(!html.contains("Error Loading Rankings"));
}
