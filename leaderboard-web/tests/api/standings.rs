use crate::helpers::{STUDENTS_PATH, TestApp, student};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn standings_returns_the_displayed_entries() {
    // Arrange
    let app =
        TestApp::spawn_with_students(json!([student(1, "Ann", 50), student(2, "Bo", 90)])).await;

    // Act
    let response = app.get_standings("").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse as JSON");
    assert_eq!(body["searching"], false);
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "Bo");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["icon"], "crown");
    assert_eq!(entries[0]["tier_label"], "Big Three");
    assert_eq!(entries[1]["name"], "Ann");
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[1]["icon"], "silver_medal");
}

#[tokio::test]
async fn standings_search_is_case_insensitive() {
    // Arrange
    let app = TestApp::spawn_with_students(json!([
        student(1, "Ann", 50),
        student(2, "Bo", 90),
        student(3, "JOANNA", 10),
    ]))
    .await;

    // Act
    let response = app.get_standings("AN").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse as JSON");
    assert_eq!(body["searching"], true);
    let names: Vec<_> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| (entry["name"].clone(), entry["rank"].clone()))
        .collect();
    assert_eq!(names, vec![(json!("Ann"), json!(2)), (json!("JOANNA"), json!(3))]);
}

#[tokio::test]
async fn standings_returns_a_503_while_loading() {
    // Arrange
    let scores_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STUDENTS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&scores_server)
        .await;
    let app = TestApp::spawn(scores_server).await;

    // Act
    let response = app.get_standings("").await;

    // Assert
    assert_eq!(503, response.status().as_u16());
}

#[tokio::test]
async fn standings_returns_a_503_after_a_failed_load() {
    // Arrange
    let scores_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STUDENTS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&scores_server)
        .await;
    let app = TestApp::spawn(scores_server).await;
    app.wait_until_settled().await;

    // Act
    let response = app.get_standings("").await;

    // Assert
    assert_eq!(503, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains("Failed to fetch students data"));
}

#[tokio::test]
async fn standings_returns_a_400_for_an_overlong_search() {
    // Arrange
    let app = TestApp::spawn_with_students(json!([student(1, "Ann", 50)])).await;

    // Act
    let response = app.get_standings(&"a".repeat(300)).await;

    // Assert
    assert_eq!(
        400,
        response.status().as_u16(),
        "The API did not fail with 400 Bad Request for an overlong search term."
    );
}
