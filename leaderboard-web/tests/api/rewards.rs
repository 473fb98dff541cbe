use crate::helpers::TestApp;
use serde_json::{Value, json};

#[tokio::test]
async fn rewards_lists_the_four_prize_tiers() {
    // Arrange
    let app = TestApp::spawn_with_students(json!([])).await;

    // Act
    let response = app.get("api/rewards").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse as JSON");
    let rewards = body["rewards"].as_array().unwrap();
    assert_eq!(rewards.len(), 4);
    assert_eq!(rewards[0]["rank"], "Peringkat 1");
    assert_eq!(rewards[3]["prize"], "Hadiah buku");
}

#[tokio::test]
async fn the_banner_is_shown_even_with_no_students() {
    // Arrange
    let app = TestApp::spawn_with_students(json!([])).await;

    // Act
    let html = app.get_page_html("").await;

    // Assert
    assert_eq!(html.matches("data-rank=").count(), 0);
    assert_eq!(html.matches("Peringkat").count(), 5);
}
