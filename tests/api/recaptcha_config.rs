//! tests/api/recaptcha_config.rs

use crate::helpers::{setup, setup_without_recaptcha, RECAPTCHA_SITE_KEY};

#[tokio::test]
async fn recaptcha_config_returns_the_site_key() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.get("/api/config/recaptcha").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "siteKey": RECAPTCHA_SITE_KEY }));
}

#[tokio::test]
async fn recaptcha_config_returns_null_without_a_site_key() {
    // Arrange
    let test = setup_without_recaptcha().await;

    // Act
    let response = test.get("/api/config/recaptcha").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["siteKey"].is_null());
}
