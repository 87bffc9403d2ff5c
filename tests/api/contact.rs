//! tests/api/contact.rs

use crate::helpers::{
    setup, setup_with, setup_without_recaptcha, valid_body, BrokenStore, RECAPTCHA_SECRET,
};
use std::sync::Arc;
use tutorhub::routes::{
    CONFIRMATION_MESSAGE, GENERIC_FAILURE_MESSAGE, INVALID_FORM_MESSAGE,
    VERIFICATION_FAILED_MESSAGE,
};
use tutorhub::storage::ContactStore;
use uuid::Uuid;
use wiremock::matchers::{any, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn contact_returns_a_200_and_an_id_for_valid_data() {
    // Arrange
    let test = setup().await;
    test.accept_recaptcha().await;

    // Act
    let response = test.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], CONFIRMATION_MESSAGE);
    let id = body["id"].as_str().expect("The response has no id");
    Uuid::parse_str(id).expect("The id is not a UUID");
}

#[tokio::test]
async fn contact_persists_exactly_one_record() {
    // Arrange
    let test = setup().await;
    test.accept_recaptcha().await;

    // Act
    let response = test.post_contact(&valid_body()).await;

    // Assert
    let body: serde_json::Value = response.json().await.unwrap();
    let saved = test.store.list_contacts().await.unwrap();
    assert_eq!(saved.len(), 1);

    let saved = &saved[0];
    assert_eq!(saved.id.to_string(), body["id"].as_str().unwrap());
    assert_eq!(saved.name, "Ursula Le Guin");
    assert_eq!(saved.email, "ursula_le_guin@gmail.com");
    assert_eq!(saved.subject.as_deref(), Some("find-tutor"));
    assert_eq!(saved.country_code.as_deref(), Some("+44"));
    assert_eq!(saved.country_iso2.as_deref(), Some("GB"));
    assert_eq!(saved.phone.as_deref(), Some("20 7946 0958"));
}

#[tokio::test]
async fn contact_sends_token_secret_and_address_for_verification() {
    // Arrange
    let test = setup().await;

    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .and(body_string_contains(format!("secret={}", RECAPTCHA_SECRET)))
        .and(body_string_contains("response=valid-token"))
        .and(body_string_contains("remoteip=127.0.0.1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&test.recaptcha_server)
        .await;

    // Act
    let response = test.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn contact_returns_a_400_when_email_is_invalid() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.recaptcha_server)
        .await;

    let mut body = valid_body();
    body["email"] = "not-an-email".into();

    // Act
    let response = test.post_contact(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], INVALID_FORM_MESSAGE);
    assert_eq!(
        body["errors"],
        serde_json::json!([{ "field": "email", "message": "Please enter a valid email address" }])
    );
    assert!(test.store.is_empty().await);
}

#[tokio::test]
async fn contact_returns_a_400_when_data_is_missing() {
    // Arrange
    let test = setup().await;
    test.accept_recaptcha().await;
    let test_cases = vec![
        ("name", "missing the name"),
        ("email", "missing the email"),
        ("message", "missing the message"),
        ("recaptcha", "missing the reCAPTCHA token"),
    ];

    for (field, error_message) in test_cases {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);

        // Act
        let response = test.post_contact(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["errors"][0]["field"], field);
    }
    assert!(test.store.is_empty().await);
}

#[tokio::test]
async fn contact_returns_a_400_when_phone_is_invalid() {
    // Arrange
    let test = setup().await;
    test.accept_recaptcha().await;
    let test_cases = vec![
        ("123-456", "fewer than seven digits"),
        ("555-CALL-NOW", "letters"),
        ("555.123.4567", "dots"),
    ];

    for (phone, error_message) in test_cases {
        let mut body = valid_body();
        body["phone"] = phone.into();

        // Act
        let response = test.post_contact(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the phone had {}.",
            error_message
        );
    }
    assert!(test.store.is_empty().await);
}

#[tokio::test]
async fn contact_accepts_blank_optional_fields() {
    // Arrange
    let test = setup().await;
    test.accept_recaptcha().await;
    let mut body = valid_body();
    body["phone"] = "".into();
    body["subject"] = "".into();
    body["countryCode"] = serde_json::Value::Null;

    // Act
    let response = test.post_contact(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let saved = test.store.list_contacts().await.unwrap();
    assert_eq!(saved[0].phone, None);
    assert_eq!(saved[0].subject, None);
    assert_eq!(saved[0].country_code, None);
}

#[tokio::test]
async fn contact_returns_a_400_for_malformed_json() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post_contact_raw("{\"name\": ").await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], INVALID_FORM_MESSAGE);
}

#[tokio::test]
async fn contact_returns_a_400_when_recaptcha_is_rejected() {
    // Arrange
    let test = setup().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error-codes": ["invalid-input-response"]
        })))
        .expect(1)
        .mount(&test.recaptcha_server)
        .await;

    // Act
    let response = test.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": false, "message": VERIFICATION_FAILED_MESSAGE })
    );
    assert!(test.store.is_empty().await);
}

#[tokio::test]
async fn contact_returns_a_500_when_verification_service_is_unreachable() {
    // Arrange
    let test = setup_with(
        |config| config.set_recaptcha_url("http://127.0.0.1:9/siteverify".into()),
        None,
    )
    .await;

    // Act
    let response = test.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], GENERIC_FAILURE_MESSAGE);
    assert!(test.store.is_empty().await);
}

#[tokio::test]
async fn contact_skips_verification_without_a_secret() {
    // Arrange
    let test = setup_without_recaptcha().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.recaptcha_server)
        .await;

    // Act
    let response = test.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(test.store.list_contacts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn contact_still_requires_a_token_without_a_secret() {
    // Arrange
    let test = setup_without_recaptcha().await;
    let mut body = valid_body();
    body["recaptcha"] = "".into();

    // Act
    let response = test.post_contact(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert!(test.store.is_empty().await);
}

#[tokio::test]
async fn contact_returns_a_500_when_the_store_fails() {
    // Arrange
    let test = setup_with(|_| {}, Some(Arc::new(BrokenStore))).await;
    test.accept_recaptcha().await;

    // Act
    let response = test.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": false, "message": GENERIC_FAILURE_MESSAGE })
    );
}
