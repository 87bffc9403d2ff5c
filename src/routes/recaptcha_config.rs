//! src/routes/recaptcha_config.rs
use actix_web::{web, HttpResponse};
use serde::Serialize;

/// Public key the browser widget is rendered with.
#[derive(Debug, Clone, Default)]
pub struct RecaptchaSiteKey(pub Option<String>);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecaptchaConfig<'a> {
    site_key: Option<&'a str>,
}

pub async fn recaptcha_config(site_key: web::Data<RecaptchaSiteKey>) -> HttpResponse {
    HttpResponse::Ok().json(RecaptchaConfig {
        site_key: site_key.0.as_deref(),
    })
}
