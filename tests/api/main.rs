//! tests/api/main.rs

mod contact;
mod helpers;
mod recaptcha_config;
