pub mod captcha;
pub mod client;
pub mod configuration;
pub mod countries;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod telemetry;
