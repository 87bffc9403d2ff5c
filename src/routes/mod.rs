//! src/routes/mod.rs
mod health_check;
pub use health_check::*;

mod contact;
pub use contact::*;

mod contacts;
pub use contacts::*;

mod recaptcha_config;
pub use recaptcha_config::*;

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
