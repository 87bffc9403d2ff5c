use tutorhub::configuration::get_configuration;
use tutorhub::startup::build;
use tutorhub::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("tutorhub".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_configuration()?;
    let app = build(config).await?;
    tracing::info!("Listening on port {}", app.port());
    app.run().await?;

    Ok(())
}
