use book_url_service::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = config::load_from_env()?;

    telemetry::init(&config.log_level, &config.log_format);

    if let Err(e) = dotenv {
        tracing::debug!("No .env file loaded: {}", e);
    }

    config.print_summary();

    server::run(config).await
}
