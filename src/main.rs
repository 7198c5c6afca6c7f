use anyhow::Context;
use tool_trends::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;

    logging::init(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}
