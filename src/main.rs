use anyhow::Context;
use clap::Parser;
use tracing::error;

use orders_export::cli::Cli;
use orders_export::config::{Config, Credentials};
use orders_export::error::ExportError;
use orders_export::logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    if let Err(err) = try_main(&cli).await {
        error!("Export failed: {:#}", err);
        let code = err
            .downcast_ref::<ExportError>()
            .map_or(1, ExportError::exit_code);
        std::process::exit(code);
    }
}

async fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let format = cli.export_format();
    let config = Config::from_env();
    let credentials = Credentials::from_env()?;

    orders_export::run(&config, credentials, format)
        .await
        .with_context(|| format!("exporting orders as {}", format))?;
    Ok(())
}
