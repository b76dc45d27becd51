pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod logging;
pub mod shipstation;

use std::path::PathBuf;

use crate::config::{Config, Credentials};
use crate::error::ExportError;
use crate::export::ExportFormat;
use crate::shipstation::{ShipStationClient, ShipStationError};

/// Fetch every order and write them to `orders.<ext>` in the configured
/// output directory. Returns the path written.
///
/// Nothing is written unless the whole fetch succeeds.
pub async fn run(
    config: &Config,
    credentials: Credentials,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let client = ShipStationClient::new(config, credentials).map_err(|e| match e {
        ShipStationError::AuthenticationError(msg) => ExportError::Configuration(msg),
        other => ExportError::Network(other),
    })?;
    let orders = fetcher::fetch_all_orders(&client, config.page_size).await?;

    let path = export::output_path(&config.output_dir, format);
    export::export_orders(&orders, format, &path).await?;
    Ok(path)
}
