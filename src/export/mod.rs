pub mod csv;
pub mod format;

pub use format::ExportFormat;

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use crate::error::ExportError;
use crate::shipstation::Order;

/// Destination file for `format` inside `dir`, e.g. `dir/orders.csv`.
pub fn output_path(dir: &Path, format: ExportFormat) -> PathBuf {
    dir.join(format!("orders.{}", format.extension()))
}

/// Write `orders` to `path` in `format`, replacing any existing file.
///
/// NDJSON is streamed record by record through a buffered handle; JSON and
/// CSV are rendered in memory and written in one go.
pub async fn export_orders(
    orders: &[Order],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    info!("Exporting {} orders to {}...", orders.len(), format);

    match format {
        ExportFormat::Json => {
            let body = serde_json::to_string_pretty(orders)?;
            tokio::fs::write(path, body).await?;
        }
        ExportFormat::Csv => {
            tokio::fs::write(path, csv::to_csv(orders)).await?;
        }
        ExportFormat::Ndjson => write_ndjson(orders, path).await?,
    }

    info!("Written {} orders to {}", orders.len(), path.display());
    Ok(())
}

async fn write_ndjson(orders: &[Order], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).await?;
    let mut writer = BufWriter::new(file);

    for order in orders {
        let mut line = serde_json::to_vec(order)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
    }

    writer.flush().await?;
    writer.into_inner().sync_all().await?;
    Ok(())
}
