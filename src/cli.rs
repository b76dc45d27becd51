use clap::Parser;

use crate::export::ExportFormat;

/// Export every ShipStation order to orders.<format>.
#[derive(Debug, Parser)]
#[command(name = "orders-export", version)]
pub struct Cli {
    /// Output format: ndjson, json or csv (case-insensitive). Anything else
    /// falls back to ndjson.
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,
}

impl Cli {
    pub fn export_format(&self) -> ExportFormat {
        ExportFormat::resolve(self.format.as_deref())
    }
}
