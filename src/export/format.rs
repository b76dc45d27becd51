use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// On-disk representation of an exported batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One compact JSON object per line.
    #[default]
    Ndjson,
    /// A single pretty-printed JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Ndjson => "ndjson",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Resolve the CLI argument, falling back to NDJSON (with a warning) for
    /// anything unrecognised, including a missing argument.
    pub fn resolve(arg: Option<&str>) -> Self {
        let raw = arg.unwrap_or("");
        match raw.parse() {
            Ok(format) => format,
            Err(_) => {
                warn!("Unknown format \"{}\", defaulting to NDJSON.", raw);
                ExportFormat::Ndjson
            }
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ndjson" => Ok(ExportFormat::Ndjson),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unsupported export format: {}", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn resolve_with_logs(arg: Option<&str>) -> (ExportFormat, String) {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        let format = tracing::subscriber::with_default(subscriber, || ExportFormat::resolve(arg));
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (format, output)
    }

    #[test]
    fn test_resolve_known_formats_case_insensitive() {
        assert_eq!(ExportFormat::resolve(Some("csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::resolve(Some("JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::resolve(Some("NdJson")), ExportFormat::Ndjson);
    }

    #[test]
    fn test_resolve_unknown_defaults_to_ndjson() {
        assert_eq!(ExportFormat::resolve(Some("xml")), ExportFormat::Ndjson);
        assert_eq!(ExportFormat::resolve(Some("")), ExportFormat::Ndjson);
        assert_eq!(ExportFormat::resolve(None), ExportFormat::Ndjson);
    }

    #[test]
    fn test_unrecognised_format_logs_warning() {
        for (arg, shown) in [(Some("xml"), "xml"), (Some(""), ""), (None, "")] {
            let (format, output) = resolve_with_logs(arg);

            assert_eq!(format, ExportFormat::Ndjson);
            let expected = format!("Unknown format \"{}\", defaulting to NDJSON.", shown);
            let line = output
                .lines()
                .find(|line| line.contains(&expected))
                .unwrap_or_else(|| panic!("no warning for {:?} in {:?}", arg, output));
            assert!(line.contains("WARN"), "wrong level: {}", line);
        }
    }

    #[test]
    fn test_recognised_format_logs_nothing() {
        let (format, output) = resolve_with_logs(Some("csv"));

        assert_eq!(format, ExportFormat::Csv);
        assert!(output.is_empty(), "unexpected log output: {}", output);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_extension_and_display() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Ndjson.to_string(), "NDJSON");
    }
}
