use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode and log file.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
///
/// The overlay runs as a background process that usually has no console, so
/// events can be appended to `log_file` instead of stderr. If the file cannot
/// be opened, logging falls back to stderr.
pub fn init_logging(quiet: bool, log_file: Option<&Path>) {
    let directive = if quiet { "tabfix=error" } else { "tabfix=info" };

    let writer = match log_file.map(open_log_file) {
        Some(Ok(file)) => BoxMakeWriter::new(file),
        Some(Err(e)) => {
            eprintln!("Warning: Could not open log file: {}. Logging to stderr.", e);
            BoxMakeWriter::new(std::io::stderr)
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<std::sync::Mutex<std::fs::File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(std::sync::Mutex::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("logs").join("tabfix.log");

        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());
    }
}
