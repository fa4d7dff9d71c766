use tabfix_core::TabfixConfig;
use tracing::error;

pub fn run(_config: &TabfixConfig) -> Result<(), Box<dyn std::error::Error>> {
    error!(
        event = "app.unsupported_platform",
        os = std::env::consts::OS
    );
    Err(format!(
        "tabfix only runs on Windows (this is {})",
        std::env::consts::OS
    )
    .into())
}
