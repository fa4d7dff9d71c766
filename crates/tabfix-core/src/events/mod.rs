//! Lifecycle events shared by every entry point.

use tracing::{error, info};

use crate::config::TabfixConfig;

pub fn log_app_startup(config: &TabfixConfig) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        trigger = %config.hotkey.trigger,
        alternate = ?config.hotkey.alternate,
        tray = config.tray.enabled,
        capacity = config.filter.capacity
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}
