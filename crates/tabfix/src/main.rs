use tabfix_core::config::load_config_with_warning;
use tabfix_core::events;
use tabfix_core::init_logging;

mod platform;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config comes first: it decides where logs go
    let config = load_config_with_warning();
    init_logging(config.logging.quiet, config.logging.file.as_deref());
    events::log_app_startup(&config);

    if let Err(e) = platform::run(&config) {
        events::log_app_error(e.as_ref());
        return Err(e);
    }

    events::log_app_shutdown();
    Ok(())
}
