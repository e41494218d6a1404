//! Stderr logging. Stdout belongs to the page.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

const DEFAULT_LEVEL: &str = "warn";

/// Start the logger. An explicit level wins over `RUST_LOG`.
/// The returned handle must stay alive for the rest of the run.
pub fn start(level: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = match level {
        Some(level) => Logger::try_with_str(level)?,
        None => Logger::try_with_env_or_str(DEFAULT_LEVEL)?,
    };
    logger
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}
