use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};
use std::path::Path;

/// Starts the global logger. `RUST_LOG` wins over `level` when set.
///
/// With a `log_dir`, records go to rotating files there (10 MB, numbered, one
/// kept); otherwise to stderr. Keep the returned handle alive until exit.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(1),
            ),
        None => logger.format(flexi_logger::colored_default_format),
    };
    logger.start()
}
