use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Crates whose debug output drowns ours
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "h2"];

/// Initialize the global logger.
///
/// `log_file` switches output from stdout to an appended file; colors only
/// apply to stdout.
#[track_caller]
pub fn initialize(
    log_level: eh_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref path) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(open_log_file(path)?),
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        // systemd and docker capture stdout without a TTY
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    let root = QUIET_TARGETS.iter().fold(
        Dispatch::new().level(level_filter),
        |dispatch, target| dispatch.level_for(*target, level_filter.min(LevelFilter::Info)),
    );

    root.chain(output).apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to install logger: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match log_file {
        Some(ref path) => info!("Logging at {} to {}", level_filter, path.display()),
        None => info!("Logging at {} to stdout", level_filter),
    }

    // Libraries that emit tracing events still reach fern
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn write_line(
    out: FormatCallback,
    message: &std::fmt::Arguments,
    record: &Record,
    level: impl Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.target(),
    ))
}

#[track_caller]
fn open_log_file(path: &Path) -> ServerErrorResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })
}
