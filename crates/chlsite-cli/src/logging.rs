use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Maps `-v` occurrences and `-q` to the console level filter.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Level of the log file. `-q` only silences the console, and a file
/// always records at least the per-phase `info!` lines.
pub fn file_level_filter(verbosity: u8) -> LevelFilter {
    level_filter(verbosity.max(1), false)
}

/// Installs the global subscriber: a compact stderr layer, plus a plain-text
/// file layer when `log_file` is given. Each layer carries its own level.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let file_layer = log_file
        .map(|path| File::create(path).map_err(CliError::Io))
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_filter(file_level_filter(verbosity))
        });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(level_filter(verbosity, quiet));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{debug, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(3, false), LevelFilter::TRACE);
        assert_eq!(level_filter(9, false), LevelFilter::TRACE);
        assert_eq!(level_filter(2, true), LevelFilter::OFF);
    }

    #[test]
    fn log_file_records_at_least_info() {
        assert_eq!(file_level_filter(0), LevelFilter::INFO);
        assert_eq!(file_level_filter(1), LevelFilter::INFO);
        assert_eq!(file_level_filter(2), LevelFilter::DEBUG);
        assert_eq!(file_level_filter(4), LevelFilter::TRACE);
    }

    #[test]
    #[serial]
    fn global_logger_accepts_engine_events() {
        ensure_global_logger_is_set();

        warn!("Angle threshold is set to 75 degrees");
        info!(sites = 2, "Workflow complete");
        debug!(cofactor = "CLA", residue = 601, "Site classified");
        trace!(atom = "OD1", angle = 41.5, "Neighbor classified");
    }

    #[test]
    #[serial]
    fn file_layer_keeps_records_the_console_filters_out() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("chlsite.log");

        let file = File::create(&log_path).unwrap();
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_filter(file_level_filter(0));
        let console_layer = fmt::layer()
            .with_writer(std::io::sink)
            .with_filter(level_filter(0, true));
        let subscriber = tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            info!(sites = 3, "Site scan finished");
            debug!("Per-site detail");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Site scan finished"));
        assert!(content.contains("sites=3"));
        assert!(!content.contains("Per-site detail"));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = setup_logging(0, false, Some(temp_dir.path()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
