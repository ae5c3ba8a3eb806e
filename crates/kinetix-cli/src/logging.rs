use crate::error::{CliError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    prelude::*,
};

/// Target prefix shared by the library and the binary; dependencies stay at `WARN`.
const OWN_TARGET: &str = "kinetix";

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbosity) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn console_targets(level: LevelFilter) -> Targets {
    Targets::new()
        .with_default(LevelFilter::WARN.min(level))
        .with_target(OWN_TARGET, level)
}

/// The log file records the library at `DEBUG` or finer regardless of the
/// console level.
fn file_targets(level: LevelFilter) -> Targets {
    Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target(OWN_TARGET, level.max(LevelFilter::DEBUG))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path).map_err(CliError::Io)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = level_filter(verbosity, quiet);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_targets(level));

    let file_layer = match log_file {
        Some(path) => {
            let file = open_log_file(&path)?;
            let layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_filter(file_targets(level));
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{Level, debug, info};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(0, true, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn console_shows_dependencies_only_at_warn() {
        let targets = console_targets(LevelFilter::TRACE);
        assert!(targets.would_enable("kinetix::workflows::scan", &Level::TRACE));
        assert!(!targets.would_enable("indicatif", &Level::INFO));
        assert!(targets.would_enable("indicatif", &Level::WARN));
    }

    #[test]
    fn quiet_console_still_reports_errors_only() {
        let targets = console_targets(level_filter(0, true));
        assert!(targets.would_enable("kinetix", &Level::ERROR));
        assert!(!targets.would_enable("kinetix", &Level::WARN));
        assert!(!targets.would_enable("csv", &Level::WARN));
    }

    #[test]
    fn file_keeps_debug_records_of_a_quiet_run() {
        let targets = file_targets(level_filter(0, true));
        assert!(targets.would_enable("kinetix::kinetics", &Level::DEBUG));
        assert!(!targets.would_enable("kinetix::kinetics", &Level::TRACE));
    }

    #[test]
    #[serial]
    fn file_layer_writes_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("scan.log");

        let file = open_log_file(&log_path).unwrap();
        let layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_filter(file_targets(LevelFilter::WARN));
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!(target: "kinetix::workflows", "Scan point evaluated.");
            info!(target: "reqwest", "Dropped by the target filter.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Scan point evaluated."));
        assert!(content.contains("DEBUG"));
        assert!(!content.contains("Dropped by the target filter."));
    }

    #[test]
    #[serial]
    fn second_initialization_is_reported() {
        ensure_global_logger_is_set();
        assert!(matches!(
            setup_logging(1, false, None),
            Err(CliError::Other(_))
        ));
    }

    #[test]
    #[serial]
    fn directory_as_log_file_propagates_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = setup_logging(0, false, Some(temp_dir.path().to_path_buf()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
