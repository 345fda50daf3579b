//! Diagnostic logging for the terminal client.
//!
//! The TUI owns stdout, so tracing output only goes to a file and only when
//! one is requested with `--debug-log`.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "palaver=info";

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global tracing subscriber writing to `path`.
///
/// With no path nothing is installed and all events are dropped.
pub fn init_tracing(path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)?;

    tracing::info!(path = %path.display(), "debug logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn no_path_installs_nothing() {
        assert!(init_tracing(None).is_ok());
    }

    #[test]
    fn log_file_is_created_and_appended() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("debug.log");

        let mut file = open_log_file(&path).expect("create");
        writeln!(file, "first").expect("write");
        drop(file);
        let mut file = open_log_file(&path).expect("reopen");
        writeln!(file, "second").expect("write");
        drop(file);

        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "first\nsecond\n"
        );
    }

    #[test]
    fn directory_path_is_rejected() {
        let temp_dir = TempDir::new().expect("temp dir");
        assert!(init_tracing(Some(temp_dir.path())).is_err());
    }
}
