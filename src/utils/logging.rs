//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a timestamped file
//! under the platform data directory, with a `latest.log` symlink for
//! easy tailing.

use anyhow::Result;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use crate::utils::app_paths::AppPaths;

/// Writer handing every tracing line to a shared append-mode log file
#[derive(Clone)]
pub struct LogFileWriter {
    file: Arc<Mutex<File>>,
}

impl LogFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => file.write(buf),
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize tracing into a fresh timestamped log file.
///
/// Returns the log file path so `main` can announce it before the
/// alternate screen takes over. Default filter is `info`; `RUST_LOG`
/// overrides it.
pub fn init_tracing() -> Result<PathBuf> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_dir = AppPaths::log_dir()?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("salesboard_{}.log", timestamp));

    let latest_path = log_dir.join("latest.log");
    #[cfg(unix)]
    {
        let _ = std::fs::remove_file(&latest_path);
        let _ = std::os::unix::fs::symlink(&log_path, &latest_path);
    }
    #[cfg(not(unix))]
    {
        let _ = std::fs::write(&latest_path, format!("Current log file: {}\n", log_path.display()));
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let fmt_layer = fmt::layer()
        .with_writer(LogFileWriter::new(file))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!(target: "system", "Logging initialized");

    Ok(log_path)
}
