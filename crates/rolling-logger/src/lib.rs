//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stderr and to a
//! size-rotated log file. Records emitted through the `log` facade are
//! bridged into the same subscriber.
//!
//! Files live in the given directory as `<name>.log`, `<name>.log.1`, ...
//! up to `<name>.log.<max_files>`; the oldest file is dropped on rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default size at which the active file is rotated
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;
/// Default number of rotated files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;

static LOGGER: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the global logger with default rotation limits.
///
/// Calling it again with the same directory is a no-op; a different
/// directory is rejected.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    init_logger_with_limits(log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
}

/// Initialize the global logger with explicit rotation limits.
pub fn init_logger_with_limits(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    max_bytes: u64,
    max_files: usize,
) -> Result<(), String> {
    let log_dir = log_dir.as_ref().to_path_buf();

    if let Some(existing) = LOGGER.get() {
        if *existing == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logger already initialized at {}",
            existing.display()
        ));
    }

    let file = RollingFile::new(&log_dir, app_name, max_bytes, max_files)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(LocalTime);
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(LocalTime);

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    tracing::info!(
        "Logging to {} (rotating at {} bytes, keeping {} files)",
        log_dir.display(),
        max_bytes,
        max_files
    );
    let _ = LOGGER.set(log_dir);
    Ok(())
}

/// Timestamps in local time, millisecond precision
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

// ========================
// Rotating file writer
// ========================

/// Shared handle to a size-rotated log file
#[derive(Clone)]
pub struct RollingFile {
    state: Arc<Mutex<RollingState>>,
}

struct RollingState {
    dir: PathBuf,
    base: String,
    max_bytes: u64,
    max_files: usize,
    file: Option<File>,
    written: u64,
}

impl RollingFile {
    pub fn new(dir: &Path, base: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let mut state = RollingState {
            dir: dir.to_path_buf(),
            base: base.to_string(),
            max_bytes: max_bytes.max(1),
            max_files: max_files.max(1),
            file: None,
            written: 0,
        };
        state.open()?;
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
        })
    }

    /// Path of the active log file
    pub fn active_path(&self) -> PathBuf {
        self.lock().path(0)
    }

    fn lock(&self) -> MutexGuard<'_, RollingState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RollingState {
    fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.base))
        } else {
            self.dir.join(format!("{}.log.{}", self.base, index))
        }
    }

    fn open(&mut self) -> io::Result<()> {
        let path = self.path(0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.written = file.metadata()?.len();
        self.file = Some(file);
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;

        let oldest = self.path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.path(index);
            if from.exists() {
                fs::rename(&from, self.path(index + 1))?;
            }
        }
        let active = self.path(0);
        if active.exists() {
            fs::rename(&active, self.path(1))?;
        }

        self.open()
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        if self.file.is_none() {
            self.open()?;
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Writer handed out per log event
pub struct RollingWriter {
    state: Arc<Mutex<RollingState>>,
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriter {
            state: self.state.clone(),
        }
    }
}
