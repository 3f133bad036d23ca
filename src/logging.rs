//! File-backed logging.
//!
//! The game owns the terminal in raw alternate-screen mode, so log records
//! go to a file instead of stderr. Level comes from `LOG_LEVEL`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use env_logger::fmt::Formatter;
use env_logger::{Env, Target, WriteStyle};
use log::Record;

const DEBUG_LOG_LEVEL: &str = "debug";
const RELEASE_LOG_LEVEL: &str = "info";
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Default log path next to the score file.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("grid-snake");
    base.push(LOG_FILE_NAME);
    base
}

/// Installs the global logger writing to `path`.
///
/// When the file cannot be opened the error is returned and nothing is
/// installed; the `log` macros then become no-ops.
pub fn init_logger(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    let default_level = if cfg!(debug_assertions) {
        DEBUG_LOG_LEVEL
    } else {
        RELEASE_LOG_LEVEL
    };

    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV, default_level))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format(format)
        .try_init()
        .map_err(io::Error::other)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn format(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    writeln!(
        buf,
        "{} {:<5} {}: {}",
        buf.timestamp_millis(),
        record.level(),
        record.target(),
        record.args()
    )
}
