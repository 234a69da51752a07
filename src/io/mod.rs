pub mod config_io;
pub mod gateway;
pub mod lock;
pub mod write_log;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default data directory: `$HOME/.tick`, falling back to `./.tick` when
/// HOME is unset (containers, bare environments).
pub fn default_data_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".tick"),
        None => PathBuf::from(".tick"),
    }
}

/// Create the data directory if it doesn't exist yet
pub fn ensure_data_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}
