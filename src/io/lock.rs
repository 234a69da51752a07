use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Advisory lock on the data directory.
///
/// items.json has exactly one writer per process; the lock keeps a second
/// `tk` instance from interleaving its own writes. Uses platform-native
/// flock on Unix, a successful no-op elsewhere.
pub struct DataLock {
    _file: File,
    path: PathBuf,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not lock {path}: another tick instance is running")]
    Held { path: PathBuf },
}

impl DataLock {
    /// Acquire the data-dir lock, waiting up to `timeout` for a holder to
    /// release it.
    pub fn acquire(data_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let lock_path = data_dir.join(".lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LockError::CreateError {
                path: lock_path.clone(),
                source: e,
            })?;

        let start = Instant::now();
        loop {
            match try_lock(&file) {
                Ok(()) => {
                    return Ok(DataLock {
                        _file: file,
                        path: lock_path,
                    });
                }
                Err(_) if start.elapsed() < timeout => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(_) => return Err(LockError::Held { path: lock_path }),
            }
        }
    }

    /// Acquire with the default timeout (2 seconds)
    pub fn acquire_default(data_dir: &Path) -> Result<Self, LockError> {
        Self::acquire(data_dir, Duration::from_secs(2))
    }
}

impl Drop for DataLock {
    fn drop(&mut self) {
        // flock releases with the file descriptor; the lock file itself is
        // just a marker we can clean up
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(unix)]
fn try_lock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let fd = file.as_raw_fd();
    let result = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_lock(_file: &File) -> Result<(), std::io::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn acquire_and_reacquire_after_drop() {
        let tmp = TempDir::new().unwrap();

        let lock = DataLock::acquire_default(tmp.path());
        assert!(lock.is_ok());
        drop(lock);

        assert!(DataLock::acquire_default(tmp.path()).is_ok());
    }

    #[test]
    fn second_acquire_times_out_while_held() {
        let tmp = TempDir::new().unwrap();
        let _held = DataLock::acquire_default(tmp.path()).unwrap();

        let second = DataLock::acquire(tmp.path(), Duration::from_millis(50));
        assert!(second.is_err());
    }
}
