//! Size-capped rolling log file
//!
//! A `Write` implementation that rotates the log file once the next write
//! would push it past the size cap: `webscraping.log` becomes
//! `webscraping.log.1`, existing backups shift up, and the oldest one past
//! the backup count is dropped. Cloning shares the same underlying file, so
//! the writer can serve as a `MakeWriter` for a fmt layer.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
pub struct RollingFileWriter {
    inner: Arc<Mutex<RollingFile>>,
}

struct RollingFile {
    file: File,
    len: u64,
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
}

impl RollingFileWriter {
    /// Opens `path` for appending, rotating at `max_bytes` and keeping at
    /// most `max_backups` numbered backups.
    pub fn new(path: PathBuf, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            inner: Arc::new(Mutex::new(RollingFile {
                file,
                len,
                path,
                max_bytes,
                max_backups,
            })),
        })
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, RollingFile>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))
    }
}

impl RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.len > 0 && self.len + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.len += written as u64;
        Ok(written)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_backups == 0 {
            self.file = File::create(&self.path)?;
            self.len = 0;
            return Ok(());
        }

        // Shift webscraping.log.{n} up by one, dropping the oldest.
        for index in (1..self.max_backups).rev() {
            let from = backup_path(&self.path, index);
            if from.exists() {
                std::fs::rename(&from, backup_path(&self.path, index + 1))?;
            }
        }
        std::fs::rename(&self.path, backup_path(&self.path, 1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.len = 0;
        Ok(())
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
