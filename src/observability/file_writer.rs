//! Rotating log file writer with size-based rotation and backup retention.
//!
//! The writer is handed to the `fmt` layer as its
//! [`MakeWriter`](tracing_subscriber::fmt::MakeWriter). Every formatted event
//! arrives as a single write, so the size check happens between events and a
//! line is never split across files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds the size limit it is shifted to
/// `<name>.1`, older backups move up by one (`<name>.1` → `<name>.2`, ...) and
/// the oldest beyond the retention limit is removed.
///
/// ```rust,no_run
/// use eatgo::observability::FileWriter;
/// use std::io::Write;
/// use std::path::PathBuf;
///
/// let writer = FileWriter::new(PathBuf::from("/tmp/eatgo.log"));
/// (&writer).write_all(b"started\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened on first write.
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer using the default limits (10 MB, 3 backups).
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Writes a chunk to the file, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Fails on file system errors during rotation, open or write, and when the
    /// lock was poisoned by a panicking writer.
    pub fn write_chunk(&self, buf: &[u8]) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::other("No file available"))?;

        handle.write_all(buf)?;
        handle.flush()
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate_files(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        fs::rename(&self.file_path, self.backup_path(1))
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_chunk(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_append_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("eatgo.log"));

        writer.write_chunk(b"first\n").unwrap();
        writer.write_chunk(b"second\n").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_rotates_when_file_exceeds_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::with_limits(dir.path().join("eatgo.log"), 4, 3);

        writer.write_chunk(b"old line\n").unwrap();
        writer.write_chunk(b"new\n").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "new\n");
        assert_eq!(
            fs::read_to_string(writer.backup_path(1)).unwrap(),
            "old line\n"
        );
    }

    #[test]
    fn test_keeps_at_most_max_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::with_limits(dir.path().join("eatgo.log"), 1, 2);

        for line in ["a\n", "b\n", "c\n", "d\n", "e\n"] {
            writer.write_chunk(line.as_bytes()).unwrap();
        }

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "e\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "d\n");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "c\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn test_make_writer_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("eatgo.log"));

        writer.make_writer().write_all(b"event\n").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "event\n");
    }
}
