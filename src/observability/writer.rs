//! Append-only line log with size-based rotation.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Rotate once the live file grows past this many bytes.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const DEFAULT_KEEP: usize = 3;

/// Writes newline-terminated records to `path`, moving the file aside as
/// `<name>.<timestamp>` when it exceeds `max_bytes`.
///
/// The handle is opened lazily so construction never touches the disk.
#[derive(Debug)]
pub struct RotatingLog {
    path: PathBuf,
    max_bytes: u64,
    keep: usize,
    file: Option<File>,
}

impl RotatingLog {
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_KEEP)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, keep: usize) -> Self {
        Self {
            path,
            max_bytes,
            keep,
            file: None,
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Any I/O error from rotating, opening or writing the file.
    pub fn append(&mut self, line: &str) -> io::Result<()> {
        let full = fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes);
        if full {
            self.file = None;
            self.rotate()?;
        }

        let file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?,
        };
        let file = self.file.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.9f");
        let mut rotated = self.path.clone().into_os_string();
        rotated.push(format!(".{stamp}"));
        fs::rename(&self.path, PathBuf::from(rotated))?;
        self.prune()
    }

    /// Deletes the oldest rotated files beyond `keep`.
    fn prune(&self) -> io::Result<()> {
        let (Some(dir), Some(name)) = (
            self.path.parent(),
            self.path.file_name().and_then(|n| n.to_str()),
        ) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut rotated: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexically, newest last.
        rotated.sort();
        let excess = rotated.len().saturating_sub(self.keep);
        for old in rotated.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn rotated_count(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count()
    }

    #[test]
    fn appends_one_record_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut log = RotatingLog::new(path.clone());

        log.append(r#"{"a":1}"#).unwrap();
        log.append(r#"{"b":2}"#).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec![r#"{"a":1}"#, r#"{"b":2}"#]);
    }

    #[test]
    fn rotates_when_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut log = RotatingLog::with_limits(path.clone(), 8, 3);

        log.append("0123456789").unwrap();
        log.append("next").unwrap();

        assert_eq!(rotated_count(dir.path()), 1);
        assert_eq!(fs::read_to_string(path).unwrap(), "next\n");
    }

    #[test]
    fn keeps_only_newest_rotations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut log = RotatingLog::with_limits(path, 1, 2);

        for i in 0..6 {
            log.append(&format!("record-{i}")).unwrap();
        }

        assert_eq!(rotated_count(dir.path()), 2);
    }
}
