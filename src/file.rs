// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    path::Path,
};

use crate::{Error, Result};

/// Create `dir` (and parents) if missing; fail if something else is in the way.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("Path exists but is not a directory: {}", dir.display());
        return Err(Error::io(dir, std::io::Error::other(msg)));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// Open for appending, creating the file if needed. Never truncates.
pub fn open_append(path: &Path) -> Result<File> {
    ensure_parent(path)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))
}

/// Append `line` plus a newline in a single write.
pub fn append_line(file: &mut File, path: &Path, line: &str) -> Result<()> {
    let buf = join!(line, "\n");
    file.write_all(buf.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.jsonl");

        let mut f = open_append(&path).unwrap();
        append_line(&mut f, &path, "one").unwrap();
        drop(f);

        let mut f = open_append(&path).unwrap();
        append_line(&mut f, &path, "two").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "x").unwrap();
        assert!(matches!(ensure_directory(&blocker), Err(Error::Io { .. })));
    }
}
