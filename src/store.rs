// src/store.rs
//
// Daily append-only record log: one JSON object per line, one line per symbol.
//
// Lines already on disk are never rewritten. Each `append` is a single write
// of a complete line, so a crash leaves every earlier line intact and the
// in-flight symbol simply absent; the next run picks it up again.
//
// Loading is strict: one unreadable line fails the whole load. Skipping it
// would silently re-scrape (and duplicate) whatever symbol it held.

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{file, record::Record, Error, Result};

pub struct RecordStore {
    path: PathBuf,
    symbols: Vec<String>,
    file: Option<File>,
}

impl RecordStore {
    /// Load whatever is already stored at `path`. A missing file is an empty
    /// store; it is created on the first append.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let symbols = load(&path)?
            .into_iter()
            .map(|r| r.symbol().to_string())
            .collect::<Vec<_>>();
        debug!("Loaded {} stored records from {}.", symbols.len(), path.display());
        Ok(Self { path, symbols, file: None })
    }

    pub fn path(&self) -> &Path { &self.path }
    pub fn len(&self) -> usize { self.symbols.len() }
    pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

    /// Symbol of every stored record, in store order. One entry per record,
    /// so a symbol appended twice shows up twice.
    pub fn scraped_symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn append(&mut self, record: &Record) -> Result<()> {
        let line = serde_json::to_string(record)?;
        let file = match &mut self.file {
            Some(f) => f,
            slot @ None => slot.insert(file::open_append(&self.path)?),
        };
        file::append_line(file, &self.path, &line)?;
        self.symbols.push(record.symbol().to_string());
        Ok(())
    }
}

/// Decode every line of the store at `path`, top to bottom.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(path, e)),
    };

    text.lines()
        .enumerate()
        .map(|(i, line)| {
            Record::from_line(line).map_err(|reason| Error::StoreDecode {
                path: path.to_path_buf(),
                line: i + 1,
                reason,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 4).unwrap()
    }

    #[test]
    fn missing_file_is_empty_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2021-01-04.json");
        let store = RecordStore::open(&path).unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn appends_survive_reopen_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/2021-01-04.json");

        let mut store = RecordStore::open(&path).unwrap();
        let a = Record::builder("A").field(s!("beta"), Value::Number(1.1)).build(day());
        store.append(&a).unwrap();
        store.append(&Record::builder("B").build(day())).unwrap();
        assert_eq!(store.scraped_symbols(), ["A", "B"]);
        drop(store);

        let mut store = RecordStore::open(&path).unwrap();
        assert_eq!(store.scraped_symbols(), ["A", "B"]);
        store.append(&Record::builder("C").build(day())).unwrap();

        let records = load(&path).unwrap();
        let symbols: Vec<&str> = records.iter().map(Record::symbol).collect();
        assert_eq!(symbols, ["A", "B", "C"]);
        assert_eq!(records[0], a);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn undecodable_line_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"ticker\":\"A\"}\n{\"ticker\":\n{\"ticker\":\"C\"}\n").unwrap();

        match RecordStore::open(&path) {
            Err(Error::StoreDecode { line, .. }) => assert_eq!(line, 2),
            Err(e) => panic!("wrong error: {e}"),
            Ok(_) => panic!("corrupt store loaded"),
        }
    }

    #[test]
    fn blank_line_is_not_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, "{\"ticker\":\"A\"}\n\n").unwrap();
        assert!(matches!(load(&path), Err(Error::StoreDecode { line: 2, .. })));
    }
}
