use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::StoreError;
use crate::record::{HEADER, WordRecord};
use crate::table::WordTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

/// The CSV word file. Every call opens the file afresh; nothing is cached.
#[derive(Debug, Clone)]
pub struct WordStore {
    path: PathBuf,
}

impl WordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the file with its header row, or add the header to an empty file.
    /// Returns false if a non-empty file already existed.
    pub fn initialize(&self) -> Result<bool, StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if fs::metadata(&self.path)?.len() > 0 {
                    return Ok(false);
                }
                OpenOptions::new().append(true).open(&self.path)?
            }
            Err(e) => return Err(e.into()),
        };

        let mut writer = WriterBuilder::new().from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;
        tracing::info!("Created words file {}", self.path.display());
        Ok(true)
    }

    /// Linear scan of the Word column
    pub fn contains(&self, word: &str) -> Result<bool, StoreError> {
        match self.read_records() {
            Ok(records) => Ok(records.iter().any(|record| record.word == word)),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Append a blank record for `word` unless it is already stored
    pub fn add_word(&self, word: &str) -> Result<AddOutcome, StoreError> {
        self.initialize()?;

        if self.contains(word)? {
            tracing::debug!("'{}' already stored", word);
            return Ok(AddOutcome::Duplicate);
        }

        let mut file = OpenOptions::new().read(true).append(true).open(&self.path)?;
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut writer = WriterBuilder::new().from_writer(file);
        writer.write_record(WordRecord::new(word).fields())?;
        writer.flush()?;

        tracing::debug!("Appended '{}' to {}", word, self.path.display());
        Ok(AddOutcome::Added)
    }

    pub fn load(&self) -> Result<WordTable, StoreError> {
        Ok(WordTable::new(self.read_records()?))
    }

    /// Rewrite the whole file from `table` (header first)
    pub fn save(&self, table: &WordTable) -> Result<(), StoreError> {
        let tmp_path = self.temp_path();

        {
            let mut writer = WriterBuilder::new().from_path(&tmp_path)?;
            writer.write_record(HEADER)?;
            for record in table.records() {
                writer.write_record(record.fields())?;
            }
            writer.flush()?;
        }

        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(
            "Saved {} rows to {}",
            table.len(),
            self.path.display()
        );
        Ok(())
    }

    fn read_records(&self) -> Result<Vec<WordRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            let row = row?;
            if i == 0 && is_header(&row) {
                continue;
            }
            records.push(WordRecord::from_fields(row.iter()));
        }

        Ok(records)
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "words.csv".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

fn is_header(row: &StringRecord) -> bool {
    row.get(0)
        .map(|cell| cell.trim_start_matches('\u{feff}') == HEADER[0])
        .unwrap_or(false)
}

fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Column;

    fn store_in(dir: &tempfile::TempDir) -> WordStore {
        WordStore::new(dir.path().join("words.csv"))
    }

    #[test]
    fn initialize_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.initialize().unwrap());
        assert!(!store.initialize().unwrap());

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "Word,Meaning,Synonyms,Antonyms,Example,Count\n");
    }

    #[test]
    fn empty_file_gets_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "").unwrap();

        assert!(store.initialize().unwrap());
        assert_eq!(store.add_word("gleam").unwrap(), AddOutcome::Added);

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            text,
            "Word,Meaning,Synonyms,Antonyms,Example,Count\ngleam,,,,,0\n"
        );
    }

    #[test]
    fn initialize_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordStore::new(dir.path().join("nested/deeper/words.csv"));
        assert!(store.initialize().unwrap());
        assert!(store.exists());
    }

    #[test]
    fn add_word_appends_blank_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.add_word("resilient").unwrap(), AddOutcome::Added);

        let table = store.load().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0], WordRecord::new("resilient"));
    }

    #[test]
    fn add_word_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add_word("resilient").unwrap();
        assert_eq!(store.add_word("resilient").unwrap(), AddOutcome::Duplicate);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn header_word_is_not_a_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        assert!(!store.contains("Word").unwrap());
        assert_eq!(store.add_word("Word").unwrap(), AddOutcome::Added);
    }

    #[test]
    fn contains_on_missing_file_is_false() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!store_in(&dir).contains("anything").unwrap());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn load_tolerates_bom_and_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "\u{feff}Word,Meaning,Synonyms,Antonyms,Example,Count\nbrisk,\ncalm,آرام,\"still, quiet\",agitated,N/A,4\n",
        )
        .unwrap();

        let table = store.load().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].word, "brisk");
        assert_eq!(table.records()[0].count, "");
        assert_eq!(table.cell(1, Column::Synonyms), Some("still, quiet"));
        assert_eq!(table.cell(1, Column::Count), Some("4"));
    }

    #[test]
    fn append_after_missing_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "Word,Meaning,Synonyms,Antonyms,Example,Count\nbrisk,,,,,0",
        )
        .unwrap();

        store.add_word("calm").unwrap();

        let words: Vec<_> = store
            .load()
            .unwrap()
            .records()
            .iter()
            .map(|r| r.word.clone())
            .collect();
        assert_eq!(words, ["brisk", "calm"]);
    }

    #[test]
    fn save_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add_word("brisk").unwrap();
        store.add_word("calm").unwrap();

        let mut table = store.load().unwrap();
        table.delete_row(0).unwrap();
        table.set_cell(0, Column::Meaning, "آرام").unwrap();
        store.save(&table).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, table);
        assert!(!dir.path().join(".words.csv.tmp").exists());
    }
}
