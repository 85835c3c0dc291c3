use crate::error::TableError;
use crate::record::{Column, WordRecord};

/// In-memory copy of the word file, addressed by row position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    records: Vec<WordRecord>,
}

impl WordTable {
    pub fn new(records: Vec<WordRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&WordRecord> {
        self.records.get(row)
    }

    pub fn get_mut(&mut self, row: usize) -> Option<&mut WordRecord> {
        self.records.get_mut(row)
    }

    pub fn cell(&self, row: usize, column: Column) -> Option<&str> {
        self.records.get(row).map(|record| record.get(column))
    }

    pub fn delete_row(&mut self, row: usize) -> Result<WordRecord, TableError> {
        self.check_row(row)?;
        Ok(self.records.remove(row))
    }

    /// Overwrite one cell, returning the previous value
    pub fn set_cell(
        &mut self,
        row: usize,
        column: Column,
        value: impl Into<String>,
    ) -> Result<String, TableError> {
        self.check_row(row)?;
        Ok(self.records[row].set(column, value.into()))
    }

    pub fn rows_missing_meaning(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.needs_meaning())
            .map(|(i, _)| i)
            .collect()
    }

    fn check_row(&self, row: usize) -> Result<(), TableError> {
        if row < self.records.len() {
            Ok(())
        } else {
            Err(TableError::RowOutOfRange {
                row,
                len: self.records.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordTable {
        WordTable::new(vec![
            WordRecord::from_fields(["apple", "سیب", "", "", "N/A", "2"]),
            WordRecord::new("brisk"),
            WordRecord::new("apple pie"),
        ])
    }

    #[test]
    fn delete_removes_only_that_row() {
        let mut table = sample();
        let removed = table.delete_row(1).unwrap();
        assert_eq!(removed.word, "brisk");
        let words: Vec<_> = table.records().iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["apple", "apple pie"]);
    }

    #[test]
    fn delete_out_of_range() {
        let mut table = sample();
        assert_eq!(
            table.delete_row(3),
            Err(TableError::RowOutOfRange { row: 3, len: 3 })
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn edit_targets_row_not_matching_value() {
        // Two rows share the count "0"; editing row 2 must not touch row 1
        let mut table = sample();
        let old = table.set_cell(2, Column::Count, "7").unwrap();
        assert_eq!(old, "0");
        assert_eq!(table.cell(1, Column::Count), Some("0"));
        assert_eq!(table.cell(2, Column::Count), Some("7"));
    }

    #[test]
    fn edit_out_of_range() {
        let mut table = WordTable::default();
        assert!(table.set_cell(0, Column::Word, "x").is_err());
    }

    #[test]
    fn missing_meanings() {
        assert_eq!(sample().rows_missing_meaning(), vec![1, 2]);
    }
}
