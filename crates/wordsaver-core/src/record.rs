use std::fmt;

pub const HEADER: [&str; 6] = ["Word", "Meaning", "Synonyms", "Antonyms", "Example", "Count"];

/// Column of the word file, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Word,
    Meaning,
    Synonyms,
    Antonyms,
    Example,
    Count,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Word,
        Column::Meaning,
        Column::Synonyms,
        Column::Antonyms,
        Column::Example,
        Column::Count,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        HEADER[self.index()]
    }

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One row of the word file. Every field is free text; `count` is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub meaning: String,
    pub synonyms: String,
    pub antonyms: String,
    pub example: String,
    pub count: String,
}

impl WordRecord {
    /// Freshly captured word: everything blank except the word and a zero count
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            count: "0".to_string(),
            ..Default::default()
        }
    }

    /// Build from raw cells, padding short rows and dropping extra cells
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::default();
        for (column, value) in Column::ALL.into_iter().zip(fields) {
            record.set(column, value.into());
        }
        record
    }

    pub fn fields(&self) -> [&str; 6] {
        [
            &self.word,
            &self.meaning,
            &self.synonyms,
            &self.antonyms,
            &self.example,
            &self.count,
        ]
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Word => &self.word,
            Column::Meaning => &self.meaning,
            Column::Synonyms => &self.synonyms,
            Column::Antonyms => &self.antonyms,
            Column::Example => &self.example,
            Column::Count => &self.count,
        }
    }

    /// Replace a cell, returning the previous value
    pub fn set(&mut self, column: Column, value: String) -> String {
        let slot = match column {
            Column::Word => &mut self.word,
            Column::Meaning => &mut self.meaning,
            Column::Synonyms => &mut self.synonyms,
            Column::Antonyms => &mut self.antonyms,
            Column::Example => &mut self.example,
            Column::Count => &mut self.count,
        };
        std::mem::replace(slot, value)
    }

    pub fn needs_meaning(&self) -> bool {
        self.meaning.trim().is_empty()
    }
}
