use wordsaver_core::{Column, WordRecord, WordStore, WordTable};
use wordsaver_types::Notice;

/// Editor state behind the window: the file, its rows, and unsaved changes
pub struct EditorSession {
    store: WordStore,
    table: Option<WordTable>,
    selected: Option<usize>,
    dirty: bool,
}

impl EditorSession {
    pub fn new(store: WordStore) -> Self {
        Self {
            store,
            table: None,
            selected: None,
            dirty: false,
        }
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn records(&self) -> &[WordRecord] {
        self.table.as_ref().map(|t| t.records()).unwrap_or_default()
    }

    pub fn cell(&self, row: usize, column: Column) -> Option<&str> {
        self.table.as_ref()?.cell(row, column)
    }

    pub fn select(&mut self, row: Option<usize>) {
        self.selected = row.filter(|row| *row < self.records().len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selection as the table widget's `current-row` (-1 for none)
    pub fn selected_row(&self) -> i32 {
        self.selected
            .and_then(|row| i32::try_from(row).ok())
            .unwrap_or(-1)
    }

    /// Read the file again, discarding unsaved edits. The old rows stay on failure.
    pub fn load(&mut self) -> Notice {
        match self.store.load() {
            Ok(table) => {
                let count = table.len();
                self.table = Some(table);
                self.selected = None;
                self.dirty = false;
                Notice::info(format!(
                    "Loaded {} words from {}",
                    count,
                    self.store.path().display()
                ))
            }
            Err(e) => Notice::error(format!("Failed to load CSV file: {e}")),
        }
    }

    pub fn save(&mut self) -> Notice {
        let Some(table) = &self.table else {
            return Notice::warning("No data to save!");
        };

        match self.store.save(table) {
            Ok(()) => {
                self.dirty = false;
                Notice::success("The changes have been saved successfully!")
            }
            Err(e) => Notice::error(format!("Failed to save CSV file: {e}")),
        }
    }

    pub fn delete_row(&mut self, row: Option<usize>) -> Notice {
        let (Some(row), Some(table)) = (row, self.table.as_mut()) else {
            return Notice::warning("Please select a row to delete.");
        };

        match table.delete_row(row) {
            Ok(removed) => {
                self.selected = None;
                self.dirty = true;
                tracing::debug!("Deleted row {} ('{}')", row, removed.word);
                Notice::success("The row has been deleted successfully!")
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Notice::warning("No matching row found to delete.")
            }
        }
    }

    pub fn edit_cell(&mut self, row: Option<usize>, column: Column, value: String) -> Notice {
        let (Some(row), Some(table)) = (row, self.table.as_mut()) else {
            return Notice::warning("Please select a row to edit.");
        };

        match table.set_cell(row, column, value) {
            Ok(old) => {
                self.dirty = true;
                tracing::debug!("Row {} {}: '{}' replaced", row, column, old);
                Notice::success("The cell has been edited successfully!")
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Notice::warning("No matching row found to edit.")
            }
        }
    }
}
