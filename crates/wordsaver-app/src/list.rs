use std::fmt::Write;

use wordsaver_core::{StoreError, WordStore, WordTable};

pub fn render(store: &WordStore) -> String {
    match store.load() {
        Ok(table) => render_table(&table),
        Err(StoreError::NotFound(_)) => "❌ Words file not found!".to_string(),
        Err(e) => format!("❌ Error: {e}"),
    }
}

fn render_table(table: &WordTable) -> String {
    if table.is_empty() {
        return "❌ No words have been saved yet.".to_string();
    }

    let mut out = String::from("📖 Stored word list:\n");
    for (i, record) in table.records().iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. {} - {} | Synonyms: {} | Antonyms: {} | Example: {}",
            i + 1,
            record.word,
            or_placeholder(&record.meaning, "🔹 (No meaning)"),
            or_placeholder(&record.synonyms, "N/A"),
            or_placeholder(&record.antonyms, "N/A"),
            or_placeholder(&record.example, "N/A"),
        );
    }
    out
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}
