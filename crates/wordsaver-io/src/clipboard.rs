use anyhow::Context;
use arboard::Clipboard;

/// Current clipboard text, `None` when the clipboard holds no text
pub fn read_text() -> anyhow::Result<Option<String>> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;

    match clipboard.get_text() {
        Ok(text) if text.is_empty() => Ok(None),
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e).context("Failed to read clipboard text"),
    }
}
