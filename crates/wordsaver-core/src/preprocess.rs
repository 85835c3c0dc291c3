use unicode_normalization::UnicodeNormalization;

/// Clean up captured clipboard text before it becomes a word key.
///
/// Returns an empty string when nothing usable was captured.
pub fn normalize_capture(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect();

    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize_capture("  serendipity \n"), "serendipity");
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(normalize_capture(" \t\r\n "), "");
    }

    #[test]
    fn joins_lines() {
        assert_eq!(normalize_capture("take\r\n  off"), "take off");
    }

    #[test]
    fn folds_compatibility_forms() {
        // full-width latin letters
        assert_eq!(normalize_capture("ｗｏｒｄ"), "word");
    }
}
