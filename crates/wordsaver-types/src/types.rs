use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A registered global hotkey was pressed
    Hotkey(HotkeyAction),
    /// Run the enrichment pass over the word file
    Enrich,
    /// Message for the user (desktop notification + log)
    Notify(Notice),
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    /// Save the clipboard word, then enrich missing rows
    SaveAndTranslate,
    /// Save the clipboard word only
    Save,
    /// Enrich rows that lack a meaning
    AutoComplete,
}

impl HotkeyAction {
    pub const ALL: [HotkeyAction; 3] = [
        HotkeyAction::SaveAndTranslate,
        HotkeyAction::Save,
        HotkeyAction::AutoComplete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HotkeyAction::SaveAndTranslate => "save and translate",
            HotkeyAction::Save => "save",
            HotkeyAction::AutoComplete => "auto-complete meanings",
        }
    }
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Message with the level marker used in notifications and the console
    pub fn display_text(&self) -> String {
        let marker = match self.level {
            NoticeLevel::Info => "🔹",
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️",
            NoticeLevel::Error => "❌",
        };
        format!("{marker} {}", self.message)
    }
}
