use serde::{Deserialize, Serialize};

fn default_save_and_translate() -> String {
    "Ctrl+Alt+0".to_string()
}

fn default_save() -> String {
    "Ctrl+Alt+1".to_string()
}

fn default_auto_complete() -> String {
    "Ctrl+Alt+2".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HotkeyConfig {
    #[serde(default = "default_save_and_translate")]
    pub save_and_translate: String,
    #[serde(default = "default_save")]
    pub save: String,
    #[serde(default = "default_auto_complete")]
    pub auto_complete: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            save_and_translate: default_save_and_translate(),
            save: default_save(),
            auto_complete: default_auto_complete(),
        }
    }
}
