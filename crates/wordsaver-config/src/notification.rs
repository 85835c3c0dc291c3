use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_title() -> String {
    "Word Saver".to_string()
}

fn default_timeout_ms() -> u32 {
    2000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NotificationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            title: default_title(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
