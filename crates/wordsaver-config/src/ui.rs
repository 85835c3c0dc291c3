use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Word Table".to_string()
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    600
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub window_title: String,
    #[serde(default = "default_width")]
    pub window_width: u32,
    #[serde(default = "default_height")]
    pub window_height: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: default_title(),
            window_width: default_width(),
            window_height: default_height(),
        }
    }
}
