use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::hotkey::HotkeyConfig;
use self::lookup::LookupConfig;
use self::notification::NotificationConfig;
use self::store::StoreConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod hotkey;
pub mod lookup;
pub mod notification;
pub mod profile;
pub mod store;
pub mod translator;
pub mod ui;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub hotkeys: HotkeyConfig,
    pub translator: TranslatorConfig,
    pub lookup: LookupConfig,
    pub notification: NotificationConfig,
    pub ui: UiConfig,

    /// Hotkey poll interval in milliseconds
    pub delta_time: u64,
    /// HTTP request timeout for lookups
    pub timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config {
            store: StoreConfig::default(),
            hotkeys: HotkeyConfig::default(),
            translator: TranslatorConfig::default(),
            lookup: LookupConfig::default(),
            notification: NotificationConfig::default(),
            ui: UiConfig::default(),

            delta_time: 50,      // 50ms default
            timeout_seconds: 10, // 10 seconds default
        };
        config.apply_env_from(lookup);
        config
    }

    /// Override fields from `WORDS_FILE`, `DELTA_TIME_MS` and `TIMEOUT_SECONDS`
    pub(crate) fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(delta_time) = lookup("DELTA_TIME_MS").and_then(|v| v.parse().ok()) {
            self.delta_time = delta_time;
        }

        if let Some(timeout) = lookup("TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.timeout_seconds = timeout;
        }

        if let Some(path) = lookup("WORDS_FILE")
            && !path.trim().is_empty()
        {
            self.store.path = PathBuf::from(path);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_with(&[]);
        assert_eq!(config.store.path, PathBuf::from("words.csv"));
        assert_eq!(config.delta_time, 50);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.translator.to_lang, "fa");
        assert_eq!(config.hotkeys.save, "Ctrl+Alt+1");
        assert_eq!(config.notification.title, "Word Saver");
    }

    #[test]
    fn env_overrides() {
        let config = config_with(&[
            ("WORDS_FILE", "/tmp/vocab.csv"),
            ("DELTA_TIME_MS", "200"),
            ("TIMEOUT_SECONDS", "3"),
        ]);
        assert_eq!(config.store.path, PathBuf::from("/tmp/vocab.csv"));
        assert_eq!(config.delta_time, 200);
        assert_eq!(config.timeout_seconds, 3);
    }

    #[test]
    fn unparsable_env_falls_back() {
        let config = config_with(&[("DELTA_TIME_MS", "soon"), ("WORDS_FILE", "  ")]);
        assert_eq!(config.delta_time, 50);
        assert_eq!(config.store.path, PathBuf::from("words.csv"));
    }

    #[test]
    fn env_overrides_loaded_values() {
        let mut config: Config =
            serde_json::from_str(r#"{ "store": { "path": "saved.csv" }, "delta_time": 80 }"#)
                .unwrap();
        config.apply_env_from(|key| (key == "WORDS_FILE").then(|| "/tmp/elsewhere.csv".to_string()));

        assert_eq!(config.store.path, PathBuf::from("/tmp/elsewhere.csv"));
        assert_eq!(config.delta_time, 80);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "translator": { "to_lang": "de" }, "lookup": { "enabled": false } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.translator.to_lang, "de");
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.translator.provider, "google");
        assert!(!config.lookup.enabled);
        assert_eq!(config.lookup.max_results, 100);
        assert_eq!(config.hotkeys.auto_complete, "Ctrl+Alt+2");
    }
}
