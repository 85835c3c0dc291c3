use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::Config;

const MAIN_PROFILE: &str = "main";

/// Load the default config shipped in the repo, if present
fn load_repo_default_config() -> anyhow::Result<Config> {
    let path = Path::new("config.json");
    if path.exists() {
        tracing::info!("Loading repo default config...");
        load_config_file(path)
    } else {
        tracing::debug!("No repo config.json, using built-in defaults");
        Ok(Config::new())
    }
}

/// Load a bare config file (not wrapped in a profile)
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Config for a binary: an explicit file wins, otherwise the named user profile.
/// Environment overrides apply on top of either.
pub fn resolve_config(config_file: Option<&Path>, profile: &str) -> anyhow::Result<Config> {
    resolve_config_with(config_file, profile, |key| env::var(key).ok())
}

fn resolve_config_with(
    config_file: Option<&Path>,
    profile: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let mut config = match config_file {
        Some(path) => load_config_file(path)?,
        None => {
            let profiles = ProfileStore::default_location()?;
            profiles.init()?;
            profiles.load(profile)?
        }
    };

    config.apply_env_from(lookup);
    Ok(config)
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Named JSON profiles under the user's config directory
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform config dir, e.g. `~/.config/wordsaver` on Linux
    pub fn default_location() -> anyhow::Result<Self> {
        let dirs = ProjectDirs::from("", "", "wordsaver")
            .context("Could not determine the user config directory")?;
        Ok(Self::new(dirs.config_dir()))
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Initialize user config folders and main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())?;

        let main_profile = self.profile_path(MAIN_PROFILE);

        if !main_profile.exists() {
            let default_config = load_repo_default_config()?;
            self.write_profile(MAIN_PROFILE, default_config)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a user profile by name, defaulting to main if name not found
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);

        if profile_file.exists() {
            read_profile(&profile_file)
        } else {
            tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
            let main_file = self.profile_path(MAIN_PROFILE);
            if main_file.exists() {
                read_profile(&main_file)
            } else {
                load_repo_default_config()
            }
        }
    }

    /// Add a new profile cloned from main (or repo default if main missing)
    pub fn add_from_default(&self, new_name: &str) -> anyhow::Result<PathBuf> {
        let default_config = self.load(MAIN_PROFILE)?;
        let file = self.write_profile(new_name, default_config)?;
        tracing::info!("Created new profile: {new_name}");
        Ok(file)
    }

    fn write_profile(&self, name: &str, value: Config) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(self.profiles_dir())?;
        let profile = Profile {
            name: name.into(),
            value,
        };
        let file = self.profile_path(name);
        fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
        Ok(file)
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;
    Ok(profile.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_main_profile_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        store.init().unwrap();
        let main = store.profiles_dir().join("main.json");
        assert!(main.exists());

        fs::write(
            &main,
            r#"{ "name": "main", "value": { "translator": { "to_lang": "de" } } }"#,
        )
        .unwrap();
        store.init().unwrap();

        let config = store.load("main").unwrap();
        assert_eq!(config.translator.to_lang, "de");
    }

    #[test]
    fn unknown_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(store.profiles_dir()).unwrap();
        fs::write(
            store.profiles_dir().join("main.json"),
            r#"{ "name": "main", "value": { "delta_time": 75 } }"#,
        )
        .unwrap();

        let config = store.load("work").unwrap();
        assert_eq!(config.delta_time, 75);
    }

    #[test]
    fn add_profile_copies_main() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(store.profiles_dir()).unwrap();
        fs::write(
            store.profiles_dir().join("main.json"),
            r#"{ "name": "main", "value": { "lookup": { "max_results": 5 } } }"#,
        )
        .unwrap();

        let path = store.add_from_default("travel").unwrap();
        assert!(path.ends_with("travel.json"));
        assert_eq!(store.load("travel").unwrap().lookup.max_results, 5);
    }

    #[test]
    fn explicit_file_wins_over_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "timeout_seconds": 4 }"#).unwrap();

        let config = resolve_config_with(Some(&path), "ignored", |_| None).unwrap();
        assert_eq!(config.timeout_seconds, 4);
    }

    #[test]
    fn env_overrides_apply_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "store": { "path": "a.csv" }, "timeout_seconds": 4 }"#).unwrap();

        let config = resolve_config_with(Some(&path), "ignored", |key| match key {
            "WORDS_FILE" => Some("/tmp/elsewhere.csv".to_string()),
            "TIMEOUT_SECONDS" => Some("7".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/elsewhere.csv"));
        assert_eq!(config.timeout_seconds, 7);
    }

    #[test]
    fn env_overrides_apply_after_main_profile_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(store.profiles_dir()).unwrap();
        fs::write(
            store.profiles_dir().join("main.json"),
            r#"{ "name": "main", "value": { "store": { "path": "words.csv" } } }"#,
        )
        .unwrap();

        let mut config = store.load("main").unwrap();
        config.apply_env_from(|key| (key == "WORDS_FILE").then(|| "/tmp/elsewhere.csv".to_string()));
        assert_eq!(config.store.path, PathBuf::from("/tmp/elsewhere.csv"));
    }

    #[test]
    fn bare_config_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "store": { "path": "vocab.csv" } }"#).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.store.path, PathBuf::from("vocab.csv"));
    }
}
