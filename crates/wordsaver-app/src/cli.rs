use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wordsaver_config::Config;
use wordsaver_config::profile::resolve_config;

#[derive(Parser, Debug)]
#[command(name = "wordsaver", version, about = "Save clipboard words to a vocabulary CSV file")]
pub struct Cli {
    /// Config file to use instead of the user profile
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// User profile name
    #[arg(long, global = true, default_value = "main")]
    pub profile: String,

    /// Words CSV file, overrides the config
    #[arg(long, global = true)]
    pub words: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Run the global hotkey listener
    #[default]
    Listen,
    /// Save the clipboard word once and exit
    Capture,
    /// Fill in missing meanings once and exit
    Enrich,
    /// Print the stored words
    List,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = resolve_config(self.config.as_deref(), &self.profile)?;
        if let Some(words) = &self.words {
            config.store.path = words.clone();
        }
        Ok(config)
    }
}
