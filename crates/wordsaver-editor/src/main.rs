use std::path::PathBuf;

use clap::Parser;
use wordsaver_config::profile::resolve_config;

#[derive(Parser, Debug)]
#[command(name = "wordsaver-editor", version, about = "Review and edit the vocabulary CSV file")]
struct Args {
    /// Config file to use instead of the user profile
    #[arg(long)]
    config: Option<PathBuf>,

    /// User profile name
    #[arg(long, default_value = "main")]
    profile: String,

    /// Words CSV file, overrides the config
    #[arg(long)]
    words: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    wordsaver_io::logging::init();

    let args = Args::parse();
    let mut config = resolve_config(args.config.as_deref(), &args.profile)?;
    if let Some(words) = args.words {
        config.store.path = words;
    }

    tracing::info!("Opening {}", config.store.path.display());
    wordsaver_editor::run(&config)
}
