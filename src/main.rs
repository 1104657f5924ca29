//! Word Scramble - CLI
//!
//! Unscramble-the-word game with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{run_fairness, run_simple, scramble_once},
    config::GameConfig,
    engine::GameEngine,
    output::{print_fairness_report, print_scramble},
    session::Session,
    source::ConfiguredSource,
    wordlists::loader::load_from_file,
};

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "word_scramble.toml";

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Unscramble the word before you run out of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Wrong guesses allowed per game
    #[arg(short, long, global = true)]
    mistake_limit: Option<u32>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Give up on a word fetch after this many milliseconds
    #[arg(long, global = true)]
    fetch_timeout_ms: Option<u64>,

    /// Fixed seed for reproducible scrambles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the only log output in play mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole guesses, no TUI)
    Simple,

    /// Scramble a single word
    Scramble {
        /// Word to scramble
        word: String,
    },

    /// Check that scrambles are uniformly distributed
    Fairness {
        /// Word to scramble repeatedly
        word: String,

        /// Number of scrambles
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,
    },
}

fn init_logging(cli: &Cli, tui: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let file_layer = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file '{}'", path.display()))?;
            Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        }
        None => None,
    };
    let stderr_layer =
        (!tui && cli.log_file.is_none()).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

/// Config file values, then CLI overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    if let Some(limit) = cli.mistake_limit {
        config.mistake_limit = limit;
    }
    if let Some(wordlist) = &cli.wordlist {
        config.wordlist.clone_from(wordlist);
    }
    if let Some(ms) = cli.fetch_timeout_ms {
        config.fetch_timeout_ms = ms;
    }
    config.validate()?;

    if !config.uses_embedded_wordlist() {
        let words = load_from_file(&config.wordlist)
            .with_context(|| format!("failed to read word list '{}'", config.wordlist))?;
        if words.is_empty() {
            bail!("word list '{}' has no usable words", config.wordlist);
        }
        tracing::info!(path = %config.wordlist, words = words.len(), "using custom word list");
    }

    Ok(config)
}

fn build_engine(config: &GameConfig, seed: Option<u64>) -> GameEngine {
    match seed {
        Some(seed) => GameEngine::seeded(config, seed),
        None => GameEngine::new(config),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&cli, matches!(command, Commands::Play))?;

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Play => run_play_command(&config, cli.seed).await,
        Commands::Simple => run_simple_command(&config, cli.seed).await,
        Commands::Scramble { word } => {
            let scrambled = scramble_once(&word, cli.seed)?;
            print_scramble(&word, &scrambled);
            Ok(())
        }
        Commands::Fairness { word, count } => {
            println!("🎯 Scrambling '{word}' {count} times...");
            let report = run_fairness(&word, count, cli.seed, true)?;
            print_fairness_report(&report);
            Ok(())
        }
    }
}

async fn run_simple_command(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let source = ConfiguredSource::from_config(config);
    let mut session = Session::from_config(config, source, seed);
    run_simple(&mut session).await
}

async fn run_play_command(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(build_engine(config, seed));
    let source = ConfiguredSource::from_config(config);
    run_tui(app, source, config.fetch_timeout()).await
}
