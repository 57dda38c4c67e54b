//! Wordle Assistant - CLI
//!
//! Suggests guesses for a Wordle-style game, simulates games against known
//! answers, and benchmarks the engine over whole dictionaries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use wordle_assist::{
    commands::{list_dictionaries, rank_openers, run_benchmark, run_play, solve_word},
    output::{print_benchmark_result, print_lists, print_ranking, print_solve_result},
    solver::{AnyRandom, LoadStatus, Session, SessionConfig},
    wordlists::{
        BuiltinProvider, CachedProvider, DictionaryProvider, DictionarySelection,
        DirectoryProvider, spawn_load,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant using positional letter frequencies and exploration rounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length (3-8)
    #[arg(short, long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=8))]
    length: u8,

    /// Dictionaries: comma separated list names, or 'all' to merge every list
    #[arg(short, long, global = true, default_value = "all")]
    dict: DictionarySelection,

    /// Directory of .json/.txt dictionaries (default: built-in lists)
    #[arg(long, global = true, env = "WORDLE_DICT_DIR")]
    dict_dir: Option<PathBuf>,

    /// Seed for the exploration pick, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Play {
        /// Apply feedback without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Simulate a game against a known answer
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per round
        #[arg(short, long)]
        steps: bool,
    },

    /// Simulate games for the most common dictionary words
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Rank opening guesses
    Rank {
        /// Number of words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Show the available dictionaries
    Lists,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let provider = dictionary_provider(cli.dict_dir);
    let config = SessionConfig::new(usize::from(cli.length), cli.dict)?;

    match cli.command.unwrap_or(Commands::Play { yes: false }) {
        Commands::Play { yes } => run_play_command(&provider, config, cli.seed, yes),
        Commands::Solve { word, steps } => {
            run_solve_command(provider.as_ref(), config, cli.seed, &word, steps)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(provider.as_ref(), &config, cli.seed, count)
        }
        Commands::Rank { top } => run_rank_command(provider.as_ref(), &config, top),
        Commands::Lists => {
            let lists = list_dictionaries(provider.as_ref(), config.word_length())?;
            print_lists(&lists, config.word_length());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn dictionary_provider(dict_dir: Option<PathBuf>) -> Arc<dyn DictionaryProvider> {
    match dict_dir {
        Some(dir) => {
            info!("Reading dictionaries from {}", dir.display());
            Arc::new(CachedProvider::new(DirectoryProvider::new(dir)))
        }
        None => Arc::new(CachedProvider::new(BuiltinProvider)),
    }
}

fn load_dictionary(
    provider: &dyn DictionaryProvider,
    config: &SessionConfig,
) -> Result<Vec<wordle_assist::core::WordEntry>> {
    let words = provider
        .load(config.dictionaries(), config.word_length())
        .with_context(|| format!("loading dictionaries '{}'", config.dictionaries()))?;
    info!("Loaded {} words of {} letters", words.len(), config.word_length());
    Ok(words)
}

fn run_play_command(
    provider: &Arc<dyn DictionaryProvider>,
    config: SessionConfig,
    seed: Option<u64>,
    yes: bool,
) -> Result<()> {
    let mut session = Session::new(config, AnyRandom::from_seed(seed));
    let pending = spawn_load(Arc::clone(provider), session.begin_load());

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading dictionaries...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let (ticket, result) = pending.wait();
    spinner.finish_and_clear();

    if let LoadStatus::Installed(words) = session
        .install(&ticket, result)
        .context("loading dictionaries")?
    {
        info!("Loaded {words} words");
    }

    let stdin = io::stdin();
    run_play(&mut session, &mut stdin.lock(), yes)?;
    Ok(())
}

fn run_solve_command(
    provider: &dyn DictionaryProvider,
    config: SessionConfig,
    seed: Option<u64>,
    word: &str,
    steps: bool,
) -> Result<()> {
    let words = load_dictionary(provider, &config)?;
    let mut session = Session::with_dictionary(config, words, AnyRandom::from_seed(seed));
    let result = solve_word(&mut session, word)?;

    print_solve_result(&result, steps);
    Ok(())
}

fn run_benchmark_command(
    provider: &dyn DictionaryProvider,
    config: &SessionConfig,
    seed: Option<u64>,
    count: usize,
) -> Result<()> {
    let dictionary = Arc::new(load_dictionary(provider, config)?);
    let targets = &dictionary[..count.min(dictionary.len())];
    println!("Running benchmark on {} words...", targets.len());

    let result = run_benchmark(&dictionary, config, targets, seed, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_rank_command(provider: &dyn DictionaryProvider, config: &SessionConfig, top: usize) -> Result<()> {
    let words = load_dictionary(provider, config)?;
    let ranking = rank_openers(&words, config.word_length(), top)?;
    print_ranking(&ranking);
    Ok(())
}
