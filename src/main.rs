//! WordRonin - CLI
//!
//! Slice words out of a pool of letter tiles, in a TUI or on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use wordronin::{
    commands::{
        SolveConfig, analyze_start_words, analyze_word, run_listen, run_simple, solve_letters,
    },
    game::{CLOCK_WARNING_SECONDS, GameConfig, ListeningGame, Session},
    matcher::MIN_WORD_LENGTH,
    output::{print_analysis_results, print_solve_result},
    wordlists::{Dictionary, LISTENING_WORDS, START_WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordronin",
    about = "Word-slicing puzzle: spell as many words as you can from the letter tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Shortest word that counts
    #[arg(short, long, global = true, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,

    /// Seconds on the clock for each round
    #[arg(short, long, global = true, default_value_t = 60)]
    duration: u32,

    /// Rounds per game; clearing a round moves on to the next
    #[arg(short, long, global = true, default_value_t = 1)]
    rounds: usize,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based Slice Mode without the TUI)
    Simple,

    /// List every word a set of letters can spell
    Solve {
        /// Letters in the pool, e.g. ORANGE
        letters: String,
    },

    /// Analyze start words (all of them when no word is given)
    Analyze {
        /// Start word to analyze
        word: Option<String>,
    },

    /// Listening Mode: unscramble a word from its letters
    Listen,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    use wordronin::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(Dictionary::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            Ok(Dictionary::from_words(words))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;
    debug!("dictionary has {} words", dictionary.len());

    let config = GameConfig {
        min_word_length: cli.min_length,
        round_duration: cli.duration,
        clock_warning: CLOCK_WARNING_SECONDS.min(cli.duration.saturating_sub(1)),
        rounds: cli.rounds,
    };

    match cli.command {
        Some(Commands::Solve { letters }) => run_solve_command(&letters, &config, &dictionary),
        Some(Commands::Analyze { word }) => {
            run_analyze_command(word.as_deref(), &config, &dictionary)
        }
        Some(Commands::Simple) => run_simple_command(config, dictionary),
        Some(Commands::Listen) => run_listen_command(),
        Some(Commands::Play) | None => run_play_command(config, dictionary),
    }
}

fn run_solve_command(letters: &str, config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    let solve_config = SolveConfig::new(letters.to_string(), config.min_word_length);
    let result = solve_letters(&solve_config, dictionary).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result);
    Ok(())
}

fn run_analyze_command(
    word: Option<&str>,
    config: &GameConfig,
    dictionary: &Dictionary,
) -> Result<()> {
    let results = match word {
        Some(word) => vec![analyze_word(word, dictionary, config.min_word_length)],
        None => analyze_start_words(
            &words_from_slice(START_WORDS),
            dictionary,
            config.min_word_length,
        ),
    };

    print_analysis_results(&results);
    Ok(())
}

fn new_session(config: GameConfig, dictionary: Dictionary) -> Result<Session<rand::rngs::ThreadRng>> {
    let session = Session::new(
        config,
        dictionary,
        words_from_slice(START_WORDS),
        rand::rng(),
    )?;
    Ok(session)
}

fn run_simple_command(config: GameConfig, dictionary: Dictionary) -> Result<()> {
    let mut session = new_session(config, dictionary)?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_listen_command() -> Result<()> {
    let mut game = ListeningGame::new(words_from_slice(LISTENING_WORDS), rand::rng())?;
    run_listen(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(config: GameConfig, dictionary: Dictionary) -> Result<()> {
    use wordronin::interactive::{App, run_tui};

    let app = App::new(new_session(config, dictionary)?);
    run_tui(app)
}
