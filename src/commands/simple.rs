//! Simple interactive CLI mode
//!
//! Line-based Slice Mode without the TUI

use crate::game::{Session, Tick};
use crate::output::display::{print_game_over, print_round_header, print_validation};
use rand::Rng;
use std::io::{self, Write};
use std::time::Instant;

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Quit,
    NewGame,
    /// Zero-based tile indices
    Tiles(Vec<usize>),
    Word(String),
    Empty,
}

/// Interpret one line of input
///
/// Numbers select tiles (1-based, separated by spaces or commas); anything
/// else is taken as a typed word.
#[must_use]
pub fn parse_input(line: &str) -> PlayerInput {
    let trimmed = line.trim();

    match trimmed.to_lowercase().as_str() {
        "" => return PlayerInput::Empty,
        "quit" | "q" | "exit" => return PlayerInput::Quit,
        "new" | "n" => return PlayerInput::NewGame,
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let tiles: Option<Vec<usize>> = parts
        .iter()
        .map(|part| part.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
        .collect();

    match tiles {
        Some(tiles) => PlayerInput::Tiles(tiles),
        None => PlayerInput::Word(parts.concat()),
    }
}

/// Run the simple interactive CLI mode
///
/// The clock keeps running while waiting for input; elapsed seconds are
/// applied before each submission is judged.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 WordRonin - Slice Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell words from the letter tiles before the clock runs out.");
    println!("  - Type a word, or tile numbers like '3 1 4'");
    println!("  - Words need at least {} letters", session.config().min_word_length);
    println!("Commands: 'quit' to exit, 'new' to start over\n");

    let mut clock = RoundClock::start(session.rounds_played());

    loop {
        if session.is_over() {
            print_game_over(session);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.restart();
                    clock = RoundClock::start(session.rounds_played());
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_round_header(session);
        let input = get_user_input("Slice")?;

        clock.catch_up(session);
        if session.is_over() {
            println!("\n⏰ Time's up!");
            continue;
        }

        let validation = match parse_input(&input) {
            PlayerInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayerInput::NewGame => {
                session.restart();
                clock = RoundClock::start(session.rounds_played());
                println!("\n🔄 New game started!\n");
                continue;
            }
            PlayerInput::Empty => continue,
            PlayerInput::Tiles(tiles) => session.submit_indices(&tiles),
            PlayerInput::Word(word) => session.submit(&word),
        };

        if let Some(validation) = validation {
            print_validation(&validation);

            if validation.round_complete && !session.is_over() {
                println!("\n✨ Round cleared! On to round {}.\n", session.rounds_played());
            }
        }

        if clock.round != session.rounds_played() {
            clock = RoundClock::start(session.rounds_played());
        }
    }
}

/// Wall-clock seconds already applied to the session's countdown
struct RoundClock {
    started: Instant,
    ticked: u64,
    round: usize,
}

impl RoundClock {
    fn start(round: usize) -> Self {
        Self {
            started: Instant::now(),
            ticked: 0,
            round,
        }
    }

    fn catch_up<R: Rng>(&mut self, session: &mut Session<R>) {
        let elapsed = self.started.elapsed().as_secs();
        while self.ticked < elapsed {
            self.ticked += 1;
            match session.tick() {
                Some(Tick::Warning(left)) => println!("⏳ {left} seconds left!"),
                Some(Tick::Running(_)) => {}
                Some(Tick::Expired) | None => break,
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
