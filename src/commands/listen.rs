//! Listening Mode command
//!
//! Text rendition of Listening Mode: the scrambled letters are printed and
//! the player types the word.

use crate::game::{ListeningGame, ListeningOutcome};
use crate::output::formatters::spoken_letters;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the Listening Mode loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_listen<R: Rng>(game: &mut ListeningGame<R>) -> Result<(), String> {
    println!("\n{}", "Listening Mode".bright_cyan().bold());
    println!("Commands: 'play' to repeat the letters, 'new' for another word, 'quit' to exit\n");

    present(game);

    loop {
        print!("Your guess: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            return Ok(());
        }

        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "play" | "p" | "replay" => present(game),
            "new" | "n" => {
                game.next_word();
                present(game);
            }
            _ => {
                let outcome = game.check(&input);
                let message = match outcome {
                    ListeningOutcome::Correct => outcome.message().green().bold(),
                    ListeningOutcome::Incorrect => outcome.message().red(),
                    ListeningOutcome::Empty => outcome.message().yellow(),
                };
                println!("{message}\n");
            }
        }
    }
}

fn present<R: Rng>(game: &mut ListeningGame<R>) {
    if let Some(intro) = game.take_intro() {
        for line in intro {
            println!("{}", line.bright_white());
        }
    }
    println!("  {}\n", spoken_letters(game.current().scrambled()).bright_yellow());
}
