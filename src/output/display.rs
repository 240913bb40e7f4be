//! Display functions for command results

use super::formatters::{outcome_symbol, tile_numbers, tile_strip, time_bar, word_list};
use crate::commands::{AnalysisResult, SolveResult};
use crate::game::{GameOverReason, Session, SessionState};
use crate::matcher::{Outcome, Validation};
use colored::Colorize;
use rand::Rng;

/// Print the words a letter pool can spell
pub fn print_solve_result(result: &SolveResult) {
    let letters: String = result.letters.iter().collect();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", letters.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo words can be made from these letters.");
        return;
    }

    let mut current_length = 0;
    for scored in &result.words {
        let length = scored.word.chars().count();
        if length != current_length {
            current_length = length;
            println!("\n{}", format!("{length} letters").bright_cyan().bold());
        }
        println!("  {:<10} {:>4} pts", scored.word, scored.points);
    }

    println!(
        "\n{} words, {} points for a full clear",
        result.words.len().to_string().bright_yellow(),
        result.max_score.to_string().green().bold()
    );
}

/// Print per start word statistics
pub fn print_analysis_results(results: &[Result<AnalysisResult, String>]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "START WORD ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        match result {
            Ok(analysis) => {
                println!("\n📊 {}", analysis.word.bright_yellow().bold());
                println!("   Possible words: {}", analysis.possible_words);
                println!(
                    "   Full clear:     {}",
                    format!("{} pts", analysis.max_score).green()
                );
                let lengths: Vec<String> = analysis
                    .by_length
                    .iter()
                    .map(|(length, count)| format!("{length}:{count}"))
                    .collect();
                println!("   By length:      {}", lengths.join("  "));
                println!("   Longest:        {}", word_list(&analysis.longest));
            }
            Err(err) => println!("\n❌ {}", err.red()),
        }
    }
}

/// Print the tiles, clock and score before each prompt
pub fn print_round_header<R: Rng>(session: &Session<R>) {
    let round = session.round();
    let countdown = session.countdown();
    let remaining = countdown.remaining();

    let time = format!("Time: {remaining}");
    let time = if countdown.is_warning() {
        time.red().bold()
    } else {
        time.bright_white()
    };

    println!("────────────────────────────────────────────────────────────");
    println!(
        "Round {}  {}  [{}]  Score: {}  Found: {}/{}",
        session.rounds_played(),
        time,
        time_bar(remaining, session.config().round_duration, 20),
        session.total_score().to_string().bright_yellow(),
        round.found().len(),
        round.possible().len()
    );
    println!("────────────────────────────────────────────────────────────");
    println!("  {}", tile_strip(round.letters()).bright_white().bold());
    println!("  {}", tile_numbers(round.letters().len()).bright_black());
}

/// Print how a submitted word was judged
pub fn print_validation(validation: &Validation) {
    let symbol = outcome_symbol(validation.outcome);
    let word = if validation.word.is_empty() {
        "(nothing)".to_string()
    } else {
        validation.word.clone()
    };

    match validation.outcome {
        Outcome::Accepted => println!(
            "{symbol} {} {}",
            word.green().bold(),
            format!("+{}", validation.score_delta).bright_yellow()
        ),
        Outcome::AlreadyFound => println!(
            "{symbol} {} {}",
            word.yellow(),
            validation.outcome.message().yellow()
        ),
        Outcome::TooShort | Outcome::NotAWord => println!(
            "{symbol} {} {}",
            word.red(),
            validation.outcome.message().red()
        ),
    }
}

/// Print the end-of-game summary
pub fn print_game_over<R: Rng>(session: &Session<R>) {
    let banner = match session.state() {
        SessionState::GameOver(GameOverReason::AllRoundsCleared) => "🎉 ALL ROUNDS CLEARED! 🎉",
        SessionState::GameOver(GameOverReason::TimeUp) => "⏰ GAME OVER",
        SessionState::Playing => return,
    };

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!("    {}", banner.bright_green().bold());
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Score: {}",
        session.total_score().to_string().bright_yellow().bold()
    );

    for (i, summary) in session.summaries().iter().enumerate() {
        println!(
            "\n  Round {}: {} ({} pts)",
            i + 1,
            summary.base_word.bright_white().bold(),
            summary.score
        );
        println!(
            "    Found ({}): {}",
            summary.found.len(),
            word_list(&summary.found).green()
        );
        println!(
            "    Missing ({}): {}",
            summary.missing.len(),
            word_list(&summary.missing).bright_black()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}
