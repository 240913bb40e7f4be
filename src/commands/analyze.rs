//! Start word analysis command
//!
//! Measures how rich each start word is as a round: how many words it
//! yields and what a perfect round would score.

use crate::core::points_for_word;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// How many of the longest words to report per start word
const LONGEST_SHOWN: usize = 3;

/// Result of analyzing one start word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub word: String,
    pub possible_words: usize,
    pub max_score: u32,
    /// Count of possible words per length, shortest first
    pub by_length: Vec<(usize, usize)>,
    pub longest: Vec<String>,
}

/// Analyze a single start word against the dictionary
///
/// # Errors
///
/// Returns an error if the word is empty or contains non-letters.
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    min_length: usize,
) -> Result<AnalysisResult, String> {
    let word = word.trim().to_uppercase();
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return Err(format!("Invalid start word '{word}'"));
    }

    let pool: Vec<char> = word.chars().collect();
    let mut possible: Vec<String> = dictionary
        .possible_words(&pool, min_length)
        .into_iter()
        .collect();
    possible.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = possible
        .iter()
        .map(|w| points_for_word(w.chars().count()))
        .sum();

    let mut by_length: Vec<(usize, usize)> = Vec::new();
    for candidate in possible.iter().rev() {
        let length = candidate.chars().count();
        match by_length.last_mut() {
            Some((len, count)) if *len == length => *count += 1,
            _ => by_length.push((length, 1)),
        }
    }

    Ok(AnalysisResult {
        word,
        possible_words: possible.len(),
        max_score,
        by_length,
        longest: possible.into_iter().take(LONGEST_SHOWN).collect(),
    })
}

/// Analyze every start word in parallel
///
/// Results keep the order of `start_words`. Invalid start words are
/// reported as errors without stopping the rest.
pub fn analyze_start_words(
    start_words: &[String],
    dictionary: &Dictionary,
    min_length: usize,
) -> Vec<Result<AnalysisResult, String>> {
    let pb = ProgressBar::new(start_words.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} start words")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results = start_words
        .par_iter()
        .map(|word| {
            let result = analyze_word(word, dictionary, min_length);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::START_WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_orange() {
        let result = analyze_word("orange", &Dictionary::embedded(), 3).unwrap();

        assert_eq!(result.word, "ORANGE");
        assert_eq!(result.possible_words, 31);
        assert_eq!(result.max_score, 7350);
        assert_eq!(result.longest, vec!["ORANGE", "ANGER", "ARGON"]);
        assert_eq!(result.by_length.last(), Some(&(6, 1)));
        assert_eq!(result.by_length.first(), Some(&(3, 15)));
        assert_eq!(
            result.by_length.iter().map(|(_, n)| n).sum::<usize>(),
            result.possible_words
        );
    }

    #[test]
    fn longest_counts_letters_not_bytes() {
        let dictionary = Dictionary::from_words(["ÉTÉ", "TÉS", "SÉT", "ÉTÉS"]);
        let result = analyze_word("étés", &dictionary, 3).unwrap();

        assert_eq!(result.longest, vec!["ÉTÉS", "SÉT", "TÉS"]);
        assert_eq!(result.by_length, vec![(3, 3), (4, 1)]);
    }

    #[test]
    fn analyze_invalid_word() {
        assert!(analyze_word("", &Dictionary::embedded(), 3).is_err());
        assert!(analyze_word("or4nge", &Dictionary::embedded(), 3).is_err());
    }

    #[test]
    fn analyze_all_keeps_order() {
        let words = words_from_slice(START_WORDS);
        let results = analyze_start_words(&words, &Dictionary::embedded(), 3);

        let summary: Vec<(String, usize, u32)> = results
            .into_iter()
            .map(|r| r.unwrap())
            .map(|r| (r.word, r.possible_words, r.max_score))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("ORANGE".to_string(), 31, 7350),
                ("PLANET".to_string(), 50, 12100),
                ("STREAM".to_string(), 56, 15450),
                ("CAMERA".to_string(), 25, 5800),
                ("POCKET".to_string(), 19, 4300),
                ("APRICOT".to_string(), 46, 11200),
            ]
        );
    }

    #[test]
    fn analyze_all_reports_bad_entries() {
        let words = vec!["ORANGE".to_string(), "   ".to_string()];
        let results = analyze_start_words(&words, &Dictionary::embedded(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
