//! Fuzzy matching of mistyped command words.

use strsim::jaro_winkler;

use super::command::CommandWord;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Suggest the vocabulary word closest to `input`, if any scores above the
/// threshold.
pub fn suggest_command_word(input: &str) -> Option<CommandWord> {
    let input_lower = input.to_lowercase();
    if input_lower.is_empty() {
        return None;
    }

    CommandWord::VOCABULARY
        .iter()
        .map(|word| (*word, jaro_winkler(&input_lower, word.name())))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(word, _)| word)
}
