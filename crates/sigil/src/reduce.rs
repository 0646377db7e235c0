//! Intention reduction
//!
//! The traditional way of turning an intention phrase into sigil letters:
//! upper-case it, strip vowels and non-letters, then drop repeated letters.

use regex::Regex;

pub struct IntentionReducer {
    vowels: Regex,
}

impl IntentionReducer {
    pub fn new() -> Self {
        Self {
            vowels: Regex::new(r"(?i)[aeiou]").expect("Invalid regex"),
        }
    }

    /// Reduce a phrase to its distinct consonants, first occurrence wins.
    ///
    /// An all-vowel phrase keeps its distinct vowels instead, so any phrase
    /// with at least one letter `A`-`Z` yields a non-empty sequence.
    pub fn reduce(&self, phrase: &str) -> Vec<char> {
        let letters: String = phrase
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .collect();
        let consonants = self.vowels.replace_all(&letters, "");
        log::debug!("[REDUCE] '{}' -> '{}'", letters, consonants);

        if consonants.is_empty() {
            dedup_first(&letters)
        } else {
            dedup_first(&consonants)
        }
    }
}

impl Default for IntentionReducer {
    fn default() -> Self {
        Self::new()
    }
}

fn dedup_first(s: &str) -> Vec<char> {
    let mut seen = [false; 26];
    let mut out = Vec::new();
    for c in s.chars() {
        let i = (c as u8 - b'A') as usize;
        if !seen[i] {
            seen[i] = true;
            out.push(c);
        }
    }
    out
}

/// Reduce with a one-off reducer
pub fn reduce_intention(phrase: &str) -> Vec<char> {
    IntentionReducer::new().reduce(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_first_keeps_first_occurrence() {
        assert_eq!(dedup_first("PRTCTMYHM"), vec!['P', 'R', 'T', 'C', 'M', 'Y', 'H']);
    }
}
