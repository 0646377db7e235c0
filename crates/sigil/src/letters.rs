use serde::{Deserialize, Serialize};
use std::fmt;

/// How lowercase input is treated before filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Only `A`-`Z` are accepted; `a`-`z` are dropped.
    #[default]
    Strict,
    /// ASCII lowercase is upper-cased first.
    Fold,
}

/// A validated sigil letter, always in `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub fn new(c: char, policy: CasePolicy) -> Option<Self> {
        let c = match policy {
            CasePolicy::Strict => c,
            CasePolicy::Fold => c.to_ascii_uppercase(),
        };
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based alphabet position (`A` = 0).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// All 26 letters in alphabet order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Anything a caller can hand over as one entry of a letter sequence.
///
/// Entries that are not exactly one character yield `None` and are dropped.
pub trait LetterInput {
    fn single_char(&self) -> Option<char>;
}

impl LetterInput for char {
    fn single_char(&self) -> Option<char> {
        Some(*self)
    }
}

impl LetterInput for str {
    fn single_char(&self) -> Option<char> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl LetterInput for String {
    fn single_char(&self) -> Option<char> {
        self.as_str().single_char()
    }
}

impl<T: LetterInput + ?Sized> LetterInput for &T {
    fn single_char(&self) -> Option<char> {
        (**self).single_char()
    }
}

/// Keep the entries that are valid letters, in input order.
///
/// Returns the survivors and how many entries were rejected.
pub fn filter_letters<I, T>(input: I, policy: CasePolicy) -> (Vec<Letter>, usize)
where
    I: IntoIterator<Item = T>,
    T: LetterInput,
{
    let mut kept = Vec::new();
    let mut rejected = 0;
    for entry in input {
        match entry.single_char().and_then(|c| Letter::new(c, policy)) {
            Some(letter) => kept.push(letter),
            None => rejected += 1,
        }
    }
    (kept, rejected)
}
