//! Answer options and the letters that identify them

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest number of options a question may carry (one per letter A-Z).
pub const MAX_OPTIONS: usize = 26;

/// A single answer option of a multiple-choice question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    content: String,
    /// Correctness flag as supplied by the caller.
    ///
    /// Only carried through for presentation; consensus never reads it.
    #[serde(default)]
    is_right: bool,
}

impl AnswerOption {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_right: false,
        }
    }

    pub fn with_is_right(mut self, is_right: bool) -> Self {
        self.is_right = is_right;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_right(&self) -> bool {
        self.is_right
    }
}

impl From<&str> for AnswerOption {
    fn from(s: &str) -> Self {
        AnswerOption::new(s)
    }
}

impl From<String> for AnswerOption {
    fn from(s: String) -> Self {
        AnswerOption::new(s)
    }
}

/// Positional identifier of an option: `A` is the first option, `B` the second...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionLetter(u8);

impl OptionLetter {
    /// Letter for the option at `index` (0-based), if it fits in A-Z
    pub fn from_index(index: usize) -> Option<Self> {
        if index < MAX_OPTIONS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// 0-based index of the option this letter names
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn as_char(&self) -> char {
        (b'A' + self.0) as char
    }

    /// Parse a letter out of a model's free-text selection value.
    ///
    /// Accepts `B`, `b`, `B.`, `B)`, `(B)`, `[B]`, `B. Paris` and `B - Paris`.
    /// A letter followed by whitespace and then another word is prose
    /// (`I think C`) and yields `None`.
    pub fn parse_selection(value: &str) -> Option<Self> {
        let trimmed = value
            .trim()
            .trim_start_matches(['(', '[', '*', '_', '"', '\''])
            .trim_start();
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        match chars.next() {
            None => {}
            Some('.' | ')' | ']' | ':' | ',' | '*' | '_' | '"' | '\'') => {}
            Some(c) if c.is_whitespace() => {
                if chars.as_str().trim_start().starts_with(|c: char| c.is_alphabetic()) {
                    return None;
                }
            }
            Some(_) => return None,
        }
        let upper = first.to_ascii_uppercase() as u8;
        Some(Self(upper - b'A'))
    }
}

impl std::fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for OptionLetter {
    type Error = DomainError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self(upper as u8 - b'A'))
        } else {
            Err(DomainError::InvalidOptionLetter(c.to_string()))
        }
    }
}

impl std::str::FromStr for OptionLetter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => OptionLetter::try_from(c),
            _ => Err(DomainError::InvalidOptionLetter(s.to_string())),
        }
    }
}

impl Serialize for OptionLetter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for OptionLetter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_mapping() {
        let a = OptionLetter::from_index(0).unwrap();
        let h = OptionLetter::from_index(7).unwrap();
        assert_eq!(a.as_char(), 'A');
        assert_eq!(h.as_char(), 'H');
        assert_eq!(h.index(), 7);
        assert!(OptionLetter::from_index(26).is_none());
    }

    #[test]
    fn test_letter_from_str() {
        assert_eq!("c".parse::<OptionLetter>().unwrap().as_char(), 'C');
        assert_eq!(" D ".parse::<OptionLetter>().unwrap().as_char(), 'D');
        assert!("AB".parse::<OptionLetter>().is_err());
        assert!("1".parse::<OptionLetter>().is_err());
        assert!("".parse::<OptionLetter>().is_err());
    }

    #[test]
    fn test_parse_selection_tolerates_decoration() {
        for raw in ["B", "b", "B.", "B)", "(B)", "[B]", "B. Paris", "**B**", "B - Paris", "B (Paris)"] {
            let letter = OptionLetter::parse_selection(raw);
            assert_eq!(letter.map(|l| l.as_char()), Some('B'), "input: {raw}");
        }
    }

    #[test]
    fn test_parse_selection_rejects_words() {
        assert!(OptionLetter::parse_selection("Paris").is_none());
        assert!(OptionLetter::parse_selection("").is_none());
        assert!(OptionLetter::parse_selection("42").is_none());
    }

    #[test]
    fn test_parse_selection_rejects_prose_starting_with_letter() {
        assert!(OptionLetter::parse_selection("I think C").is_none());
        assert!(OptionLetter::parse_selection("A good choice is D").is_none());
        assert_eq!(
            OptionLetter::parse_selection("I").map(|l| l.as_char()),
            Some('I')
        );
    }

    #[test]
    fn test_letter_serializes_as_string() {
        let letter = OptionLetter::from_index(1).unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"B\"");
        let back: OptionLetter = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(back, letter);
    }
}
