//! Word normalization.
//!
//! Normalization lowercases a word and strips surrounding whitespace.
//! Inner whitespace is preserved, so multi-word entries such as
//! `"machine learning"` stay intact.
//!
//! # Examples
//!
//! ```
//! use synonymous::analysis::{Word, normalize};
//!
//! assert_eq!(normalize("  Happy "), "happy");
//!
//! let word = Word::parse("Joyful").unwrap();
//! assert_eq!(word.as_str(), "joyful");
//! assert!(Word::parse("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymousError};

/// Byte order mark, stripped along with surrounding whitespace.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Lowercase and trim a raw word.
///
/// Trimming removes Unicode whitespace and the byte order mark from both ends.
/// The result may be empty; use [`Word::parse`] when an empty value must be rejected.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
        .to_lowercase()
}

/// A normalized, non-empty word.
///
/// Identity is by normalized value: `Word::parse("Big")` and `Word::parse(" big ")`
/// compare equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Normalize `raw` and reject it if nothing remains.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(SynonymousError::invalid_input("Word cannot be empty"));
        }
        Ok(Word(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Word {
    type Error = SynonymousError;

    fn try_from(value: String) -> Result<Self> {
        Word::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
