//! Spelled-out number words for fuzzy answer matching.
//!
//! Speech recognizers frequently transcribe "11" as "eleven"; the
//! interpreter needs the word form of every value the quiz can ask for.

use num2words::{Lang, Num2Words};

use crate::quiz_engine::errors::ConfigError;
use crate::quiz_engine::models::Language;

fn to_lang(language: Language) -> Lang {
    match language {
        Language::English   => Lang::English,
        Language::French    => Lang::French,
        Language::Spanish   => Lang::Spanish,
        Language::Ukrainian => Lang::Ukrainian,
    }
}

/// Lower-cased word form of every integer in `[0, max_number]`.
///
/// Built once per session and read-only thereafter. Full coverage is an
/// invariant: a gap found at lookup time is a data-integrity fault, not a
/// recoverable miss.
#[derive(Debug, Clone)]
pub struct NumberWordTable {
    language: Language,
    words: Vec<String>,
}

impl NumberWordTable {
    /// Spell out `0..=max_number` in `language`.
    pub fn build(max_number: u32, language: Language) -> Result<Self, ConfigError> {
        let mut words = Vec::with_capacity(max_number as usize + 1);

        for value in 0..=max_number {
            let word = Num2Words::new(i64::from(value))
                .lang(to_lang(language))
                .to_words()
                .map_err(|e| ConfigError::UnspeakableNumber {
                    language,
                    value,
                    reason: e.to_string(),
                })?;
            words.push(word.to_lowercase());
        }

        tracing::debug!(entries = words.len(), %language, "number word table filled");
        Ok(Self { language, words })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Highest value the table covers.
    pub fn max_number(&self) -> u32 {
        self.words.len() as u32 - 1
    }

    /// Word form of `value`, or `None` when out of range.
    pub fn get(&self, value: u32) -> Option<&str> {
        self.words.get(value as usize).map(String::as_str)
    }
}
