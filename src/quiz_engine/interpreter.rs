//! Free-text answer interpretation.
//!
//! Speech transcripts arrive in shapes like "11", "11:00", "11th", or
//! "eleven". Three ordered strategies, first match wins:
//!
//! 1. the whole trimmed prediction parses as an integer — returned as-is,
//!    with no ceiling check;
//! 2. the prediction contains the decimal digits of some value in
//!    `[0, max_number]`, scanned from the ceiling down so "11" wins over
//!    the "1" inside it;
//! 3. the prediction equals or contains the spelled-out word of some value,
//!    same descending order.
//!
//! `None` is the normal no-signal outcome — silence or an unintelligible
//! transcript — and the recognition loop should simply keep listening.

use crate::quiz_engine::words::NumberWordTable;

/// Extract an integer answer from a raw transcript.
pub fn interpret(prediction: &str, max_number: u32, words: &NumberWordTable) -> Option<i64> {
    let trimmed = prediction.trim();

    // Strategy 1: the prediction is literally the number.
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }

    let lowered = trimmed.to_lowercase();

    // Strategy 2: embedded digits, largest candidate first.
    for value in (0..=i64::from(max_number)).rev() {
        if lowered.contains(&value.to_string()) {
            return Some(value);
        }
    }

    // Strategy 3: exact or embedded number word, largest candidate first.
    for value in (0..=max_number).rev() {
        let Some(word) = words.get(value) else {
            // The table covers [0, max_number] by construction; a gap here
            // is corrupt data.
            tracing::error!(value, "number word table has no entry in range");
            return None;
        };
        if lowered == word || lowered.contains(word) {
            return Some(i64::from(value));
        }
    }

    tracing::debug!(prediction, "no number found");
    None
}
