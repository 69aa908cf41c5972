//! Error taxonomy for session construction and lifecycle.
//!
//! Configuration faults are fatal and surface at construction; lifecycle
//! faults are reported to the caller and recoverable. Timeouts and
//! unparseable predictions are neither — they are normal game flow.

use thiserror::Error;

use crate::quiz_engine::models::Language;

/// Fatal configuration faults, surfaced when a session is constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No composite numbers exist at or below the ceiling, so division
    /// problems could never be generated. Requires `max_number >= 4`.
    #[error("max_number {max_number} leaves no non-prime dividends (need at least 4)")]
    NoDivisionMaterial { max_number: u32 },

    #[error("problem_count must be at least 1")]
    ZeroProblemCount,

    #[error("per_problem_budget must be non-zero")]
    ZeroBudget,

    #[error("tick_rate_hz must be non-zero")]
    ZeroTickRate,

    /// The words backend could not spell a value inside `[0, max_number]`.
    #[error("no {language} word form for {value}: {reason}")]
    UnspeakableNumber {
        language: Language,
        value: u32,
        reason: String,
    },
}

/// Caller errors on the session lifecycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `start` arrived before problem generation finished. Wait on
    /// `is_ready` and try again.
    #[error("session not ready: problem generation has not finished")]
    NotReady,

    /// `start` arrived after the session already left `Initializing`.
    #[error("session already started")]
    AlreadyStarted,
}
