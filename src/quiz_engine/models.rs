use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::errors::ConfigError;

// ---------------------------------------------------------------------------
// Problem primitives
// ---------------------------------------------------------------------------

/// Glorified record: the equation text (e.g. "3 + 9") and its exact
/// integer solution (12).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub text: String,
    pub solution: i64,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The four arithmetic kinds a problem can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemKind {
    Addition,
    Subtraction,
    Division,
    Multiplication,
}

impl ProblemKind {
    pub fn symbol(self) -> &'static str {
        match self {
            ProblemKind::Addition       => "+",
            ProblemKind::Subtraction    => "-",
            ProblemKind::Division       => "/",
            ProblemKind::Multiplication => "*",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Language the number-word table is spelled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    French,
    Spanish,
    Ukrainian,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::English   => "English",
            Language::French    => "French",
            Language::Spanish   => "Spanish",
            Language::Ukrainian => "Ukrainian",
        };
        write!(f, "{}", s)
    }
}

/// Every recognized session option. There are no others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Solutions never exceed this ceiling.
    pub max_number: u32,
    /// How many problems one session runs through.
    pub problem_count: usize,
    /// Time budget per problem before a forced advance.
    pub per_problem_budget: Duration,
    /// How many times per second the driver calls `tick`.
    pub tick_rate_hz: u32,
    /// Countdown the driver shows before `start`. The engine never renders it.
    pub countdown_seconds: u32,
    /// Language used to spell number words for fuzzy answer matching.
    pub language: Language,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_number: 30,
            problem_count: 15,
            per_problem_budget: Duration::from_millis(3000),
            tick_rate_hz: 30,
            countdown_seconds: 5,
            language: Language::English,
        }
    }
}

impl QuizConfig {
    /// Interval between driver ticks: `1000 / tick_rate_hz` milliseconds.
    ///
    /// Only meaningful for a validated config (`tick_rate_hz > 0`).
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.tick_rate_hz))
    }

    /// Check the scalar invariants. The division-material check
    /// (`max_number >= 4`) lives in [`ProblemGenerator::new`], which owns
    /// the composite-number table.
    ///
    /// [`ProblemGenerator::new`]: crate::quiz_engine::ProblemGenerator::new
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.problem_count == 0 {
            return Err(ConfigError::ZeroProblemCount);
        }
        if self.per_problem_budget.is_zero() {
            return Err(ConfigError::ZeroBudget);
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Engine outputs
// ---------------------------------------------------------------------------

/// What the UI needs to draw the active problem on one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemView {
    /// Equation text of the current problem.
    pub text: String,
    /// Fraction of the per-problem budget already spent, clamped to `[0, 1]`.
    pub elapsed_fraction: f32,
    /// Most recent answer the user gave, if any. Display only, never scored.
    pub last_answer: Option<i64>,
}

/// End-of-session statistics. Produced exactly once, immutable after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Wall-clock session length in seconds, floor-truncated to two
    /// decimal places (12.347 becomes 12.34, not 12.35).
    pub elapsed_seconds: f64,
    /// Problems answered correctly before their deadline.
    pub correct_count: usize,
    /// Configured problem count.
    pub total_problems: usize,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Problems are still being generated.
    Initializing,
    /// The clock is running.
    InProgress,
    /// Terminal. All further events are no-ops.
    Complete,
}

/// Result of one `tick`.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The session has not started; the tick had no effect.
    NotRunning,
    /// The session is live; draw this.
    Problem(ProblemView),
    /// The session is over. Every further tick returns this.
    Complete(SessionSummary),
}

/// Result of one `submit_answer`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// The session has not started; the answer was discarded.
    NotRunning,
    /// The answer matched the active solution and the session advanced.
    Accepted,
    /// The answer was recorded for display, but it was wrong. No advance.
    Rejected,
    /// This answer finished the session, or it was already over.
    Complete(SessionSummary),
}
