//! # math_blitz
//!
//! A fully offline, timed mental-arithmetic quiz engine built for noisy
//! voice answers.
//!
//! The library owns the game logic of a rapid-fire arithmetic session:
//! generating a fixed list of problems under a solution ceiling, advancing
//! through them on a fixed tick clock with per-problem deadlines, turning
//! raw speech-recognition transcripts into integer answers, and scoring the
//! run. Everything platform-shaped — microphones, recognizers, screens,
//! countdowns, permissions — stays outside and talks to the engine through
//! discrete events and plain values.
//!
//! ## How it works
//!
//! 1. Build a [`QuizConfig`] (or take the defaults: solutions up to 30,
//!    15 problems, 3 seconds each) and a [`NumberWordTable`] for the
//!    configured language.
//! 2. Call [`SessionHandle::spawn_prepare`] — the full problem list is
//!    generated on a background thread while the host shows its countdown;
//!    poll [`SessionHandle::is_ready`], then `start`.
//! 3. Drive the session: a fixed-rate loop feeds `tick(now)` and draws the
//!    returned [`ProblemView`]; the recognition callback runs transcripts
//!    through [`interpret`] and feeds hits to `submit_answer`. A correct
//!    answer or an expired budget advances to the next problem.
//! 4. When the last problem falls, every path returns the final
//!    [`SessionSummary`] — score and wall-clock time — ready to display.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to `spawn_prepare` to
//!   reproduce the exact same problem list — useful for tests and replays.
//! - **Constraint-safe generation**: sums and products never exceed the
//!   ceiling, differences stay positive, divisions are exact with a divisor
//!   that is never 1 or the dividend itself.
//! - **Fuzzy answer matching**: "11", "11:00", "11th", and "eleven" all
//!   resolve to 11; larger embedded numerals beat the digits inside them.
//! - **Single-writer sessions**: the tick loop and the recognition callback
//!   can live on different threads; a [`SessionHandle`] serializes every
//!   mutation through one mutex.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::time::Instant;
//! use math_blitz::{interpret, NumberWordTable, QuizConfig, SessionHandle, TickOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = QuizConfig::default();
//! let words = NumberWordTable::build(config.max_number, config.language)?;
//!
//! // Problems generate in the background while the host shows its countdown.
//! let session = SessionHandle::spawn_prepare(config.clone(), None)?;
//! while !session.is_ready() {
//!     std::thread::sleep(std::time::Duration::from_millis(10));
//! }
//! session.start(Instant::now())?;
//!
//! // Fixed-rate driver loop. A recognition callback would call
//! // `session.submit_answer(...)` from its own thread instead.
//! loop {
//!     match session.tick(Instant::now()) {
//!         TickOutcome::Problem(view) => {
//!             println!("{}  [{:.0}%]", view.text, view.elapsed_fraction * 100.0);
//!         }
//!         TickOutcome::Complete(summary) => {
//!             println!("Score: {}/{}", summary.correct_count, summary.total_problems);
//!             break;
//!         }
//!         TickOutcome::NotRunning => {}
//!     }
//!     if let Some(value) = interpret("eleven", config.max_number, &words) {
//!         session.submit_answer(value, Instant::now());
//!     }
//!     std::thread::sleep(config.tick_interval());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client_view;
pub mod quiz_engine;

// Convenience re-exports so callers can use `math_blitz::SessionEngine`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    interpret, AnswerOutcome, ConfigError, Language, NumberWordTable, Phase, Problem,
    ProblemGenerator, ProblemKind, ProblemView, QuizConfig, SessionEngine, SessionError,
    SessionHandle, SessionSummary, TickOutcome,
};
