//! Core quiz engine — problem generation, answer interpretation, and the
//! tick-driven session state machine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: problems, config, views, outcomes |
//! | `errors`      | Construction-time and lifecycle error taxonomy |
//! | `numbers`     | Primality, composite tables, proper factors |
//! | `words`       | Spelled-out number words for the configured language |
//! | `generator`   | Random problems under the solution ceiling |
//! | `interpreter` | Raw transcript → integer answer, three strategies |
//! | `session`     | `SessionEngine` state machine and `SessionHandle` |

pub mod errors;
pub mod generator;
pub mod interpreter;
pub mod models;
pub mod numbers;
pub mod session;
pub mod words;

// Re-export the public API surface so callers can use
// `quiz_engine::SessionEngine` without reaching into sub-modules.
pub use errors::{ConfigError, SessionError};
pub use generator::ProblemGenerator;
pub use interpreter::interpret;
pub use models::{
    AnswerOutcome, Language, Phase, Problem, ProblemKind, ProblemView, QuizConfig,
    SessionSummary, TickOutcome,
};
pub use session::{SessionEngine, SessionHandle};
pub use words::NumberWordTable;
