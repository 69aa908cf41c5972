//! JSON frames for a UI client.
//!
//! The engine never touches a screen; these helpers map its outputs to the
//! payload a renderer consumes — the problem screen (equation text, progress
//! toward the per-problem deadline, last spoken answer) and the game-over
//! screen (score and wall-clock time). No rendering, no I/O.

use serde_json::{json, Value};

use crate::quiz_engine::models::{ProblemView, SessionSummary};

/// Placeholder shown before the user has given any answer.
const NO_ANSWER_YET: &str = "N/A";

/// Frame for the problem screen.
pub fn problem_frame(view: &ProblemView) -> Value {
    let last_answer = view
        .last_answer
        .map(|v| v.to_string())
        .unwrap_or_else(|| NO_ANSWER_YET.to_string());

    json!({
        "screen": "problem",
        "equation": view.text,
        "progress": view.elapsed_fraction,
        "last_answer": last_answer,
    })
}

/// Frame for the game-over screen.
pub fn summary_frame(summary: &SessionSummary) -> Value {
    json!({
        "screen": "game_over",
        "game_time": format!("Game Time: {}s", summary.elapsed_seconds),
        "score": format!("Score: {}/{}", summary.correct_count, summary.total_problems),
    })
}
