//! The tick-driven session state machine.
//!
//! Lifecycle: `Initializing` (problems generating) → `InProgress` (the
//! driver ticks at a fixed rate, answers arrive from the recognition loop)
//! → `Complete` (summary produced once, further events are no-ops).
//!
//! Both advancement paths — correct answer and timeout — funnel through one
//! private mutation point, so the `current`/`answered` bookkeeping cannot
//! diverge between them.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quiz_engine::errors::{ConfigError, SessionError};
use crate::quiz_engine::generator::ProblemGenerator;
use crate::quiz_engine::models::{
    AnswerOutcome, Phase, Problem, ProblemView, QuizConfig, SessionSummary, TickOutcome,
};

/// Internal lifecycle state. The clock fields exist exactly while they are
/// meaningful, and a complete session always carries its summary.
enum State {
    Initializing,
    Running {
        session_start: Instant,
        problem_started: Instant,
    },
    Complete(SessionSummary),
}

/// One quiz session, from construction to summary.
///
/// All timestamps are injected by the caller, so tests drive the clock and
/// the engine never blocks or sleeps.
pub struct SessionEngine {
    config: QuizConfig,
    generator: ProblemGenerator,
    problems: Vec<Problem>,
    answered: Vec<bool>,
    current: usize,
    ready: bool,
    last_answer: Option<i64>,
    state: State,
}

impl SessionEngine {
    /// Validate `config` and set up an empty, not-yet-ready session.
    pub fn new(config: QuizConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = ProblemGenerator::new(config.max_number)?;
        Ok(Self {
            problems: Vec::with_capacity(config.problem_count),
            answered: vec![false; config.problem_count],
            current: 0,
            ready: false,
            last_answer: None,
            state: State::Initializing,
            generator,
            config,
        })
    }

    /// Generate the full problem list up front. The readiness flag flips
    /// only after the last problem exists. Idempotent once ready.
    pub fn prepare<R: Rng>(&mut self, rng: &mut R) {
        if self.ready {
            return;
        }

        let begun = Instant::now();
        for index in 0..self.config.problem_count {
            let problem = self.generator.generate(rng);
            tracing::trace!(index, %problem, solution = problem.solution, "generated");
            self.problems.push(problem);
        }
        self.ready = true;

        tracing::debug!(
            count = self.problems.len(),
            elapsed_ms = begun.elapsed().as_millis() as u64,
            "problem list ready"
        );
    }

    /// The sole synchronization point the driver polls before `start`.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Initializing => Phase::Initializing,
            State::Running { .. } => Phase::InProgress,
            State::Complete(_) => Phase::Complete,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Index of the active problem; equals the problem count once complete.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active problem, while the session is running.
    pub fn current_problem(&self) -> Option<&Problem> {
        match self.state {
            State::Running { .. } => self.problems.get(self.current),
            _ => None,
        }
    }

    /// Begin `InProgress`, capturing the session clock and the first
    /// problem deadline. Fails while problems are still generating, and
    /// once the session has already left `Initializing`.
    pub fn start(&mut self, now: Instant) -> Result<(), SessionError> {
        if !matches!(self.state, State::Initializing) {
            return Err(SessionError::AlreadyStarted);
        }
        if !self.ready {
            return Err(SessionError::NotReady);
        }

        self.state = State::Running {
            session_start: now,
            problem_started: now,
        };
        tracing::debug!(problems = self.problems.len(), "session started");
        Ok(())
    }

    /// One fixed-rate time advance. Forces the current problem over when
    /// its budget is spent; otherwise just reports the view to draw.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let problem_started = match &self.state {
            State::Initializing => return TickOutcome::NotRunning,
            State::Complete(summary) => return TickOutcome::Complete(summary.clone()),
            State::Running { problem_started, .. } => *problem_started,
        };

        if now.duration_since(problem_started) > self.config.per_problem_budget {
            tracing::debug!(index = self.current, "time up, forcing advance");
            self.advance(false, now);
            if let State::Complete(summary) = &self.state {
                return TickOutcome::Complete(summary.clone());
            }
        }

        TickOutcome::Problem(self.view(now))
    }

    /// Score one interpreted answer against the active solution.
    ///
    /// The raw value is always recorded for display; only a match advances
    /// the session.
    pub fn submit_answer(&mut self, value: i64, now: Instant) -> AnswerOutcome {
        match &self.state {
            State::Initializing => return AnswerOutcome::NotRunning,
            State::Complete(summary) => return AnswerOutcome::Complete(summary.clone()),
            State::Running { .. } => {}
        }

        self.last_answer = Some(value);

        if value == self.problems[self.current].solution {
            tracing::debug!(index = self.current, value, "answer correct");
            self.advance(true, now);
            if let State::Complete(summary) = &self.state {
                return AnswerOutcome::Complete(summary.clone());
            }
            AnswerOutcome::Accepted
        } else {
            tracing::debug!(index = self.current, value, "answer incorrect");
            AnswerOutcome::Rejected
        }
    }

    /// Immediately end the session from any state, discarding all further
    /// tick and answer effects.
    pub fn abort(&mut self, now: Instant) -> SessionSummary {
        if let State::Complete(summary) = &self.state {
            return summary.clone();
        }
        tracing::debug!(index = self.current, "session aborted");
        self.finish(now)
    }

    /// The summary, once the session is complete.
    pub fn current_summary(&self) -> Option<&SessionSummary> {
        match &self.state {
            State::Complete(summary) => Some(summary),
            _ => None,
        }
    }

    /// The single authoritative mutation point for `current` and
    /// `answered`. Both the correct-answer path and the timeout path land
    /// here.
    fn advance(&mut self, solved: bool, now: Instant) {
        self.answered[self.current] = solved;
        self.current += 1;

        if self.current == self.config.problem_count {
            self.finish(now);
        } else if let State::Running { problem_started, .. } = &mut self.state {
            *problem_started = now;
        }
    }

    fn finish(&mut self, now: Instant) -> SessionSummary {
        let elapsed = match self.state {
            State::Running { session_start, .. } => {
                now.duration_since(session_start).as_secs_f64()
            }
            _ => 0.0,
        };
        let summary = SessionSummary {
            elapsed_seconds: truncate_centis(elapsed),
            correct_count: self.answered.iter().filter(|&&solved| solved).count(),
            total_problems: self.config.problem_count,
        };
        tracing::debug!(
            score = summary.correct_count,
            total = summary.total_problems,
            seconds = summary.elapsed_seconds,
            "session complete"
        );
        self.state = State::Complete(summary.clone());
        summary
    }

    fn view(&self, now: Instant) -> ProblemView {
        let elapsed_fraction = match &self.state {
            State::Running { problem_started, .. } => {
                let budget = self.config.per_problem_budget.as_secs_f32();
                (now.duration_since(*problem_started).as_secs_f32() / budget).clamp(0.0, 1.0)
            }
            _ => 0.0,
        };
        ProblemView {
            text: self.problems[self.current].text.clone(),
            elapsed_fraction,
            last_answer: self.last_answer,
        }
    }
}

/// Thread-safe session handle serializing every mutation through one mutex.
///
/// The fixed-rate tick loop and the recognition callback usually live on
/// different threads; routing both through a handle keeps the engine
/// single-writer. Clones share the same session.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<SessionEngine>>,
}

impl SessionHandle {
    /// Wrap an engine that was constructed (and possibly prepared) inline.
    pub fn new(engine: SessionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Validate `config`, then generate the problem list on a background
    /// thread while the driver runs its countdown. Poll [`is_ready`] before
    /// calling [`start`].
    ///
    /// [`is_ready`]: SessionHandle::is_ready
    /// [`start`]: SessionHandle::start
    pub fn spawn_prepare(config: QuizConfig, rng_seed: Option<u64>) -> Result<Self, ConfigError> {
        let handle = Self::new(SessionEngine::new(config)?);

        let worker = handle.clone();
        thread::spawn(move || {
            let mut rng: StdRng = match rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None       => StdRng::from_entropy(),
            };
            worker.lock().prepare(&mut rng);
        });

        Ok(handle)
    }

    fn lock(&self) -> MutexGuard<'_, SessionEngine> {
        self.inner.lock().unwrap()
    }

    pub fn is_ready(&self) -> bool {
        self.lock().is_ready()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase()
    }

    pub fn config(&self) -> QuizConfig {
        self.lock().config().clone()
    }

    pub fn current_problem(&self) -> Option<Problem> {
        self.lock().current_problem().cloned()
    }

    pub fn start(&self, now: Instant) -> Result<(), SessionError> {
        self.lock().start(now)
    }

    pub fn tick(&self, now: Instant) -> TickOutcome {
        self.lock().tick(now)
    }

    pub fn submit_answer(&self, value: i64, now: Instant) -> AnswerOutcome {
        self.lock().submit_answer(value, now)
    }

    pub fn abort(&self, now: Instant) -> SessionSummary {
        self.lock().abort(now)
    }

    pub fn current_summary(&self) -> Option<SessionSummary> {
        self.lock().current_summary().cloned()
    }
}

/// Floor-truncate to two decimal places: 12.347 becomes 12.34, never 12.35.
fn truncate_centis(seconds: f64) -> f64 {
    (seconds * 100.0).floor() / 100.0
}
