//! Random problem generation under a fixed solution ceiling.
//!
//! Every kind carries its own numeric constraints so the displayed equation
//! and its solution never leave `[1, max_number]`: sums and products stay at
//! or below the ceiling, differences stay positive, quotients divide exactly
//! with a divisor that is neither 1 nor the dividend.

use rand::Rng;

use crate::quiz_engine::errors::ConfigError;
use crate::quiz_engine::models::{Problem, ProblemKind};
use crate::quiz_engine::numbers::{non_primes_up_to, proper_factors};

/// Builds random arithmetic problems below a fixed solution ceiling.
///
/// The composite-number set is precomputed at construction. A ceiling with
/// no composite material (`max_number < 4`) can never produce a division
/// problem, so construction fails loudly instead of degrading.
#[derive(Debug, Clone)]
pub struct ProblemGenerator {
    max_number: u32,
    non_primes: Vec<u32>,
}

impl ProblemGenerator {
    pub fn new(max_number: u32) -> Result<Self, ConfigError> {
        let non_primes = non_primes_up_to(max_number);
        if max_number < 4 || non_primes.is_empty() {
            return Err(ConfigError::NoDivisionMaterial { max_number });
        }
        Ok(Self {
            max_number,
            non_primes,
        })
    }

    pub fn max_number(&self) -> u32 {
        self.max_number
    }

    /// One problem of a uniformly chosen kind.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Problem {
        let kind = match rng.gen_range(0..4) {
            0 => ProblemKind::Addition,
            1 => ProblemKind::Subtraction,
            2 => ProblemKind::Division,
            _ => ProblemKind::Multiplication,
        };
        self.generate_kind(rng, kind)
    }

    /// One problem of the given kind.
    pub fn generate_kind<R: Rng>(&self, rng: &mut R, kind: ProblemKind) -> Problem {
        match kind {
            ProblemKind::Addition       => self.addition(rng),
            ProblemKind::Subtraction    => self.subtraction(rng),
            ProblemKind::Division       => self.division(rng),
            ProblemKind::Multiplication => self.multiplication(rng),
        }
    }

    /// `a + b` with `a` in `[1, max-1]` and `b` in `[1, max-a]`, so the sum
    /// stays at or below the ceiling.
    fn addition<R: Rng>(&self, rng: &mut R) -> Problem {
        let a = rng.gen_range(1..=self.max_number - 1);
        let b = rng.gen_range(1..=self.max_number - a);
        problem(ProblemKind::Addition, a, b, a + b)
    }

    /// `a - b` with `a` in `[2, max]` and `b` in `[1, a-1]`, so the
    /// difference stays positive.
    fn subtraction<R: Rng>(&self, rng: &mut R) -> Problem {
        let a = rng.gen_range(2..=self.max_number);
        let b = rng.gen_range(1..=a - 1);
        problem(ProblemKind::Subtraction, a, b, a - b)
    }

    /// `a / b` with `a` drawn from the composite set and `b` from the proper
    /// factors of `a`, so the quotient is exact and `b` is never 1 or `a`.
    fn division<R: Rng>(&self, rng: &mut R) -> Problem {
        let a = self.non_primes[rng.gen_range(0..self.non_primes.len())];
        let factors = proper_factors(a);
        let b = factors[rng.gen_range(0..factors.len())];
        problem(ProblemKind::Division, a, b, a / b)
    }

    /// `a * b` with `a` in `[2, max/2]` and `b` in `[2, max/a]`, so the
    /// product stays at or below the ceiling.
    fn multiplication<R: Rng>(&self, rng: &mut R) -> Problem {
        let a = rng.gen_range(2..=self.max_number / 2);
        let b = rng.gen_range(2..=self.max_number / a);
        problem(ProblemKind::Multiplication, a, b, a * b)
    }
}

fn problem(kind: ProblemKind, a: u32, b: u32, solution: u32) -> Problem {
    Problem {
        text: format!("{} {} {}", a, kind.symbol(), b),
        solution: i64::from(solution),
    }
}
