//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration for the time-bounded Monte Carlo Tree Search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Iteration cap per turn. Each iteration is one
    /// select-expand-playout-backpropagate cycle.
    pub max_iterations: u32,

    /// UCB1 exploration constant. Higher values explore more.
    pub exploration_constant: f64,

    /// Hard per-turn wall-clock cap in seconds.
    pub max_turn_secs: f64,

    /// The per-turn budget is `min(max_turn_secs, remaining /
    /// budget_divisor)`, leaving headroom for the rest of the match.
    pub budget_divisor: f64,

    /// Assumed remaining match time when the caller passes none (or a
    /// non-positive value).
    pub default_remaining_secs: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            exploration_constant: 2.0,
            max_turn_secs: 9.0,
            budget_divisor: 6.0,
            default_remaining_secs: 180.0,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_iterations: 30,
            max_turn_secs: 2.0,
            ..Self::default()
        }
    }

    /// Builder pattern: set the iteration cap.
    pub fn with_max_iterations(mut self, n: u32) -> Self {
        self.max_iterations = n;
        self
    }

    /// Builder pattern: set the UCB1 exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: set the hard per-turn time cap.
    pub fn with_max_turn_secs(mut self, secs: f64) -> Self {
        self.max_turn_secs = secs;
        self
    }

    /// Effective per-turn budget in seconds for a given remaining match
    /// time.
    pub fn turn_budget_secs(&self, remaining_secs: Option<f64>) -> f64 {
        let remaining = match remaining_secs {
            Some(secs) if secs > 0.0 => secs,
            _ => self.default_remaining_secs,
        };
        self.max_turn_secs.min(remaining / self.budget_divisor)
    }
}
