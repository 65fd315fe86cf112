//! The strategy seam: anything that can pick a move.
//!
//! Search engines with incompatible statistics models (stochastic
//! visit/win counts, deterministic backed-up values, ...) implement this
//! trait independently rather than sharing a node representation.

use thiserror::Error;

use crate::board::Board;
use crate::color::PlayerColor;
use crate::placement::Placement;

/// Errors a strategy can surface to its caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// The mover has no legal placement. This is the caller's
    /// terminal-loss condition; a strategy raises it instead of returning
    /// a malformed placement.
    #[error("no legal placement available for {0}")]
    NoLegalMove(PlayerColor),
}

/// A move-selection engine.
///
/// `remaining_secs` is the mover's total remaining match time; `None` or
/// a non-positive value means the strategy falls back to its configured
/// default budget. The returned placement is always legal for `color` on
/// `board`.
pub trait Strategy {
    fn choose_move(
        &mut self,
        board: &Board,
        color: PlayerColor,
        remaining_secs: Option<f64>,
    ) -> Result<Placement, StrategyError>;
}
