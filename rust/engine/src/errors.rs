use thiserror::Error;

use crate::game::RoundPhase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient funds: bet {bet} exceeds balance {balance}")]
    InsufficientFunds { bet: u32, balance: u32 },
    #[error("Bust with {score}")]
    HandOverflow { score: u32 },
    /// Controller method called out of order. Indicates a caller defect rather
    /// than a game event.
    #[error("Round is in phase {actual:?}, expected {expected:?}")]
    PhaseMismatch {
        expected: RoundPhase,
        actual: RoundPhase,
    },
}
