/// Errors raised before any mining work is performed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error("invalid minimum support {min_support}: expected a ratio in (0, 1]")]
    InvalidThreshold { min_support: f64 },

    #[error("invalid transaction matrix: {reason}")]
    InvalidMatrix { reason: String },
}

pub type MiningResult<T> = Result<T, MiningError>;
