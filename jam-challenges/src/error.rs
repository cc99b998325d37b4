#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// A sequence still holds a slot that is not `C` or `J` when its cost is evaluated.
    InvalidInput { sequence: String },
}

pub type ChallengeResult<T> = std::result::Result<T, ChallengeError>;

impl std::fmt::Display for ChallengeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChallengeError::InvalidInput { sequence } => write!(
                f,
                "Sequence '{}' must only contain C's and J's",
                sequence
            ),
        }
    }
}

impl std::error::Error for ChallengeError {}
