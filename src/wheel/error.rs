use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WheelError {
    #[error("invalid enneagram type {0}: expected a value in 1..=9")]
    InvalidType(u8),
}
