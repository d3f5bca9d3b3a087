//! Animation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Invalid animation configuration: step count must be at least 1, got {steps}")]
    InvalidConfiguration { steps: usize },

    #[error("Animation step {current} out of range for {steps} steps")]
    StepOutOfRange { current: usize, steps: usize },
}
