//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Animation error: {0}")]
    Animation(#[from] auditorium_animation::AnimationError),

    #[error("Layout error: {0}")]
    Layout(#[from] auditorium_layout::LayoutError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
