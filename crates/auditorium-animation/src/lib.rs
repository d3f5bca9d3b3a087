//! Auditorium Animation
//!
//! A bounded step counter the renderer advances once per reveal event
//! ("next" keypress). It emits no markup; the renderer reads `current()`
//! to decide how much of an animated block to show.

mod animation;
mod error;

pub use animation::Animation;
pub use error::AnimationError;

pub type Result<T> = std::result::Result<T, AnimationError>;
