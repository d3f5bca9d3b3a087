//! Auditorium Core
//!
//! Intra-slide content assembly for browser-rendered presentations.
//! The slide owns its content buffer; columns append matched markup to it and
//! animations tell the renderer how far to reveal.

mod config;
mod error;
mod mode;
mod slide;

pub use config::Config;
pub use error::CoreError;
pub use mode::ShowMode;
pub use slide::Slide;

// Re-export the building blocks
pub use auditorium_animation::{Animation, AnimationError};
pub use auditorium_layout::{
    percentage, Column, ContentSink, LayoutError, MarkupStyle, OpenColumn, SharedContent,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
