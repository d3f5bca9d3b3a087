//! Auditorium Layout
//!
//! Splits a slide horizontally into proportional segments:
//! - `Column` copies the width fractions and borrows a content sink
//! - entering opens the row and the first segment
//! - `tab()` closes the current segment and opens the next
//! - dropping or closing the open column always emits the matching closes

mod column;
mod error;
mod sink;
mod style;

pub use column::{Column, OpenColumn};
pub use error::LayoutError;
pub use sink::{ContentSink, SharedContent};
pub use style::{percentage, MarkupStyle};

pub type Result<T> = std::result::Result<T, LayoutError>;
