//! Layout error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Empty layout: no column width left after {segments} segment(s)")]
    EmptyLayout { segments: usize },
}
