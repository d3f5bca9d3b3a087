//! Content sinks
//!
//! The only thing a column needs from the slide that owns it is a place to
//! append markup fragments.

use parking_lot::RwLock;
use std::sync::Arc;

pub trait ContentSink {
    /// Append one fragment to the end of the content buffer
    fn push_fragment(&mut self, fragment: String);
}

impl ContentSink for Vec<String> {
    fn push_fragment(&mut self, fragment: String) {
        self.push(fragment);
    }
}

/// Cloneable handle to a content buffer shared between owners.
///
/// Every append takes the write lock, so concurrent writers are serialised
/// at fragment granularity. Keeping a column's fragments contiguous is still
/// up to the caller.
#[derive(Debug, Clone, Default)]
pub struct SharedContent {
    fragments: Arc<RwLock<Vec<String>>>,
}

impl SharedContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the fragments appended so far
    pub fn snapshot(&self) -> Vec<String> {
        self.fragments.read().clone()
    }

    /// Drain the buffer, leaving it empty
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.fragments.write())
    }

    pub fn len(&self) -> usize {
        self.fragments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.read().is_empty()
    }
}

impl ContentSink for SharedContent {
    fn push_fragment(&mut self, fragment: String) {
        self.fragments.write().push(fragment);
    }
}
