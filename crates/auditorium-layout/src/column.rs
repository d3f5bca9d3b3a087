//! Scoped column builder
//!
//! Every width fraction opens exactly one segment, so a layout with `n` calls
//! to `tab()` needs `n + 1` widths. Fractions are expected in `(0, 1]` but not
//! enforced.

use std::collections::VecDeque;

use crate::error::LayoutError;
use crate::sink::ContentSink;
use crate::style::MarkupStyle;
use crate::Result;

/// A column layout that has not been entered yet. Nothing is emitted until
/// [`Column::enter`] or [`Column::scope`].
pub struct Column<'a, S: ContentSink + ?Sized> {
    /// Remaining width fractions, consumed from the front
    widths: VecDeque<f64>,
    style: MarkupStyle,
    sink: &'a mut S,
}

impl<'a, S: ContentSink + ?Sized> Column<'a, S> {
    /// Copy `widths` and borrow the sink the markup will be appended to
    pub fn new(widths: &[f64], sink: &'a mut S) -> Self {
        Self {
            widths: widths.iter().copied().collect(),
            style: MarkupStyle::default(),
            sink,
        }
    }

    pub fn with_style(mut self, style: MarkupStyle) -> Self {
        self.style = style;
        self
    }

    /// Width fractions not yet consumed
    pub fn remaining(&self) -> impl Iterator<Item = f64> + '_ {
        self.widths.iter().copied()
    }

    /// Open the row and its first segment.
    ///
    /// Fails with [`LayoutError::EmptyLayout`] before emitting anything when
    /// no width was given.
    pub fn enter(self) -> Result<OpenColumn<'a, S>> {
        let Column {
            mut widths,
            style,
            sink,
        } = self;

        let width = widths
            .pop_front()
            .ok_or(LayoutError::EmptyLayout { segments: 0 })?;
        check_width(width, 0);

        sink.push_fragment(style.row_open());
        sink.push_fragment(style.segment_open(width));

        tracing::debug!(width, remaining = widths.len(), "Opened column layout");

        Ok(OpenColumn {
            widths,
            style,
            sink,
            segments: 1,
            closed: false,
        })
    }

    /// Enter, run `body`, then close regardless of how `body` finished.
    pub fn scope<T, E, F>(self, body: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut OpenColumn<'a, S>) -> std::result::Result<T, E>,
        E: From<LayoutError>,
    {
        let mut open = self.enter()?;
        let result = body(&mut open);
        open.close();
        result
    }
}

/// An entered column layout. Closing markup is emitted exactly once, by
/// [`OpenColumn::close`] or on drop.
pub struct OpenColumn<'a, S: ContentSink + ?Sized> {
    widths: VecDeque<f64>,
    style: MarkupStyle,
    sink: &'a mut S,
    /// Segments opened so far, including the current one
    segments: usize,
    closed: bool,
}

impl<'a, S: ContentSink + ?Sized> OpenColumn<'a, S> {
    /// Close the current segment and open the next one.
    ///
    /// Fails with [`LayoutError::EmptyLayout`] before emitting anything when
    /// the widths are used up; the current segment stays open.
    pub fn tab(&mut self) -> Result<()> {
        let width = self.widths.pop_front().ok_or(LayoutError::EmptyLayout {
            segments: self.segments,
        })?;
        check_width(width, self.segments);

        self.sink.push_fragment(self.style.close().to_string());
        self.sink.push_fragment(self.style.segment_open(width));
        self.segments += 1;

        tracing::debug!(
            width,
            segment = self.segments,
            remaining = self.widths.len(),
            "Opened next column segment"
        );

        Ok(())
    }

    /// Width fractions not yet consumed
    pub fn remaining(&self) -> impl Iterator<Item = f64> + '_ {
        self.widths.iter().copied()
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Close the current segment and the row
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        self.sink.push_fragment(self.style.close().to_string());
        self.sink.push_fragment(self.style.close().to_string());

        tracing::debug!(
            segments = self.segments,
            unused = self.widths.len(),
            "Closed column layout"
        );
    }
}

impl<S: ContentSink + ?Sized> Drop for OpenColumn<'_, S> {
    fn drop(&mut self) {
        self.release();
    }
}

fn check_width(width: f64, segment: usize) {
    if !(width > 0.0 && width <= 1.0) {
        tracing::warn!(width, segment, "Column width outside (0, 1]");
    }
}
