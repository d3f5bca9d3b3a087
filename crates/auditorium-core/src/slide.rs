//! Slide content buffer
//!
//! A slide owns the ordered markup fragments being assembled for it. Ordering
//! slides, transitions and writing the final document happen elsewhere.

use auditorium_animation::Animation;
use auditorium_layout::{Column, ContentSink};

use crate::config::Config;
use crate::mode::ShowMode;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct Slide {
    /// How the renderer interprets this slide's content
    mode: ShowMode,
    /// Fragments appended so far, in order
    current_content: Vec<String>,
    config: Config,
}

impl Slide {
    pub fn new(mode: ShowMode) -> Self {
        Self::with_config(mode, Config::default())
    }

    pub fn with_config(mode: ShowMode, config: Config) -> Self {
        Self {
            mode,
            current_content: Vec::new(),
            config,
        }
    }

    pub fn mode(&self) -> ShowMode {
        self.mode
    }

    pub fn content(&self) -> &[String] {
        &self.current_content
    }

    pub fn into_content(self) -> Vec<String> {
        self.current_content
    }

    /// Append a raw fragment
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.current_content.push(fragment.into());
    }

    /// Column layout writing into this slide with the configured style
    pub fn column(&mut self, widths: &[f64]) -> Column<'_, Vec<String>> {
        Column::new(widths, &mut self.current_content).with_style(self.config.style.clone())
    }

    /// Build an animation; `time` falls back to the configured step time
    pub fn animation(&self, steps: usize, time: Option<f64>, looping: bool) -> Result<Animation> {
        let time = time.unwrap_or(self.config.default_step_time);
        let animation = Animation::new(steps, time, looping)?;

        tracing::debug!(steps, time, looping, mode = %self.mode, "Created animation");

        Ok(animation)
    }
}

impl ContentSink for Slide {
    fn push_fragment(&mut self, fragment: String) {
        self.current_content.push(fragment);
    }
}
