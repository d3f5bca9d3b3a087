//! Authoring configuration

use serde::{Deserialize, Serialize};

use auditorium_layout::MarkupStyle;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classes used for column markup
    pub style: MarkupStyle,
    /// Per-step time given to animations created without one
    pub default_step_time: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: MarkupStyle::default(),
            default_step_time: 1.0,
        }
    }
}

impl Config {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_step_time.is_nan() || self.default_step_time <= 0.0 {
            return Err(CoreError::Config(format!(
                "default_step_time must be positive, got {}",
                self.default_step_time
            )));
        }
        Ok(())
    }
}
