//! Show modes
//!
//! Tags how a content block is interpreted by the renderer:
//! - `Markup` (1) — rendered as markup
//! - `Code` (2) — displayed literally as code
//!
//! The integer identities are stable; they are what gets persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ShowMode {
    #[default]
    Markup = 1,
    Code = 2,
}

impl ShowMode {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShowMode::Markup => "markup",
            ShowMode::Code => "code",
        }
    }
}

impl From<ShowMode> for u8 {
    fn from(mode: ShowMode) -> Self {
        mode.as_u8()
    }
}

impl TryFrom<u8> for ShowMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ShowMode::Markup),
            2 => Ok(ShowMode::Code),
            _ => Err(format!("Unknown show mode: {}", value)),
        }
    }
}

impl std::fmt::Display for ShowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ShowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markup" => Ok(ShowMode::Markup),
            "code" => Ok(ShowMode::Code),
            _ => Err(format!("Unknown show mode: {}", s)),
        }
    }
}
