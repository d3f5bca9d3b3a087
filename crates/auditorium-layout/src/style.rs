//! Column markup
//!
//! Fragments are block-level containers; borders, gaps and the rest of the
//! look belong to the stylesheet.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupStyle {
    /// Class of the row container wrapping all segments
    pub row_class: String,
    /// Class of each proportional segment
    pub column_class: String,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self {
            row_class: "columns".to_string(),
            column_class: "column".to_string(),
        }
    }
}

impl MarkupStyle {
    pub fn row_open(&self) -> String {
        format!(r#"<div class="{}">"#, self.row_class)
    }

    pub fn segment_open(&self, fraction: f64) -> String {
        format!(
            r#"<div class="{}" style="width: {}%;">"#,
            self.column_class,
            percentage(fraction)
        )
    }

    pub fn close(&self) -> &'static str {
        "</div>"
    }
}

/// Render a width fraction as a percentage without float noise.
///
/// Rounded to 4 decimals, trailing zeros dropped: `0.3` gives `"30"`,
/// `1.0 / 3.0` gives `"33.3333"`.
pub fn percentage(fraction: f64) -> String {
    let formatted = format!("{:.4}", fraction * 100.0);
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_trims_noise() {
        assert_eq!(percentage(0.5), "50");
        assert_eq!(percentage(0.3), "30");
        assert_eq!(percentage(1.0), "100");
        assert_eq!(percentage(0.25), "25");
        assert_eq!(percentage(0.125), "12.5");
        assert_eq!(percentage(1.0 / 3.0), "33.3333");
    }

    #[test]
    fn test_default_fragments() {
        let style = MarkupStyle::default();
        assert_eq!(style.row_open(), r#"<div class="columns">"#);
        assert_eq!(
            style.segment_open(0.5),
            r#"<div class="column" style="width: 50%;">"#
        );
        assert_eq!(style.close(), "</div>");
    }

    #[test]
    fn test_partial_style_uses_defaults() {
        let style: MarkupStyle = serde_json::from_str(r#"{"row_class":"grid"}"#).unwrap();
        assert_eq!(style.row_class, "grid");
        assert_eq!(style.column_class, "column");
    }
}
