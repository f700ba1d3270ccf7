//! Scenario files for the preview.

use std::path::Path;

use anchortip_core::{AnchorTipError, Rect, Size, TooltipStyle};
use serde::Deserialize;

/// Largest coordinate or length a scenario may use, so placement arithmetic
/// stays far from `i32` overflow.
pub const MAX_COORDINATE: i32 = 1 << 24;

/// One tooltip to place, in window coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub anchor: Rect,
    pub container: Rect,
    pub content: Size,
    #[serde(default)]
    pub style: TooltipStyle,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, AnchorTipError> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self, AnchorTipError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AnchorTipError::config_with_source(format!("cannot read {}", path.display()), e)
        })?;
        Self::from_json(&contents)
    }

    /// Reject rects that are inverted or out of range, and out-of-range lengths.
    pub fn validate(&self) -> Result<(), AnchorTipError> {
        check_rect("anchor", self.anchor)?;
        check_rect("container", self.container)?;
        check_length("content.width", self.content.width)?;
        check_length("content.height", self.content.height)?;
        check_coordinate("style.padding", self.style.padding)?;
        if let Some(tip) = self.style.tip {
            check_length("style.tip.width", tip.width())?;
            check_length("style.tip.height", tip.height())?;
        }
        Ok(())
    }
}

fn check_rect(name: &str, rect: Rect) -> Result<(), AnchorTipError> {
    for edge in [rect.left, rect.top, rect.right, rect.bottom] {
        check_coordinate(name, edge)?;
    }
    if rect.right < rect.left || rect.bottom < rect.top {
        return Err(AnchorTipError::config(format!("{name} has right/bottom before left/top")));
    }
    Ok(())
}

fn check_length(name: &str, value: i32) -> Result<(), AnchorTipError> {
    if value < 0 {
        return Err(AnchorTipError::config(format!("{name} must not be negative")));
    }
    check_coordinate(name, value)
}

fn check_coordinate(name: &str, value: i32) -> Result<(), AnchorTipError> {
    if value.unsigned_abs() > MAX_COORDINATE as u32 {
        return Err(AnchorTipError::config(format!(
            "{name} is out of range (limit is {MAX_COORDINATE})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchortip_core::Side;
    use std::io::Write;

    #[test]
    fn test_scenario_with_default_style() {
        let scenario = Scenario::from_json(
            r#"{
                "anchor": { "left": 100, "top": 200, "right": 150, "bottom": 220 },
                "container": { "left": 0, "top": 0, "right": 400, "bottom": 600 },
                "content": { "width": 80, "height": 40 }
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.anchor.width(), 50);
        assert_eq!(scenario.content, Size::new(80, 40));
        assert_eq!(scenario.style, TooltipStyle::default());
    }

    #[test]
    fn test_scenario_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "anchor": {{ "left": 0, "top": 0, "right": 10, "bottom": 10 }},
                "container": {{ "left": 0, "top": 0, "right": 100, "bottom": 100 }},
                "content": {{ "width": 20, "height": 20 }},
                "style": {{ "side": "right" }}
            }}"#
        )
        .unwrap();

        let scenario = Scenario::load(file.path()).unwrap();
        assert_eq!(scenario.style.side, Side::Right);
    }

    #[test]
    fn test_scenario_missing_field_is_config_error() {
        let json = r#"{ "anchor": { "left": 0, "top": 0, "right": 1, "bottom": 1 } }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert_eq!(err.category(), "Config");
    }

    #[test]
    fn test_scenario_rejects_extreme_coordinates() {
        let json = r#"{
            "anchor": { "left": -2147483648, "top": 0, "right": 2147483647, "bottom": 10 },
            "container": { "left": 0, "top": 0, "right": 400, "bottom": 600 },
            "content": { "width": 80, "height": 40 }
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert_eq!(err.category(), "Config");
        assert!(err.to_string().contains("anchor"));
    }

    #[test]
    fn test_scenario_rejects_inverted_container() {
        let json = r#"{
            "anchor": { "left": 0, "top": 0, "right": 10, "bottom": 10 },
            "container": { "left": 400, "top": 0, "right": 0, "bottom": 600 },
            "content": { "width": 80, "height": 40 }
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(err.to_string().contains("container"));
    }

    #[test]
    fn test_scenario_rejects_negative_content() {
        let json = r#"{
            "anchor": { "left": 0, "top": 0, "right": 10, "bottom": 10 },
            "container": { "left": 0, "top": 0, "right": 400, "bottom": 600 },
            "content": { "width": -80, "height": 40 }
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(err.to_string().contains("content.width"));
    }
}
