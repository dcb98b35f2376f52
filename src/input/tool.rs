//! Drawing tool selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// "No tool" is represented as `Option<Tool>::None` by the state machine.
/// Circle and rectangle place a fixed-size shape on the first click; the others
/// accumulate points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Polyline - click to add points, double-click to finish
    Line,
    /// Closed polygon - click to add points, double-click to finish (3+ points)
    Polygon,
    /// Fixed 500 m circle - single click
    Circle,
    /// Fixed ±0.01° square - single click
    Rectangle,
    /// Distance measurement - every click past the first commits a measurement
    Measure,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Line,
        Tool::Polygon,
        Tool::Circle,
        Tool::Rectangle,
        Tool::Measure,
    ];

    /// Whether the tool buffers clicked points before producing a drawing.
    pub fn accumulates_points(self) -> bool {
        matches!(self, Tool::Line | Tool::Polygon | Tool::Measure)
    }

    /// Whether a double-click finishes the tool's buffer.
    pub fn finalizes_on_double_click(self) -> bool {
        matches!(self, Tool::Line | Tool::Polygon)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Polygon => "polygon",
            Tool::Circle => "circle",
            Tool::Rectangle => "rectangle",
            Tool::Measure => "measure",
        }
    }

    /// Capitalized display name.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Line => "Line",
            Tool::Polygon => "Polygon",
            Tool::Circle => "Circle",
            Tool::Rectangle => "Rectangle",
            Tool::Measure => "Measure",
        }
    }

    /// Instruction shown when the tool becomes active.
    pub fn activation_hint(self) -> String {
        match self {
            Tool::Measure => "Click on map to start measuring distance/area".to_string(),
            Tool::Line => "Click to add points, double-click to finish line".to_string(),
            Tool::Polygon => "Click to add points, double-click to finish polygon".to_string(),
            Tool::Circle | Tool::Rectangle => {
                format!("{} tool activated - Click on map", self.label())
            }
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Polygon".parse::<Tool>().unwrap(), Tool::Polygon);
        assert!("pen".parse::<Tool>().is_err());
    }

    #[test]
    fn only_line_and_polygon_finish_on_double_click() {
        let finishing: Vec<Tool> = Tool::ALL
            .into_iter()
            .filter(|t| t.finalizes_on_double_click())
            .collect();
        assert_eq!(finishing, vec![Tool::Line, Tool::Polygon]);
        assert!(!Tool::Circle.accumulates_points());
        assert!(Tool::Measure.accumulates_points());
    }

    #[test]
    fn activation_hint_names_single_click_tools() {
        assert_eq!(
            Tool::Rectangle.activation_hint(),
            "Rectangle tool activated - Click on map"
        );
    }
}
