//! Visual style snapshots and the editable per-tool style.

use super::color::{self, HexColor};
use crate::input::Tool;
use log::warn;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Stroke width bounds in pixels.
pub const MIN_STROKE_WIDTH: u8 = 1;
pub const MAX_STROKE_WIDTH: u8 = 10;

const DEFAULT_STROKE_WIDTH: u8 = 3;
const DEFAULT_FILL_OPACITY: f64 = 0.2;

/// Dash style for strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Dash/gap lengths in pixels; `None` means a continuous stroke.
    pub fn dash_pattern(self) -> Option<&'static [u32]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(&[10, 10]),
            LineStyle::Dotted => Some(&[2, 8]),
            LineStyle::DashDot => Some(&[10, 5, 2, 5]),
        }
    }
}

/// Frozen set of visual parameters attached to a drawing.
///
/// `dash_pattern` is not stored; it is derived from `line_style` and only appears
/// in the serialized form.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSnapshot {
    pub stroke_color: HexColor,
    pub fill_color: HexColor,
    /// Stroke width in pixels (1-10)
    pub stroke_width: u8,
    /// Fill opacity (0.0-1.0)
    pub fill_opacity: f64,
    pub line_style: LineStyle,
}

/// Partial style update; `None` fields leave the current value untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    pub stroke_color: Option<HexColor>,
    pub fill_color: Option<HexColor>,
    /// Any integer; merged values are clamped to 1-10
    pub stroke_width: Option<i64>,
    pub fill_opacity: Option<f64>,
    pub line_style: Option<LineStyle>,
}

impl StyleSnapshot {
    /// Default style for a tool: its palette color, width 3, 20% fill, solid stroke.
    pub fn default_for(tool: Tool) -> Self {
        let base: HexColor = match tool {
            Tool::Line => color::GREEN,
            Tool::Polygon => color::PURPLE,
            Tool::Circle | Tool::Rectangle => color::BLUE,
            Tool::Measure => color::RED,
        }
        .into();

        Self {
            stroke_color: base.clone(),
            fill_color: base,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_opacity: DEFAULT_FILL_OPACITY,
            line_style: LineStyle::Solid,
        }
    }

    pub fn dash_pattern(&self) -> Option<&'static [u32]> {
        self.line_style.dash_pattern()
    }

    /// Returns a copy with every field present in `patch` applied.
    ///
    /// Out-of-range numbers are clamped (stroke width 1-10, opacity 0.0-1.0) with a warning.
    pub fn merged(&self, patch: &StylePatch) -> Self {
        let mut next = self.clone();

        if let Some(stroke) = &patch.stroke_color {
            next.stroke_color = stroke.clone();
        }
        if let Some(fill) = &patch.fill_color {
            next.fill_color = fill.clone();
        }
        if let Some(width) = patch.stroke_width {
            if !(i64::from(MIN_STROKE_WIDTH)..=i64::from(MAX_STROKE_WIDTH)).contains(&width) {
                warn!(
                    "Invalid stroke width {}, clamping to {}-{} range",
                    width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH
                );
            }
            next.stroke_width =
                width.clamp(i64::from(MIN_STROKE_WIDTH), i64::from(MAX_STROKE_WIDTH)) as u8;
        }
        if let Some(opacity) = patch.fill_opacity {
            if opacity.is_nan() {
                warn!("Ignoring NaN fill opacity");
            } else {
                if !(0.0..=1.0).contains(&opacity) {
                    warn!("Invalid fill opacity {:.2}, clamping to 0.0-1.0 range", opacity);
                }
                next.fill_opacity = opacity.clamp(0.0, 1.0);
            }
        }
        if let Some(line_style) = patch.line_style {
            next.line_style = line_style;
        }

        next
    }
}

impl Serialize for StyleSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StyleSnapshot", 6)?;
        state.serialize_field("strokeColor", &self.stroke_color)?;
        state.serialize_field("fillColor", &self.fill_color)?;
        state.serialize_field("strokeWidth", &self.stroke_width)?;
        state.serialize_field("fillOpacity", &self.fill_opacity)?;
        state.serialize_field("lineStyle", &self.line_style)?;
        state.serialize_field("dashPattern", &self.dash_pattern())?;
        state.end()
    }
}

/// Holds the style currently being edited for the active tool.
///
/// Selecting a tool overwrites the editable style with that tool's default; patches are
/// merged on top until the next selection.
#[derive(Clone, Debug)]
pub struct StyleResolver {
    current: StyleSnapshot,
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self {
            current: StyleSnapshot::default_for(Tool::Circle),
        }
    }
}

impl StyleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any customization and loads `tool`'s default style.
    pub fn reset_for(&mut self, tool: Tool) {
        self.current = StyleSnapshot::default_for(tool);
    }

    /// Merges `patch` into the editable style and returns the result.
    pub fn apply_override(&mut self, patch: &StylePatch) -> &StyleSnapshot {
        self.current = self.current.merged(patch);
        &self.current
    }

    pub fn current(&self) -> &StyleSnapshot {
        &self.current
    }

    /// Clone of the editable style, for freezing onto a new drawing.
    pub fn snapshot(&self) -> StyleSnapshot {
        self.current.clone()
    }
}
