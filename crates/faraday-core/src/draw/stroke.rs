//! Stroke definitions for circuit outlines.
//!
//! A [`StrokeDefinition`] bundles everything needed to ink a path: color,
//! width, dash style, and how endpoints and corners are rendered. The
//! properties map directly onto SVG stroke attributes; the
//! [`apply_stroke!`](crate::apply_stroke!) macro applies all of them to an
//! SVG element at once.
//!
//! Circuit symbols default to a fairly heavy solid stroke with round caps
//! and joins, which reads well at diagram scale; symbols with sharp corners
//! (the transistor triangle) override the join per definition.

use std::str::FromStr;

use crate::color::Color;

/// Default stroke width for catalog symbols, in diagram units.
pub const DEFAULT_STROKE_WIDTH: f32 = 0.15;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default).
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Custom SVG dasharray pattern.
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or `None` for solid
    /// lines. Dash lengths are scaled to diagram units.
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("0.2,0.2".to_string()),
            Self::Dotted => Some("0.05,0.15".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// How line endpoints are rendered. Maps to SVG `stroke-linecap`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint.
    Butt,
    /// Rounded cap extending past the endpoint (default for symbols).
    #[default]
    Round,
    /// Square cap extending past the endpoint.
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value.
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// How line corners are rendered. Maps to SVG `stroke-linejoin`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp mitered corner.
    Miter,
    /// Rounded corner (default for symbols).
    #[default]
    Round,
    /// Beveled corner.
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value.
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// A complete stroke definition for rendering outlines.
///
/// # Examples
///
/// ```
/// use faraday_core::color::Color;
/// use faraday_core::draw::{StrokeCap, StrokeDefinition};
///
/// let mut stroke = StrokeDefinition::new(Color::new("#1f77b4").unwrap(), 0.1);
/// stroke.set_cap(StrokeCap::Butt);
/// assert_eq!(stroke.width(), 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width; cap and join
    /// keep their round defaults.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in diagram units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the dash style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the line cap.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the line join.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width in diagram units.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the dash style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Sets the line cap.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Sets the line join.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }

    /// Returns a copy with a different join (builder style, used by symbol
    /// definitions that need sharp corners).
    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns a copy with a different width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: DEFAULT_STROKE_WIDTH,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Applies all stroke attributes (color, opacity, width, cap, join, and the
/// dash pattern when not solid) to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), DEFAULT_STROKE_WIDTH);
        assert_eq!(stroke.color().to_string(), "white");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.cap(), StrokeCap::Round);
        assert_eq!(stroke.join(), StrokeJoin::Round);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 0.3);
        stroke.set_style(StrokeStyle::Dashed);
        stroke.set_cap(StrokeCap::Square);
        stroke.set_join(StrokeJoin::Bevel);

        assert_eq!(stroke.width(), 0.3);
        assert_eq!(*stroke.style(), StrokeStyle::Dashed);
        assert_eq!(stroke.cap(), StrokeCap::Square);
        assert_eq!(stroke.join(), StrokeJoin::Bevel);
    }

    #[test]
    fn test_stroke_builders() {
        let stroke = StrokeDefinition::default()
            .with_join(StrokeJoin::Miter)
            .with_width(0.03);
        assert_eq!(stroke.join(), StrokeJoin::Miter);
        assert_eq!(stroke.width(), 0.03);
    }

    #[test]
    fn test_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert!(StrokeStyle::Dashed.to_svg_value().is_some());
        assert_eq!(
            StrokeStyle::Custom("1,2".to_string()).to_svg_value(),
            Some("1,2".to_string())
        );
    }

    #[test]
    fn test_cap_join_from_str() {
        assert_eq!(StrokeCap::from_str("round").unwrap(), StrokeCap::Round);
        assert!(StrokeCap::from_str("pointy").is_err());
        assert_eq!(StrokeJoin::from_str("miter").unwrap(), StrokeJoin::Miter);
        assert!(StrokeJoin::from_str("sharp").is_err());
    }

    #[test]
    fn test_style_from_str_falls_back_to_custom() {
        assert_eq!(StrokeStyle::from_str("solid").unwrap(), StrokeStyle::Solid);
        assert_eq!(
            StrokeStyle::from_str("3,1").unwrap(),
            StrokeStyle::Custom("3,1".to_string())
        );
    }
}
