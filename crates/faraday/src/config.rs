//! Configuration for scene styling and export.
//!
//! All types implement [`serde::Deserialize`] so a driver can load settings
//! from an external source; every field has a sensible default.
//!
//! # Example
//!
//! ```
//! # use faraday::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().stroke_color().is_ok());
//! assert!(config.render().background_color().is_ok());
//! ```

use serde::Deserialize;

use faraday_core::{
    color::Color,
    draw::{DEFAULT_STROKE_WIDTH, StrokeDefinition},
};

/// Top-level configuration combining style and render settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Render/export configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a config from explicit sections.
    pub fn new(style: StyleConfig, render: RenderConfig) -> Self {
        Self { style, render }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Default styling applied to elements created through
/// [`CircuitElement::with_style`](crate::element::CircuitElement::with_style).
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Stroke width in diagram units.
    #[serde(default = "default_stroke_width")]
    stroke_width: f32,

    /// Stroke color as a CSS color string. Falls back to each symbol's own
    /// default when unset.
    #[serde(default)]
    stroke_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified stroke settings.
    ///
    /// # Arguments
    ///
    /// * `stroke_width` - Stroke width in diagram units.
    /// * `stroke_color` - CSS color string, or `None` to keep each symbol's
    ///   own default.
    pub fn new(stroke_width: f32, stroke_color: Option<String>) -> Self {
        Self {
            stroke_width,
            stroke_color,
        }
    }

    /// Returns the configured stroke width.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the parsed stroke [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured color string cannot be parsed.
    pub fn stroke_color(&self) -> Result<Option<Color>, String> {
        self.stroke_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("invalid stroke color in config: {err}"))
    }

    /// Builds a [`StrokeDefinition`] from this config, layered over a
    /// symbol's base stroke.
    pub fn apply_to(&self, mut stroke: StrokeDefinition) -> Result<StrokeDefinition, String> {
        stroke.set_width(self.stroke_width);
        if let Some(color) = self.stroke_color()? {
            stroke.set_color(color);
        }
        Ok(stroke)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: None,
        }
    }
}

/// Export options used by the SVG renderer seam.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Background color as a CSS color string, or none for a transparent
    /// background.
    #[serde(default)]
    background_color: Option<String>,

    /// Margin added around the scene bounds, in diagram units.
    #[serde(default = "default_margin")]
    margin: f32,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified export settings.
    ///
    /// # Arguments
    ///
    /// * `background_color` - CSS color string, or `None` for a transparent
    ///   background.
    /// * `margin` - Margin added around the scene bounds, in diagram units.
    pub fn new(background_color: Option<String>, margin: f32) -> Self {
        Self {
            background_color,
            margin,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("invalid background color in config: {err}"))
    }

    /// Returns the viewport margin.
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            margin: default_margin(),
        }
    }
}

fn default_stroke_width() -> f32 {
    DEFAULT_STROKE_WIDTH
}

fn default_margin() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.style().stroke_width(), DEFAULT_STROKE_WIDTH);
        assert!(config.style().stroke_color().unwrap().is_none());
        assert!(config.render().background_color().unwrap().is_none());
        assert_eq!(config.render().margin(), 1.0);
    }

    #[test]
    fn test_style_apply_to() {
        let style = StyleConfig {
            stroke_width: 0.3,
            stroke_color: Some("red".to_string()),
        };

        let stroke = style.apply_to(StrokeDefinition::default()).unwrap();
        assert_eq!(stroke.width(), 0.3);
        assert_eq!(stroke.color().to_string(), "red");
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let style = StyleConfig {
            stroke_width: 0.1,
            stroke_color: Some("not-a-color".to_string()),
        };
        assert!(style.stroke_color().is_err());
    }
}
