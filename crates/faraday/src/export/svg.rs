//! SVG rendering of a scene.
//!
//! Produces one `<path>` per element and wire with stroke attributes applied
//! through the stroke macro. Scene coordinates are y-up; the drawables are
//! wrapped in a flipping group so the output matches SVG's y-down
//! convention.

use log::debug;
use svg::Document;
use svg::node::element as svg_element;

use faraday_core::{
    draw::Drawable,
    geometry::{Bounds, Point},
};

use crate::{error::FaradayError, scene::Scene};

/// Renders a scene to an SVG document.
///
/// The viewBox covers the scene bounds grown by the configured margin; the
/// configured background color, if any, becomes a backing rectangle.
pub fn to_document(scene: &Scene) -> Result<Document, FaradayError> {
    let config = scene.config().render();
    let bounds = scene
        .bounds()
        .unwrap_or_else(|| Bounds::from_point(Point::ORIGIN))
        .with_margin(config.margin());

    // Flip y: scene coordinates grow upward, SVG coordinates downward.
    let mut content = svg_element::Group::new().set("transform", "scale(1 -1)");
    for element in scene.elements() {
        content = content.add(element.borrow().render_to_svg());
    }
    for wire in scene.wires() {
        content = content.add(wire.borrow().render_to_svg());
    }

    let mut document = Document::new().set(
        "viewBox",
        (
            bounds.min_x(),
            -bounds.max_y(),
            bounds.width(),
            bounds.height(),
        ),
    );

    if let Some(background) = config.background_color().map_err(FaradayError::Config)? {
        document = document.add(
            svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", -bounds.max_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", background.to_string()),
        );
    }

    debug!(
        elements = scene.elements().len(),
        wires = scene.wires().len();
        "rendered scene to SVG"
    );
    Ok(document.add(content))
}

/// Renders a scene to an SVG string.
pub fn render_svg(scene: &Scene) -> Result<String, FaradayError> {
    Ok(to_document(scene)?.to_string())
}

#[cfg(test)]
mod tests {
    use faraday_core::geometry::Point;

    use super::*;
    use crate::config::AppConfig;
    use crate::element::CircuitElement;
    use crate::router;
    use crate::symbol::{CapacitorDefinition, ResistorDefinition};

    fn demo_scene() -> Scene {
        let mut scene = Scene::new();
        let resistor = scene.add_element(CircuitElement::new(ResistorDefinition::new()).unwrap());
        let capacitor = scene.add_element(CircuitElement::new(CapacitorDefinition::new()).unwrap());
        capacitor.borrow_mut().translate(Point::flat(7.0, 0.0));
        let wire = router::connect_straight(&resistor, "right", &capacitor, "left").unwrap();
        scene.add_wire(wire);
        scene
    }

    #[test]
    fn test_render_produces_svg() {
        let svg = render_svg(&demo_scene()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        // One path per element and wire.
        assert_eq!(svg.matches("<path").count(), 3);
    }

    #[test]
    fn test_viewbox_covers_scene() {
        let svg = render_svg(&demo_scene()).unwrap();
        assert!(svg.contains("viewBox"));
    }

    #[test]
    fn test_empty_scene_renders() {
        let scene = Scene::with_config(AppConfig::default());
        let svg = render_svg(&scene).unwrap();
        assert!(svg.contains("<svg"));
    }
}
