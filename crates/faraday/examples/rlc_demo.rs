//! Example: Building an animated series RLC circuit
//!
//! This example assembles the circuit a typical explainer video opens with:
//! a function generator driving a resistor, an inductor and a capacitor in
//! a loop, with a ground reference hanging off the return rail. It then
//! plays a few animation frames (moving the capacitor while the wires
//! re-route) and writes the final frame to an SVG file.

use std::f32::consts::FRAC_PI_2;

use faraday::{
    config::{AppConfig, RenderConfig, StyleConfig},
    element::CircuitElement,
    export,
    router::{self, StartAxis},
    scene::Scene,
    symbol::{
        CapacitorDefinition, FunctionGeneratorDefinition, GroundDefinition, InductorDefinition,
        ResistorDefinition,
    },
};
use faraday_core::geometry::Point;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building series RLC circuit...\n");

    let config = AppConfig::new(
        StyleConfig::default(),
        RenderConfig::new(Some("#1c1c1c".to_string()), 1.5),
    );
    let mut scene = Scene::with_config(config);

    // The source sits on the left edge, feeding the top rail.
    let source = scene.add_element(CircuitElement::new(FunctionGeneratorDefinition::new())?);
    source.borrow_mut().rotate(FRAC_PI_2);

    // Resistor and inductor share the top rail; the inductor is chained
    // directly onto the resistor's right lead.
    let resistor = scene.add_element(CircuitElement::new(ResistorDefinition::new())?);
    resistor.borrow_mut().translate(Point::flat(6.0, 5.0));

    let inductor = scene.add_element(CircuitElement::new(InductorDefinition::new())?);
    inductor
        .borrow_mut()
        .connect_terminals("left", &*resistor.borrow(), "right")?;

    // The capacitor closes the loop on the right, plates horizontal.
    let capacitor = scene.add_element(CircuitElement::new(CapacitorDefinition::new())?);
    {
        let mut capacitor = capacitor.borrow_mut();
        capacitor.rotate(FRAC_PI_2);
        capacitor.translate(Point::flat(16.0, 0.0));
    }

    println!("Routing wires:");
    println!("  source top    -> resistor left  (rectilinear)");
    println!("  inductor right -> capacitor top  (rectilinear)");
    println!("  capacitor bottom -> source bottom (rectilinear)");

    let up_leg = router::connect_rectilinear(&source, "right", &resistor, "left", StartAxis::X)?;
    scene.add_wire_pair(up_leg);

    let down_leg =
        router::connect_rectilinear(&inductor, "right", &capacitor, "right", StartAxis::Y)?;
    scene.add_wire_pair(down_leg);

    let return_rail = router::connect_rectilinear(&capacitor, "left", &source, "left", StartAxis::Y)?;
    let (return_horizontal, return_vertical) = (return_rail.0, return_rail.1);

    // Split the horizontal return rail and hang the ground reference off the
    // junction.
    let (rail_left, rail_right) = router::split_wire(&return_horizontal, 0.5)?;
    scene.add_wire(rail_left.clone());
    scene.add_wire(rail_right.clone());
    scene.add_wire(return_vertical);

    let ground = scene.add_element(CircuitElement::new(GroundDefinition::new())?);
    ground
        .borrow_mut()
        .connect_terminals("ground", &*rail_left.borrow(), "right")?;

    // Play a short animation: drift the capacitor outward while the scene
    // ticks; the bound wires re-route on every frame.
    println!("\nAnimating 30 frames...");
    for _ in 0..30 {
        capacitor.borrow_mut().translate(Point::flat(0.05, 0.0));
        scene.advance_frame()?;
    }
    println!("Scene advanced to frame {}", scene.frame());

    // Render the final frame.
    let svg = export::render_svg(&scene)?;
    println!("\nSVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    let output_path = "rlc_demo_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
