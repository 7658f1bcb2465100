use crate::support::scene::{AttributeValue, Color, EntityPath, MemoryScene, Scene};

use super::attributes;

/// A display color no classification produces.
pub(crate) const BLUE: Color = Color::new(0.0, 0.0, 1.0);

/// Wraps a single color the way a display-color attribute stores it.
pub(crate) fn painted(color: Color) -> Option<AttributeValue> {
    Some(AttributeValue::Color3fArray(vec![color]))
}

/// Reads the display color of `path`, treating unresolved paths as uncolored.
pub(crate) fn display_color(scene: &MemoryScene, path: &EntityPath) -> Option<AttributeValue> {
    scene
        .attribute(path, attributes::DISPLAY_COLOR)
        .ok()
        .flatten()
}

/// Adds a rack with the given heat load and, optionally, actual flow.
pub(crate) fn rack(
    scene: MemoryScene,
    path: &str,
    heat_load: f64,
    actual_flow: Option<f64>,
) -> MemoryScene {
    let scene = scene.with_attribute(path, attributes::HEAT_LOAD, AttributeValue::Double(heat_load));
    match actual_flow {
        Some(m_dot) => scene.with_attribute(path, attributes::ACTUAL_FLOW, AttributeValue::Double(m_dot)),
        None => scene,
    }
}

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
