use approx::assert_relative_eq;
use rack_thermal_overlay::{
    models::thermal::overlay::{
        BatchDefaults, Classification, ControllerState, Mode, OverlayConfig, OverlayController,
        PassKind, SkipReason, attributes,
    },
    support::scene::{AttributeValue, Color, EntityPath, MemoryScene, Scene},
};

const BLUE: Color = Color::new(0.0, 0.0, 1.0);

fn color_of(overlay: &OverlayController<MemoryScene>, path: &EntityPath) -> Option<Color> {
    let scene = overlay.scene()?;
    match scene.attribute(path, attributes::DISPLAY_COLOR).ok()?? {
        AttributeValue::Color3fArray(colors) => colors.first().copied(),
        _ => None,
    }
}

fn hall() -> MemoryScene {
    MemoryScene::new()
        .with_attribute("/Hall/RowA/Rack01", attributes::HEAT_LOAD, AttributeValue::Double(1000.0))
        .with_attribute("/Hall/RowA/Rack01", attributes::ACTUAL_FLOW, AttributeValue::Double(0.05))
        .with_attribute(
            "/Hall/RowA/Rack01",
            attributes::DISPLAY_COLOR,
            AttributeValue::Color3fArray(vec![BLUE]),
        )
        .with_attribute("/Hall/RowA/Rack02", attributes::HEAT_LOAD, AttributeValue::Double(1005.0))
        .with_attribute("/Hall/RowA/Rack02", attributes::ACTUAL_FLOW, AttributeValue::Float(0.1))
        .with_attribute("/Hall/RowB/Rack03", attributes::HEAT_LOAD, AttributeValue::Int(500))
        .with_attribute("/Hall/RowB/Rack03", attributes::ACTUAL_FLOW, AttributeValue::Double(1.0))
        .with_attribute(
            "/Hall/RowB/Rack04",
            attributes::HEAT_LOAD,
            AttributeValue::Token("not a number".into()),
        )
}

#[test]
fn session_lifecycle() {
    let rack01 = EntityPath::new("/Hall/RowA/Rack01");
    let rack02 = EntityPath::new("/Hall/RowA/Rack02");
    let rack03 = EntityPath::new("/Hall/RowB/Rack03");
    let rack04 = EntityPath::new("/Hall/RowB/Rack04");

    let mut overlay = OverlayController::new(Some(hall()), OverlayConfig::default());
    assert_eq!(overlay.state(), ControllerState::EnabledClean);

    // Audit: 1000 W at 0.05 kg/s is ~19.9 K, 1005 W at 0.1 kg/s is 10 K,
    // 500 W at 1 kg/s is ~0.5 K.
    let report = overlay.recompute();
    assert_eq!(report.kind, PassKind::Full);
    assert_eq!(overlay.state(), ControllerState::EnabledClean);
    assert_eq!(report.annotated_as(Classification::Over), 1);
    assert_eq!(report.annotated_as(Classification::Match), 1);
    assert_eq!(report.annotated_as(Classification::Under), 1);
    assert_eq!(report.skipped_for(SkipReason::UnparsableHeatLoad), 1);

    assert_eq!(color_of(&overlay, &rack01), Some(Classification::OVER_COLOR));
    assert_eq!(color_of(&overlay, &rack02), Some(Classification::MATCH_COLOR));
    assert_eq!(color_of(&overlay, &rack03), Some(Classification::UNDER_COLOR));
    assert_eq!(color_of(&overlay, &rack04), None);

    // Design mode writes the required flow and classifies every rack as a match.
    let report = overlay.set_mode(Mode::Design);
    assert_eq!(report.restore.restored, 3);
    assert_eq!(report.annotated_as(Classification::Match), 3);
    let scene = overlay.scene().unwrap();
    let required = scene
        .attribute(&rack01, attributes::REQUIRED_FLOW)
        .unwrap()
        .and_then(|value| value.as_f64())
        .unwrap();
    assert_relative_eq!(required, 1000.0 / (1005.0 * 10.0), max_relative = 1e-12);

    // Disabling restores the authored blue and removes colors that never existed.
    let report = overlay.set_annotation_enabled(false);
    assert_eq!(report.kind, PassKind::Restore);
    assert_eq!(overlay.state(), ControllerState::Disabled);
    assert!(overlay.cache().is_empty());
    assert_eq!(color_of(&overlay, &rack01), Some(BLUE));
    assert_eq!(color_of(&overlay, &rack02), None);
    assert_eq!(color_of(&overlay, &rack03), None);
}

#[test]
fn disabled_config_starts_disabled_and_paints_nothing() {
    let config = OverlayConfig {
        annotation_enabled: false,
        ..OverlayConfig::default()
    };
    let mut overlay = OverlayController::new(Some(hall()), config);
    assert_eq!(overlay.state(), ControllerState::Disabled);

    let report = overlay.recompute();
    assert_eq!(report.kind, PassKind::Restore);
    assert_eq!(overlay.state(), ControllerState::Disabled);
    assert_eq!(
        color_of(&overlay, &EntityPath::new("/Hall/RowA/Rack01")),
        Some(BLUE)
    );
    assert_eq!(color_of(&overlay, &EntityPath::new("/Hall/RowA/Rack02")), None);
}

#[test]
fn batch_assignment_then_shutdown() {
    let racks = [
        EntityPath::new("/Hall/RowC/Rack10"),
        EntityPath::new("/Hall/RowC/Rack11"),
    ];
    let mut scene = MemoryScene::new();
    for rack in &racks {
        scene.define(rack);
    }

    let mut overlay = OverlayController::new(Some(scene), OverlayConfig::default());
    let mut requested = racks.to_vec();
    requested.push(EntityPath::new("/Hall/Missing"));

    let outcome = overlay.assign_batch(&requested, BatchDefaults::default());
    assert_eq!(outcome.assigned, 2);

    // 1000 W at 0.1 kg/s is ~9.95 K against a 10 K target.
    assert_eq!(outcome.pass.annotated_as(Classification::Under), 2);
    for rack in &racks {
        assert_eq!(color_of(&overlay, rack), Some(Classification::UNDER_COLOR));
    }

    let report = overlay.shutdown();
    assert_eq!(report.restore.restored, 2);
    assert!(overlay.scene().is_none());
    assert_eq!(overlay.recompute().kind, PassKind::NoScene);
}

#[test]
fn dropping_the_controller_restores_the_scene() {
    let rack = EntityPath::new("/Hall/RowA/Rack01");
    let mut scene = hall();

    {
        let mut overlay = OverlayController::new(Some(&mut scene), OverlayConfig::default());
        overlay.recompute();
    }

    assert_eq!(
        scene.attribute(&rack, attributes::DISPLAY_COLOR).unwrap(),
        Some(AttributeValue::Color3fArray(vec![BLUE]))
    );
    assert_eq!(
        scene
            .attribute(&EntityPath::new("/Hall/RowA/Rack02"), attributes::DISPLAY_COLOR)
            .unwrap(),
        None
    );
}
