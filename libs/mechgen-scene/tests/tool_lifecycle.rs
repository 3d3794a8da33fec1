use mechgen_scene::{
    GearTool, MemoryScene, ObjectStore, ParamValue, ParameterSet, SceneError, WheelTool,
};

#[test]
fn unregistered_tool_rejects_edits_and_actions() {
    let mut scene = MemoryScene::new();
    let mut tool = GearTool::default();

    assert!(!tool.is_registered());
    assert!(matches!(
        tool.invoke(&mut scene),
        Err(SceneError::ToolNotRegistered("Gear Generator"))
    ));
    assert!(matches!(
        tool.set_param(&mut scene, "teeth", ParamValue::Int(20)),
        Err(SceneError::ToolNotRegistered(_))
    ));
    assert_eq!(scene.object_count(), 0);
}

#[test]
fn gear_tool_edits_regenerate_in_place() {
    let mut scene = MemoryScene::new();
    let mut tool = GearTool::default();
    tool.register();

    // Editing before the first action changes the settings only.
    assert_eq!(tool.set_param(&mut scene, "teeth", ParamValue::Int(20)).unwrap(), None);
    assert_eq!(scene.object_count(), 0);

    let gear = tool.invoke(&mut scene).unwrap().unwrap();
    assert_eq!(scene.geometry(gear).unwrap().vertex_count(), 80);

    let edited = tool.set_param(&mut scene, "teeth", ParamValue::Int(250)).unwrap();
    assert_eq!(edited, Some(gear));
    assert_eq!(scene.geometry(gear).unwrap().vertex_count(), 400);
    assert_eq!(tool.params().unwrap().teeth(), 100);
    assert_eq!(scene.object_count(), 1);
}

#[test]
fn rejected_edit_does_not_regenerate() {
    let mut scene = MemoryScene::new();
    let mut tool = GearTool::default();
    tool.register();
    let gear = tool.invoke(&mut scene).unwrap().unwrap();
    let revision = scene.revision();

    let err = tool
        .set_param(&mut scene, "radius", ParamValue::Bool(true))
        .unwrap_err();
    assert!(matches!(err, SceneError::ParameterKind { .. }));
    assert_eq!(scene.revision(), revision);
    assert!(scene.contains(gear));
}

#[test]
fn wheel_tool_edits_rebuild() {
    let mut scene = MemoryScene::new();
    let mut tool = WheelTool::default();
    tool.register();

    let first = tool.invoke(&mut scene).unwrap().unwrap();
    let second = tool
        .set_param(&mut scene, "spoke_count", ParamValue::Int(8))
        .unwrap()
        .unwrap();

    assert_ne!(first, second);
    assert!(!scene.contains(first));
    assert_eq!(scene.object_count(), 1);
    assert_eq!(
        scene.geometry(second).unwrap().face_count(),
        66 + 64 * 12 + 8 * 34
    );
}

#[test]
fn unregister_detaches_settings() {
    let mut scene = MemoryScene::new();
    let mut tool = WheelTool::default();
    tool.register();
    tool.set_param(&mut scene, "apply_materials", ParamValue::Bool(false))
        .unwrap();

    let detached = tool.unregister().unwrap();
    assert!(!detached.apply_materials());
    assert!(!tool.is_registered());
    assert!(tool.params().is_err());

    // Registering again starts from defaults.
    tool.register();
    assert_eq!(
        tool.params().unwrap().get("apply_materials").unwrap(),
        ParamValue::Bool(true)
    );
}

#[test]
fn widgets_cover_every_parameter() {
    let gear = GearTool::default();
    let keys: Vec<_> = gear.widgets().iter().map(|w| w.key).collect();
    assert_eq!(keys, ["teeth", "radius", "depth", "tooth_height", "bevel_width"]);

    let wheel = WheelTool::default();
    let keys: Vec<_> = wheel.widgets().iter().map(|w| w.key).collect();
    assert_eq!(
        keys,
        ["rim_radius", "rim_width", "tire_thickness", "spoke_count", "apply_materials"]
    );
}
