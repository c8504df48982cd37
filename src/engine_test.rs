#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::doc::ShapeKind;
use crate::input::InputEvent;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn created_id(actions: &[Action]) -> ShapeId {
    actions
        .iter()
        .find_map(|a| match a {
            Action::ShapeCreated(id) => Some(*id),
            _ => None,
        })
        .expect("no ShapeCreated action")
}

fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

fn has_render_needed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::RenderNeeded))
}

// =============================================================
// Construction and defaults
// =============================================================

#[test]
fn new_core_has_no_selection() {
    let core = EditorCore::new();
    assert!(core.selection().is_none());
}

#[test]
fn new_core_default_tool_is_select() {
    let core = EditorCore::new();
    assert_eq!(core.tool(), Tool::Select);
}

#[test]
fn new_core_has_empty_scene() {
    let core = EditorCore::new();
    assert!(core.doc().is_empty());
    assert_eq!(core.shape_count(), 0);
}

#[test]
fn new_core_camera_is_identity() {
    let core = EditorCore::new();
    assert_eq!(core.camera().zoom(), 1.0);
    assert_eq!(core.camera().pan(), pt(0.0, 0.0));
}

// =============================================================
// Pointer-down: armed tool creates a shape
// =============================================================

#[test]
fn armed_pointer_down_creates_shape() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    let actions = core.on_pointer_down(pt(150.0, 150.0));
    assert_eq!(core.shape_count(), 1);
    assert!(has_action(&actions, |a| matches!(a, Action::ShapeCreated(_))));
    assert!(has_render_needed(&actions));
}

#[test]
fn end_to_end_rectangle_at_identity_camera() {
    // tool = rectangle, pointer-down at screen (150,150), zoom = 1, pan = (0,0)
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    let actions = core.on_pointer_down(pt(150.0, 150.0));

    let id = created_id(&actions);
    let shape = core.doc().get(id).unwrap();
    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(shape.x, 100.0);
    assert_eq!(shape.y, 100.0);
    assert_eq!(shape.width, 100.0);
    assert_eq!(shape.height, 100.0);
    assert_eq!(core.tool(), Tool::Select);
}

#[test]
fn armed_pointer_down_reverts_tool_to_select() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Circle);
    let actions = core.on_pointer_down(pt(0.0, 0.0));
    assert_eq!(core.tool(), Tool::Select);
    assert!(has_action(&actions, |a| *a == Action::ToolChanged(Tool::Select)));
}

#[test]
fn armed_pointer_down_converts_through_camera() {
    let mut core = EditorCore::new();
    core.set_zoom(2.0).unwrap();
    core.set_pan(100.0, 50.0);
    core.set_tool(Tool::Image);
    let actions = core.on_pointer_down(pt(300.0, 250.0));

    // world = ((300-100)/2, (250-50)/2) = (100, 100); placed at world - 50
    let shape = core.doc().get(created_id(&actions)).unwrap();
    assert_eq!(shape.x, 50.0);
    assert_eq!(shape.y, 50.0);
}

#[test]
fn armed_pointer_down_ignores_shapes_under_pointer() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(50.0, 50.0));

    core.set_tool(Tool::Circle);
    core.on_pointer_down(pt(50.0, 50.0));
    assert_eq!(core.shape_count(), 2);
}

#[test]
fn each_armed_pointer_down_needs_rearming() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(50.0, 50.0));
    // Tool reverted to select: the second press selects instead of creating.
    core.on_pointer_down(pt(50.0, 50.0));
    assert_eq!(core.shape_count(), 1);
    assert!(core.selection().is_some());
}

#[test]
fn text_tool_creates_text_shape_with_defaults() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Text);
    let actions = core.on_pointer_down(pt(100.0, 100.0));
    let shape = core.doc().get(created_id(&actions)).unwrap();
    assert_eq!(shape.kind, ShapeKind::Text);
    assert_eq!(shape.text.as_deref(), Some("Text"));
    assert_eq!(shape.font_size, Some(16.0));
}

#[test]
fn created_shape_is_not_selected() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(50.0, 50.0));
    assert!(core.selection().is_none());
}

// =============================================================
// Pointer-down: select tool
// =============================================================

#[test]
fn select_pointer_down_on_shape_selects_it() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    let actions = core.on_pointer_down(pt(50.0, 50.0));
    let id = created_id(&actions);

    let actions = core.on_pointer_down(pt(50.0, 50.0));
    assert_eq!(core.selection(), Some(id));
    assert!(has_action(&actions, |a| *a == Action::ShapeSelected(id)));
    assert!(has_render_needed(&actions));
}

#[test]
fn select_pointer_down_on_empty_space_clears_selection() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(50.0, 50.0));
    core.on_pointer_down(pt(50.0, 50.0));
    assert!(core.selection().is_some());

    let actions = core.on_pointer_down(pt(900.0, 900.0));
    assert!(core.selection().is_none());
    assert!(has_action(&actions, |a| *a == Action::SelectionCleared));
}

#[test]
fn select_prefers_topmost_overlapping_shape() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(50.0, 50.0));
    core.set_tool(Tool::Circle);
    let actions = core.on_pointer_down(pt(100.0, 100.0));
    let top = created_id(&actions);

    // (60,60) lies inside both; the circle was painted later.
    core.on_pointer_down(pt(60.0, 60.0));
    assert_eq!(core.selection(), Some(top));
}

#[test]
fn selection_moves_between_shapes() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    let first = created_id(&core.on_pointer_down(pt(50.0, 50.0)));
    core.set_tool(Tool::Rectangle);
    let second = created_id(&core.on_pointer_down(pt(300.0, 300.0)));

    core.on_pointer_down(pt(50.0, 50.0));
    assert_eq!(core.selection(), Some(first));
    core.on_pointer_down(pt(300.0, 300.0));
    assert_eq!(core.selection(), Some(second));
    assert!(!core.doc().get(first).unwrap().selected);
}

#[test]
fn select_converts_through_camera() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    let id = created_id(&core.on_pointer_down(pt(50.0, 50.0)));

    core.set_zoom(2.0).unwrap();
    core.set_pan(10.0, 10.0);
    // world (50,50) now appears at screen (110,110)
    core.on_pointer_down(pt(110.0, 110.0));
    assert_eq!(core.selection(), Some(id));
}

// =============================================================
// Zoom / pan
// =============================================================

#[test]
fn set_zoom_rejects_invalid_and_keeps_camera() {
    let mut core = EditorCore::new();
    core.set_zoom(1.5).unwrap();
    let err = core.set_zoom(0.0).unwrap_err();
    assert_eq!(err, SceneError::InvalidZoom(0.0));
    assert_eq!(core.camera().zoom(), 1.5);
}

#[test]
fn set_pan_updates_camera() {
    let mut core = EditorCore::new();
    core.set_pan(40.0, -20.0);
    assert_eq!(core.camera().pan(), pt(40.0, -20.0));
}

// =============================================================
// update_shape
// =============================================================

#[test]
fn update_shape_applies_fields_and_reports() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Rectangle);
    let id = created_id(&core.on_pointer_down(pt(50.0, 50.0)));

    let fields = PartialShape { fill: Some("#10B981".to_owned()), ..Default::default() };
    let actions = core.update_shape(id, &fields).unwrap();
    assert_eq!(core.doc().get(id).unwrap().fill, "#10B981");
    assert!(has_action(&actions, |a| *a == Action::ShapeUpdated { id }));
    assert!(has_render_needed(&actions));
}

#[test]
fn update_shape_unknown_id_errors() {
    let mut core = EditorCore::new();
    let missing = Uuid::new_v4();
    let err = core.update_shape(missing, &PartialShape::default()).unwrap_err();
    assert_eq!(err, SceneError::ShapeNotFound(missing));
}

// =============================================================
// apply: event dispatch
// =============================================================

#[test]
fn apply_pointer_down_dispatches() {
    let mut core = EditorCore::new();
    core.apply(InputEvent::ToolChanged(Tool::Rectangle)).unwrap();
    let actions = core.apply(InputEvent::PointerDown(pt(150.0, 150.0))).unwrap();
    assert!(has_action(&actions, |a| matches!(a, Action::ShapeCreated(_))));
    assert_eq!(core.shape_count(), 1);
}

#[test]
fn apply_tool_changed_echoes_action() {
    let mut core = EditorCore::new();
    let actions = core.apply(InputEvent::ToolChanged(Tool::Text)).unwrap();
    assert_eq!(actions, vec![Action::ToolChanged(Tool::Text)]);
    assert_eq!(core.tool(), Tool::Text);
}

#[test]
fn apply_zoom_changed_updates_camera() {
    let mut core = EditorCore::new();
    let actions = core.apply(InputEvent::ZoomChanged(2.0)).unwrap();
    assert_eq!(core.camera().zoom(), 2.0);
    assert!(has_render_needed(&actions));
}

#[test]
fn apply_zoom_changed_propagates_error() {
    let mut core = EditorCore::new();
    assert!(core.apply(InputEvent::ZoomChanged(-1.0)).is_err());
    assert_eq!(core.camera().zoom(), 1.0);
}

#[test]
fn apply_pan_changed_updates_camera() {
    let mut core = EditorCore::new();
    core.apply(InputEvent::PanChanged { x: 5.0, y: 6.0 }).unwrap();
    assert_eq!(core.camera().pan(), pt(5.0, 6.0));
}

#[test]
fn apply_property_edited_updates_shape() {
    let mut core = EditorCore::new();
    core.set_tool(Tool::Circle);
    let id = created_id(&core.on_pointer_down(pt(50.0, 50.0)));

    let event = InputEvent::PropertyEdited {
        id,
        fields: PartialShape { stroke_width: Some(4.0), ..Default::default() },
    };
    core.apply(event).unwrap();
    assert_eq!(core.doc().get(id).unwrap().stroke_width, 4.0);
}

#[test]
fn apply_property_edited_unknown_id_errors() {
    let mut core = EditorCore::new();
    let event = InputEvent::PropertyEdited { id: Uuid::new_v4(), fields: PartialShape::default() };
    assert!(core.apply(event).is_err());
}
