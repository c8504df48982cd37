//! Screen-space display list derived from the scene and camera.
//!
//! This is a pure projection: positions and sizes are world values scaled by
//! zoom and offset by pan, font sizes scale with zoom, and stroke widths stay
//! in screen pixels regardless of zoom. The host walks the returned list in
//! order and draws each entry bottom-to-top.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Camera, Point};
use crate::consts::GRID_BASE_PX;
use crate::doc::{SceneDoc, Shape, ShapeId, ShapeKind};

/// A shape projected into screen space, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayShape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Left edge in screen pixels.
    pub x: f64,
    /// Top edge in screen pixels.
    pub y: f64,
    /// Width in screen pixels.
    pub width: f64,
    /// Height in screen pixels.
    pub height: f64,
    pub fill: String,
    pub stroke: String,
    /// Stroke width in screen pixels (not scaled by zoom).
    pub stroke_width: f64,
    pub text: Option<String>,
    /// Font size in screen pixels; present for text shapes.
    pub font_px: Option<f64>,
    pub selected: bool,
}

/// Project every shape in the scene through the camera, in paint order.
#[must_use]
pub fn display_list(doc: &SceneDoc, camera: &Camera) -> Vec<DisplayShape> {
    doc.shapes().iter().map(|shape| project(shape, camera)).collect()
}

fn project(shape: &Shape, camera: &Camera) -> DisplayShape {
    let top_left = camera.world_to_screen(Point::new(shape.x, shape.y));
    let zoom = camera.zoom();
    DisplayShape {
        id: shape.id,
        kind: shape.kind,
        x: top_left.x,
        y: top_left.y,
        width: shape.width * zoom,
        height: shape.height * zoom,
        fill: shape.fill.clone(),
        stroke: shape.stroke.clone(),
        stroke_width: shape.stroke_width,
        text: shape.text.clone(),
        font_px: shape.font_size.map(|size| size * zoom),
        selected: shape.selected,
    }
}

/// Spacing of the background dot grid in screen pixels.
#[must_use]
pub fn grid_spacing(camera: &Camera) -> f64 {
    GRID_BASE_PX * camera.zoom()
}

/// Offset of the background dot grid in screen pixels.
#[must_use]
pub fn grid_offset(camera: &Camera) -> Point {
    camera.pan()
}
