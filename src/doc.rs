//! Scene document: canvas shapes, their properties, and the ordered store.
//!
//! This module defines the core data types that describe what is on the
//! canvas (`Shape`, `ShapeKind`), a sparse-update type for incremental edits
//! (`PartialShape`), and the store that owns all live shapes for one editing
//! session (`SceneDoc`). Insertion order is paint order: the last shape in
//! the sequence draws on top, and the hit-tester honors the same order in
//! reverse.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{
    DEFAULT_FILL, DEFAULT_FONT_SIZE, DEFAULT_SHAPE_SIZE, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH,
    DEFAULT_TEXT,
};
use crate::error::SceneError;

/// Unique identifier for a canvas shape.
pub type ShapeId = Uuid;

/// The kind of a canvas shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle (ellipse inscribed within the bounding box).
    Circle,
    /// Text block; carries `text` content and a `font_size`.
    Text,
    /// Image placeholder tile.
    Image,
}

impl ShapeKind {
    /// Human-readable name shown in the layer list.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Text => "Text",
            Self::Image => "Image",
        }
    }
}

/// A shape as stored in the scene document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Shape kind.
    pub kind: ShapeKind,
    /// Left edge of the bounding box in world coordinates.
    pub x: f64,
    /// Top edge of the bounding box in world coordinates.
    pub y: f64,
    /// Width of the bounding box in world units. Always positive.
    pub width: f64,
    /// Height of the bounding box in world units. Always positive.
    pub height: f64,
    /// Fill color as a CSS color string.
    pub fill: String,
    /// Stroke color as a CSS color string.
    pub stroke: String,
    /// Stroke width in screen pixels.
    pub stroke_width: f64,
    /// Text content; meaningful for [`ShapeKind::Text`] only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Font size in world units; meaningful for [`ShapeKind::Text`] only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Whether this shape is the current selection. At most one shape in a
    /// scene has this set; [`SceneDoc::select`] enforces exclusivity.
    #[serde(default)]
    pub selected: bool,
}

impl Shape {
    /// Construct a shape of the given kind at the default size, centered on
    /// `center` in world coordinates.
    #[must_use]
    pub fn new(kind: ShapeKind, center: Point) -> Self {
        let is_text = kind == ShapeKind::Text;
        Self {
            id: Uuid::new_v4(),
            kind,
            x: center.x - DEFAULT_SHAPE_SIZE / 2.0,
            y: center.y - DEFAULT_SHAPE_SIZE / 2.0,
            width: DEFAULT_SHAPE_SIZE,
            height: DEFAULT_SHAPE_SIZE,
            fill: DEFAULT_FILL.to_owned(),
            stroke: DEFAULT_STROKE.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            text: is_text.then(|| DEFAULT_TEXT.to_owned()),
            font_size: is_text.then_some(DEFAULT_FONT_SIZE),
            selected: false,
        }
    }

    /// Whether the axis-aligned bounding box contains `world_pt`.
    /// Bounds are inclusive on all four edges.
    #[must_use]
    pub fn contains(&self, world_pt: Point) -> bool {
        world_pt.x >= self.x
            && world_pt.x <= self.x + self.width
            && world_pt.y >= self.y
            && world_pt.y <= self.y + self.height
    }

    /// Display name for the layer list: the text content for text shapes
    /// (when non-empty), otherwise the kind name.
    #[must_use]
    pub fn layer_name(&self) -> &str {
        match (self.kind, self.text.as_deref()) {
            (ShapeKind::Text, Some(text)) if !text.is_empty() => text,
            _ => self.kind.label(),
        }
    }
}

/// Sparse update for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialShape {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New fill color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// New stroke color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// New stroke width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// New text content, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New font size, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// Ordered store of the shapes in one editing session.
///
/// Shapes are kept in creation order; index 0 draws first (bottom) and the
/// last index draws last (top). The store is exclusively owned by its
/// session; shapes never outlive it and are never shared across sessions.
#[derive(Debug, Default)]
pub struct SceneDoc {
    shapes: Vec<Shape>,
}

impl SceneDoc {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shape of the given kind centered on `center` (world
    /// coordinates) and append it to the top of the paint order.
    pub fn add_shape(&mut self, kind: ShapeKind, center: Point) -> &Shape {
        let shape = Shape::new(kind, center);
        debug!("add {} shape {} at ({:.1}, {:.1})", kind.label(), shape.id, shape.x, shape.y);
        self.shapes.push(shape);
        // Just pushed, so the vec is non-empty.
        &self.shapes[self.shapes.len() - 1]
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Merge a sparse update into the shape with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ShapeNotFound`] if `id` is unknown; no shape is
    /// mutated in that case.
    pub fn update(&mut self, id: ShapeId, fields: &PartialShape) -> Result<(), SceneError> {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return Err(SceneError::ShapeNotFound(id));
        };
        if let Some(x) = fields.x {
            shape.x = x;
        }
        if let Some(y) = fields.y {
            shape.y = y;
        }
        if let Some(width) = fields.width {
            shape.width = width;
        }
        if let Some(height) = fields.height {
            shape.height = height;
        }
        if let Some(ref fill) = fields.fill {
            shape.fill.clone_from(fill);
        }
        if let Some(ref stroke) = fields.stroke {
            shape.stroke.clone_from(stroke);
        }
        if let Some(stroke_width) = fields.stroke_width {
            shape.stroke_width = stroke_width;
        }
        if let Some(ref text) = fields.text {
            shape.text = Some(text.clone());
        }
        if let Some(font_size) = fields.font_size {
            shape.font_size = Some(font_size);
        }
        Ok(())
    }

    /// Select the shape with the given id, deselecting every other shape.
    ///
    /// The lookup completes before any flag is rewritten, so the scan never
    /// observes partially updated state.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ShapeNotFound`] if `id` is unknown. Every
    /// selection flag is still cleared, leaving the scene fully deselected.
    pub fn select(&mut self, id: ShapeId) -> Result<(), SceneError> {
        let found = self.shapes.iter().any(|s| s.id == id);
        for shape in &mut self.shapes {
            shape.selected = found && shape.id == id;
        }
        if found {
            Ok(())
        } else {
            Err(SceneError::ShapeNotFound(id))
        }
    }

    /// Clear the selection flag on every shape.
    pub fn deselect_all(&mut self) {
        for shape in &mut self.shapes {
            shape.selected = false;
        }
    }

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.selected)
    }

    /// All shapes in paint order (first = bottom, last = top).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes in layer-list order: topmost first.
    pub fn layers(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().rev()
    }

    /// Number of shapes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the scene contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
