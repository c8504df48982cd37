//! Input model: the tool palette and the event union delivered by the host.
//!
//! The host presentation layer owns the raw pointer/keyboard plumbing; what
//! reaches this crate is already reduced to the events below. `Tool` captures
//! the user's intent at the time of a pointer-down: `Select` resolves the
//! event against existing shapes, any drawing tool arms the next
//! pointer-down to create a shape instead.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::{PartialShape, ShapeId, ShapeKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Place a rectangle.
    Rectangle,
    /// Place a circle.
    Circle,
    /// Place a text block.
    Text,
    /// Place an image tile.
    Image,
}

impl Tool {
    /// Whether a pointer-down with this tool creates a shape.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        self != Self::Select
    }

    /// The shape kind this tool places, or `None` for the select tool.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Text => Some(ShapeKind::Text),
            Self::Image => Some(ShapeKind::Image),
        }
    }

    /// Label shown in the tool palette.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Text => "Text",
            Self::Image => "Image",
        }
    }
}

/// An input event delivered to the editor by the host.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Pointer pressed at the given screen-space position.
    PointerDown(Point),
    /// The user picked a different tool.
    ToolChanged(Tool),
    /// The zoom control produced a new zoom factor.
    ZoomChanged(f64),
    /// The canvas was panned to a new offset (screen pixels).
    PanChanged { x: f64, y: f64 },
    /// The property inspector edited fields of a shape.
    PropertyEdited { id: ShapeId, fields: PartialShape },
}
