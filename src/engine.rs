use log::debug;

use crate::camera::{Camera, Point};
use crate::doc::{PartialShape, SceneDoc, ShapeId};
use crate::error::SceneError;
use crate::hit;
use crate::input::{InputEvent, Tool};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A shape was created and appended to the top of the paint order.
    ShapeCreated(ShapeId),
    /// A shape became the (exclusive) selection.
    ShapeSelected(ShapeId),
    /// Every shape was deselected.
    SelectionCleared,
    /// A shape's properties changed.
    ShapeUpdated { id: ShapeId },
    /// The active tool changed; the host should sync its tool palette.
    ToolChanged(Tool),
    /// Visible state changed; the host should redraw.
    RenderNeeded,
}

/// Core editor state for one editing session: the scene, the camera, and the
/// active tool.
///
/// All handlers run synchronously on the caller's thread and complete before
/// the next event is delivered; there is no background work and no interior
/// mutability.
#[derive(Debug, Default)]
pub struct EditorCore {
    doc: SceneDoc,
    camera: Camera,
    tool: Tool,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a host input event.
    ///
    /// # Errors
    ///
    /// Propagates [`SceneError::InvalidZoom`] from zoom changes and
    /// [`SceneError::ShapeNotFound`] from property edits; the editor state is
    /// unchanged when an error is returned.
    pub fn apply(&mut self, event: InputEvent) -> Result<Vec<Action>, SceneError> {
        match event {
            InputEvent::PointerDown(screen_pt) => Ok(self.on_pointer_down(screen_pt)),
            InputEvent::ToolChanged(tool) => {
                self.set_tool(tool);
                Ok(vec![Action::ToolChanged(tool)])
            }
            InputEvent::ZoomChanged(zoom) => {
                self.set_zoom(zoom)?;
                Ok(vec![Action::RenderNeeded])
            }
            InputEvent::PanChanged { x, y } => {
                self.set_pan(x, y);
                Ok(vec![Action::RenderNeeded])
            }
            InputEvent::PropertyEdited { id, fields } => self.update_shape(id, &fields),
        }
    }

    /// Handle a pointer-down at the given screen position.
    ///
    /// With a drawing tool armed, a new shape is created centered on the
    /// world-space point under the pointer and the tool reverts to
    /// [`Tool::Select`]. With the select tool, the point is hit-tested
    /// against the scene: a hit becomes the exclusive selection, a miss
    /// clears it.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);

        if let Some(kind) = self.tool.shape_kind() {
            let id = self.doc.add_shape(kind, world).id;
            self.tool = Tool::Select;
            return vec![
                Action::ShapeCreated(id),
                Action::ToolChanged(Tool::Select),
                Action::RenderNeeded,
            ];
        }

        if let Some(id) = hit::hit_test(world, &self.doc) {
            // Ids from the hit scan always resolve.
            let _ = self.doc.select(id);
            debug!("selected shape {id}");
            vec![Action::ShapeSelected(id), Action::RenderNeeded]
        } else {
            self.doc.deselect_all();
            vec![Action::SelectionCleared, Action::RenderNeeded]
        }
    }

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!("tool changed to {}", tool.label());
        self.tool = tool;
    }

    /// Set the camera zoom.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidZoom`] for zero, negative, or non-finite
    /// values; the camera keeps its previous zoom.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), SceneError> {
        self.camera.set_zoom(zoom)
    }

    /// Set the camera pan offset (screen pixels).
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.camera.set_pan(x, y);
    }

    /// Merge a sparse update into a shape, as issued by the property
    /// inspector.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ShapeNotFound`] if `id` is unknown; the scene is
    /// unchanged in that case.
    pub fn update_shape(
        &mut self,
        id: ShapeId,
        fields: &PartialShape,
    ) -> Result<Vec<Action>, SceneError> {
        self.doc.update(id, fields)?;
        Ok(vec![Action::ShapeUpdated { id }, Action::RenderNeeded])
    }

    // --- Queries ---

    /// The currently selected shape's id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.doc.selected().map(|s| s.id)
    }

    /// The scene document.
    #[must_use]
    pub fn doc(&self) -> &SceneDoc {
        &self.doc
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Number of shapes in the scene, for the element-count badge.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.doc.len()
    }
}
