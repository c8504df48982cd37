use crate::doc::ShapeId;
use crate::project::ProjectId;

/// Error returned by scene and camera operations.
///
/// Every variant is recoverable: the caller picks a different id or value and
/// the store/camera is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// An operation referenced a shape id not present in the scene.
    #[error("no shape with id {0}")]
    ShapeNotFound(ShapeId),
    /// A zoom factor of zero or less (or a non-finite value) was rejected;
    /// the previous valid zoom is retained.
    #[error("invalid zoom factor {0}")]
    InvalidZoom(f64),
}

/// Error returned by project inventory operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    /// An operation referenced a project id not present in the inventory.
    #[error("no project with id {0}")]
    NotFound(ProjectId),
}
