#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{SceneDoc, ShapeId};

/// Test which shape (if any) is under `world_pt`.
///
/// Shapes are scanned from topmost (last painted) to bottommost, so when
/// several shapes overlap the point, the one drawn on top wins. Bounding-box
/// edges count as inside.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &SceneDoc) -> Option<ShapeId> {
    doc.shapes().iter().rev().find(|s| s.contains(world_pt)).map(|s| s.id)
}
