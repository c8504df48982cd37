//! Shared numeric and color constants for the editor.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest permitted zoom factor.
pub const ZOOM_MIN: f64 = 0.1;

/// Largest permitted zoom factor.
pub const ZOOM_MAX: f64 = 5.0;

/// Increment applied by the zoom in/out controls.
pub const ZOOM_STEP: f64 = 0.1;

// ── Shapes ──────────────────────────────────────────────────────

/// Width and height of a freshly placed shape, in world units.
pub const DEFAULT_SHAPE_SIZE: f64 = 100.0;

/// Font size given to a freshly placed text shape, in world units.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Fill color for new shapes.
pub const DEFAULT_FILL: &str = "#3B82F6";

/// Stroke color for new shapes.
pub const DEFAULT_STROKE: &str = "#1E40AF";

/// Stroke width for new shapes, in screen pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Placeholder content for new text shapes.
pub const DEFAULT_TEXT: &str = "Text";

// ── Rendering ───────────────────────────────────────────────────

/// Dot-grid spacing at zoom 1.0, in screen pixels.
pub const GRID_BASE_PX: f64 = 20.0;
