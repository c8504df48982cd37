//! Scene model and editor engine for a client-only design tool.
//!
//! This crate owns the in-memory state of one design-editing app: the ordered
//! scene of shapes on the canvas, the pan/zoom camera, hit-testing, the
//! pointer-interaction protocol, and the project inventory behind the home
//! screen. The host presentation layer is responsible only for delivering
//! input events ([`input::InputEvent`]) and rendering the screen-space
//! display list ([`render::display_list`]); it reacts to the
//! [`engine::Action`]s each handler returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor core: pointer protocol and host-facing actions |
//! | [`doc`] | Scene document: shapes, sparse updates, the ordered store |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Tool set and input event types |
//! | [`hit`] | Hit-testing world points against the scene |
//! | [`render`] | Screen-space display list derived from scene + camera |
//! | [`project`] | In-memory project inventory (create, delete, filter) |
//! | [`session`] | Session context owning projects and the active editor |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants (zoom limits, default sizes, etc.) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod project;
pub mod render;
pub mod session;
