//! Session context: one user's app state from launch to exit.
//!
//! The session owns the project inventory and, while a project is open, the
//! editor for it. Editor state is strictly per-open: opening a project always
//! starts from a fresh scene, and closing it (or opening another) tears the
//! old editor down. Nothing here is global: callers hold the `Session` and
//! pass it where it is needed.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use log::debug;

use crate::engine::EditorCore;
use crate::error::ProjectError;
use crate::project::{Project, ProjectId, ProjectStore};

/// App-lifetime state container.
#[derive(Debug, Default)]
pub struct Session {
    projects: ProjectStore,
    current: Option<ProjectId>,
    editor: Option<EditorCore>,
}

impl Session {
    /// Start a session with an empty project inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session seeded with the demo projects.
    #[must_use]
    pub fn with_demo_projects() -> Self {
        Self { projects: ProjectStore::with_demo_projects(), current: None, editor: None }
    }

    /// The project inventory.
    #[must_use]
    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    /// Mutable access to the project inventory.
    pub fn projects_mut(&mut self) -> &mut ProjectStore {
        &mut self.projects
    }

    /// Open a project for editing, replacing any previously open editor with
    /// a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::NotFound`] if `id` is unknown; the previously
    /// open project (if any) stays open.
    pub fn open_project(&mut self, id: ProjectId) -> Result<&mut EditorCore, ProjectError> {
        if self.projects.get(id).is_none() {
            return Err(ProjectError::NotFound(id));
        }
        debug!("opening project {id}");
        self.current = Some(id);
        Ok(self.editor.insert(EditorCore::new()))
    }

    /// The currently open project, if any.
    #[must_use]
    pub fn current_project(&self) -> Option<&Project> {
        self.current.and_then(|id| self.projects.get(id))
    }

    /// The editor for the open project, if any.
    #[must_use]
    pub fn editor(&self) -> Option<&EditorCore> {
        self.editor.as_ref()
    }

    /// Mutable editor for the open project, if any.
    pub fn editor_mut(&mut self) -> Option<&mut EditorCore> {
        self.editor.as_mut()
    }

    /// Close the open project, discarding its editor state.
    pub fn close_project(&mut self) {
        if let Some(id) = self.current.take() {
            debug!("closing project {id}");
        }
        self.editor = None;
    }
}
