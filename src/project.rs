//! Project inventory behind the home screen.
//!
//! Projects live entirely in memory for the lifetime of a [`crate::session::Session`];
//! there is no persistence. The list keeps newest-first order, matching the
//! home screen's "prepend on create" behavior, and supports the search and
//! filter chips that screen offers.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ProjectError;

/// Unique identifier for a project.
pub type ProjectId = Uuid;

/// What kind of document a project holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Screen design document.
    Design,
    /// Clickable prototype.
    Prototype,
    /// Freeform whiteboard.
    Whiteboard,
}

/// A project summary as shown on the home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Human-readable relative timestamp, e.g. `"2 hours ago"`.
    pub last_modified: String,
    /// Collaborator user names.
    pub collaborators: Vec<String>,
    /// Whether the project is shared with collaborators.
    pub is_shared: bool,
    /// Document kind.
    pub kind: ProjectKind,
}

/// Sparse update for a project. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialProject {
    /// New display name, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New thumbnail URL, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// New relative timestamp, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// New shared flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,
    /// New document kind, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProjectKind>,
}

/// Filter chips on the home screen's project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    /// All projects.
    #[default]
    All,
    /// Projects touched within the last hours.
    Recent,
    /// Projects shared with collaborators.
    Shared,
}

/// In-memory project inventory, newest first.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

const DEMO_THUMBNAIL: &str =
    "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=300&h=200&dpr=2";

impl ProjectStore {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory seeded with the three demo projects.
    #[must_use]
    pub fn with_demo_projects() -> Self {
        let projects = vec![
            Project {
                id: Uuid::new_v4(),
                name: "Mobile App Design".to_owned(),
                thumbnail: DEMO_THUMBNAIL.to_owned(),
                last_modified: "2 hours ago".to_owned(),
                collaborators: vec!["user1".to_owned(), "user2".to_owned()],
                is_shared: true,
                kind: ProjectKind::Design,
            },
            Project {
                id: Uuid::new_v4(),
                name: "Website Prototype".to_owned(),
                thumbnail: "https://images.pexels.com/photos/326502/pexels-photo-326502.jpeg?auto=compress&cs=tinysrgb&w=300&h=200&dpr=2".to_owned(),
                last_modified: "1 day ago".to_owned(),
                collaborators: vec!["user1".to_owned()],
                is_shared: false,
                kind: ProjectKind::Prototype,
            },
            Project {
                id: Uuid::new_v4(),
                name: "Brainstorming Session".to_owned(),
                thumbnail: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=300&h=200&dpr=2".to_owned(),
                last_modified: "3 days ago".to_owned(),
                collaborators: vec!["user1".to_owned(), "user2".to_owned(), "user3".to_owned()],
                is_shared: true,
                kind: ProjectKind::Whiteboard,
            },
        ];
        Self { projects }
    }

    /// Create a project and prepend it to the list (newest first).
    pub fn create(&mut self, name: impl Into<String>, kind: ProjectKind) -> &Project {
        let project = Project {
            id: Uuid::new_v4(),
            name: name.into(),
            thumbnail: DEMO_THUMBNAIL.to_owned(),
            last_modified: "Just now".to_owned(),
            collaborators: Vec::new(),
            is_shared: false,
            kind,
        };
        debug!("created project {} ({})", project.name, project.id);
        self.projects.insert(0, project);
        &self.projects[0]
    }

    /// Remove a project by id, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::NotFound`] if `id` is unknown.
    pub fn delete(&mut self, id: ProjectId) -> Result<Project, ProjectError> {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return Err(ProjectError::NotFound(id));
        };
        let project = self.projects.remove(index);
        debug!("deleted project {} ({id})", project.name);
        Ok(project)
    }

    /// Merge a sparse update into the project with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::NotFound`] if `id` is unknown; no project is
    /// mutated in that case.
    pub fn update(&mut self, id: ProjectId, fields: &PartialProject) -> Result<(), ProjectError> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return Err(ProjectError::NotFound(id));
        };
        if let Some(ref name) = fields.name {
            project.name.clone_from(name);
        }
        if let Some(ref thumbnail) = fields.thumbnail {
            project.thumbnail.clone_from(thumbnail);
        }
        if let Some(ref last_modified) = fields.last_modified {
            project.last_modified.clone_from(last_modified);
        }
        if let Some(is_shared) = fields.is_shared {
            project.is_shared = is_shared;
        }
        if let Some(kind) = fields.kind {
            project.kind = kind;
        }
        Ok(())
    }

    /// Return a reference to a project by id.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All projects, newest first.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects matching a case-insensitive name search and a filter chip,
    /// in list order.
    #[must_use]
    pub fn filter(&self, query: &str, filter: ProjectFilter) -> Vec<&Project> {
        let query = query.to_lowercase();
        self.projects
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .filter(|p| match filter {
                ProjectFilter::All => true,
                ProjectFilter::Shared => p.is_shared,
                ProjectFilter::Recent => {
                    p.last_modified.contains("hour") || p.last_modified == "Just now"
                }
            })
            .collect()
    }

    /// Number of projects in the inventory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the inventory contains no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
