//! The compiled-in list of projects the dashboard can show.

use crate::provider::RepoId;

/// GitHub account that owns every catalog repository.
pub const OWNER: &str = "FaR-Team";

/// A project whose releases can be browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    /// Font Awesome class list used by the HTML tabs.
    pub icon: &'static str,
    pub repo: &'static str,
    pub description: &'static str,
}

impl Project {
    pub fn repo_id(&self) -> RepoId {
        RepoId::new(OWNER, self.repo)
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "farmoxel",
        name: "Within Reach",
        repo: "Project-FaR",
        icon: "fas fa-tractor",
        description: "A voxel-based farming simulator with unique gameplay mechanics.",
    },
    Project {
        id: "roommakers",
        name: "Room Makers",
        repo: "RoomMakers-Android",
        icon: "fas fa-couch",
        description: "Design and organize your dream rooms in this interactive builder.",
    },
];

/// The project selected when none is requested.
pub fn default_project() -> &'static Project {
    &PROJECTS[0]
}

/// Looks a project up by its identifier.
pub fn find(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Like [`find`], but with an error listing the known identifiers.
pub fn resolve(id: &str) -> anyhow::Result<&'static Project> {
    find(id).ok_or_else(|| {
        let known: Vec<&str> = PROJECTS.iter().map(|p| p.id).collect();
        anyhow::anyhow!("Unknown project '{}'. Known projects: {}", id, known.join(", "))
    })
}
