//! Dashboard state and the controller that loads it.
//!
//! State changes are pure transitions on [`AppState`]; fetching is the only
//! side effect and lives in [`Dashboard`]. Rendering reads the state and never
//! modifies it.

use anyhow::Result;
use log::{debug, error, info};

use crate::catalog::{self, Project};
use crate::provider::{Provider, Release};
use crate::release::{ReleaseStats, sort_releases};
use crate::view::Filter;

/// Releases of the current project, as far as they are known.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    /// Releases in presentation order; index 0 is the headline.
    Loaded(Vec<Release>),
    /// The fetch failed; holds the reason shown to the user.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub project: &'static Project,
    pub filter: Filter,
    pub releases: LoadState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(catalog::default_project())
    }
}

impl AppState {
    pub fn new(project: &'static Project) -> Self {
        Self {
            project,
            filter: Filter::All,
            releases: LoadState::Loading,
        }
    }

    /// Selects another project. The filter resets and the releases must be
    /// fetched again. Selecting the current project changes nothing.
    pub fn switch_project(self, project: &'static Project) -> Self {
        if project.id == self.project.id {
            return self;
        }
        Self::new(project)
    }

    /// Selects a filter; the fetched releases are kept as they are.
    pub fn with_filter(self, filter: Filter) -> Self {
        Self { filter, ..self }
    }

    /// Records the outcome of a fetch, sorting successful results.
    pub fn loaded(self, result: Result<Vec<Release>>) -> Self {
        let releases = match result {
            Ok(mut releases) => {
                sort_releases(&mut releases);
                LoadState::Loaded(releases)
            }
            Err(e) => {
                error!("Error fetching releases for {}: {:#}", self.project.name, e);
                LoadState::Failed(e.to_string())
            }
        };
        Self { releases, ..self }
    }

    /// Forgets fetched releases so the next load fetches again.
    pub fn reloading(self) -> Self {
        Self {
            releases: LoadState::Loading,
            ..self
        }
    }

    pub fn needs_fetch(&self) -> bool {
        self.releases == LoadState::Loading
    }

    /// Sorted releases, empty unless loaded.
    pub fn sorted_releases(&self) -> &[Release] {
        match &self.releases {
            LoadState::Loaded(releases) => releases,
            _ => &[],
        }
    }

    pub fn stats(&self) -> Option<ReleaseStats> {
        ReleaseStats::from_sorted(self.sorted_releases())
    }
}

/// Fetches releases for the current project of a state.
pub struct Dashboard<P: Provider> {
    provider: P,
}

impl<P: Provider> Dashboard<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetches if the state is waiting for releases; otherwise returns it
    /// unchanged. Failures end up in the state, never as an `Err`.
    #[tracing::instrument(skip(self, state), fields(project = state.project.id))]
    pub async fn load(&self, state: AppState) -> AppState {
        if !state.needs_fetch() {
            debug!("Releases for {} already loaded", state.project.id);
            return state;
        }

        let repo = state.project.repo_id();
        info!("Loading releases for {} from {}", repo, self.provider.api_url());
        let result = self.provider.get_releases(&repo).await;
        state.loaded(result)
    }
}
