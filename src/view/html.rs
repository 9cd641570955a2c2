//! HTML fragments for embedding the dashboard in a page.
//!
//! Markup lives in askama templates under `templates/`, which escape every
//! value. Element ids and class names match the stylesheet of the release
//! page: `project-selector`, `total-downloads`, `version-count`,
//! `latest-update`, `latest-release-content` and `archive-content`.

use anyhow::Result;
use askama::Template;

use crate::app::AppState;
use crate::catalog::{PROJECTS, Project};
use crate::provider::ReleaseAsset;
use crate::release::ReleaseStats;

use super::{
    ArchiveEntryView, FILTER_KEYWORDS, Filter, HeadlineView, NO_FILES, NO_RELEASES, Panels,
    failure_message, format_count, format_file_size,
};

/// A status line shown in place of panel content.
struct Notice {
    error: bool,
    message: String,
}

impl Notice {
    fn loading(message: String) -> Self {
        Self {
            error: false,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            error: true,
            message,
        }
    }
}

struct Download<'a> {
    url: &'a str,
    name: &'a str,
    size: String,
}

impl<'a> Download<'a> {
    fn of(asset: &'a ReleaseAsset) -> Self {
        Self {
            url: &asset.download_url,
            name: &asset.name,
            size: format_file_size(asset.size),
        }
    }
}

struct Tab {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "tabs.html")]
struct TabsTemplate {
    tabs: Vec<Tab>,
}

struct FilterButton {
    keyword: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "filters.html")]
struct FiltersTemplate {
    buttons: Vec<FilterButton>,
}

struct HeadlineRelease<'a> {
    title: &'a str,
    date: &'a str,
    download: Option<Download<'a>>,
    note_lines: Vec<&'a str>,
}

impl<'a> HeadlineRelease<'a> {
    fn of(headline: &'a HeadlineView<'a>) -> Self {
        Self {
            title: &headline.title,
            date: &headline.date,
            download: headline.asset.map(Download::of),
            note_lines: headline.notes.map(|n| n.lines().collect()).unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "headline.html")]
struct HeadlineTemplate<'a> {
    notice: Option<Notice>,
    release: Option<HeadlineRelease<'a>>,
    no_files: &'static str,
}

struct ArchiveRow<'a> {
    title: &'a str,
    date: &'a str,
    download: Option<Download<'a>>,
}

impl<'a> ArchiveRow<'a> {
    fn of(entry: &'a ArchiveEntryView<'a>) -> Self {
        Self {
            title: &entry.title,
            date: &entry.date,
            download: entry.asset.map(Download::of),
        }
    }
}

#[derive(Template)]
#[template(path = "archive.html")]
struct ArchiveTemplate<'a> {
    notice: Option<Notice>,
    rows: Vec<ArchiveRow<'a>>,
}

#[derive(Template)]
#[template(path = "board.html")]
struct BoardTemplate<'a> {
    title: &'a str,
    description: &'a str,
    tabs: String,
    downloads: String,
    versions: String,
    latest: String,
    headline: String,
    filters: String,
    archive: String,
}

/// One tab button per project, the current one marked active.
pub fn render_tabs(current: &Project) -> Result<String> {
    let tabs = PROJECTS
        .iter()
        .map(|p| Tab {
            id: p.id,
            name: p.name,
            icon: p.icon,
            active: p.id == current.id,
        })
        .collect();
    Ok(TabsTemplate { tabs }.render()?)
}

/// Filter buttons tagged with their keyword, the active one marked.
pub fn render_filters(active: &Filter) -> Result<String> {
    let buttons = FILTER_KEYWORDS
        .iter()
        .map(|&keyword| FilterButton {
            keyword,
            active: Filter::keyword(keyword) == *active,
        })
        .collect();
    Ok(FiltersTemplate { buttons }.render()?)
}

/// Text for the three statistics targets: downloads, versions, latest update.
pub fn render_stats(stats: Option<&ReleaseStats>) -> [String; 3] {
    match stats {
        Some(stats) => [
            format_count(stats.total_downloads),
            stats.version_count.to_string(),
            stats.latest_update.clone().unwrap_or_else(|| "-".to_string()),
        ],
        None => ["-".to_string(), "-".to_string(), "-".to_string()],
    }
}

/// Content of the headline container.
pub fn render_headline(panels: &Panels<'_>) -> Result<String> {
    let (notice, release) = match panels {
        Panels::Loading { project_name } => (
            Some(Notice::loading(format!("Loading latest {} build", project_name))),
            None,
        ),
        Panels::Failed { reason } => (Some(Notice::error(failure_message(reason))), None),
        Panels::Empty => (Some(Notice::error(NO_RELEASES.to_string())), None),
        Panels::Ready { headline, .. } => (None, Some(HeadlineRelease::of(headline))),
    };
    let template = HeadlineTemplate {
        notice,
        release,
        no_files: NO_FILES,
    };
    Ok(template.render()?)
}

/// Content of the archive container.
pub fn render_archive(panels: &Panels<'_>) -> Result<String> {
    let (notice, rows) = match panels {
        Panels::Loading { .. } => (
            Some(Notice::loading("Loading build archive".to_string())),
            vec![],
        ),
        Panels::Failed { reason } => (Some(Notice::error(failure_message(reason))), vec![]),
        Panels::Ready { archive, .. } if !archive.is_empty() => {
            (None, archive.iter().map(ArchiveRow::of).collect())
        }
        Panels::Empty | Panels::Ready { .. } => {
            (Some(Notice::error(NO_RELEASES.to_string())), vec![])
        }
    };
    Ok(ArchiveTemplate { notice, rows }.render()?)
}

/// A standalone document holding every fragment in its container.
pub fn render_document(state: &AppState) -> Result<String> {
    let panels = Panels::of(state);
    let [downloads, versions, latest] = render_stats(state.stats().as_ref());
    let board = BoardTemplate {
        title: state.project.name,
        description: state.project.description,
        tabs: render_tabs(state.project)?,
        downloads,
        versions,
        latest,
        headline: render_headline(&panels)?,
        filters: render_filters(&state.filter)?,
        archive: render_archive(&panels)?,
    };
    Ok(board.render()?)
}
