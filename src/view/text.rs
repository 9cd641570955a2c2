//! Plain-text rendering for the terminal.

use std::fmt::Write;

use crate::app::AppState;
use crate::catalog::{PROJECTS, Project};
use crate::release::ReleaseStats;

use super::{
    ArchiveEntryView, HeadlineView, NO_FILES, NO_RELEASES, Panels, failure_message, format_count,
    format_file_size,
};

/// Project names on one line, the current one in brackets.
pub fn render_tabs(current: &Project) -> String {
    PROJECTS
        .iter()
        .map(|p| {
            if p.id == current.id {
                format!("[{}]", p.name)
            } else {
                format!(" {} ", p.name)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// The statistics line for given counter values. Used for every animation
/// frame as well as the final figures.
pub fn stats_line(downloads: u64, versions: u64, latest_update: &str) -> String {
    format!(
        "Total downloads: {}   Versions: {}   Latest update: {}",
        format_count(downloads),
        versions,
        latest_update
    )
}

/// The statistics line with final values, or placeholders while nothing is
/// loaded.
pub fn render_stats(stats: Option<&ReleaseStats>) -> String {
    match stats {
        Some(stats) => stats_line(
            stats.total_downloads,
            stats.version_count as u64,
            stats.latest_update.as_deref().unwrap_or("-"),
        ),
        None => "Total downloads: -   Versions: -   Latest update: -".to_string(),
    }
}

fn write_headline(out: &mut String, headline: &HeadlineView<'_>) {
    let _ = writeln!(out, "  {}", headline.title);
    let _ = writeln!(out, "  Released on {}", headline.date);
    match headline.asset {
        Some(asset) => {
            let _ = writeln!(
                out,
                "  Download {} ({})  {}",
                asset.name,
                format_file_size(asset.size),
                asset.download_url
            );
        }
        None => {
            let _ = writeln!(out, "  {}", NO_FILES);
        }
    }
    if let Some(notes) = headline.notes {
        let _ = writeln!(out, "  Release notes:");
        for line in notes.lines() {
            let _ = writeln!(out, "    {}", line);
        }
    }
}

fn write_entry(out: &mut String, entry: &ArchiveEntryView<'_>) {
    let _ = write!(out, "  - {}  ({})", entry.title, entry.date);
    if let Some(asset) = entry.asset {
        let _ = write!(
            out,
            "  Download {}  {}",
            format_file_size(asset.size),
            asset.download_url
        );
    }
    out.push('\n');
}

/// The headline panel.
pub fn render_headline(panels: &Panels<'_>) -> String {
    let mut out = String::from("Latest build\n");
    match panels {
        Panels::Loading { project_name } => {
            let _ = writeln!(out, "  Loading latest {} build", project_name);
        }
        Panels::Failed { reason } => {
            let _ = writeln!(out, "  {}", failure_message(reason));
        }
        Panels::Empty => {
            let _ = writeln!(out, "  {}", NO_RELEASES);
        }
        Panels::Ready { headline, .. } => write_headline(&mut out, headline),
    }
    out
}

/// The archive panel, headed by the active filter.
pub fn render_archive(panels: &Panels<'_>, filter: &super::Filter) -> String {
    let mut out = format!("Build archive (filter: {})\n", filter);
    match panels {
        Panels::Loading { .. } => {
            let _ = writeln!(out, "  Loading build archive");
        }
        Panels::Failed { reason } => {
            let _ = writeln!(out, "  {}", failure_message(reason));
        }
        Panels::Empty => {
            let _ = writeln!(out, "  {}", NO_RELEASES);
        }
        Panels::Ready { archive, .. } if archive.is_empty() => {
            let _ = writeln!(out, "  {}", NO_RELEASES);
        }
        Panels::Ready { archive, .. } => {
            for entry in archive {
                write_entry(&mut out, entry);
            }
        }
    }
    out
}

/// Both panels, without tabs or statistics.
pub fn render_panels(state: &AppState) -> String {
    let panels = Panels::of(state);
    format!(
        "{}\n{}",
        render_headline(&panels),
        render_archive(&panels, &state.filter)
    )
}

/// The whole dashboard with final statistics.
pub fn render(state: &AppState) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        render_tabs(state.project),
        render_stats(state.stats().as_ref()),
        render_panels(state)
    )
}
