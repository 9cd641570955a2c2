//! Turning dashboard state into something to look at.
//!
//! The builders here are pure: they project an [`AppState`] into panel
//! models, which the `text` and `html` renderers format.

mod counter;
mod filter;
mod format;
pub mod html;
pub mod text;

use crate::app::{AppState, LoadState};
use crate::provider::{Release, ReleaseAsset};
use crate::release::Title;

pub use counter::{COUNTER_DURATION, Counter, FRAME_INTERVAL, animate, ease_out_quad};
pub use filter::{FILTER_KEYWORDS, Filter, archive_slice};
pub use format::{format_count, format_file_size};

/// File extensions preferred for the headline download.
const PREFERRED_EXTENSIONS: [&str; 3] = [".zip", ".exe", ".apk"];

/// The asset offered for download in the headline panel: the first
/// installable package if there is one, else the first asset.
pub fn main_asset(release: &Release) -> Option<&ReleaseAsset> {
    release
        .assets
        .iter()
        .find(|a| PREFERRED_EXTENSIONS.iter().any(|ext| a.name.ends_with(ext)))
        .or_else(|| release.assets.first())
}

/// The "latest build" panel.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineView<'a> {
    pub title: String,
    pub date: String,
    pub asset: Option<&'a ReleaseAsset>,
    pub notes: Option<&'a str>,
}

impl<'a> HeadlineView<'a> {
    pub fn of(release: &'a Release) -> Self {
        let (title, date) = Title::of_release(release);
        Self {
            title: title.name,
            date,
            asset: main_asset(release),
            notes: release.notes(),
        }
    }
}

/// One row of the archive.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveEntryView<'a> {
    pub title: String,
    pub date: String,
    pub asset: Option<&'a ReleaseAsset>,
}

impl<'a> ArchiveEntryView<'a> {
    pub fn of(release: &'a Release) -> Self {
        let (title, date) = Title::of_release(release);
        Self {
            title: title.name,
            date,
            asset: release.assets.first(),
        }
    }
}

/// Archive rows for a sorted list: the headline is left out, then the
/// filter is applied.
pub fn archive_entries<'a>(releases: &'a [Release], filter: &Filter) -> Vec<ArchiveEntryView<'a>> {
    filter
        .apply(archive_slice(releases))
        .into_iter()
        .map(ArchiveEntryView::of)
        .collect()
}

/// What the headline and archive panels show for a state.
#[derive(Debug, Clone, PartialEq)]
pub enum Panels<'a> {
    Loading { project_name: &'static str },
    Failed { reason: &'a str },
    /// Fetch succeeded but the project has no releases.
    Empty,
    Ready {
        headline: HeadlineView<'a>,
        archive: Vec<ArchiveEntryView<'a>>,
    },
}

impl<'a> Panels<'a> {
    pub fn of(state: &'a AppState) -> Self {
        match &state.releases {
            LoadState::Loading => Panels::Loading {
                project_name: state.project.name,
            },
            LoadState::Failed(reason) => Panels::Failed {
                reason: reason.as_str(),
            },
            LoadState::Loaded(releases) => match releases.first() {
                None => Panels::Empty,
                Some(latest) => Panels::Ready {
                    headline: HeadlineView::of(latest),
                    archive: archive_entries(releases, &state.filter),
                },
            },
        }
    }
}

pub const NO_RELEASES: &str = "No releases found.";
pub const NO_FILES: &str = "No downloadable files found in this release.";

pub fn failure_message(reason: &str) -> String {
    format!("Failed to load releases. {}", reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use chrono::{TimeZone, Utc};

    fn asset(name: &str) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            size: 1536,
            download_count: 1,
            download_url: format!("https://example.com/{}", name),
        }
    }

    fn make_release(name: &str, assets: Vec<ReleaseAsset>) -> Release {
        Release {
            tag: name.to_string(),
            name: Some(name.to_string()),
            published_at: Some(Utc.with_ymd_and_hms(2025, 5, 6, 12, 0, 0).unwrap()),
            assets,
            ..Default::default()
        }
    }

    #[test]
    fn test_main_asset_prefers_packages() {
        let release = make_release(
            "v1",
            vec![asset("checksums.txt"), asset("farm.apk"), asset("farm.zip")],
        );
        assert_eq!(main_asset(&release).unwrap().name, "farm.apk");
    }

    #[test]
    fn test_main_asset_falls_back_to_first() {
        let release = make_release("v1", vec![asset("notes.pdf"), asset("src.tar.gz")]);
        assert_eq!(main_asset(&release).unwrap().name, "notes.pdf");
        assert!(main_asset(&make_release("v1", vec![])).is_none());
    }

    #[test]
    fn test_headline_view() {
        let mut release = make_release("Release 3 (4/7/25)", vec![asset("farm.exe")]);
        release.body = Some("Line one\nLine two".into());

        let view = HeadlineView::of(&release);

        assert_eq!(view.title, "Release 3");
        assert_eq!(view.date, "4/7/25");
        assert_eq!(view.asset.unwrap().name, "farm.exe");
        assert_eq!(view.notes, Some("Line one\nLine two"));
    }

    #[test]
    fn test_archive_entry_uses_first_asset() {
        let release = make_release("v1", vec![asset("readme.txt"), asset("farm.zip")]);
        let entry = ArchiveEntryView::of(&release);
        assert_eq!(entry.asset.unwrap().name, "readme.txt");
        assert_eq!(entry.date, "5/6/2025");
    }

    #[test]
    fn test_archive_entries_skip_headline_then_filter() {
        let releases = vec![
            make_release("v1.2-beta", vec![]),
            make_release("v1.1-beta", vec![]),
            make_release("v0.9-alpha", vec![]),
        ];

        let all = archive_entries(&releases, &Filter::All);
        let titles: Vec<&str> = all.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["v1.1-beta", "v0.9-alpha"]);

        let beta = archive_entries(&releases, &Filter::keyword("beta"));
        let titles: Vec<&str> = beta.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["v1.1-beta"]);

        assert!(archive_entries(&releases, &Filter::keyword("rc")).is_empty());
    }

    #[test]
    fn test_archive_entries_single_release() {
        let releases = vec![make_release("only", vec![])];
        assert_eq!(archive_entries(&releases, &Filter::All).len(), 1);
    }

    #[test]
    fn test_panels_of_state() {
        let state = AppState::default();
        assert_eq!(
            Panels::of(&state),
            Panels::Loading {
                project_name: "Within Reach"
            }
        );

        let failed = state.clone().loaded(Err(anyhow::anyhow!("boom")));
        assert_eq!(Panels::of(&failed), Panels::Failed { reason: "boom" });

        let empty = state.clone().loaded(Ok(vec![]));
        assert_eq!(Panels::of(&empty), Panels::Empty);

        let ready = AppState::new(catalog::default_project())
            .loaded(Ok(vec![make_release("v1.0", vec![])]));
        match Panels::of(&ready) {
            Panels::Ready { headline, archive } => {
                assert_eq!(headline.title, "v1.0");
                assert_eq!(archive.len(), 1);
            }
            other => panic!("expected ready panels, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            failure_message("GitHub API error: 500"),
            "Failed to load releases. GitHub API error: 500"
        );
    }
}
