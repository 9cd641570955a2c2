use anyhow::Result;
use std::io::Write;

use crate::{
    app::AppState,
    runtime::Runtime,
    view::{Counter, animate, text},
};

pub mod config;
mod browse;
mod projects;
mod show;

pub use browse::{BrowseCommand, browse, run_browse};
pub use projects::projects;
pub use show::{OutputFormat, ShowOptions, run_show, show};

/// Writes tabs, statistics and both panels for `state`.
///
/// The statistics count up when `animate` is set and stdout is a terminal;
/// otherwise the final figures are written straight away.
pub(crate) async fn write_board<R: Runtime, W: Write>(
    runtime: &R,
    state: &AppState,
    animate_stats: bool,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}\n", text::render_tabs(state.project))?;

    match state.stats() {
        Some(stats) if animate_stats && runtime.stdout_is_terminal() => {
            let latest = stats.latest_update.clone().unwrap_or_else(|| "-".to_string());
            let counters = [
                Counter::new(stats.total_downloads),
                Counter::new(stats.version_count as u64),
            ];
            animate(out, &counters, |v| text::stats_line(v[0], v[1], &latest)).await?;
        }
        stats => writeln!(out, "{}", text::render_stats(stats.as_ref()))?,
    }

    writeln!(out)?;
    write!(out, "{}", text::render_panels(state))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Release, ReleaseAsset};
    use crate::runtime::MockRuntime;

    fn state_with_downloads(downloads: u64) -> AppState {
        AppState::default().loaded(Ok(vec![Release {
            tag: "v1".into(),
            assets: vec![ReleaseAsset {
                name: "farm.zip".into(),
                size: 10,
                download_count: downloads,
                download_url: "https://example.com/farm.zip".into(),
            }],
            ..Default::default()
        }]))
    }

    #[tokio::test]
    async fn test_write_board_without_terminal_writes_final_values() {
        let mut runtime = MockRuntime::new();
        runtime.expect_stdout_is_terminal().returning(|| false);

        let mut out = Vec::new();
        write_board(&runtime, &state_with_downloads(4321), true, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total downloads: 4,321   Versions: 1   Latest update: -\n"));
        assert!(!text.contains('\r'));
        assert!(text.contains("Latest build\n  v1\n"));
    }

    #[tokio::test]
    async fn test_write_board_animation_disabled() {
        let mut runtime = MockRuntime::new();
        runtime.expect_stdout_is_terminal().never();

        let mut out = Vec::new();
        write_board(&runtime, &state_with_downloads(5), false, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total downloads: 5"));
    }

    #[tokio::test]
    async fn test_write_board_animates_on_terminal() {
        let mut runtime = MockRuntime::new();
        runtime.expect_stdout_is_terminal().returning(|| true);

        let mut out = Vec::new();
        write_board(&runtime, &state_with_downloads(900), true, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\rTotal downloads: 900   Versions: 1   Latest update: -\n"));
        assert!(text.matches('\r').count() > 1);
    }
}
