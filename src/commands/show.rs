use anyhow::Result;
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use crate::{
    app::{AppState, Dashboard},
    catalog,
    provider::Provider,
    runtime::Runtime,
    view::{Filter, html},
};

use super::config::Config;
use super::write_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Catalog id; the default project when absent.
    pub project: Option<String>,
    pub filter: Option<String>,
    pub format: OutputFormat,
    /// Where to write the output instead of stdout.
    pub output: Option<PathBuf>,
    pub animate: bool,
}

/// Fetch and render one project
#[tracing::instrument(skip(runtime, api_url))]
pub async fn show<R: Runtime>(
    runtime: R,
    options: ShowOptions,
    api_url: Option<String>,
) -> Result<()> {
    let config = Config::new(runtime, api_url)?;
    let dashboard = Dashboard::new(config.provider);
    let mut stdout = std::io::stdout();
    run_show(&config.runtime, &dashboard, &options, &mut stdout).await
}

pub async fn run_show<R: Runtime, P: Provider, W: Write>(
    runtime: &R,
    dashboard: &Dashboard<P>,
    options: &ShowOptions,
    out: &mut W,
) -> Result<()> {
    let project = match options.project.as_deref() {
        Some(id) => catalog::resolve(id)?,
        None => catalog::default_project(),
    };
    let filter = options
        .filter
        .as_deref()
        .map(Filter::keyword)
        .unwrap_or_default();
    debug!("Showing {} with filter {}", project.id, filter);

    let state = dashboard
        .load(AppState::new(project).with_filter(filter))
        .await;

    match &options.output {
        Some(path) => {
            let mut document = Vec::new();
            render(runtime, &state, options.format, false, &mut document).await?;
            runtime.write(path, &document)?;
            info!("Wrote {} bytes to {}", document.len(), path.display());
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => render(runtime, &state, options.format, options.animate, out).await?,
    }

    Ok(())
}

async fn render<R: Runtime, W: Write>(
    runtime: &R,
    state: &AppState,
    format: OutputFormat,
    animate: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_board(runtime, state, animate, out).await,
        OutputFormat::Html => {
            write!(out, "{}", html::render_document(state)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockProvider, Release};
    use crate::runtime::MockRuntime;
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;
    use std::path::Path;

    fn make_release(name: &str, day: u32) -> Release {
        Release {
            tag: name.to_string(),
            name: Some(name.to_string()),
            published_at: Some(Utc.with_ymd_and_hms(2025, 8, day, 12, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    fn provider_returning(releases: Vec<Release>) -> MockProvider {
        let mut provider = MockProvider::new();
        provider
            .expect_api_url()
            .return_const("https://api.github.com".to_string());
        provider
            .expect_get_releases()
            .times(1)
            .returning(move |_| Ok(releases.clone()));
        provider
    }

    fn quiet_runtime() -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime.expect_stdout_is_terminal().returning(|| false);
        runtime
    }

    #[tokio::test]
    async fn test_run_show_text() {
        let dashboard = Dashboard::new(provider_returning(vec![
            make_release("v0.9-alpha", 20),
            make_release("v1.0", 1),
            make_release("v1.1-beta", 10),
        ]));
        let options = ShowOptions {
            filter: Some("Alpha".into()),
            ..Default::default()
        };

        let mut out = Vec::new();
        run_show(&quiet_runtime(), &dashboard, &options, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Latest build\n  v1.0\n"));
        assert!(text.contains("Build archive (filter: alpha)\n  - v0.9-alpha"));
        assert!(!text.contains("- v1.1-beta"));
    }

    #[tokio::test]
    async fn test_run_show_selected_project() {
        let mut provider = MockProvider::new();
        provider
            .expect_api_url()
            .return_const("https://api.github.com".to_string());
        provider
            .expect_get_releases()
            .with(eq(crate::provider::RepoId::new(
                "FaR-Team",
                "RoomMakers-Android",
            )))
            .returning(|_| Ok(vec![]));
        let dashboard = Dashboard::new(provider);
        let options = ShowOptions {
            project: Some("roommakers".into()),
            ..Default::default()
        };

        let mut out = Vec::new();
        run_show(&quiet_runtime(), &dashboard, &options, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[Room Makers]"));
        assert_eq!(text.matches("No releases found.").count(), 2);
    }

    #[tokio::test]
    async fn test_run_show_unknown_project() {
        let mut provider = MockProvider::new();
        provider.expect_get_releases().never();
        let dashboard = Dashboard::new(provider);
        let options = ShowOptions {
            project: Some("tetris".into()),
            ..Default::default()
        };

        let mut out = Vec::new();
        let result = run_show(&MockRuntime::new(), &dashboard, &options, &mut out).await;

        assert!(result.unwrap_err().to_string().contains("Unknown project"));
    }

    #[tokio::test]
    async fn test_run_show_fetch_failure_is_not_fatal() {
        let mut provider = MockProvider::new();
        provider
            .expect_api_url()
            .return_const("https://api.github.com".to_string());
        provider
            .expect_get_releases()
            .returning(|_| Err(anyhow::anyhow!("GitHub API error: 500")));
        let dashboard = Dashboard::new(provider);

        let mut out = Vec::new();
        run_show(&quiet_runtime(), &dashboard, &ShowOptions::default(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.matches("Failed to load releases. GitHub API error: 500")
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_run_show_html_to_stdout() {
        let dashboard = Dashboard::new(provider_returning(vec![make_release("v1.0", 1)]));
        let options = ShowOptions {
            format: OutputFormat::Html,
            ..Default::default()
        };

        let mut out = Vec::new();
        run_show(&MockRuntime::new(), &dashboard, &options, &mut out)
            .await
            .unwrap();

        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h3>v1.0</h3>"));
    }

    #[tokio::test]
    async fn test_run_show_html_to_file() {
        let dashboard = Dashboard::new(provider_returning(vec![make_release("v1.0", 1)]));
        let options = ShowOptions {
            format: OutputFormat::Html,
            output: Some(PathBuf::from("/tmp/board.html")),
            ..Default::default()
        };

        let mut runtime = MockRuntime::new();
        runtime
            .expect_write()
            .withf(|path: &Path, contents: &[u8]| {
                path == Path::new("/tmp/board.html")
                    && String::from_utf8_lossy(contents).contains("<h3>v1.0</h3>")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut out = Vec::new();
        run_show(&runtime, &dashboard, &options, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Wrote /tmp/board.html\n");
    }

    #[tokio::test]
    async fn test_run_show_text_to_file_is_not_animated() {
        let dashboard = Dashboard::new(provider_returning(vec![make_release("v1.0", 1)]));
        let options = ShowOptions {
            output: Some(PathBuf::from("board.txt")),
            animate: true,
            ..Default::default()
        };

        let mut runtime = MockRuntime::new();
        runtime.expect_stdout_is_terminal().never();
        runtime
            .expect_write()
            .withf(|path: &Path, contents: &[u8]| {
                let text = String::from_utf8_lossy(contents);
                path == Path::new("board.txt")
                    && text.contains("Latest build\n  v1.0\n")
                    && !text.contains('\r')
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut out = Vec::new();
        run_show(&runtime, &dashboard, &options, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Wrote board.txt\n");
    }
}
