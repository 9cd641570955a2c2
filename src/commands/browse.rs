//! Interactive session: switch projects and filters without leaving.

use anyhow::Result;
use log::{debug, warn};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    app::{AppState, Dashboard},
    catalog,
    provider::Provider,
    runtime::Runtime,
    view::{Filter, text},
};

use super::config::Config;
use super::write_board;

const HELP: &str = "Commands:
  project <id>      switch project (reloads releases)
  filter <keyword>  filter the archive, 'all' to reset
  refresh           fetch the current project again
  projects          list projects
  help              show this help
  quit              leave";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Project(String),
    Filter(Filter),
    Refresh,
    Projects,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let argument = words.collect::<Vec<_>>().join(" ");

        match (command.as_str(), argument.is_empty()) {
            ("project" | "p", false) => Ok(BrowseCommand::Project(argument)),
            ("filter" | "f", _) => Ok(BrowseCommand::Filter(Filter::keyword(&argument))),
            ("refresh" | "r", true) => Ok(BrowseCommand::Refresh),
            ("projects" | "ls", true) => Ok(BrowseCommand::Projects),
            ("help" | "?", true) => Ok(BrowseCommand::Help),
            ("quit" | "exit" | "q", true) => Ok(BrowseCommand::Quit),
            ("project" | "p", true) => anyhow::bail!("Usage: project <id>"),
            _ => anyhow::bail!("Unknown command '{}'. Type 'help' for a list.", s.trim()),
        }
    }
}

/// Browse interactively, reading commands from stdin
#[tracing::instrument(skip(runtime, api_url))]
pub async fn browse<R: Runtime>(
    runtime: R,
    project: Option<String>,
    api_url: Option<String>,
) -> Result<()> {
    let initial = match project.as_deref() {
        Some(id) => AppState::new(catalog::resolve(id)?),
        None => AppState::default(),
    };
    let config = Config::new(runtime, api_url)?;
    let dashboard = Dashboard::new(config.provider);
    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_browse(&config.runtime, &dashboard, input, &mut stdout, initial).await?;
    Ok(())
}

/// Runs the session until `quit` or end of input and returns the final
/// state. Fetch failures are shown in the panels and the session carries on.
pub async fn run_browse<R, P, I, W>(
    runtime: &R,
    dashboard: &Dashboard<P>,
    mut input: I,
    out: &mut W,
    initial: AppState,
) -> Result<AppState>
where
    R: Runtime,
    P: Provider,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = load_and_render(runtime, dashboard, initial, out).await?;
    let mut buf = Vec::new();

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!("Ignoring {} bytes of non-UTF-8 input", buf.len());
            writeln!(out, "Input is not valid UTF-8; ignored.")?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!("Browse command: {:?}", command);

        state = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                writeln!(out, "{}", HELP)?;
                state
            }
            BrowseCommand::Projects => {
                super::projects::write_projects(state.project, out)?;
                state
            }
            BrowseCommand::Project(id) => match catalog::resolve(&id) {
                Ok(project) if project.id == state.project.id => {
                    writeln!(out, "Already showing {}.", project.name)?;
                    state
                }
                Ok(project) => {
                    let next = state.switch_project(project);
                    load_and_render(runtime, dashboard, next, out).await?
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    state
                }
            },
            BrowseCommand::Filter(filter) => {
                let next = state.with_filter(filter);
                write!(out, "{}", text::render_panels(&next))?;
                next
            }
            BrowseCommand::Refresh => {
                load_and_render(runtime, dashboard, state.reloading(), out).await?
            }
        };
    }

    Ok(state)
}

/// Shows the loading panels, fetches, then shows the loaded board.
async fn load_and_render<R: Runtime, P: Provider, W: Write>(
    runtime: &R,
    dashboard: &Dashboard<P>,
    state: AppState,
    out: &mut W,
) -> Result<AppState> {
    if state.needs_fetch() {
        write!(out, "{}", text::render_panels(&state))?;
        out.flush()?;
    }
    let state = dashboard.load(state).await;
    writeln!(out)?;
    write_board(runtime, &state, true, out).await?;
    Ok(state)
}
