use anyhow::Result;
use clap::Parser;
use relboard::commands::{OutputFormat, ShowOptions};
use std::path::PathBuf;

/// relboard - release dashboard for FaR-Team projects
///
/// Shows the latest build, download statistics and the build archive of each
/// project, fetched from GitHub releases.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding rate limits.
///
/// Examples:
///   relboard show                          # Latest Within Reach build
///   relboard show roommakers --filter beta # Room Makers betas
///   relboard show --format html -o out.html
///   relboard browse                        # Interactive session
#[derive(Parser, Debug)]
#[command(author, version = env!("RELBOARD_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        env = "RELBOARD_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the projects that can be shown
    Projects,

    /// Show the latest build, statistics and archive of a project
    Show(ShowArgs),

    /// Browse projects interactively
    Browse(BrowseArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Project id (see `relboard projects`)
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// Only list archive builds whose name or tag contains this keyword
    #[arg(long, short = 'f', value_name = "KEYWORD")]
    pub filter: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print statistics without the count-up animation
    #[arg(long)]
    pub no_animate: bool,
}

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {
    /// Project to start with
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = relboard::runtime::RealRuntime;

    match cli.command {
        Commands::Projects => relboard::commands::projects()?,
        Commands::Show(args) => {
            let options = ShowOptions {
                project: args.project,
                filter: args.filter,
                format: args.format,
                output: args.output,
                animate: !args.no_animate,
            };
            relboard::commands::show(runtime, options, cli.api_url).await?
        }
        Commands::Browse(args) => {
            relboard::commands::browse(runtime, args.project, cli.api_url).await?
        }
    }
    Ok(())
}
