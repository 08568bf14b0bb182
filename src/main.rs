use anyhow::Result;
use clap::Parser;
use githubrel::commands::{CommandKind, bulk_get, get, history, serve};
use githubrel::runtime::RealRuntime;
use std::path::PathBuf;

const VERSION: &str = env!("GITHUBREL_VERSION");

/// githubrel - query GitHub releases
///
/// Look up the latest release of one or many repositories, compare recorded
/// versions against what is published now, or serve the same operations as
/// tools over stdio.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This raises the API rate limit and gives access to private repositories.
///
/// Examples:
///   githubrel get owner/repo            # Print the latest tag
///   githubrel -o json bulk-get repos    # Latest tags for every line of `repos`
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: text or json
    #[arg(
        long = "output",
        short = 'o',
        value_name = "FORMAT",
        default_value = "text",
        global = true
    )]
    pub output: String,

    /// GitHub API URL (defaults to https://api.github.com; also via GITHUB_API_URL)
    #[arg(long = "api-url", env = "GITHUB_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    #[command(about = CommandKind::Get.description())]
    Get(GetArgs),

    #[command(name = "bulk-get", about = CommandKind::Bulk.description())]
    BulkGet(FileArgs),

    #[command(about = CommandKind::History.description())]
    History(FileArgs),

    /// Serve the release operations as tools over stdio
    Mcp,

    /// Print the version number
    Version,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,
}

#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// Input file, one entry per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    match cli.command {
        Commands::Get(args) => get(&runtime, &args.repo, &cli.output, cli.api_url).await?,
        Commands::BulkGet(args) => bulk_get(&runtime, &args.file, &cli.output, cli.api_url).await?,
        Commands::History(args) => history(&runtime, &args.file, &cli.output, cli.api_url).await?,
        Commands::Mcp => serve(&runtime, cli.api_url, VERSION).await?,
        Commands::Version => println!("githubrel version {}", VERSION),
    }
    Ok(())
}
