use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cursor_tracker::config::{DEFAULT_DATA_FILE, DEFAULT_README_FILE};
use cursor_tracker::readme::ReadmeFormatter;
use cursor_tracker::scanner::{CursorDownloadApi, Scanner};
use cursor_tracker::store::VersionStore;

#[derive(Parser)]
#[command(name = "cursor-tracker")]
#[command(version, about = "Tracks Cursor editor releases and updates the download table")]
struct Cli {
    /// Path to the version data file
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data_file: String,

    /// Path to the README holding the version table
    #[arg(long, default_value = DEFAULT_README_FILE)]
    readme_file: String,

    /// Show debug logs
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a new version is available (exit 0 if so, 1 otherwise)
    Check,
    /// Fetch the latest release, update the version data and the README
    Update {
        /// Only update the version data file, leave the README alone
        #[arg(long)]
        data_only: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let scanner = Scanner::new(
        CursorDownloadApi::default(),
        VersionStore::new(&cli.data_file),
    );

    match cli.command.unwrap_or(Command::Update { data_only: false }) {
        Command::Check => {
            if scanner.check_new_version().await? {
                info!("new version detected");
            } else {
                info!("no new version");
                std::process::exit(1);
            }
        }
        Command::Update { data_only } => {
            if !scanner.update_versions().await? {
                anyhow::bail!("failed to update version data");
            }
            if !data_only {
                let collection = scanner.store().load()?;
                ReadmeFormatter::new(&cli.readme_file).update(&collection)?;
            }
            info!("done");
        }
    }

    Ok(())
}
