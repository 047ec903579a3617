use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ds_bootstrap::installer::Installer;
use ds_bootstrap::models::ProjectLayout;
use ds_bootstrap::scaffold::Scaffolder;

#[derive(Parser)]
#[command(name = "ds-bootstrap")]
#[command(about = "Project bootstrap for data-science repositories")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install dependencies from a requirements file
    Install {
        /// Path to the requirements file
        #[arg(short, long, default_value = "requirements.txt")]
        file: PathBuf,
    },
    /// Create the project skeleton in a directory
    Scaffold {
        /// Directory to scaffold into
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
    /// Print the skeleton layout as JSON without touching the filesystem
    Plan,
}

/// Initialize tracing with output to stderr (for plan mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "ds_bootstrap=info".into()),
    );

    if use_stderr {
        // Plan mode: log to stderr so stdout is clean for the JSON output
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Plan mode needs stderr for logging since stdout carries the JSON
    let use_stderr = matches!(cli.command, Some(Commands::Plan));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Install { file }) => {
            tracing::info!("Installing dependencies from {}", file.display());

            let report = Installer::from_env().install_from_file(&file)?;
            if report.failed.is_empty() {
                tracing::info!("Installed {} package(s)", report.attempted.len());
            } else {
                tracing::warn!(
                    "Installed {} of {} package(s); failed: {}",
                    report.attempted.len() - report.failed.len(),
                    report.attempted.len(),
                    report.failed.join(", ")
                );
            }
        }
        Some(Commands::Scaffold { root }) => {
            tracing::info!("Creating project skeleton in {}", root.display());

            let report = Scaffolder::new(root, ProjectLayout::default()).run()?;
            tracing::info!(
                "Created {} directories, {} files, {} markers",
                report.directories.len(),
                report.files.len(),
                report.markers.len()
            );
        }
        Some(Commands::Plan) => {
            let layout = ProjectLayout::default();
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        None => {
            // Default: install from requirements.txt
            tracing::info!("Installing dependencies from requirements.txt");

            let report = Installer::from_env().install_from_file(Path::new("requirements.txt"))?;
            if report.failed.is_empty() {
                tracing::info!("Installed {} package(s)", report.attempted.len());
            } else {
                tracing::warn!(
                    "Installed {} of {} package(s); failed: {}",
                    report.attempted.len() - report.failed.len(),
                    report.attempted.len(),
                    report.failed.join(", ")
                );
            }
        }
    }

    Ok(())
}
