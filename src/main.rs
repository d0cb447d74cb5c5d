use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

#[derive(Parser)]
#[command(name = "videonut")]
#[command(
    version,
    about = "Checkpointed tracker for the five-phase video production workflow"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show per-phase progress and the expected artifact for each phase
    Status {
        /// Path to the project directory
        #[arg(short, long)]
        project: PathBuf,
    },
    /// Show the next unfinished phase and how to unblock it
    Next {
        /// Path to the project directory
        #[arg(short, long)]
        project: PathBuf,
    },
    /// Check phases in order until one blocks
    Run {
        /// Path to the project directory
        #[arg(short, long)]
        project: PathBuf,

        /// Resume from the last persisted checkpoint
        #[arg(long)]
        resume: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Status { project } => cmd::cmd_status(project)?,
        Commands::Next { project } => cmd::cmd_next(project)?,
        Commands::Run { project, resume } => {
            if !cmd::cmd_run(project, *resume)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
