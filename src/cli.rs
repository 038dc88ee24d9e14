use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "devscore",
    version,
    about = "Profile score, improvement plan and skill radar for GitHub insights"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score, plan and skill radar in one report
    Report(RunArgs),
    /// Profile score with breakdown, achievements and tips
    Score(RunArgs),
    /// Improvement plan derived from the profile score
    Plan(RunArgs),
    /// Six-axis skill radar and primary skill
    Skills(RunArgs),
    /// Write a default devscore.toml in the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Insights JSON document
    pub input: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    /// Evaluate account age against this RFC 3339 timestamp instead of now
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
