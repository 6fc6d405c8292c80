use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "perennial", version, about = "Perennial SRS interval preview (CLI/API)")]
pub struct Cli {
    /// Only log errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log debug output (PERENNIAL_LOG overrides both flags)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// SRS config JSON file (defaults to srs.json in the app config dir, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the projected interval path for a config
    Simulate(SimulateCmd),
    /// Launch Axum HTTP preview API
    Api(ApiCmd),
}

#[derive(Debug, Args, Clone)]
pub struct SimulateCmd {
    /// Base interval in days
    #[arg(long)]
    pub base: Option<f64>,
    /// Ease multiplier
    #[arg(long)]
    pub ease: Option<f64>,
    /// Interval modifier
    #[arg(long)]
    pub modifier: Option<f64>,
    /// Comma-separated ratings (again,hard,good,easy); defaults to good,easy,good,easy
    #[arg(long)]
    pub script: Option<String>,
    /// Reject ease/modifier/base values outside their practical ranges
    #[arg(long)]
    pub strict: bool,
    /// Print JSON instead of the "1d -> 3d" label
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ApiCmd {
    /// Bind address (host:port)
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: String,
}
