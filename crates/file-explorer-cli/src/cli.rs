use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "file-explorer",
    about = "Browse the changed files of a pull request as a tree"
)]
pub struct Cli {
    /// Config file (defaults to .file-explorer.toml lookup).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the file tree.
    Tree(TreeArgs),
    /// Print connector paths for the rendered tree, one per line.
    Connectors(ConnectorArgs),
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// JSON file with the changed-file records.
    pub catalog: PathBuf,

    /// Only show files whose path contains this text (case-insensitive).
    #[arg(short, long)]
    pub query: Option<String>,

    /// Fold single-child directory chains into one row.
    #[arg(long)]
    pub collapse_packages: bool,

    /// Start with every directory closed.
    #[arg(long)]
    pub collapsed: bool,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Args, Debug)]
pub struct ConnectorArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Layout capture exported by a renderer. Without it rows are placed on
    /// a fixed grid.
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Row height for the synthesized grid layout.
    #[arg(long, default_value_t = file_explorer::layout::DEFAULT_ROW_HEIGHT)]
    pub row_height: f64,

    /// Override the corner radius from the config.
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
