// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "render-core")]
#[command(about = "Headless camera simulation driver", long_about = None)]
pub struct Cli {
    /// Number of simulated frames
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Camera tuning JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the final matrices as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
