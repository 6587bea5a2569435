pub mod completions;
pub mod extract;

use clap::Parser;
use clap_complete::Shell;

/// swatch - Extract dominant hex palettes from image assets
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub extract: extract::ExtractArgs,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
