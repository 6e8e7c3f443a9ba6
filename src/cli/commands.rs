use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "album_extractor")]
#[command(version = "1.0")]
#[command(about = "Extracts purchased album archives into a music library folder structure", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract downloaded album zips into the library
    Extract {
        /// Directory to scan for zip archives
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Library root the albums are extracted into
        #[arg(short = 'o', long = "output")]
        output: PathBuf,

        /// Only list what would be extracted without touching any files
        #[arg(short = 'd', long)]
        dry_run: bool,

        /// Optional CSV file to write the failure report to
        #[arg(short = 'r', long)]
        report: Option<PathBuf>,
    },
}
