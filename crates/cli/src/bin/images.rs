//! Unwraps `<figure>` blocks and normalizes `<img>` tags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use docport_core::normalize_images;

#[derive(Parser)]
#[command(
    name = "docport-images",
    version,
    about = "Unwrap figure blocks and normalize img tags"
)]
struct Cli {
    /// Root directory to scan (defaults to the current directory).
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    match docport_cli::run(&root, normalize_images) {
        Ok(summary) => {
            println!("{}", summary.render());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
