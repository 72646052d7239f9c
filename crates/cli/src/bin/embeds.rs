//! Converts `{% embed %}` directives to iframe tags, then unwraps Arcade
//! iframes to bare share URLs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use docport_core::{rewrite_embeds, unwrap_arcade_iframes};

#[derive(Parser)]
#[command(
    name = "docport-embeds",
    version,
    about = "Convert embed directives to iframe tags"
)]
struct Cli {
    /// Root directory to scan (defaults to the current directory).
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    match docport_cli::run(&root, |text| {
        rewrite_embeds(text).and_then(unwrap_arcade_iframes)
    }) {
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
