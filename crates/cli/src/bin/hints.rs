//! Converts `{% hint %}` / `{% endhint %}` markers to `<Note>` tags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use docport_core::rewrite_hints;

#[derive(Parser)]
#[command(
    name = "docport-hints",
    version,
    about = "Convert hint directives to Note components"
)]
struct Cli {
    /// Root directory to scan (defaults to the current directory).
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    match docport_cli::run(&root, rewrite_hints) {
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
