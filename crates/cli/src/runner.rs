use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use docport_core::{DocportError, Rewrite, collect_files};
use log::debug;

/// File suffixes eligible for rewriting.
pub const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".mdx"];

/// Aggregate counters for one batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of files rewritten on disk.
    pub files_changed: usize,
    /// Total substitutions per kind across all changed files.
    pub totals: BTreeMap<&'static str, usize>,
}

impl RunSummary {
    fn record(&mut self, counts: &[(&'static str, usize)]) {
        self.files_changed += 1;
        for &(kind, count) in counts {
            if count > 0 {
                *self.totals.entry(kind).or_insert(0) += count;
            }
        }
    }

    /// Renders the final summary line.
    pub fn render(&self) -> String {
        let mut line = format!("Done: {} file(s) changed", self.files_changed);
        if self.totals.is_empty() {
            line.push_str(" (no substitutions)");
        } else {
            let totals = self
                .totals
                .iter()
                .map(|(kind, count)| format!("{kind}: {count}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(line, " ({totals})").ok();
        }
        line
    }
}

/// Runs one transform over every Markdown/MDX file under `root`.
///
/// Files are processed sequentially and rewritten in place, only when the
/// transform changed them. Read and write failures are reported on stderr
/// and skip the file; only a collector failure aborts the run. One
/// `Updated:` line per rewritten file goes to stdout.
pub fn run<F>(root: &Path, transform: F) -> Result<RunSummary, DocportError>
where
    F: Fn(&str) -> Rewrite,
{
    let files = collect_files(root, MARKDOWN_EXTENSIONS)?;
    debug!("processing {} candidate file(s)", files.len());

    let mut summary = RunSummary::default();
    for path in files {
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Failed to read {} {err}", path.display());
                continue;
            }
        };
        let rewrite = transform(&source);
        if !rewrite.changed() {
            continue;
        }
        if let Err(err) = fs::write(&path, &rewrite.text) {
            eprintln!("Failed to write {} {err}", path.display());
            continue;
        }
        println!(
            "Updated: {} ({})",
            path.display(),
            format_counts(&rewrite.counts)
        );
        summary.record(&rewrite.counts);
    }
    Ok(summary)
}

fn format_counts(counts: &[(&'static str, usize)]) -> String {
    counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_foo(input: &str) -> Rewrite {
        Rewrite {
            text: input.replace("foo", "bar"),
            counts: vec![("foo", input.matches("foo").count())],
        }
    }

    #[test]
    fn rewrites_only_changed_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "foo here, foo there").unwrap();
        fs::write(dir.path().join("b.md"), "nothing to do").unwrap();

        let summary = run(dir.path(), swap_foo).unwrap();
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.totals.get("foo"), Some(&2));

        let a = fs::read_to_string(dir.path().join("a.md")).unwrap();
        assert_eq!(a, "bar here, bar there");
        let b = fs::read_to_string(dir.path().join("b.md")).unwrap();
        assert_eq!(b, "nothing to do");
    }

    #[test]
    fn non_markdown_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("script.txt"), "foo").unwrap();

        let summary = run(dir.path(), swap_foo).unwrap();
        assert_eq!(summary.files_changed, 0);
        let untouched = fs::read_to_string(dir.path().join("script.txt")).unwrap();
        assert_eq!(untouched, "foo");
    }

    #[test]
    fn missing_root_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("nope"), swap_foo).is_err());
    }

    #[test]
    fn render_with_no_substitutions() {
        let summary = RunSummary::default();
        assert_eq!(summary.render(), "Done: 0 file(s) changed (no substitutions)");
    }

    #[test]
    fn render_lists_totals_by_kind() {
        let mut summary = RunSummary::default();
        summary.record(&[("blocks", 2), ("singles", 0)]);
        summary.record(&[("blocks", 1), ("singles", 1)]);
        assert_eq!(
            summary.render(),
            "Done: 2 file(s) changed (blocks: 3, singles: 1)"
        );
    }
}
