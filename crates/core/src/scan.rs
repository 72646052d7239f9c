use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::DocportError;

/// Collects files under `root` whose lowercased name ends with one of the
/// given lowercase suffixes.
///
/// The root is canonicalized so returned paths are absolute. Entries whose
/// name starts with a dot are skipped entirely; dot directories are not
/// recursed into (the root itself is exempt). Paths come back in
/// directory-listing order, which is platform-dependent; callers must not
/// rely on it. Any traversal failure aborts the collection.
pub fn collect_files(root: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, DocportError> {
    let root = root.canonicalize()?;
    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if extensions.iter().any(|suffix| name.ends_with(suffix)) {
            files.push(entry.into_path());
        }
    }
    debug!("collected {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guides/nested")).unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::write(dir.path().join("guides/b.MDX"), "b").unwrap();
        fs::write(dir.path().join("guides/nested/c.mdx"), "c").unwrap();
        fs::write(dir.path().join("guides/readme.txt"), "x").unwrap();

        let files = collect_files(dir.path(), &[".md", ".mdx"]).unwrap();
        let mut names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["a.md", "b.MDX", "c.mdx"]);
    }

    #[test]
    fn skips_dot_files_and_dot_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        fs::write(dir.path().join(".git/notes.md"), "x").unwrap();
        fs::write(dir.path().join(".draft.md"), "x").unwrap();
        fs::write(dir.path().join("kept.md"), "x").unwrap();

        let files = collect_files(dir.path(), &[".md", ".mdx"]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("kept.md"));
    }

    #[test]
    fn returns_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doc.md"), "x").unwrap();

        let files = collect_files(dir.path(), &[".md"]).unwrap();
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(collect_files(&missing, &[".md"]).is_err());
    }
}
