//! Vault scanning for note references.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// A file in the vault that a note-reference answer can point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    /// Path relative to the vault root.
    pub relative_path: PathBuf,
    /// Link name: the file stem for markdown notes, the file name otherwise.
    pub name: String,
}

/// List linkable files under `root`, sorted by name.
///
/// Hidden files and directories are skipped. When `markdown_only` is set
/// only `.md` files are returned.
pub fn list_entries(root: &Path, markdown_only: bool) -> Vec<VaultEntry> {
    let mut entries: Vec<VaultEntry> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let is_md = e.path().extension().is_some_and(|ext| ext == "md");
            if markdown_only && !is_md {
                return None;
            }
            let relative_path = e.path().strip_prefix(root).ok()?.to_path_buf();
            let name = if is_md {
                e.path().file_stem()?.to_string_lossy().into_owned()
            } else {
                e.file_name().to_string_lossy().into_owned()
            };
            Some(VaultEntry { relative_path, name })
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name).then(a.relative_path.cmp(&b.relative_path)));
    entries
}

/// Resolve a link target (`Note`, `folder/Note`, `image.png`) to a vault file.
pub fn resolve_link(root: &Path, target: &str) -> Option<PathBuf> {
    let target = target.split(['#', '|']).next().unwrap_or(target).trim();
    if target.is_empty() {
        return None;
    }

    let entries = list_entries(root, false);
    entries
        .iter()
        .find(|e| {
            let rel = e.relative_path.to_string_lossy();
            e.name == target
                || rel == target
                || rel.strip_suffix(".md").is_some_and(|stem| stem == target)
        })
        .map(|e| e.relative_path.clone())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn lists_notes_and_skips_hidden() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "b.md");
        touch(tmp.path(), "dir/a.md");
        touch(tmp.path(), "img/cat.png");
        touch(tmp.path(), ".obsidian/workspace.md");

        let names: Vec<_> =
            list_entries(tmp.path(), true).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b"]);

        let all: Vec<_> =
            list_entries(tmp.path(), false).into_iter().map(|e| e.name).collect();
        assert_eq!(all, vec!["a", "b", "cat.png"]);
    }

    #[test]
    fn resolves_by_stem_path_or_file_name() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "projects/Launch.md");
        touch(tmp.path(), "img/cat.png");

        assert_eq!(resolve_link(tmp.path(), "Launch"), Some(PathBuf::from("projects/Launch.md")));
        assert_eq!(
            resolve_link(tmp.path(), "projects/Launch"),
            Some(PathBuf::from("projects/Launch.md"))
        );
        assert_eq!(
            resolve_link(tmp.path(), "Launch#Goals"),
            Some(PathBuf::from("projects/Launch.md"))
        );
        assert_eq!(resolve_link(tmp.path(), "cat.png"), Some(PathBuf::from("img/cat.png")));
        assert_eq!(resolve_link(tmp.path(), "Missing"), None);
        assert_eq!(resolve_link(tmp.path(), ""), None);
    }
}
