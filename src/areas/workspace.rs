use derive_new::new;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Component, Path};
use walkdir::{DirEntry, WalkDir};

/// What a walk keeps
#[derive(Debug, Clone, Default, new)]
pub struct WalkOptions {
    /// Keep dotfiles and descend into dot-directories
    pub all: bool,
    /// Maximum nesting, 0 is unlimited
    pub depth: usize,
    /// A path must match one of these to be kept (directories are still walked)
    pub include: Vec<Regex>,
    /// A matching path is dropped together with its subtree
    pub exclude: Vec<Regex>,
    pub files_only: bool,
    pub folders_only: bool,
}

impl WalkOptions {
    fn is_included(&self, norm_path: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|re| re.is_match(norm_path))
    }

    fn is_excluded(&self, norm_path: &str) -> bool {
        self.exclude.iter().any(|re| re.is_match(norm_path))
    }

    /// Kept paths need their ancestors added when directories are not all listed
    fn keeps_prefixes(&self) -> bool {
        self.files_only || !self.include.is_empty()
    }
}

/// One side of a comparison
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Relative paths below the root, `/`-separated, directories ending with `/`
    pub fn scan(&self, options: &WalkOptions) -> BTreeSet<String> {
        let mut walker = WalkDir::new(&self.path).min_depth(1).sort_by_file_name();
        if options.depth > 0 {
            walker = walker.max_depth(options.depth);
        }

        let mut paths = BTreeSet::new();
        let iter = walker
            .into_iter()
            .filter_entry(|entry| self.is_walked(entry, options));

        for entry in iter {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %self.path.display(), error = %e, "skipping unreadable path");
                    continue;
                }
            };
            let Some(norm_path) = self.norm_path(&entry) else {
                continue;
            };
            let is_dir = norm_path.ends_with('/');

            if !options.is_included(&norm_path)
                || (options.files_only && is_dir)
                || (options.folders_only && !is_dir)
            {
                continue;
            }

            if options.keeps_prefixes() {
                for (i, _) in norm_path.match_indices('/') {
                    paths.insert(norm_path[..=i].to_string());
                }
            }
            paths.insert(norm_path);
        }

        tracing::debug!(root = %self.path.display(), paths = paths.len(), "scanned workspace");
        paths
    }

    /// Whether the walker enters (or yields) this entry at all
    fn is_walked(&self, entry: &DirEntry, options: &WalkOptions) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        if !options.all && entry.file_name().to_string_lossy().starts_with('.') {
            return false;
        }

        match self.norm_path(entry) {
            Some(norm_path) => !options.is_excluded(&norm_path),
            None => {
                tracing::warn!(
                    path = %entry.path().display(),
                    "skipping path that cannot be compared"
                );
                false
            }
        }
    }

    /// `None` for names that are not UTF-8 and for dangling symlinks
    fn norm_path(&self, entry: &DirEntry) -> Option<String> {
        let relative = entry.path().strip_prefix(&self.path).ok()?;
        let mut norm_path = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_str()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?
            .join("/");

        if norm_path.is_empty() {
            return None;
        }
        if is_dir_entry(entry)? {
            norm_path.push('/');
        }
        Some(norm_path)
    }
}

/// Symlinks take the kind of their target, as the inspector follows them
fn is_dir_entry(entry: &DirEntry) -> Option<bool> {
    if entry.path_is_symlink() {
        return std::fs::metadata(entry.path())
            .ok()
            .map(|metadata| metadata.is_dir());
    }
    Some(entry.file_type().is_dir())
}

/// Sorted union of both sides' relative paths
pub fn union_paths(left: &Workspace, right: &Workspace, options: &WalkOptions) -> Vec<String> {
    let mut paths = left.scan(options);
    paths.extend(right.scan(options));
    paths.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        dir.child("a/b/c.txt").write_str("c").unwrap();
        dir.child("a/d.rs").write_str("d").unwrap();
        dir.child(".hidden/e").write_str("e").unwrap();
        dir.child(".rc").write_str("rc").unwrap();
        dir.child("z").write_str("z").unwrap();
        dir.child("empty").create_dir_all().unwrap();
        dir
    }

    fn scan(dir: &TempDir, options: WalkOptions) -> Vec<String> {
        Workspace::new(dir.path().into())
            .scan(&options)
            .into_iter()
            .collect()
    }

    fn regexes(patterns: &[&str]) -> Vec<Regex> {
        patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
    }

    #[test]
    fn lists_directories_with_trailing_slash_and_skips_dotfiles() {
        let dir = fixture();

        assert_eq!(
            scan(&dir, WalkOptions::default()),
            vec!["a/", "a/b/", "a/b/c.txt", "a/d.rs", "empty/", "z"]
        );
    }

    #[test]
    fn all_keeps_dotfiles() {
        let dir = fixture();
        let options = WalkOptions {
            all: true,
            ..Default::default()
        };

        let paths = scan(&dir, options);

        assert!(paths.contains(&".hidden/".to_string()));
        assert!(paths.contains(&".hidden/e".to_string()));
        assert!(paths.contains(&".rc".to_string()));
    }

    #[test]
    fn depth_limits_nesting() {
        let dir = fixture();
        let options = WalkOptions {
            depth: 1,
            ..Default::default()
        };

        assert_eq!(scan(&dir, options), vec!["a/", "empty/", "z"]);
    }

    #[test]
    fn exclude_prunes_directory_subtree() {
        let dir = fixture();
        let options = WalkOptions {
            exclude: regexes(&["^a/b/$"]),
            ..Default::default()
        };

        assert_eq!(scan(&dir, options), vec!["a/", "a/d.rs", "empty/", "z"]);
    }

    #[test]
    fn include_keeps_matching_paths_and_their_ancestors() {
        let dir = fixture();
        let options = WalkOptions {
            include: regexes(&[r"\.txt$"]),
            ..Default::default()
        };

        assert_eq!(scan(&dir, options), vec!["a/", "a/b/", "a/b/c.txt"]);
    }

    #[test]
    fn files_only_keeps_connecting_directories() {
        let dir = fixture();
        let options = WalkOptions {
            files_only: true,
            ..Default::default()
        };

        assert_eq!(
            scan(&dir, options),
            vec!["a/", "a/b/", "a/b/c.txt", "a/d.rs", "z"]
        );
    }

    #[test]
    fn folders_only_skips_files() {
        let dir = fixture();
        let options = WalkOptions {
            folders_only: true,
            ..Default::default()
        };

        assert_eq!(scan(&dir, options), vec!["a/", "a/b/", "empty/"]);
    }

    #[test]
    fn union_is_sorted_and_deduplicated() {
        let left = TempDir::new().unwrap();
        let right = TempDir::new().unwrap();
        left.child("b").write_str("b").unwrap();
        left.child("common").write_str("l").unwrap();
        right.child("a").write_str("a").unwrap();
        right.child("common").write_str("r").unwrap();

        let paths = union_paths(
            &Workspace::new(left.path().into()),
            &Workspace::new(right.path().into()),
            &WalkOptions::default(),
        );

        assert_eq!(paths, vec!["a", "b", "common"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn skips_names_that_are_not_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        dir.child("ok").write_str("ok").unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"bad\xffname")), "x").unwrap();

        assert_eq!(scan(&dir, WalkOptions::default()), vec!["ok"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_take_the_kind_of_their_target() {
        let dir = TempDir::new().unwrap();
        dir.child("target/f").write_str("f").unwrap();
        std::os::unix::fs::symlink(dir.path().join("target"), dir.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling")).unwrap();

        assert_eq!(
            scan(&dir, WalkOptions::default()),
            vec!["linked/", "target/", "target/f"]
        );
    }
}
