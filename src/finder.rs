// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! Filesystem index the discovery rules query.
//!
//! The tree is walked once, queries run against the in-memory snapshot.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use thiserror::Error as TeError;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Names excluded from the walk, matched against the file or directory name.
pub const EXCLUDES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".bzr",
    ".eggs",
    "*.egg-info",
    "*.swp",
    "__pycache__",
    ".mypy_cache",
    ".pytest_cache",
    "__MACOSX",
    ".DS_Store",
    ".deps",
];

#[derive(TeError, Debug)]
pub enum FinderError {
    #[error("Directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),
    #[error("Invalid ignore pattern {pattern:?}: {source}")]
    IgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("File is not part of the scanned tree: {0:?}")]
    UnknownFile(String),
    #[error("File content is not available for in-memory listings: {0:?}")]
    NoContent(String),
    #[error("Can not read file: {0}")]
    ReadFile(#[from] io::Error),
}

/// A single file or directory found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Location on disk, absent for in-memory listings.
    pub absolute: Option<PathBuf>,
    /// Slash separated path relative to the scan root.
    pub relative: String,
    /// Lowercase form of `relative`, used for case-insensitive queries.
    pub lowercase: String,
}

impl PathEntry {
    fn new(absolute: Option<PathBuf>, relative: String) -> Self {
        let lowercase = relative.to_lowercase();
        PathEntry { absolute, relative, lowercase }
    }

    /// Split the lowercase path into parent directory and file name.
    fn lowercase_parts(&self) -> (Option<&str>, &str) {
        match self.lowercase.rsplit_once('/') {
            Some((directory, filename)) => (Some(directory), filename),
            None => (None, self.lowercase.as_str()),
        }
    }
}

/// Immutable index of the files below a root directory.
#[derive(Debug, Default)]
pub struct Finder {
    /// For `has_file`.
    filenames: HashSet<String>,
    /// For `has_dir`.
    dirnames: HashSet<String>,
    /// Sorted by lowercase path, for `filter_files`.
    lc_files: Vec<PathEntry>,
    /// Sorted by original path, for `mask_matches`.
    files: Vec<String>,
    /// For content access.
    absolutes: HashMap<String, PathBuf>,
}

/// Braces are literal in fnmatch, globset would read them as alternation.
fn escape_braces(glob_pattern: &str) -> String {
    glob_pattern.replace('{', "[{]").replace('}', "[}]")
}

/// Build an fnmatch-like matcher: `*` also matches `/`.
pub fn build_matcher(glob_pattern: &str, case_insensitive: bool) -> Option<GlobMatcher> {
    match GlobBuilder::new(&escape_braces(glob_pattern))
        .case_insensitive(case_insensitive)
        .literal_separator(false)
        .build()
    {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(err) => {
            debug!("Ignoring invalid glob {glob_pattern:?}: {err}");
            None
        },
    }
}

/// Check a single name against a glob, case-insensitively.
pub fn glob_matches(glob_pattern: &str, name: &str) -> bool {
    build_matcher(glob_pattern, true).is_some_and(|matcher| matcher.is_match(name))
}

fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

fn build_excludes(ignore_paths: &[String]) -> Result<Vec<GlobMatcher>, FinderError> {
    let mut matchers = Vec::new();
    for pattern in EXCLUDES.iter().copied().chain(ignore_paths.iter().map(String::as_str)) {
        // Skip empty patterns
        if pattern.is_empty() {
            continue;
        }
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| FinderError::IgnorePattern { pattern: pattern.to_string(), source })?;
        matchers.push(glob.compile_matcher());
    }
    Ok(matchers)
}

fn should_ignore_entry(entry: &DirEntry, excludes: &[GlobMatcher]) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if entry.path_is_symlink() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    excludes.iter().any(|matcher| matcher.is_match(&*name))
}

impl Finder {
    /// Walk `root` and index everything below it.
    pub fn new(root: &Path) -> Result<Self, FinderError> {
        Self::with_ignore_paths(root, &[])
    }

    /// Walk `root`, additionally skipping entries whose name matches one of
    /// `ignore_paths`.
    pub fn with_ignore_paths(root: &Path, ignore_paths: &[String]) -> Result<Self, FinderError> {
        if !root.is_dir() {
            return Err(FinderError::DirectoryNotFound(root.to_path_buf()));
        }
        let excludes = build_excludes(ignore_paths)?;

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !should_ignore_entry(entry, &excludes));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable path: {err}");
                    continue;
                },
            };
            let Some(relative) = relative_slash_path(root, entry.path()) else {
                continue;
            };
            let path_entry = PathEntry::new(Some(entry.path().to_path_buf()), relative);
            if entry.file_type().is_dir() {
                dirs.push(path_entry);
            } else {
                files.push(path_entry);
            }
        }
        debug!("Indexed {} files and {} directories below {:?}", files.len(), dirs.len(), root);

        Ok(Self::from_entries(files, dirs))
    }

    /// Build an index from in-memory relative path listings.
    ///
    /// Parent directories of the listed files are indexed as well. Content
    /// access is not available for such an index.
    pub fn from_paths<F, D>(files: F, dirs: D) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let files: Vec<PathEntry> =
            files.into_iter().map(|path| PathEntry::new(None, path.as_ref().to_string())).collect();
        let mut dirnames: Vec<String> = dirs.into_iter().map(|path| path.as_ref().to_string()).collect();
        for entry in &files {
            let mut path = entry.relative.as_str();
            while let Some((parent, _)) = path.rsplit_once('/') {
                dirnames.push(parent.to_string());
                path = parent;
            }
        }
        dirnames.sort();
        dirnames.dedup();
        let dirs = dirnames.into_iter().map(|path| PathEntry::new(None, path)).collect();
        Self::from_entries(files, dirs)
    }

    fn from_entries(files: Vec<PathEntry>, dirs: Vec<PathEntry>) -> Self {
        let filenames = files.iter().map(|entry| entry.relative.clone()).collect();
        let dirnames = dirs.into_iter().map(|entry| entry.relative).collect();
        let absolutes = files
            .iter()
            .filter_map(|entry| entry.absolute.clone().map(|absolute| (entry.relative.clone(), absolute)))
            .collect();
        let mut sorted_files: Vec<String> = files.iter().map(|entry| entry.relative.clone()).collect();
        sorted_files.sort();
        let mut lc_files = files;
        lc_files.sort_by(|a, b| a.lowercase.cmp(&b.lowercase).then_with(|| a.relative.cmp(&b.relative)));

        Finder {
            filenames,
            dirnames,
            lc_files,
            files: sorted_files,
            absolutes,
        }
    }

    /// Check whether file exists.
    pub fn has_file(&self, name: &str) -> bool {
        self.filenames.contains(name)
    }

    /// Check whether dir exists.
    pub fn has_dir(&self, name: &str) -> bool {
        self.dirnames.contains(name)
    }

    /// Return all files whose full relative path matches `mask`, case-sensitively.
    pub fn mask_matches(&self, mask: &str) -> Vec<String> {
        let Some(matcher) = build_matcher(mask, false) else {
            return Vec::new();
        };
        self.files.iter().filter(|name| matcher.is_match(name.as_str())).cloned().collect()
    }

    /// Filter files by file name glob, optionally restricted to parent
    /// directories matching `dir_glob`. Matching is case-insensitive.
    pub fn filter_files(&self, glob: &str, dir_glob: Option<&str>) -> Vec<String> {
        let Some(matcher) = build_matcher(glob, true) else {
            return Vec::new();
        };
        let dir_matcher = match dir_glob {
            Some(dir_glob) => match build_matcher(dir_glob, true) {
                Some(dir_matcher) => Some(dir_matcher),
                None => return Vec::new(),
            },
            None => None,
        };

        let mut result = Vec::new();
        for entry in &self.lc_files {
            let (directory, filename) = entry.lowercase_parts();
            if let Some(dir_matcher) = &dir_matcher {
                match directory {
                    Some(directory) if dir_matcher.is_match(directory) => {},
                    _ => continue,
                }
            }
            if matcher.is_match(filename) {
                result.push(entry.relative.clone());
            }
        }
        result
    }

    /// Open a file from the index for reading.
    pub fn open(&self, name: &str) -> Result<File, FinderError> {
        let absolute = self.absolute_path(name)?;
        Ok(File::open(absolute)?)
    }

    /// Read the whole content of a file from the index.
    pub fn read(&self, name: &str) -> Result<Vec<u8>, FinderError> {
        let mut content = Vec::new();
        self.open(name)?.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Read the whole content of a file from the index as UTF-8 text.
    pub fn read_to_string(&self, name: &str) -> Result<String, FinderError> {
        let mut content = String::new();
        self.open(name)?.read_to_string(&mut content)?;
        Ok(content)
    }

    fn absolute_path(&self, name: &str) -> Result<&Path, FinderError> {
        if !self.has_file(name) {
            return Err(FinderError::UnknownFile(name.to_string()));
        }
        self.absolutes
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| FinderError::NoContent(name.to_string()))
    }
}
