//! Source scanner for hardcoded localizable text.
//!
//! The scanner does not parse the source language. It matches string
//! literals (`"..."`, `'...'`, `` `...` ``) that contain at least one
//! character of a configurable detection alphabet, filters known noise and
//! suggests a catalog key for every hit.

mod namespace;

pub use namespace::{DEFAULT_NAMESPACE, namespace_for};

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use regex::{Captures, Regex};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::catalog::KeyPath;
use super::error::{Error, Result, UnitFailure};
use super::slug::generate_key;
use crate::utils::{build_line_index, context_window, offset_to_line};

/// Characters of source text kept on each side of a match in the context snippet.
pub const CONTEXT_RADIUS: usize = 40;

/// Directories never descended into during tree scans.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", ".next", "dist", "build"];

/// Scanner settings. Built from [`crate::config::Config::scan_options`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub detection_alphabet: String,
    pub ignore_list: Vec<String>,
    pub max_key_words: usize,
    /// Namespaces are derived from paths relative to this directory.
    pub source_root: PathBuf,
    /// File extensions picked up by tree scans.
    pub extensions: Vec<String>,
    /// Paths matching any of these are skipped by tree scans.
    pub ignores: Vec<Pattern>,
}

/// A hardcoded string found in source code, with a suggested catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub text: String,
    pub source_file: PathBuf,
    /// 1-based.
    pub source_line: usize,
    pub suggested_key_path: KeyPath,
    pub context_snippet: String,
}

#[derive(Debug)]
pub struct Scanner {
    pattern: Regex,
    options: ScanOptions,
}

/// Result of scanning a file or directory tree.
#[derive(Debug, Default)]
pub struct TreeScan {
    /// Sorted by file, line and text.
    pub extracted: Vec<ExtractedString>,
    pub failures: Vec<UnitFailure>,
    pub files_scanned: usize,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Result<Self> {
        let pattern = build_pattern(&options.detection_alphabet)?;
        Ok(Self { pattern, options })
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Read one file. Iterate [`ScannedFile::extractions`] for the results.
    pub fn scan(&self, path: &Path) -> Result<ScannedFile<'_>> {
        let content = fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
        debug!(file = %path.display(), bytes = content.len(), "scanning source file");
        Ok(ScannedFile {
            scanner: self,
            path: path.to_path_buf(),
            line_index: build_line_index(&content),
            content,
        })
    }

    /// Scan a single file or every matching file below a directory.
    ///
    /// Files are visited one after another; a file that cannot be read is
    /// recorded in [`TreeScan::failures`] and the walk continues. Only a
    /// missing `root` is an error.
    pub fn scan_tree(&self, root: &Path) -> Result<TreeScan> {
        if !root.exists() {
            return Err(Error::NotFound {
                path: root.to_path_buf(),
            });
        }

        let mut scan = TreeScan::default();

        if root.is_file() {
            self.scan_into(root, &mut scan);
        } else {
            let walker = WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        let path = e.path().unwrap_or(root).to_path_buf();
                        let failure = UnitFailure::new(
                            path.display().to_string(),
                            Error::from_read(path, e.into()),
                        );
                        warn!(unit = %failure.unit, error = %failure.error, "cannot access path");
                        scan.failures.push(failure);
                        continue;
                    }
                };
                let path = entry.path();
                if entry.file_type().is_file() && self.is_scannable(path) {
                    self.scan_into(path, &mut scan);
                }
            }
        }

        scan.extracted
            .sort_by(|a, b| {
                a.source_file
                    .cmp(&b.source_file)
                    .then_with(|| a.source_line.cmp(&b.source_line))
                    .then_with(|| a.text.cmp(&b.text))
            });
        Ok(scan)
    }

    fn scan_into(&self, path: &Path, scan: &mut TreeScan) {
        match self.scan(path) {
            Ok(file) => {
                scan.files_scanned += 1;
                scan.extracted.extend(file.extractions());
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "skipping unreadable file");
                scan.failures
                    .push(UnitFailure::new(path.display().to_string(), error));
            }
        }
    }

    fn is_scannable(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.options.extensions.iter().any(|e| e == ext));
        if !has_extension {
            return false;
        }
        let path_str = path.to_string_lossy();
        !self.options.ignores.iter().any(|p| p.matches(&path_str))
    }

    /// Namespace for a file, relative to the configured source root.
    fn namespace(&self, path: &Path) -> KeyPath {
        namespace_for(
            &relative_to(path, &self.options.source_root),
            self.options.max_key_words,
        )
    }

    fn is_ignored(&self, text: &str) -> bool {
        self.options
            .ignore_list
            .iter()
            .any(|entry| !entry.is_empty() && text.contains(entry.as_str()))
    }
}

/// The content of one source file, ready to be matched.
pub struct ScannedFile<'s> {
    scanner: &'s Scanner,
    path: PathBuf,
    content: String,
    line_index: Vec<usize>,
}

impl ScannedFile<'_> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily yield the extracted strings of this file in source order.
    ///
    /// Every call starts an independent pass over the content.
    pub fn extractions(&self) -> impl Iterator<Item = ExtractedString> + '_ {
        let namespace = self.scanner.namespace(&self.path);
        self.scanner
            .pattern
            .captures_iter(&self.content)
            .filter_map(move |caps| self.extract(&caps, &namespace))
    }

    fn extract(&self, caps: &Captures<'_>, namespace: &KeyPath) -> Option<ExtractedString> {
        let literal = caps.get(0)?;
        let inner = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;

        let text = inner.as_str().trim();
        if text.chars().count() <= 1 || self.scanner.is_ignored(text) {
            return None;
        }

        let key = generate_key(text, self.scanner.options.max_key_words);
        Some(ExtractedString {
            text: text.to_string(),
            source_file: self.path.clone(),
            source_line: offset_to_line(&self.line_index, literal.start()),
            suggested_key_path: namespace.child(key),
            context_snippet: context_window(
                &self.content,
                literal.start(),
                literal.end(),
                CONTEXT_RADIUS,
            ),
        })
    }
}

/// Build the literal pattern for a detection alphabet. Both cases of every
/// letter are matched.
fn build_pattern(alphabet: &str) -> Result<Regex> {
    let mut letters: BTreeSet<char> = BTreeSet::new();
    for c in alphabet.chars().filter(|c| !c.is_whitespace()) {
        letters.insert(c);
        letters.extend(c.to_lowercase());
        letters.extend(c.to_uppercase());
    }
    let class: String = letters
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();

    // Quoted literals stay on one line; template literals may span lines.
    let double = format!(r#""((?:[^"\\\n]|\\.)*?[{class}](?:[^"\\\n]|\\.)*)""#);
    let single = format!(r#"'((?:[^'\\\n]|\\.)*?[{class}](?:[^'\\\n]|\\.)*)'"#);
    let template = format!(r#"`((?:[^`\\]|\\.)*?[{class}](?:[^`\\]|\\.)*)`"#);

    Ok(Regex::new(&format!("{double}|{single}|{template}"))?)
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// `path` relative to `root`, compared lexically when both are relative (or
/// both absolute) and otherwise after resolving both on disk. Falls back to
/// `path` itself.
fn relative_to(path: &Path, root: &Path) -> PathBuf {
    let path_lexical = strip_cur_dir(path);
    let root_lexical = strip_cur_dir(root);
    if path.is_absolute() == root.is_absolute()
        && let Ok(relative) = path_lexical.strip_prefix(root_lexical)
    {
        return relative.to_path_buf();
    }
    if let (Ok(path_abs), Ok(root_abs)) = (fs::canonicalize(path), fs::canonicalize(root))
        && let Ok(relative) = path_abs.strip_prefix(&root_abs)
    {
        return relative.to_path_buf();
    }
    path_lexical.to_path_buf()
}

fn strip_cur_dir(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
