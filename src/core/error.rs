//! Error taxonomy for the extraction and synchronization engine.
//!
//! Every variant is fatal for one unit of work only (a source file, a key
//! path, or a locale). Callers collect them per unit and keep going.

use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::catalog::KeyPath;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Source file or catalog file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// File exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog file is not a JSON object tree of strings.
    #[error("malformed catalog {}: {reason}", path.display())]
    MalformedCatalog { path: PathBuf, reason: String },

    /// A key path is a leaf on one side and a namespace on the other.
    #[error(transparent)]
    TypeConflict(#[from] TypeConflict),

    /// All conflicts found while synchronizing one locale. The catalog
    /// files are filled in by callers that know them.
    #[error("{} type conflict(s) in locale '{locale}'", conflicts.len())]
    TypeConflicts {
        locale: String,
        conflicts: Vec<TypeConflict>,
        master_file: Option<PathBuf>,
        target_file: Option<PathBuf>,
    },

    /// Temporary file creation, write or rename failed. The original file is untouched.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("key path must not be empty")]
    EmptyKeyPath,

    /// The scanner pattern could not be compiled from the configured alphabet.
    #[error("invalid detection pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Read { path, source }
        }
    }

    /// Attach the master and target catalog files to a `TypeConflicts`
    /// error. Other errors are returned unchanged.
    pub fn with_catalog_files(self, master: &Path, target: &Path) -> Self {
        match self {
            Error::TypeConflicts {
                locale, conflicts, ..
            } => Error::TypeConflicts {
                locale,
                conflicts,
                master_file: Some(master.to_path_buf()),
                target_file: Some(target.to_path_buf()),
            },
            other => other,
        }
    }
}

/// A failure bound to one unit of work (a source file or a locale).
#[derive(Debug)]
pub struct UnitFailure {
    pub unit: String,
    pub error: Error,
}

impl UnitFailure {
    pub fn new(unit: impl Into<String>, error: Error) -> Self {
        Self {
            unit: unit.into(),
            error,
        }
    }
}

impl fmt::Display for UnitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.unit, self.error)
    }
}

/// Kind of a catalog node, used to describe conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Namespace,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf => write!(f, "leaf"),
            NodeKind::Namespace => write!(f, "namespace"),
        }
    }
}

/// A key path that cannot be both a leaf and a namespace.
///
/// `expected` is the shape required by the authoritative side (the master
/// catalog during sync, the requested write for `Catalog::set`), `found` is
/// what is actually there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type conflict at `{path}`: expected {expected}, found {found}")]
pub struct TypeConflict {
    pub path: KeyPath,
    pub expected: NodeKind,
    pub found: NodeKind,
}
