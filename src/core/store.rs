//! Catalog persistence: one `<locale>.json` per locale under the messages
//! root.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::catalog::Catalog;
use super::error::{Error, Result};

const CATALOG_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct CatalogStore {
    root: PathBuf,
}

impl CatalogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{locale}.{CATALOG_EXTENSION}"))
    }

    pub fn load(&self, locale: &str) -> Result<Catalog> {
        load_catalog(&self.path_for(locale))
    }

    pub fn save(&self, locale: &str, catalog: &Catalog) -> Result<()> {
        save_catalog(&self.path_for(locale), catalog)
    }

    /// Locales that have a catalog file, sorted by name.
    pub fn discover_locales(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| Error::from_read(&self.root, e))?;

        let mut locales = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::from_read(&self.root, e))?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(CATALOG_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                locales.push(stem.to_string());
            }
        }
        locales.sort();
        Ok(locales)
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
    let catalog = Catalog::from_json_str(&content).map_err(|e| Error::MalformedCatalog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), leaves = catalog.leaf_count(), "loaded catalog");
    Ok(catalog)
}

/// Write `catalog` to `path` through a temporary file in the same directory
/// followed by a rename. On failure the temporary file is removed and
/// `path` keeps its previous content.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let write_failure = |source: io::Error| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let content = catalog
        .to_pretty_json()
        .map_err(|e| write_failure(e.into()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(write_failure)?;
    temp.write_all(content.as_bytes()).map_err(write_failure)?;
    temp.as_file().sync_all().map_err(write_failure)?;
    temp.persist(path).map_err(|e| write_failure(e.error))?;

    info!(path = %path.display(), leaves = catalog.leaf_count(), "wrote catalog");
    Ok(())
}
