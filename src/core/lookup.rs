//! Render-time lookup against persisted catalogs.
//!
//! Resolution is a two-step capability: [`Translations::resolve`] answers
//! with an `Option`, and the caller picks the fallback.
//! [`Translations::resolve_or_key`] is the usual choice and shows the raw
//! key.

use std::{borrow::Cow, collections::BTreeMap};

use tracing::{debug, warn};

use super::catalog::{Catalog, KeyPath};
use super::error::{Error, Result};
use super::pending::is_pending;
use super::store::CatalogStore;

#[derive(Debug, Clone)]
pub struct Translations {
    master_locale: String,
    catalogs: BTreeMap<String, Catalog>,
}

impl Translations {
    pub fn new(master_locale: impl Into<String>) -> Self {
        Self {
            master_locale: master_locale.into(),
            catalogs: BTreeMap::new(),
        }
    }

    /// Load the master catalog and every readable locale catalog.
    ///
    /// The master catalog is required. Other locales that are missing or
    /// unreadable are skipped and resolve through the master.
    pub fn load(store: &CatalogStore, master_locale: &str, locales: &[String]) -> Result<Self> {
        let mut translations = Self::new(master_locale);
        translations.insert(master_locale, store.load(master_locale)?);

        for locale in locales.iter().filter(|l| *l != master_locale) {
            match store.load(locale) {
                Ok(catalog) => translations.insert(locale, catalog),
                Err(Error::NotFound { path }) => {
                    debug!(locale = %locale, path = %path.display(), "no catalog for locale");
                }
                Err(error) => warn!(locale = %locale, %error, "skipping unreadable catalog"),
            }
        }
        Ok(translations)
    }

    pub fn insert(&mut self, locale: impl Into<String>, catalog: Catalog) {
        self.catalogs.insert(locale.into(), catalog);
    }

    pub fn master_locale(&self) -> &str {
        &self.master_locale
    }

    /// Translated text of `namespace.key` for `locale`.
    ///
    /// Pending markers count as untranslated. Falls back to the master
    /// catalog, then to `None`.
    pub fn resolve(&self, locale: &str, namespace: &str, key: &str) -> Option<&str> {
        let path = KeyPath::parse(namespace).join(&KeyPath::parse(key));
        if path.is_empty() {
            return None;
        }

        [locale, self.master_locale.as_str()]
            .into_iter()
            .filter_map(|l| self.catalogs.get(l))
            .filter_map(|catalog| catalog.get_leaf(&path))
            .find(|value| !is_pending(value))
    }

    /// Like [`Translations::resolve`], showing the raw `namespace.key` when
    /// nothing resolves.
    pub fn resolve_or_key(&self, locale: &str, namespace: &str, key: &str) -> Cow<'_, str> {
        match self.resolve(locale, namespace, key) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(raw_key(namespace, key)),
        }
    }
}

fn raw_key(namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{namespace}.{key}")
    }
}
