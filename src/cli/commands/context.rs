use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::store::CatalogStore,
};

/// Configuration and catalog store shared by the commands.
///
/// The config file is looked up from the working directory; command line
/// flags override its values.
pub struct CommandContext {
    pub config: Config,
    pub store: CatalogStore,
}

impl CommandContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(Path::new("."))?;
        debug!(from_file = loaded.from_file, "configuration loaded");
        Self::from_config(loaded.config, common_args)
    }

    pub fn from_config(mut config: Config, common_args: &CommonArgs) -> Result<Self> {
        if let Some(master_locale) = &common_args.master_locale {
            config.master_locale = master_locale.clone();
        }
        if let Some(source_root) = &common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }
        if let Some(messages_root) = &common_args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        config.validate()?;

        let store = CatalogStore::new(&config.messages_root);
        Ok(Self { config, store })
    }

    pub fn master_locale(&self) -> &str {
        &self.config.master_locale
    }

    /// Configured locales, or the catalogs found in the messages directory
    /// when none are configured. Includes the master locale.
    pub fn locales(&self) -> Result<Vec<String>> {
        if !self.config.locales.is_empty() {
            return Ok(self.config.locales.clone());
        }
        self.store.discover_locales().with_context(|| {
            format!(
                "Failed to discover locales in {}",
                self.store.root().display()
            )
        })
    }

    /// Every locale except the master.
    pub fn target_locales(&self) -> Result<Vec<String>> {
        let master = self.master_locale();
        Ok(self
            .locales()?
            .into_iter()
            .filter(|locale| locale != master)
            .collect())
    }
}
