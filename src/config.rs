use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    scanner::ScanOptions,
    slug::DEFAULT_MAX_KEY_WORDS,
    sync::SyncOptions,
};

pub const CONFIG_FILE_NAME: &str = ".glotsyncrc.json";

/// Vietnamese letters carrying diacritics. Plain ASCII is deliberately absent
/// so that identifiers and English literals are not picked up.
pub const DEFAULT_DETECTION_ALPHABET: &str = "àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵđ";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_master_locale")]
    pub master_locale: String,
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_list", alias = "ignoreTexts")]
    pub ignore_list: Vec<String>,
    #[serde(default = "default_max_key_words")]
    pub max_key_words: usize,
    #[serde(default = "default_detection_alphabet")]
    pub detection_alphabet: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub refresh_pending: bool,
}

fn default_locales() -> Vec<String> {
    ["en", "vi"].map(String::from).to_vec()
}

fn default_master_locale() -> String {
    "en".to_string()
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_list() -> Vec<String> {
    [
        "use client",
        "use server",
        "GET",
        "POST",
        "PUT",
        "PATCH",
        "DELETE",
        "Content-Type",
        "application/json",
        "Authorization",
        "Bearer ",
        "className",
    ]
    .map(String::from)
    .to_vec()
}

fn default_max_key_words() -> usize {
    DEFAULT_MAX_KEY_WORDS
}

fn default_detection_alphabet() -> String {
    DEFAULT_DETECTION_ALPHABET.to_string()
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            master_locale: default_master_locale(),
            messages_root: default_messages_root(),
            source_root: default_source_root(),
            ignore_list: default_ignore_list(),
            max_key_words: default_max_key_words(),
            detection_alphabet: default_detection_alphabet(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            refresh_pending: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.max_key_words == 0 {
            bail!("'maxKeyWords' must be at least 1");
        }

        if self.detection_alphabet.trim().is_empty() {
            bail!("'detectionAlphabet' must contain at least one character");
        }

        if self.master_locale.is_empty() {
            bail!("'masterLocale' must not be empty");
        }

        if !self.locales.is_empty() && !self.locales.contains(&self.master_locale) {
            bail!(
                "'masterLocale' \"{}\" is not listed in 'locales' ({})",
                self.master_locale,
                self.locales.join(", ")
            );
        }

        Ok(())
    }

    /// Scanner settings derived from this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            detection_alphabet: self.detection_alphabet.clone(),
            ignore_list: self.ignore_list.clone(),
            max_key_words: self.max_key_words,
            source_root: PathBuf::from(&self.source_root),
            extensions: self.extensions.clone(),
            ignores: self
                .ignores
                .iter()
                .filter_map(|p| Pattern::new(p).ok())
                .collect(),
        }
    }

    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            refresh_pending: self.refresh_pending,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
