use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".templatesrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Directory holding the canonical English templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Directory holding one `<code>.json` catalog per language.
    #[serde(default = "default_messages_dir")]
    pub messages_dir: String,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    /// Pseudo-language documenting each message. Never exported.
    #[serde(default = "default_doc_locale")]
    pub doc_locale: String,
    /// Install location of the templates, relative to `--destdir`.
    #[serde(default = "default_install_prefix")]
    pub install_prefix: String,
}

fn default_templates_dir() -> String {
    "en".to_string()
}

fn default_messages_dir() -> String {
    "i18n".to_string()
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_doc_locale() -> String {
    "qqq".to_string()
}

fn default_install_prefix() -> String {
    "usr/share/mailman-templates".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            messages_dir: default_messages_dir(),
            source_locale: default_source_locale(),
            doc_locale: default_doc_locale(),
            install_prefix: default_install_prefix(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.source_locale.is_empty() {
            bail!("'sourceLocale' must not be empty");
        }
        if self.doc_locale.is_empty() {
            bail!("'docLocale' must not be empty");
        }
        if self.source_locale == self.doc_locale {
            bail!(
                "'sourceLocale' and 'docLocale' must differ (both are \"{}\")",
                self.source_locale
            );
        }
        if Path::new(&self.install_prefix).is_absolute() {
            bail!(
                "'installPrefix' must be relative to --destdir: \"{}\"",
                self.install_prefix
            );
        }
        Ok(())
    }

    /// File name of the canonical catalog, e.g. `en.json`.
    pub fn source_catalog_name(&self) -> String {
        format!("{}.json", self.source_locale)
    }

    /// File name of the documentation catalog, e.g. `qqq.json`.
    pub fn doc_catalog_name(&self) -> String {
        format!("{}.json", self.doc_locale)
    }
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
    /// Directory that relative paths in the config resolve against.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
