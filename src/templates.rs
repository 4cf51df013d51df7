//! Template directory I/O.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::keys::{key_to_filename, path_to_key, round_trips};

/// A template file read from the canonical template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub key: String,
    pub path: PathBuf,
    /// File content with trailing whitespace removed.
    pub text: String,
}

impl Template {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        Ok(Self {
            key: path_to_key(path),
            path: path.to_path_buf(),
            text: content.trim_end().to_string(),
        })
    }

    /// True when the file name cannot be recovered from the key.
    pub fn needs_irregular_entry(&self) -> bool {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        !round_trips(&name)
    }
}

/// Reads every regular file of `dir` as a template, in directory order.
pub fn read_template_dir(dir: &Path) -> Result<Vec<Template>> {
    if !dir.is_dir() {
        bail!(
            "Template directory '{}' does not exist or is not a directory.\n\
             Hint: Check the 'templatesDir' setting or pass --templates-dir.",
            dir.display()
        );
    }

    let mut templates = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() {
            templates.push(Template::read(&path)?);
        }
    }
    Ok(templates)
}

/// Normalizes a catalog value into template file content.
///
/// Surrounding whitespace is removed. Non-empty text ends with exactly one
/// newline; blank text becomes an empty file.
pub fn normalize_text(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    }
}

/// Writes one message into `lang_dir`, returning the path written.
pub fn write_template(lang_dir: &Path, key: &str, value: &str) -> Result<PathBuf> {
    let path = lang_dir.join(key_to_filename(key));
    fs::write(&path, normalize_text(value))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path)
}
