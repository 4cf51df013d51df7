//! Reading and writing per-language JSON catalogs.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{
    Map, Value,
    ser::{Formatter, PrettyFormatter},
};

/// Prefix of catalog entries that document the catalog instead of holding a message.
pub const METADATA_PREFIX: char = '@';

/// Returns true for `@metadata`-style entries.
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// One language catalog as found on disk.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Language code, taken from the file stem (`de.json` -> `de`).
    pub locale: String,
    pub path: PathBuf,
    /// Entries in file order, metadata entries included.
    pub entries: Map<String, Value>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let locale = extract_locale(path)
            .with_context(|| format!("Cannot derive a language code from {}", path.display()))?;

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

        let entries = match value {
            Value::Object(map) => map,
            _ => bail!("Root of JSON file must be an object: {}", path.display()),
        };

        Ok(Self {
            locale,
            path: path.to_path_buf(),
            entries,
        })
    }

    /// All top-level keys, metadata entries included.
    pub fn key_set(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Message entries in file order, skipping metadata.
    ///
    /// Fails on the first message whose value is not a string.
    pub fn messages(&self) -> Result<Vec<(&str, &str)>> {
        let mut messages = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            if is_metadata_key(key) {
                continue;
            }
            let Some(text) = value.as_str() else {
                bail!(
                    "Value of \"{}\" in {} must be a string, found {}",
                    key,
                    self.path.display(),
                    json_type_name(value)
                );
            };
            messages.push((key.as_str(), text));
        }
        Ok(messages)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extracts the language code from a catalog filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "pt-BR.json" -> Some("pt-BR")
/// - "/path/to/i18n/qqq.json" -> Some("qqq")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// A catalog file found on disk, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    pub locale: String,
    pub path: PathBuf,
}

impl CatalogFile {
    pub fn load(&self) -> Result<Catalog> {
        Catalog::load(&self.path)
    }
}

/// Lists every `*.json` catalog in `dir`, sorted by language code.
///
/// Files are only listed here; callers parse the ones they need.
pub fn scan_catalogs(dir: &Path) -> Result<Vec<CatalogFile>> {
    if !dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check the 'messagesDir' setting or pass --messages-dir.",
            dir.display()
        );
    }
    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            files.push(CatalogFile { locale, path });
        }
    }
    files.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(files)
}

/// Pretty printer for the canonical catalog.
///
/// Tab indentation, with every character outside printable ASCII written as a
/// `\uXXXX` escape (UTF-16 surrogate pairs above the BMP). Catalogs stay
/// pure ASCII, the form the translation platform commits them in.
struct CanonicalFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl CanonicalFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"\t"),
        }
    }
}

impl Formatter for CanonicalFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serializes messages as a key-sorted, tab-indented JSON object.
///
/// The output is pure ASCII and has no trailing newline.
pub fn to_canonical_json(messages: &BTreeMap<String, String>) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter::new());
    messages
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}

/// Writes the canonical catalog, replacing any existing file.
pub fn write_canonical(path: &Path, messages: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = to_canonical_json(messages)?;
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
