//! Mapping between message keys and template filenames.
//!
//! A message key such as `list-user-notice-welcome` lives on disk as
//! `list:user:notice:welcome.txt`. Hyphens in keys become colons in filenames,
//! except for the keys listed in [`IRREGULAR_KEYS`], whose filenames keep a
//! literal hyphen in their last segment.

use std::path::Path;

/// File extension of every template file, including the dot.
pub const TEMPLATE_EXTENSION: &str = ".txt";

/// Keys whose filename cannot be derived by the generic rule.
///
/// Any new template whose name contains a hyphen needs an entry here,
/// otherwise it will not survive a sync/export round-trip.
pub const IRREGULAR_KEYS: &[(&str, &str)] = &[
    (
        "domain-admin-notice-new-list",
        "domain:admin:notice:new-list.txt",
    ),
    (
        "list-user-notice-no-more-today",
        "list:user:notice:no-more-today.txt",
    ),
];

/// Converts a template path into its message key.
///
/// Only the file name component is used. Colons become hyphens and the
/// four-character extension is dropped. The input is not validated.
///
/// # Examples
///
/// ```
/// use templates_i18n::keys::path_to_key;
///
/// assert_eq!(path_to_key("en/list:user:notice:welcome.txt"), "list-user-notice-welcome");
/// ```
pub fn path_to_key(path: impl AsRef<Path>) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().replace(':', "-"))
        .unwrap_or_default();

    let mut chars = name.chars();
    for _ in 0..TEMPLATE_EXTENSION.len() {
        chars.next_back();
    }
    chars.as_str().to_string()
}

/// Converts a message key into its template filename.
///
/// # Examples
///
/// ```
/// use templates_i18n::keys::key_to_filename;
///
/// assert_eq!(key_to_filename("list-user-notice-welcome"), "list:user:notice:welcome.txt");
/// assert_eq!(
///     key_to_filename("domain-admin-notice-new-list"),
///     "domain:admin:notice:new-list.txt"
/// );
/// ```
pub fn key_to_filename(key: &str) -> String {
    if let Some((_, filename)) = IRREGULAR_KEYS.iter().find(|(k, _)| *k == key) {
        return filename.to_string();
    }
    format!("{}{}", key.replace('-', ":"), TEMPLATE_EXTENSION)
}

/// Returns true if the filename maps back to itself through its key.
///
/// A `false` result means the name holds a hyphen that is not a separator and
/// is missing from [`IRREGULAR_KEYS`].
pub fn round_trips(filename: &str) -> bool {
    key_to_filename(&path_to_key(filename)) == filename
}
