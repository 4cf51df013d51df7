//! Mailman template translation tooling.
//!
//! Mailman 3 reads its message templates from one plain-text file per message
//! and language, while translators work on one JSON catalog per language.
//! This crate converts between the two.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (sync, export and test actions)
//! - `config`: Configuration file loading and parsing
//! - `keys`: Message key <-> template filename mapping
//! - `catalog`: JSON catalog reading and canonical writing
//! - `templates`: Template directory reading and template writing

pub mod catalog;
pub mod cli;
pub mod config;
pub mod keys;
pub mod templates;
