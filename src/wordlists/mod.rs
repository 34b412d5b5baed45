//! Word lists for dictionary lookups
//!
//! The dictionary is read once from disk; there is no built-in fallback list.

pub mod loader;

pub use loader::{WORDLIST_FILE_NAME, default_wordlist_path, load_from_file};
