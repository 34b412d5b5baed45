//! Word list loading utilities
//!
//! Provides functions to build a dictionary from files or string slices.

use crate::core::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the word list shipped beside the executable
pub const WORDLIST_FILE_NAME: &str = "wordlist.txt";

/// Load a dictionary from a newline-delimited file
///
/// Lines are trimmed and blank lines skipped. No case conversion is applied.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use tier_optimizer::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(dictionary_from_text(&content))
}

/// Parse newline-delimited text into a dictionary
///
/// # Examples
/// ```
/// use tier_optimizer::wordlists::loader::dictionary_from_text;
///
/// let dict = dictionary_from_text("cat\n\n  tee \n");
/// assert_eq!(dict.len(), 2);
/// assert!(dict.contains("tee"));
/// ```
#[must_use]
pub fn dictionary_from_text(content: &str) -> Dictionary {
    Dictionary::from_words(content.lines().map(str::trim).filter(|w| !w.is_empty()))
}

/// Build a dictionary from a string slice
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().map(|s| s.trim()))
}

/// Default word list location: `wordlist.txt` in the executable's directory
///
/// # Errors
///
/// Returns an I/O error if the executable path cannot be determined.
pub fn default_wordlist_path() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    Ok(dir.join(WORDLIST_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tier_optimizer_loader_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn text_skips_blank_lines_and_trims() {
        let dict = dictionary_from_text("cat\n\n   \n dog\t\r\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
    }

    #[test]
    fn text_keeps_case() {
        let dict = dictionary_from_text("Cat\n");
        assert!(dict.contains("Cat"));
        assert!(!dict.contains("cat"));
    }

    #[test]
    fn slice_converts_words() {
        let dict = dictionary_from_slice(&["tee", "cat", ""]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = fixture("words.txt", b"tee\ncat\n\n");
        let dict = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("tee"));
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join("tier_optimizer_definitely_missing.txt");
        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_invalid_utf8_fails() {
        let path = fixture("bad.txt", &[0x66, 0xff, 0xfe, b'\n']);
        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn default_path_is_beside_executable() {
        let path = default_wordlist_path().unwrap();
        assert!(path.ends_with(WORDLIST_FILE_NAME));
    }
}
