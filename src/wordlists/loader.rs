//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file, one word per line
///
/// Blank lines and lines starting with `#` are ignored; invalid entries are
/// skipped (see [`WordList::from_strs`]).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;

    Ok(WordList::from_strs(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    ))
}

/// The embedded curated list
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::embedded;
/// use daily_wordle::wordlists::MY_WORDS;
///
/// assert_eq!(embedded().len(), MY_WORDS.len());
/// ```
#[must_use]
pub fn embedded() -> WordList {
    WordList::from_strs(super::MY_WORDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_skips_comments_and_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# our words").unwrap();
        writeln!(file, "heart").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Pizza  ").unwrap();
        writeln!(file, "toolong").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["HEART", "PIZZA"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn embedded_list_is_not_empty() {
        let words = embedded();
        assert!(!words.is_empty());
        assert_eq!(words.iter().next().map(|w| w.text()), Some("HEART"));
    }
}
