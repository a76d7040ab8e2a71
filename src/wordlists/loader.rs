//! Word list loading
//!
//! Reads a word file as an ordered sequence of text lines.

use std::fs;
use std::io;
use std::path::Path;

/// Load the lines of a word file, in file order
///
/// Each line is one word. Line terminators are stripped but the line text is
/// otherwise kept verbatim: casing, punctuation, and even empty lines survive,
/// since the grouping core accepts any text (letterless words normalize to
/// the empty signature). No maximum line length is assumed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagram_toolkit::wordlists::loader::load_lines;
///
/// let words = load_lines("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    // lines() handles both \n and \r\n terminators
    let words = content.lines().map(str::to_string).collect();

    Ok(words)
}
