//! Interactive anagram lookup
//!
//! Reads one word per line from standard input, looks up its group, and
//! prints every other member. A blank line or end of input ends the session.

use crate::core::{Registry, Signature};
use std::io::{self, Write};

/// Members of `input`'s anagram group, excluding `input` itself
///
/// Self-exclusion is case-insensitive, so querying "Tea" will not echo a
/// stored "tea" back. Unknown signatures yield an empty list.
#[must_use]
pub fn anagrams_of<'a>(registry: &'a Registry, input: &str) -> Vec<&'a str> {
    let key = Signature::normalize(input);

    registry
        .find_group(&key)
        .map(|group| {
            group
                .members()
                .iter()
                .filter(|member| !member.eq_ignore_ascii_case(input))
                .map(String::as_str)
                .collect()
        })
        .unwrap_or_default()
}

/// Run the interactive query loop against a built registry
///
/// # Errors
///
/// Returns an error if reading standard input or flushing the prompt fails.
pub fn run_query(registry: &Registry) -> Result<(), String> {
    loop {
        let Some(input) = prompt_word()? else {
            break;
        };

        let matches = anagrams_of(registry, &input);
        if matches.is_empty() {
            println!("Anagrams of '{input}': None");
        } else {
            println!("Anagrams of '{input}': {}", matches.join(" "));
        }
    }
    Ok(())
}

/// Prompt for the next word; `None` means quit (blank line or EOF)
fn prompt_word() -> Result<Option<String>, String> {
    print!("Enter a word (or press Enter to quit): ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None); // EOF
    }

    let input = input.trim_end_matches(['\r', '\n']).to_string();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(words: &[&str]) -> Registry {
        Registry::build(words.iter().copied()).unwrap()
    }

    #[test]
    fn finds_other_members() {
        let registry = registry_of(&["eat", "tea", "ate", "bin"]);
        assert_eq!(anagrams_of(&registry, "tea"), vec!["eat", "ate"]);
    }

    #[test]
    fn self_exclusion_is_case_insensitive() {
        let registry = registry_of(&["eat", "tea", "ate"]);
        assert_eq!(anagrams_of(&registry, "TEA"), vec!["eat", "ate"]);
    }

    #[test]
    fn query_word_need_not_be_in_the_list() {
        let registry = registry_of(&["eat", "tea"]);
        // "eta" normalizes to the same group but was never ingested
        assert_eq!(anagrams_of(&registry, "eta"), vec!["eat", "tea"]);
    }

    #[test]
    fn unknown_signature_is_empty_not_an_error() {
        let registry = registry_of(&["eat", "tea"]);
        assert!(anagrams_of(&registry, "zzq").is_empty());
    }

    #[test]
    fn sole_member_has_no_anagrams() {
        let registry = registry_of(&["lonely"]);
        assert!(anagrams_of(&registry, "lonely").is_empty());
    }

    #[test]
    fn punctuation_queries_hit_the_empty_group() {
        let registry = registry_of(&["1234", "!!!"]);
        assert_eq!(anagrams_of(&registry, "??"), vec!["1234", "!!!"]);
    }
}
