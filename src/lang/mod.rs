use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;

use include_dir::{include_dir, Dir};
use std::error::Error;

static LANG_DIR: Dir = include_dir!("src/lang");

/// Word list a round's target text is drawn from. Words are lowercase
/// ascii letters only, so the resulting text stays within the session's
/// input alphabet.
#[derive(Deserialize, Clone, Debug)]
pub struct Dictionary {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Dictionary {
    /// Load a dictionary by name. Fails with a plain error for an unknown
    /// name so the caller can bail out before the terminal is put into raw
    /// mode.
    pub fn new(file_name: &str) -> Result<Self, Box<dyn Error>> {
        read_dictionary_from_file(format!("{}.json", file_name))
    }

    /// Uniformly shuffle the dictionary and join the first `num` words
    /// with single spaces to form a round's target text.
    pub fn target_text(&self, num: usize) -> String {
        let mut words = self.words.clone();
        words.shuffle(&mut rand::thread_rng());
        words.truncate(num);
        words.join(" ")
    }
}

fn read_dictionary_from_file(file_name: String) -> Result<Dictionary, Box<dyn Error>> {
    let file = LANG_DIR
        .get_file(&file_name)
        .ok_or_else(|| format!("dictionary {file_name:?} not found"))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| format!("dictionary {file_name:?} is not valid utf-8"))?;

    let dict = from_str(file_as_str)?;

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_new() {
        let dict = Dictionary::new("english").unwrap();

        assert_eq!(dict.name, "english");
        assert!(dict.words.len() > 0);
        assert!(dict.size > 0);
        assert_eq!(dict.words.len() as u32, dict.size);
    }

    #[test]
    fn test_words_are_lowercase_letters_only() {
        let dict = Dictionary::new("english").unwrap();

        for word in &dict.words {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "word {word:?} leaves the session alphabet"
            );
        }
    }

    #[test]
    fn test_target_text_word_count() {
        let dict = Dictionary::new("english").unwrap();

        let text = dict.target_text(20);
        assert_eq!(text.split(' ').count(), 20);
        // 20 words joined with single spaces -> 19 separators.
        assert_eq!(text.matches(' ').count(), 19);
        assert!(!text.starts_with(' '));
        assert!(!text.ends_with(' '));
    }

    #[test]
    fn test_target_text_words_come_from_dictionary() {
        let dict = Dictionary::new("english").unwrap();

        let text = dict.target_text(10);
        for word in text.split(' ') {
            assert!(dict.words.contains(&word.to_string()));
        }
    }

    #[test]
    fn test_target_text_zero_words() {
        let dict = Dictionary::new("english").unwrap();

        assert_eq!(dict.target_text(0), "");
    }

    #[test]
    fn test_target_text_varies() {
        let dict = Dictionary::new("english").unwrap();

        // With a few hundred candidate words, ten draws of 20 being all
        // identical would mean the shuffle is broken.
        let first = dict.target_text(20);
        let all_same = (0..10).all(|_| dict.target_text(20) == first);
        assert!(!all_same);
    }

    #[test]
    fn test_unknown_dictionary_name_is_an_error() {
        let err = Dictionary::new("nonexistent").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
