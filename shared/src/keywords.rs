use std::collections::HashMap;

use crate::lexicon::STOPWORDS;

pub const MAX_KEYWORDS: usize = 8;
const MIN_KEYWORD_LEN: usize = 4;

/// Most frequent content words, at most [`MAX_KEYWORDS`].
///
/// Only ASCII word characters survive normalization. Words shorter than four
/// characters and stopwords are dropped; equal counts keep first-seen order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let mut ranked: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in normalized.split_whitespace() {
        if word.len() < MIN_KEYWORD_LEN || STOPWORDS.contains(word) {
            continue;
        }
        match index.get(word) {
            Some(&slot) => ranked[slot].1 += 1,
            None => {
                index.insert(word, ranked.len());
                ranked.push((word, 1));
            }
        }
    }

    // stable: ties stay in encounter order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency_and_drops_short_words() {
        let keywords = extract_keywords("the quick quick brown brown brown fox");
        assert_eq!(keywords, vec!["brown", "quick"]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let keywords = extract_keywords("zebra apple mango apple zebra mango kiwis");
        assert_eq!(keywords, vec!["zebra", "apple", "mango", "kiwis"]);
    }

    #[test]
    fn punctuation_is_stripped_before_length_check() {
        let keywords = extract_keywords("rust's borrow-checker, rust's borrow!");
        assert_eq!(keywords, vec!["rusts", "borrowchecker", "borrow"]);
    }

    #[test]
    fn stopwords_never_returned() {
        let keywords = extract_keywords("this that with have will been from they good good good");
        assert!(keywords.is_empty());
    }

    #[test]
    fn caps_at_eight() {
        let text = "alpha bravo charlie delta echoes foxtrot golfer hotel india juliet";
        let keywords = extract_keywords(text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "alpha");
    }
}
