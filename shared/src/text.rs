//! Text statistics, readability, the mock summary, and the bundled analysis.

use crate::api::{LanguageStats, TextAnalysis, TextStats};
use crate::error::{Result, StudioError};
use crate::keywords::extract_keywords;
use crate::sentiment;

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn sentence_count(text: &str) -> usize {
    sentences(text).count()
}

/// `100 - 2 * (words per sentence)`, clamped to `[0, 100]` and rounded.
/// Returns 0 when the text has no words or no sentences.
pub fn readability(text: &str) -> u8 {
    let words = word_count(text);
    let sentences = sentence_count(text);
    if words == 0 || sentences == 0 {
        return 0;
    }
    let average = words as f64 / sentences as f64;
    (100.0 - average * 2.0).clamp(0.0, 100.0).round() as u8
}

pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        words: word_count(text),
        characters: text.chars().count(),
        sentences: sentence_count(text),
        readability: readability(text),
    }
}

/// Mock extractive summary: texts of up to two sentences come back unchanged,
/// longer ones are cut to their first `min(2, ceil(n / 3))` sentences.
pub fn summarize(text: &str) -> String {
    let all: Vec<&str> = sentences(text).collect();
    if all.len() <= 2 {
        return text.to_string();
    }
    let keep = all.len().div_ceil(3).min(2);
    format!("{}.", all[..keep].join(". "))
}

pub fn language_stats(_text: &str) -> LanguageStats {
    LanguageStats {
        language: "English".into(),
        confidence: "94.2%".into(),
        word_complexity: "Medium".into(),
        formality_level: "Informal".into(),
    }
}

/// Sentiment, summary, keywords and stats for one piece of text.
pub fn analyze_text(text: &str) -> Result<TextAnalysis> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StudioError::MissingInput("text"));
    }

    Ok(TextAnalysis {
        sentiment: sentiment::score(text),
        summary: summarize(text),
        keywords: extract_keywords(text),
        language_stats: language_stats(text),
        stats: text_stats(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readability_edge_cases() {
        assert_eq!(readability(""), 0);
        assert_eq!(readability("   "), 0);
        assert_eq!(readability("..."), 0);
        assert_eq!(readability("Hi."), 98);
    }

    #[test]
    fn readability_clamps_long_sentences() {
        let long_sentence = "word ".repeat(80);
        assert_eq!(readability(&long_sentence), 0);
    }

    #[test]
    fn readability_rounds() {
        // 7 words / 2 sentences = 3.5 -> 93
        assert_eq!(readability("One two three four. Five six seven!"), 93);
    }

    #[test]
    fn stats_count_unicode_characters() {
        let stats = text_stats("Café time? Yes!");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 15);
        assert_eq!(stats.sentences, 2);
    }

    #[test]
    fn short_text_is_its_own_summary() {
        assert_eq!(summarize("One. Two."), "One. Two.");
    }

    #[test]
    fn long_text_keeps_leading_sentences() {
        assert_eq!(summarize("A one. B two. C three."), "A one.");
        assert_eq!(summarize("A. B. C. D. E. F. G."), "A. B.");
    }

    #[test]
    fn blank_text_is_missing_input() {
        assert_eq!(analyze_text(" \n\t"), Err(StudioError::MissingInput("text")));
    }

    #[test]
    fn analysis_bundles_everything() {
        let analysis = analyze_text("Amazing rockets. Amazing rockets again! Great launch?").unwrap();
        assert_eq!(analysis.sentiment.positive, 100.0);
        assert_eq!(analysis.keywords[0], "amazing");
        assert_eq!(analysis.stats.sentences, 3);
        assert_eq!(analysis.summary, "Amazing rockets.");
        assert_eq!(analysis.language_stats.language, "English");
    }
}
