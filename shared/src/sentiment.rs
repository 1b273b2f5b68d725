use crate::api::{Sentiment, SentimentResult};
use crate::lexicon::{NEGATIVE_KEYWORDS, NEUTRAL_KEYWORDS, POSITIVE_KEYWORDS};

/// Keyword-count sentiment.
///
/// Each whitespace token counts towards at most one category: the first of
/// positive, negative, neutral whose keyword list has an entry contained in the
/// token. Matching is by substring, so "goodness" is positive.
pub fn score(text: &str) -> SentimentResult {
    let (mut positive, mut negative, mut neutral) = (0usize, 0usize, 0usize);

    for token in text.to_lowercase().split_whitespace() {
        if matches_any(token, POSITIVE_KEYWORDS) {
            positive += 1;
        } else if matches_any(token, NEGATIVE_KEYWORDS) {
            negative += 1;
        } else if matches_any(token, NEUTRAL_KEYWORDS) {
            neutral += 1;
        }
    }

    let total = match positive + negative + neutral {
        0 => 1,
        n => n,
    } as f64;

    let positive = positive as f64 / total * 100.0;
    let negative = negative as f64 / total * 100.0;
    let neutral = neutral as f64 / total * 100.0;

    let max = positive.max(negative).max(neutral);
    let overall = if max == positive {
        Sentiment::Positive
    } else if max == negative {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    SentimentResult {
        positive,
        negative,
        neutral,
        overall,
    }
}

fn matches_any(token: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| token.contains(keyword))
}
