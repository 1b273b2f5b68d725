//! Template-based "generative" text.

use rand::Rng;

use crate::api::{ContentLength, ContentType, GeneratedContent, GenerationRequest};
use crate::lexicon::{EDUCATIONAL_TEMPLATES, LONG_FILLER, MEDIUM_FILLER, STORY_TEMPLATES};

pub const MIN_CREATIVITY: u8 = 1;
pub const MAX_CREATIVITY: u8 = 10;
pub const DEFAULT_CREATIVITY: u8 = 7;
const WORDS_PER_MINUTE: usize = 200;

pub fn templates(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::Story => STORY_TEMPLATES,
        ContentType::Educational => EDUCATIONAL_TEMPLATES,
    }
}

/// Picks a template for the request's type, fills it and appends filler for
/// the requested length.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, request: &GenerationRequest) -> GeneratedContent {
    let candidates = templates(request.content_type);
    let template = candidates[rng.random_range(0..candidates.len())];
    generate_from_template(rng, template, request)
}

pub fn generate_from_template<R: Rng + ?Sized>(
    rng: &mut R,
    template: &str,
    request: &GenerationRequest,
) -> GeneratedContent {
    let creativity = request.creativity.clamp(MIN_CREATIVITY, MAX_CREATIVITY);
    let mut text = fill_template(rng, template, request.theme.trim(), creativity);

    match request.length {
        ContentLength::Short => {}
        ContentLength::Medium => text.push_str(MEDIUM_FILLER),
        ContentLength::Long => text.push_str(LONG_FILLER),
    }

    let word_count = text.split_whitespace().count();
    GeneratedContent {
        text,
        word_count,
        read_time: word_count.div_ceil(WORDS_PER_MINUTE),
        creativity,
        content_type: request.content_type,
    }
}

/// Replaces every known `{placeholder}` in `template`. Unknown tokens are
/// copied through untouched.
pub fn fill_template<R: Rng + ?Sized>(
    rng: &mut R,
    template: &str,
    theme: &str,
    creativity: u8,
) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        let Some(close) = after.find('}') else {
            out.push_str(after);
            return out;
        };
        let key = &after[1..close];
        match substitution(rng, key, theme, creativity) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&after[..=close]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

fn substitution<R: Rng + ?Sized>(
    rng: &mut R,
    key: &str,
    theme: &str,
    creativity: u8,
) -> Option<String> {
    let themed = |with: String, without: &str| {
        if theme.is_empty() {
            without.to_string()
        } else {
            with
        }
    };

    let value = match key {
        "character" => themed(format!("{theme} enthusiast"), "brave adventurer"),
        "goal" => themed(format!("mastering {theme}"), "discovering new worlds"),
        "action" => themed(format!("study {theme}"), "explore unknown territories"),
        "year" => (2020 + rng.random_range(0..10)).to_string(),
        "setting" => themed(format!("{theme} laboratory"), "mystical forest"),
        "item" => themed(format!("{theme} manual"), "ancient map"),
        "emotion" if creativity > 7 => "boundless curiosity".to_string(),
        "emotion" => "quiet determination".to_string(),
        "location" => themed(format!("{theme} research center"), "hidden cave"),
        "object" => themed(format!("{theme} artifact"), "glowing crystal"),
        "topic" => themed(theme.to_string(), "innovation"),
        "field" => themed(format!("{theme} studies"), "modern science"),
        "process" => themed(format!("{theme} methodology"), "systematic analysis"),
        "principles" => themed(format!("core {theme} concepts"), "fundamental laws"),
        "applications" => themed(format!("{theme} implementations"), "practical solutions"),
        "fact1" => "It significantly impacts modern technology".to_string(),
        "fact2" => "Research shows promising developments".to_string(),
        "fact3" => "Future applications are expanding rapidly".to_string(),
        "outcome" => themed(format!("advanced {theme} systems"), "innovative solutions"),
        "area1" => "technological advancement".to_string(),
        "area2" => "social progress".to_string(),
        "area3" => "economic development".to_string(),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn request(content_type: ContentType, theme: &str, length: ContentLength, creativity: u8) -> GenerationRequest {
        GenerationRequest {
            content_type,
            theme: theme.to_string(),
            length,
            creativity,
        }
    }

    #[test]
    fn themed_story_uses_theme_phrases() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request(ContentType::Story, "space travel", ContentLength::Short, 9);
        let content = generate_from_template(&mut rng, STORY_TEMPLATES[0], &req);

        assert!(content.text.contains("space travel enthusiast"));
        assert!(content.text.contains("mastering space travel"));
        assert!(!content.text.contains("{character}"));
        assert!(!content.text.contains("{goal}"));
        assert_eq!(content.content_type, ContentType::Story);
        assert_eq!(content.creativity, 9);
    }

    #[test]
    fn emotion_depends_on_creativity() {
        let mut rng = StdRng::seed_from_u64(1);
        let high = fill_template(&mut rng, "{emotion}", "", 8);
        let low = fill_template(&mut rng, "{emotion}", "", 7);
        assert_eq!(high, "boundless curiosity");
        assert_eq!(low, "quiet determination");
    }

    #[test]
    fn blank_theme_uses_generic_phrases() {
        let mut rng = StdRng::seed_from_u64(2);
        let req = request(ContentType::Educational, "   ", ContentLength::Short, 5);
        let content = generate_from_template(&mut rng, EDUCATIONAL_TEMPLATES[0], &req);
        assert!(content.text.starts_with("Understanding innovation: innovation is"));
        assert!(content.text.contains("modern science"));
    }

    #[test]
    fn year_is_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let year: u32 = fill_template(&mut rng, "{year}", "", 5).parse().unwrap();
            assert!((2020..2030).contains(&year));
        }
    }

    #[test]
    fn unknown_and_unclosed_tokens_pass_through() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(fill_template(&mut rng, "a {mystery} b", "x", 5), "a {mystery} b");
        assert_eq!(fill_template(&mut rng, "open {topic", "x", 5), "open {topic");
    }

    #[test]
    fn length_controls_filler() {
        let mut rng = StdRng::seed_from_u64(4);
        let template = STORY_TEMPLATES[2];
        let short = generate_from_template(&mut rng, template, &request(ContentType::Story, "", ContentLength::Short, 5));
        let medium = generate_from_template(&mut rng, template, &request(ContentType::Story, "", ContentLength::Medium, 5));
        let long = generate_from_template(&mut rng, template, &request(ContentType::Story, "", ContentLength::Long, 5));

        assert!(short.word_count < medium.word_count && medium.word_count < long.word_count);
        assert!(medium.text.ends_with(MEDIUM_FILLER));
        assert!(long.text.ends_with(LONG_FILLER));
        assert_eq!(short.read_time, 1);
    }

    #[test]
    fn creativity_is_clamped() {
        let mut rng = StdRng::seed_from_u64(6);
        let content = generate(&mut rng, &request(ContentType::Story, "", ContentLength::Short, 0));
        assert_eq!(content.creativity, MIN_CREATIVITY);
        let content = generate(&mut rng, &request(ContentType::Story, "", ContentLength::Short, 42));
        assert_eq!(content.creativity, MAX_CREATIVITY);
    }
}
