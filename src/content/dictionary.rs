//! Reader dictionary: fixed definitions for words looked up from the
//! book reader's selection menu.

use std::time::Duration;

/// Simulated lookup latency before a result is shown.
pub const SEARCH_DELAY: Duration = Duration::from_millis(800);

const DEFINITIONS: &[(&str, &str)] = &[
    ("تدبر", "تفکر عمیق و دقیق در معانی و مفاهیم"),
    ("هدایت", "راهنمایی به سوی راه حق و کمال"),
    ("برهان", "دلیل و استدلال عقلی"),
];

const FALLBACK: &str = "در حال جستجوی تعریف دقیق...";

/// Exact-match lookup.
pub fn lookup(word: &str) -> Option<&'static str> {
    DEFINITIONS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, def)| *def)
}

/// Definition text for display: the match, or the searching placeholder.
pub fn definition(word: &str) -> &'static str {
    lookup(word).unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_words() {
        assert_eq!(lookup("تدبر"), Some("تفکر عمیق و دقیق در معانی و مفاهیم"));
        assert_eq!(lookup("هدایت"), Some("راهنمایی به سوی راه حق و کمال"));
        assert_eq!(lookup("برهان"), Some("دلیل و استدلال عقلی"));
    }

    #[test]
    fn test_unknown_word_falls_back() {
        assert_eq!(lookup("ناشناخته"), None);
        assert_eq!(definition("ناشناخته"), FALLBACK);
    }
}
