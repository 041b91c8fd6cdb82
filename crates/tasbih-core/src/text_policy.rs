//! Shared text shaping and truncation policies for labels and numbers.

use core::fmt::Display;

use crate::language::Language;

/// Maximum length of package titles and step names, in characters.
pub const MAX_LABEL_CHARS: usize = 50;

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Longest prefix of `source` holding at most `max_chars` characters.
pub fn clamp_chars(source: &str, max_chars: usize) -> &str {
    match source.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &source[..byte_index],
        None => source,
    }
}

/// Trimmed and clamped label, or `None` when nothing is left after trimming.
pub fn normalized_label(source: &str) -> Option<String> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Clamping can expose trailing whitespace that sat inside the label.
    let clamped = clamp_chars(trimmed, MAX_LABEL_CHARS).trim_end();
    Some(clamped.to_owned())
}

/// Render a number with the digit set of the active language.
pub fn localized_number(value: impl Display, language: Language) -> String {
    localized_digits(&value.to_string(), language)
}

/// Swap ASCII digits for Bengali ones when the language asks for it.
pub fn localized_digits(source: &str, language: Language) -> String {
    match language {
        Language::En => source.to_owned(),
        Language::Bn => source
            .chars()
            .map(|ch| match ch.to_digit(10) {
                Some(digit) => BENGALI_DIGITS[digit as usize],
                None => ch,
            })
            .collect(),
    }
}

/// Strip quote characters wrapped around catalog text.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    text.trim_matches(|ch| matches!(ch, '"' | '\''))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_counts_characters_not_bytes() {
        let bangla = "সুবহানাল্লাহ";
        let clamped = clamp_chars(bangla, 3);
        assert_eq!(clamped.chars().count(), 3);
        assert_eq!(clamp_chars("abc", 10), "abc");
        assert_eq!(clamp_chars("abc", 0), "");
    }

    #[test]
    fn normalized_label_trims_and_clamps() {
        assert_eq!(normalized_label("  My Dhikr  ").as_deref(), Some("My Dhikr"));
        assert_eq!(normalized_label("   "), None);

        let long = "x".repeat(80);
        assert_eq!(normalized_label(&long).unwrap().chars().count(), MAX_LABEL_CHARS);
    }

    #[test]
    fn bengali_digits_replace_ascii_digits_only() {
        assert_eq!(localized_number(1_445, Language::Bn), "১৪৪৫");
        assert_eq!(localized_digits("3:173", Language::Bn), "৩:১৭৩");
        assert_eq!(localized_number(33, Language::En), "33");
    }

    #[test]
    fn wrapping_quotes_are_removed() {
        assert_eq!(strip_wrapping_quotes("\"Keep going\""), "Keep going");
        assert_eq!(strip_wrapping_quotes("'it's fine'"), "it's fine");
    }
}
