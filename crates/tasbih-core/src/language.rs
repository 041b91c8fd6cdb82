//! Two-way display language selector.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Bn,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Bn];

    /// Row index into per-language static tables.
    pub const fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Bn => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "en" => Some(Self::En),
            "bn" => Some(Self::Bn),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Bn,
            Self::Bn => Self::En,
        }
    }

    pub fn pick<T>(self, en: T, bn: T) -> T {
        match self {
            Self::En => en,
            Self::Bn => bn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bangla() {
        assert_eq!(Language::default(), Language::Bn);
    }

    #[test]
    fn parse_accepts_only_known_codes() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse(" bn\n"), Some(Language::Bn));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::En.toggled(), Language::Bn);
        assert_eq!(Language::Bn.toggled().toggled(), Language::Bn);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"bn\"").unwrap();
        assert_eq!(parsed, Language::Bn);
    }
}
