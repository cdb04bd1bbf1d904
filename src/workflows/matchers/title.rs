use tracing::warn;

use super::Matcher;
use crate::domain::models::Episode;
use crate::domain::query::TitleField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Exact,
    Prefix,
}

/// Compares one title field against a query after both are normalized.
pub struct TitleMatcher {
    field: TitleField,
    normalized_query: String,
    mode: Mode,
}

impl TitleMatcher {
    /// Normalized title must equal the normalized query.
    pub fn exact(field: TitleField, query: &str) -> Self {
        let normalized_query = normalize_title(query);
        if normalized_query.is_empty() {
            // Matches any title that also normalizes to nothing.
            warn!(query, "title query has no comparable characters");
        }
        Self {
            field,
            normalized_query,
            mode: Mode::Exact,
        }
    }

    /// Normalized title must start with the normalized query.
    pub fn prefix(field: TitleField, query: &str) -> Self {
        Self {
            field,
            normalized_query: normalize_title(query),
            mode: Mode::Prefix,
        }
    }

    pub fn has_comparable_text(&self) -> bool {
        !self.normalized_query.is_empty()
    }
}

impl Matcher for TitleMatcher {
    fn matches(&self, episode: &Episode) -> bool {
        let title = normalize_title(self.field.title_of(episode));
        match self.mode {
            Mode::Exact => title == self.normalized_query,
            Mode::Prefix => title.starts_with(&self.normalized_query),
        }
    }
}

/// Reduces a title to lowercase ASCII letters.
///
/// Macron vowels fold to their plain vowel. Everything else, including
/// spaces, punctuation, digits and Japanese script, is dropped, so
/// "Here's Ranma" and "heresranma" compare equal.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'a'..='z' => Some(c),
            'ā' => Some('a'),
            'ē' => Some('e'),
            'ī' => Some('i'),
            'ō' => Some('o'),
            'ū' => Some('u'),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EpisodeRecord;

    fn proposal() -> Episode {
        Episode::from_record(&EpisodeRecord::nettohen(
            73,
            "91",
            "Ryoga's Proposal",
            "Ryōga no Puropōsu",
            "良牙のプロポーズ",
            "April 26, 1991",
        ))
        .unwrap()
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("Here's Ranma"), "heresranma");
        assert_eq!(normalize_title("RANMA"), normalize_title("ranma"));
        assert_eq!(normalize_title("Ryōga"), normalize_title("Ryoga"));
        assert_eq!(normalize_title("Āē Īō Ū"), "aeiou");
        assert_eq!(normalize_title("P-P-P-Chan! 2-Gether"), "pppchangether");
        assert_eq!(normalize_title("乱馬とらんま"), "");
    }

    #[test]
    fn test_normalize_title_is_idempotent() {
        for title in [
            "Ranma and... Ranma? If It's Not One Thing, It's Another",
            "Gakkō wa Senjō da! Taiketsu Ranma Buiesu Ryōga",
            "The Return of the Hawaiʻian Headmaster from Hell",
            "SOSエロ妖怪八宝斉",
        ] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once);
        }
    }

    #[test]
    fn test_exact_matcher_ignores_spacing_and_macrons() {
        let episode = proposal();

        assert!(TitleMatcher::exact(TitleField::Romaji, "ryoga no puroposu").matches(&episode));
        assert!(TitleMatcher::exact(TitleField::English, "RYOGAS PROPOSAL").matches(&episode));
        assert!(!TitleMatcher::exact(TitleField::English, "Ryoga no Puroposu").matches(&episode));
        assert!(!TitleMatcher::exact(TitleField::English, "ryogas").matches(&episode));
    }

    #[test]
    fn test_prefix_matcher() {
        let episode = proposal();

        assert!(TitleMatcher::prefix(TitleField::English, "ryoga's").matches(&episode));
        assert!(TitleMatcher::prefix(TitleField::Romaji, "Ryōga no").matches(&episode));
        assert!(!TitleMatcher::prefix(TitleField::English, "proposal").matches(&episode));
    }

    #[test]
    fn test_empty_normalized_forms_match_each_other() {
        let episode = Episode::from_record(&EpisodeRecord::nettohen(
            1,
            "1",
            "おまけ",
            "ー",
            "おまけ",
            "April 26, 1991",
        ))
        .unwrap();

        let matcher = TitleMatcher::exact(TitleField::English, "乱馬");
        assert!(!matcher.has_comparable_text());
        assert!(matcher.matches(&episode));
        assert!(!matcher.matches(&proposal()));
    }
}
