use super::Matcher;
use crate::domain::models::Episode;
use crate::domain::query::Scheme;

pub struct NumberMatcher {
    pub scheme: Scheme,
    pub number: i64,
}

impl Matcher for NumberMatcher {
    fn matches(&self, episode: &Episode) -> bool {
        // Episodes without a number under this scheme never match, so the
        // Nettohen sentinel is not a lookup key.
        self.scheme
            .number_of(episode)
            .is_some_and(|n| i64::from(n) == self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EpisodeRecord;

    fn episode(record: EpisodeRecord) -> Episode {
        Episode::from_record(&record).unwrap()
    }

    #[test]
    fn test_matches_each_scheme() {
        let ep = episode(EpisodeRecord::nettohen(7, "25/19/14", "The Abduction of P-Chan", "Sarawareta P-chan", "さらわれたPちゃん!", "December 8, 1989"));
        let matcher = |scheme, number| NumberMatcher { scheme, number };

        assert!(matcher(Scheme::Nettohen, 7).matches(&ep));
        assert!(matcher(Scheme::Broadcast, 25).matches(&ep));
        assert!(matcher(Scheme::Viz, 19).matches(&ep));
        assert!(matcher(Scheme::Production, 14).matches(&ep));
        assert!(!matcher(Scheme::Broadcast, 14).matches(&ep));
    }

    #[test]
    fn test_sentinel_is_not_a_key() {
        let ep = episode(EpisodeRecord::original(1, 1, "Here's Ranma", "Chūgoku kara Kita Aitsu! Chotto Hen!!", "中国からきたあいつ!ちょっとヘン!!", "April 15, 1989"));
        let matcher = NumberMatcher {
            scheme: Scheme::Nettohen,
            number: -1,
        };
        assert!(!matcher.matches(&ep));
    }
}
