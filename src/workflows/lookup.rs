use tracing::debug;

use super::matchers;
use crate::domain::error::QueryError;
use crate::domain::models::Episode;
use crate::domain::query::Query;
use crate::infra::catalog::Catalog;

/// Finds the first episode in `catalog` that answers `query`.
pub fn find_episode<'a>(catalog: &'a Catalog, query: &Query) -> Result<&'a Episode, QueryError> {
    debug!(?query, "looking up episode");
    matchers::for_query(query)
        .iter()
        .find_map(|matcher| catalog.find(|episode| matcher.matches(episode)))
        .ok_or_else(|| query.not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::{Scheme, TitleField};
    use chrono::NaiveDate;

    fn number(scheme: Scheme, number: i64) -> Query {
        Query::Number { scheme, number }
    }

    fn title(field: TitleField, text: &str) -> Query {
        Query::Title {
            field,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_nettohen_one() {
        let catalog = Catalog::builtin().unwrap();
        let episode = find_episode(&catalog, &number(Scheme::Nettohen, 1)).unwrap();
        assert_eq!(episode.broadcast, 19);
        assert_eq!(
            episode.title,
            "Clash of the Delivery Girls! The Martial Arts Takeout Race"
        );
    }

    #[test]
    fn test_broadcast_one_is_heres_ranma() {
        let catalog = Catalog::builtin().unwrap();
        let episode = find_episode(&catalog, &number(Scheme::Broadcast, 1)).unwrap();
        assert_eq!(episode.title, "Here's Ranma");
        assert_eq!((episode.broadcast, episode.viz, episode.production), (1, 1, 1));
        assert_eq!(episode.aired, NaiveDate::from_ymd_opt(1989, 4, 15).unwrap());
    }

    #[test]
    fn test_broadcast_nineteen_is_first_nettohen_episode() {
        let catalog = Catalog::builtin().unwrap();
        let episode = find_episode(&catalog, &number(Scheme::Broadcast, 19)).unwrap();
        assert_eq!(episode.nettohen, Some(1));
        assert_eq!(episode.viz, 22);
        assert_eq!(episode.production, 22);
    }

    #[test]
    fn test_viz_and_production_orders_diverge() {
        let catalog = Catalog::builtin().unwrap();
        let by_viz = find_episode(&catalog, &number(Scheme::Viz, 19)).unwrap();
        assert_eq!(by_viz.title, "The Abduction of P-Chan");

        let by_production = find_episode(&catalog, &number(Scheme::Production, 14)).unwrap();
        assert_eq!(by_production.title, "The Abduction of P-Chan");
    }

    #[test]
    fn test_every_broadcast_number_resolves_to_itself() {
        let catalog = Catalog::builtin().unwrap();
        for k in 1..=161 {
            let episode = find_episode(&catalog, &number(Scheme::Broadcast, k)).unwrap();
            assert_eq!(i64::from(episode.broadcast), k);
        }
    }

    #[test]
    fn test_name_ignores_punctuation_and_spacing() {
        let catalog = Catalog::builtin().unwrap();
        let episode = find_episode(&catalog, &title(TitleField::English, "ranma and ranma")).unwrap();
        assert_eq!(
            episode.title,
            "Ranma and... Ranma? If It's Not One Thing, It's Another"
        );

        let episode = find_episode(
            &catalog,
            &title(
                TitleField::English,
                "ranma and ranma if its not one thing its another",
            ),
        )
        .unwrap();
        assert_eq!(episode.broadcast, 4);
    }

    #[test]
    fn test_exact_title_wins_over_earlier_prefix() {
        let catalog = Catalog::builtin().unwrap();
        // "Ranma Gets Weak!" starts with "ranma" too but comes later; an exact
        // title must still beat any prefix hit.
        let episode = find_episode(&catalog, &title(TitleField::English, "Ranma Gets Weak")).unwrap();
        assert_eq!(episode.nettohen, Some(48));

        let episode = find_episode(&catalog, &title(TitleField::English, "ranma")).unwrap();
        assert_eq!(episode.broadcast, 4);
    }

    #[test]
    fn test_rjname_folds_macrons() {
        let catalog = Catalog::builtin().unwrap();
        let episode = find_episode(
            &catalog,
            &title(TitleField::Romaji, "Gakko wa Senjo da Taiketsu Ranma Buiesu Ryoga"),
        )
        .unwrap();
        assert_eq!(episode.broadcast, 8);
    }

    #[test]
    fn test_not_found() {
        let catalog = Catalog::builtin().unwrap();
        let err = find_episode(&catalog, &number(Scheme::Nettohen, 9999)).unwrap_err();
        assert_eq!(err.to_string(), "Can't find Nettohen episode 9999");

        let err = find_episode(&catalog, &title(TitleField::English, "nonexistent episode")).unwrap_err();
        assert_eq!(err.to_string(), "Can't find episode name \"nonexistent episode\"");

        let err = find_episode(&catalog, &number(Scheme::Nettohen, -1)).unwrap_err();
        assert!(matches!(err, QueryError::NumberNotFound { number: -1, .. }));
    }
}
