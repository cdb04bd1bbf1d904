use std::collections::HashSet;

use tracing::debug;

use super::episodes::EPISODES;
use crate::domain::error::CatalogError;
use crate::domain::models::{Episode, EpisodeRecord};

/// The immutable episode list every query runs against.
///
/// Order is the order the records were authored in, which is broadcast
/// order for the built-in table. Nothing relies on it being sorted.
#[derive(Debug, Clone)]
pub struct Catalog {
    episodes: Vec<Episode>,
}

impl Catalog {
    /// Builds the catalog from the embedded episode table.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_records(EPISODES)
    }

    pub fn from_records(records: &[EpisodeRecord]) -> Result<Self, CatalogError> {
        let episodes = records
            .iter()
            .map(Episode::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let mut broadcasts = HashSet::new();
        let mut nettohens = HashSet::new();
        for episode in &episodes {
            if !broadcasts.insert(episode.broadcast) {
                return Err(CatalogError::DuplicateBroadcast(episode.broadcast));
            }
            if let Some(nettohen) = episode.nettohen {
                if !nettohens.insert(nettohen) {
                    return Err(CatalogError::DuplicateNettohen(nettohen));
                }
            }
        }

        debug!(episodes = episodes.len(), "built episode catalog");
        Ok(Self { episodes })
    }

    /// First episode, in catalog order, for which `predicate` holds.
    pub fn find<P>(&self, mut predicate: P) -> Option<&Episode>
    where
        P: FnMut(&Episode) -> bool,
    {
        self.episodes.iter().find(|&episode| predicate(episode))
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }
}
