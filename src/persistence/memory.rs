//! In-process score store

use std::collections::BTreeMap;

use super::{PersistError, ScoreRecord, ScoreStore, upsert};
use crate::consts::LEADERBOARD_COLLECTION;

/// Score store held in memory; can be switched offline to simulate outages
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    collections: BTreeMap<String, Vec<ScoreRecord>>,
    offline: bool,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }
}

impl ScoreStore for MemoryScoreStore {
    async fn record_score(&mut self, identity: &str, score: u64) -> Result<(), PersistError> {
        if self.offline {
            return Err(PersistError::Unavailable);
        }
        let records = self
            .collections
            .entry(LEADERBOARD_COLLECTION.to_string())
            .or_default();
        upsert(records, identity, score);
        Ok(())
    }

    async fn fetch_scores(&self, collection: &str) -> Result<Vec<ScoreRecord>, PersistError> {
        if self.offline {
            return Err(PersistError::Unavailable);
        }
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use pollster::block_on;

    use super::*;

    #[test]
    fn test_record_and_fetch() {
        let mut store = MemoryScoreStore::new();
        block_on(store.record_score("a", 1000)).unwrap();
        block_on(store.record_score("b", 3000)).unwrap();
        block_on(store.record_score("a", 2000)).unwrap();

        let scores = block_on(store.fetch_scores(LEADERBOARD_COLLECTION)).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].identity, "a");
        assert_eq!(scores[0].score, 2000);
    }

    #[test]
    fn test_unknown_collection_is_empty() {
        let store = MemoryScoreStore::new();
        assert!(block_on(store.fetch_scores("nope")).unwrap().is_empty());
    }

    #[test]
    fn test_offline_store_fails() {
        let mut store = MemoryScoreStore::new();
        store.set_offline(true);
        assert!(matches!(
            block_on(store.record_score("a", 1)),
            Err(PersistError::Unavailable)
        ));
        store.set_offline(false);
        assert!(block_on(store.fetch_scores(LEADERBOARD_COLLECTION)).unwrap().is_empty());
    }
}
