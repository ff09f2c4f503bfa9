//! JSON-file score store
//!
//! The whole store is one JSON object mapping collection name to records.
//! Writes go to a `.tmp` sibling first and are renamed over the real file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{PersistError, ScoreRecord, ScoreStore, upsert};
use crate::consts::LEADERBOARD_COLLECTION;

type Collections = BTreeMap<String, Vec<ScoreRecord>>;

#[derive(Debug, Clone)]
pub struct JsonFileScoreStore {
    path: PathBuf,
}

impl JsonFileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Collections, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Collections::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, collections: &Collections) -> Result<(), PersistError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(collections)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileScoreStore {
    async fn record_score(&mut self, identity: &str, score: u64) -> Result<(), PersistError> {
        let mut collections = self.read()?;
        upsert(
            collections
                .entry(LEADERBOARD_COLLECTION.to_string())
                .or_default(),
            identity,
            score,
        );
        self.write(&collections)?;
        log::debug!("Wrote score store {}", self.path.display());
        Ok(())
    }

    async fn fetch_scores(&self, collection: &str) -> Result<Vec<ScoreRecord>, PersistError> {
        Ok(self.read()?.remove(collection).unwrap_or_default())
    }
}
