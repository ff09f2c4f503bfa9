//! Score persistence collaborator
//!
//! The game core never waits on storage: a finished session yields a
//! [`ScoreSubmission`] and the host hands it to a [`ScoreStore`] whenever it
//! likes. Failures are reported back to that caller and never touch game state.
//!
//! Stores provided here:
//! - `MemoryScoreStore`: in-process, for tests and offline play
//! - `JsonFileScoreStore`: single JSON document on disk (tmp file + rename)

pub mod json_file;
pub mod memory;

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::ScoreSubmission;

pub use json_file::JsonFileScoreStore;
pub use memory::MemoryScoreStore;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt score data: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("score store unavailable")]
    Unavailable,
}

/// One persisted score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub identity: String,
    pub score: u64,
}

/// Asynchronous score storage.
///
/// `record_score` upserts into the leaderboard collection; keeping a single
/// record per identity is the store's job.
pub trait ScoreStore {
    fn record_score(
        &mut self,
        identity: &str,
        score: u64,
    ) -> impl Future<Output = Result<(), PersistError>>;

    fn fetch_scores(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<ScoreRecord>, PersistError>>;
}

/// Replace or append the record for `identity`
pub(crate) fn upsert(records: &mut Vec<ScoreRecord>, identity: &str, score: u64) {
    match records.iter_mut().find(|r| r.identity == identity) {
        Some(record) => record.score = score,
        None => records.push(ScoreRecord {
            identity: identity.to_string(),
            score,
        }),
    }
}

/// Hand a finished session's score to `store`, logging the outcome
pub async fn submit_score<S: ScoreStore>(
    store: &mut S,
    submission: &ScoreSubmission,
) -> Result<(), PersistError> {
    match store.record_score(&submission.identity, submission.score).await {
        Ok(()) => {
            log::info!("Score {} recorded for {}", submission.score, submission.identity);
            Ok(())
        }
        Err(e) => {
            log::warn!("Error recording score for {}: {}", submission.identity, e);
            Err(e)
        }
    }
}
