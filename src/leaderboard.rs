//! Leaderboard ranking
//!
//! Built from the records a [`crate::persistence::ScoreStore`] returns; sorted
//! highest score first, ties keep store order.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreRecord;

/// A ranked leaderboard line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-indexed rank
    pub rank: usize,
    pub identity: String,
    pub score: u64,
}

/// Score leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank fetched records (descending by score)
    pub fn from_records(mut records: Vec<ScoreRecord>) -> Self {
        records.sort_by(|a, b| b.score.cmp(&a.score));
        let entries = records
            .into_iter()
            .enumerate()
            .map(|(i, r)| LeaderboardEntry {
                rank: i + 1,
                identity: r.identity,
                score: r.score,
            })
            .collect();
        Self { entries }
    }

    /// Rank currently held by `identity`
    pub fn rank_of(&self, identity: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.identity == identity)
            .map(|e| e.rank)
    }

    /// Get the rank a new score would achieve (1-indexed)
    pub fn potential_rank(&self, score: u64) -> usize {
        self.entries.iter().position(|e| score > e.score).unwrap_or(self.entries.len()) + 1
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// First `n` entries
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Plain-text table, one `rank. identity: score` line per entry
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{:>2}. {}: {}\n", e.rank, e.identity, e.score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(identity: &str, score: u64) -> ScoreRecord {
        ScoreRecord {
            identity: identity.into(),
            score,
        }
    }

    #[test]
    fn test_sorted_descending() {
        let board = Leaderboard::from_records(vec![
            record("a", 1000),
            record("b", 3000),
            record("c", 2000),
        ]);
        let order: Vec<&str> = board.entries.iter().map(|e| e.identity.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(board.top_score(), Some(3000));
        assert_eq!(board.rank_of("c"), Some(2));
        assert_eq!(board.rank_of("zed"), None);
    }

    #[test]
    fn test_ties_keep_store_order() {
        let board = Leaderboard::from_records(vec![record("first", 1000), record("second", 1000)]);
        assert_eq!(board.rank_of("first"), Some(1));
        assert_eq!(board.rank_of("second"), Some(2));
    }

    #[test]
    fn test_potential_rank() {
        let board = Leaderboard::from_records(vec![record("a", 3000), record("b", 1000)]);
        assert_eq!(board.potential_rank(5000), 1);
        assert_eq!(board.potential_rank(2000), 2);
        assert_eq!(board.potential_rank(1000), 3);
        assert_eq!(Leaderboard::new().potential_rank(0), 1);
    }

    #[test]
    fn test_top_and_render() {
        let board = Leaderboard::from_records(vec![record("a", 3000), record("b", 1000)]);
        assert_eq!(board.top(1).len(), 1);
        assert_eq!(board.top(10).len(), 2);
        assert_eq!(board.render(), " 1. a: 3000\n 2. b: 1000\n");
        assert!(Leaderboard::new().is_empty());
    }
}
