//! Per-process record of completed rounds.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// One completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct LeaderboardEntry {
    pub name: String,
    pub shots: usize,
}

/// An entry with its 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub shots: usize,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {} shots", self.rank, self.name, self.shots)
    }
}

/// Append-only list of `(name, shots)` in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, shots: usize) {
        let name = name.into();
        log::info!("leaderboard: {} finished in {} shots", name, shots);
        self.entries.push(LeaderboardEntry { name, shots });
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fewest shots first; ties keep recording order.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut sorted: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.shots);
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, e)| RankedEntry {
                rank: i + 1,
                name: e.name.clone(),
                shots: e.shots,
            })
            .collect()
    }

    /// One `"<rank>. <name> - <shots> shots"` line per entry.
    pub fn render(&self) -> Vec<String> {
        self.ranked()
            .iter()
            .map(|e| alloc::format!("{}", e))
            .collect()
    }
}
