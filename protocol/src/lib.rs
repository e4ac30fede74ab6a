//! Wire types shared with the remote scoring service. Field names follow the
//! service's JSON contract; keep `serde` attributes in sync with the backend.

use serde::{Deserialize, Serialize};

/// Opaque credential issued at session start and echoed back with the final
/// submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(pub String);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
}

/// Final result of a ranked run, submitted once per session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub token: SessionToken,
    pub score: u32,
    /// Elapsed seconds, rounded up.
    pub time_used: u64,
}

/// Scoring service's answer to a submission: the player's personal best and
/// their standing among all competitors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub score: u32,
    pub time_used: u64,
    pub rank: u32,
    pub total: u32,
}

impl RankResult {
    /// Share of players beaten, in percent; 0 when nobody is ranked yet.
    pub fn beat_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let beaten = i64::from(self.total) - i64::from(self.rank) + 1;
        beaten.max(0) as f64 / f64::from(self.total) * 100.0
    }
}

/// One leaderboard row, already ordered by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub time_used: u64,
}
