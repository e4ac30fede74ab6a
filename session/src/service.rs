use tripick_protocol::{
    LeaderboardEntry, PlayerProfile, RankResult, SessionToken, SubmissionPayload,
};

const MAX_NAME_CHARS: usize = 10;

/// Remote scoring collaborator, implemented by the embedding application.
/// Failures surface through `Error` as user-visible messages and never touch
/// in-memory game state.
#[allow(async_fn_in_trait)]
pub trait ScoreService {
    type Error;

    /// Fetches the player profile at startup.
    async fn init(&self) -> Result<PlayerProfile, Self::Error>;

    /// Issues the opaque token a ranked session is keyed by.
    async fn start_game(&self) -> Result<SessionToken, Self::Error>;

    /// Submits a finished run; the answer carries the personal best and the
    /// current standing.
    async fn finish_game(&self, payload: SubmissionPayload) -> Result<RankResult, Self::Error>;

    /// Ordered leaderboard, best first.
    async fn rank_list(&self) -> Result<Vec<LeaderboardEntry>, Self::Error>;

    async fn change_name(&self, name: &str) -> Result<(), Self::Error>;
}

/// Trims and caps a requested display name; `None` means there is nothing
/// worth sending to [`ScoreService::change_name`].
pub fn normalize_display_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_NAME_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(normalize_display_name("   "), None);
        assert_eq!(normalize_display_name(""), None);
    }

    #[test]
    fn names_are_trimmed_and_capped() {
        assert_eq!(normalize_display_name(" crab "), Some("crab".into()));
        assert_eq!(
            normalize_display_name("abcdefghijklmnop"),
            Some("abcdefghij".into())
        );
    }
}
