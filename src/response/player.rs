use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;
use crate::api::response::{BadgesBody, OwnedGame, PlayerSummary};
use crate::serializers::steamid_as_string;

/// Everything the comparison page needs for one player, assembled from
/// several upstream calls.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAggregate {
    /// The player's canonical identifier.
    #[serde(serialize_with = "steamid_as_string")]
    pub steam_id: SteamID,
    /// The player's profile summary.
    pub profile: PlayerSummary,
    /// Derived account-wide stats.
    pub stats: ProfileStats,
    /// The player's most-played games, at most five, sorted by playtime
    /// descending.
    pub top_games: Vec<OwnedGame>,
    /// Games played over the last two weeks, at most five.
    pub recent_games: Vec<OwnedGame>,
}

/// Account-wide derived stats.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// The player's Steam level, `0` when not visible.
    pub level: u32,
    /// Total owned games.
    pub total_games: u32,
    /// Total minutes played across all owned games.
    pub total_playtime: u64,
    /// Total badges earned.
    pub total_badges: u32,
    /// Badges tied to a specific app, counted as game-completion badges.
    pub perfect_games: u32,
}

/// Badge details combined with the player's Steam level.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PlayerBadges {
    pub badges: BadgesBody,
    pub level: u32,
}
