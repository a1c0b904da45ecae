//! Models for Steam Web API response envelopes.
//!
//! The presence or absence of the top-level envelope is meaningful for some
//! endpoints (notably GetOwnedGames, where it signals profile privacy), so
//! wrappers keep the envelope as an `Option` rather than flattening it away.

use serde::{Deserialize, Serialize};
use chrono::serde::ts_seconds_option;
use crate::types::{AppId, ServerTime};

/// Envelope for a ResolveVanityURL response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VanityUrlResponse {
    pub response: VanityUrlBody,
}

/// Result of resolving a vanity name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VanityUrlBody {
    /// `1` when the vanity name resolved, `42` when there was no match.
    pub success: u8,
    /// The resolved SteamID64 as a string. Present only on success.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steamid: Option<String>,
    /// A failure message, e.g. "No match".
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for a GetPlayerSummaries response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSummariesResponse {
    pub response: PlayerSummariesBody,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PlayerSummariesBody {
    /// The requested players. Empty when no profile matches the given ID.
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// Public profile details for a single player.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSummary {
    /// The player's SteamID64 as a string.
    pub steamid: String,
    /// The player's display name.
    pub personaname: String,
    /// The full URL of the player's community profile.
    pub profileurl: String,
    /// The full URL of the player's 32x32px avatar.
    pub avatar: String,
    /// The full URL of the player's 64x64px avatar.
    pub avatarmedium: String,
    /// The full URL of the player's 184x184px avatar.
    pub avatarfull: String,
    /// The player's current status. Only present when the profile is public.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personastate: Option<u32>,
    /// The visibility of this profile. `3` means public.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communityvisibilitystate: Option<u32>,
    /// The player's real name, if set and visible.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    /// The player's country of residence (ISO 3166 code).
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loccountrycode: Option<String>,
    /// The time the account was created. Only visible on public profiles.
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecreated: Option<ServerTime>,
    /// The last time the player was online.
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastlogoff: Option<ServerTime>,
    /// The name of the game the player is currently playing, if any.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gameextrainfo: Option<String>,
}

/// Envelope for a GetOwnedGames response.
///
/// The envelope is absent entirely when the profile is private, and present
/// but empty when only the profile's game details are private.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct OwnedGamesResponse {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<OwnedGamesBody>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct OwnedGamesBody {
    /// The total number of owned games.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_count: Option<u32>,
    /// The owned games, filtered when the request named specific app IDs.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games: Option<Vec<OwnedGame>>,
}

/// A single game entry from GetOwnedGames or GetRecentlyPlayedGames.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OwnedGame {
    /// The app ID e.g. 570 for Dota 2 or 730 for Counter-Strike 2.
    pub appid: AppId,
    /// The game's display name. Present when app info was requested.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Total minutes played on record.
    #[serde(default)]
    pub playtime_forever: u32,
    /// Minutes played over the last two weeks.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime_2weeks: Option<u32>,
    /// Hash for the game's icon image.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
}

/// Envelope for a GetBadges response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BadgesResponse {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<BadgesBody>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BadgesBody {
    /// The player's badges. Empty when the profile hides them.
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// The player's current experience points.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_xp: Option<u32>,
    /// The player's Steam level.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_level: Option<u32>,
    /// Experience points needed to reach the next level.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_xp_needed_to_level_up: Option<u32>,
}

/// A single badge entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Badge {
    /// The badge's ID within its category.
    pub badgeid: u32,
    /// The app this badge belongs to. Present only for game-specific badges.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appid: Option<AppId>,
    /// The badge's level.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// The time the badge was completed.
    #[serde(default)]
    #[serde(with = "ts_seconds_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<ServerTime>,
    /// Experience points this badge grants.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,
    /// How many players own this badge.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scarcity: Option<u64>,
}

/// Envelope for a GetSteamLevel response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SteamLevelResponse {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SteamLevelBody>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SteamLevelBody {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_level: Option<u32>,
}

/// Envelope for a GetRecentlyPlayedGames response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RecentlyPlayedResponse {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<RecentlyPlayedBody>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RecentlyPlayedBody {
    /// How many games were played in the last two weeks.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    /// The most recently played games, most recent first.
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

/// Envelope for a GetUserStatsForGame response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct UserStatsResponse {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playerstats: Option<UserStatsBody>,
}

/// Per-game stats for a single player.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct UserStatsBody {
    /// The player's SteamID64 as a string.
    #[serde(default, rename = "steamID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_id: Option<String>,
    /// The game's display name.
    #[serde(default, rename = "gameName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    /// The stat entries. Absent when the player's game stats are not public.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<StatValue>>,
    /// Achievement flags, where present in this envelope.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<AchievedFlag>>,
}

/// A single named stat value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatValue {
    pub name: String,
    pub value: f64,
}

/// An achievement flag from GetUserStatsForGame.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AchievedFlag {
    pub name: String,
    /// `1` when unlocked.
    pub achieved: u8,
}

/// Envelope for a GetPlayerAchievements response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PlayerAchievementsResponse {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playerstats: Option<AchievementsBody>,
}

/// Per-game achievements for a single player.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AchievementsBody {
    /// The game's display name.
    #[serde(default, rename = "gameName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    /// The game's achievements with the player's unlock state.
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,
    /// Whether the request succeeded.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// A failure message, e.g. "Profile is not public".
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single achievement with the player's unlock state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerAchievement {
    /// The achievement's API name.
    pub apiname: String,
    /// `1` when unlocked.
    pub achieved: u8,
    /// Unix timestamp of when the achievement was unlocked, `0` when locked.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocktime: Option<u64>,
}
