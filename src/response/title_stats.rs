use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use crate::types::AppId;

/// Outcome of a per-title stats lookup.
///
/// Privacy and ownership conditions are successful responses, not errors, so
/// a client can render a specific explanation instead of a generic failure.
/// The `status` tag discriminates the variants on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TitleStats {
    /// The profile or its game details are not publicly visible.
    PrivacyRestricted {
        reason: String,
    },
    /// The title does not appear in the player's library. This is ambiguous:
    /// the title may be unowned, or game details may be private.
    NotOwned {
        reason: String,
    },
    /// The title is owned but its stats are hidden or unavailable.
    StatsPrivate {
        reason: String,
        /// Total minutes played on record.
        playtime: u32,
    },
    /// Stats were fetched successfully.
    Available(TitleStatsAvailable),
}

/// The full stats payload for an owned title with visible stats.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TitleStatsAvailable {
    /// The title's display name.
    pub game_name: String,
    /// The title's app ID.
    pub app_id: AppId,
    /// Total minutes played on record.
    pub playtime: u32,
    /// Achievement completion for this title.
    pub achievements: AchievementProgress,
    /// Projected stat values, keyed by stat name.
    pub stats: BTreeMap<String, Number>,
    /// Labels and formats for the projected stats, so a renderer needs no
    /// second lookup.
    pub stat_definitions: BTreeMap<String, StatDefinition>,
}

/// Achievement completion counts for a title.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct AchievementProgress {
    /// How many achievements the title has.
    pub total: u32,
    /// How many the player has unlocked.
    pub achieved: u32,
    /// Percentage unlocked, rounded to one decimal. `0` when the title has no
    /// achievements.
    pub percentage: f64,
}

/// Display metadata for a single projected stat.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatDefinition {
    pub label: String,
    pub format: StatFormat,
}

/// How a stat value should be rendered.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatFormat {
    /// A plain count.
    Number,
    /// A duration in seconds.
    Time,
    /// A ratio with two decimals.
    Decimal,
    /// A percentage with one decimal.
    Percentage,
}
