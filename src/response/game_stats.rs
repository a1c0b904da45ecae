use serde::{Deserialize, Serialize};
use crate::api::response::{AchievementsBody, UserStatsBody};

/// Raw stats and achievements for an arbitrary app, passed through without
/// projection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GameStats {
    /// Set when stats could not be fetched for this app at all.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The player's stats for the app.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserStatsBody>,
    /// The player's achievements for the app. Fetched best-effort.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<AchievementsBody>,
}
