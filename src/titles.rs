use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};
use crate::response::{StatDefinition, StatFormat};
use crate::types::AppId;

/// Titles with a dedicated stats endpoint.
#[derive(Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum SupportedTitle {
    Cs2,
    Dota2,
    Tf2,
    L4d2,
    Portal2,
}

/// A stat key exposed for a title, with its display metadata.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub format: StatFormat,
}

const fn stat(key: &'static str, label: &'static str, format: StatFormat) -> StatSpec {
    StatSpec { key, label, format }
}

// CS2 exposes raw counters plus ratios derived from them.
const CS2_STATS: &[StatSpec] = &[
    stat("total_kills", "Total Kills", StatFormat::Number),
    stat("total_deaths", "Total Deaths", StatFormat::Number),
    stat("total_wins", "Total Wins", StatFormat::Number),
    stat("total_matches_played", "Matches Played", StatFormat::Number),
    stat("total_rounds_played", "Rounds Played", StatFormat::Number),
    stat("total_mvps", "MVPs", StatFormat::Number),
    stat("total_damage_done", "Damage Done", StatFormat::Number),
    stat("total_headshots", "Headshots", StatFormat::Number),
    stat("total_shots_fired", "Shots Fired", StatFormat::Number),
    stat("total_shots_hit", "Shots Hit", StatFormat::Number),
    stat("kd_ratio", "K/D Ratio", StatFormat::Decimal),
    stat("headshot_percentage", "Headshot %", StatFormat::Percentage),
    stat("accuracy", "Accuracy", StatFormat::Percentage),
];

const DOTA2_STATS: &[StatSpec] = &[
    stat("total_kills", "Total Kills", StatFormat::Number),
    stat("total_deaths", "Total Deaths", StatFormat::Number),
    stat("total_assists", "Total Assists", StatFormat::Number),
    stat("total_wins", "Total Wins", StatFormat::Number),
    stat("total_matches_played", "Matches Played", StatFormat::Number),
];

const TF2_STATS: &[StatSpec] = &[
    stat("iNumberOfKills", "Total Kills", StatFormat::Number),
    stat("iNumberOfDeaths", "Total Deaths", StatFormat::Number),
    stat("iDamageDealt", "Damage Dealt", StatFormat::Number),
    stat("iPlayTime", "Play Time (seconds)", StatFormat::Time),
    stat("iPointsScored", "Points Scored", StatFormat::Number),
    stat("iDominationsCount", "Dominations", StatFormat::Number),
];

const L4D2_STATS: &[StatSpec] = &[
    stat("NumKills", "Total Kills", StatFormat::Number),
    stat("NumHeadshots", "Headshots", StatFormat::Number),
    stat("NumMeleeKills", "Melee Kills", StatFormat::Number),
    stat("NumRevives", "Revives", StatFormat::Number),
    stat("NumCampaignsCompleted", "Campaigns Completed", StatFormat::Number),
];

const PORTAL2_STATS: &[StatSpec] = &[
    stat("NumPortalsPlaced", "Portals Placed", StatFormat::Number),
    stat("NumStepsTaken", "Steps Taken", StatFormat::Number),
    stat("NumSecondsToCompleteGame", "Time to Complete", StatFormat::Time),
    stat("NumGamesCompleted", "Games Completed", StatFormat::Number),
];

impl SupportedTitle {
    /// The title's app ID.
    pub fn app_id(&self) -> AppId {
        match self {
            Self::Cs2 => 730,
            Self::Dota2 => 570,
            Self::Tf2 => 440,
            Self::L4d2 => 550,
            Self::Portal2 => 620,
        }
    }

    /// The title's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cs2 => "Counter-Strike 2",
            Self::Dota2 => "Dota 2",
            Self::Tf2 => "Team Fortress 2",
            Self::L4d2 => "Left 4 Dead 2",
            Self::Portal2 => "Portal 2",
        }
    }

    pub(crate) fn stat_table(&self) -> &'static [StatSpec] {
        match self {
            Self::Cs2 => CS2_STATS,
            Self::Dota2 => DOTA2_STATS,
            Self::Tf2 => TF2_STATS,
            Self::L4d2 => L4D2_STATS,
            Self::Portal2 => PORTAL2_STATS,
        }
    }

    /// Display metadata for every stat this title exposes.
    pub fn stat_definitions(&self) -> BTreeMap<String, StatDefinition> {
        self.stat_table()
            .iter()
            .map(|spec| {
                (spec.key.to_string(), StatDefinition {
                    label: spec.label.to_string(),
                    format: spec.format,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn app_ids_match_steam() {
        assert_eq!(SupportedTitle::Cs2.app_id(), 730);
        assert_eq!(SupportedTitle::Dota2.app_id(), 570);
        assert_eq!(SupportedTitle::Tf2.app_id(), 440);
        assert_eq!(SupportedTitle::L4d2.app_id(), 550);
        assert_eq!(SupportedTitle::Portal2.app_id(), 620);
    }

    #[test]
    fn every_title_exposes_stats() {
        for title in SupportedTitle::iter() {
            assert!(!title.stat_table().is_empty());
            assert!(!title.name().is_empty());
        }
    }

    #[test]
    fn parses_from_route_names() {
        assert_eq!(SupportedTitle::from_str("cs2").unwrap(), SupportedTitle::Cs2);
        assert_eq!(SupportedTitle::from_str("l4d2").unwrap(), SupportedTitle::L4d2);
        assert!(SupportedTitle::from_str("hl3").is_err());
    }

    #[test]
    fn definitions_cover_the_stat_table() {
        let definitions = SupportedTitle::Tf2.stat_definitions();

        assert_eq!(definitions.len(), SupportedTitle::Tf2.stat_table().len());
        assert_eq!(definitions["iPlayTime"].format, StatFormat::Time);
        assert_eq!(definitions["iNumberOfKills"].label, "Total Kills");
    }
}
