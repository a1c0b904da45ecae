use std::collections::{BTreeMap, HashMap};
use serde_json::Number;
use crate::api::response::{OwnedGame, OwnedGamesResponse, PlayerAchievement, StatValue};
use crate::helpers::round_to;
use crate::response::AchievementProgress;
use crate::titles::StatSpec;

pub(crate) const TOP_GAMES_COUNT: usize = 5;
pub(crate) const RECENT_GAMES_COUNT: u32 = 5;

/// Classification of an owned-games probe filtered to a single app.
#[derive(Debug)]
pub(crate) enum Ownership {
    /// No envelope at all: the profile itself is private.
    ProfilePrivate,
    /// An empty envelope: the profile is visible but game details are not.
    DetailsPrivate,
    /// No game entry came back. Either the title is unowned or game details
    /// are private; upstream does not say which.
    NotOwned,
    /// The single matching library entry.
    Owned(OwnedGame),
}

pub(crate) fn classify_owned_games(envelope: OwnedGamesResponse) -> Ownership {
    let body = match envelope.response {
        Some(body) => body,
        None => return Ownership::ProfilePrivate,
    };

    if body.game_count.is_none() && body.games.is_none() {
        return Ownership::DetailsPrivate;
    }

    match body.games.and_then(|games| games.into_iter().next()) {
        Some(game) => Ownership::Owned(game),
        None => Ownership::NotOwned,
    }
}

pub(crate) fn top_games(mut games: Vec<OwnedGame>) -> Vec<OwnedGame> {
    // stable sort keeps the upstream order for equal playtimes
    games.sort_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever));
    games.truncate(TOP_GAMES_COUNT);

    games
}

pub(crate) fn flatten_stats(stats: Vec<StatValue>) -> HashMap<String, f64> {
    stats
        .into_iter()
        .map(|stat| (stat.name, stat.value))
        .collect()
}

pub(crate) fn achievement_progress(achievements: &[PlayerAchievement]) -> AchievementProgress {
    let total = achievements.len() as u32;
    let achieved = achievements
        .iter()
        .filter(|achievement| achievement.achieved == 1)
        .count() as u32;
    let percentage = if total > 0 {
        round_to(achieved as f64 / total as f64 * 100.0, 1)
    } else {
        0.0
    };

    AchievementProgress {
        total,
        achieved,
        percentage,
    }
}

fn stat_number(value: f64) -> Number {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}

/// Projects the flattened upstream stats through a title's allow-list.
/// Keys missing upstream come back as `0`; nothing outside the table passes
/// through.
pub(crate) fn projected_stat_values(
    table: &[StatSpec],
    flat: &HashMap<String, f64>,
) -> BTreeMap<String, Number> {
    table
        .iter()
        .map(|spec| {
            let value = flat.get(spec.key).copied().unwrap_or(0.0);

            (spec.key.to_string(), stat_number(value))
        })
        .collect()
}

/// The CS2 projection: raw counters plus derived ratios.
///
/// `kd_ratio` falls back to the raw kill count when there are no deaths,
/// matching long-standing behavior rather than reporting `0`.
pub(crate) fn cs2_stat_values(flat: &HashMap<String, f64>) -> BTreeMap<String, Number> {
    let stat = |key: &str| flat.get(key).copied().unwrap_or(0.0);
    let kills = stat("total_kills");
    let deaths = stat("total_deaths");
    let headshots = stat("total_kills_headshot");
    let shots_fired = stat("total_shots_fired");
    let shots_hit = stat("total_shots_hit");
    let wins = match flat.get("total_wins_comp") {
        Some(wins) => *wins,
        None => stat("total_wins"),
    };
    let kd_ratio = if deaths > 0.0 {
        round_to(kills / deaths, 2)
    } else {
        kills
    };
    let headshot_percentage = if kills > 0.0 {
        round_to(headshots / kills * 100.0, 1)
    } else {
        0.0
    };
    let accuracy = if shots_fired > 0.0 {
        round_to(shots_hit / shots_fired * 100.0, 1)
    } else {
        0.0
    };

    [
        ("total_kills", kills),
        ("total_deaths", deaths),
        ("total_wins", wins),
        ("total_matches_played", stat("total_matches_played")),
        ("total_rounds_played", stat("total_rounds_played")),
        ("total_mvps", stat("total_mvps")),
        ("total_damage_done", stat("total_damage_done")),
        ("total_headshots", headshots),
        ("total_shots_fired", shots_fired),
        ("total_shots_hit", shots_hit),
        ("kd_ratio", kd_ratio),
        ("headshot_percentage", headshot_percentage),
        ("accuracy", accuracy),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), stat_number(value)))
    .collect()
}
