use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;
use super::error::ApiError;
use super::AppState;
use crate::error::Error;
use crate::helpers::parse_steam_id;
use crate::response::{
    GameStats,
    OwnedGamesBody,
    PlayerAggregate,
    PlayerBadges,
    PlayerSummary,
    RecentlyPlayedBody,
    TitleStats,
};
use crate::serializers::steamid_as_string;
use crate::titles::SupportedTitle;
use crate::types::AppId;

#[derive(Deserialize, Debug)]
pub struct ResolveRequest {
    #[serde(default)]
    pub identifier: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    #[serde(serialize_with = "steamid_as_string")]
    pub steam_id: SteamID,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    #[serde(default)]
    pub steam_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GameStatsQuery {
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub app_id: Option<AppId>,
}

fn require_steam_id(value: &Option<String>) -> Result<SteamID, ApiError> {
    let value = value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(Error::Parameter("Steam ID required"))?;
    let steamid = parse_steam_id(value)?;

    Ok(steamid)
}

pub async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let identifier = request.identifier.unwrap_or_default();
    let steam_id = state.manager.resolve_steam_id(&identifier).await?;

    Ok(Json(ResolveResponse {
        steam_id,
    }))
}

pub async fn player(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<PlayerAggregate>, ApiError> {
    let steamid = require_steam_id(&query.steam_id)?;
    let aggregate = state.manager.get_player_aggregate(&steamid).await?;

    Ok(Json(aggregate))
}

pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<PlayerSummary>, ApiError> {
    let steamid = require_steam_id(&query.steam_id)?;
    let summary = state.manager.get_player_summary(&steamid).await?;

    Ok(Json(summary))
}

pub async fn owned_games(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<OwnedGamesBody>, ApiError> {
    let steamid = require_steam_id(&query.steam_id)?;
    let games = state.manager.get_owned_games_summary(&steamid).await?;

    Ok(Json(games))
}

pub async fn badges(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<PlayerBadges>, ApiError> {
    let steamid = require_steam_id(&query.steam_id)?;
    let badges = state.manager.get_player_badges(&steamid).await?;

    Ok(Json(badges))
}

pub async fn recently_played(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<RecentlyPlayedBody>, ApiError> {
    let steamid = require_steam_id(&query.steam_id)?;
    let recent = state.manager.get_recently_played(&steamid).await?;

    Ok(Json(recent))
}

pub async fn game_stats(
    State(state): State<AppState>,
    Query(query): Query<GameStatsQuery>,
) -> Result<Json<GameStats>, ApiError> {
    let steamid = require_steam_id(&query.steam_id)?;
    let appid = query.app_id
        .ok_or(Error::Parameter("App ID required"))?;
    let stats = state.manager.get_game_stats(&steamid, appid).await?;

    Ok(Json(stats))
}

async fn title_stats(
    state: AppState,
    query: PlayerQuery,
    title: SupportedTitle,
) -> Result<Json<TitleStats>, ApiError> {
    let steamid = require_steam_id(&query.steam_id)?;
    let stats = state.manager.get_title_stats(&steamid, title).await?;

    Ok(Json(stats))
}

pub async fn cs2_stats(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<TitleStats>, ApiError> {
    title_stats(state, query, SupportedTitle::Cs2).await
}

pub async fn dota2_stats(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<TitleStats>, ApiError> {
    title_stats(state, query, SupportedTitle::Dota2).await
}

pub async fn tf2_stats(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<TitleStats>, ApiError> {
    title_stats(state, query, SupportedTitle::Tf2).await
}

pub async fn l4d2_stats(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<TitleStats>, ApiError> {
    title_stats(state, query, SupportedTitle::L4d2).await
}

pub async fn portal2_stats(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<TitleStats>, ApiError> {
    title_stats(state, query, SupportedTitle::Portal2).await
}
