mod builder;
pub mod response;

pub use builder::SteamWebAPIBuilder;

use async_trait::async_trait;
use serde::Serialize;
use steamid_ng::SteamID;
use crate::{
    error::Error,
    helpers::{get_default_middleware, parses_response, USER_AGENT_STRING},
    serializers::steamid_as_string,
    types::{AppId, HttpClient},
};
use response::{
    AchievementsBody,
    BadgesBody,
    BadgesResponse,
    OwnedGamesResponse,
    PlayerAchievementsResponse,
    PlayerSummariesBody,
    PlayerSummariesResponse,
    RecentlyPlayedBody,
    RecentlyPlayedResponse,
    SteamLevelResponse,
    UserStatsBody,
    UserStatsResponse,
    VanityUrlBody,
    VanityUrlResponse,
};

const API_HOSTNAME: &str = "https://api.steampowered.com";

/// The Steam Web API endpoints this crate aggregates over.
///
/// Envelope shapes are pattern-matched by the caller; methods unwrap only the
/// layers whose absence carries no meaning. Implemented by [`SteamWebAPI`] for
/// real requests and by test doubles for canned responses.
#[async_trait]
pub trait SteamApi: Send + Sync {
    /// Resolves a vanity name to a SteamID64.
    async fn resolve_vanity_url(&self, vanity: &str) -> Result<VanityUrlBody, Error>;

    /// Gets profile summaries for the given player.
    async fn get_player_summaries(&self, steamid: &SteamID) -> Result<PlayerSummariesBody, Error>;

    /// Gets the player's owned games, optionally filtered to a single app.
    ///
    /// The envelope is returned as-is since its absence signals privacy.
    async fn get_owned_games(
        &self,
        steamid: &SteamID,
        filter_appid: Option<AppId>,
    ) -> Result<OwnedGamesResponse, Error>;

    /// Gets the player's badges. Hidden badges come back as an empty list.
    async fn get_badges(&self, steamid: &SteamID) -> Result<BadgesBody, Error>;

    /// Gets the player's Steam level, `0` when not visible.
    async fn get_steam_level(&self, steamid: &SteamID) -> Result<u32, Error>;

    /// Gets up to `count` games played over the last two weeks.
    async fn get_recently_played_games(
        &self,
        steamid: &SteamID,
        count: u32,
    ) -> Result<RecentlyPlayedBody, Error>;

    /// Gets the player's stats for a game. Fails when the stats are not
    /// accessible, including plain HTTP errors from Steam.
    async fn get_user_stats_for_game(
        &self,
        steamid: &SteamID,
        appid: AppId,
    ) -> Result<UserStatsBody, Error>;

    /// Gets the player's achievements for a game.
    async fn get_player_achievements(
        &self,
        steamid: &SteamID,
        appid: AppId,
    ) -> Result<AchievementsBody, Error>;
}

/// Client for the Steam Web API, keyed by an API credential.
#[derive(Debug)]
pub struct SteamWebAPI {
    client: HttpClient,
    /// Your account's API key from <https://steamcommunity.com/dev/apikey>.
    pub key: String,
}

impl SteamWebAPI {
    /// Creates a new [`SteamWebAPI`] with the default middleware client.
    pub fn new(key: String) -> Self {
        Self {
            client: get_default_middleware(USER_AGENT_STRING),
            key,
        }
    }

    /// Builder for configuring a [`SteamWebAPI`].
    pub fn builder() -> SteamWebAPIBuilder {
        SteamWebAPIBuilder::new()
    }

    fn get_api_url(
        &self,
        interface: &str,
        method: &str,
        version: usize,
    ) -> String {
        format!("{}/{}/{}/v{}", API_HOSTNAME, interface, method, version)
    }
}

#[derive(Serialize, Debug)]
struct SteamIdForm<'a> {
    key: &'a str,
    #[serde(serialize_with = "steamid_as_string")]
    steamid: &'a SteamID,
}

#[async_trait]
impl SteamApi for SteamWebAPI {
    async fn resolve_vanity_url(&self, vanity: &str) -> Result<VanityUrlBody, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            vanityurl: &'a str,
        }

        let uri = self.get_api_url("ISteamUser", "ResolveVanityURL", 1);
        let response = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                vanityurl: vanity,
            })
            .send()
            .await?;
        let body: VanityUrlResponse = parses_response(response).await?;

        Ok(body.response)
    }

    async fn get_player_summaries(&self, steamid: &SteamID) -> Result<PlayerSummariesBody, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            #[serde(serialize_with = "steamid_as_string")]
            steamids: &'a SteamID,
        }

        let uri = self.get_api_url("ISteamUser", "GetPlayerSummaries", 2);
        let response = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                steamids: steamid,
            })
            .send()
            .await?;
        let body: PlayerSummariesResponse = parses_response(response).await?;

        Ok(body.response)
    }

    async fn get_owned_games(
        &self,
        steamid: &SteamID,
        filter_appid: Option<AppId>,
    ) -> Result<OwnedGamesResponse, Error> {
        let query = {
            let mut query = vec![
                ("key".to_string(), self.key.clone()),
                ("steamid".to_string(), u64::from(steamid.clone()).to_string()),
                ("include_appinfo".to_string(), "1".to_string()),
                ("include_played_free_games".to_string(), "1".to_string()),
            ];

            if let Some(appid) = filter_appid {
                query.push(("appids_filter[0]".to_string(), appid.to_string()));
            }

            query
        };
        let uri = self.get_api_url("IPlayerService", "GetOwnedGames", 1);
        let response = self.client.get(&uri)
            .query(&query)
            .send()
            .await?;
        let body: OwnedGamesResponse = parses_response(response).await?;

        Ok(body)
    }

    async fn get_badges(&self, steamid: &SteamID) -> Result<BadgesBody, Error> {
        let uri = self.get_api_url("IPlayerService", "GetBadges", 1);
        let response = self.client.get(&uri)
            .query(&SteamIdForm {
                key: &self.key,
                steamid,
            })
            .send()
            .await?;
        let body: BadgesResponse = parses_response(response).await?;

        Ok(body.response.unwrap_or_default())
    }

    async fn get_steam_level(&self, steamid: &SteamID) -> Result<u32, Error> {
        let uri = self.get_api_url("IPlayerService", "GetSteamLevel", 1);
        let response = self.client.get(&uri)
            .query(&SteamIdForm {
                key: &self.key,
                steamid,
            })
            .send()
            .await?;
        let body: SteamLevelResponse = parses_response(response).await?;
        let level = body.response
            .and_then(|body| body.player_level)
            .unwrap_or(0);

        Ok(level)
    }

    async fn get_recently_played_games(
        &self,
        steamid: &SteamID,
        count: u32,
    ) -> Result<RecentlyPlayedBody, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            #[serde(serialize_with = "steamid_as_string")]
            steamid: &'a SteamID,
            count: u32,
        }

        let uri = self.get_api_url("IPlayerService", "GetRecentlyPlayedGames", 1);
        let response = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                steamid,
                count,
            })
            .send()
            .await?;
        let body: RecentlyPlayedResponse = parses_response(response).await?;

        Ok(body.response.unwrap_or_default())
    }

    async fn get_user_stats_for_game(
        &self,
        steamid: &SteamID,
        appid: AppId,
    ) -> Result<UserStatsBody, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            #[serde(serialize_with = "steamid_as_string")]
            steamid: &'a SteamID,
            appid: AppId,
        }

        let uri = self.get_api_url("ISteamUserStats", "GetUserStatsForGame", 2);
        let response = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                steamid,
                appid,
            })
            .send()
            .await?;
        let body: UserStatsResponse = parses_response(response).await?;
        let body = body.playerstats
            .ok_or_else(|| Error::Response("Missing playerstats in response".into()))?;

        Ok(body)
    }

    async fn get_player_achievements(
        &self,
        steamid: &SteamID,
        appid: AppId,
    ) -> Result<AchievementsBody, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            #[serde(serialize_with = "steamid_as_string")]
            steamid: &'a SteamID,
            appid: AppId,
        }

        let uri = self.get_api_url("ISteamUserStats", "GetPlayerAchievements", 1);
        let response = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                steamid,
                appid,
            })
            .send()
            .await?;
        let body: PlayerAchievementsResponse = parses_response(response).await?;
        let body = body.playerstats
            .ok_or_else(|| Error::Response("Missing playerstats in response".into()))?;

        Ok(body)
    }
}
