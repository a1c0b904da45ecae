use std::sync::Arc;
use lazy_regex::regex_is_match;
use steamid_ng::SteamID;
use super::builder::ProfileManagerBuilder;
use super::helpers::{
    achievement_progress,
    classify_owned_games,
    cs2_stat_values,
    flatten_stats,
    projected_stat_values,
    top_games,
    Ownership,
    RECENT_GAMES_COUNT,
};
use crate::{
    api::SteamApi,
    api::response::{OwnedGamesBody, PlayerSummary, RecentlyPlayedBody},
    cache::ResponseCache,
    error::Error,
    helpers::parse_steam_id,
    response::{
        GameStats,
        PlayerAggregate,
        PlayerBadges,
        ProfileStats,
        TitleStats,
        TitleStatsAvailable,
    },
    titles::SupportedTitle,
    types::AppId,
};

const PROFILE_PRIVATE_MESSAGE: &str = "Game library is private. Please set \"Game details\" to Public in Steam Privacy Settings.";
const DETAILS_PRIVATE_MESSAGE: &str = "Game library is private. Your profile may be public, but \"Game details\" must also be set to Public in Privacy Settings.";
const STATS_PRIVATE_MESSAGE: &str = "Game stats are private or not available";

/// Resolves player identifiers and aggregates Steam profile data for the
/// comparison endpoints.
///
/// Stateless aside from a short-lived response cache; cheap to share behind an
/// [`Arc`] across request handlers.
pub struct ProfileManager {
    // manager facades api
    pub(super) api: Arc<dyn SteamApi>,
    pub(super) cache: ResponseCache,
}

impl ProfileManager {
    /// Creates a new [`ProfileManager`] with default settings.
    pub fn new<T>(api_key: T) -> Self
    where
        T: Into<String>,
    {
        Self::builder(api_key).build()
    }

    /// Builder for configuring a [`ProfileManager`].
    pub fn builder<T>(api_key: T) -> ProfileManagerBuilder
    where
        T: Into<String>,
    {
        ProfileManagerBuilder::new(api_key)
    }

    /// Resolves a raw identifier to a canonical [`SteamID`].
    ///
    /// A 17-digit numeric identifier is returned as-is without an upstream
    /// call; anything else is treated as a vanity name.
    pub async fn resolve_steam_id(&self, identifier: &str) -> Result<SteamID, Error> {
        let identifier = identifier.trim();

        if identifier.is_empty() {
            return Err(Error::Parameter("Identifier is required"));
        }

        if regex_is_match!(r"^[0-9]{17}$", identifier) {
            return parse_steam_id(identifier);
        }

        let body = self.api.resolve_vanity_url(identifier).await?;

        match (body.success, body.steamid) {
            (1, Some(steamid)) => parse_steam_id(&steamid),
            _ => Err(Error::NotFound("Steam ID not found".into())),
        }
    }

    /// Assembles the full comparison payload for one player.
    ///
    /// Issues five independent upstream calls concurrently. Not cached: the
    /// per-field endpoints cache individually, and this endpoint recomputes
    /// each call fresh.
    pub async fn get_player_aggregate(&self, steamid: &SteamID) -> Result<PlayerAggregate, Error> {
        let (summaries, owned_games, badges, level, recently_played) = futures::try_join!(
            self.api.get_player_summaries(steamid),
            self.api.get_owned_games(steamid, None),
            self.api.get_badges(steamid),
            self.api.get_steam_level(steamid),
            self.api.get_recently_played_games(steamid, RECENT_GAMES_COUNT),
        )?;
        let profile = summaries.players
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound("Player not found".into()))?;
        // a private library degrades to zero games here, unlike the per-title
        // path which reports the privacy condition
        let games_body = owned_games.response.unwrap_or_default();
        let total_games = games_body.game_count.unwrap_or(0);
        let games = games_body.games.unwrap_or_default();
        let total_playtime = games
            .iter()
            .map(|game| game.playtime_forever as u64)
            .sum();
        let perfect_games = badges.badges
            .iter()
            .filter(|badge| badge.appid.map_or(false, |appid| appid > 0))
            .count() as u32;

        Ok(PlayerAggregate {
            steam_id: steamid.clone(),
            profile,
            stats: ProfileStats {
                level,
                total_games,
                total_playtime,
                total_badges: badges.badges.len() as u32,
                perfect_games,
            },
            top_games: top_games(games),
            recent_games: recently_played.games,
        })
    }

    /// Gets the player's profile summary, cached.
    pub async fn get_player_summary(&self, steamid: &SteamID) -> Result<PlayerSummary, Error> {
        let key = player_key("summary", steamid);

        if let Some(summary) = self.cache.get(&key) {
            return Ok(summary);
        }

        let body = self.api.get_player_summaries(steamid).await?;
        let summary = body.players
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound("Player not found".into()))?;

        self.cache.insert(&key, &summary)?;

        Ok(summary)
    }

    /// Gets the player's owned games with counts and playtimes, cached.
    pub async fn get_owned_games_summary(&self, steamid: &SteamID) -> Result<OwnedGamesBody, Error> {
        let key = player_key("games", steamid);

        if let Some(games) = self.cache.get(&key) {
            return Ok(games);
        }

        let envelope = self.api.get_owned_games(steamid, None).await?;
        let body = envelope.response
            .ok_or_else(|| Error::NotFound("Games data not available".into()))?;

        self.cache.insert(&key, &body)?;

        Ok(body)
    }

    /// Gets the player's badges and Steam level, cached.
    pub async fn get_player_badges(&self, steamid: &SteamID) -> Result<PlayerBadges, Error> {
        let key = player_key("badges", steamid);

        if let Some(badges) = self.cache.get(&key) {
            return Ok(badges);
        }

        let (badges, level) = futures::try_join!(
            self.api.get_badges(steamid),
            self.api.get_steam_level(steamid),
        )?;
        let badges = PlayerBadges {
            badges,
            level,
        };

        self.cache.insert(&key, &badges)?;

        Ok(badges)
    }

    /// Gets games played over the last two weeks, cached.
    pub async fn get_recently_played(&self, steamid: &SteamID) -> Result<RecentlyPlayedBody, Error> {
        let key = player_key("recent", steamid);

        if let Some(recent) = self.cache.get(&key) {
            return Ok(recent);
        }

        let body = self.api
            .get_recently_played_games(steamid, RECENT_GAMES_COUNT)
            .await?;

        self.cache.insert(&key, &body)?;

        Ok(body)
    }

    /// Gets the player's stats for a supported title, cached.
    ///
    /// Privacy and ownership conditions come back as [`TitleStats`] variants
    /// rather than errors; only transport and parsing failures on the
    /// ownership probe itself fail the call.
    pub async fn get_title_stats(
        &self,
        steamid: &SteamID,
        title: SupportedTitle,
    ) -> Result<TitleStats, Error> {
        let key = format!("title:{}:{}", title.app_id(), u64::from(steamid.clone()));

        if let Some(stats) = self.cache.get(&key) {
            log::debug!("{} stats served from cache", title);
            return Ok(stats);
        }

        let stats = self.fetch_title_stats(steamid, title).await?;

        self.cache.insert(&key, &stats)?;

        Ok(stats)
    }

    async fn fetch_title_stats(
        &self,
        steamid: &SteamID,
        title: SupportedTitle,
    ) -> Result<TitleStats, Error> {
        let appid = title.app_id();
        let envelope = self.api.get_owned_games(steamid, Some(appid)).await?;
        let game = match classify_owned_games(envelope) {
            Ownership::ProfilePrivate => {
                return Ok(TitleStats::PrivacyRestricted {
                    reason: PROFILE_PRIVATE_MESSAGE.into(),
                });
            },
            Ownership::DetailsPrivate => {
                return Ok(TitleStats::PrivacyRestricted {
                    reason: DETAILS_PRIVATE_MESSAGE.into(),
                });
            },
            Ownership::NotOwned => {
                return Ok(TitleStats::NotOwned {
                    reason: format!(
                        "Unable to access game library. Either {} is not owned or \"Game details\" are set to private.",
                        title.name(),
                    ),
                });
            },
            Ownership::Owned(game) => game,
        };
        let playtime = game.playtime_forever;
        let flat = match self.api.get_user_stats_for_game(steamid, appid).await {
            Ok(body) => match body.stats {
                Some(stats) => flatten_stats(stats),
                None => {
                    return Ok(TitleStats::StatsPrivate {
                        reason: STATS_PRIVATE_MESSAGE.into(),
                        playtime,
                    });
                },
            },
            Err(error) => {
                log::debug!("user stats unavailable for {}: {}", title, error);
                return Ok(TitleStats::StatsPrivate {
                    reason: STATS_PRIVATE_MESSAGE.into(),
                    playtime,
                });
            },
        };
        // best-effort: a failed achievements call degrades to zero rather
        // than failing the whole lookup
        let achievements = match self.api.get_player_achievements(steamid, appid).await {
            Ok(body) => achievement_progress(&body.achievements),
            Err(error) => {
                log::debug!("achievements unavailable for {}: {}", title, error);
                achievement_progress(&[])
            },
        };
        let stats = match title {
            SupportedTitle::Cs2 => cs2_stat_values(&flat),
            _ => projected_stat_values(title.stat_table(), &flat),
        };

        Ok(TitleStats::Available(TitleStatsAvailable {
            game_name: title.name().into(),
            app_id: appid,
            playtime,
            achievements,
            stats,
            stat_definitions: title.stat_definitions(),
        }))
    }

    /// Gets raw stats and achievements for an arbitrary app, cached.
    pub async fn get_game_stats(&self, steamid: &SteamID, appid: AppId) -> Result<GameStats, Error> {
        let key = format!("game:{}:{}", appid, u64::from(steamid.clone()));

        if let Some(stats) = self.cache.get(&key) {
            return Ok(stats);
        }

        let stats = match self.api.get_user_stats_for_game(steamid, appid).await {
            Ok(body) => {
                let achievements = match self.api.get_player_achievements(steamid, appid).await {
                    Ok(achievements) => Some(achievements),
                    Err(error) => {
                        log::debug!("achievements unavailable for app {}: {}", appid, error);
                        None
                    },
                };

                GameStats {
                    error: None,
                    stats: Some(body),
                    achievements,
                }
            },
            Err(error) => {
                log::debug!("stats unavailable for app {}: {}", appid, error);
                GameStats {
                    error: Some("Stats not available".into()),
                    stats: None,
                    achievements: None,
                }
            },
        };

        self.cache.insert(&key, &stats)?;

        Ok(stats)
    }
}

fn player_key(prefix: &str, steamid: &SteamID) -> String {
    format!("{}:{}", prefix, u64::from(steamid.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use async_trait::async_trait;
    use serde_json::Number;
    use crate::api::response::{
        AchievementsBody,
        Badge,
        BadgesBody,
        OwnedGame,
        OwnedGamesResponse,
        PlayerAchievement,
        PlayerSummariesBody,
        StatValue,
        UserStatsBody,
        VanityUrlBody,
    };

    const STEAM_ID: u64 = 76561197960287930;

    #[derive(Debug, Default)]
    struct CallCounts {
        vanity: AtomicUsize,
        summaries: AtomicUsize,
        owned_games: AtomicUsize,
        badges: AtomicUsize,
        level: AtomicUsize,
        recently_played: AtomicUsize,
        user_stats: AtomicUsize,
        achievements: AtomicUsize,
    }

    /// Canned upstream responses with per-method call counters. A `None`
    /// fixture for stats or achievements behaves as an upstream failure.
    #[derive(Debug, Default)]
    struct FakeSteamApi {
        vanity: Option<VanityUrlBody>,
        players: Vec<PlayerSummary>,
        owned_games: OwnedGamesResponse,
        badges: BadgesBody,
        level: u32,
        recently_played: RecentlyPlayedBody,
        user_stats: Option<UserStatsBody>,
        achievements: Option<AchievementsBody>,
        calls: CallCounts,
    }

    #[async_trait]
    impl SteamApi for FakeSteamApi {
        async fn resolve_vanity_url(&self, _vanity: &str) -> Result<VanityUrlBody, Error> {
            self.calls.vanity.fetch_add(1, Ordering::SeqCst);
            self.vanity.clone()
                .ok_or_else(|| Error::Response("no vanity fixture".into()))
        }

        async fn get_player_summaries(&self, _steamid: &SteamID) -> Result<PlayerSummariesBody, Error> {
            self.calls.summaries.fetch_add(1, Ordering::SeqCst);
            Ok(PlayerSummariesBody {
                players: self.players.clone(),
            })
        }

        async fn get_owned_games(
            &self,
            _steamid: &SteamID,
            _filter_appid: Option<AppId>,
        ) -> Result<OwnedGamesResponse, Error> {
            self.calls.owned_games.fetch_add(1, Ordering::SeqCst);
            Ok(self.owned_games.clone())
        }

        async fn get_badges(&self, _steamid: &SteamID) -> Result<BadgesBody, Error> {
            self.calls.badges.fetch_add(1, Ordering::SeqCst);
            Ok(self.badges.clone())
        }

        async fn get_steam_level(&self, _steamid: &SteamID) -> Result<u32, Error> {
            self.calls.level.fetch_add(1, Ordering::SeqCst);
            Ok(self.level)
        }

        async fn get_recently_played_games(
            &self,
            _steamid: &SteamID,
            _count: u32,
        ) -> Result<RecentlyPlayedBody, Error> {
            self.calls.recently_played.fetch_add(1, Ordering::SeqCst);
            Ok(self.recently_played.clone())
        }

        async fn get_user_stats_for_game(
            &self,
            _steamid: &SteamID,
            _appid: AppId,
        ) -> Result<UserStatsBody, Error> {
            self.calls.user_stats.fetch_add(1, Ordering::SeqCst);
            self.user_stats.clone()
                .ok_or(Error::Http(reqwest::StatusCode::FORBIDDEN))
        }

        async fn get_player_achievements(
            &self,
            _steamid: &SteamID,
            _appid: AppId,
        ) -> Result<AchievementsBody, Error> {
            self.calls.achievements.fetch_add(1, Ordering::SeqCst);
            self.achievements.clone()
                .ok_or(Error::Http(reqwest::StatusCode::FORBIDDEN))
        }
    }

    fn manager_with(api: Arc<FakeSteamApi>) -> ProfileManager {
        ProfileManager::builder("key").api(api).build()
    }

    fn steam_id() -> SteamID {
        SteamID::from(STEAM_ID)
    }

    fn summary(personaname: &str) -> PlayerSummary {
        PlayerSummary {
            steamid: STEAM_ID.to_string(),
            personaname: personaname.into(),
            profileurl: format!("https://steamcommunity.com/profiles/{}/", STEAM_ID),
            avatar: String::from("https://avatars.steamstatic.com/fe_small.jpg"),
            avatarmedium: String::from("https://avatars.steamstatic.com/fe_medium.jpg"),
            avatarfull: String::from("https://avatars.steamstatic.com/fe_full.jpg"),
            personastate: Some(1),
            communityvisibilitystate: Some(3),
            realname: None,
            loccountrycode: None,
            timecreated: None,
            lastlogoff: None,
            gameextrainfo: None,
        }
    }

    fn game(appid: AppId, playtime_forever: u32) -> OwnedGame {
        OwnedGame {
            appid,
            name: Some(format!("App {}", appid)),
            playtime_forever,
            playtime_2weeks: None,
            img_icon_url: None,
        }
    }

    fn owned(games: Vec<OwnedGame>) -> OwnedGamesResponse {
        OwnedGamesResponse {
            response: Some(OwnedGamesBody {
                game_count: Some(games.len() as u32),
                games: Some(games),
            }),
        }
    }

    fn stat(name: &str, value: f64) -> StatValue {
        StatValue {
            name: name.into(),
            value,
        }
    }

    fn achievement(apiname: &str, achieved: u8) -> PlayerAchievement {
        PlayerAchievement {
            apiname: apiname.into(),
            achieved,
            unlocktime: None,
        }
    }

    fn badge(appid: Option<AppId>) -> Badge {
        Badge {
            badgeid: 13,
            appid,
            level: Some(1),
            completion_time: None,
            xp: Some(100),
            scarcity: None,
        }
    }

    #[tokio::test]
    async fn resolve_returns_canonical_identifier_unchanged() {
        let api = Arc::new(FakeSteamApi::default());
        let manager = manager_with(Arc::clone(&api));
        let resolved = manager.resolve_steam_id("76561197960287930").await.unwrap();

        assert_eq!(u64::from(resolved), STEAM_ID);
        assert_eq!(api.calls.vanity.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn resolve_trims_surrounding_whitespace() {
        let api = Arc::new(FakeSteamApi::default());
        let manager = manager_with(Arc::clone(&api));
        let resolved = manager.resolve_steam_id(" 76561197960287930 ").await.unwrap();

        assert_eq!(u64::from(resolved), STEAM_ID);
        assert_eq!(api.calls.vanity.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn resolve_rejects_empty_identifier() {
        let manager = manager_with(Arc::new(FakeSteamApi::default()));

        assert!(matches!(
            manager.resolve_steam_id("").await,
            Err(Error::Parameter(_)),
        ));
        assert!(matches!(
            manager.resolve_steam_id("   ").await,
            Err(Error::Parameter(_)),
        ));
    }

    #[tokio::test]
    async fn resolve_looks_up_vanity_names() {
        let api = Arc::new(FakeSteamApi {
            vanity: Some(VanityUrlBody {
                success: 1,
                steamid: Some(STEAM_ID.to_string()),
                message: None,
            }),
            ..Default::default()
        });
        let manager = manager_with(Arc::clone(&api));
        let resolved = manager.resolve_steam_id("gabelogannewell").await.unwrap();

        assert_eq!(u64::from(resolved), STEAM_ID);
        assert_eq!(api.calls.vanity.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolve_unknown_vanity_is_not_found() {
        let api = Arc::new(FakeSteamApi {
            vanity: Some(VanityUrlBody {
                success: 42,
                steamid: None,
                message: Some(String::from("No match")),
            }),
            ..Default::default()
        });
        let manager = manager_with(api);

        assert!(matches!(
            manager.resolve_steam_id("nobody-here").await,
            Err(Error::NotFound(_)),
        ));
    }

    #[tokio::test]
    async fn resolve_never_returns_a_partial_identifier() {
        let api = Arc::new(FakeSteamApi {
            vanity: Some(VanityUrlBody {
                success: 1,
                steamid: Some(String::from("7656119796")),
                message: None,
            }),
            ..Default::default()
        });
        let manager = manager_with(api);

        assert!(manager.resolve_steam_id("truncated").await.is_err());
    }

    #[tokio::test]
    async fn aggregate_sums_playtime_and_ranks_top_games() {
        let api = Arc::new(FakeSteamApi {
            players: vec![summary("Gabe")],
            owned_games: owned(vec![
                game(10, 10),
                game(20, 300),
                game(30, 50),
                game(40, 300),
                game(50, 200),
                game(60, 100),
            ]),
            badges: BadgesBody {
                badges: vec![badge(Some(440)), badge(Some(0)), badge(None)],
                ..Default::default()
            },
            level: 42,
            recently_played: RecentlyPlayedBody {
                total_count: Some(2),
                games: vec![game(20, 300), game(50, 200)],
            },
            ..Default::default()
        });
        let manager = manager_with(api);
        let aggregate = manager.get_player_aggregate(&steam_id()).await.unwrap();
        let top_appids = aggregate.top_games
            .iter()
            .map(|game| game.appid)
            .collect::<Vec<_>>();

        assert_eq!(aggregate.profile.personaname, "Gabe");
        assert_eq!(aggregate.stats.level, 42);
        assert_eq!(aggregate.stats.total_games, 6);
        assert_eq!(aggregate.stats.total_playtime, 960);
        assert_eq!(aggregate.stats.total_badges, 3);
        // only the badge tied to a real app counts as a game completion
        assert_eq!(aggregate.stats.perfect_games, 1);
        // ties (20 and 40, both at 300) keep upstream order
        assert_eq!(top_appids, vec![20, 40, 50, 60, 30]);
        assert_eq!(aggregate.recent_games.len(), 2);
    }

    #[tokio::test]
    async fn aggregate_without_player_is_not_found() {
        let manager = manager_with(Arc::new(FakeSteamApi::default()));

        assert!(matches!(
            manager.get_player_aggregate(&steam_id()).await,
            Err(Error::NotFound(_)),
        ));
    }

    #[tokio::test]
    async fn aggregate_degrades_private_library_to_zero_games() {
        let api = Arc::new(FakeSteamApi {
            players: vec![summary("Gabe")],
            owned_games: OwnedGamesResponse { response: None },
            ..Default::default()
        });
        let manager = manager_with(api);
        let aggregate = manager.get_player_aggregate(&steam_id()).await.unwrap();

        assert_eq!(aggregate.stats.total_games, 0);
        assert_eq!(aggregate.stats.total_playtime, 0);
        assert!(aggregate.top_games.is_empty());
    }

    #[tokio::test]
    async fn aggregate_recomputes_on_every_call() {
        let api = Arc::new(FakeSteamApi {
            players: vec![summary("Gabe")],
            ..Default::default()
        });
        let manager = manager_with(Arc::clone(&api));

        manager.get_player_aggregate(&steam_id()).await.unwrap();
        manager.get_player_aggregate(&steam_id()).await.unwrap();

        assert_eq!(api.calls.summaries.load(Ordering::SeqCst), 2);
        assert_eq!(api.calls.owned_games.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn title_stats_second_call_is_served_from_cache() {
        let api = Arc::new(FakeSteamApi {
            owned_games: owned(vec![game(730, 4321)]),
            user_stats: Some(UserStatsBody {
                stats: Some(vec![
                    stat("total_kills", 100.0),
                    stat("total_deaths", 50.0),
                ]),
                ..Default::default()
            }),
            achievements: Some(AchievementsBody {
                achievements: vec![achievement("KILL_ENEMY", 1), achievement("WIN_ROUND", 0)],
                ..Default::default()
            }),
            ..Default::default()
        });
        let manager = manager_with(Arc::clone(&api));
        let first = manager.get_title_stats(&steam_id(), SupportedTitle::Cs2).await.unwrap();
        let second = manager.get_title_stats(&steam_id(), SupportedTitle::Cs2).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.calls.owned_games.load(Ordering::SeqCst), 1);
        assert_eq!(api.calls.user_stats.load(Ordering::SeqCst), 1);
        assert_eq!(api.calls.achievements.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn title_stats_expired_cache_refetches() {
        let api = Arc::new(FakeSteamApi {
            owned_games: owned(vec![game(570, 100)]),
            user_stats: Some(UserStatsBody {
                stats: Some(vec![stat("total_kills", 1.0)]),
                ..Default::default()
            }),
            achievements: Some(AchievementsBody::default()),
            ..Default::default()
        });
        let manager = ProfileManager::builder("key")
            .api(Arc::clone(&api) as Arc<dyn SteamApi>)
            .cache_ttl(Duration::ZERO)
            .build();

        manager.get_title_stats(&steam_id(), SupportedTitle::Dota2).await.unwrap();
        manager.get_title_stats(&steam_id(), SupportedTitle::Dota2).await.unwrap();

        assert_eq!(api.calls.owned_games.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn title_stats_distinguishes_privacy_levels() {
        let profile_private = manager_with(Arc::new(FakeSteamApi {
            owned_games: OwnedGamesResponse { response: None },
            ..Default::default()
        }));
        let details_private = manager_with(Arc::new(FakeSteamApi {
            owned_games: OwnedGamesResponse {
                response: Some(OwnedGamesBody::default()),
            },
            ..Default::default()
        }));

        let first = profile_private
            .get_title_stats(&steam_id(), SupportedTitle::Tf2)
            .await
            .unwrap();
        let second = details_private
            .get_title_stats(&steam_id(), SupportedTitle::Tf2)
            .await
            .unwrap();

        let first_reason = match &first {
            TitleStats::PrivacyRestricted { reason } => reason.clone(),
            other => panic!("expected PrivacyRestricted, got {:?}", other),
        };
        let second_reason = match &second {
            TitleStats::PrivacyRestricted { reason } => reason.clone(),
            other => panic!("expected PrivacyRestricted, got {:?}", other),
        };

        assert_ne!(first_reason, second_reason);
    }

    #[tokio::test]
    async fn title_stats_reports_unowned_titles() {
        let manager = manager_with(Arc::new(FakeSteamApi {
            owned_games: owned(Vec::new()),
            ..Default::default()
        }));
        let stats = manager
            .get_title_stats(&steam_id(), SupportedTitle::Dota2)
            .await
            .unwrap();

        match stats {
            TitleStats::NotOwned { reason } => assert!(reason.contains("Dota 2")),
            other => panic!("expected NotOwned, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn title_stats_failed_stats_call_is_stats_private() {
        let manager = manager_with(Arc::new(FakeSteamApi {
            owned_games: owned(vec![game(550, 777)]),
            user_stats: None,
            ..Default::default()
        }));
        let stats = manager
            .get_title_stats(&steam_id(), SupportedTitle::L4d2)
            .await
            .unwrap();

        assert_eq!(stats, TitleStats::StatsPrivate {
            reason: STATS_PRIVATE_MESSAGE.into(),
            playtime: 777,
        });
    }

    #[tokio::test]
    async fn title_stats_missing_stat_list_is_stats_private() {
        let manager = manager_with(Arc::new(FakeSteamApi {
            owned_games: owned(vec![game(550, 777)]),
            user_stats: Some(UserStatsBody::default()),
            ..Default::default()
        }));
        let stats = manager
            .get_title_stats(&steam_id(), SupportedTitle::L4d2)
            .await
            .unwrap();

        assert!(matches!(stats, TitleStats::StatsPrivate { playtime: 777, .. }));
    }

    #[tokio::test]
    async fn title_stats_achievement_failure_counts_zero() {
        let manager = manager_with(Arc::new(FakeSteamApi {
            owned_games: owned(vec![game(620, 845)]),
            user_stats: Some(UserStatsBody {
                stats: Some(vec![stat("NumPortalsPlaced", 42.0)]),
                ..Default::default()
            }),
            achievements: None,
            ..Default::default()
        }));
        let stats = manager
            .get_title_stats(&steam_id(), SupportedTitle::Portal2)
            .await
            .unwrap();

        match stats {
            TitleStats::Available(available) => {
                assert_eq!(available.achievements.total, 0);
                assert_eq!(available.achievements.achieved, 0);
                assert_eq!(available.achievements.percentage, 0.0);
            },
            other => panic!("expected Available, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn title_stats_projects_and_derives_for_cs2() {
        let manager = manager_with(Arc::new(FakeSteamApi {
            owned_games: owned(vec![game(730, 4321)]),
            user_stats: Some(UserStatsBody {
                stats: Some(vec![
                    stat("total_kills", 100.0),
                    stat("total_deaths", 50.0),
                    stat("total_wins", 80.0),
                    stat("unlisted_upstream_stat", 9.0),
                ]),
                ..Default::default()
            }),
            achievements: Some(AchievementsBody {
                achievements: vec![
                    achievement("KILL_ENEMY", 1),
                    achievement("WIN_ROUND", 1),
                    achievement("PLANT_BOMB", 0),
                ],
                ..Default::default()
            }),
            ..Default::default()
        }));
        let stats = manager
            .get_title_stats(&steam_id(), SupportedTitle::Cs2)
            .await
            .unwrap();

        match stats {
            TitleStats::Available(available) => {
                assert_eq!(available.game_name, "Counter-Strike 2");
                assert_eq!(available.app_id, 730);
                assert_eq!(available.playtime, 4321);
                assert_eq!(available.stats["kd_ratio"], Number::from(2));
                assert_eq!(available.stats["total_wins"], Number::from(80));
                assert!(!available.stats.contains_key("unlisted_upstream_stat"));
                assert_eq!(available.achievements.total, 3);
                assert_eq!(available.achievements.achieved, 2);
                assert_eq!(available.achievements.percentage, 66.7);
                assert!(available.stat_definitions.contains_key("kd_ratio"));
            },
            other => panic!("expected Available, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn title_stats_echoes_definitions_for_generic_titles() {
        let manager = manager_with(Arc::new(FakeSteamApi {
            owned_games: owned(vec![game(620, 845)]),
            user_stats: Some(UserStatsBody {
                stats: Some(vec![stat("NumPortalsPlaced", 42.0)]),
                ..Default::default()
            }),
            achievements: Some(AchievementsBody::default()),
            ..Default::default()
        }));
        let stats = manager
            .get_title_stats(&steam_id(), SupportedTitle::Portal2)
            .await
            .unwrap();

        match stats {
            TitleStats::Available(available) => {
                assert_eq!(available.game_name, "Portal 2");
                assert_eq!(available.stats["NumPortalsPlaced"], Number::from(42));
                assert_eq!(available.stats["NumStepsTaken"], Number::from(0));
                assert_eq!(available.stat_definitions, SupportedTitle::Portal2.stat_definitions());
            },
            other => panic!("expected Available, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn game_stats_unavailable_payload_is_cached() {
        let api = Arc::new(FakeSteamApi::default());
        let manager = manager_with(Arc::clone(&api));
        let first = manager.get_game_stats(&steam_id(), 4000).await.unwrap();
        let second = manager.get_game_stats(&steam_id(), 4000).await.unwrap();

        assert_eq!(first.error.as_deref(), Some("Stats not available"));
        assert_eq!(first, second);
        assert_eq!(api.calls.user_stats.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn game_stats_passes_raw_bodies_through() {
        let api = Arc::new(FakeSteamApi {
            user_stats: Some(UserStatsBody {
                game_name: Some(String::from("Garry's Mod")),
                stats: Some(vec![stat("props_spawned", 12000.0)]),
                ..Default::default()
            }),
            achievements: Some(AchievementsBody {
                achievements: vec![achievement("FIRST_SPAWN", 1)],
                ..Default::default()
            }),
            ..Default::default()
        });
        let manager = manager_with(api);
        let stats = manager.get_game_stats(&steam_id(), 4000).await.unwrap();

        assert!(stats.error.is_none());
        assert_eq!(stats.stats.unwrap().game_name.as_deref(), Some("Garry's Mod"));
        assert_eq!(stats.achievements.unwrap().achievements.len(), 1);
    }

    #[tokio::test]
    async fn player_summary_is_cached() {
        let api = Arc::new(FakeSteamApi {
            players: vec![summary("Gabe")],
            ..Default::default()
        });
        let manager = manager_with(Arc::clone(&api));

        manager.get_player_summary(&steam_id()).await.unwrap();
        let summary = manager.get_player_summary(&steam_id()).await.unwrap();

        assert_eq!(summary.personaname, "Gabe");
        assert_eq!(api.calls.summaries.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn owned_games_summary_missing_envelope_is_not_found() {
        let manager = manager_with(Arc::new(FakeSteamApi {
            owned_games: OwnedGamesResponse { response: None },
            ..Default::default()
        }));

        assert!(matches!(
            manager.get_owned_games_summary(&steam_id()).await,
            Err(Error::NotFound(_)),
        ));
    }

    #[tokio::test]
    async fn player_badges_combine_level_and_are_cached() {
        let api = Arc::new(FakeSteamApi {
            badges: BadgesBody {
                badges: vec![badge(Some(730)), badge(None)],
                ..Default::default()
            },
            level: 42,
            ..Default::default()
        });
        let manager = manager_with(Arc::clone(&api));

        manager.get_player_badges(&steam_id()).await.unwrap();
        let badges = manager.get_player_badges(&steam_id()).await.unwrap();

        assert_eq!(badges.level, 42);
        assert_eq!(badges.badges.badges.len(), 2);
        assert_eq!(api.calls.badges.load(Ordering::SeqCst), 1);
        assert_eq!(api.calls.level.load(Ordering::SeqCst), 1);
    }
}
