// Emby HTTP client for skip-intro marker management

use crate::config::EmbyConfig;
use crate::errors::ClientError;
use introskip_core::models::{ChaptersPage, EpisodesPage, MarkerKind, PlaybackInfo};
use introskip_core::time::{format_marker_time, ticks_to_seconds, MARKER_TIME_ZERO};
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Emby endpoints used to place skip markers
///
/// The `try_*` methods return errors; the sentinel methods wrap them,
/// log any failure, and hand callers a neutral value instead, so a
/// marker sweep over a whole season never aborts on one bad item.
pub struct EmbyClient {
    client: reqwest::Client,
    config: EmbyConfig,
}

impl EmbyClient {
    /// Create a new client for the given server
    pub fn new(config: EmbyConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key() {
            let value = HeaderValue::from_str(key).map_err(|_| ClientError::InvalidApiKey)?;
            headers.insert("X-Emby-Token", value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .no_proxy() // Disable proxy for LAN servers
            .build()?;

        Ok(Self { client, config })
    }

    // ----- fallible operations -----

    /// Fetch the full episode listing of a show
    pub async fn fetch_episodes(&self, show_id: &str) -> Result<EpisodesPage, ClientError> {
        self.get_json(&format!("Shows/{}/Episodes", show_id), &[])
            .await
    }

    /// IDs of the given episode and every later episode of the same
    /// season, in server order
    pub async fn try_episode_ids_from(
        &self,
        show_id: &str,
        season: i64,
        episode: i64,
    ) -> Result<Vec<String>, ClientError> {
        let page = self.fetch_episodes(show_id).await?;
        let mut ids = Vec::new();
        for entry in &page.items {
            if entry.parent_index_number == Some(season)
                && entry.index_number.map_or(false, |index| index >= episode)
            {
                debug!(index = ?entry.index_number, id = %entry.id, "queued episode for marker update");
                ids.push(entry.id.clone());
            }
        }
        Ok(ids)
    }

    /// ID of the exact season/episode match, `Ok(None)` when the show
    /// has no such episode
    pub async fn try_episode_id(
        &self,
        show_id: &str,
        season: i64,
        episode: i64,
    ) -> Result<Option<String>, ClientError> {
        let page = self.fetch_episodes(show_id).await?;
        for entry in &page.items {
            if entry.index_number == Some(episode) && entry.parent_index_number == Some(season) {
                debug!(season, episode, id = %entry.id, "resolved episode id");
                return Ok(Some(entry.id.clone()));
            }
        }
        Ok(None)
    }

    /// Total runtime of an item in seconds, from its first media
    /// source; `Ok(None)` when the item has no sources or no tick count
    pub async fn try_total_runtime_secs(
        &self,
        item_id: &str,
    ) -> Result<Option<f64>, ClientError> {
        // PlaybackInfo only honors the query form of the key, the
        // token header is not enough here
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(key) = self.config.api_key() {
            query.push(("api_key", key.to_string()));
        }
        let info: PlaybackInfo = self
            .get_json(&format!("emby/Items/{}/PlaybackInfo", item_id), &query)
            .await?;

        let Some(source) = info.media_sources.first() else {
            return Ok(None);
        };
        Ok(source.run_time_ticks.map(ticks_to_seconds))
    }

    /// Upsert the intro marker pair on an item: clear stale intro
    /// markers, then add `intro_start` at zero and `intro_end` at the
    /// given offset
    pub async fn try_update_intro(
        &self,
        item_id: &str,
        intro_end_secs: f64,
    ) -> Result<(), ClientError> {
        self.clear_markers(item_id, MarkerKind::IntroStart).await?;
        self.add_marker(item_id, MarkerKind::IntroStart, MARKER_TIME_ZERO)
            .await?;
        self.add_marker(
            item_id,
            MarkerKind::IntroEnd,
            &format_marker_time(intro_end_secs),
        )
        .await
    }

    /// Upsert the credits marker on an item: clear stale credits
    /// markers, then add `credits_start` at the given offset
    pub async fn try_update_credits(
        &self,
        item_id: &str,
        credits_start_secs: f64,
    ) -> Result<(), ClientError> {
        self.clear_markers(item_id, MarkerKind::CreditsStart).await?;
        self.add_marker(
            item_id,
            MarkerKind::CreditsStart,
            &format_marker_time(credits_start_secs),
        )
        .await
    }

    // ----- sentinel surface -----

    /// Like [`try_episode_ids_from`](Self::try_episode_ids_from), but
    /// failures are logged and return an empty list
    pub async fn episode_ids_from(&self, show_id: &str, season: i64, episode: i64) -> Vec<String> {
        match self.try_episode_ids_from(show_id, season, episode).await {
            Ok(ids) => ids,
            Err(err) => {
                error!(show_id, season, episode, %err, "episode listing failed");
                Vec::new()
            }
        }
    }

    /// Like [`try_episode_id`](Self::try_episode_id), but failures are
    /// logged and return `None`
    pub async fn episode_id(&self, show_id: &str, season: i64, episode: i64) -> Option<String> {
        match self.try_episode_id(show_id, season, episode).await {
            Ok(id) => id,
            Err(err) => {
                error!(show_id, season, episode, %err, "episode lookup failed");
                None
            }
        }
    }

    /// Like [`try_total_runtime_secs`](Self::try_total_runtime_secs),
    /// but failures and missing sources are logged and return `0.0`
    pub async fn total_runtime_secs(&self, item_id: &str) -> f64 {
        match self.try_total_runtime_secs(item_id).await {
            Ok(Some(secs)) => secs,
            Ok(None) => {
                error!(item_id, "item has no media sources with a runtime");
                0.0
            }
            Err(err) => {
                error!(item_id, %err, "playback info request failed");
                0.0
            }
        }
    }

    /// Like [`try_update_intro`](Self::try_update_intro), but failures
    /// are logged and return `None`; echoes the offset on success
    pub async fn update_intro(&self, item_id: &str, intro_end_secs: f64) -> Option<f64> {
        match self.try_update_intro(item_id, intro_end_secs).await {
            Ok(()) => Some(intro_end_secs),
            Err(err) => {
                error!(item_id, %err, "intro marker update failed");
                None
            }
        }
    }

    /// Like [`try_update_credits`](Self::try_update_credits), but
    /// failures are logged and return `None`; echoes the offset on
    /// success
    pub async fn update_credits(&self, item_id: &str, credits_start_secs: f64) -> Option<f64> {
        match self.try_update_credits(item_id, credits_start_secs).await {
            Ok(()) => Some(credits_start_secs),
            Err(err) => {
                error!(item_id, %err, "credits marker update failed");
                None
            }
        }
    }

    // ----- internals -----

    /// Remove every chapter whose `MarkerType` is stale for `kind`.
    /// No-op when the item has none.
    async fn clear_markers(&self, item_id: &str, kind: MarkerKind) -> Result<(), ClientError> {
        let page: ChaptersPage = self
            .get_json(
                "emby/chapter_api/get_chapters",
                &[("id", item_id.to_string())],
            )
            .await?;

        let stale: Vec<String> = page
            .chapters
            .iter()
            .filter(|chapter| kind.matches_marker_type(&chapter.marker_type))
            .map(|chapter| chapter.index.to_string())
            .collect();
        if stale.is_empty() {
            return Ok(());
        }

        debug!(item_id, indexes = %stale.join(","), "removing stale markers");
        self.update_chapters(
            item_id,
            &[
                ("action", "remove".to_string()),
                ("index_list", stale.join(",")),
            ],
        )
        .await
    }

    async fn add_marker(
        &self,
        item_id: &str,
        kind: MarkerKind,
        time: &str,
    ) -> Result<(), ClientError> {
        self.update_chapters(
            item_id,
            &[
                ("action", "add".to_string()),
                ("name", kind.display_name().to_string()),
                ("type", kind.query_value().to_string()),
                ("time", time.to_string()),
            ],
        )
        .await
    }

    /// The chapter-api plugin is GET-only; mutations go through query
    /// parameters on `update_chapters`
    async fn update_chapters(
        &self,
        item_id: &str,
        params: &[(&str, String)],
    ) -> Result<(), ClientError> {
        let endpoint = "emby/chapter_api/update_chapters";
        let url = format!("{}{}", self.config.host(), endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("id", item_id.to_string())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                endpoint: endpoint.to_string(),
            });
        }
        Ok(())
    }

    async fn get_json<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.config.host(), endpoint);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                endpoint: endpoint.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = EmbyConfig::new("http://emby.local:8096", Some("token")).unwrap();
        let client = EmbyClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_unprintable_api_key() {
        let config = EmbyConfig::new("http://emby.local:8096", Some("bad\nkey")).unwrap();
        assert!(matches!(
            EmbyClient::new(config),
            Err(ClientError::InvalidApiKey)
        ));
    }

    // Integration tests with a mock server live in tests/
}
