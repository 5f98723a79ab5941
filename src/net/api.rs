//! src/net/api.rs
//!
//! Blocking HTTP client for the pro-stats backend.
//!
//! Three endpoints: the session-cached baseline coordinates, the on-demand
//! player analysis, and a fire-and-forget warmup. Fetch failures map to a
//! small taxonomy that the query boundary turns into displayable messages.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

use crate::chart::RawCoordinateMap;
use crate::query::SearchQuery;

/// Hung requests resolve as transport errors instead of pinning the query
/// machine in `pending` forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// What went wrong talking to the backend.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Inline message shown to the user. Never retried automatically; the
    /// user retries by resubmitting the form.
    pub fn display_message(&self) -> String {
        match self {
            FetchError::Status(StatusCode::NOT_FOUND) => "Player not found".to_string(),
            FetchError::Status(status) => format!("Backend error ({status})"),
            FetchError::Transport(_) => "Network error: backend unreachable".to_string(),
            FetchError::Decode(_) => "Unexpected response from backend".to_string(),
        }
    }
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<ApiClient, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /api/pro-stats/coords` — the baseline population. Fetched once
    /// per session and cached by the caller.
    pub fn fetch_baseline(&self) -> Result<RawCoordinateMap, FetchError> {
        self.fetch_coords(&format!("{}/api/pro-stats/coords", self.base_url), &[])
    }

    /// `GET /api/analyse/?region=&gameName=&tagLine=` — one searched player.
    pub fn fetch_analysis(&self, query: &SearchQuery) -> Result<RawCoordinateMap, FetchError> {
        self.fetch_coords(
            &format!("{}/api/analyse/", self.base_url),
            &[
                ("region", query.region.as_str()),
                ("gameName", &query.game_name),
                ("tagLine", &query.tag_line),
            ],
        )
    }

    /// `GET /api/warmup` — kicks the backend out of cold start. The response
    /// body is ignored; so is failure.
    pub fn warmup(&self) {
        let url = format!("{}/api/warmup", self.base_url);
        match self.http.get(&url).send() {
            Ok(resp) => debug!(status = %resp.status(), "warmup done"),
            Err(err) => debug!(%err, "warmup failed (ignored)"),
        }
    }

    fn fetch_coords(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<RawCoordinateMap, FetchError> {
        let resp = self.http.get(url).query(params).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        // Decode from text so a 200 with a bad body is Decode, not Transport.
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_player_not_found() {
        let msg = FetchError::Status(StatusCode::NOT_FOUND).display_message();
        assert_eq!(msg, "Player not found");
    }

    #[test]
    fn other_statuses_keep_the_code_visible() {
        let msg = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR).display_message();
        assert!(msg.contains("500"));
    }

    #[test]
    fn decode_error_is_distinct_from_status() {
        let err: FetchError = serde_json::from_str::<RawCoordinateMap>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(err.display_message(), "Unexpected response from backend");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn coordinate_map_deserializes_from_backend_shape() {
        let raw: RawCoordinateMap =
            serde_json::from_str(r#"{"Faker":[1.0,2.0],"Caps":[3,4]}"#).unwrap();
        assert_eq!(raw["Faker"], [1.0, 2.0]);
        assert_eq!(raw["Caps"], [3.0, 4.0]);
    }
}
