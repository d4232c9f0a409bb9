use crate::api::error::{ApiError, Result};
use crate::api::models::*;
use crate::cache_service::{get_json as cache_get_json, put_json as cache_put_json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, info, warn};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(build_http_client);

pub const CLIENT_NAME: &str = "NavidromeUI";
pub const API_VERSION: &str = "1.8.0";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

const SONG_LIST_CACHE_PREFIX: &str = "api:search3:v1:";
const ALBUM_LIST_CACHE_PREFIX: &str = "api:getAlbumList2:v1:";

/// Client for one Navidrome server, bound to the credentials of the current session.
#[derive(Debug, Clone)]
pub struct NavidromeClient {
    base_url: String,
    credentials: SessionCredentials,
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|err| {
            warn!("falling back to default HTTP client: {err}");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Cache prefix of the list responses for `kind`, dropped whenever that list changes.
pub fn list_cache_prefix(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Song => SONG_LIST_CACHE_PREFIX,
        ResourceKind::Album => ALBUM_LIST_CACHE_PREFIX,
    }
}

#[derive(Debug, Serialize)]
struct DeleteSongRequest<'a> {
    #[serde(rename = "songId")]
    song_id: &'a str,
}

#[derive(Debug, Serialize)]
struct DeleteAlbumRequest<'a> {
    #[serde(rename = "albumId")]
    album_id: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Reply of `POST /auth/login`. Carries both the native token and Subsonic auth.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LoginResponse {
    token: Option<String>,
    username: Option<String>,
    subsonic_salt: Option<String>,
    subsonic_token: Option<String>,
    is_admin: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reply of the native tag endpoints. Album updates carry per-song counts.
#[derive(Debug, Deserialize)]
struct TagUpdateResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "successCount")]
    success_count: Option<u32>,
    #[serde(default, rename = "errorCount")]
    error_count: Option<u32>,
}

impl TagUpdateResponse {
    fn into_outcome(self) -> Result<TagUpdateOutcome> {
        if !self.success {
            return Err(ApiError::Backend(
                self.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Tag update failed".to_string()),
            ));
        }
        Ok(TagUpdateOutcome {
            success_count: self.success_count.unwrap_or(1),
            error_count: self.error_count.unwrap_or(0),
        })
    }
}

include!("auth.rs");
include!("library_browsing.rs");
include!("library_mutations.rs");
include!("playlists_and_shares.rs");
include!("response_models.rs");

#[cfg(test)]
mod tests;
