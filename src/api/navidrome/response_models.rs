// Subsonic envelope types used by Navidrome API parsing.

/// Body of a Subsonic-style response with the `subsonic-response` wrapper removed.
#[derive(Debug, Deserialize, Default)]
pub struct SubsonicEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error: Option<SubsonicError>,
    #[serde(default, rename = "deleteResponse")]
    pub delete_response: Option<ActionResponse>,
    #[serde(default, rename = "downloadResponse")]
    pub download_response: Option<ActionResponse>,
    #[serde(default, rename = "libraryResponse")]
    pub library_response: Option<LibraryResponse>,
    #[serde(default, rename = "albumList2")]
    pub album_list2: Option<AlbumList2>,
    #[serde(default, rename = "searchResult3")]
    pub search_result3: Option<SearchResult3>,
    #[serde(default)]
    pub song: Option<Song>,
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub playlists: Option<PlaylistsContainer>,
    #[serde(default)]
    pub shares: Option<SharesContainer>,
}

impl SubsonicEnvelope {
    /// Accepts both the wrapped (`{"subsonic-response": {...}}`) and bare forms.
    pub fn parse(body: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(body)?;
        let inner = if value.get("subsonic-response").is_some() {
            value["subsonic-response"].take()
        } else {
            value
        };
        Ok(serde_json::from_value(inner)?)
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn ensure_ok(self) -> Result<Self> {
        if self.is_ok() {
            return Ok(self);
        }
        Err(ApiError::Backend(
            self.error
                .map(|e| e.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }

    /// Checks an action payload such as `deleteResponse`: the call only counts
    /// as done when the status is ok and the payload reports `success: true`.
    fn action_result<'a>(
        &'a self,
        action: Option<&'a ActionResponse>,
        fallback: &str,
    ) -> Result<&'a ActionResponse> {
        match action {
            Some(payload) if self.is_ok() && payload.success => Ok(payload),
            _ => Err(ApiError::Backend(self.failure_message(action, fallback))),
        }
    }

    fn failure_message(&self, action: Option<&ActionResponse>, fallback: &str) -> String {
        action
            .and_then(|payload| payload.message.clone())
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                self.error
                    .as_ref()
                    .map(|e| e.message.clone())
                    .filter(|m| !m.trim().is_empty())
            })
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct SubsonicError {
    #[serde(default)]
    #[allow(dead_code)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LibraryResponse {
    #[serde(default)]
    pub libraries: Vec<Library>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AlbumList2 {
    pub album: Option<Vec<Album>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchResult3 {
    pub song: Option<Vec<Song>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PlaylistsContainer {
    pub playlist: Option<Vec<Playlist>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SharesContainer {
    pub share: Option<Vec<Share>>,
}
