use serde::{Deserialize, Serialize};

/// Credentials handed to every backend call.
///
/// Missing values are kept as empty strings; the server rejects the call and
/// the failure surfaces through the normal response classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionCredentials {
    pub username: String,
    pub subsonic_token: String,
    pub subsonic_salt: String,
    pub client_unique_id: String,
    /// Bearer token for the native (non-Subsonic) API.
    pub token: String,
    pub is_admin: bool,
}

impl SessionCredentials {
    /// Storage keys shared with the browser session of the web UI.
    pub const USERNAME_KEY: &'static str = "username";
    pub const SUBSONIC_TOKEN_KEY: &'static str = "subsonic-token";
    pub const SUBSONIC_SALT_KEY: &'static str = "subsonic-salt";
    pub const CLIENT_UNIQUE_ID_KEY: &'static str = "clientUniqueId";
    pub const TOKEN_KEY: &'static str = "token";
    pub const ROLE_KEY: &'static str = "role";

    pub const KEYS: [&'static str; 6] = [
        Self::USERNAME_KEY,
        Self::SUBSONIC_TOKEN_KEY,
        Self::SUBSONIC_SALT_KEY,
        Self::CLIENT_UNIQUE_ID_KEY,
        Self::TOKEN_KEY,
        Self::ROLE_KEY,
    ];

    /// Builds credentials from a key lookup, substituting empty strings for absent keys.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut read = |key: &str| lookup(key).unwrap_or_default();
        Self {
            username: read(Self::USERNAME_KEY),
            subsonic_token: read(Self::SUBSONIC_TOKEN_KEY),
            subsonic_salt: read(Self::SUBSONIC_SALT_KEY),
            client_unique_id: read(Self::CLIENT_UNIQUE_ID_KEY),
            token: read(Self::TOKEN_KEY),
            is_admin: read(Self::ROLE_KEY) == "admin",
        }
    }

    /// Derives Subsonic token auth from a clear password: `t = md5(password + salt)`.
    ///
    /// The native API token stays empty until a login fills it in.
    pub fn from_password(username: &str, password: &str) -> Self {
        let salt = random_salt();
        let token_input = format!("{}{}", password, salt);
        let token = format!("{:x}", md5::compute(token_input.as_bytes()));

        Self {
            username: username.to_string(),
            subsonic_token: token,
            subsonic_salt: salt,
            client_unique_id: uuid::Uuid::new_v4().to_string(),
            token: String::new(),
            is_admin: false,
        }
    }

    /// Keeps `previous` values wherever this session has none.
    pub fn or_stored(self, previous: &SessionCredentials) -> Self {
        let keep = |value: String, stored: &str| {
            if value.trim().is_empty() {
                stored.to_string()
            } else {
                value
            }
        };
        Self {
            username: keep(self.username, &previous.username),
            subsonic_token: keep(self.subsonic_token, &previous.subsonic_token),
            subsonic_salt: keep(self.subsonic_salt, &previous.subsonic_salt),
            client_unique_id: keep(self.client_unique_id, &previous.client_unique_id),
            token: keep(self.token, &previous.token),
            is_admin: self.is_admin,
        }
    }

    fn role(&self) -> &'static str {
        if self.is_admin {
            "admin"
        } else {
            "regular"
        }
    }

    /// Key/value pairs to persist. Empty values are left out so a partial
    /// session never blanks a key another login stored.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            (Self::USERNAME_KEY, self.username.as_str()),
            (Self::SUBSONIC_TOKEN_KEY, self.subsonic_token.as_str()),
            (Self::SUBSONIC_SALT_KEY, self.subsonic_salt.as_str()),
            (Self::CLIENT_UNIQUE_ID_KEY, self.client_unique_id.as_str()),
            (Self::TOKEN_KEY, self.token.as_str()),
            (Self::ROLE_KEY, self.role()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }
}

fn random_salt() -> String {
    // Generate random salt using getrandom (wasm-compatible)
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).unwrap_or_default();

    bytes
        .iter()
        .map(|b| {
            let idx = (*b as usize) % 36;
            if idx < 10 {
                (b'0' + idx as u8) as char
            } else {
                (b'a' + (idx - 10) as u8) as char
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Song,
    Album,
}

impl ResourceKind {
    pub fn singular(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Album => "album",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Song => "songs",
            Self::Album => "albums",
        }
    }

    /// `"1 song"`, `"3 albums"`.
    pub fn count_label(self, count: usize) -> String {
        if count == 1 {
            format!("{} {}", count, self.singular())
        } else {
            format!("{} {}", count, self.plural())
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Song => "Song",
            Self::Album => "Album",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "albumArtist")]
    pub album_artist: Option<String>,
    #[serde(default, alias = "songCount")]
    pub song_count: u32,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Song {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default, alias = "albumId")]
    pub album_id: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub track: Option<u32>,
    #[serde(default, alias = "discNumber")]
    pub disc_number: Option<u32>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub duration: u32,
    /// File no longer present on disk; excluded from playback actions.
    #[serde(default)]
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: String,
    pub name: String,
}

impl Library {
    pub fn fallback() -> Self {
        Self {
            id: "default".to_string(),
            name: "Music Library".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "songCount")]
    pub song_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Share {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for `downloadSong`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

impl DownloadRequest {
    /// Trims both fields; an empty library means the server default.
    pub fn new(url: &str, library: &str) -> Option<Self> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        let library = library.trim();
        Some(Self {
            url: url.to_string(),
            library: (!library.is_empty()).then(|| library.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DownloadReceipt {
    pub message: Option<String>,
    pub file: Option<String>,
}

/// Sparse song tag update: only fields the user touched are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongTagPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SongTagPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Sparse album tag update, applied by the server to every song of the album.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumTagPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AlbumTagPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagUpdateOutcome {
    pub success_count: u32,
    pub error_count: u32,
}

pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_session_keys_become_empty_strings() {
        let mut store = HashMap::new();
        store.insert("username", "admin".to_string());
        store.insert("subsonic-salt", "abc123".to_string());

        let creds = SessionCredentials::from_lookup(|key| store.get(key).cloned());

        assert_eq!(creds.username, "admin");
        assert_eq!(creds.subsonic_salt, "abc123");
        assert_eq!(creds.subsonic_token, "");
        assert_eq!(creds.client_unique_id, "");
        assert_eq!(creds.token, "");
        assert!(!creds.is_admin);
    }

    #[test]
    fn role_key_marks_admin_sessions() {
        let admin = SessionCredentials::from_lookup(|key| (key == "role").then(|| "admin".to_string()));
        assert!(admin.is_admin);
        let regular =
            SessionCredentials::from_lookup(|key| (key == "role").then(|| "regular".to_string()));
        assert!(!regular.is_admin);
    }

    #[test]
    fn empty_token_is_never_written_over_a_stored_one() {
        let creds = SessionCredentials::from_password("alice", "sesame");
        let keys: Vec<&str> = creds.entries().into_iter().map(|(key, _)| key).collect();
        assert!(!keys.contains(&SessionCredentials::TOKEN_KEY));
        assert!(keys.contains(&SessionCredentials::ROLE_KEY));

        let stored = SessionCredentials {
            token: "jwt-from-web-login".to_string(),
            ..Default::default()
        };
        let merged = creds.clone().or_stored(&stored);
        assert_eq!(merged.token, "jwt-from-web-login");
        assert_eq!(merged.subsonic_token, creds.subsonic_token);
    }

    #[test]
    fn password_token_is_md5_of_password_and_salt() {
        let creds = SessionCredentials::from_password("alice", "sesame");
        assert_eq!(creds.subsonic_salt.len(), 8);
        let expected = format!(
            "{:x}",
            md5::compute(format!("sesame{}", creds.subsonic_salt).as_bytes())
        );
        assert_eq!(creds.subsonic_token, expected);
        assert!(!creds.client_unique_id.is_empty());
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(ResourceKind::Song.count_label(1), "1 song");
        assert_eq!(ResourceKind::Song.count_label(2), "2 songs");
        assert_eq!(ResourceKind::Album.count_label(0), "0 albums");
    }

    #[test]
    fn download_request_trims_and_drops_empty_library() {
        assert_eq!(DownloadRequest::new("   ", "Rock"), None);

        let req = DownloadRequest::new(" https://youtu.be/x ", "  ").unwrap();
        assert_eq!(req.url, "https://youtu.be/x");
        assert_eq!(req.library, None);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "url": "https://youtu.be/x" })
        );
    }

    #[test]
    fn song_patch_serializes_only_defined_fields() {
        let patch = SongTagPatch {
            title: Some("New".to_string()),
            track_number: Some(4),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "title": "New", "trackNumber": 4 })
        );
        assert!(SongTagPatch::default().is_empty());
    }
}
