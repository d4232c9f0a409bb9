use crate::actions::SaveStrategy;
use crate::api::SessionCredentials;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Error type for database operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl DbError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        Self(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "navidrome-admin.settings";

/// Admin UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Navidrome base URL, without a trailing slash.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub save_strategy: SaveStrategy,
    #[serde(default)]
    pub enable_sharing: bool,
    #[serde(default = "default_true")]
    pub enable_downloads: bool,
    /// 0 creates shares that never expire.
    #[serde(default = "default_share_expiry_days")]
    pub share_expiry_days: u32,
    #[serde(default = "default_list_page_size")]
    pub list_page_size: u32,
    /// 0 disables the list cache.
    #[serde(default = "default_cache_expiry_hours")]
    pub cache_expiry_hours: u32,
}

fn default_true() -> bool {
    true
}

fn default_share_expiry_days() -> u32 {
    30
}

fn default_list_page_size() -> u32 {
    50
}

fn default_cache_expiry_hours() -> u32 {
    1
}

#[cfg(target_arch = "wasm32")]
fn default_server_url() -> String {
    // Served by Navidrome itself, so the page origin is the API origin.
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_server_url() -> String {
    "http://localhost:4533".to_string()
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            save_strategy: SaveStrategy::default(),
            enable_sharing: false,
            enable_downloads: default_true(),
            share_expiry_days: default_share_expiry_days(),
            list_page_size: default_list_page_size(),
            cache_expiry_hours: default_cache_expiry_hours(),
        }
    }
}

impl AdminSettings {
    /// Clamps values edited by hand in storage back into usable ranges.
    pub fn normalized(mut self) -> Self {
        self.server_url = self.server_url.trim().trim_end_matches('/').to_string();
        self.list_page_size = self.list_page_size.clamp(10, 500);
        self.cache_expiry_hours = self.cache_expiry_hours.min(24);
        self
    }

    pub fn share_expiry(&self) -> Option<u32> {
        (self.share_expiry_days > 0).then_some(self.share_expiry_days)
    }
}

// Native storage: one key/value `settings` table in the app data directory.

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_ROW: &str = "admin_settings";
#[cfg(not(target_arch = "wasm32"))]
const SESSION_ROW: &str = "session";

#[cfg(not(target_arch = "wasm32"))]
fn create_tables(conn: &rusqlite::Connection) -> Result<(), DbError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_row<T: Serialize>(conn: &rusqlite::Connection, key: &str, value: &T) -> Result<(), DbError> {
    let json = serde_json::to_string(value)?;
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        [key, json.as_str()],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_row<T>(conn: &rusqlite::Connection, key: &str) -> Result<Option<T>, DbError>
where
    T: serde::de::DeserializeOwned,
{
    use rusqlite::OptionalExtension;

    let json: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [key],
            |row: &rusqlite::Row| row.get(0),
        )
        .optional()?;
    json.map(|json| serde_json::from_str(&json).map_err(DbError::from))
        .transpose()
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    create_tables(&get_db_connection()?)
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), StorageError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AdminSettings) -> Result<(), DbError> {
    write_row(&get_db_connection()?, SETTINGS_ROW, &settings)
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AdminSettings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AdminSettings, DbError> {
    let stored: Option<AdminSettings> = read_row(&get_db_connection()?, SETTINGS_ROW)?;
    Ok(stored.unwrap_or_default().normalized())
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AdminSettings, StorageError> {
    match LocalStorage::get::<AdminSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings.normalized()),
        Err(_) => Ok(AdminSettings::default()),
    }
}

/// Session of the signed-in admin. Absent keys yield empty strings.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_session() -> Result<SessionCredentials, DbError> {
    let stored: Option<SessionCredentials> = read_row(&get_db_connection()?, SESSION_ROW)?;
    Ok(stored.unwrap_or_default())
}

/// The web UI's login writes these keys as plain strings, so they are read
/// raw rather than as JSON.
#[cfg(target_arch = "wasm32")]
pub async fn load_session() -> Result<SessionCredentials, StorageError> {
    let storage = LocalStorage::raw();
    Ok(SessionCredentials::from_lookup(|key| {
        storage.get_item(key).ok().flatten()
    }))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_session(credentials: SessionCredentials) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    let previous: SessionCredentials = read_row(&conn, SESSION_ROW)?.unwrap_or_default();
    write_row(&conn, SESSION_ROW, &credentials.or_stored(&previous))
}

#[cfg(target_arch = "wasm32")]
pub async fn save_session(credentials: SessionCredentials) -> Result<(), StorageError> {
    let storage = LocalStorage::raw();
    for (key, value) in credentials.entries() {
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::KeyNotFound(key.to_string()))?;
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn clear_session() -> Result<(), DbError> {
    get_db_connection()?.execute("DELETE FROM settings WHERE key = ?1", [SESSION_ROW])?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn clear_session() -> Result<(), StorageError> {
    for key in SessionCredentials::KEYS {
        LocalStorage::delete(key);
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("navidrome-admin"))
        .unwrap_or_else(|| std::path::PathBuf::from(".navidrome-admin"));
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| DbError::new(format!("Failed to create data directory: {}", e)))?;

    rusqlite::Connection::open(data_dir.join("admin.db"))
        .map_err(|e| DbError::new(format!("Failed to open database: {}", e)))
}
