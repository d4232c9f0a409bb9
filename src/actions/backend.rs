use crate::api::*;
use chrono::{DateTime, Utc};

/// Backend operations the actions need. `NavidromeClient` is the production
/// implementation; tests substitute an in-memory double.
#[allow(async_fn_in_trait)]
pub trait LibraryBackend {
    async fn delete_item(&self, kind: ResourceKind, id: &str) -> Result<()>;

    async fn download_song(&self, request: &DownloadRequest) -> Result<DownloadReceipt>;

    async fn get_libraries(&self) -> Result<Vec<Library>>;

    async fn update_song_tags(&self, song_id: &str, patch: &SongTagPatch)
        -> Result<TagUpdateOutcome>;

    async fn update_album_tags(
        &self,
        album_id: &str,
        patch: &AlbumTagPatch,
    ) -> Result<TagUpdateOutcome>;

    async fn add_songs_to_playlist(&self, playlist_id: &str, song_ids: &[String]) -> Result<()>;

    async fn create_share(
        &self,
        ids: &[String],
        description: Option<&str>,
        expires: Option<DateTime<Utc>>,
    ) -> Result<Share>;
}

impl LibraryBackend for NavidromeClient {
    async fn delete_item(&self, kind: ResourceKind, id: &str) -> Result<()> {
        NavidromeClient::delete_item(self, kind, id).await
    }

    async fn download_song(&self, request: &DownloadRequest) -> Result<DownloadReceipt> {
        NavidromeClient::download_song(self, request).await
    }

    async fn get_libraries(&self) -> Result<Vec<Library>> {
        NavidromeClient::get_libraries(self).await
    }

    async fn update_song_tags(
        &self,
        song_id: &str,
        patch: &SongTagPatch,
    ) -> Result<TagUpdateOutcome> {
        NavidromeClient::update_song_tags(self, song_id, patch).await
    }

    async fn update_album_tags(
        &self,
        album_id: &str,
        patch: &AlbumTagPatch,
    ) -> Result<TagUpdateOutcome> {
        NavidromeClient::update_album_tags(self, album_id, patch).await
    }

    async fn add_songs_to_playlist(&self, playlist_id: &str, song_ids: &[String]) -> Result<()> {
        NavidromeClient::add_songs_to_playlist(self, playlist_id, song_ids).await
    }

    async fn create_share(
        &self,
        ids: &[String],
        description: Option<&str>,
        expires: Option<DateTime<Utc>>,
    ) -> Result<Share> {
        NavidromeClient::create_share(self, ids, description, expires).await
    }
}
