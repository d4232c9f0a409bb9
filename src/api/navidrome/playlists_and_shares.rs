// Playlist additions and share links for a whole selection.
impl NavidromeClient {
    pub async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        let envelope = self.get_subsonic("getPlaylists", Vec::new()).await?;
        Ok(envelope
            .playlists
            .and_then(|p| p.playlist)
            .unwrap_or_default())
    }

    pub async fn add_songs_to_playlist(&self, playlist_id: &str, song_ids: &[String]) -> Result<()> {
        if song_ids.is_empty() {
            return Ok(());
        }

        let mut params = vec![("playlistId".to_string(), playlist_id.to_string())];
        for song_id in song_ids {
            params.push(("songIdToAdd".to_string(), song_id.clone()));
        }

        self.get_subsonic("updatePlaylist", params).await?;
        info!(playlist_id, count = song_ids.len(), "added songs to playlist");
        Ok(())
    }

    pub async fn create_share(
        &self,
        ids: &[String],
        description: Option<&str>,
        expires: Option<DateTime<Utc>>,
    ) -> Result<Share> {
        if ids.is_empty() {
            return Err(ApiError::validation("Nothing to share"));
        }

        let mut params: Vec<(String, String)> =
            ids.iter().map(|id| ("id".to_string(), id.clone())).collect();
        if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
            params.push(("description".to_string(), description.to_string()));
        }
        if let Some(expires) = expires {
            params.push(("expires".to_string(), expires.timestamp_millis().to_string()));
        }

        let envelope = self.get_subsonic("createShare", params).await?;
        envelope
            .shares
            .and_then(|s| s.share)
            .and_then(|shares| shares.into_iter().next())
            .ok_or_else(|| ApiError::Backend("Share was not created".to_string()))
    }
}
