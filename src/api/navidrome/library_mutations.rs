// Deletes, downloads and tag edits.
impl NavidromeClient {
    /// Deletes one song or album.
    ///
    /// `Ok` only when the server confirms through `deleteResponse.success`.
    /// Every other reply is a backend failure carrying the server's message.
    pub async fn delete_item(&self, kind: ResourceKind, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(ApiError::validation(format!("{} ID is required", kind.title())));
        }

        let envelope = match kind {
            ResourceKind::Song => {
                self.post_subsonic("deleteSong", &DeleteSongRequest { song_id: id })
                    .await?
            }
            ResourceKind::Album => {
                self.post_subsonic("deleteAlbum", &DeleteAlbumRequest { album_id: id })
                    .await?
            }
        };

        let payload = envelope.action_result(envelope.delete_response.as_ref(), "Delete failed")?;
        info!(
            kind = kind.singular(),
            id,
            message = payload.message.as_deref().unwrap_or(""),
            "deleted"
        );
        Ok(())
    }

    pub async fn download_song(&self, request: &DownloadRequest) -> Result<DownloadReceipt> {
        if request.url.trim().is_empty() {
            return Err(ApiError::validation("URL is required"));
        }

        let envelope = self.post_subsonic("downloadSong", request).await?;
        let payload =
            envelope.action_result(envelope.download_response.as_ref(), "Download failed")?;
        info!(url = %request.url, file = payload.file.as_deref().unwrap_or(""), "downloaded");

        Ok(DownloadReceipt {
            message: payload.message.clone(),
            file: payload.file.clone(),
        })
    }

    pub async fn update_song_tags(
        &self,
        song_id: &str,
        patch: &SongTagPatch,
    ) -> Result<TagUpdateOutcome> {
        if patch.is_empty() {
            return Err(ApiError::validation("Nothing to update"));
        }
        let path = format!("api/song/{}/tags", urlencoding::encode(song_id));
        self.put_native(&path, patch).await?.into_outcome()
    }

    pub async fn update_album_tags(
        &self,
        album_id: &str,
        patch: &AlbumTagPatch,
    ) -> Result<TagUpdateOutcome> {
        if patch.is_empty() {
            return Err(ApiError::validation("Nothing to update"));
        }
        let path = format!("api/album/{}/tags", urlencoding::encode(album_id));
        self.put_native(&path, patch).await?.into_outcome()
    }
}
