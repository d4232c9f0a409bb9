// Song/album list fetches backing the list views, plus library discovery.
impl NavidromeClient {
    pub async fn ping(&self) -> Result<()> {
        self.get_subsonic("ping", Vec::new()).await.map(|_| ())
    }

    /// Lists songs in title order using an empty `search3` query.
    pub async fn get_songs(&self, offset: u32, size: u32) -> Result<Vec<Song>> {
        let cache_key = self.list_cache_key(SONG_LIST_CACHE_PREFIX, &format!("{offset}:{size}"));
        if let Some(cached) = cache_get_json::<Vec<Song>>(&cache_key) {
            return Ok(cached);
        }

        let envelope = self
            .get_subsonic(
                "search3",
                vec![
                    ("query".to_string(), String::new()),
                    ("artistCount".to_string(), "0".to_string()),
                    ("albumCount".to_string(), "0".to_string()),
                    ("songCount".to_string(), size.to_string()),
                    ("songOffset".to_string(), offset.to_string()),
                ],
            )
            .await?;

        let songs = envelope
            .search_result3
            .and_then(|result| result.song)
            .unwrap_or_default();
        let _ = cache_put_json(cache_key, &songs, None);
        Ok(songs)
    }

    pub async fn get_albums(&self, offset: u32, size: u32) -> Result<Vec<Album>> {
        let cache_key = self.list_cache_key(ALBUM_LIST_CACHE_PREFIX, &format!("{offset}:{size}"));
        if let Some(cached) = cache_get_json::<Vec<Album>>(&cache_key) {
            return Ok(cached);
        }

        let envelope = self
            .get_subsonic(
                "getAlbumList2",
                vec![
                    ("type".to_string(), "alphabeticalByName".to_string()),
                    ("size".to_string(), size.to_string()),
                    ("offset".to_string(), offset.to_string()),
                ],
            )
            .await?;

        let albums = envelope
            .album_list2
            .and_then(|list| list.album)
            .unwrap_or_default();
        let _ = cache_put_json(cache_key, &albums, None);
        Ok(albums)
    }

    pub async fn get_libraries(&self) -> Result<Vec<Library>> {
        let envelope = self.get_subsonic("getLibraries", Vec::new()).await?;
        Ok(envelope
            .library_response
            .map(|response| response.libraries)
            .unwrap_or_default())
    }

    pub async fn get_song(&self, id: &str) -> Result<Song> {
        let envelope = self
            .get_subsonic("getSong", vec![("id".to_string(), id.to_string())])
            .await?;
        envelope
            .song
            .ok_or_else(|| ApiError::Backend(format!("Song {id} not found")))
    }

    pub async fn get_album(&self, id: &str) -> Result<Album> {
        let envelope = self
            .get_subsonic("getAlbum", vec![("id".to_string(), id.to_string())])
            .await?;
        envelope
            .album
            .ok_or_else(|| ApiError::Backend(format!("Album {id} not found")))
    }
}
