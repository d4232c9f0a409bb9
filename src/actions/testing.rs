//! Test doubles for the action collaborators.

use super::backend::LibraryBackend;
use super::context::{ListHandle, Notification, NotificationLevel, NotificationSink};
use crate::api::*;
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Records every call; ids listed in `failures` answer with a backend error,
/// `drop_at` answers with a transport error.
#[derive(Default)]
pub struct FakeBackend {
    calls: RefCell<Vec<String>>,
    failures: HashMap<String, String>,
    drop_at: Option<String>,
    libraries: Option<Vec<Library>>,
    tag_outcome: Option<TagUpdateOutcome>,
}

impl FakeBackend {
    pub fn fail_with(mut self, id: &str, message: &str) -> Self {
        self.failures.insert(id.to_string(), message.to_string());
        self
    }

    pub fn drop_connection_at(mut self, id: &str) -> Self {
        self.drop_at = Some(id.to_string());
        self
    }

    pub fn with_libraries(mut self, libraries: Vec<Library>) -> Self {
        self.libraries = Some(libraries);
        self
    }

    pub fn with_tag_outcome(mut self, outcome: TagUpdateOutcome) -> Self {
        self.tag_outcome = Some(outcome);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn answer(&self, call: String, key: &str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.drop_at.as_deref() == Some(key) {
            return Err(ApiError::Transport("connection reset by peer".to_string()));
        }
        match self.failures.get(key) {
            Some(message) => Err(ApiError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl LibraryBackend for FakeBackend {
    async fn delete_item(&self, _kind: ResourceKind, id: &str) -> Result<()> {
        self.answer(id.to_string(), id)
    }

    async fn download_song(&self, request: &DownloadRequest) -> Result<DownloadReceipt> {
        self.answer(format!("download:{}", request.url), &request.url)?;
        Ok(DownloadReceipt {
            message: Some("Song downloaded successfully".to_string()),
            file: Some("Artist - Title.mp3".to_string()),
        })
    }

    async fn get_libraries(&self) -> Result<Vec<Library>> {
        self.calls.borrow_mut().push("libraries".to_string());
        self.libraries
            .clone()
            .ok_or_else(|| ApiError::Transport("offline".to_string()))
    }

    async fn update_song_tags(
        &self,
        song_id: &str,
        _patch: &SongTagPatch,
    ) -> Result<TagUpdateOutcome> {
        self.answer(format!("song-tags:{song_id}"), song_id)?;
        Ok(self.tag_outcome.unwrap_or(TagUpdateOutcome {
            success_count: 1,
            error_count: 0,
        }))
    }

    async fn update_album_tags(
        &self,
        album_id: &str,
        _patch: &AlbumTagPatch,
    ) -> Result<TagUpdateOutcome> {
        self.answer(format!("album-tags:{album_id}"), album_id)?;
        Ok(self.tag_outcome.unwrap_or_default())
    }

    async fn add_songs_to_playlist(&self, playlist_id: &str, song_ids: &[String]) -> Result<()> {
        self.answer(
            format!("playlist:{playlist_id}:{}", song_ids.join(",")),
            playlist_id,
        )
    }

    async fn create_share(
        &self,
        ids: &[String],
        _description: Option<&str>,
        _expires: Option<DateTime<Utc>>,
    ) -> Result<Share> {
        self.answer(format!("share:{}", ids.join(",")), "share")?;
        Ok(Share {
            id: "sh1".to_string(),
            url: "https://music.example/share/sh1".to_string(),
            description: None,
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    seen: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last_level(&self) -> Option<NotificationLevel> {
        self.seen.borrow().last().map(|n| n.level)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingList {
    cleared: Cell<usize>,
    changed: RefCell<Vec<ResourceKind>>,
}

impl RecordingList {
    pub fn cleared(&self) -> usize {
        self.cleared.get()
    }

    pub fn changed(&self) -> Vec<ResourceKind> {
        self.changed.borrow().clone()
    }
}

impl ListHandle for RecordingList {
    fn clear_selection(&self) {
        self.cleared.set(self.cleared.get() + 1);
    }

    fn data_changed(&self, kind: ResourceKind) {
        self.changed.borrow_mut().push(kind);
    }
}
