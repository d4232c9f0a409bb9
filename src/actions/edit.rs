//! Save paths of the song and album edit forms.

use super::backend::LibraryBackend;
use super::context::{ListHandle, Notification, NotificationSink};
use crate::api::{
    Album, AlbumTagPatch, ApiError, ResourceKind, Song, SongTagPatch, TagUpdateOutcome,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How the edit forms persist changes. Chosen once from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStrategy {
    /// The server has no write path; tags change only through library scans.
    Disabled,
    /// Send only the changed fields to the native tag endpoints.
    #[default]
    PatchUpdate,
}

impl SaveStrategy {
    pub fn label(self) -> &'static str {
        match self {
            Self::Disabled => "Read-only (library scans)",
            Self::PatchUpdate => "Write tags to files",
        }
    }
}

/// Where the form goes after a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    NavigateBack,
    StayOnForm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongForm {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
    pub track: String,
    pub disc: String,
    pub comment: String,
}

impl SongForm {
    pub fn from_song(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone().unwrap_or_default(),
            album: song.album.clone().unwrap_or_default(),
            genre: song.genre.clone().unwrap_or_default(),
            year: number_field(song.year),
            track: number_field(song.track),
            disc: number_field(song.disc_number),
            comment: song.comment.clone().unwrap_or_default(),
        }
    }

    /// Fields that differ from `original`. Blank number fields count as unchanged.
    pub fn patch_against(&self, original: &Song) -> Result<SongTagPatch, ApiError> {
        Ok(SongTagPatch {
            title: changed_text(&self.title, Some(&original.title)),
            artist: changed_text(&self.artist, original.artist.as_deref()),
            album: changed_text(&self.album, original.album.as_deref()),
            genre: changed_text(&self.genre, original.genre.as_deref()),
            year: changed_number("Year", &self.year, original.year)?,
            track_number: changed_number("Track", &self.track, original.track)?,
            disc_number: changed_number("Disc", &self.disc, original.disc_number)?,
            comment: changed_text(&self.comment, original.comment.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumForm {
    pub name: String,
    pub artist: String,
    pub album_artist: String,
    pub genre: String,
    pub year: String,
    pub comment: String,
}

impl AlbumForm {
    pub fn from_album(album: &Album) -> Self {
        Self {
            name: album.name.clone(),
            artist: album.artist.clone(),
            album_artist: album.album_artist.clone().unwrap_or_default(),
            genre: album.genre.clone().unwrap_or_default(),
            year: number_field(album.year),
            comment: album.comment.clone().unwrap_or_default(),
        }
    }

    pub fn patch_against(&self, original: &Album) -> Result<AlbumTagPatch, ApiError> {
        Ok(AlbumTagPatch {
            name: changed_text(&self.name, Some(&original.name)),
            artist: changed_text(&self.artist, Some(&original.artist)),
            album_artist: changed_text(&self.album_artist, original.album_artist.as_deref()),
            genre: changed_text(&self.genre, original.genre.as_deref()),
            year: changed_number("Year", &self.year, original.year)?,
            comment: changed_text(&self.comment, original.comment.as_deref()),
        })
    }
}

fn number_field(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn changed_text(edited: &str, original: Option<&str>) -> Option<String> {
    let edited = edited.trim();
    (edited != original.unwrap_or_default().trim()).then(|| edited.to_string())
}

fn changed_number(
    label: &str,
    edited: &str,
    original: Option<u32>,
) -> Result<Option<i32>, ApiError> {
    let edited = edited.trim();
    if edited.is_empty() {
        return Ok(None);
    }
    let value: i32 = edited
        .parse()
        .map_err(|_| ApiError::validation(format!("{label} must be a whole number")))?;
    let unchanged = original.is_some_and(|orig| i64::from(orig) == i64::from(value));
    Ok((!unchanged).then_some(value))
}

fn disabled_message(kind: ResourceKind) -> String {
    format!(
        "{} editing is not currently supported. Metadata is updated during library scans.",
        kind.title()
    )
}

fn updated_message(outcome: TagUpdateOutcome) -> Notification {
    let message = format!(
        "Updated {}, {} {}",
        ResourceKind::Song.count_label(outcome.success_count as usize),
        outcome.error_count,
        if outcome.error_count == 1 { "error" } else { "errors" }
    );
    if outcome.error_count == 0 {
        Notification::success(message)
    } else {
        Notification::warning(message)
    }
}

/// Pre-flight checks shared by both forms. `Err` carries the notification to show.
fn prepare<T>(
    kind: ResourceKind,
    id: &str,
    patch: Result<T, ApiError>,
    is_empty: impl FnOnce(&T) -> bool,
) -> Result<T, Notification> {
    if id.trim().is_empty() {
        return Err(Notification::error(format!(
            "Cannot save: missing {} ID",
            kind.singular()
        )));
    }
    let patch = patch.map_err(|err| Notification::error(err.to_string()))?;
    if is_empty(&patch) {
        return Err(Notification::error("Nothing to update"));
    }
    Ok(patch)
}

fn report<N, L>(
    kind: ResourceKind,
    id: &str,
    result: crate::api::Result<TagUpdateOutcome>,
    notifier: &N,
    list: &L,
) -> SaveOutcome
where
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    match result {
        Ok(outcome) => {
            info!(
                kind = kind.singular(),
                id,
                updated = outcome.success_count,
                errors = outcome.error_count,
                "tags updated"
            );
            notifier.notify(updated_message(outcome));
            list.data_changed(kind);
            if kind == ResourceKind::Album {
                list.data_changed(ResourceKind::Song);
            }
            SaveOutcome::NavigateBack
        }
        Err(err) => {
            warn!(kind = kind.singular(), id, "tag update failed: {err}");
            notifier.notify(Notification::warning(format!(
                "Failed to update {} metadata: {}",
                kind.singular(),
                err.user_message()
            )));
            SaveOutcome::StayOnForm
        }
    }
}

pub async fn save_song<B, N, L>(
    strategy: SaveStrategy,
    backend: &B,
    original: &Song,
    form: &SongForm,
    notifier: &N,
    list: &L,
) -> SaveOutcome
where
    B: LibraryBackend,
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    let kind = ResourceKind::Song;
    if strategy == SaveStrategy::Disabled {
        notifier.notify(Notification::warning(disabled_message(kind)));
        return SaveOutcome::NavigateBack;
    }

    let patch = match prepare(kind, &original.id, form.patch_against(original), |p| {
        p.is_empty()
    }) {
        Ok(patch) => patch,
        Err(notification) => {
            notifier.notify(notification);
            return SaveOutcome::StayOnForm;
        }
    };

    let result = backend.update_song_tags(&original.id, &patch).await;
    report(kind, &original.id, result, notifier, list)
}

pub async fn save_album<B, N, L>(
    strategy: SaveStrategy,
    backend: &B,
    original: &Album,
    form: &AlbumForm,
    notifier: &N,
    list: &L,
) -> SaveOutcome
where
    B: LibraryBackend,
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    let kind = ResourceKind::Album;
    if strategy == SaveStrategy::Disabled {
        notifier.notify(Notification::warning(disabled_message(kind)));
        return SaveOutcome::NavigateBack;
    }

    let patch = match prepare(kind, &original.id, form.patch_against(original), |p| {
        p.is_empty()
    }) {
        Ok(patch) => patch,
        Err(notification) => {
            notifier.notify(notification);
            return SaveOutcome::StayOnForm;
        }
    };

    let result = backend.update_album_tags(&original.id, &patch).await;
    report(kind, &original.id, result, notifier, list)
}
