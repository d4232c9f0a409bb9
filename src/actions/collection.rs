//! Actions that hand the whole selection over at once: queue, playlist, share.

use super::backend::LibraryBackend;
use super::context::{ListHandle, Notification, NotificationSink};
use super::selection::Selection;
use crate::api::{Playlist, ResourceKind, Share, Song};
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayQueue {
    songs: Vec<Song>,
    current: Option<usize>,
}

impl PlayQueue {
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Song> {
        self.current.and_then(|index| self.songs.get(index))
    }

    pub fn play_now(&mut self, songs: Vec<Song>) {
        self.current = (!songs.is_empty()).then_some(0);
        self.songs = songs;
    }

    /// Inserts right after the current entry, or at the end when nothing plays.
    pub fn play_next(&mut self, songs: Vec<Song>) {
        let at = self
            .current
            .map(|index| index + 1)
            .unwrap_or(self.songs.len());
        self.songs.splice(at..at, songs);
    }

    pub fn add_to_queue(&mut self, songs: Vec<Song>) {
        self.songs.extend(songs);
    }

    /// Makes `index` the current entry; out-of-range indexes are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.songs.len() {
            self.current = Some(index);
        }
    }

    /// Drops one entry, keeping `current` on the same song where it survives.
    pub fn remove(&mut self, index: usize) {
        if index >= self.songs.len() {
            return;
        }
        self.songs.remove(index);
        self.current = match self.current {
            Some(current) if current > index => Some(current - 1),
            Some(current) if current == index && current >= self.songs.len() => None,
            other => other,
        };
    }

    pub fn total_duration(&self) -> u32 {
        self.songs.iter().map(|song| song.duration).sum()
    }

    pub fn clear(&mut self) {
        self.songs.clear();
        self.current = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueAction {
    PlayNow,
    PlayNext,
    AddToQueue,
    Shuffle,
}

impl QueueAction {
    fn done_message(self, count: usize) -> String {
        let songs = ResourceKind::Song.count_label(count);
        match self {
            Self::PlayNow => format!("Playing {songs}"),
            Self::Shuffle => format!("Shuffling {songs}"),
            Self::PlayNext => format!("{songs} will play next"),
            Self::AddToQueue => format!("Added {songs} to the queue"),
        }
    }
}

/// Looks up the selected ids in the loaded page, keeping selection order and
/// skipping songs whose file is missing.
pub fn resolve_songs(selection: &Selection, loaded: &[Song]) -> Vec<Song> {
    selection
        .ids()
        .iter()
        .filter_map(|id| loaded.iter().find(|song| &song.id == id))
        .filter(|song| !song.missing)
        .cloned()
        .collect()
}

/// Applies a queue action and returns how many songs it queued.
pub fn apply_queue_action<R, N, L>(
    action: QueueAction,
    selection: &Selection,
    loaded: &[Song],
    queue: &mut PlayQueue,
    rng: &mut R,
    notifier: &N,
    list: &L,
) -> usize
where
    R: Rng + ?Sized,
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    let mut songs = resolve_songs(selection, loaded);
    if songs.is_empty() {
        notifier.notify(Notification::warning("None of the selected songs can be played"));
        return 0;
    }

    let count = songs.len();
    match action {
        QueueAction::PlayNow => queue.play_now(songs),
        QueueAction::Shuffle => {
            songs.shuffle(rng);
            queue.play_now(songs);
        }
        QueueAction::PlayNext => queue.play_next(songs),
        QueueAction::AddToQueue => queue.add_to_queue(songs),
    }

    notifier.notify(Notification::info(action.done_message(count)));
    list.clear_selection();
    count
}

pub async fn add_selection_to_playlist<B, N, L>(
    backend: &B,
    selection: &Selection,
    playlist: &Playlist,
    notifier: &N,
    list: &L,
) -> bool
where
    B: LibraryBackend,
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    if selection.is_empty() {
        notifier.notify(Notification::error("No songs selected"));
        return false;
    }

    match backend
        .add_songs_to_playlist(&playlist.id, selection.ids())
        .await
    {
        Ok(()) => {
            info!(playlist_id = %playlist.id, count = selection.len(), "songs added to playlist");
            notifier.notify(Notification::success(format!(
                "Added {} to \"{}\"",
                ResourceKind::Song.count_label(selection.len()),
                playlist.name
            )));
            list.clear_selection();
            true
        }
        Err(err) => {
            warn!(playlist_id = %playlist.id, "add to playlist failed: {err}");
            notifier.notify(Notification::error(err.user_message()));
            false
        }
    }
}

pub async fn share_selection<B, N, L>(
    backend: &B,
    selection: &Selection,
    description: Option<&str>,
    expiry_days: Option<u32>,
    notifier: &N,
    list: &L,
) -> Option<Share>
where
    B: LibraryBackend,
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    if selection.is_empty() {
        notifier.notify(Notification::error("Nothing to share"));
        return None;
    }

    let expires = expiry_days
        .filter(|days| *days > 0)
        .map(|days| Utc::now() + Duration::days(i64::from(days)));

    match backend
        .create_share(selection.ids(), description, expires)
        .await
    {
        Ok(share) => {
            info!(share_id = %share.id, count = selection.len(), "share created");
            notifier.notify(Notification::success(format!(
                "Share link created: {}",
                share.url
            )));
            list.clear_selection();
            Some(share)
        }
        Err(err) => {
            warn!("share failed: {err}");
            notifier.notify(Notification::error(err.user_message()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{FakeBackend, RecordingList, RecordingSink};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn song(id: &str) -> Song {
        Song {
            id: id.to_string(),
            title: id.to_uppercase(),
            ..Default::default()
        }
    }

    fn ids(queue: &PlayQueue) -> Vec<&str> {
        queue.songs().iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn resolve_keeps_selection_order_and_skips_missing() {
        let mut gone = song("s3");
        gone.missing = true;
        let loaded = vec![song("s1"), song("s2"), gone];
        let selection = Selection::new(["s2", "s3", "unknown", "s1"]);

        let resolved = resolve_songs(&selection, &loaded);
        let resolved: Vec<&str> = resolved.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(resolved, ["s2", "s1"]);
    }

    #[test]
    fn play_next_inserts_after_current() {
        let mut queue = PlayQueue::default();
        queue.play_now(vec![song("a"), song("b"), song("c")]);
        queue.play_next(vec![song("x"), song("y")]);
        assert_eq!(ids(&queue), ["a", "x", "y", "b", "c"]);
        assert_eq!(queue.current().map(|s| s.id.as_str()), Some("a"));

        let mut idle = PlayQueue::default();
        idle.play_next(vec![song("x")]);
        assert_eq!(ids(&idle), ["x"]);
        assert_eq!(idle.current_index(), None);
    }

    #[test]
    fn removing_entries_keeps_current_song() {
        let mut queue = PlayQueue::default();
        queue.play_now(vec![song("a"), song("b"), song("c")]);
        queue.jump_to(2);
        queue.remove(0);
        assert_eq!(ids(&queue), ["b", "c"]);
        assert_eq!(queue.current().map(|s| s.id.as_str()), Some("c"));

        queue.remove(1);
        assert_eq!(queue.current_index(), None);

        queue.jump_to(9);
        assert_eq!(queue.current_index(), None);
        queue.clear();
        assert!(queue.songs().is_empty());
    }

    #[test]
    fn queue_actions_notify_and_clear_selection() {
        let loaded = vec![song("s1"), song("s2")];
        let selection = Selection::new(["s1", "s2"]);
        let mut queue = PlayQueue::default();
        queue.play_now(vec![song("old")]);
        let sink = RecordingSink::default();
        let list = RecordingList::default();
        let mut rng = StdRng::seed_from_u64(7);

        let queued = apply_queue_action(
            QueueAction::AddToQueue,
            &selection,
            &loaded,
            &mut queue,
            &mut rng,
            &sink,
            &list,
        );

        assert_eq!(queued, 2);
        assert_eq!(ids(&queue), ["old", "s1", "s2"]);
        assert_eq!(sink.messages(), vec!["Added 2 songs to the queue".to_string()]);
        assert_eq!(list.cleared(), 1);
    }

    #[test]
    fn shuffle_replaces_queue_with_a_permutation() {
        let loaded: Vec<Song> = (0..10).map(|i| song(&format!("s{i}"))).collect();
        let selection = Selection::new(loaded.iter().map(|s| s.id.clone()));
        let mut queue = PlayQueue::default();
        let sink = RecordingSink::default();
        let list = RecordingList::default();
        let mut rng = StdRng::seed_from_u64(42);

        apply_queue_action(
            QueueAction::Shuffle,
            &selection,
            &loaded,
            &mut queue,
            &mut rng,
            &sink,
            &list,
        );

        let mut shuffled: Vec<&str> = ids(&queue);
        assert_eq!(queue.current_index(), Some(0));
        shuffled.sort_unstable();
        let mut expected: Vec<&str> = loaded.iter().map(|s| s.id.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn nothing_playable_leaves_queue_and_selection_alone() {
        let selection = Selection::new(["ghost"]);
        let mut queue = PlayQueue::default();
        let sink = RecordingSink::default();
        let list = RecordingList::default();
        let mut rng = StdRng::seed_from_u64(1);

        let queued = apply_queue_action(
            QueueAction::PlayNow,
            &selection,
            &[],
            &mut queue,
            &mut rng,
            &sink,
            &list,
        );

        assert_eq!(queued, 0);
        assert!(queue.songs().is_empty());
        assert_eq!(list.cleared(), 0);
    }

    #[tokio::test]
    async fn playlist_and_share_send_the_full_selection_once() {
        let backend = FakeBackend::default();
        let sink = RecordingSink::default();
        let list = RecordingList::default();
        let selection = Selection::new(["s1", "s2", "s3"]);
        let playlist = Playlist {
            id: "pl-1".to_string(),
            name: "Road trip".to_string(),
            ..Default::default()
        };

        assert!(add_selection_to_playlist(&backend, &selection, &playlist, &sink, &list).await);
        let share = share_selection(&backend, &selection, Some("mix"), Some(7), &sink, &list).await;

        assert!(share.is_some());
        assert_eq!(
            backend.calls(),
            vec!["playlist:pl-1:s1,s2,s3", "share:s1,s2,s3"]
        );
        assert_eq!(
            sink.messages(),
            vec![
                "Added 3 songs to \"Road trip\"".to_string(),
                "Share link created: https://music.example/share/sh1".to_string(),
            ]
        );
        assert_eq!(list.cleared(), 2);
    }
}
