//! User-triggered library actions, independent of the UI toolkit.
//!
//! Every action takes its collaborators explicitly: a [`LibraryBackend`], a
//! [`NotificationSink`], a [`ConfirmPrompt`] where something is destroyed, and
//! the [`ListHandle`] of the view it was started from.

pub mod backend;
pub mod bulk_delete;
pub mod collection;
pub mod context;
pub mod download;
pub mod edit;
pub mod selection;

#[cfg(test)]
pub mod testing;

pub use backend::LibraryBackend;
pub use bulk_delete::{
    album_confirm_message, confirm_message, delete_album, AlbumDeleteOutcome, BulkDelete,
    BulkError, BulkOutcome, BusyFlag, DeleteTally,
};
pub use collection::{
    add_selection_to_playlist, apply_queue_action, share_selection, PlayQueue, QueueAction,
};
pub use context::{
    ConfirmPrompt, Confirmed, ListHandle, Notification, NotificationLevel, NotificationSink,
};
pub use download::{load_libraries, submit_download, DownloadForm, DownloadOutcome};
pub use edit::{save_album, save_song, AlbumForm, SaveOutcome, SaveStrategy, SongForm};
pub use selection::Selection;
