//! Sequential bulk deletion with partial-failure accounting.
//!
//! One backend call per selected id, awaited in order. A classified failure
//! is counted and the loop moves on; a transport error stops the batch.

use super::backend::LibraryBackend;
use super::context::{ConfirmPrompt, ListHandle, Notification, NotificationSink};
use super::selection::Selection;
use crate::api::{Album, ApiError, ResourceKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Shared marker that a bulk action is in flight.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(self.0.clone()))
    }
}

struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Success,
    Failure(String),
}

/// Running success/failure counters of one bulk delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteTally {
    pub succeeded: usize,
    pub failed: usize,
}

impl DeleteTally {
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Success => self.succeeded += 1,
            ItemOutcome::Failure(_) => self.failed += 1,
        }
    }

    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// `"Deleted 3 songs"` when nothing failed, `"Deleted 2 songs, 1 failed"` otherwise.
    pub fn summary(&self, kind: ResourceKind) -> Notification {
        if self.failed == 0 {
            Notification::success(format!("Deleted {}", kind.count_label(self.succeeded)))
        } else {
            Notification::warning(format!(
                "Deleted {}, {} failed",
                kind.count_label(self.succeeded),
                self.failed
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The user said no; nothing was sent.
    Declined,
    Completed(DeleteTally),
    /// A transport error stopped the batch after `tally.attempted()` calls.
    Aborted { tally: DeleteTally, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkError {
    #[error("No {0} selected")]
    EmptySelection(&'static str),
    #[error("Another bulk action is still running")]
    Busy,
}

pub fn confirm_message(kind: ResourceKind, count: usize) -> String {
    format!(
        "Are you sure you want to delete {}? This action cannot be undone.",
        kind.count_label(count)
    )
}

/// Splits a delete result into a per-item outcome, or the transport error
/// that must end the batch.
fn classify(result: crate::api::Result<()>) -> Result<ItemOutcome, ApiError> {
    match result {
        Ok(()) => Ok(ItemOutcome::Success),
        Err(err) if err.is_transport() => Err(err),
        Err(err) => Ok(ItemOutcome::Failure(err.to_string())),
    }
}

pub struct BulkDelete<'a, B> {
    backend: &'a B,
    busy: &'a BusyFlag,
}

impl<'a, B: LibraryBackend> BulkDelete<'a, B> {
    pub fn new(backend: &'a B, busy: &'a BusyFlag) -> Self {
        Self { backend, busy }
    }

    pub async fn run<P, N, L>(
        &self,
        kind: ResourceKind,
        selection: &Selection,
        prompt: &P,
        notifier: &N,
        list: &L,
    ) -> Result<BulkOutcome, BulkError>
    where
        P: ConfirmPrompt + ?Sized,
        N: NotificationSink + ?Sized,
        L: ListHandle + ?Sized,
    {
        if selection.is_empty() {
            let err = BulkError::EmptySelection(kind.plural());
            notifier.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        let Some(_guard) = self.busy.acquire() else {
            notifier.notify(Notification::warning(BulkError::Busy.to_string()));
            return Err(BulkError::Busy);
        };

        if !prompt.confirm(&confirm_message(kind, selection.len())) {
            debug!(kind = kind.singular(), count = selection.len(), "bulk delete declined");
            return Ok(BulkOutcome::Declined);
        }

        let mut tally = DeleteTally::default();
        for id in selection.ids() {
            match classify(self.backend.delete_item(kind, id).await) {
                Ok(outcome) => {
                    if let ItemOutcome::Failure(message) = &outcome {
                        warn!(kind = kind.singular(), id = %id, %message, "delete failed");
                    }
                    tally.record(&outcome);
                }
                Err(err) => {
                    let error = err.user_message();
                    warn!(
                        kind = kind.singular(),
                        id = %id,
                        attempted = tally.attempted() + 1,
                        "bulk delete aborted: {error}"
                    );
                    notifier.notify(Notification::error(error.clone()));
                    if tally.succeeded > 0 {
                        list.data_changed(kind);
                    }
                    return Ok(BulkOutcome::Aborted { tally, error });
                }
            }
        }

        info!(
            kind = kind.singular(),
            succeeded = tally.succeeded,
            failed = tally.failed,
            "bulk delete finished"
        );
        notifier.notify(tally.summary(kind));
        list.clear_selection();
        list.data_changed(kind);
        Ok(BulkOutcome::Completed(tally))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumDeleteOutcome {
    Declined,
    Deleted,
    Failed(String),
}

pub fn album_confirm_message(album: &Album) -> String {
    format!(
        "Delete album \"{}\" and its {}? This action cannot be undone.",
        album.name,
        ResourceKind::Song.count_label(album.song_count as usize)
    )
}

/// Deletes a single album from its detail toolbar.
pub async fn delete_album<B, P, N, L>(
    backend: &B,
    album: &Album,
    prompt: &P,
    notifier: &N,
    list: &L,
) -> AlbumDeleteOutcome
where
    B: LibraryBackend,
    P: ConfirmPrompt + ?Sized,
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    if !prompt.confirm(&album_confirm_message(album)) {
        return AlbumDeleteOutcome::Declined;
    }

    match backend.delete_item(ResourceKind::Album, &album.id).await {
        Ok(()) => {
            info!(album_id = %album.id, name = %album.name, "album deleted");
            notifier.notify(Notification::success("Album deleted"));
            list.data_changed(ResourceKind::Album);
            list.data_changed(ResourceKind::Song);
            AlbumDeleteOutcome::Deleted
        }
        Err(err) => {
            let message = err.user_message();
            warn!(album_id = %album.id, "album delete failed: {message}");
            notifier.notify(Notification::error(message.clone()));
            AlbumDeleteOutcome::Failed(message)
        }
    }
}
