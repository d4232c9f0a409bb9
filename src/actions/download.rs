use super::backend::LibraryBackend;
use super::context::{ListHandle, Notification, NotificationSink};
use crate::api::{DownloadReceipt, DownloadRequest, Library, ResourceKind};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadForm {
    pub url: String,
    /// Library id; empty selects the server default.
    pub library: String,
}

impl DownloadForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded(DownloadReceipt),
    /// Inline error for the dialog; the form keeps its values.
    Rejected(String),
}

pub async fn submit_download<B, N, L>(
    backend: &B,
    form: &DownloadForm,
    notifier: &N,
    list: &L,
) -> DownloadOutcome
where
    B: LibraryBackend,
    N: NotificationSink + ?Sized,
    L: ListHandle + ?Sized,
{
    let Some(request) = DownloadRequest::new(&form.url, &form.library) else {
        return DownloadOutcome::Rejected("URL is required".to_string());
    };

    match backend.download_song(&request).await {
        Ok(receipt) => {
            info!(url = %request.url, file = ?receipt.file, "song downloaded");
            let message = match receipt.file.as_deref() {
                Some(file) if !file.is_empty() => {
                    format!("Song downloaded successfully: {file}")
                }
                _ => "Song downloaded successfully".to_string(),
            };
            notifier.notify(Notification::success(message));
            list.data_changed(ResourceKind::Song);
            DownloadOutcome::Downloaded(receipt)
        }
        Err(err) => {
            warn!(url = %request.url, "download failed: {err}");
            DownloadOutcome::Rejected(err.user_message())
        }
    }
}

/// Libraries offered in the dialog. Any failure, or an empty answer, falls
/// back to the single default library.
pub async fn load_libraries<B: LibraryBackend>(backend: &B) -> Vec<Library> {
    match backend.get_libraries().await {
        Ok(libraries) if !libraries.is_empty() => libraries,
        Ok(_) => vec![Library::fallback()],
        Err(err) => {
            warn!("could not load libraries: {err}");
            vec![Library::fallback()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{FakeBackend, RecordingList, RecordingSink};

    fn form(url: &str) -> DownloadForm {
        DownloadForm {
            url: url.to_string(),
            library: String::new(),
        }
    }

    #[tokio::test]
    async fn blank_url_is_rejected_without_a_call() {
        let backend = FakeBackend::default();
        let sink = RecordingSink::default();
        let list = RecordingList::default();

        let outcome = submit_download(&backend, &form("   "), &sink, &list).await;

        assert_eq!(outcome, DownloadOutcome::Rejected("URL is required".to_string()));
        assert!(backend.calls().is_empty());
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn success_notifies_with_file_and_refreshes_songs() {
        let backend = FakeBackend::default();
        let sink = RecordingSink::default();
        let list = RecordingList::default();

        let outcome =
            submit_download(&backend, &form(" https://youtu.be/abc "), &sink, &list).await;

        assert!(matches!(outcome, DownloadOutcome::Downloaded(_)));
        assert_eq!(backend.calls(), vec!["download:https://youtu.be/abc"]);
        assert_eq!(
            sink.messages(),
            vec!["Song downloaded successfully: Artist - Title.mp3".to_string()]
        );
        assert_eq!(list.changed(), vec![ResourceKind::Song]);
    }

    #[tokio::test]
    async fn backend_failure_stays_inline() {
        let url = "https://youtu.be/gone";
        let backend = FakeBackend::default().fail_with(url, "Video unavailable");
        let sink = RecordingSink::default();
        let list = RecordingList::default();

        let outcome = submit_download(&backend, &form(url), &sink, &list).await;

        assert_eq!(outcome, DownloadOutcome::Rejected("Video unavailable".to_string()));
        assert!(sink.messages().is_empty());
        assert!(list.changed().is_empty());
    }

    #[tokio::test]
    async fn libraries_fall_back_to_default() {
        let offline = FakeBackend::default();
        assert_eq!(load_libraries(&offline).await, vec![Library::fallback()]);

        let rock = Library {
            id: "2".to_string(),
            name: "Rock".to_string(),
        };
        let online = FakeBackend::default().with_libraries(vec![rock.clone()]);
        assert_eq!(load_libraries(&online).await, vec![rock]);
    }
}
