use crate::actions::{ListHandle, Selection};
use crate::api::{list_cache_prefix, NavidromeClient, ResourceKind, SessionCredentials};
use crate::cache_service;
use crate::db::{load_session, AdminSettings};
use dioxus::prelude::*;
use tracing::warn;

/// Per-kind counters that list views read; a bump makes them refetch.
#[derive(Clone, Copy, PartialEq)]
pub struct ListRevisions {
    songs: Signal<u64>,
    albums: Signal<u64>,
}

impl ListRevisions {
    pub fn new(songs: Signal<u64>, albums: Signal<u64>) -> Self {
        Self { songs, albums }
    }

    fn signal(&self, kind: ResourceKind) -> Signal<u64> {
        match kind {
            ResourceKind::Song => self.songs,
            ResourceKind::Album => self.albums,
        }
    }

    pub fn revision(&self, kind: ResourceKind) -> u64 {
        self.signal(kind)()
    }

    pub fn bump(&self, kind: ResourceKind) {
        let mut revision = self.signal(kind);
        let next = *revision.peek() + 1;
        revision.set(next);
    }
}

/// `ListHandle` of a mounted list view.
#[derive(Clone, Copy)]
pub struct ViewListHandle {
    selection: Signal<Selection>,
    revisions: ListRevisions,
}

impl ViewListHandle {
    pub fn new(selection: Signal<Selection>, revisions: ListRevisions) -> Self {
        Self {
            selection,
            revisions,
        }
    }
}

impl ListHandle for ViewListHandle {
    fn clear_selection(&self) {
        let mut selection = self.selection;
        selection.set(Selection::default());
    }

    fn data_changed(&self, kind: ResourceKind) {
        cache_service::remove_by_prefix(list_cache_prefix(kind));
        self.revisions.bump(kind);
    }
}

/// Client for the current session, read from storage at call time.
pub async fn session_client(settings: &AdminSettings) -> NavidromeClient {
    let credentials = match load_session().await {
        Ok(credentials) => credentials,
        Err(err) => {
            warn!("could not read session credentials: {err}");
            SessionCredentials::default()
        }
    };
    NavidromeClient::new(&settings.server_url, credentials)
}
