//! Routes of the admin UI.

use crate::components::views::{
    AlbumEditView, AlbumsView, QueueView, SettingsView, SongEditView, SongsView,
};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        SongsView {},
        #[route("/albums")]
        AlbumsView {},
        #[route("/songs/:id/edit")]
        SongEditView { id: String },
        #[route("/albums/:id/edit")]
        AlbumEditView { id: String },
        #[route("/queue")]
        QueueView {},
        #[route("/settings")]
        SettingsView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::SongsView {} => "Songs",
        AppView::AlbumsView {} => "Albums",
        AppView::SongEditView { .. } => "Edit song",
        AppView::AlbumEditView { .. } => "Edit album",
        AppView::QueueView {} => "Play queue",
        AppView::SettingsView {} => "Settings",
    }
}
