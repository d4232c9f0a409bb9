use super::edit_fields::{EditFooter, TextField};
use crate::actions::{save_album, AlbumForm, SaveOutcome, Selection};
use crate::api::*;
use crate::components::{
    session_client, AppView, Icon, ListRevisions, Notifier, SettingsReady, ViewListHandle,
};
use crate::db::AdminSettings;
use dioxus::prelude::*;

#[component]
pub fn AlbumEditView(id: String) -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let ready = use_context::<SettingsReady>().0;

    let album = use_resource(use_reactive!(|(id,)| async move {
        if !ready() {
            return None;
        }
        let client = session_client(&settings()).await;
        Some(client.get_album(&id).await.map_err(|e| e.user_message()))
    }));

    match album() {
        Some(Some(Ok(album))) => rsx! {
            AlbumEditForm { key: "{album.id}", album }
        },
        Some(Some(Err(message))) => rsx! {
            p { class: "py-10 text-center text-red-400", "{message}" }
        },
        _ => rsx! {
            div { class: "flex items-center justify-center py-20",
                Icon { name: "loader".to_string(), class: "w-8 h-8 text-zinc-500 animate-spin".to_string() }
            }
        },
    }
}

#[component]
fn AlbumEditForm(album: Album) -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let notifier = use_context::<Notifier>();
    let revisions = use_context::<ListRevisions>();
    let selection = use_context::<Signal<Selection>>();
    let navigator = use_navigator();

    let mut form = use_signal({
        let album = album.clone();
        move || AlbumForm::from_album(&album)
    });
    let mut saving = use_signal(|| false);

    let on_save = {
        let album = album.clone();
        move |_: ()| {
            if saving() {
                return;
            }
            let original = album.clone();
            let snapshot = form();
            let settings = settings();
            saving.set(true);
            spawn(async move {
                let client = session_client(&settings).await;
                let list = ViewListHandle::new(selection, revisions);
                let outcome = save_album(
                    settings.save_strategy,
                    &client,
                    &original,
                    &snapshot,
                    &notifier,
                    &list,
                )
                .await;
                saving.set(false);
                if outcome == SaveOutcome::NavigateBack {
                    navigator.push(AppView::AlbumsView {});
                }
            });
        }
    };

    let current = form();

    rsx! {
        div { class: "max-w-2xl space-y-6",
            header { class: "page-header gap-1",
                h1 { class: "page-title", "Edit album" }
                p { class: "text-sm text-zinc-500",
                    "{album.name} · changes are written to all {album.song_count} songs"
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                TextField {
                    label: "Name".to_string(),
                    value: current.name.clone(),
                    oninput: move |v: String| form.write().name = v,
                }
                TextField {
                    label: "Artist".to_string(),
                    value: current.artist.clone(),
                    oninput: move |v: String| form.write().artist = v,
                }
                TextField {
                    label: "Album artist".to_string(),
                    value: current.album_artist.clone(),
                    oninput: move |v: String| form.write().album_artist = v,
                }
                TextField {
                    label: "Genre".to_string(),
                    value: current.genre.clone(),
                    oninput: move |v: String| form.write().genre = v,
                }
                TextField {
                    label: "Year".to_string(),
                    value: current.year.clone(),
                    numeric: true,
                    oninput: move |v: String| form.write().year = v,
                }
                TextField {
                    label: "Comment".to_string(),
                    value: current.comment.clone(),
                    oninput: move |v: String| form.write().comment = v,
                }
            }
            EditFooter {
                strategy: settings().save_strategy,
                saving: saving(),
                on_save,
                on_cancel: move |_: ()| {
                    navigator.push(AppView::AlbumsView {});
                },
            }
        }
    }
}
