use super::edit_fields::{EditFooter, TextField};
use crate::actions::{save_song, SaveOutcome, Selection, SongForm};
use crate::api::*;
use crate::components::{
    session_client, AppView, Icon, ListRevisions, Notifier, SettingsReady, ViewListHandle,
};
use crate::db::AdminSettings;
use dioxus::prelude::*;

#[component]
pub fn SongEditView(id: String) -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let ready = use_context::<SettingsReady>().0;

    let song = use_resource(use_reactive!(|(id,)| async move {
        if !ready() {
            return None;
        }
        let client = session_client(&settings()).await;
        Some(client.get_song(&id).await.map_err(|e| e.user_message()))
    }));

    match song() {
        Some(Some(Ok(song))) => rsx! {
            SongEditForm { key: "{song.id}", song }
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
fn SongEditForm(song: Song) -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let notifier = use_context::<Notifier>();
    let revisions = use_context::<ListRevisions>();
    let selection = use_context::<Signal<Selection>>();
    let navigator = use_navigator();

    let mut form = use_signal({
        let song = song.clone();
        move || SongForm::from_song(&song)
    });
    let mut saving = use_signal(|| false);

    let on_save = {
        let song = song.clone();
        move |_: ()| {
            if saving() {
                return;
            }
            let original = song.clone();
            let snapshot = form();
            let settings = settings();
            saving.set(true);
            spawn(async move {
                let client = session_client(&settings).await;
                let list = ViewListHandle::new(selection, revisions);
                let outcome = save_song(
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
                    navigator.push(AppView::SongsView {});
                }
            });
        }
    };

    let current = form();

    rsx! {
        div { class: "max-w-2xl space-y-6",
            header { class: "page-header gap-1",
                h1 { class: "page-title", "Edit song" }
                p { class: "text-sm text-zinc-500", "{song.title}" }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                TextField {
                    label: "Title".to_string(),
                    value: current.title.clone(),
                    oninput: move |v: String| form.write().title = v,
                }
                TextField {
                    label: "Artist".to_string(),
                    value: current.artist.clone(),
                    oninput: move |v: String| form.write().artist = v,
                }
                TextField {
                    label: "Album".to_string(),
                    value: current.album.clone(),
                    oninput: move |v: String| form.write().album = v,
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
                    label: "Track".to_string(),
                    value: current.track.clone(),
                    numeric: true,
                    oninput: move |v: String| form.write().track = v,
                }
                TextField {
                    label: "Disc".to_string(),
                    value: current.disc.clone(),
                    numeric: true,
                    oninput: move |v: String| form.write().disc = v,
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
                    navigator.push(AppView::SongsView {});
                },
            }
        }
    }
}
