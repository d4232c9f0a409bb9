use crate::actions::{album_confirm_message, delete_album, Confirmed, Selection};
use crate::api::*;
use crate::components::{
    session_client, AppView, BackgroundWork, ConfirmDialog, Icon, ListRevisions, Notifier,
    SettingsReady, ViewListHandle,
};
use crate::db::{load_session, AdminSettings};
use dioxus::prelude::*;

#[component]
pub fn AlbumsView() -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let ready = use_context::<SettingsReady>().0;
    let revisions = use_context::<ListRevisions>();

    let mut page = use_signal(|| 0u32);
    let mut search_query = use_signal(String::new);
    let is_admin = use_resource(|| async {
        load_session().await.map(|s| s.is_admin).unwrap_or(false)
    });

    let albums = use_resource(move || {
        let settings = settings();
        let ready = ready();
        revisions.revision(ResourceKind::Album);
        let page = page();
        async move {
            if !ready {
                return None;
            }
            let size = settings.list_page_size;
            let client = session_client(&settings).await;
            Some(
                client
                    .get_albums(page * size, size)
                    .await
                    .map_err(|e| e.user_message()),
            )
        }
    });

    let page_size = settings().list_page_size as usize;
    let can_delete = is_admin().unwrap_or(false);
    let current = albums();
    let loaded_count = match &current {
        Some(Some(Ok(albums))) => albums.len(),
        _ => 0,
    };

    rsx! {
        div { class: "space-y-6",
            header { class: "page-header gap-4",
                h1 { class: "page-title", "Albums" }
                div { class: "relative w-full md:max-w-xs",
                    Icon {
                        name: "search".to_string(),
                        class: "absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4 text-zinc-500".to_string(),
                    }
                    input {
                        class: "w-full pl-10 pr-4 py-2.5 bg-zinc-800/50 border border-zinc-700/50 rounded-xl text-sm text-white placeholder:text-zinc-500 focus:outline-none focus:border-emerald-500/50",
                        placeholder: "Filter this page",
                        value: search_query,
                        oninput: move |e| search_query.set(e.value()),
                    }
                }
            }

            {match current {
                Some(Some(Ok(albums))) => {
                    let query = search_query().trim().to_lowercase();
                    let filtered: Vec<Album> = albums
                        .into_iter()
                        .filter(|album| {
                            query.is_empty()
                                || album.name.to_lowercase().contains(&query)
                                || album.artist.to_lowercase().contains(&query)
                        })
                        .collect();

                    rsx! {
                        if filtered.is_empty() {
                            div { class: "flex flex-col items-center justify-center py-20",
                                Icon { name: "album".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                                p { class: "text-zinc-400", "No albums found" }
                            }
                        } else {
                            div { class: "divide-y divide-zinc-900",
                                for album in filtered {
                                    AlbumRow { key: "{album.id}", album: album.clone(), can_delete }
                                }
                            }
                        }
                    }
                }
                Some(Some(Err(message))) => rsx! {
                    p { class: "py-10 text-center text-red-400", "{message}" }
                },
                _ => rsx! {
                    div { class: "flex items-center justify-center py-20",
                        Icon { name: "loader".to_string(), class: "w-8 h-8 text-zinc-500 animate-spin".to_string() }
                    }
                },
            }}

            div { class: "flex items-center justify-between text-sm text-zinc-400",
                button {
                    class: "px-3 py-1.5 rounded-lg bg-zinc-800/50 hover:text-white disabled:opacity-40",
                    disabled: page() == 0,
                    onclick: move |_| {
                        let current = page();
                        page.set(current.saturating_sub(1));
                    },
                    "Previous"
                }
                span { "Page {page() + 1}" }
                button {
                    class: "px-3 py-1.5 rounded-lg bg-zinc-800/50 hover:text-white disabled:opacity-40",
                    disabled: loaded_count < page_size,
                    onclick: move |_| {
                        let current = page();
                        page.set(current + 1);
                    },
                    "Next"
                }
            }
        }
    }
}

#[component]
fn AlbumRow(album: Album, can_delete: bool) -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let notifier = use_context::<Notifier>();
    let revisions = use_context::<ListRevisions>();
    let selection = use_context::<Signal<Selection>>();
    let navigator = use_navigator();
    let background = use_context::<BackgroundWork>();

    let mut pending_delete = use_signal(|| None::<String>);

    let on_confirm_delete = {
        let album = album.clone();
        move |_: ()| {
            let album = album.clone();
            let settings = settings();
            background.start(async move {
                let client = session_client(&settings).await;
                let list = ViewListHandle::new(selection, revisions);
                delete_album(&client, &album, &Confirmed, &notifier, &list).await;
            });
        }
    };

    let year = album.year.map(|y| y.to_string()).unwrap_or_default();
    let songs = ResourceKind::Song.count_label(album.song_count as usize);

    rsx! {
        div { class: "flex items-center gap-4 py-3",
            Icon { name: "album".to_string(), class: "w-8 h-8 text-zinc-600".to_string() }
            div { class: "flex-1 min-w-0",
                p { class: "text-white font-medium truncate", "{album.name}" }
                p { class: "text-xs text-zinc-500 truncate",
                    "{album.artist} · {songs} · {format_duration(album.duration)} {year}"
                }
            }
            button {
                class: "p-2 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800/60",
                aria_label: "Edit album",
                onclick: {
                    let id = album.id.clone();
                    move |_| {
                        navigator.push(AppView::AlbumEditView { id: id.clone() });
                    }
                },
                Icon { name: "edit".to_string(), class: "w-4 h-4".to_string() }
            }
            if can_delete {
                button {
                    class: "p-2 rounded-lg text-zinc-400 hover:text-red-400 hover:bg-zinc-800/60 disabled:opacity-40",
                    aria_label: "Delete album",
                    disabled: background.is_running(),
                    onclick: {
                        let message = album_confirm_message(&album);
                        move |_| pending_delete.set(Some(message.clone()))
                    },
                    Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }

        ConfirmDialog {
            title: "Delete album".to_string(),
            message: pending_delete,
            confirm_label: "Delete".to_string(),
            on_confirm: on_confirm_delete,
        }
    }
}
