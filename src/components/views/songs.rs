use crate::actions::*;
use crate::api::*;
use crate::components::{
    session_client, AppView, BackgroundWork, ConfirmDialog, Icon, ListRevisions, Notifier,
    SettingsReady, ViewListHandle,
};
use crate::db::{load_session, AdminSettings};
use dioxus::prelude::*;

#[component]
pub fn SongsView() -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let ready = use_context::<SettingsReady>().0;
    let revisions = use_context::<ListRevisions>();
    let mut selection = use_context::<Signal<Selection>>();
    let navigator = use_navigator();

    let mut page = use_signal(|| 0u32);

    let songs = use_resource(move || {
        let settings = settings();
        let ready = ready();
        // Refetch whenever the song list is marked changed.
        revisions.revision(ResourceKind::Song);
        let page = page();
        async move {
            if !ready {
                return None;
            }
            let size = settings.list_page_size;
            let client = session_client(&settings).await;
            Some(
                client
                    .get_songs(page * size, size)
                    .await
                    .map_err(|e| e.user_message()),
            )
        }
    });

    let loaded: Vec<Song> = match songs() {
        Some(Some(Ok(songs))) => songs,
        _ => Vec::new(),
    };
    let page_size = settings().list_page_size as usize;
    let all_selected =
        !loaded.is_empty() && loaded.iter().all(|song| selection().contains(&song.id));

    rsx! {
        div { class: "space-y-6",
            header { class: "page-header gap-4",
                h1 { class: "page-title", "Songs" }
            }

            SongBulkActions { songs: loaded.clone() }

            {match songs() {
                Some(Some(Ok(_))) if loaded.is_empty() => rsx! {
                    div { class: "flex flex-col items-center justify-center py-20",
                        Icon { name: "music".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                        p { class: "text-zinc-400", "No songs found" }
                    }
                },
                Some(Some(Ok(_))) => rsx! {
                    table { class: "w-full text-sm",
                        thead {
                            tr { class: "text-left text-zinc-500 border-b border-zinc-800",
                                th { class: "w-10 py-2",
                                    input {
                                        r#type: "checkbox",
                                        checked: all_selected,
                                        onchange: {
                                            let ids: Vec<String> = loaded.iter().map(|s| s.id.clone()).collect();
                                            move |_| {
                                                if all_selected {
                                                    selection.set(Selection::default());
                                                } else {
                                                    selection.set(Selection::new(ids.clone()));
                                                }
                                            }
                                        },
                                    }
                                }
                                th { "Title" }
                                th { "Artist" }
                                th { "Album" }
                                th { class: "text-right", "Time" }
                                th { class: "w-10" }
                            }
                        }
                        tbody {
                            for song in loaded.iter().cloned() {
                                tr {
                                    key: "{song.id}",
                                    class: if song.missing { "border-b border-zinc-900 text-zinc-600" } else { "border-b border-zinc-900 text-zinc-200" },
                                    td { class: "py-2",
                                        input {
                                            r#type: "checkbox",
                                            checked: selection().contains(&song.id),
                                            onchange: {
                                                let id = song.id.clone();
                                                move |_| selection.write().toggle(&id)
                                            },
                                        }
                                    }
                                    td { class: "py-2 font-medium", "{song.title}" }
                                    td { "{song.artist.clone().unwrap_or_default()}" }
                                    td { "{song.album.clone().unwrap_or_default()}" }
                                    td { class: "text-right tabular-nums", "{format_duration(song.duration)}" }
                                    td { class: "text-right",
                                        button {
                                            class: "p-1 text-zinc-500 hover:text-white",
                                            aria_label: "Edit song",
                                            onclick: {
                                                let id = song.id.clone();
                                                move |_| {
                                                    navigator.push(AppView::SongEditView { id: id.clone() });
                                                }
                                            },
                                            Icon { name: "edit".to_string(), class: "w-4 h-4".to_string() }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
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
                    disabled: loaded.len() < page_size,
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

/// Toolbar over the song list, shown while songs are selected.
#[component]
fn SongBulkActions(songs: Vec<Song>) -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let notifier = use_context::<Notifier>();
    let revisions = use_context::<ListRevisions>();
    let mut selection = use_context::<Signal<Selection>>();
    let mut play_queue = use_context::<Signal<PlayQueue>>();
    let busy = use_context::<BusyFlag>();
    let background = use_context::<BackgroundWork>();

    let is_admin = use_resource(|| async {
        load_session().await.map(|s| s.is_admin).unwrap_or(false)
    });

    let mut pending_delete = use_signal(|| None::<String>);
    let mut working = use_signal(|| false);

    let playlists = use_resource(move || {
        let settings = settings();
        async move {
            let client = session_client(&settings).await;
            client.get_playlists().await.unwrap_or_default()
        }
    });

    let selected = selection();
    if selected.is_empty() {
        return rsx! {};
    }
    let list = ViewListHandle::new(selection, revisions);
    let sharing = settings().enable_sharing;

    let queue_action = {
        let songs = songs.clone();
        move |action: QueueAction| {
            let snapshot = selection();
            apply_queue_action(
                action,
                &snapshot,
                &songs,
                &mut *play_queue.write(),
                &mut rand::thread_rng(),
                &notifier,
                &list,
            );
        }
    };

    let on_confirm_delete = {
        let busy = busy.clone();
        move |_: ()| {
            let snapshot = selection();
            let settings = settings();
            let busy = busy.clone();
            background.start(async move {
                let client = session_client(&settings).await;
                let _ = BulkDelete::new(&client, &busy)
                    .run(ResourceKind::Song, &snapshot, &Confirmed, &notifier, &list)
                    .await;
            });
        }
    };

    let on_share = move |_: MouseEvent| {
        let snapshot = selection();
        let settings = settings();
        working.set(true);
        spawn(async move {
            let client = session_client(&settings).await;
            let _ = share_selection(
                &client,
                &snapshot,
                None,
                settings.share_expiry(),
                &notifier,
                &list,
            )
            .await;
            working.set(false);
        });
    };

    let on_add_to_playlist = move |evt: FormEvent| {
        let playlist_id = evt.value();
        let Some(playlist) = playlists()
            .unwrap_or_default()
            .into_iter()
            .find(|p| p.id == playlist_id)
        else {
            return;
        };
        let snapshot = selection();
        let settings = settings();
        working.set(true);
        spawn(async move {
            let client = session_client(&settings).await;
            add_selection_to_playlist(&client, &snapshot, &playlist, &notifier, &list).await;
            working.set(false);
        });
    };

    let button_class = "flex items-center gap-1.5 px-3 py-1.5 rounded-lg bg-zinc-800/60 text-zinc-200 hover:bg-zinc-700/60 text-sm disabled:opacity-40";
    let disabled = working() || background.is_running() || busy.is_busy();
    let can_delete = is_admin().unwrap_or(false);
    let count_label = ResourceKind::Song.count_label(selected.len());

    rsx! {
        div { class: "sticky top-0 z-20 flex flex-wrap items-center gap-2 p-3 rounded-xl border border-zinc-800 bg-zinc-900/90 backdrop-blur",
            span { class: "text-sm text-zinc-400", "{count_label} selected" }
            button {
                class: "mr-2 text-xs text-zinc-500 hover:text-white",
                onclick: move |_| selection.write().clear(),
                "Clear"
            }
            button {
                class: button_class,
                disabled,
                onclick: {
                    let mut run = queue_action.clone();
                    move |_| run(QueueAction::PlayNow)
                },
                Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                "Play"
            }
            button {
                class: button_class,
                disabled,
                onclick: {
                    let mut run = queue_action.clone();
                    move |_| run(QueueAction::PlayNext)
                },
                Icon { name: "play-next".to_string(), class: "w-4 h-4".to_string() }
                "Play next"
            }
            button {
                class: button_class,
                disabled,
                onclick: {
                    let mut run = queue_action.clone();
                    move |_| run(QueueAction::AddToQueue)
                },
                Icon { name: "queue".to_string(), class: "w-4 h-4".to_string() }
                "Add to queue"
            }
            button {
                class: button_class,
                disabled,
                onclick: {
                    let mut run = queue_action.clone();
                    move |_| run(QueueAction::Shuffle)
                },
                Icon { name: "shuffle".to_string(), class: "w-4 h-4".to_string() }
                "Shuffle"
            }
            select {
                class: "px-2 py-1.5 rounded-lg bg-zinc-800/60 text-sm text-zinc-200",
                disabled,
                value: "",
                onchange: on_add_to_playlist,
                option { value: "", "Add to playlist..." }
                for playlist in playlists().unwrap_or_default() {
                    option { key: "{playlist.id}", value: "{playlist.id}", "{playlist.name}" }
                }
            }
            if sharing {
                button {
                    class: button_class,
                    disabled,
                    onclick: on_share,
                    Icon { name: "share".to_string(), class: "w-4 h-4".to_string() }
                    "Share"
                }
            }
            if can_delete {
                button {
                    class: "flex items-center gap-1.5 px-3 py-1.5 rounded-lg bg-red-600/80 text-white hover:bg-red-500 text-sm disabled:opacity-40",
                    disabled,
                    onclick: move |_| {
                        pending_delete.set(Some(confirm_message(ResourceKind::Song, selected.len())));
                    },
                    Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                    "Delete"
                }
            }
        }

        ConfirmDialog {
            title: "Delete songs".to_string(),
            message: pending_delete,
            confirm_label: "Delete".to_string(),
            on_confirm: on_confirm_delete,
        }
    }
}
