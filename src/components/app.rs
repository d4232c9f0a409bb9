use crate::actions::{BusyFlag, PlayQueue, Selection};
use crate::cache_service;
use crate::components::{
    view_label, AppView, BackgroundWork, DownloadDialog, DownloadDialogSignal, Icon,
    ListRevisions, Notifier, ToastStack,
};
use crate::db::{initialize_database, load_settings, AdminSettings};
use dioxus::prelude::*;
use tracing::{error, warn};

/// Set once stored settings are loaded; list views wait for it before fetching.
#[derive(Clone, Copy)]
pub struct SettingsReady(pub Signal<bool>);

#[component]
pub fn AppShell() -> Element {
    let mut admin_settings = use_signal(AdminSettings::default);
    let mut settings_ready = use_signal(|| false);
    let toasts = use_signal(Vec::new);
    let next_toast_id = use_signal(|| 0u64);
    let song_revision = use_signal(|| 0u64);
    let album_revision = use_signal(|| 0u64);
    let selection = use_signal(Selection::default);
    let play_queue = use_signal(PlayQueue::default);
    let mut download_open = use_signal(|| false);
    let busy = use_hook(BusyFlag::default);
    let background_running = use_signal(|| 0usize);

    use_context_provider(|| admin_settings);
    use_context_provider(|| SettingsReady(settings_ready));
    use_context_provider(|| Notifier::new(toasts, next_toast_id));
    use_context_provider(|| ListRevisions::new(song_revision, album_revision));
    use_context_provider(|| selection);
    use_context_provider(|| play_queue);
    use_context_provider(|| busy.clone());
    use_context_provider(|| BackgroundWork::new(background_running));
    use_context_provider(|| DownloadDialogSignal(download_open));

    // Initialize storage and load settings on mount
    use_effect(move || {
        spawn(async move {
            if let Err(e) = initialize_database().await {
                error!("failed to initialize database: {e}");
            }
            match load_settings().await {
                Ok(settings) => {
                    cache_service::apply_settings(&settings);
                    admin_settings.set(settings);
                }
                Err(e) => warn!("failed to load settings, using defaults: {e}"),
            }
            settings_ready.set(true);
        });
    });

    let view = use_route::<AppView>();
    let settings = admin_settings();
    let queued = play_queue().songs().len();

    rsx! {
        div { class: "app-container flex flex-col min-h-screen text-white",
            header { class: "border-b border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl",
                div { class: "flex items-center justify-between gap-4 px-6 py-3",
                    div { class: "flex flex-col",
                        span { class: "text-xs uppercase tracking-widest text-zinc-500",
                            "Navidrome Admin"
                        }
                        span { class: "text-sm font-semibold text-white", "{view_label(&view)}" }
                    }
                    nav { class: "flex items-center gap-2",
                        Link {
                            class: "nav-link",
                            to: AppView::SongsView {},
                            Icon { name: "music".to_string(), class: "w-4 h-4".to_string() }
                            "Songs"
                        }
                        Link {
                            class: "nav-link",
                            to: AppView::AlbumsView {},
                            Icon { name: "album".to_string(), class: "w-4 h-4".to_string() }
                            "Albums"
                        }
                        Link {
                            class: "nav-link",
                            to: AppView::SettingsView {},
                            Icon { name: "settings".to_string(), class: "w-4 h-4".to_string() }
                            "Settings"
                        }
                    }
                    div { class: "flex items-center gap-3",
                        Link {
                            class: "nav-link",
                            to: AppView::QueueView {},
                            Icon { name: "queue".to_string(), class: "w-4 h-4".to_string() }
                            if queued > 0 { "Queue ({queued})" } else { "Queue" }
                        }
                        if settings.enable_downloads {
                            button {
                                class: "flex items-center gap-2 px-3 py-2 rounded-lg bg-emerald-500/20 text-emerald-300 hover:bg-emerald-500/30 text-sm",
                                onclick: move |_| download_open.set(true),
                                Icon { name: "download".to_string(), class: "w-4 h-4".to_string() }
                                "Download"
                            }
                        }
                    }
                }
            }

            main { class: "flex-1 overflow-y-auto main-scroll",
                div { class: "page-shell", Outlet::<AppView> {} }
            }
        }

        DownloadDialog {}
        ToastStack {}
    }
}
