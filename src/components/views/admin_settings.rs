use super::edit_fields::TextField;
use crate::actions::{Notification, NotificationSink, SaveStrategy};
use crate::api::*;
use crate::cache_service;
use crate::components::Notifier;
use crate::db::{clear_session, load_session, save_session, save_settings, AdminSettings};
use dioxus::prelude::*;
use tracing::warn;

fn parse_count(value: &str, fallback: u32) -> u32 {
    value.trim().parse().unwrap_or(fallback)
}

#[component]
pub fn SettingsView() -> Element {
    let mut settings = use_context::<Signal<AdminSettings>>();
    let notifier = use_context::<Notifier>();

    let mut draft = use_signal(move || settings.peek().clone());
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut session_revision = use_signal(|| 0u32);

    let session = use_resource(move || {
        session_revision();
        async move { load_session().await.ok().unwrap_or_default() }
    });

    let on_save = move |_: MouseEvent| {
        let next = draft().normalized();
        draft.set(next.clone());
        settings.set(next.clone());
        cache_service::apply_settings(&next);
        spawn(async move {
            match save_settings(next).await {
                Ok(()) => notifier.notify(Notification::success("Settings saved")),
                Err(e) => {
                    warn!("failed to save settings: {e}");
                    notifier.notify(Notification::error(format!("Failed to save settings: {e}")));
                }
            }
        });
    };

    let on_sign_in = move |_: MouseEvent| {
        let user = username().trim().to_string();
        let pass = password();
        if user.is_empty() || pass.is_empty() {
            notifier.notify(Notification::error("Username and password are required"));
            return;
        }
        let server_url = settings().server_url;
        spawn(async move {
            let client_id = load_session()
                .await
                .map(|s| s.client_unique_id)
                .unwrap_or_default();
            match NavidromeClient::sign_in(&server_url, &user, &pass, &client_id).await {
                Ok(credentials) => {
                    let name = credentials.username.clone();
                    if let Err(e) = save_session(credentials).await {
                        warn!("failed to store session: {e}");
                    }
                    cache_service::clear_all();
                    password.set(String::new());
                    session_revision.set(session_revision() + 1);
                    notifier.notify(Notification::success(format!("Signed in as {name}")));
                }
                Err(e) => notifier.notify(Notification::error(e.user_message())),
            }
        });
    };

    let on_sign_out = move |_: MouseEvent| {
        spawn(async move {
            if let Err(e) = clear_session().await {
                warn!("failed to clear session: {e}");
            }
            cache_service::clear_all();
            session_revision.set(session_revision() + 1);
        });
    };

    let current = draft();
    let signed_in_as = session().map(|s| s.username).unwrap_or_default();

    rsx! {
        div { class: "max-w-2xl space-y-10",
            header { class: "page-header",
                h1 { class: "page-title", "Settings" }
            }

            section { class: "space-y-4",
                h2 { class: "text-lg font-semibold text-white", "Server" }
                TextField {
                    label: "Navidrome URL".to_string(),
                    value: current.server_url.clone(),
                    oninput: move |v: String| draft.write().server_url = v,
                }
                if signed_in_as.is_empty() {
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        TextField {
                            label: "Username".to_string(),
                            value: username(),
                            oninput: move |v: String| username.set(v),
                        }
                        label { class: "block space-y-1",
                            span { class: "text-xs uppercase tracking-wide text-zinc-500", "Password" }
                            input {
                                class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white",
                                r#type: "password",
                                value: password,
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                    }
                    button {
                        class: "px-4 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white",
                        onclick: on_sign_in,
                        "Sign in"
                    }
                } else {
                    div { class: "flex items-center justify-between",
                        p { class: "text-sm text-zinc-400", "Signed in as {signed_in_as}" }
                        button {
                            class: "px-3 py-1.5 rounded-lg border border-zinc-700 text-zinc-300 hover:text-white",
                            onclick: on_sign_out,
                            "Sign out"
                        }
                    }
                }
            }

            section { class: "space-y-4",
                h2 { class: "text-lg font-semibold text-white", "Library actions" }
                label { class: "block space-y-1",
                    span { class: "text-xs uppercase tracking-wide text-zinc-500", "Metadata editing" }
                    select {
                        class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white",
                        value: if current.save_strategy == SaveStrategy::Disabled { "disabled" } else { "patch_update" },
                        oninput: move |e| {
                            draft.write().save_strategy = if e.value() == "disabled" {
                                SaveStrategy::Disabled
                            } else {
                                SaveStrategy::PatchUpdate
                            };
                        },
                        option { value: "patch_update", "{SaveStrategy::PatchUpdate.label()}" }
                        option { value: "disabled", "{SaveStrategy::Disabled.label()}" }
                    }
                }
                label { class: "flex items-center gap-3 text-sm text-zinc-300",
                    input {
                        r#type: "checkbox",
                        checked: current.enable_downloads,
                        onchange: move |e| draft.write().enable_downloads = e.checked(),
                    }
                    "Allow downloading songs from URLs"
                }
                label { class: "flex items-center gap-3 text-sm text-zinc-300",
                    input {
                        r#type: "checkbox",
                        checked: current.enable_sharing,
                        onchange: move |e| draft.write().enable_sharing = e.checked(),
                    }
                    "Allow creating share links"
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    TextField {
                        label: "Share expiry (days, 0 = never)".to_string(),
                        value: current.share_expiry_days.to_string(),
                        numeric: true,
                        oninput: move |v: String| {
                            let days = parse_count(&v, draft.peek().share_expiry_days);
                            draft.write().share_expiry_days = days;
                        },
                    }
                    TextField {
                        label: "Page size".to_string(),
                        value: current.list_page_size.to_string(),
                        numeric: true,
                        oninput: move |v: String| {
                            let size = parse_count(&v, draft.peek().list_page_size);
                            draft.write().list_page_size = size;
                        },
                    }
                    TextField {
                        label: "List cache (hours, 0 = off)".to_string(),
                        value: current.cache_expiry_hours.to_string(),
                        numeric: true,
                        oninput: move |v: String| {
                            let hours = parse_count(&v, draft.peek().cache_expiry_hours);
                            draft.write().cache_expiry_hours = hours;
                        },
                    }
                }
            }

            button {
                class: "px-4 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white",
                onclick: on_save,
                "Save settings"
            }
        }
    }
}
