use crate::actions::{load_libraries, submit_download, DownloadForm, DownloadOutcome, Selection};
use crate::components::{session_client, Icon, ListRevisions, Notifier, ViewListHandle};
use crate::db::AdminSettings;
use dioxus::prelude::*;

/// Whether the download dialog is open.
#[derive(Clone, Copy)]
pub struct DownloadDialogSignal(pub Signal<bool>);

#[component]
pub fn DownloadDialog() -> Element {
    let settings = use_context::<Signal<AdminSettings>>();
    let notifier = use_context::<Notifier>();
    let revisions = use_context::<ListRevisions>();
    let selection = use_context::<Signal<Selection>>();
    let mut open = use_context::<DownloadDialogSignal>().0;

    let mut form = use_signal(DownloadForm::default);
    let mut inline_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let libraries = use_resource(move || {
        let settings = settings();
        let is_open = open();
        async move {
            if !is_open {
                return Vec::new();
            }
            let client = session_client(&settings).await;
            load_libraries(&client).await
        }
    });

    if !open() || !settings().enable_downloads {
        return rsx! {};
    }

    let on_submit = move |_: MouseEvent| {
        if submitting() {
            return;
        }
        let snapshot = form();
        let settings = settings();
        submitting.set(true);
        inline_error.set(None);
        spawn(async move {
            let client = session_client(&settings).await;
            let list = ViewListHandle::new(selection, revisions);
            match submit_download(&client, &snapshot, &notifier, &list).await {
                DownloadOutcome::Downloaded(_) => {
                    form.write().reset();
                    open.set(false);
                }
                DownloadOutcome::Rejected(message) => inline_error.set(Some(message)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            div { class: "bg-zinc-900 border border-zinc-700 rounded-lg p-6 max-w-md w-full mx-4 space-y-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-xl font-bold text-white", "Download song" }
                    button {
                        class: "p-1 text-zinc-400 hover:text-white",
                        aria_label: "Close",
                        onclick: move |_| open.set(false),
                        Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
                label { class: "block space-y-1",
                    span { class: "text-sm text-zinc-400", "URL" }
                    input {
                        class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white focus:outline-none focus:border-emerald-500/50",
                        placeholder: "https://www.youtube.com/watch?v=...",
                        value: "{form().url}",
                        oninput: move |e| form.write().url = e.value(),
                    }
                }
                label { class: "block space-y-1",
                    span { class: "text-sm text-zinc-400", "Library" }
                    select {
                        class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white",
                        value: "{form().library}",
                        oninput: move |e| form.write().library = e.value(),
                        option { value: "", "Default library" }
                        for library in libraries().unwrap_or_default() {
                            option { key: "{library.id}", value: "{library.id}", "{library.name}" }
                        }
                    }
                }
                if let Some(message) = inline_error() {
                    p { class: "text-sm text-red-400", "{message}" }
                }
                div { class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 rounded-lg border border-zinc-700 text-zinc-300 hover:text-white",
                        onclick: move |_| open.set(false),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white disabled:opacity-50",
                        disabled: submitting(),
                        onclick: on_submit,
                        if submitting() { "Downloading..." } else { "Download" }
                    }
                }
            }
        }
    }
}
