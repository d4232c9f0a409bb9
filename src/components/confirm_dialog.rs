use dioxus::prelude::*;

/// Modal yes/no gate. Rendered only while `message` holds a question.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: Signal<Option<String>>,
    confirm_label: String,
    on_confirm: EventHandler<()>,
) -> Element {
    let mut message = message;
    let Some(text) = message() else {
        return rsx! {};
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            div { class: "bg-zinc-900 border border-zinc-700 rounded-lg p-6 max-w-md w-full mx-4",
                h2 { class: "text-xl font-bold text-white mb-4", "{title}" }
                p { class: "text-zinc-300 mb-6", "{text}" }
                div { class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 rounded-lg border border-zinc-700 text-zinc-300 hover:text-white hover:border-zinc-500 transition-colors",
                        onclick: move |_| message.set(None),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-lg bg-red-600 hover:bg-red-500 text-white transition-colors",
                        onclick: move |_| {
                            message.set(None);
                            on_confirm.call(());
                        },
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
