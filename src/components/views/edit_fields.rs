use crate::actions::SaveStrategy;
use crate::components::Icon;
use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default)] numeric: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "block space-y-1",
            span { class: "text-xs uppercase tracking-wide text-zinc-500", "{label}" }
            input {
                class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white focus:outline-none focus:border-emerald-500/50",
                inputmode: if numeric { "numeric" } else { "text" },
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Save/cancel row shared by both edit forms.
#[component]
pub fn EditFooter(
    strategy: SaveStrategy,
    saving: bool,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between gap-3 pt-4",
            if strategy == SaveStrategy::Disabled {
                p { class: "text-xs text-amber-400", "Tag editing is disabled in settings." }
            } else {
                span {}
            }
            div { class: "flex gap-3",
                button {
                    class: "px-4 py-2 rounded-lg border border-zinc-700 text-zinc-300 hover:text-white",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "flex items-center gap-2 px-4 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white disabled:opacity-50",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    Icon { name: "check".to_string(), class: "w-4 h-4".to_string() }
                    if saving { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
