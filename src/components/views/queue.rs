use crate::actions::PlayQueue;
use crate::api::*;
use crate::components::Icon;
use dioxus::prelude::*;

#[component]
pub fn QueueView() -> Element {
    let mut queue = use_context::<Signal<PlayQueue>>();

    let snapshot = queue();
    let current = snapshot.current_index();
    let count = ResourceKind::Song.count_label(snapshot.songs().len());
    let total = format_duration(snapshot.total_duration());

    rsx! {
        div { class: "space-y-6",
            header { class: "page-header gap-4",
                div {
                    h1 { class: "page-title", "Play queue" }
                    p { class: "text-sm text-zinc-500", "{count} · {total}" }
                }
                if !snapshot.songs().is_empty() {
                    button {
                        class: "flex items-center gap-2 px-4 py-2 rounded-xl bg-zinc-800 hover:bg-zinc-700 text-zinc-300 hover:text-white",
                        onclick: move |_| queue.write().clear(),
                        Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                        "Clear queue"
                    }
                }
            }

            if snapshot.songs().is_empty() {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon { name: "queue".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                    p { class: "text-zinc-400", "The queue is empty" }
                    p { class: "text-zinc-500 text-sm mt-2", "Select songs and use Play or Add to queue" }
                }
            } else {
                div { class: "divide-y divide-zinc-900",
                    for (index, song) in snapshot.songs().iter().cloned().enumerate() {
                        div {
                            key: "{index}-{song.id}",
                            class: if current == Some(index) { "flex items-center gap-4 py-2 px-2 bg-emerald-500/10 rounded-lg" } else { "flex items-center gap-4 py-2 px-2" },
                            button {
                                class: "p-1.5 rounded-lg text-zinc-400 hover:text-emerald-400",
                                aria_label: "Play from here",
                                onclick: move |_| queue.write().jump_to(index),
                                Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                            }
                            div { class: "flex-1 min-w-0",
                                p { class: "text-white truncate", "{song.title}" }
                                p { class: "text-xs text-zinc-500 truncate", "{song.artist.clone().unwrap_or_default()}" }
                            }
                            span { class: "text-xs text-zinc-500", "{format_duration(song.duration)}" }
                            button {
                                class: "p-1.5 rounded-lg text-zinc-500 hover:text-red-400",
                                aria_label: "Remove from queue",
                                onclick: move |_| queue.write().remove(index),
                                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
