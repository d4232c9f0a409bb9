use dioxus::prelude::*;

/// Stroke icon by name; unknown names render a plain circle.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    let body = match name.as_str() {
        "album" => rsx! {
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
            circle { cx: "12", cy: "12", r: "4" }
            circle { cx: "12", cy: "12", r: "1" }
        },
        "music" => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        "search" => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "M21 21l-4.35-4.35" }
        },
        "play" => rsx! {
            polygon { points: "6 4 20 12 6 20 6 4" }
        },
        "play-next" => rsx! {
            polygon { points: "4 5 14 12 4 19 4 5" }
            line { x1: "18", y1: "5", x2: "18", y2: "19" }
        },
        "shuffle" => rsx! {
            polyline { points: "16 3 21 3 21 8" }
            line { x1: "4", y1: "20", x2: "21", y2: "3" }
            polyline { points: "21 16 21 21 16 21" }
            line { x1: "15", y1: "15", x2: "21", y2: "21" }
            line { x1: "4", y1: "4", x2: "9", y2: "9" }
        },
        "queue" => rsx! {
            line { x1: "8", y1: "6", x2: "21", y2: "6" }
            line { x1: "8", y1: "12", x2: "21", y2: "12" }
            line { x1: "8", y1: "18", x2: "21", y2: "18" }
            line { x1: "3", y1: "6", x2: "3.01", y2: "6" }
            line { x1: "3", y1: "12", x2: "3.01", y2: "12" }
            line { x1: "3", y1: "18", x2: "3.01", y2: "18" }
        },
        "plus" => rsx! {
            line { x1: "12", y1: "5", x2: "12", y2: "19" }
            line { x1: "5", y1: "12", x2: "19", y2: "12" }
        },
        "share" => rsx! {
            circle { cx: "18", cy: "5", r: "3" }
            circle { cx: "6", cy: "12", r: "3" }
            circle { cx: "18", cy: "19", r: "3" }
            line { x1: "8.6", y1: "13.5", x2: "15.4", y2: "17.5" }
            line { x1: "15.4", y1: "6.5", x2: "8.6", y2: "10.5" }
        },
        "download" => rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            line { x1: "12", y1: "15", x2: "12", y2: "3" }
        },
        "edit" => rsx! {
            path { d: "M12 20h9" }
            path { d: "M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4z" }
        },
        "trash" => rsx! {
            polyline { points: "3 6 5 6 21 6" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
        },
        "settings" => rsx! {
            circle { cx: "12", cy: "12", r: "3" }
            path { d: "M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-2.9 1.2V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-2.9-1.2l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1A1.7 1.7 0 0 0 3 15H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.2-2.9l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1A1.7 1.7 0 0 0 9 4.6V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 2.9 1.2l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1A1.7 1.7 0 0 0 21 9h.1a2 2 0 1 1 0 4H21a1.7 1.7 0 0 0-1.6 2z" }
        },
        "arrow-left" => rsx! {
            line { x1: "19", y1: "12", x2: "5", y2: "12" }
            polyline { points: "12 19 5 12 12 5" }
        },
        "check" => rsx! {
            polyline { points: "20 6 9 17 4 12" }
        },
        "x" => rsx! {
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        },
        "loader" => rsx! {
            path { d: "M21 12a9 9 0 1 1-6.2-8.6" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {body}
        }
    }
}
