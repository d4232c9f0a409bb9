use dioxus::prelude::*;

mod actions;
mod api;
mod cache;
mod cache_service;
mod components;
mod db;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#09090b" }
        document::Title { "Navidrome Admin" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
