use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

mod components;
mod config;
mod dom;
mod popup;
mod storage;
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;
mod theme;
mod views;

use views::main_layout::MainLayout;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        ToastProvider { MainLayout {} }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
