use dioxus::prelude::*;

mod components;
mod config;
mod logging;
mod submission;

use components::TripSearchForm;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    config::load_config();
    let app_config = config::app_config();
    match logging::init(&app_config.logging) {
        Ok(level) => tracing::debug!(%level, platform = client_platform(), "Logger ready"),
        Err(e) => eprintln!("[logging] {e}"),
    }

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        TripSearchForm {}
    }
}
