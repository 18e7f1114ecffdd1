use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::views::{Explorer, MetadataPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Explorer {},
    #[route("/metadata")]
    MetadataPage {},
}

fn nav_explorer(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Explorer {},
        "{label}"
    })
}

fn nav_metadata(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MetadataPage {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    info!("starting catalog explorer");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        explorer: nav_explorer,
        metadata: nav_metadata,
    });

    // Shared language code; pages subscribe to it so a locale switch
    // re-renders them.
    use_context_provider(|| Signal::new(ui::i18n::current_language()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        Router::<Route> {}
    }
}

/// Wraps the shared navbar so it can sit in this crate's router layout.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
