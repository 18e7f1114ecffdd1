use dioxus::prelude::*;

use crate::core::config::ExplorerConfig;
use crate::explorer::ExplorerView;

use super::ConfigNotice;

#[component]
pub fn Explorer() -> Element {
    // Re-render when the language changes elsewhere.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let config = use_hook(ExplorerConfig::load);

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-explorer",
            h1 { {crate::t!("page-explorer-title")} }
            p { {crate::t!("page-explorer-intro")} }
            match config {
                Ok(config) => rsx! { ExplorerView { config } },
                Err(error) => rsx! { ConfigNotice { error } },
            }
        }
    }
}
