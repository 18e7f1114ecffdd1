use dioxus::prelude::*;

use crate::core::config::ExplorerConfig;
use crate::metadata::MetadataEditorView;

use super::ConfigNotice;

#[component]
pub fn MetadataPage() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let config = use_hook(ExplorerConfig::load);

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-metadata",
            h1 { {crate::t!("page-metadata-title")} }
            p { {crate::t!("page-metadata-intro")} }
            match config {
                Ok(config) => rsx! { MetadataEditorView { config } },
                Err(error) => rsx! { ConfigNotice { error } },
            }
        }
    }
}
