use dioxus::prelude::*;

use crate::core::config::ConfigError;

/// Shown in place of a page when the explorer cannot find its data source.
#[component]
pub fn ConfigNotice(error: ConfigError) -> Element {
    rsx! {
        div { class: "config-notice", role: "alert",
            h2 { {crate::t!("config-error-title")} }
            p { "{error}" }
        }
    }
}
