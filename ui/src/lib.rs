//! Shared UI crate for the catalog explorer: request plumbing, explorer
//! state and the views every platform shell mounts.

pub mod api;
pub mod components;
pub mod core;
pub mod explorer;
pub mod i18n;
pub mod metadata;
pub mod results;
pub mod views;

use dioxus::prelude::manganis;

/// Page-level styles shared by every platform shell.
pub const THEME_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");
