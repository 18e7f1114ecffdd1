use dioxus::prelude::*;

/// Height state of a collapsible results panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn height(self) -> &'static str {
        match self {
            Self::Collapsed => "30vh",
            Self::Expanded => "100%",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Collapsed => "+",
            Self::Expanded => "−",
        }
    }
}

#[component]
pub fn ExpandablePanel(id: String, title: String, children: Element) -> Element {
    let mut state = use_signal(PanelState::default);
    let current = state();
    let expanded = current == PanelState::Expanded;

    rsx! {
        div { class: "panel",
            div { class: "panel__header",
                h3 { class: "panel__title", "{title}" }
                button {
                    r#type: "button",
                    class: "button button--ghost panel__toggle",
                    aria_expanded: "{expanded}",
                    aria_controls: "{id}",
                    onclick: move |_| state.set(current.toggled()),
                    span { class: "panel__toggle-icon", "{current.icon()}" }
                }
            }
            div {
                id: "{id}",
                class: "panel__body",
                style: "height: {current.height()}; overflow: auto;",
                {children}
            }
        }
    }
}

/// Output of the last data query.
#[component]
pub fn QueryResultsPanel(text: Option<String>) -> Element {
    rsx! {
        pre { id: "queryResults", class: "query-results",
            if let Some(text) = text {
                "{text}"
            }
        }
    }
}
