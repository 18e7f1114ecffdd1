use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::api::ApiClient;
use crate::core::config::ExplorerConfig;
use crate::core::dataset::{ControlState, DatasetChoice};
use crate::core::session::{DatasetControl, ExplorerSession, MetadataRefresh};
use crate::results::{DataTable, ExpandablePanel, QualityBadge, QueryResultsPanel};
use crate::t;

#[derive(Debug, Clone)]
enum ExplorerEvent {
    Load,
    AddParam { name: String, value: String },
    Submit,
    Select(DatasetChoice),
    RefreshMetadata(MetadataRefresh),
}

#[component]
pub fn ExplorerView(config: ExplorerConfig) -> Element {
    let session = use_signal({
        let config = config.clone();
        move || ExplorerSession::new(config)
    });
    let api = use_hook({
        let config = config.clone();
        move || ApiClient::new(&config)
    });
    let mut param_name = use_signal(String::new);
    let mut param_value = use_signal(String::new);

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<ExplorerEvent>| {
        let api = api.clone();
        let mut session = session;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    ExplorerEvent::Load => {
                        let (refresh, datasets_url, internal_url, rating_url) = {
                            let state = session.peek();
                            (
                                state.metadata_refresh(),
                                state.datasets_url(),
                                state.internal_metadata_url(),
                                state.rating_url().to_string(),
                            )
                        };
                        spawn_metadata(api.clone(), session, refresh);

                        let client = api.clone();
                        spawn(async move {
                            let result = client.fetch_listing(&datasets_url).await;
                            session.with_mut(|s| s.apply_datasets(result));
                        });

                        let client = api.clone();
                        spawn(async move {
                            let result = client.fetch_internal_metadata(&internal_url).await;
                            session.with_mut(|s| s.apply_internal_metadata(result));
                        });

                        let client = api.clone();
                        spawn(async move {
                            let result = client.fetch_quality(&rating_url).await;
                            session.with_mut(|s| s.apply_quality(result));
                        });
                    }
                    ExplorerEvent::AddParam { name, value } => {
                        session.with_mut(|s| s.add_param(name, value));
                    }
                    ExplorerEvent::Submit => {
                        let url = session.peek().query_url();
                        let client = api.clone();
                        spawn(async move {
                            let result = client.fetch_json_or_text(&url).await;
                            session.with_mut(|s| s.apply_query_result(result));
                        });
                    }
                    ExplorerEvent::Select(choice) => {
                        session.with_mut(|s| {
                            s.select_dataset(choice);
                        });
                    }
                    ExplorerEvent::RefreshMetadata(refresh) => {
                        spawn_metadata(api.clone(), session, refresh);
                    }
                }
            }
        }
    });

    // Metadata refreshes are driven by selection events; the subscription
    // lives as long as this component.
    use_hook(move || {
        let subscription = session.peek().subscribe_selection(move |change| {
            coroutine.send(ExplorerEvent::RefreshMetadata(change.refresh.clone()));
        });
        Rc::new(subscription)
    });
    use_hook(move || coroutine.send(ExplorerEvent::Load));

    let state = session.read();
    let params_table = state.params_table().clone();
    let metadata_table = state.metadata_table().clone();
    let internal_table = state.internal_metadata_table().clone();
    let query_string = state.query_string().to_string();
    let results = state.results().map(str::to_string);
    let controls = state.dataset_controls();
    let datasets_notice = state.datasets_notice().map(str::to_string);
    let badge = state.badge().clone();
    let badge_error = state.badge_error().map(str::to_string);
    let selected_label = state
        .selected_dataset()
        .map(str::to_string)
        .unwrap_or_else(|| t!("dataset-none"));
    let suggested = state.config().suggested_params.clone();
    drop(state);

    rsx! {
        article { class: "explorer",
            div { class: "explorer__summary",
                span { class: "explorer__quality",
                    {t!("quality-label")}
                    " "
                    QualityBadge { badge, error: badge_error }
                }
                span { class: "explorer__selection",
                    {t!("dataset-selected-label")}
                    ": "
                    span { id: "selectedDataset", "{selected_label}" }
                }
            }

            section { class: "explorer-card explorer-query",
                h2 { {t!("explorer-params-title")} }
                div { class: "explorer-query__form",
                    input {
                        id: "inputParam",
                        r#type: "text",
                        list: "suggestedParams",
                        placeholder: t!("explorer-param-name"),
                        value: "{param_name}",
                        oninput: move |evt| param_name.set(evt.value()),
                    }
                    datalist { id: "suggestedParams",
                        for name in suggested.iter() {
                            option { key: "{name}", value: "{name}" }
                        }
                    }
                    input {
                        id: "inputValue",
                        r#type: "text",
                        placeholder: t!("explorer-param-value"),
                        value: "{param_value}",
                        oninput: move |evt| param_value.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| {
                            coroutine.send(ExplorerEvent::AddParam {
                                name: param_name(),
                                value: param_value(),
                            });
                        },
                        {t!("explorer-add-param")}
                    }
                }

                DataTable { id: "tableParams", table: params_table }

                p { class: "explorer-query__string",
                    {t!("explorer-query-string")}
                    ": "
                    code { span { id: "queryParamSpan", "{query_string}" } }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| coroutine.send(ExplorerEvent::Submit),
                    {t!("explorer-submit")}
                }
            }

            ExpandablePanel { id: "panel-results", title: t!("explorer-results-title"),
                QueryResultsPanel { text: results }
            }

            div { class: "explorer__panels",
                ExpandablePanel { id: "panel-datasets", title: t!("explorer-datasets-title"),
                    table { id: "datasets", class: "data-table",
                        tbody {
                            for control in controls.into_iter() {
                                {render_dataset_row(control, coroutine)}
                            }
                            if let Some(notice) = datasets_notice {
                                tr { td { class: "data-table__cell", "{notice}" } }
                            }
                        }
                    }
                }
                ExpandablePanel { id: "panel-metadata", title: t!("explorer-metadata-title"),
                    DataTable { id: "metadata", table: metadata_table }
                }
                ExpandablePanel { id: "panel-metadata-internal", title: t!("explorer-internal-metadata-title"),
                    DataTable { id: "metadataInternal", table: internal_table }
                }
            }
        }
    }
}

fn render_dataset_row(control: DatasetControl, coroutine: Coroutine<ExplorerEvent>) -> Element {
    let DatasetControl {
        choice,
        control_id,
        state,
    } = control;

    let selected = state == ControlState::Selected;
    let label = match &choice {
        DatasetChoice::Root => t!("dataset-root"),
        DatasetChoice::Named(id) => id.clone(),
    };
    let button_label = if selected {
        t!("dataset-selected")
    } else {
        t!("dataset-select")
    };
    let class = if selected {
        "button btn-dataset btn-dataset--selected"
    } else {
        "button btn-dataset"
    };

    rsx! {
        tr { key: "{control_id}",
            td { class: "data-table__cell", "{label}" }
            td { class: "data-table__cell",
                button {
                    id: "{control_id}",
                    r#type: "button",
                    class: "{class}",
                    disabled: selected,
                    onclick: move |_| {
                        debug!(dataset = %choice, "dataset control clicked");
                        coroutine.send(ExplorerEvent::Select(choice.clone()));
                    },
                    "{button_label}"
                }
            }
        }
    }
}

fn spawn_metadata(api: ApiClient, mut session: Signal<ExplorerSession>, refresh: MetadataRefresh) {
    spawn(async move {
        let result = api.fetch_listing(&refresh.url).await;
        session.with_mut(|s| s.apply_metadata(refresh.generation, result));
    });
}
