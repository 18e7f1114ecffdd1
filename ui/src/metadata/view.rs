use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::api::{ApiClient, MetadataEntry};
use crate::core::config::ExplorerConfig;
use crate::results::{BadgeModel, QualityBadge};
use crate::t;

use super::{MetadataEditor, MetadataRow};

#[derive(Debug, Clone)]
enum MetadataEvent {
    Load,
    Create { field: String, value: String },
    Update { key: u64, value: String },
    Delete { key: u64 },
}

/// Editable table of the data source's metadata items.
///
/// Requests are issued one at a time from a single coroutine, so an update
/// and a delete on the same row never race each other.
#[component]
pub fn MetadataEditorView(config: ExplorerConfig) -> Element {
    let editor = use_signal(MetadataEditor::new);
    let badge = use_signal(BadgeModel::default);
    let badge_error = use_signal(|| None::<String>);
    let mut field_input = use_signal(String::new);
    let mut value_input = use_signal(String::new);

    let coroutine = use_coroutine({
        let config = config.clone();
        move |mut rx: UnboundedReceiver<MetadataEvent>| {
            let api = ApiClient::new(&config);
            let config = config.clone();
            let mut editor = editor;
            let mut badge = badge;
            let mut badge_error = badge_error;

            async move {
                while let Some(event) = rx.next().await {
                    let refresh_quality = match event {
                        MetadataEvent::Load => {
                            let result = api.fetch_metadata_records(&config.metadata_url).await;
                            editor.with_mut(|e| e.load(result));
                            true
                        }
                        MetadataEvent::Create { field, value } => {
                            let entry = MetadataEntry::new(field.trim(), value.trim());
                            if entry.field.is_empty() {
                                debug!("ignoring metadata item without a field name");
                                continue;
                            }
                            let result = api.post_metadata(&config.metadata_url, &entry).await;
                            editor.with_mut(|e| e.apply_created(result))
                        }
                        MetadataEvent::Update { key, value } => {
                            let Some(pending) = editor.with_mut(|e| e.begin_update(key, value.trim()))
                            else {
                                continue;
                            };
                            let url = config.metadata_update_url(&pending.entry.field, &pending.previous);
                            let result = api.update_metadata(&url, &pending.entry).await;
                            let ok = result.is_ok();
                            editor.with_mut(|e| e.apply_updated(pending, result));
                            ok
                        }
                        MetadataEvent::Delete { key } => {
                            let Some(entry) = editor.peek().delete_entry(key) else {
                                continue;
                            };
                            let result = api
                                .delete_metadata(config.metadata_delete_url(), &entry)
                                .await;
                            editor.with_mut(|e| e.apply_deleted(key, result))
                        }
                    };

                    if refresh_quality {
                        match api.fetch_quality(&config.rating_url).await {
                            Ok(quality) => {
                                info!(quality, "quality level refreshed");
                                badge.with_mut(|b| b.render(quality));
                                badge_error.set(None);
                            }
                            Err(err) => {
                                badge.with_mut(|b| b.render(0));
                                badge_error.set(Some(err.to_string()));
                            }
                        }
                    }
                }
            }
        }
    });

    use_hook(move || coroutine.send(MetadataEvent::Load));

    let rows: Vec<MetadataRow> = editor.read().rows().to_vec();
    let last_error = editor.read().last_error().map(str::to_string);
    let is_empty = rows.is_empty();

    rsx! {
        article { class: "metadata-editor",
            div { class: "metadata-editor__quality",
                {t!("quality-label")}
                " "
                QualityBadge { badge: badge(), error: badge_error() }
            }

            form {
                class: "metadata-editor__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    coroutine.send(MetadataEvent::Create {
                        field: field_input(),
                        value: value_input(),
                    });
                    field_input.set(String::new());
                    value_input.set(String::new());
                },
                input {
                    id: "id_field",
                    r#type: "text",
                    placeholder: t!("metadata-field"),
                    value: "{field_input}",
                    oninput: move |evt| field_input.set(evt.value()),
                }
                input {
                    id: "id_value",
                    r#type: "text",
                    placeholder: t!("metadata-value"),
                    value: "{value_input}",
                    oninput: move |evt| value_input.set(evt.value()),
                }
                button { r#type: "submit", class: "button button--primary", {t!("metadata-add")} }
            }

            if let Some(message) = last_error {
                p { class: "metadata-editor__error", role: "alert", "{message}" }
            }

            table { id: "tableMetadata", class: "data-table",
                thead {
                    tr {
                        th { class: "data-table__cell", {t!("metadata-field")} }
                        th { class: "data-table__cell", {t!("metadata-value")} }
                        th { class: "data-table__cell" }
                    }
                }
                tbody {
                    for row in rows.into_iter() {
                        {render_row(row, coroutine)}
                    }
                }
            }
            if is_empty {
                p { class: "metadata-editor__empty", {t!("metadata-empty")} }
            }
        }
    }
}

fn render_row(row: MetadataRow, coroutine: Coroutine<MetadataEvent>) -> Element {
    let row_id = row.row_id();
    let button_id = row.delete_button_id();
    let key = row.key;

    rsx! {
        tr { key: "{key}", id: "{row_id}",
            td { class: "data-table__cell", "{row.field}" }
            td { class: "data-table__cell",
                input {
                    r#type: "text",
                    value: "{row.value}",
                    onchange: move |evt| {
                        coroutine.send(MetadataEvent::Update { key, value: evt.value() });
                    },
                }
            }
            td { class: "data-table__cell",
                button {
                    id: "{button_id}",
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| coroutine.send(MetadataEvent::Delete { key }),
                    {t!("metadata-delete")}
                }
            }
        }
    }
}
