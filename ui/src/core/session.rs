//! State of one explorer page.
//!
//! The session owns the parameter store, the dataset selector and every
//! rendered table. Views drive it with user input and fetch completions; it
//! never performs I/O itself, which keeps it usable outside a browser.

use dioxus::logger::tracing::{debug, info, warn};

use super::config::ExplorerConfig;
use super::dataset::{ControlState, DatasetChoice, DatasetSelector, SelectionTicket};
use super::events::{EventHub, Subscription};
use super::params::ParameterStore;
use super::query;
use crate::api::{Listing, QueryResult, RequestError};
use crate::results::{BadgeModel, TableModel};

/// A metadata fetch to perform; `generation` ties its completion to the
/// selection that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRefresh {
    pub generation: u64,
    pub url: String,
}

/// Emitted exactly once per [`ExplorerSession::select_dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub choice: DatasetChoice,
    pub refresh: MetadataRefresh,
}

/// One dataset-selection button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetControl {
    pub choice: DatasetChoice,
    pub control_id: String,
    pub state: ControlState,
}

#[derive(Debug)]
pub struct ExplorerSession {
    config: ExplorerConfig,
    params: ParameterStore,
    selector: DatasetSelector,
    params_table: TableModel,
    metadata_table: TableModel,
    internal_metadata_table: TableModel,
    datasets: Vec<DatasetChoice>,
    datasets_notice: Option<String>,
    query_string: String,
    results: Option<String>,
    badge: BadgeModel,
    badge_error: Option<String>,
    selection_events: EventHub<SelectionChanged>,
}

impl ExplorerSession {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            selector: DatasetSelector::new(config.datasource_url.clone()),
            config,
            params: ParameterStore::new(),
            params_table: TableModel::with_header(["Parameter", "Value"]),
            metadata_table: TableModel::new(),
            internal_metadata_table: TableModel::new(),
            datasets: Vec::new(),
            datasets_notice: None,
            query_string: String::new(),
            results: None,
            badge: BadgeModel::default(),
            badge_error: None,
            selection_events: EventHub::new(),
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    pub fn selector(&self) -> &DatasetSelector {
        &self.selector
    }

    pub fn params_table(&self) -> &TableModel {
        &self.params_table
    }

    pub fn metadata_table(&self) -> &TableModel {
        &self.metadata_table
    }

    pub fn internal_metadata_table(&self) -> &TableModel {
        &self.internal_metadata_table
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn results(&self) -> Option<&str> {
        self.results.as_deref()
    }

    pub fn badge(&self) -> &BadgeModel {
        &self.badge
    }

    pub fn badge_error(&self) -> Option<&str> {
        self.badge_error.as_deref()
    }

    pub fn datasets_notice(&self) -> Option<&str> {
        self.datasets_notice.as_deref()
    }

    /// Id shown in the "selected dataset" indicator; `None` at the root.
    pub fn selected_dataset(&self) -> Option<&str> {
        self.selector.selected().and_then(DatasetChoice::id)
    }

    pub fn subscribe_selection(&self, handler: impl Fn(&SelectionChanged) + 'static) -> Subscription {
        self.selection_events.subscribe(handler)
    }

    /// Store a parameter, then re-render the parameter table and query string.
    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.set_param(name, value);
        self.params_table.render(
            self.params
                .list_params()
                .map(|(name, value)| [name.to_string(), value.to_string()]),
        );
        self.query_string = query::encode(&self.params);
    }

    pub fn query_url(&self) -> String {
        self.selector.data_url(&query::encode(&self.params))
    }

    pub fn datasets_url(&self) -> String {
        self.selector.datasets_url()
    }

    /// The data-source (or dataset) root, which also serves internal metadata.
    pub fn internal_metadata_url(&self) -> String {
        self.selector.base_url()
    }

    pub fn rating_url(&self) -> &str {
        &self.config.rating_url
    }

    /// Metadata fetch for the current selection without changing it.
    pub fn metadata_refresh(&self) -> MetadataRefresh {
        MetadataRefresh {
            generation: self.selector.generation(),
            url: self.selector.metadata_url(),
        }
    }

    /// Switch dataset. Clears the metadata table, marks the matching control
    /// as selected and notifies selection listeners once.
    pub fn select_dataset(&mut self, choice: DatasetChoice) -> SelectionTicket {
        if !self.datasets.contains(&choice) {
            let err = RequestError::ElementMissing(choice.control_id());
            warn!(%err, "selected dataset has no control");
        }

        let ticket = self.selector.select(choice.clone());
        self.metadata_table.clear();
        info!(dataset = %choice, base_url = %self.selector.base_url(), "dataset selected");

        let event = SelectionChanged {
            choice,
            refresh: self.metadata_refresh(),
        };
        self.selection_events.emit(&event);
        ticket
    }

    /// Render a metadata listing unless a newer selection superseded it.
    /// Returns whether the result was applied.
    pub fn apply_metadata(&mut self, generation: u64, result: Result<Listing, RequestError>) -> bool {
        if !self.selector.is_current(generation) {
            debug!(
                generation,
                current = self.selector.generation(),
                "discarding stale metadata response"
            );
            return false;
        }

        match result {
            Ok(listing) => self.metadata_table.render(listing.rows()),
            Err(err) => self.metadata_table.render([[err.to_string()]]),
        }
        true
    }

    /// Populate the dataset controls: the root first, then one per distinct
    /// dataset id. Repeated ids would share a control id and both read as
    /// selected, so only the first is kept.
    pub fn apply_datasets(&mut self, result: Result<Listing, RequestError>) {
        self.datasets.clear();
        self.datasets_notice = None;

        match result {
            Ok(Listing::Items(data)) => {
                self.datasets.push(DatasetChoice::Root);
                for choice in data.names().into_iter().map(DatasetChoice::Named) {
                    if self.datasets.contains(&choice) {
                        debug!(dataset = %choice, "skipping repeated dataset id");
                        continue;
                    }
                    self.datasets.push(choice);
                }
            }
            Ok(Listing::Message(message)) => self.datasets_notice = Some(message),
            Ok(Listing::Empty) => {}
            Err(err) => self.datasets_notice = Some(err.to_string()),
        }
    }

    pub fn apply_internal_metadata(&mut self, result: Result<Vec<Vec<String>>, RequestError>) {
        match result {
            Ok(rows) => self.internal_metadata_table.render(rows),
            Err(err) => self
                .internal_metadata_table
                .render([[format!("Internal metadata request failed: {err}")]]),
        }
    }

    pub fn apply_query_result(&mut self, result: Result<QueryResult, RequestError>) {
        self.results = Some(match result {
            Ok(result) => result.display_text(),
            Err(err) => err.to_string(),
        });
    }

    pub fn apply_quality(&mut self, result: Result<u32, RequestError>) {
        match result {
            Ok(quality) => {
                self.badge.render(quality);
                self.badge_error = None;
            }
            Err(err) => {
                warn!(%err, "quality level request failed");
                self.badge.render(0);
                self.badge_error = Some(err.to_string());
            }
        }
    }

    pub fn dataset_controls(&self) -> Vec<DatasetControl> {
        self.datasets
            .iter()
            .map(|choice| DatasetControl {
                choice: choice.clone(),
                control_id: choice.control_id(),
                state: self.selector.control_state(choice),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListingData;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    const ROOT: &str = "http://localhost/api/datasources/7/";

    fn session() -> ExplorerSession {
        ExplorerSession::new(ExplorerConfig::new(ROOT))
    }

    fn with_datasets(names: &[&str]) -> ExplorerSession {
        let mut session = session();
        let items = names.iter().map(|n| json!(n)).collect();
        session.apply_datasets(Ok(Listing::Items(ListingData::Sequence(items))));
        session
    }

    fn selected_ids(session: &ExplorerSession) -> Vec<String> {
        session
            .dataset_controls()
            .into_iter()
            .filter(|c| c.state == ControlState::Selected)
            .map(|c| c.control_id)
            .collect()
    }

    #[test]
    fn adding_a_param_updates_table_span_and_query_url() {
        let mut session = session();
        session.add_param("q", "hello world");

        assert_eq!(
            session.params_table().rows(),
            [vec!["q".to_string(), "hello world".to_string()]]
        );
        assert_eq!(session.params_table().total_rows(), 2);
        assert_eq!(session.query_string(), "q=hello+world");
        assert_eq!(session.query_url(), format!("{ROOT}data/?q=hello+world"));
    }

    #[test]
    fn query_url_follows_the_selected_dataset() {
        let mut session = with_datasets(&["ds1"]);
        session.add_param("year", "2018");
        session.select_dataset(DatasetChoice::named("ds1"));
        assert_eq!(
            session.query_url(),
            format!("{ROOT}datasets/ds1/data/?year=2018")
        );
    }

    #[test]
    fn datasets_listing_adds_root_control_first() {
        let session = with_datasets(&["a", "b"]);
        let ids: Vec<_> = session
            .dataset_controls()
            .into_iter()
            .map(|c| c.control_id)
            .collect();
        assert_eq!(ids, vec!["btn-null", "btn-a", "btn-b"]);
        assert!(selected_ids(&session).is_empty());
    }

    #[test]
    fn repeated_dataset_ids_get_a_single_control() {
        let mut session = with_datasets(&["a", "b", "a"]);
        let ids: Vec<_> = session
            .dataset_controls()
            .into_iter()
            .map(|c| c.control_id)
            .collect();
        assert_eq!(ids, vec!["btn-null", "btn-a", "btn-b"]);

        session.select_dataset(DatasetChoice::named("a"));
        assert_eq!(selected_ids(&session), vec!["btn-a"]);
    }

    #[test]
    fn datasets_failure_becomes_a_notice() {
        let mut session = session();
        session.apply_datasets(Ok(Listing::Message("Data source does not contain datasets".into())));
        assert!(session.dataset_controls().is_empty());
        assert_eq!(
            session.datasets_notice(),
            Some("Data source does not contain datasets")
        );
    }

    #[test]
    fn exactly_one_control_is_selected_after_each_selection() {
        let mut session = with_datasets(&["a", "b"]);

        session.select_dataset(DatasetChoice::named("a"));
        assert_eq!(selected_ids(&session), vec!["btn-a"]);

        session.select_dataset(DatasetChoice::named("b"));
        session.select_dataset(DatasetChoice::Root);
        assert_eq!(selected_ids(&session), vec!["btn-null"]);
        assert_eq!(session.selected_dataset(), None);
    }

    #[test]
    fn selecting_an_unknown_dataset_leaves_every_control_selectable() {
        let mut session = with_datasets(&["a"]);
        session.select_dataset(DatasetChoice::named("ghost"));
        assert!(selected_ids(&session).is_empty());
        assert_eq!(session.selected_dataset(), Some("ghost"));
    }

    #[test]
    fn each_selection_emits_one_refresh_for_the_new_dataset() {
        let mut session = with_datasets(&["a", "b"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = seen.clone();
            session.subscribe_selection(move |event| seen.borrow_mut().push(event.clone()))
        };

        let ticket = session.select_dataset(DatasetChoice::named("b"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].choice, DatasetChoice::named("b"));
        assert_eq!(
            seen[0].refresh,
            MetadataRefresh {
                generation: ticket.generation,
                url: format!("{ROOT}datasets/b/metadata/"),
            }
        );
    }

    #[test]
    fn dropped_subscription_stops_refreshes() {
        let mut session = with_datasets(&["a"]);
        let count = Rc::new(RefCell::new(0));
        let subscription = {
            let count = count.clone();
            session.subscribe_selection(move |_| *count.borrow_mut() += 1)
        };

        session.select_dataset(DatasetChoice::named("a"));
        drop(subscription);
        session.select_dataset(DatasetChoice::Root);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn stale_metadata_is_discarded() {
        let mut session = with_datasets(&["a", "b"]);
        let first = session.select_dataset(DatasetChoice::named("a"));
        let second = session.select_dataset(DatasetChoice::named("b"));

        let listing = |name: &str| Ok(Listing::Items(ListingData::Sequence(vec![json!(name)])));

        // Responses arrive out of order: the newer one first.
        assert!(session.apply_metadata(second.generation, listing("from-b")));
        assert!(!session.apply_metadata(first.generation, listing("from-a")));

        assert_eq!(session.metadata_table().rows(), [vec!["from-b".to_string()]]);
    }

    #[test]
    fn metadata_listing_shapes_render_as_rows() {
        let mut session = session();
        let generation = session.metadata_refresh().generation;

        session.apply_metadata(
            generation,
            Ok(Listing::Items(ListingData::Sequence(vec![json!("a"), json!("b")]))),
        );
        assert_eq!(
            session.metadata_table().rows(),
            [vec!["a".to_string()], vec!["b".to_string()]]
        );

        session.apply_metadata(generation, Ok(Listing::Message("bad".into())));
        assert_eq!(session.metadata_table().rows(), [vec!["bad".to_string()]]);

        session.apply_metadata(
            generation,
            Err(RequestError::HttpStatus {
                status: 500,
                status_text: "Internal Server Error".into(),
            }),
        );
        assert_eq!(
            session.metadata_table().rows(),
            [vec!["Request failed: Internal Server Error".to_string()]]
        );
    }

    #[test]
    fn selection_clears_metadata_until_the_response_arrives() {
        let mut session = with_datasets(&["a"]);
        let generation = session.metadata_refresh().generation;
        session.apply_metadata(generation, Ok(Listing::Message("old".into())));

        session.select_dataset(DatasetChoice::named("a"));
        assert_eq!(session.metadata_table().total_rows(), 0);
    }

    #[test]
    fn query_results_render_as_text() {
        let mut session = session();
        session.apply_query_result(Ok(QueryResult::Json(json!({"rows": 1}))));
        assert_eq!(session.results(), Some("{\n    \"rows\": 1\n}"));

        session.apply_query_result(Ok(QueryResult::Text("plain".into())));
        assert_eq!(session.results(), Some("plain"));
    }

    #[test]
    fn quality_failures_clear_the_badge() {
        let mut session = session();
        session.apply_quality(Ok(4));
        assert_eq!(session.badge().glyph_count(), 4);

        session.apply_quality(Err(RequestError::Rejected("nope".into())));
        assert_eq!(session.badge().glyph_count(), 0);
        assert_eq!(session.badge_error(), Some("Request rejected: nope"));
    }

    #[test]
    fn internal_metadata_rows() {
        let mut session = session();
        session.apply_internal_metadata(Ok(vec![vec!["Licence".into(), "OGL".into()]]));
        assert_eq!(session.internal_metadata_table().total_rows(), 1);
        assert_eq!(session.internal_metadata_url(), ROOT);
    }
}
