//! Dataset selection and the base URL every request is built from.

use std::fmt;

/// Something a dataset-selection control can point at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatasetChoice {
    /// Operate on the data source itself.
    Root,
    Named(String),
}

impl DatasetChoice {
    pub fn named(id: impl Into<String>) -> Self {
        Self::Named(id.into())
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Named(id) => Some(id),
        }
    }

    /// Element id of the control for this choice (`btn-null` for the root).
    pub fn control_id(&self) -> String {
        match self {
            Self::Root => "btn-null".to_string(),
            Self::Named(id) => format!("btn-{id}"),
        }
    }
}

impl fmt::Display for DatasetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("Root"),
            Self::Named(id) => f.write_str(id),
        }
    }
}

/// The two states of a dataset-selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Selectable,
    Selected,
}

/// Issued by [`DatasetSelector::select`]; completions carrying an older
/// generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSelector {
    root: String,
    selected: Option<DatasetChoice>,
    generation: u64,
}

impl DatasetSelector {
    /// `root` is the data-source URL; a trailing slash is added when missing.
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        Self {
            root,
            selected: None,
            generation: 0,
        }
    }

    pub fn select(&mut self, choice: DatasetChoice) -> SelectionTicket {
        self.selected = Some(choice);
        self.generation += 1;
        SelectionTicket {
            generation: self.generation,
        }
    }

    pub fn selected(&self) -> Option<&DatasetChoice> {
        self.selected.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn base_url(&self) -> String {
        match self.selected.as_ref().and_then(DatasetChoice::id) {
            Some(id) => format!("{}datasets/{id}/", self.root),
            None => self.root.clone(),
        }
    }

    /// Data endpoint with an already-encoded query string.
    pub fn data_url(&self, query: &str) -> String {
        format!("{}data/?{query}", self.base_url())
    }

    pub fn metadata_url(&self) -> String {
        format!("{}metadata/", self.base_url())
    }

    pub fn datasets_url(&self) -> String {
        format!("{}datasets/", self.base_url())
    }

    pub fn control_state(&self, choice: &DatasetChoice) -> ControlState {
        if self.selected.as_ref() == Some(choice) {
            ControlState::Selected
        } else {
            ControlState::Selectable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "http://localhost/api/datasources/1/";

    #[test]
    fn base_url_is_root_before_selection() {
        let selector = DatasetSelector::new(ROOT);
        assert_eq!(selector.base_url(), ROOT);
        assert_eq!(selector.generation(), 0);
    }

    #[test]
    fn named_selection_suffixes_every_endpoint() {
        let mut selector = DatasetSelector::new(ROOT);
        selector.select(DatasetChoice::named("ds1"));

        assert_eq!(selector.base_url(), format!("{ROOT}datasets/ds1/"));
        assert_eq!(
            selector.metadata_url(),
            format!("{ROOT}datasets/ds1/metadata/")
        );
        assert_eq!(
            selector.datasets_url(),
            format!("{ROOT}datasets/ds1/datasets/")
        );
        assert_eq!(
            selector.data_url("q=x"),
            format!("{ROOT}datasets/ds1/data/?q=x")
        );
    }

    #[test]
    fn root_selection_returns_to_root() {
        let mut selector = DatasetSelector::new(ROOT);
        selector.select(DatasetChoice::named("ds1"));
        selector.select(DatasetChoice::Root);
        assert_eq!(selector.base_url(), ROOT);
    }

    #[test]
    fn missing_trailing_slash_is_added() {
        let selector = DatasetSelector::new("http://localhost/api/datasources/1");
        assert_eq!(selector.base_url(), ROOT);
    }

    #[test]
    fn generations_are_monotonic() {
        let mut selector = DatasetSelector::new(ROOT);
        let first = selector.select(DatasetChoice::named("a"));
        let second = selector.select(DatasetChoice::named("b"));

        assert!(second.generation > first.generation);
        assert!(!selector.is_current(first.generation));
        assert!(selector.is_current(second.generation));
    }

    #[test]
    fn only_the_matching_control_is_selected() {
        let mut selector = DatasetSelector::new(ROOT);
        let controls = [
            DatasetChoice::Root,
            DatasetChoice::named("a"),
            DatasetChoice::named("b"),
        ];
        assert!(controls
            .iter()
            .all(|c| selector.control_state(c) == ControlState::Selectable));

        selector.select(DatasetChoice::named("a"));
        selector.select(DatasetChoice::named("b"));

        let selected: Vec<_> = controls
            .iter()
            .filter(|c| selector.control_state(c) == ControlState::Selected)
            .collect();
        assert_eq!(selected, vec![&DatasetChoice::named("b")]);
    }

    #[test]
    fn control_ids() {
        assert_eq!(DatasetChoice::Root.control_id(), "btn-null");
        assert_eq!(DatasetChoice::named("x").control_id(), "btn-x");
    }
}
