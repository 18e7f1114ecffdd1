//! Query parameters entered by the user, keyed by name.

/// Ordered name → value mapping. Setting an existing name overwrites its value
/// in place, so the first insertion decides the position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    entries: Vec<(String, String)>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a parameter. Values are kept verbatim; trimming
    /// happens when the store is encoded.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Entries in insertion order, for rendering.
    pub fn list_params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut store = ParameterStore::new();
        store.set_param("q", "first");
        store.set_param("limit", "10");
        store.set_param("q", "second");

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("q"), Some("second"));
    }

    #[test]
    fn listing_keeps_first_insertion_position() {
        let mut store = ParameterStore::new();
        store.set_param("a", "1");
        store.set_param("b", "2");
        store.set_param("a", "3");

        let listed: Vec<_> = store.list_params().collect();
        assert_eq!(listed, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn values_are_stored_untrimmed() {
        let mut store = ParameterStore::new();
        store.set_param(" q ", " padded ");
        assert_eq!(store.get(" q "), Some(" padded "));
    }
}
