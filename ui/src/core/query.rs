//! Query-string encoding for the data endpoint.

use url::form_urlencoded;

use super::params::ParameterStore;

/// Encode every entry as `application/x-www-form-urlencoded`.
///
/// Names and values are trimmed first. Names that only differed by
/// surrounding whitespace collapse into one pair, which keeps the position of
/// the first and the value of the last.
pub fn encode(store: &ParameterStore) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(store.len());

    for (name, value) in store.list_params() {
        let (name, value) = (name.trim(), value.trim());
        match pairs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => pairs.push((name, value)),
        }
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
