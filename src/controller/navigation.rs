use crate::filters::{FilterField, FilterState};
use crate::models::ListingId;
use url::form_urlencoded;

/// Path of the filtered listing page
pub const PROPERTIES_PATH: &str = "/properties";

/// The navigable location owned by a page.
///
/// `push` adds a history entry, `replace` rewrites the current one. Filter
/// edits only ever replace.
pub trait Navigator {
    fn current(&self) -> String;
    fn push(&mut self, location: String);
    fn replace(&mut self, location: String);
}

/// In-process history stack
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(PROPERTIES_PATH)
    }
}

impl Navigator for MemoryHistory {
    fn current(&self) -> String {
        self.entries.last().cloned().unwrap_or_default()
    }

    fn push(&mut self, location: String) {
        self.entries.push(location);
    }

    fn replace(&mut self, location: String) {
        match self.entries.last_mut() {
            Some(last) => *last = location,
            None => self.entries.push(location),
        }
    }
}

/// Listing page location for a filter state, e.g. `/properties?city=Paris`
pub fn properties_location(filters: &FilterState) -> String {
    format!("{}{}", PROPERTIES_PATH, filters.to_query_string())
}

/// Detail page location for one listing, e.g. `/properties/3`
pub fn detail_location(id: ListingId) -> String {
    format!("{}/{}", PROPERTIES_PATH, id)
}

/// Removes the given filter keys from a location's query, keeping every
/// other key, its order and the fragment.
pub fn without_filter_keys(location: &str, fields: &[FilterField]) -> String {
    let (path, rest) = location.split_once('?').unwrap_or((location, ""));
    let (query, fragment) = match rest.split_once('#') {
        Some((query, fragment)) => (query, Some(fragment)),
        None => (rest, None),
    };

    let kept: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| !fields.iter().any(|f| f.key() == *key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut out = path.to_string();
    if !kept.is_empty() {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(kept)
            .finish();
        out.push('?');
        out.push_str(&encoded);
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
