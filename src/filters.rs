//! Listing filters and their query-string form.
//!
//! [`FilterState`] is the single source of truth for what the listing page
//! is narrowed to. It travels through the navigable URL (`?city=Paris&...`)
//! and into API requests; both directions go through this module so the key
//! names and their order stay identical.
//!
//! An absent field always means "any": empty values are never written to a
//! URL or a request, and reading an empty value yields `None`.

use crate::models::{PropertyType, TransactionType};
use url::form_urlencoded;

/// One filterable dimension, in canonical query-string order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    City,
    TransactionType,
    PropertyType,
    ZipCode,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::City,
        FilterField::TransactionType,
        FilterField::PropertyType,
        FilterField::ZipCode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FilterField::City => "city",
            FilterField::TransactionType => "transaction_type",
            FilterField::PropertyType => "property_type",
            FilterField::ZipCode => "zip_code",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// User-chosen constraints on the listing collection.
///
/// Equality compares effective constraints, so `Some("")` equals `None`.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub city: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub property_type: Option<PropertyType>,
    pub zip_code: Option<String>,
}

impl FilterState {
    /// Reads recognised keys from a query string.
    ///
    /// Accepts a bare query (`city=Paris`), one with a leading `?`, or a
    /// whole location (`/properties?city=Paris`). Unknown keys are ignored.
    /// When a key repeats, its first occurrence wins. Enumerated fields
    /// holding a value outside their set are treated as "any".
    pub fn hydrate_from_location(location: &str) -> Self {
        Self::hydrate_with_rejects(location).0
    }

    /// Like [`FilterState::hydrate_from_location`], also reporting the
    /// recognised fields whose non-empty value was dropped as out of set.
    pub fn hydrate_with_rejects(location: &str) -> (Self, Vec<FilterField>) {
        let query = match location.split_once('?') {
            Some((_, query)) => query,
            None if location.starts_with('/') => "",
            None => location,
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut state = FilterState::default();
        let mut seen = Vec::with_capacity(FilterField::ALL.len());
        let mut rejected = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some(field) = FilterField::from_key(&key) else {
                continue;
            };
            if seen.contains(&field) {
                continue;
            }
            seen.push(field);
            state.assign(field, &value);
            if !value.is_empty() && state.value(field).is_none() {
                rejected.push(field);
            }
        }

        (state, rejected)
    }

    /// Returns a copy with exactly one field replaced. An empty value clears it.
    pub fn with(&self, field: FilterField, value: &str) -> Self {
        let mut next = self.clone();
        next.assign(field, value);
        next
    }

    fn assign(&mut self, field: FilterField, value: &str) {
        let value = (!value.is_empty()).then_some(value);
        match field {
            FilterField::City => self.city = value.map(str::to_string),
            FilterField::TransactionType => {
                self.transaction_type = value.and_then(TransactionType::parse)
            }
            FilterField::PropertyType => self.property_type = value.and_then(PropertyType::parse),
            FilterField::ZipCode => self.zip_code = value.map(str::to_string),
        }
    }

    /// Wire value of one field, `None` when unconstrained
    pub fn value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::City => self.city.as_deref(),
            FilterField::TransactionType => self.transaction_type.map(|t| t.as_str()),
            FilterField::PropertyType => self.property_type.map(|t| t.as_str()),
            FilterField::ZipCode => self.zip_code.as_deref(),
        }
        .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.value(*f).is_none())
    }

    /// Non-empty fields as `(key, value)` pairs in canonical order
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        FilterField::ALL
            .iter()
            .filter_map(|field| self.value(*field).map(|v| (field.key(), v)))
            .collect()
    }

    /// Query string for the navigable URL: `""` when empty, else `?k=v&...`
    pub fn to_query_string(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("?{}", encoded)
    }
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| self.value(*field) == other.value(*field))
    }
}

impl Eq for FilterState {}
