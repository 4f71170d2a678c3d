//! Query parameter parsing.
//!
//! Decoding and grouping happen here; nothing in this module knows about
//! model fields or value types.

use std::borrow::Cow;
use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use queryfilter_core::types::filter::FilterOp;

/// Substring search term.
pub const SEARCH: &str = "search";
/// Field to sort by.
pub const ORDER_BY: &str = "order_by";
/// `asc` or `desc`.
pub const ORDER_DIRECTION: &str = "order_direction";
/// 1-based page number.
pub const PAGE: &str = "page";
/// Page size.
pub const LIMIT: &str = "limit";

/// Keys that control the scope instead of naming a field.
pub const RESERVED_KEYS: [&str; 5] = [SEARCH, ORDER_BY, ORDER_DIRECTION, PAGE, LIMIT];

/// Whether `key` is a control parameter.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Decoded query parameters.
///
/// Keys keep first-occurrence order; repeated keys collect every value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw (still percent-encoded) query string such as
    /// `username=sampleUser&page=2`. A leading `?` is ignored.
    pub fn parse(raw_query: &str) -> Self {
        let raw_query = raw_query.strip_prefix('?').unwrap_or(raw_query);
        let mut params = Self::new();

        for pair in raw_query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.append(decode_component(key), decode_component(value));
        }

        params
    }

    /// Build from already-decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.append(key.into(), value.into());
        }
        params
    }

    /// Add a value, grouping it with earlier values of the same key.
    /// Empty keys are dropped.
    pub fn append(&mut self, key: String, value: String) {
        if key.is_empty() {
            return;
        }
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    /// Every value of `key`, in order of appearance.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.index
            .get(key)
            .map(|&idx| self.entries[idx].1.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `key` was supplied at all.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate keys with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameter was supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The raw value of a candidate filter parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// The key appeared once.
    Single(String),
    /// The key was repeated.
    Many(Vec<String>),
}

/// A candidate field filter, not yet checked against any model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedParameter {
    /// The query key as supplied.
    pub field_name: String,
    /// Requested operator.
    pub operator: FilterOp,
    /// The supplied value(s).
    pub raw_value: RawValue,
}

/// Candidate field filters: every non-reserved key, in parse order.
pub fn parse_parameters(params: &QueryParams) -> Vec<ParsedParameter> {
    params
        .iter()
        .filter(|(key, _)| !is_reserved(key))
        .map(|(key, values)| {
            let (operator, raw_value) = match values {
                [single] => (FilterOp::Eq, RawValue::Single(single.clone())),
                many => (FilterOp::In, RawValue::Many(many.to_vec())),
            };
            ParsedParameter {
                field_name: key.to_string(),
                operator,
                raw_value,
            }
        })
        .collect()
}

/// `application/x-www-form-urlencoded` component decoding: `+` is a space,
/// invalid escapes are kept literally and invalid UTF-8 is replaced.
fn decode_component(component: &str) -> String {
    let component: Cow<'_, str> = if component.contains('+') {
        Cow::Owned(component.replace('+', " "))
    } else {
        Cow::Borrowed(component)
    };
    percent_decode_str(&component).decode_utf8_lossy().into_owned()
}
