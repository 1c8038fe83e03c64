//! Domain types for business records.
//!
//! A [`Business`] is a sparse record: every field except the identifier is
//! optional, and an absent field is distinct from an empty or zero one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a business record. Not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub String);

impl BusinessId {
    /// Create a new business ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BusinessId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BusinessId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A business record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Identifier (required)
    pub business_id: BusinessId,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// City the business is located in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State the business is located in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Star rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<f64>,

    /// Number of reviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,

    /// Ordered category names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Weekly hours keyed by day name (e.g. `"Monday"` -> `"9:00-17:00"`).
    ///
    /// A day present as a key means the business is open that day. The
    /// time-range value is not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<BTreeMap<String, String>>,

    /// Nested attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Business {
    /// Create a record with only the identifier set.
    ///
    /// Use struct update syntax to fill in the remaining fields:
    ///
    /// ```
    /// use fluent_businesses::Business;
    ///
    /// let b = Business {
    ///     name: Some("China Garden".to_string()),
    ///     stars: Some(4.0),
    ///     ..Business::new("abcd")
    /// };
    /// assert_eq!(b.review_count, None);
    /// ```
    pub fn new(business_id: impl Into<BusinessId>) -> Self {
        Self {
            business_id: business_id.into(),
            name: None,
            city: None,
            state: None,
            stars: None,
            review_count: None,
            categories: None,
            hours: None,
            attributes: None,
        }
    }

    /// Whether the hours mapping has an entry for `day`.
    ///
    /// A record without hours is open on no day.
    #[must_use]
    pub fn is_open_on(&self, day: &str) -> bool {
        self.hours
            .as_ref()
            .is_some_and(|hours| hours.contains_key(day))
    }

    /// Whether the category list contains `category` exactly.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .as_ref()
            .is_some_and(|categories| categories.iter().any(|c| c == category))
    }

    /// Whether the `Ambience` attribute `name` is exactly `true`.
    #[must_use]
    pub fn has_ambience(&self, name: &str) -> bool {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.ambience.as_ref())
            .is_some_and(|ambience| ambience.is_set(name))
    }
}

/// Attribute block of a business record.
///
/// Only `Ambience` is modelled; every other attribute is kept as raw JSON so
/// records survive a serialize/deserialize cycle unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    /// Ambience tags
    #[serde(rename = "Ambience", default, skip_serializing_if = "Option::is_none")]
    pub ambience: Option<Ambience>,

    /// Any other attributes, untouched
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl Attributes {
    /// Attributes holding only an ambience mapping
    #[must_use]
    pub fn with_ambience(ambience: Ambience) -> Self {
        Self {
            ambience: Some(ambience),
            other: BTreeMap::new(),
        }
    }
}

/// Ambience tags of a business, keyed by ambience name.
///
/// Values are stored as JSON because source data is not always a clean
/// boolean. Only a JSON `true` counts as set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ambience(pub BTreeMap<String, Value>);

impl Ambience {
    /// Whether `name` maps to exactly `true`.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(Value::Bool(true)))
    }

    /// Raw value stored for `name`, if any
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Ambience {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, set)| (name.into(), Value::Bool(set)))
                .collect(),
        )
    }
}
