//! Ranking keys and the two-level business comparison.

use crate::domain::Business;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Record fields that are non-numeric and therefore never valid ranking keys.
const NON_RANKABLE_FIELDS: &[&str] = &[
    "business_id",
    "name",
    "city",
    "state",
    "categories",
    "hours",
    "attributes",
];

/// A numeric business field usable as a primary or secondary ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankField {
    /// Star rating
    Stars,

    /// Number of reviews
    ReviewCount,
}

impl RankField {
    /// Read this field from `business` for comparison.
    ///
    /// A missing field reads as `0.0`, so a record with a genuine zero ranks
    /// the same as a record that lacks the field entirely.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self, business: &Business) -> f64 {
        match self {
            RankField::Stars => business.stars.unwrap_or(0.0),
            RankField::ReviewCount => business.review_count.unwrap_or(0) as f64,
        }
    }

    /// The record field name this key reads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RankField::Stars => "stars",
            RankField::ReviewCount => "review_count",
        }
    }
}

impl fmt::Display for RankField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stars" => Ok(RankField::Stars),
            "review_count" => Ok(RankField::ReviewCount),
            other if NON_RANKABLE_FIELDS.contains(&other) => {
                Err(Error::NotRankable(other.to_string()))
            }
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

/// Compare two businesses by a primary key, falling back to a secondary key.
///
/// Returns [`Ordering::Greater`] when `a` ranks above `b`. Values that are not
/// comparable (a NaN rating) are treated as tied at that level.
#[must_use]
pub fn compare_businesses(
    a: &Business,
    b: &Business,
    primary: RankField,
    secondary: RankField,
) -> Ordering {
    compare_values(primary.value(a), primary.value(b))
        .then_with(|| compare_values(secondary.value(a), secondary.value(b)))
}

fn compare_values(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
