//! Fluent query chain over business records.
//!
//! Every filter returns a new [`FluentBusinesses`] and leaves the chain it was
//! called on untouched. Records are shared between chains through [`Arc`], so
//! narrowing a chain copies handles, not records.

use crate::domain::Business;
use crate::rank::{RankField, compare_businesses};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, trace};

/// An immutable, ordered sequence of business records with chainable queries.
///
/// # Examples
///
/// ```
/// use fluent_businesses::{Business, FluentBusinesses};
///
/// let chain = FluentBusinesses::new(vec![
///     Business { stars: Some(4.0), ..Business::new("a") },
///     Business { stars: Some(3.0), ..Business::new("b") },
/// ]);
///
/// let four_plus = chain.has_stars_geq(4.0);
/// assert_eq!(four_plus.len(), 1);
/// assert_eq!(chain.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FluentBusinesses {
    data: Vec<Arc<Business>>,
}

impl FluentBusinesses {
    /// Creates a chain over `records`, in the given order.
    pub fn new(records: impl IntoIterator<Item = Business>) -> Self {
        records.into_iter().collect()
    }

    /// Creates a chain over records that are already shared.
    pub fn from_shared(records: impl IntoIterator<Item = Arc<Business>>) -> Self {
        Self {
            data: records.into_iter().collect(),
        }
    }

    /// The records in this chain, in order.
    #[must_use]
    pub fn data(&self) -> &[Arc<Business>] {
        &self.data
    }

    /// Number of records in this chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this chain has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Business> + ExactSizeIterator {
        self.data.iter().map(Arc::as_ref)
    }

    /// Keep only the records matching `predicate`, preserving order.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Business) -> bool,
    {
        Self {
            data: self
                .data
                .iter()
                .filter(|business| predicate(business))
                .cloned()
                .collect(),
        }
    }

    /// Businesses located in exactly `city`, `state`.
    ///
    /// Matching is case-sensitive. Records missing either field are dropped.
    #[must_use]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_city_in_state(&self, city: &str, state: &str) -> Self {
        let result = self.filter(|business| {
            business.city.as_deref() == Some(city) && business.state.as_deref() == Some(state)
        });
        debug!(
            city,
            state,
            before = self.len(),
            after = result.len(),
            "Filtered by location"
        );
        result
    }

    /// Businesses rated at least `stars`. Unrated records are dropped.
    #[must_use]
    pub fn has_stars_geq(&self, stars: f64) -> Self {
        let result = self.filter(|business| business.stars.is_some_and(|s| s >= stars));
        debug!(
            stars,
            before = self.len(),
            after = result.len(),
            "Filtered by minimum rating"
        );
        result
    }

    /// Businesses listing `category` among their categories.
    #[must_use]
    pub fn in_category(&self, category: &str) -> Self {
        let result = self.filter(|business| business.has_category(category));
        debug!(
            category,
            before = self.len(),
            after = result.len(),
            "Filtered by category"
        );
        result
    }

    /// Businesses open on every one of `days`.
    ///
    /// Only the presence of a day in the hours mapping is checked. An empty
    /// `days` keeps every record.
    #[must_use]
    pub fn has_hours_on_days<S: AsRef<str>>(&self, days: &[S]) -> Self {
        let result =
            self.filter(|business| days.iter().all(|day| business.is_open_on(day.as_ref())));
        debug!(
            days = days.len(),
            before = self.len(),
            after = result.len(),
            "Filtered by open days"
        );
        result
    }

    /// Businesses whose `Ambience` attribute `ambience` is exactly `true`.
    #[must_use]
    pub fn has_ambience(&self, ambience: &str) -> Self {
        let result = self.filter(|business| business.has_ambience(ambience));
        debug!(
            ambience,
            before = self.len(),
            after = result.len(),
            "Filtered by ambience"
        );
        result
    }

    /// See [`compare_businesses`].
    #[must_use]
    pub fn compare_businesses(
        &self,
        a: &Business,
        b: &Business,
        primary: RankField,
        secondary: RankField,
    ) -> Ordering {
        compare_businesses(a, b, primary, secondary)
    }

    /// The highest-ranked business by `primary`, ties broken by `secondary`.
    ///
    /// When several records tie on both keys the earliest one wins. Returns
    /// `None` for an empty chain.
    #[must_use]
    pub fn get_top_business(
        &self,
        primary: RankField,
        secondary: RankField,
    ) -> Option<Arc<Business>> {
        let mut records = self.data.iter();
        let mut top = records.next()?;

        for candidate in records {
            if compare_businesses(candidate, top, primary, secondary) == Ordering::Greater {
                trace!(
                    candidate = %candidate.business_id,
                    previous = %top.business_id,
                    "New top business"
                );
                top = candidate;
            }
        }

        debug!(
            %primary,
            %secondary,
            business_id = %top.business_id,
            "Selected top business"
        );
        Some(Arc::clone(top))
    }

    /// Highest rated business, ties broken by review count.
    #[must_use]
    pub fn best_place(&self) -> Option<Arc<Business>> {
        self.get_top_business(RankField::Stars, RankField::ReviewCount)
    }

    /// Most reviewed business, ties broken by star rating.
    #[must_use]
    pub fn most_reviews(&self) -> Option<Arc<Business>> {
        self.get_top_business(RankField::ReviewCount, RankField::Stars)
    }
}

impl FromIterator<Business> for FluentBusinesses {
    fn from_iter<I: IntoIterator<Item = Business>>(iter: I) -> Self {
        Self::from_shared(iter.into_iter().map(Arc::new))
    }
}

impl From<Vec<Business>> for FluentBusinesses {
    fn from(records: Vec<Business>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a FluentBusinesses {
    type Item = &'a Arc<Business>;
    type IntoIter = std::slice::Iter<'a, Arc<Business>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
