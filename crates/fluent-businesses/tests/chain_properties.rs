//! Property tests for the fluent query chain.
//!
//! Records are generated with small value domains so that filters and
//! tie-breaks hit both matching and non-matching cases often.

use fluent_businesses::{Ambience, Attributes, Business, FluentBusinesses, RankField};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

const CITIES: &[&str] = &["Charlotte", "Phoenix", "Las Vegas"];
const STATES: &[&str] = &["NC", "AZ", "NV"];
const CATEGORIES: &[&str] = &["Restaurants", "Chinese", "Car Wash", "Roofing"];
const DAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const AMBIENCES: &[&str] = &["romantic", "intimate", "classy", "hipster"];

fn pick(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(options).prop_map(str::to_string)
}

fn business_strategy() -> impl Strategy<Value = Business> {
    (
        "[a-z]{1,3}",
        prop::option::of(pick(CITIES)),
        prop::option::of(pick(STATES)),
        prop::option::of((0u8..=10).prop_map(|half_stars| f64::from(half_stars) / 2.0)),
        prop::option::of(0u64..50),
        prop::option::of(prop::collection::vec(pick(CATEGORIES), 0..3)),
        prop::option::of(prop::collection::btree_set(pick(DAYS), 0..7)),
        prop::option::of(prop::collection::vec((pick(AMBIENCES), any::<bool>()), 0..4)),
    )
        .prop_map(
            |(id, city, state, stars, review_count, categories, days, ambience)| Business {
                city,
                state,
                stars,
                review_count,
                categories,
                hours: days.map(|days| {
                    days.into_iter()
                        .map(|day| (day, "9:00-17:00".to_string()))
                        .collect()
                }),
                attributes: ambience
                    .map(|flags| Attributes::with_ambience(flags.into_iter().collect::<Ambience>())),
                ..Business::new(id)
            },
        )
}

fn chain_strategy() -> impl Strategy<Value = FluentBusinesses> {
    prop::collection::vec(business_strategy(), 0..20).prop_map(FluentBusinesses::new)
}

fn rank_field() -> impl Strategy<Value = RankField> {
    prop_oneof![Just(RankField::Stars), Just(RankField::ReviewCount)]
}

/// A filter call with its arguments.
#[derive(Debug, Clone)]
enum FilterOp {
    CityInState(String, String),
    StarsGeq(f64),
    Category(String),
    OpenOn(Vec<String>),
    Ambience(String),
}

impl FilterOp {
    fn apply(&self, chain: &FluentBusinesses) -> FluentBusinesses {
        match self {
            FilterOp::CityInState(city, state) => chain.from_city_in_state(city, state),
            FilterOp::StarsGeq(stars) => chain.has_stars_geq(*stars),
            FilterOp::Category(category) => chain.in_category(category),
            FilterOp::OpenOn(days) => chain.has_hours_on_days(days),
            FilterOp::Ambience(ambience) => chain.has_ambience(ambience),
        }
    }
}

fn filter_op() -> impl Strategy<Value = FilterOp> {
    prop_oneof![
        (pick(CITIES), pick(STATES)).prop_map(|(city, state)| FilterOp::CityInState(city, state)),
        (0u8..=10).prop_map(|half_stars| FilterOp::StarsGeq(f64::from(half_stars) / 2.0)),
        pick(CATEGORIES).prop_map(FilterOp::Category),
        prop::collection::vec(pick(DAYS), 0..3).prop_map(FilterOp::OpenOn),
        pick(AMBIENCES).prop_map(FilterOp::Ambience),
    ]
}

/// Whether `sub` appears in `full` in order, matching by record identity.
fn is_ordered_subsequence(sub: &FluentBusinesses, full: &FluentBusinesses) -> bool {
    let mut remaining = full.data().iter();
    sub.data()
        .iter()
        .all(|wanted| remaining.any(|candidate| Arc::ptr_eq(candidate, wanted)))
}

proptest! {
    #[test]
    fn filters_never_grow_and_preserve_order(
        chain in chain_strategy(),
        op in filter_op(),
    ) {
        let narrowed = op.apply(&chain);
        prop_assert!(narrowed.len() <= chain.len(), "{:?} grew the chain", op);
        prop_assert!(is_ordered_subsequence(&narrowed, &chain), "{:?} reordered records", op);
    }

    #[test]
    fn filters_are_idempotent(
        chain in chain_strategy(),
        op in filter_op(),
    ) {
        let once = op.apply(&chain);
        let twice = op.apply(&once);
        prop_assert_eq!(once.data(), twice.data(), "{:?} is not idempotent", op);
    }

    #[test]
    fn filters_on_empty_chain_stay_empty(op in filter_op()) {
        prop_assert!(op.apply(&FluentBusinesses::default()).is_empty());
    }

    #[test]
    fn rating_filter_results_satisfy_threshold(
        chain in chain_strategy(),
        half_stars in 0u8..=10,
    ) {
        let threshold = f64::from(half_stars) / 2.0;
        for business in chain.has_stars_geq(threshold).iter() {
            prop_assert!(business.stars.is_some_and(|s| s >= threshold));
        }
    }

    #[test]
    fn day_filter_results_are_open_every_day(
        chain in chain_strategy(),
        days in prop::collection::vec(pick(DAYS), 1..3),
    ) {
        let open = chain.has_hours_on_days(&days);
        for business in open.iter() {
            for day in &days {
                prop_assert!(business.is_open_on(day));
            }
        }
        let expected = chain
            .iter()
            .filter(|b| days.iter().all(|day| b.is_open_on(day)))
            .count();
        prop_assert_eq!(open.len(), expected);
    }

    #[test]
    fn comparison_is_antisymmetric(
        a in business_strategy(),
        b in business_strategy(),
        primary in rank_field(),
        secondary in rank_field(),
    ) {
        let chain = FluentBusinesses::default();
        prop_assert_eq!(
            chain.compare_businesses(&a, &b, primary, secondary),
            chain.compare_businesses(&b, &a, primary, secondary).reverse()
        );
    }

    #[test]
    fn primary_tie_defers_to_secondary(
        a in business_strategy(),
        b in business_strategy(),
    ) {
        let b = Business { stars: a.stars, ..b };
        let expected = RankField::ReviewCount
            .value(&a)
            .partial_cmp(&RankField::ReviewCount.value(&b))
            .unwrap();
        prop_assert_eq!(
            FluentBusinesses::default().compare_businesses(
                &a,
                &b,
                RankField::Stars,
                RankField::ReviewCount
            ),
            expected
        );
    }

    #[test]
    fn missing_fields_compare_as_zero(
        primary in rank_field(),
        secondary in rank_field(),
    ) {
        let missing = Business::new("missing");
        let zeroed = Business {
            stars: Some(0.0),
            review_count: Some(0),
            ..Business::new("zeroed")
        };
        prop_assert_eq!(
            FluentBusinesses::default().compare_businesses(&missing, &zeroed, primary, secondary),
            Ordering::Equal
        );
    }

    #[test]
    fn top_business_is_first_maximum(
        chain in chain_strategy(),
        primary in rank_field(),
        secondary in rank_field(),
    ) {
        match chain.get_top_business(primary, secondary) {
            None => {
                prop_assert!(chain.is_empty());
            }
            Some(top) => {
                let position = chain
                    .data()
                    .iter()
                    .position(|b| Arc::ptr_eq(b, &top))
                    .unwrap();
                for (index, other) in chain.iter().enumerate() {
                    let ordering = chain.compare_businesses(other, &top, primary, secondary);
                    prop_assert_ne!(ordering, Ordering::Greater);
                    if index < position {
                        prop_assert_eq!(ordering, Ordering::Less);
                    }
                }
            }
        }
    }
}
