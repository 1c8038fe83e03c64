//! A fluent query library over in-memory business records.
//!
//! Start from a [`FluentBusinesses`] chain, narrow it with filters, and reduce
//! it with one of the ranking queries:
//!
//! ```
//! use fluent_businesses::{Business, FluentBusinesses};
//!
//! let records = vec![
//!     Business {
//!         city: Some("Charlotte".to_string()),
//!         state: Some("NC".to_string()),
//!         stars: Some(4.0),
//!         review_count: Some(10),
//!         ..Business::new("a")
//!     },
//!     Business {
//!         city: Some("Phoenix".to_string()),
//!         state: Some("AZ".to_string()),
//!         stars: Some(5.0),
//!         ..Business::new("b")
//!     },
//! ];
//!
//! let best = FluentBusinesses::new(records)
//!     .from_city_in_state("Charlotte", "NC")
//!     .best_place()
//!     .expect("one business in Charlotte");
//! assert_eq!(best.business_id.as_str(), "a");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod domain;
pub mod error;
pub mod query;
pub mod rank;

pub use domain::{Ambience, Attributes, Business, BusinessId};
pub use error::{Error, Result};
pub use query::FluentBusinesses;
pub use rank::{RankField, compare_businesses};
