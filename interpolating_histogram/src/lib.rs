//! A frequency histogram over integer samples, with interpolation.
//!
//! [`Histogram`] counts how many times each value was observed. Those counts
//! answer two kinds of question: how often was (or, by linear interpolation,
//! would be) a value observed, and what fraction of the samples are less than
//! or equal to a value. Both work for values that were never observed, as long
//! as they fall within the observed range. Extrapolation past the range is
//! rejected rather than guessed.
//!
//! # Examples
//!
//! ```
//! use interpolating_histogram::Histogram;
//!
//! let histogram: Histogram = [100, 100, 500, 500, 500, 500, 900, 900, 900, 1000]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(Ok(2.0), histogram.get(100));
//! assert_eq!(Ok(3.0), histogram.get_interpolated(300));
//! assert_eq!(0.75, histogram.percentile(700));
//! assert_eq!(500, histogram.value_at_percentile(0.5));
//! ```
//!
//! # Feature Flags
//!
//! * `ahash-hasher` - use [ahash](https://docs.rs/ahash) for the frequency map
//!   instead of the standard library's SipHash.

#[cfg(not(feature = "ahash-hasher"))]
use std::collections::hash_map::RandomState;

#[cfg(feature = "ahash-hasher")]
use ahash::RandomState;

mod error;
mod histogram;
mod neighbors;

pub use error::HistogramError;
pub use histogram::Histogram;

/// Alias for the default hasher, selected by the ahash-hasher crate feature
pub type DefaultBuildHasher = RandomState;
