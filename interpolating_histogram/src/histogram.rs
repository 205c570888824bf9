use std::{
    cell::OnceCell,
    collections::{hash_map::Entry, HashMap},
    fmt::Display,
    hash::BuildHasher,
};

use crate::{
    neighbors::{bracketing_indices, interpolate},
    DefaultBuildHasher, HistogramError,
};

/// A histogram of exact counts per observed integer value.
///
/// Values are added one occurrence at a time. Queries can then ask for the
/// count at a value, an interpolated count for a value between two observed
/// values, or the percentile rank of any value.
///
/// Ordering and cumulative totals are computed lazily on the first query that
/// needs them and kept until the next [`add`](Histogram::add). Queries take
/// `&self`, but the lazy caches make a Histogram `!Sync`: share it across
/// threads behind a lock.
#[derive(Debug, Clone)]
pub struct Histogram<TBuildHasher = DefaultBuildHasher> {
    frequencies: HashMap<i64, u64, TBuildHasher>,
    count: u64,
    /// (min, max) of everything added so far
    bounds: Option<(i64, i64)>,
    sorted_values: OnceCell<Vec<i64>>,
    /// Running totals aligned with sorted_values
    cumulative: OnceCell<Vec<u64>>,
}

impl Histogram {
    /// Create an empty histogram with the default hasher.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<TBuildHasher> Default for Histogram<TBuildHasher>
where
    TBuildHasher: Default,
{
    fn default() -> Self {
        Self::with_hasher(TBuildHasher::default())
    }
}

impl<TBuildHasher> Histogram<TBuildHasher> {
    /// Create an empty histogram whose frequency map uses `hasher`.
    pub fn with_hasher(hasher: TBuildHasher) -> Self {
        Self {
            frequencies: HashMap::with_hasher(hasher),
            count: 0,
            bounds: None,
            sorted_values: OnceCell::new(),
            cumulative: OnceCell::new(),
        }
    }

    /// Number of values added, duplicates included.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of distinct values added.
    pub fn distinct_len(&self) -> usize {
        self.frequencies.len()
    }

    /// Smallest value added, if any
    pub fn min(&self) -> Option<i64> {
        self.bounds.map(|(min, _)| min)
    }

    /// Largest value added, if any
    pub fn max(&self) -> Option<i64> {
        self.bounds.map(|(_, max)| max)
    }
}

impl<TBuildHasher> Histogram<TBuildHasher>
where
    TBuildHasher: BuildHasher,
{
    /// Add one occurrence of `value`.
    pub fn add<T: Into<i64>>(&mut self, value: T) {
        let value = value.into();
        self.bounds = Some(match self.bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
        match self.frequencies.entry(value) {
            Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
            Entry::Vacant(vacant) => {
                vacant.insert(1);
                // Only a new distinct value changes the ordering
                self.sorted_values.take();
            }
        }
        self.cumulative.take();
        self.count += 1;
    }

    /// The exact count observed for `value`.
    ///
    /// A value inside the observed range that was never added has a count of 0.
    /// Use [`get_interpolated`](Histogram::get_interpolated) to estimate one
    /// from its neighbors instead.
    pub fn get(&self, value: i64) -> Result<f64, HistogramError> {
        self.check_in_range(value)?;
        Ok(self.frequency(value) as f64)
    }

    /// The count observed for `value`, or a linear interpolation between the
    /// counts of the nearest observed values below and above it.
    pub fn get_interpolated(&self, value: i64) -> Result<f64, HistogramError> {
        let (min, max) = self.check_in_range(value)?;
        if let Some(count) = self.frequencies.get(&value) {
            return Ok(*count as f64);
        }

        let sorted = self.sorted_values();
        let (below, above) = bracketing_indices(sorted, value)
            .ok_or(HistogramError::Extrapolation { value, min, max })?;
        Ok(interpolate(
            value,
            (sorted[below], self.frequency(sorted[below]) as f64),
            (sorted[above], self.frequency(sorted[above]) as f64),
        ))
    }

    /// The fraction of added values that are less than or equal to `value`.
    ///
    /// Values below the observed range are at 0.0 and values above it are at
    /// 1.0. Between observed values the cumulative count is interpolated
    /// linearly.
    ///
    /// # Panics
    ///
    /// If nothing has been added to the histogram.
    pub fn percentile(&self, value: i64) -> f64 {
        assert!(!self.is_empty(), "percentile of an uninitialized histogram");

        let sorted = self.sorted_values();
        let Some((below, above)) = bracketing_indices(sorted, value) else {
            return if value < sorted[0] { 0.0 } else { 1.0 };
        };
        let cumulative = self.cumulative();
        let at_or_below = interpolate(
            value,
            (sorted[below], cumulative[below] as f64),
            (sorted[above], cumulative[above] as f64),
        );
        at_or_below / self.count as f64
    }

    /// The smallest observed value whose percentile is at least `percentile`.
    ///
    /// `percentile` is expected in [0, 1]. At or below 0 this is the minimum and
    /// above 1 it is the maximum.
    ///
    /// # Panics
    ///
    /// If nothing has been added to the histogram.
    pub fn value_at_percentile(&self, percentile: f64) -> i64 {
        assert!(
            !self.is_empty(),
            "value at percentile of an uninitialized histogram"
        );

        let sorted = self.sorted_values();
        let total = self.count as f64;
        let index = self
            .cumulative()
            .partition_point(|at_or_below| (*at_or_below as f64 / total) < percentile);
        sorted[index.min(sorted.len() - 1)]
    }

    /// Observed values and their counts, in ascending value order.
    pub fn value_counts(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.sorted_values()
            .iter()
            .map(move |value| (*value, self.frequency(*value)))
    }

    fn frequency(&self, value: i64) -> u64 {
        self.frequencies.get(&value).copied().unwrap_or_default()
    }

    fn check_in_range(&self, value: i64) -> Result<(i64, i64), HistogramError> {
        let (min, max) = self.bounds.ok_or(HistogramError::Uninitialized)?;
        if value < min || max < value {
            log::debug!("rejecting extrapolation of {value} outside [{min}, {max}]");
            return Err(HistogramError::Extrapolation { value, min, max });
        }
        Ok((min, max))
    }

    fn sorted_values(&self) -> &[i64] {
        self.sorted_values.get_or_init(|| {
            log::trace!("sorting {} distinct values", self.frequencies.len());
            let mut values: Vec<i64> = self.frequencies.keys().copied().collect();
            values.sort_unstable();
            values
        })
    }

    fn cumulative(&self) -> &[u64] {
        self.cumulative.get_or_init(|| {
            let sorted = self.sorted_values();
            log::trace!("accumulating {} distinct values", sorted.len());
            sorted
                .iter()
                .scan(0, |total, value| {
                    *total += self.frequency(*value);
                    Some(*total)
                })
                .collect()
        })
    }
}

impl<T, TBuildHasher> Extend<T> for Histogram<TBuildHasher>
where
    T: Into<i64>,
    TBuildHasher: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }
}

impl<T, TBuildHasher> FromIterator<T> for Histogram<TBuildHasher>
where
    T: Into<i64>,
    TBuildHasher: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut histogram = Self::default();
        histogram.extend(values);
        histogram
    }
}

impl<TBuildHasher> Display for Histogram<TBuildHasher> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entry(&"count", &self.count)
            .entry(&"distinct", &self.frequencies.len())
            .entry(&"min", &self.min())
            .entry(&"max", &self.max())
            .finish()
    }
}
