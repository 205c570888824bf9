use thiserror::Error;

/// Why a histogram could not answer a count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistogramError {
    /// Nothing has been added yet, so there is no range to answer within.
    #[error("histogram is uninitialized: no values have been added")]
    Uninitialized,

    /// The queried value lies outside of the observed range.
    #[error("extrapolation of histogram values is not supported: {value} is outside [{min}, {max}]")]
    Extrapolation {
        /// The value that was queried
        value: i64,
        /// Smallest observed value
        min: i64,
        /// Largest observed value
        max: i64,
    },
}
