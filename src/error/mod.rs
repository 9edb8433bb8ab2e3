//! Errors produced while planning or applying max-shape padding.

use thiserror::Error;

/// Errors raised by the shape equalizer.
///
/// Every fallible operation of this crate is all-or-nothing: when an error is returned no array
/// has been padded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PadError {
    /// An array of the collection has a different number of axes than the first one.
    #[error("incompatible rank: array {index} has rank {found}, expected {expected}")]
    IncompatibleRank {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A padding fraction is either NaN or not within `[0, 1]`.
    #[error("fraction out of range: {value} for array {array}, axis {axis} is not within [0, 1]")]
    FractionOutOfRange {
        array: usize,
        axis: usize,
        value: f64,
    },

    /// A fraction's shape can't be broadcast against the `(arrays, rank)` margin matrix.
    #[error("cannot broadcast fraction of shape {shape:?} to ({arrays}, {rank})")]
    Broadcast {
        shape: Vec<usize>,
        arrays: usize,
        rank: usize,
    },

    /// The tie-break strategy produced a before count that is not an integer in `[0, margin]`.
    #[error(
        "invalid pad width: tie-break mapped {raw} to {rounded} for array {array}, axis {axis} \
         with margin {margin}"
    )]
    InvalidPadWidth {
        array: usize,
        axis: usize,
        margin: usize,
        raw: f64,
        rounded: f64,
    },

    /// The number of `(before, after)` pairs differs from the number of axes of the array.
    #[error("got {found} pad widths for an array of rank {expected}")]
    WidthsRank { expected: usize, found: usize },

    /// The fill value can't be represented in the element type of the arrays.
    #[error("fill value {0} is not representable in the array element type")]
    FillValue(String),
}

/// Shorthand for results carrying a [`PadError`].
pub type Result<T> = std::result::Result<T, PadError>;
