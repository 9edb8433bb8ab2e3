//! The `maxpad` crate grows collections of [`ndarray`] arrays to a common shape.
//!
//! Given arrays of equal rank but different sizes along their axes, `maxpad` computes the
//! *target shape*, that is the largest extent along each axis, and pads every array with a
//! constant value until it reaches it.
//!
//! # Highlights
//!
//! * Works with any element type, any storage and any dimensionality, `IxDyn` included
//! * Fine grained control over where the new cells go, globally, per axis or per array and axis
//! * Pluggable rounding of fractional splits
//! * Parallel padding of large collections
//!
//! # Margins and Fractions
//!
//! The *margin* of an array along an axis is the number of cells it misses to reach the target
//! shape. Each margin is split in a *before* and an *after* part: the before part is placed in
//! front of the data, the after part behind it.
//!
//! How a margin is split is controlled by a [`Fraction`], the share of the margin that goes to
//! one of the two sides. A fraction can be:
//!
//! * a single value, used for all the arrays and all the axes
//! * a vector with one value per axis
//! * a matrix with one value per array and per axis
//!
//! and it is [broadcast] against the margins, so that for instance a matrix with a single column
//! holds one value per array.
//!
//! Fractions are either given for the before side, with [`.before()`](ShapeEqualizer::before()),
//! or for the after side, with [`.after()`](ShapeEqualizer::after()). When both are given the
//! before fraction wins. By default the whole margin goes after the data.
//!
//!```
//! use maxpad::ShapeEqualizer;
//! use ndarray::array;
//!
//! let arrays = [array![0, 1, 2], array![0, 1, 2, 3, 4], array![0, 1, 2, 3, 4, 5, 6]];
//!
//! let padded = ShapeEqualizer::default().equalize(&arrays).unwrap();
//! assert_eq!(padded[0], array![0, 1, 2, 0, 0, 0, 0]);
//! assert_eq!(padded[1], array![0, 1, 2, 3, 4, 0, 0]);
//!
//! let padded = ShapeEqualizer::new(9).after(0.5).equalize(&arrays).unwrap();
//! assert_eq!(padded[0], array![9, 9, 0, 1, 2, 9, 9]);
//! assert_eq!(padded[1], array![9, 0, 1, 2, 3, 4, 9]);
//!```
//!
//! ## Tie-breaks
//!
//! The number of cells padded before the data is `margin * fraction`, which needs not be an
//! integer. A [`TieBreak`] strategy turns it into one; the after count is whatever is left of the
//! margin. The default strategy is [`Rounding::Floor`], thus the spare cell of an odd margin split
//! in halves ends up after the data.
//!
//!```
//! use maxpad::{Rounding, ShapeEqualizer};
//! use ndarray::array;
//!
//! let arrays = [array![1, 2, 3], array![0, 1, 2, 3, 4, 5, 6, 7]];
//!
//! let padded = ShapeEqualizer::new(0).before(0.5).equalize(&arrays).unwrap();
//! assert_eq!(padded[0], array![0, 0, 1, 2, 3, 0, 0, 0]);
//!
//! let padded = ShapeEqualizer::new(0)
//!     .before(0.5)
//!     .tie_break(Rounding::Ceil)
//!     .equalize(&arrays)
//!     .unwrap();
//! assert_eq!(padded[0], array![0, 0, 0, 1, 2, 3, 0, 0]);
//!```
//!
//! Any `Fn(f64) -> f64` can be used as a tie-break, as long as it maps integers to themselves.
//!
//! # Plans
//!
//! The padding of a collection is described by a [`PadPlan`], that can be obtained on its own
//! with [`.plan()`](ShapeEqualizer::plan()) from the shapes of the arrays.
//!
//! # Errors
//!
//! Rank mismatches, malformed fractions and misbehaving tie-breaks are reported as [`PadError`]s.
//! No array is padded when an error occurs.
//!
//! [broadcast]: https://numpy.org/devdocs/user/theory.broadcasting.html
mod equalizer;
pub mod error;
mod fraction;
mod pad;
mod plan;
mod shape;
mod tie_break;

pub use equalizer::{pad_max_shape, ShapeEqualizer};
pub use error::{PadError, Result};
pub use fraction::{Fraction, Split};
pub use pad::Constant;
pub use plan::PadPlan;
pub use shape::ShapeMatrix;
pub use tie_break::{Rounding, TieBreak};
