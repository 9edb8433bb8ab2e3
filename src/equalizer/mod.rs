use crate::{
    error::{PadError, Result},
    fraction::{Fraction, Split},
    pad::Constant,
    plan::PadPlan,
    shape::ShapeMatrix,
    tie_break::{Rounding, TieBreak},
};
use log::{debug, trace};
use ndarray::{Array, ArrayBase, Data, Dimension};
use num_traits::{NumCast, ToPrimitive, Zero};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Pads collections of arrays to their common maximum shape.
///
/// The equalizer is configured once and can then be applied to any number of collections. By
/// default the whole margin is padded after the data with zeros, and fractional before counts
/// are rounded down.
///
/// ```
/// use maxpad::ShapeEqualizer;
/// use ndarray::array;
///
/// let arrays = [array![0, 1, 2], array![0, 1, 2, 3, 4]];
/// let padded = ShapeEqualizer::new(9).before(1.).equalize(&arrays).unwrap();
///
/// assert_eq!(padded[0], array![9, 9, 0, 1, 2]);
/// assert_eq!(padded[1], array![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShapeEqualizer<A, T = Rounding> {
    split: Split,
    padding: Constant<A>,
    tie_break: T,
}

impl<A> ShapeEqualizer<A> {
    /// Creates an equalizer that fills the new cells with `value`.
    pub fn new(value: A) -> Self {
        Self {
            split: Split::default(),
            padding: Constant(value),
            tie_break: Rounding::default(),
        }
    }
}

impl<A> Default for ShapeEqualizer<A>
where
    A: Zero,
{
    fn default() -> Self {
        Self::new(A::zero())
    }
}

impl<A, T> ShapeEqualizer<A, T> {
    /// Sets the share of each margin that is padded before the data.
    ///
    /// Takes precedence over [`after`](Self::after), regardless of the order of the calls.
    pub fn before<F: Into<Fraction>>(mut self, fraction: F) -> Self {
        self.split = Split::Before(fraction.into());
        self
    }

    /// Sets the share of each margin that is padded after the data.
    ///
    /// Ignored if a before fraction was already given.
    pub fn after<F: Into<Fraction>>(mut self, fraction: F) -> Self {
        if !matches!(self.split, Split::Before(_)) {
            self.split = Split::After(fraction.into());
        }
        self
    }

    /// Sets the fill value.
    pub fn value(mut self, value: A) -> Self {
        self.padding = Constant(value);
        self
    }

    /// Sets the fill value converting it to the element type of the arrays.
    ///
    /// Floating point values are truncated toward zero when the element type is an integer.
    ///
    /// # Errors
    ///
    /// [`PadError::FillValue`] if `value` is NaN or out of the range of `A`.
    pub fn fill_from<V>(self, value: V) -> Result<Self>
    where
        A: NumCast,
        V: ToPrimitive + Display + Copy,
    {
        let converted =
            <A as NumCast>::from(value).ok_or_else(|| PadError::FillValue(value.to_string()))?;
        Ok(self.value(converted))
    }

    /// Sets the strategy that rounds the before counts.
    pub fn tie_break<U: TieBreak>(self, tie_break: U) -> ShapeEqualizer<A, U> {
        ShapeEqualizer {
            split: self.split,
            padding: self.padding,
            tie_break,
        }
    }

    pub fn split(&self) -> &Split {
        &self.split
    }

    pub fn fill_value(&self) -> &A {
        &self.padding.0
    }
}

impl<A, T> ShapeEqualizer<A, T>
where
    A: Clone,
    T: TieBreak,
{
    /// Plans the padding for arrays of the given shapes, without touching any data.
    ///
    /// # Errors
    ///
    /// See [`ShapeMatrix::from_shapes`] and [`PadPlan::compute`].
    pub fn plan<I, S>(&self, shapes: I) -> Result<PadPlan>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[usize]>,
    {
        let shapes = ShapeMatrix::from_shapes(shapes)?;
        PadPlan::compute(&shapes, &self.split, &self.tie_break)
    }

    /// Pads every array to the maximum shape of the collection.
    ///
    /// The arrays are returned in the same order. Either all of them are padded or an error is
    /// returned.
    ///
    /// # Errors
    ///
    /// See [`plan`](Self::plan).
    pub fn equalize<S, D>(&self, arrays: &[ArrayBase<S, D>]) -> Result<Vec<Array<A, D>>>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        let plan = self.plan(arrays.iter().map(|array| array.shape()))?;
        debug!("equalizing {} arrays", plan.len());

        arrays
            .iter()
            .enumerate()
            .map(|(index, array)| self.apply(&plan, index, array))
            .collect()
    }

    /// Same as [`equalize`](Self::equalize), but pads the arrays in parallel.
    ///
    /// # Errors
    ///
    /// See [`plan`](Self::plan).
    pub fn par_equalize<S, D>(&self, arrays: &[ArrayBase<S, D>]) -> Result<Vec<Array<A, D>>>
    where
        A: Send + Sync,
        S: Data<Elem = A>,
        D: Dimension,
        ArrayBase<S, D>: Sync,
    {
        let plan = self.plan(arrays.iter().map(|array| array.shape()))?;
        debug!("equalizing {} arrays in parallel", plan.len());

        arrays
            .par_iter()
            .enumerate()
            .map(|(index, array)| self.apply(&plan, index, array))
            .collect()
    }

    fn apply<S, D>(
        &self,
        plan: &PadPlan,
        index: usize,
        array: &ArrayBase<S, D>,
    ) -> Result<Array<A, D>>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        let widths = plan.widths(index);
        trace!("array {}: pad widths {:?}", index, widths);

        self.padding.pad(array, &widths)
    }
}

/// Pads every array to the maximum shape of the collection, rounding the before counts down.
///
/// This is a shorthand for a [`ShapeEqualizer`] with the default tie-break.
///
/// # Errors
///
/// See [`ShapeEqualizer::equalize`].
pub fn pad_max_shape<A, S, D>(
    arrays: &[ArrayBase<S, D>],
    split: Split,
    value: A,
) -> Result<Vec<Array<A, D>>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    let equalizer = ShapeEqualizer {
        split,
        padding: Constant(value),
        tie_break: Rounding::default(),
    };

    equalizer.equalize(arrays)
}
