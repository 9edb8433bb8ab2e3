use crate::{
    error::{PadError, Result},
    fraction::Split,
    shape::ShapeMatrix,
    tie_break::TieBreak,
};
use log::debug;
use ndarray::{s, Array2, Array3, ArrayView1, ArrayView3, Axis};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// How many cells are padded before and after each array along each axis.
///
/// For array `i` and axis `r`, `before(i)[r] + after(i)[r]` is the margin of the array along
/// that axis, so that every padded array has exactly the target shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PadPlan {
    target: Vec<usize>,
    widths: Array3<usize>,
}

impl PadPlan {
    /// Plans the padding of the arrays whose shapes are `shapes`.
    ///
    /// The before count of each axis is `tie_break(margin * fraction)`, the after count is the
    /// rest of the margin.
    ///
    /// # Errors
    ///
    /// * [`PadError::Broadcast`] and [`PadError::FractionOutOfRange`] if `split` is malformed.
    /// * [`PadError::InvalidPadWidth`] if `tie_break` yields a non-integer count, or a count that
    /// is negative or exceeds the margin.
    pub fn compute<T>(shapes: &ShapeMatrix, split: &Split, tie_break: &T) -> Result<Self>
    where
        T: TieBreak + ?Sized,
    {
        let (arrays, rank) = (shapes.len(), shapes.rank());
        let target = shapes.target_shape().to_vec();
        if arrays == 0 {
            return Ok(Self {
                target,
                widths: Array3::zeros((0, rank, 2)),
            });
        }

        let margins = shapes.margins();
        let fractions = split.before_fractions(arrays, rank)?;

        let mut widths = Array3::zeros((arrays, rank, 2));
        for ((array, axis), &margin) in margins.indexed_iter() {
            let raw = margin as f64 * fractions[[array, axis]];
            let rounded = tie_break.tie_break(raw);

            let integral = rounded.is_finite() && rounded.fract() == 0.;
            if !integral || !(0. ..=margin as f64).contains(&rounded) {
                return Err(PadError::InvalidPadWidth {
                    array,
                    axis,
                    margin,
                    raw,
                    rounded,
                });
            }

            let before = rounded as usize;
            widths[[array, axis, 0]] = before;
            widths[[array, axis, 1]] = margin - before;
        }

        debug!(
            "planned padding of {} arrays of rank {} to shape {:?}",
            arrays, rank, target
        );

        Ok(Self { target, widths })
    }

    /// The shape every array is padded to.
    pub fn target_shape(&self) -> &[usize] {
        &self.target
    }

    /// Number of arrays.
    pub fn len(&self) -> usize {
        self.widths.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of axes of the arrays.
    pub fn rank(&self) -> usize {
        self.widths.len_of(Axis(1))
    }

    /// Cells padded before the `index`-th array, one count per axis.
    pub fn before(&self, index: usize) -> ArrayView1<'_, usize> {
        self.widths.slice(s![index, .., 0])
    }

    /// Cells padded after the `index`-th array, one count per axis.
    pub fn after(&self, index: usize) -> ArrayView1<'_, usize> {
        self.widths.slice(s![index, .., 1])
    }

    /// The `(before, after)` pair of each axis of the `index`-th array.
    pub fn widths(&self, index: usize) -> Vec<(usize, usize)> {
        self.widths
            .index_axis(Axis(0), index)
            .outer_iter()
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// The margins the plan distributes, one row per array.
    pub fn margins(&self) -> Array2<usize> {
        self.widths.sum_axis(Axis(2))
    }

    /// Whether the `index`-th array is left untouched.
    pub fn is_identity(&self, index: usize) -> bool {
        self.widths
            .index_axis(Axis(0), index)
            .iter()
            .all(|&width| width == 0)
    }

    /// The whole *N x R x 2* plan, the last axis holds the before and after counts.
    pub fn as_array(&self) -> ArrayView3<'_, usize> {
        self.widths.view()
    }
}
