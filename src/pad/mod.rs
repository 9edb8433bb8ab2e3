use crate::error::{PadError, Result};
use ndarray::{Array, ArrayBase, Data, Dimension, Slice};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Constant padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Constant<A>(pub A);

impl<A> Constant<A>
where
    A: Clone,
{
    /// Returns a copy of `base` grown by `widths[r].0` cells before and `widths[r].1` cells after
    /// along each axis `r`. The new cells hold the constant.
    ///
    /// # Errors
    ///
    /// [`PadError::WidthsRank`] if there isn't exactly one pair per axis of `base`.
    pub fn pad<S, D>(
        &self,
        base: &ArrayBase<S, D>,
        widths: &[(usize, usize)],
    ) -> Result<Array<A, D>>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        if widths.len() != base.ndim() {
            return Err(PadError::WidthsRank {
                expected: base.ndim(),
                found: widths.len(),
            });
        }

        let mut padded_dim = base.raw_dim();
        padded_dim
            .slice_mut()
            .iter_mut()
            .zip(widths)
            .for_each(|(len, (before, after))| *len += before + after);

        let mut padded = Array::from_elem(padded_dim, self.0.clone());

        padded
            .slice_each_axis_mut(|ax| {
                let (before, len) = (widths[ax.axis.index()].0, base.len_of(ax.axis));
                Slice::from(before..before + len)
            })
            .assign(base);

        Ok(padded)
    }
}
