use crate::error::{PadError, Result};
use ndarray::{Array1, Array2};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The share of an axis' margin that goes to one side of the data.
///
/// A fraction is broadcast against the *N x R* margin matrix, where *N* is the number of arrays
/// and *R* is their rank, following the usual [broadcasting] rules.
///
/// [broadcasting]: https://numpy.org/devdocs/user/theory.broadcasting.html
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Fraction {
    /// The same fraction for every array and every axis.
    Global(f64),
    /// One fraction per axis, shared by all the arrays.
    PerAxis(Array1<f64>),
    /// One fraction per array and per axis.
    PerArray(Array2<f64>),
}

impl Fraction {
    /// Shape of the fraction before broadcasting.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Global(_) => Vec::new(),
            Self::PerAxis(values) => values.shape().to_vec(),
            Self::PerArray(values) => values.shape().to_vec(),
        }
    }

    /// Expands the fraction to an `(arrays, rank)` matrix.
    ///
    /// # Errors
    ///
    /// * [`PadError::Broadcast`] if the shape of the fraction is not compatible with
    /// `(arrays, rank)`.
    /// * [`PadError::FractionOutOfRange`] if any of the values is NaN or lies outside `[0, 1]`.
    pub fn broadcast_to(&self, arrays: usize, rank: usize) -> Result<Array2<f64>> {
        let incompatible = || PadError::Broadcast {
            shape: self.shape(),
            arrays,
            rank,
        };

        let fractions = match self {
            Self::Global(value) => Array2::from_elem((arrays, rank), *value),
            Self::PerAxis(values) => values
                .broadcast((arrays, rank))
                .ok_or_else(incompatible)?
                .to_owned(),
            Self::PerArray(values) => values
                .broadcast((arrays, rank))
                .ok_or_else(incompatible)?
                .to_owned(),
        };

        if let Some(((array, axis), &value)) = fractions
            .indexed_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            return Err(PadError::FractionOutOfRange { array, axis, value });
        }

        Ok(fractions)
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Self::Global(value)
    }
}

impl From<Array1<f64>> for Fraction {
    fn from(values: Array1<f64>) -> Self {
        Self::PerAxis(values)
    }
}

impl From<Vec<f64>> for Fraction {
    fn from(values: Vec<f64>) -> Self {
        Self::PerAxis(Array1::from(values))
    }
}

impl From<&[f64]> for Fraction {
    fn from(values: &[f64]) -> Self {
        Self::PerAxis(Array1::from(values.to_vec()))
    }
}

impl<const R: usize> From<[f64; R]> for Fraction {
    fn from(values: [f64; R]) -> Self {
        Self::PerAxis(Array1::from(values.to_vec()))
    }
}

impl From<Array2<f64>> for Fraction {
    fn from(values: Array2<f64>) -> Self {
        Self::PerArray(values)
    }
}

impl<const R: usize> From<Vec<[f64; R]>> for Fraction {
    fn from(rows: Vec<[f64; R]>) -> Self {
        Self::PerArray(Array2::from_shape_fn((rows.len(), R), |(i, j)| rows[i][j]))
    }
}

impl<const R: usize, const N: usize> From<[[f64; R]; N]> for Fraction {
    fn from(rows: [[f64; R]; N]) -> Self {
        Self::PerArray(Array2::from_shape_fn((N, R), |(i, j)| rows[i][j]))
    }
}

/// Which side of the data a [`Fraction`] describes.
///
/// The planner always works with *before* fractions; an *after* fraction `f` is turned into the
/// before fraction `1 - f`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Split {
    /// Share of the margin padded before the data.
    Before(Fraction),
    /// Share of the margin padded after the data.
    After(Fraction),
}

impl Split {
    pub fn before<F: Into<Fraction>>(fraction: F) -> Self {
        Self::Before(fraction.into())
    }

    pub fn after<F: Into<Fraction>>(fraction: F) -> Self {
        Self::After(fraction.into())
    }

    /// Splits every margin in halves.
    pub fn centered() -> Self {
        Self::Before(Fraction::Global(0.5))
    }

    /// Broadcasts the split to an `(arrays, rank)` matrix of before fractions.
    ///
    /// # Errors
    ///
    /// See [`Fraction::broadcast_to`].
    pub fn before_fractions(&self, arrays: usize, rank: usize) -> Result<Array2<f64>> {
        match self {
            Self::Before(fraction) => fraction.broadcast_to(arrays, rank),
            Self::After(fraction) => fraction
                .broadcast_to(arrays, rank)
                .map(|after| after.mapv_into(|value| 1.0 - value)),
        }
    }
}

/// All the margin goes after the data.
impl Default for Split {
    fn default() -> Self {
        Self::After(Fraction::Global(1.0))
    }
}
