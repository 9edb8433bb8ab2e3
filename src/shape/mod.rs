use crate::error::{PadError, Result};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// The shapes of a collection of arrays, stacked row by row.
///
/// Row `i` is the shape of the `i`-th array. All rows have the same length, that is the common
/// rank of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMatrix {
    shapes: Array2<usize>,
}

impl ShapeMatrix {
    /// Stacks the given shapes into a matrix.
    ///
    /// An empty sequence of shapes produces an empty matrix.
    ///
    /// # Errors
    ///
    /// [`PadError::IncompatibleRank`] if a shape has a different length than the first one.
    pub fn from_shapes<I, S>(shapes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[usize]>,
    {
        let mut rank = None;
        let mut rows: Vec<Vec<usize>> = Vec::new();

        for (index, shape) in shapes.into_iter().enumerate() {
            let shape = shape.as_ref();
            let expected = *rank.get_or_insert(shape.len());
            if shape.len() != expected {
                return Err(PadError::IncompatibleRank {
                    index,
                    expected,
                    found: shape.len(),
                });
            }
            rows.push(shape.to_vec());
        }

        let shapes = Array2::from_shape_fn((rows.len(), rank.unwrap_or(0)), |(i, j)| rows[i][j]);

        Ok(Self { shapes })
    }

    /// Number of arrays.
    pub fn len(&self) -> usize {
        self.shapes.nrows()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.nrows() == 0
    }

    /// Common rank of the arrays.
    pub fn rank(&self) -> usize {
        self.shapes.ncols()
    }

    /// Shape of the `index`-th array.
    pub fn shape(&self, index: usize) -> ArrayView1<'_, usize> {
        self.shapes.row(index)
    }

    /// The whole *N x R* matrix.
    pub fn as_array(&self) -> &Array2<usize> {
        &self.shapes
    }

    /// Column-wise maximum, the shape every array is grown to.
    pub fn target_shape(&self) -> Array1<usize> {
        self.shapes
            .fold_axis(Axis(0), 0, |max, &size| std::cmp::max(*max, size))
    }

    /// How many cells each array misses along each axis to reach the target shape.
    pub fn margins(&self) -> Array2<usize> {
        let target = self.target_shape();
        let mut margins = self.shapes.clone();
        margins
            .rows_mut()
            .into_iter()
            .for_each(|mut row| row.zip_mut_with(&target, |size, max| *size = max - *size));
        margins
    }
}

#[cfg(test)]
mod test;
