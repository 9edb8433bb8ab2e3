use super::{PadError, ShapeMatrix};
use ndarray::array;

#[test]
fn from_shapes() {
    let shapes = ShapeMatrix::from_shapes([[3, 1], [5, 4], [7, 2]]).unwrap();

    assert_eq!(shapes.len(), 3);
    assert_eq!(shapes.rank(), 2);
    assert_eq!(shapes.shape(1), array![5, 4]);
    assert_eq!(shapes.as_array(), &array![[3, 1], [5, 4], [7, 2]]);
}

#[test]
fn from_shapes_empty() {
    let shapes = ShapeMatrix::from_shapes(Vec::<Vec<usize>>::new()).unwrap();

    assert!(shapes.is_empty());
    assert_eq!(shapes.rank(), 0);
    assert_eq!(shapes.target_shape().len(), 0);
}

#[test]
fn from_shapes_rank_mismatch() {
    let shapes: Vec<Vec<usize>> = vec![vec![3, 3], vec![5, 5], vec![7]];

    assert_eq!(
        ShapeMatrix::from_shapes(&shapes),
        Err(PadError::IncompatibleRank {
            index: 2,
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn target_shape() {
    let shapes = ShapeMatrix::from_shapes([[3, 1], [5, 4], [7, 2]]).unwrap();

    assert_eq!(shapes.target_shape(), array![7, 4]);
}

#[test]
fn target_shape_with_empty_axis() {
    let shapes = ShapeMatrix::from_shapes([[0, 2], [0, 0]]).unwrap();

    assert_eq!(shapes.target_shape(), array![0, 2]);
    assert_eq!(shapes.margins(), array![[0, 0], [0, 2]]);
}

#[test]
fn margins() {
    let shapes = ShapeMatrix::from_shapes([[3, 1], [5, 4], [7, 2]]).unwrap();

    assert_eq!(shapes.margins(), array![[4, 3], [2, 0], [0, 2]]);
}
