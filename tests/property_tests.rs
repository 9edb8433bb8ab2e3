//! Property-based tests for the shape equalizer.

use maxpad::{Rounding, ShapeEqualizer, ShapeMatrix};
use ndarray::{Array, Array2, ArrayD, IxDyn, Slice};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────────

/// Between one and five shapes sharing a rank between one and three.
fn arb_shapes() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..=3).prop_flat_map(|rank| {
        prop::collection::vec(prop::collection::vec(0usize..6, rank), 1..=5)
    })
}

fn arb_rounding() -> impl Strategy<Value = Rounding> {
    prop_oneof![
        Just(Rounding::Floor),
        Just(Rounding::Ceil),
        Just(Rounding::HalfUp),
        Just(Rounding::HalfDown),
        Just(Rounding::HalfEven),
    ]
}

/// Arrays whose elements are their position in memory, offset by one so that they never
/// collide with the fill value.
fn arrays_of(shapes: &[Vec<usize>]) -> Vec<ArrayD<i64>> {
    shapes
        .iter()
        .map(|shape| {
            let len: usize = shape.iter().product();
            Array::from_shape_vec(IxDyn(shape), (1..=len as i64).collect())
                .expect("length matches shape")
        })
        .collect()
}

// ── Property tests ───────────────────────────────────────────────────────────

proptest! {
    /// Every padded array has exactly the maximum shape of the collection.
    #[test]
    fn padded_arrays_have_target_shape(
        shapes in arb_shapes(),
        fraction in 0.0f64..=1.0,
        rounding in arb_rounding(),
    ) {
        let target = ShapeMatrix::from_shapes(&shapes).unwrap().target_shape();
        let padded = ShapeEqualizer::new(0)
            .before(fraction)
            .tie_break(rounding)
            .equalize(&arrays_of(&shapes))
            .unwrap();

        prop_assert_eq!(padded.len(), shapes.len());
        for array in &padded {
            prop_assert_eq!(array.shape(), target.as_slice().unwrap());
        }
    }

    /// The original data appears unchanged at the before offset, and nowhere else.
    #[test]
    fn data_is_preserved(
        shapes in arb_shapes(),
        fraction in 0.0f64..=1.0,
        rounding in arb_rounding(),
    ) {
        let arrays = arrays_of(&shapes);
        let equalizer = ShapeEqualizer::new(0).after(fraction).tie_break(rounding);
        let plan = equalizer.plan(&shapes).unwrap();
        let padded = equalizer.equalize(&arrays).unwrap();

        for (index, (original, padded)) in arrays.iter().zip(&padded).enumerate() {
            let before = plan.before(index);
            let block = padded.slice_each_axis(|ax| {
                let start = before[ax.axis.index()];
                Slice::from(start..start + original.len_of(ax.axis))
            });

            prop_assert_eq!(&block, original);
            prop_assert_eq!(padded.sum(), original.sum());
        }
    }

    /// Before and after counts always add up to the margin.
    #[test]
    fn margins_are_conserved(
        shapes in arb_shapes(),
        fractions in prop::collection::vec(0.0f64..=1.0, 3),
        rounding in arb_rounding(),
    ) {
        let matrix = ShapeMatrix::from_shapes(&shapes).unwrap();
        let rank = matrix.rank();
        let fractions = fractions[..rank].to_vec();
        let plan = ShapeEqualizer::<u8>::default()
            .before(fractions)
            .tie_break(rounding)
            .plan(&shapes)
            .unwrap();

        prop_assert_eq!(plan.margins(), matrix.margins());
        let margins = matrix.margins();
        for index in 0..plan.len() {
            let widths = plan.widths(index);
            for ((before, after), margin) in widths.into_iter().zip(margins.row(index)) {
                prop_assert_eq!(before + after, *margin);
            }
        }
    }

    /// Arrays that already have the target shape are returned as they are.
    #[test]
    fn full_sized_arrays_are_unchanged(
        side in 0usize..6,
        fraction in 0.0f64..=1.0,
        rounding in arb_rounding(),
    ) {
        let arrays = vec![Array2::from_elem((side, side), 7u8); 3];
        let padded = ShapeEqualizer::new(0)
            .before(fraction)
            .tie_break(rounding)
            .equalize(&arrays)
            .unwrap();

        prop_assert_eq!(padded, arrays);
    }

    /// Running in parallel yields the same arrays.
    #[test]
    fn parallel_matches_sequential(shapes in arb_shapes(), fraction in 0.0f64..=1.0) {
        let arrays = arrays_of(&shapes);
        let equalizer = ShapeEqualizer::new(-1).before(fraction);

        prop_assert_eq!(equalizer.par_equalize(&arrays), equalizer.equalize(&arrays));
    }
}
