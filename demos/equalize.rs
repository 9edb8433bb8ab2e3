use maxpad::{Rounding, ShapeEqualizer};
use ndarray::{Array, Array2};

fn main() {
    // Ranges of different lengths.
    let ranges: Vec<_> = [3, 5, 7].iter().map(|&len| Array::from_iter(0..len)).collect();

    println!("All the padding after the data:");
    for array in ShapeEqualizer::default().equalize(&ranges).unwrap() {
        println!("{}", array);
    }

    println!("\nAll the padding before the data, filled with nines:");
    for array in ShapeEqualizer::new(9).before(1.).equalize(&ranges).unwrap() {
        println!("{}", array);
    }

    println!("\nCentered, spare cells before the data:");
    let centered = ShapeEqualizer::new(9).before(0.5).tie_break(Rounding::Ceil);
    for array in centered.equalize(&ranges).unwrap() {
        println!("{}", array);
    }

    // Squares filled with their own size.
    let squares: Vec<_> = [3, 5, 7]
        .iter()
        .map(|&size| Array2::from_elem((size, size), size))
        .collect();

    println!("\nEach square aligned differently:");
    let equalizer = ShapeEqualizer::default().before(vec![[0., 0.5], [0.5, 1.], [0., 0.]]);
    println!("{:?}", equalizer.plan(squares.iter().map(|square| square.shape())).unwrap());
    for array in equalizer.par_equalize(&squares).unwrap() {
        println!("{}\n", array);
    }
}
