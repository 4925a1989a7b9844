use crate::curves::ProjectiveCurve;
use ark_std::cfg_chunks;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod variable_base;
pub use variable_base::*;

/// The result of this function is only approximately `ln(a)`
/// [`Explanation of usage`]
///
/// [`Explanation of usage`]: https://github.com/scipr-lab/zexe/issues/79#issue-556220473
fn ln_without_floats(a: usize) -> usize {
    // log2(a) * ln(2)
    (crate::log2(a) * 69 / 100) as usize
}

/// Adds up `points`. Under `parallel` the slice is split into one partition
/// per worker thread, each partition is reduced on its own and the partial
/// sums are added at the end.
pub fn sum_par<G: ProjectiveCurve>(points: &[G]) -> G {
    #[cfg(feature = "parallel")]
    let partitions = rayon::current_num_threads();
    #[cfg(not(feature = "parallel"))]
    let partitions = 1;

    let chunk_size = ark_std::cmp::max(1, (points.len() + partitions - 1) / partitions);
    cfg_chunks!(points, chunk_size)
        .map(|chunk| chunk.iter().sum::<G>())
        .sum()
}
