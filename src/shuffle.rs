use rand::{Rng, RngCore};

/// Source of uniform random indices.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is at least 1.
    fn below(&mut self, bound: usize) -> usize;
}

// Samples like `rand::seq`, so a seeded rng gives the same permutation as
// `SliceRandom::shuffle` and the same element as `SliceRandom::choose`.
impl<R: RngCore> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        match u32::try_from(bound) {
            Ok(bound) => self.gen_range(0..bound) as usize,
            Err(_) => self.gen_range(0..bound),
        }
    }
}

/// In-place Fisher–Yates shuffle, the same walk as `SliceRandom::shuffle`.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Uniformly picks one element, or `None` for an empty slice.
pub fn pick<'a, T, R: RandomSource + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.below(items.len()))
    }
}
