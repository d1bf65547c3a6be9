//! Random permutation and subset sampling.

use rand::Rng;

/// Return a uniformly random permutation of `items`, leaving the input untouched.
///
/// Fisher-Yates on a copy: for each index from the last down to 1, swap it with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Draw `k` distinct elements. Asking for more than exist returns all of them.
pub fn sample<T: Clone, R: Rng>(items: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let mut out = shuffle(items, rng);
    out.truncate(k);
    out
}
