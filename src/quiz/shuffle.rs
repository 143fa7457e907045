//! Option shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a shuffled copy of `items`, leaving the source untouched.
///
/// Uses the Fisher–Yates shuffle from `rand`.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}
