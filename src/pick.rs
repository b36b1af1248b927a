use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one element uniformly at random, or `None` when the slice is empty.
pub fn random_item<T>(items: &[T]) -> Option<&T> {
    random_item_with(items, &mut rand::thread_rng())
}

/// Same as [`random_item`] but with a caller-supplied RNG, which keeps the
/// selection reproducible under a seeded generator.
pub fn random_item_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}
