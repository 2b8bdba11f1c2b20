//! Next/previous resolution
//!
//! Reachability is always derived from the queue position and the shuffle
//! flag, never stored. Under shuffle "next" is always reachable, even for a
//! single-episode queue, and the random pick may land on the current
//! episode again.

use rand::Rng;

/// Whether there is an episode before the current one
pub fn has_previous(current_index: usize) -> bool {
    current_index > 0
}

/// Whether "next" can move anywhere
pub fn has_next(current_index: usize, len: usize, shuffling: bool) -> bool {
    shuffling || current_index.saturating_add(1) < len
}

/// Index "next" should move to, or `None` when it is a no-op
pub fn next_index<R: Rng + ?Sized>(
    current_index: usize,
    len: usize,
    shuffling: bool,
    rng: &mut R,
) -> Option<usize> {
    if shuffling {
        Some(random_index(len, rng))
    } else if has_next(current_index, len, shuffling) {
        Some(current_index + 1)
    } else {
        None
    }
}

/// Index "previous" should move to, or `None` when it is a no-op
pub fn previous_index(current_index: usize) -> Option<usize> {
    if has_previous(current_index) {
        Some(current_index - 1)
    } else {
        None
    }
}

/// Uniform pick in `[0, len)`; an empty range yields 0
///
/// The current index is not excluded.
pub fn random_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    if len == 0 {
        0
    } else {
        rng.gen_range(0..len)
    }
}
