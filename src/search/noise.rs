use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Move;
use crate::search::profile::StrengthProfile;

/// Whether a weak tier skips the search this turn and plays at random.
pub fn rolls_random_move<R: Rng + ?Sized>(profile: &StrengthProfile, rng: &mut R) -> bool {
    if profile.uses_iterative_deepening() || profile.random_move_probability <= 0.0 { return false; }
    rng.gen::<f64>() < profile.random_move_probability
}

/// Uniform choice over the legal moves.
pub fn random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

/// Uniform evaluation jitter in `[-amp, amp]`.
pub fn jitter<R: Rng + ?Sized>(amp: i32, rng: &mut R) -> i32 {
    if amp <= 0 { return 0; }
    rng.gen_range(-amp..=amp)
}
