// Jungle rules engine + alpha-beta search
pub mod board;
pub mod eval;
pub mod game;
pub mod perft;
pub mod rules;
pub mod search;
pub mod selfplay;

pub use board::{Move, Piece, Player, Square, State};
pub use search::{Searcher, StrengthProfile, Tier};

/// Fresh initial position, red to move.
pub fn new_game() -> State { State::new_game() }

/// Strength-tiered move for `player`, `None` when `player` has no legal move.
pub fn best_move(state: &State, player: Player, profile: StrengthProfile) -> Option<Move> {
    Searcher::new(profile).choose_move(state, player)
}
