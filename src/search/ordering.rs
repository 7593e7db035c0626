use crate::board::terrain::den_of;
use crate::board::{Board, Move, Player};

pub const CAPTURE_WEIGHT: i32 = 100;
pub const DEN_ENTRY_BONUS: i32 = 1000;
pub const DEN_APPROACH_WEIGHT: i32 = 5;

/// Cheap ordering key: captures by victim rank, den entry, then den approach.
pub fn move_score(board: &Board, m: Move, player: Player) -> i32 {
    let to = m.to();
    let den = den_of(player.opponent());
    let mut score = 0;
    if let Some(victim) = board.get(to) {
        if victim.owner != player { score += victim.rank as i32 * CAPTURE_WEIGHT; }
    }
    if to == den { score += DEN_ENTRY_BONUS; }
    score += (12 - to.distance(den) as i32) * DEN_APPROACH_WEIGHT;
    score
}

/// Sort descending by `move_score`. The sort is stable, so equal keys keep
/// generation order.
pub fn order_moves(board: &Board, moves: &mut [Move], player: Player) {
    moves.sort_by_cached_key(|&m| -move_score(board, m, player));
}
