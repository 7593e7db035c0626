//! Move legality, capture resolution and move application.
//!
//! Legality is checked pairwise: `legal_moves` tries every (from, to) pair
//! against `is_valid_move`. The board is small and fixed, so the exhaustive
//! scan keeps generation and validation in a single code path.

use crate::board::terrain::{is_den, is_river, is_trap};
use crate::board::{Board, Move, Piece, Player, Square, State, ELEPHANT, RAT};

const JUMPS: [(isize, isize); 4] = [(4, 0), (-4, 0), (0, 3), (0, -3)];

/// Whether `attacker` on `from` may take `defender` on `to`, ignoring geometry.
pub fn can_capture(attacker: Piece, from: Square, defender: Piece, to: Square) -> bool {
    if attacker.owner == defender.owner { return false; }
    // A piece in its own trap cannot be taken; in the enemy's trap anything takes it.
    if is_trap(to, defender.owner) { return false; }
    if is_trap(to, attacker.owner) { return true; }
    let from_river = is_river(from);
    let to_river = is_river(to);
    if attacker.rank == RAT {
        if from_river && !to_river { return false; }
        if defender.rank == ELEPHANT { return !from_river; }
        if defender.rank == RAT && from_river && to_river { return true; }
    } else if to_river {
        return false;
    }
    attacker.rank >= defender.rank
}

/// Intervening squares of a river jump, or `None` if `from -> to` is not a jump shape.
fn jump_path(from: Square, to: Square) -> Option<Vec<Square>> {
    let dr = from.row.abs_diff(to.row);
    let dc = from.col.abs_diff(to.col);
    let (steps, sr, sc): (usize, isize, isize) = if dr == 4 && dc == 0 {
        (3, if to.row > from.row { 1 } else { -1 }, 0)
    } else if dc == 3 && dr == 0 {
        (2, 0, if to.col > from.col { 1 } else { -1 })
    } else {
        return None;
    };
    (1..=steps as isize).map(|k| from.offset(sr * k, sc * k)).collect()
}

pub fn is_valid_move(board: &Board, from: Square, to: Square, player: Player) -> bool {
    if !from.on_board() || !to.on_board() { return false; }
    let piece = match board.get(from) {
        Some(p) if p.owner == player => p,
        _ => return false,
    };
    if is_den(to, player) { return false; }
    let target = board.get(to);
    if matches!(target, Some(t) if t.owner == player) { return false; }

    if piece.is_jumper() {
        if let Some(path) = jump_path(from, to) {
            let clear = path.iter().all(|&sq| is_river(sq) && board.get(sq).is_none());
            if !clear { return false; }
            return match target {
                None => true,
                Some(t) => can_capture(piece, from, t, to),
            };
        }
    }

    if from.distance(to) != 1 { return false; }
    if is_river(to) && piece.rank != RAT { return false; }
    match target {
        None => true,
        Some(t) => can_capture(piece, from, t, to),
    }
}

/// Every legal move for `player`, in row-major scan order of (from, to).
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    for (from, _) in board.pieces_of(player) {
        for to in Square::all() {
            if is_valid_move(board, from, to, player) { moves.push(Move::between(from, to)); }
        }
    }
    moves
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.pieces_of(player).any(|(from, _)| Square::all().any(|to| is_valid_move(board, from, to, player)))
}

/// Legal destinations for the piece on `from`.
pub fn moves_from(board: &Board, from: Square, player: Player) -> Vec<Move> {
    Square::all().filter(|&to| is_valid_move(board, from, to, player)).map(|to| Move::between(from, to)).collect()
}

/// Legal river-jump landings for a tiger or lion on `sq`.
pub fn jump_targets(board: &Board, sq: Square, player: Player) -> Vec<Square> {
    match board.get(sq) {
        Some(p) if p.owner == player && p.is_jumper() => JUMPS
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(dr, dc))
            .filter(|&to| is_valid_move(board, sq, to, player))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn can_jump_river(board: &Board, sq: Square, player: Player) -> bool {
    !jump_targets(board, sq, player).is_empty()
}

impl State {
    pub fn is_valid_move(&self, from: Square, to: Square, player: Player) -> bool {
        is_valid_move(&self.board, from, to, player)
    }

    pub fn legal_moves(&self, player: Player) -> Vec<Move> { legal_moves(&self.board, player) }

    pub fn has_legal_move(&self, player: Player) -> bool { has_legal_move(&self.board, player) }

    /// Plays `mv` for the side to move. Rejected moves return false and leave
    /// the state untouched. A move into the enemy den or one that removes the
    /// last enemy piece ends the game; otherwise the turn passes.
    ///
    /// Running out of moves is not detected here; callers check
    /// `has_legal_move` for the new side to move.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if self.terminal { return false; }
        let (from, to) = (mv.from(), mv.to());
        if !is_valid_move(&self.board, from, to, self.active) { return false; }
        let piece = self.board.take(from);
        self.board.set(to, piece);
        let opp = self.active.opponent();
        if is_den(to, opp) || self.board.count(opp) == 0 {
            self.terminal = true;
            self.winner = Some(self.active);
            return true;
        }
        self.active = opp;
        true
    }
}
