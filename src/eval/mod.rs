//! Static evaluation, positive when good for the queried player.
//!
//! Every tier scores material, position, den proximity, piece safety, trap
//! and river occupancy, mobility and river-jump availability. Professional
//! and Master add opening and midgame heuristics; Master alone adds endgame,
//! coordination and advanced tactics and plays without jitter.

pub mod phases;
pub mod tactics;

use rand::Rng;

use crate::board::terrain::{den_of, is_river, is_trap};
use crate::board::{Board, Piece, Player, Square, State, RAT};
use crate::rules::{can_jump_river, is_valid_move, legal_moves};
use crate::search::noise;
use crate::search::profile::Tier;

pub const WIN_SCORE: i32 = 10_000;
pub const JITTER: i32 = 5;

// Indexed by rank; slot 0 unused.
static BEGINNER_VALUES: [i32; 9] = [0, 80, 150, 250, 350, 400, 600, 700, 800];
static EASY_VALUES: [i32; 9] = [0, 100, 180, 280, 380, 450, 700, 800, 900];
static AMATEUR_VALUES: [i32; 9] = [0, 150, 220, 330, 440, 500, 800, 900, 1000];
static PROFESSIONAL_VALUES: [i32; 9] = [0, 200, 280, 380, 480, 550, 900, 1000, 1200];
static MASTER_VALUES: [i32; 9] = [0, 300, 350, 420, 500, 580, 1000, 1200, 1500];

pub fn material_table(tier: Tier) -> &'static [i32; 9] {
    match tier {
        Tier::Beginner => &BEGINNER_VALUES,
        Tier::Easy => &EASY_VALUES,
        Tier::Amateur => &AMATEUR_VALUES,
        Tier::Professional => &PROFESSIONAL_VALUES,
        Tier::Master => &MASTER_VALUES,
    }
}

/// Positional value of `sq` for `player`: 10 per row advanced, 5 on river cells.
pub fn square_value(sq: Square, player: Player) -> i32 {
    if is_river(sq) { return 5; }
    match player {
        Player::Red => (8 - sq.row as i32) * 10,
        Player::Blue => sq.row as i32 * 10,
    }
}

/// Both sides' pieces split once per evaluation.
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub me: Player,
    pub opp: Player,
    pub mine: Vec<(Square, Piece)>,
    pub theirs: Vec<(Square, Piece)>,
}

impl<'a> Snapshot<'a> {
    pub fn new(board: &'a Board, me: Player) -> Self {
        let (mine, theirs): (Vec<_>, Vec<_>) = board.pieces().partition(|(_, p)| p.owner == me);
        Self { board, me, opp: me.opponent(), mine, theirs }
    }

    pub fn total(&self) -> usize { self.mine.len() + self.theirs.len() }

    pub fn my_den(&self) -> Square { den_of(self.me) }

    pub fn opp_den(&self) -> Square { den_of(self.opp) }

    pub fn my_moves(&self) -> usize { legal_moves(self.board, self.me).len() }

    pub fn opp_moves(&self) -> usize { legal_moves(self.board, self.opp).len() }
}

#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    tier: Tier,
    values: &'static [i32; 9],
}

impl Evaluator {
    pub fn new(tier: Tier) -> Self { Self { tier, values: material_table(tier) } }

    pub fn tier(&self) -> Tier { self.tier }

    pub fn value(&self, rank: u8) -> i32 { self.values.get(rank as usize).copied().unwrap_or(0) }

    /// Full score including the tier's jitter.
    pub fn score<R: Rng + ?Sized>(&self, state: &State, player: Player, rng: &mut R) -> i32 {
        let base = self.static_score(&state.board, player);
        if self.tier.is_master() { base } else { base + noise::jitter(JITTER, rng) }
    }

    /// Deterministic part of the score.
    pub fn static_score(&self, board: &Board, player: Player) -> i32 {
        let snap = Snapshot::new(board, player);
        let mut score = 0;
        if self.tier.uses_phase_heuristics() { score += phases::opening(&snap); }
        score += self.material_and_position(&snap);
        score += (snap.mine.len() as i32 - snap.theirs.len() as i32) * 50;
        score += den_proximity(&snap);
        score += safety(&snap);
        score += self.trap_occupancy(&snap);
        score += rat_river(&snap);
        score += high_rank_monopoly(&snap);
        score += (snap.my_moves() as i32 - snap.opp_moves() as i32) * 2;
        score += jump_readiness(&snap);
        if self.tier.uses_phase_heuristics() { score += phases::midgame(&snap); }
        if self.tier.is_master() {
            score += phases::endgame(&snap);
            score += tactics::coordination(&snap);
            score += tactics::advanced(&snap);
        }
        score
    }

    pub fn material_and_position(&self, snap: &Snapshot) -> i32 {
        let mine: i32 = snap.mine.iter().map(|&(sq, p)| self.value(p.rank) + square_value(sq, snap.me)).sum();
        let theirs: i32 = snap.theirs.iter().map(|&(sq, p)| self.value(p.rank) + square_value(sq, snap.opp)).sum();
        mine - theirs
    }

    /// Half value for pieces sitting in the other side's trap.
    pub fn trap_occupancy(&self, snap: &Snapshot) -> i32 {
        let caught: i32 = snap.theirs.iter().filter(|(sq, _)| is_trap(*sq, snap.me)).map(|(_, p)| self.value(p.rank)).sum();
        let exposed: i32 = snap.mine.iter().filter(|(sq, _)| is_trap(*sq, snap.opp)).map(|(_, p)| self.value(p.rank)).sum();
        (caught - exposed) / 2
    }
}

/// Pieces within distance 2 of a den: +(3 - d) * 30 for attackers near the enemy den.
pub fn den_proximity(snap: &Snapshot) -> i32 {
    let near = |list: &[(Square, Piece)], den: Square| -> i32 {
        list.iter().map(|(sq, _)| sq.distance(den)).filter(|&d| d <= 2).map(|d| (3 - d as i32) * 30).sum()
    };
    near(&snap.mine, snap.opp_den()) - near(&snap.theirs, snap.my_den())
}

/// Danger to the piece on `sq` in half points: each enemy piece able to take it
/// next turn costs rank * 1.5, doubled when it sits in an enemy trap.
/// Any legal capturer counts, outranked or not: a rat beside an elephant or a
/// cat beside a trapped lion is a real threat.
pub fn danger_halves(board: &Board, sq: Square, piece: Piece) -> i32 {
    let enemy = piece.owner.opponent();
    let per = if is_trap(sq, enemy) { piece.rank as i32 * 6 } else { piece.rank as i32 * 3 };
    board.pieces_of(enemy).filter(|&(from, _)| is_valid_move(board, from, sq, enemy)).count() as i32 * per
}

pub fn safety(snap: &Snapshot) -> i32 {
    let mine: i32 = snap.mine.iter().map(|&(sq, p)| danger_halves(snap.board, sq, p)).sum();
    let theirs: i32 = snap.theirs.iter().map(|&(sq, p)| danger_halves(snap.board, sq, p)).sum();
    (theirs - mine) / 2
}

pub fn rat_river(snap: &Snapshot) -> i32 {
    let swimming = |list: &[(Square, Piece)]| list.iter().filter(|(sq, p)| p.rank == RAT && is_river(*sq)).count() as i32;
    (swimming(&snap.mine) - swimming(&snap.theirs)) * 30
}

/// +100 when only we hold a rank 6+ piece, -100 when only they do.
pub fn high_rank_monopoly(snap: &Snapshot) -> i32 {
    let mine = snap.mine.iter().any(|(_, p)| p.rank >= 6);
    let theirs = snap.theirs.iter().any(|(_, p)| p.rank >= 6);
    match (mine, theirs) {
        (true, false) => 100,
        (false, true) => -100,
        _ => 0,
    }
}

pub fn jump_readiness(snap: &Snapshot) -> i32 {
    let ready = |list: &[(Square, Piece)], who: Player| {
        list.iter().filter(|(sq, p)| p.is_jumper() && can_jump_river(snap.board, *sq, who)).count() as i32
    };
    (ready(&snap.mine, snap.me) - ready(&snap.theirs, snap.opp)) * 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_tables_grow_with_tier() {
        for rank in 1..=8usize {
            let v: Vec<i32> = Tier::ALL.iter().map(|&t| material_table(t)[rank]).collect();
            assert!(v.windows(2).all(|w| w[0] <= w[1]), "rank {rank}: {v:?}");
        }
    }

    #[test]
    fn square_value_flattens_on_river() {
        assert_eq!(square_value(Square::new(4, 1), Player::Red), 5);
        assert_eq!(square_value(Square::new(4, 3), Player::Red), 40);
        assert!(square_value(Square::new(1, 3), Player::Red) > square_value(Square::new(6, 3), Player::Red));
        assert!(square_value(Square::new(7, 3), Player::Blue) > square_value(Square::new(2, 3), Player::Blue));
    }
}
