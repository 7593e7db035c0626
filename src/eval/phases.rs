use super::Snapshot;
use crate::board::terrain::{is_trap, river_distance};
use crate::board::{Piece, Player, Square, ELEPHANT, RAT};
use crate::rules::can_jump_river;

const CENTER: [Square; 5] = [Square::new(4, 3), Square::new(4, 2), Square::new(4, 4), Square::new(3, 3), Square::new(5, 3)];

const KEY_SQUARES: [Square; 9] = [
    Square::new(2, 3), Square::new(3, 3), Square::new(4, 3), Square::new(5, 3), Square::new(6, 3),
    Square::new(3, 1), Square::new(3, 5), Square::new(5, 1), Square::new(5, 5),
];

fn holds(list: &[(Square, Piece)], f: impl Fn(u8) -> bool) -> bool {
    list.iter().any(|(_, p)| f(p.rank))
}

fn rank_sum(list: &[(Square, Piece)]) -> i32 {
    list.iter().map(|(_, p)| p.rank as i32).sum()
}

// Rows follow the initial layout: red starts at the bottom.
fn home_row(player: Player) -> usize {
    match player { Player::Red => 8, Player::Blue => 0 }
}

/// Fourteen or more pieces on the board.
pub fn opening(snap: &Snapshot) -> i32 {
    if snap.total() < 14 { return 0; }
    let mut score = 0;
    let home = home_row(snap.me);
    let opp_den = snap.opp_den();
    let my_den = snap.my_den();
    for &(sq, p) in &snap.mine {
        if CENTER.contains(&sq) { score += 15; }
        // Tigers and lions off the back two rows.
        if p.is_jumper() && sq.row.abs_diff(home) > 1 { score += 20; }
        if p.rank == RAT && river_distance(sq) <= 2 { score += 10; }
        if p.rank >= 6 && sq.distance(opp_den) < 4 { score -= 15; }
        if p.rank >= 5 && sq.distance(my_den) <= 2 { score += 20; }
    }
    score
}

/// Between eight and twelve pieces.
pub fn midgame(snap: &Snapshot) -> i32 {
    let total = snap.total();
    if !(8..=12).contains(&total) { return 0; }
    let mut score = 0;

    let my_power = rank_sum(&snap.mine);
    let opp_power = rank_sum(&snap.theirs);
    if my_power * 10 > opp_power * 12 {
        score += 50;
    } else if my_power * 10 < opp_power * 8 {
        score -= 30;
    }

    let opp_den = snap.opp_den();
    let elephants: Vec<Square> = snap.theirs.iter().filter(|(_, p)| p.rank == ELEPHANT).map(|&(sq, _)| sq).collect();
    for &(sq, p) in &snap.mine {
        if KEY_SQUARES.contains(&sq) { score += 10; }
        if p.is_jumper() && sq.distance(opp_den) < 6 && can_jump_river(snap.board, sq, snap.me) { score += 25; }
        if p.rank == RAT {
            score += elephants.iter().filter(|&&e| sq.distance(e) < 5).count() as i32 * 30;
        }
        if p.rank >= 6 {
            let guarded = snap.mine.iter().any(|&(o, q)| o != sq && q.rank >= p.rank && o.distance(sq) <= 2);
            if guarded { score += 15; }
        }
    }

    let trapped = snap.theirs.iter().filter(|(sq, _)| is_trap(*sq, snap.me)).count() as i32;
    score + trapped * 40
}

/// Fewer than eight pieces.
pub fn endgame(snap: &Snapshot) -> i32 {
    if snap.total() >= 8 { return 0; }
    let mut score = 0;
    score += (snap.mine.len() as i32 - snap.theirs.len() as i32) * 100;
    score += (rank_sum(&snap.mine) - rank_sum(&snap.theirs)) * 10;

    let my_rat = holds(&snap.mine, |r| r == RAT);
    let opp_elephant = holds(&snap.theirs, |r| r == ELEPHANT);
    if my_rat && !opp_elephant {
        score += 200;
    } else if !my_rat && opp_elephant {
        score -= 200;
    }
    let my_jumper = holds(&snap.mine, |r| r == 6 || r == 7);
    let opp_jumper = holds(&snap.theirs, |r| r == 6 || r == 7);
    if my_jumper && !opp_jumper {
        score += 150;
    } else if !my_jumper && opp_jumper {
        score -= 150;
    }

    let opp_den = snap.opp_den();
    let my_den = snap.my_den();
    let my_race = snap.mine.iter().map(|(sq, _)| sq.distance(opp_den)).min().unwrap_or(100) as i32;
    let opp_race = snap.theirs.iter().map(|(sq, _)| sq.distance(my_den)).min().unwrap_or(100) as i32;
    score += (opp_race - my_race) * 20;

    for (sq, _) in &snap.mine {
        match sq.distance(opp_den) {
            0 => score += 1000,
            1 => score += 500,
            _ => {}
        }
    }
    for (sq, _) in &snap.theirs {
        match sq.distance(my_den) {
            0 => score -= 1000,
            1 => score -= 500,
            _ => {}
        }
    }

    score + (snap.my_moves() as i32 - snap.opp_moves() as i32) * 5
}
