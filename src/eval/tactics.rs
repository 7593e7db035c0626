use super::Snapshot;
use crate::board::terrain::{is_river, is_trap, river_distance, traps_of};
use crate::board::{Board, Piece, Player, Square, ELEPHANT, RAT};
use crate::rules::{is_valid_move, jump_targets};

/// Enemy pieces of rank <= attacker's that it may take right now.
fn threatened<'s>(board: &'s Board, from: Square, attacker: Piece, targets: &'s [(Square, Piece)]) -> impl Iterator<Item = &'s (Square, Piece)> + 's {
    targets
        .iter()
        .filter(move |&&(to, victim)| attacker.rank >= victim.rank && is_valid_move(board, from, to, attacker.owner))
}

fn supporters(list: &[(Square, Piece)], sq: Square, rank: u8) -> usize {
    list.iter().filter(|&&(o, q)| o != sq && q.rank >= rank && o.distance(sq) <= 2).count()
}

/// River presence in half units: 2 in the river, 1 within two cells of it.
fn river_presence_halves(list: &[(Square, Piece)]) -> i32 {
    list.iter()
        .map(|(sq, _)| if is_river(*sq) { 2 } else if river_distance(*sq) <= 2 { 1 } else { 0 })
        .sum()
}

pub fn coordination(snap: &Snapshot) -> i32 {
    let mut score = 0;

    for &(sq, p) in &snap.mine {
        score += supporters(&snap.mine, sq, p.rank) as i32 * 5;
    }

    let my_threats: usize = snap.mine.iter().map(|&(sq, p)| threatened(snap.board, sq, p, &snap.theirs).count()).sum();
    let opp_threats: usize = snap.theirs.iter().map(|&(sq, p)| threatened(snap.board, sq, p, &snap.mine).count()).sum();
    score += (my_threats as i32 - opp_threats as i32) * 10;

    if !snap.mine.is_empty() {
        let n = snap.mine.len() as f64;
        let avg_row = snap.mine.iter().map(|(sq, _)| sq.row as f64).sum::<f64>() / n;
        let avg_col = snap.mine.iter().map(|(sq, _)| sq.col as f64).sum::<f64>() / n;
        let spread: f64 = snap.mine.iter().map(|(sq, _)| (sq.row as f64 - avg_row).abs() + (sq.col as f64 - avg_col).abs()).sum();
        if spread < 10.0 {
            score += 20;
        } else if spread > 25.0 {
            score -= 20;
        }
    }

    let my_den = snap.my_den();
    score += snap.mine.iter().filter(|(sq, _)| sq.distance(my_den) <= 2).count() as i32 * 10;

    score + (river_presence_halves(&snap.mine) - river_presence_halves(&snap.theirs)) * 15 / 2
}

fn key_path(player: Player) -> impl Fn(Square) -> bool {
    // Central columns in the three rows in front of the enemy den; red
    // attacks upward from the bottom of the board.
    let rows = match player { Player::Red => 0..=2, Player::Blue => 6..=8 };
    move |sq: Square| (2..=4).contains(&sq.col) && rows.contains(&sq.row)
}

pub fn advanced(snap: &Snapshot) -> i32 {
    let board = snap.board;
    let opp_den = snap.opp_den();
    let mut score = 0;

    // Immediate captures, worth more against pieces stuck in our traps.
    for &(sq, p) in &snap.mine {
        for &(vsq, victim) in threatened(board, sq, p, &snap.theirs) {
            let value = victim.rank as i32 * 20;
            score += if is_trap(vsq, snap.me) { value * 3 / 2 } else { value };
        }
    }

    // Forks and threats on big pieces.
    for &(sq, p) in &snap.mine {
        let hits: Vec<Piece> = threatened(board, sq, p, &snap.theirs).map(|&(_, v)| v).collect();
        if hits.len() > 1 { score += hits.len() as i32 * 15; }
        score += hits.iter().filter(|v| v.rank >= 6).count() as i32 * 25;
    }

    // Pieces covering our traps.
    for &trap in traps_of(snap.me) {
        score += snap.mine.iter().filter(|(sq, _)| sq.distance(trap) <= 2).count() as i32 * 10;
    }

    for &(sq, p) in &snap.mine {
        let d = sq.distance(opp_den) as i32;
        if d <= 3 {
            score += (4 - d) * 30;
            if p.rank >= 6 { score += (4 - d) * 20; }
        }
    }

    let elephants: Vec<Square> = snap.theirs.iter().filter(|(_, p)| p.rank == ELEPHANT).map(|&(sq, _)| sq).collect();
    for (sq, _) in snap.mine.iter().filter(|(_, p)| p.rank == RAT) {
        for &e in &elephants {
            match sq.distance(e) {
                0..=3 => score += 50,
                4..=5 => score += 30,
                _ => {}
            }
        }
    }

    // Where a jump would land.
    for &(sq, p) in &snap.mine {
        if !p.is_jumper() { continue; }
        for to in jump_targets(board, sq, snap.me) {
            score += (12 - to.distance(opp_den) as i32) * 15;
        }
    }

    // Small pieces screening big ones.
    for (sq, _) in snap.mine.iter().filter(|(_, p)| p.rank <= 3) {
        score += snap.mine.iter().filter(|(o, q)| q.rank >= 6 && o.distance(*sq) <= 2).count() as i32 * 20;
    }

    // Their threats against us, discounted to 80%.
    let mut danger = 0;
    for &(sq, p) in &snap.theirs {
        for &(_, victim) in threatened(board, sq, p, &snap.mine) {
            let value = victim.rank as i32 * 15;
            danger += if victim.rank >= 6 { value * 3 / 2 } else { value };
        }
    }
    score -= danger * 4 / 5;

    let on_path = key_path(snap.me);
    score += snap.mine.iter().filter(|(sq, _)| on_path(*sq)).count() as i32 * 15;

    let (mine, theirs) = (snap.mine.len(), snap.theirs.len());
    if mine > theirs + 2 {
        score += 100;
    } else if theirs > mine + 2 {
        score -= 100;
    }

    score
}
