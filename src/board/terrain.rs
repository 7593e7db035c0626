use super::{Player, Square};

pub const RED_DEN: Square = Square::new(8, 3);
pub const BLUE_DEN: Square = Square::new(0, 3);

pub const RED_TRAPS: [Square; 3] = [Square::new(8, 2), Square::new(8, 4), Square::new(7, 3)];
pub const BLUE_TRAPS: [Square; 3] = [Square::new(0, 2), Square::new(0, 4), Square::new(1, 3)];

pub const RIVER: [Square; 12] = [
    Square::new(3, 1), Square::new(3, 2), Square::new(4, 1), Square::new(4, 2), Square::new(5, 1), Square::new(5, 2),
    Square::new(3, 4), Square::new(3, 5), Square::new(4, 4), Square::new(4, 5), Square::new(5, 4), Square::new(5, 5),
];

/// (rank, owner, row, col)
pub const INITIAL_LAYOUT: [(u8, Player, usize, usize); 16] = [
    (8, Player::Red, 8, 6), (7, Player::Red, 8, 0), (6, Player::Red, 7, 5), (5, Player::Red, 7, 1),
    (4, Player::Red, 6, 6), (3, Player::Red, 6, 0), (2, Player::Red, 7, 6), (1, Player::Red, 6, 4),
    (8, Player::Blue, 0, 0), (7, Player::Blue, 0, 6), (6, Player::Blue, 1, 1), (5, Player::Blue, 1, 5),
    (4, Player::Blue, 2, 0), (3, Player::Blue, 2, 6), (2, Player::Blue, 1, 0), (1, Player::Blue, 2, 2),
];

pub fn den_of(player: Player) -> Square {
    match player { Player::Red => RED_DEN, Player::Blue => BLUE_DEN }
}

pub fn traps_of(player: Player) -> &'static [Square; 3] {
    match player { Player::Red => &RED_TRAPS, Player::Blue => &BLUE_TRAPS }
}

pub fn is_river(sq: Square) -> bool {
    (3..=5).contains(&sq.row) && matches!(sq.col, 1 | 2 | 4 | 5)
}

pub fn is_den(sq: Square, player: Player) -> bool { sq == den_of(player) }

/// True if `sq` is one of `player`'s own traps.
pub fn is_trap(sq: Square, player: Player) -> bool { traps_of(player).contains(&sq) }

pub fn den_owner(sq: Square) -> Option<Player> {
    if sq == RED_DEN { Some(Player::Red) } else if sq == BLUE_DEN { Some(Player::Blue) } else { None }
}

pub fn trap_owner(sq: Square) -> Option<Player> {
    if RED_TRAPS.contains(&sq) { Some(Player::Red) } else if BLUE_TRAPS.contains(&sq) { Some(Player::Blue) } else { None }
}

/// Manhattan distance from `sq` to the nearest river cell.
pub fn river_distance(sq: Square) -> usize {
    RIVER.iter().map(|r| r.distance(sq)).min().unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn river_predicate_matches_table() {
        let n = Square::all().filter(|&s| is_river(s)).count();
        assert_eq!(n, RIVER.len());
        for s in RIVER { assert!(is_river(s), "{s} should be river"); }
    }

    #[test]
    fn dens_and_traps_sit_on_land() {
        for p in [Player::Red, Player::Blue] {
            assert!(!is_river(den_of(p)));
            for &t in traps_of(p) {
                assert!(!is_river(t));
                assert_eq!(den_of(p).distance(t), 1, "trap {t} not adjacent to den");
            }
        }
    }
}
