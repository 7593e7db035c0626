use junglebot::rules::can_capture;
use junglebot::{Piece, Player, Square, State};

fn red(rank: u8) -> Piece { Piece::new(rank, Player::Red) }
fn blue(rank: u8) -> Piece { Piece::new(rank, Player::Blue) }

#[test]
fn rank_decides_on_open_ground() {
    let (a, b) = (Square::new(6, 3), Square::new(5, 3));
    assert!(can_capture(red(5), a, blue(5), b), "equal ranks trade");
    assert!(can_capture(red(6), a, blue(2), b));
    assert!(!can_capture(red(2), a, blue(6), b));
    assert!(!can_capture(red(8), a, red(1), b), "own piece");
}

#[test]
fn rat_and_elephant() {
    let land = Square::new(6, 0);
    let land2 = Square::new(5, 0);
    assert!(can_capture(red(1), land, blue(8), land2), "rat takes elephant from land");
    assert!(can_capture(blue(8), land2, red(1), land), "elephant still outranks rat");
    let river = Square::new(5, 1);
    assert!(!can_capture(red(1), river, blue(8), land2), "rat leaving the water cannot take elephant");
    assert!(!can_capture(red(1), river, blue(1), Square::new(6, 1)), "nor anything else on land");
}

#[test]
fn river_rats() {
    let (a, b) = (Square::new(4, 1), Square::new(4, 2));
    assert!(can_capture(red(1), a, blue(1), b), "rat on rat in the water");
    assert!(!can_capture(red(3), Square::new(6, 1), blue(1), Square::new(5, 1)), "land piece vs swimming rat");
}

#[test]
fn own_trap_shields_enemy_trap_exposes() {
    // Red elephant resting in a red trap.
    assert!(!can_capture(blue(1), Square::new(8, 1), red(8), Square::new(8, 2)));
    assert!(!can_capture(blue(7), Square::new(8, 1), red(1), Square::new(8, 2)));
    // Blue elephant stuck in the same trap: even the red rat takes it.
    assert!(can_capture(red(1), Square::new(7, 2), blue(8), Square::new(7, 3)));
    assert!(can_capture(red(2), Square::new(8, 1), blue(7), Square::new(8, 2)));
}

#[test]
fn captures_through_the_board() {
    let mut s = State::empty(Player::Red);
    s.place(4, 3, 8, Player::Red);
    s.place(3, 3, 7, Player::Blue);
    s.place(0, 6, 1, Player::Blue);
    assert!(s.is_valid_move(Square::new(4, 3), Square::new(3, 3), Player::Red));
    assert!(!s.is_valid_move(Square::new(3, 3), Square::new(4, 3), Player::Blue), "lion cannot take elephant");
}
