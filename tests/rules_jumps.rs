use junglebot::rules::{can_jump_river, jump_targets};
use junglebot::{Player, Square, State};

#[test]
fn lion_jumps_the_river_lengthwise_and_captures() {
    let mut s = State::empty(Player::Red);
    s.place(2, 1, 7, Player::Red);
    s.place(6, 1, 3, Player::Blue);
    let (from, to) = (Square::new(2, 1), Square::new(6, 1));
    assert!(s.is_valid_move(from, to, Player::Red));
    assert!(s.apply_move(junglebot::Move::between(from, to)));
    assert_eq!(s.piece_at(to).map(|p| p.rank), Some(7));
    assert!(s.terminal, "capturing the last blue piece wins");
    assert_eq!(s.winner, Some(Player::Red));
}

#[test]
fn a_rat_in_the_water_blocks_the_jump() {
    for owner in [Player::Red, Player::Blue] {
        let mut s = State::empty(Player::Red);
        s.place(2, 1, 7, Player::Red);
        s.place(6, 1, 3, Player::Blue);
        s.place(4, 1, 1, owner);
        assert!(!s.is_valid_move(Square::new(2, 1), Square::new(6, 1), Player::Red), "rat owned by {owner}");
    }
}

#[test]
fn tiger_jumps_across() {
    let mut s = State::empty(Player::Red);
    s.place(3, 0, 6, Player::Red);
    assert_eq!(jump_targets(&s.board, Square::new(3, 0), Player::Red), vec![Square::new(3, 3)]);
    assert!(can_jump_river(&s.board, Square::new(3, 0), Player::Red));

    s.place(4, 3, 6, Player::Red);
    let mut t = jump_targets(&s.board, Square::new(4, 3), Player::Red);
    t.sort();
    assert_eq!(t, vec![Square::new(4, 0), Square::new(4, 6)]);
}

#[test]
fn only_tigers_and_lions_jump() {
    let mut s = State::empty(Player::Red);
    s.place(3, 0, 8, Player::Red);
    assert!(!s.is_valid_move(Square::new(3, 0), Square::new(3, 3), Player::Red));
    assert!(jump_targets(&s.board, Square::new(3, 0), Player::Red).is_empty());
}

#[test]
fn jump_landing_obeys_capture_rules() {
    let mut s = State::empty(Player::Red);
    s.place(3, 0, 6, Player::Red);
    s.place(3, 3, 7, Player::Blue);
    assert!(!s.is_valid_move(Square::new(3, 0), Square::new(3, 3), Player::Red), "tiger cannot land on a lion");
    s.place(3, 3, 4, Player::Red);
    assert!(!s.is_valid_move(Square::new(3, 0), Square::new(3, 3), Player::Red), "own piece on the landing square");
}
