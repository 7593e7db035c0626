use junglebot::{Move, Player, State};

#[test]
fn den_entry_wins_and_keeps_the_turn() {
    let mut s = State::empty(Player::Red);
    s.place(1, 3, 2, Player::Red);
    s.place(8, 0, 7, Player::Blue);
    assert!(s.apply_move(Move::new(1, 3, 0, 3)));
    assert!(s.terminal);
    assert_eq!(s.winner, Some(Player::Red));
    assert_eq!(s.active, Player::Red);
}

#[test]
fn nothing_moves_after_the_game_ends() {
    let mut s = State::empty(Player::Red);
    s.place(1, 3, 2, Player::Red);
    s.place(8, 0, 7, Player::Blue);
    assert!(s.apply_move(Move::new(1, 3, 0, 3)));
    let before = s;
    assert!(!s.apply_move(Move::new(8, 0, 7, 0)));
    assert!(!s.apply_move(Move::new(0, 3, 0, 2)));
    assert_eq!(s, before);
}

#[test]
fn rejected_move_leaves_state_untouched() {
    let mut s = State::new_game();
    let before = s;
    assert!(!s.apply_move(Move::new(2, 2, 3, 2)), "blue piece on red's turn");
    assert!(!s.apply_move(Move::new(7, 1, 6, 2)), "diagonal");
    assert!(!s.apply_move(Move::new(4, 4, 4, 5)), "empty square");
    assert_eq!(s, before);
}

#[test]
fn ordinary_move_passes_the_turn() {
    let mut s = State::new_game();
    assert!(s.apply_move(Move::new(6, 4, 5, 4)));
    assert_eq!(s.active, Player::Blue);
    assert!(!s.terminal);
    assert!(s.piece_at(junglebot::Square::new(6, 4)).is_none());
    assert_eq!(s.piece_at(junglebot::Square::new(5, 4)).map(|p| p.rank), Some(1));
}

#[test]
fn searching_a_copy_leaves_the_live_state() {
    let s = State::new_game();
    let mut child = s;
    assert!(child.apply_move(Move::new(6, 4, 5, 4)));
    assert_eq!(s, State::new_game());
}
