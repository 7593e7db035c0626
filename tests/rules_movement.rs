use junglebot::{Move, Player, Square, State};

#[test]
fn initial_layout_is_point_symmetric() {
    let s = State::new_game();
    assert_eq!(s.board.count(Player::Red), 8);
    assert_eq!(s.board.count(Player::Blue), 8);
    assert_eq!(s.active, Player::Red);
    assert!(!s.terminal);
    for (sq, p) in s.board.pieces() {
        let mirror = s.piece_at(Square::new(8 - sq.row, 6 - sq.col)).expect("mirrored piece missing");
        assert_eq!(mirror.rank, p.rank);
        assert_eq!(mirror.owner, p.owner.opponent());
    }
}

#[test]
fn rat_swims_other_pieces_do_not() {
    let s = State::new_game();
    // Red rat starts on (6,4), next to the river.
    assert!(s.is_valid_move(Square::new(6, 4), Square::new(5, 4), Player::Red));
    assert!(s.is_valid_move(Square::new(6, 4), Square::new(6, 3), Player::Red));
    // Red leopard on (7,1) can step to (6,1) but never into the water.
    assert!(s.is_valid_move(Square::new(7, 1), Square::new(6, 1), Player::Red));
    let mut t = State::empty(Player::Red);
    t.place(6, 1, 5, Player::Red);
    assert!(!t.is_valid_move(Square::new(6, 1), Square::new(5, 1), Player::Red));
}

#[test]
fn only_orthogonal_single_steps() {
    let mut s = State::empty(Player::Red);
    s.place(7, 0, 4, Player::Red);
    let from = Square::new(7, 0);
    assert!(s.is_valid_move(from, Square::new(6, 0), Player::Red));
    assert!(!s.is_valid_move(from, Square::new(6, 1), Player::Red), "diagonal");
    assert!(!s.is_valid_move(from, Square::new(5, 0), Player::Red), "two squares");
    assert!(!s.is_valid_move(from, from, Player::Red), "null move");
    assert!(!s.is_valid_move(from, Square::new(6, 0), Player::Blue), "not the owner");
}

#[test]
fn own_den_and_own_pieces_are_off_limits() {
    let mut s = State::empty(Player::Red);
    s.place(7, 3, 2, Player::Red);
    s.place(7, 2, 5, Player::Red);
    let moves = s.legal_moves(Player::Red);
    assert!(!moves.iter().any(|m| m.to() == Square::new(8, 3)), "entered own den: {moves:?}");
    assert!(!moves.contains(&Move::new(7, 3, 7, 2)));
    assert!(moves.contains(&Move::new(7, 3, 6, 3)));
}

#[test]
fn no_legal_move_from_the_enemy_side() {
    let s = State::new_game();
    assert!(s.legal_moves(Player::Red).iter().all(|m| s.piece_at(m.from()).map(|p| p.owner) == Some(Player::Red)));
    assert!(s.has_legal_move(Player::Blue));
    assert!(!State::empty(Player::Red).has_legal_move(Player::Red));
}

#[test]
fn move_text_round_trip() {
    let m: Move = "6,4 5,4".parse().expect("parse");
    assert_eq!(m, Move::new(6, 4, 5, 4));
    assert_eq!(m.to_string(), "6,4 5,4");
    assert_eq!("6 4 5 4".parse::<Move>(), Ok(m));
    assert!("6,4".parse::<Move>().is_err());
    assert!("a,b c,d".parse::<Move>().is_err());
}
