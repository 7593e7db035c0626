use junglebot::search::Tier;
use junglebot::selfplay::{generate_games, MatchSummary, SelfPlayParams};

fn params() -> SelfPlayParams {
    SelfPlayParams { games: 2, max_plies: 20, threads: 1, ..SelfPlayParams::between(Tier::Beginner, Tier::Easy) }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let p = params();
    let g1 = generate_games(&p);
    let g2 = generate_games(&p);
    assert_eq!(g1.len(), 2);
    assert_eq!(g1, g2);
    for g in &g1 {
        assert!(g.plies <= 20);
        assert_eq!(g.plies, g.moves.len());
    }
}

#[test]
fn thread_count_does_not_change_results() {
    let p = params();
    let two = SelfPlayParams { threads: 2, ..p.clone() };
    assert_eq!(generate_games(&p), generate_games(&two));
}

#[test]
fn summary_adds_up() {
    let games = generate_games(&params());
    let s = MatchSummary::from_records(&games);
    assert_eq!(s.games, 2);
    assert_eq!(s.red_wins + s.blue_wins + s.unfinished, 2);
    assert!(s.average_plies > 0.0);
}

#[test]
fn summary_of_hand_built_records() {
    use junglebot::selfplay::GameRecord;
    use junglebot::Player;
    let records = vec![
        GameRecord { moves: Vec::new(), winner: Some(Player::Red), plies: 10 },
        GameRecord { moves: Vec::new(), winner: None, plies: 20 },
    ];
    let want = MatchSummary { games: 2, red_wins: 1, blue_wins: 0, unfinished: 1, average_plies: 15.0 };
    assert_eq!(MatchSummary::from_records(&records), want);
    assert_eq!(MatchSummary::from_records(&[]), MatchSummary::default());
}
