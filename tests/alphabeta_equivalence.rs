use junglebot::eval::{Evaluator, WIN_SCORE};
use junglebot::search::{Searcher, StrengthProfile, Tier};
use junglebot::{Player, State};

// Full-width minimax without pruning or caching.
fn plain(state: &State, depth: u32, root: Player, ev: &Evaluator) -> i32 {
    if state.terminal {
        return if state.winner == Some(root) { WIN_SCORE } else { -WIN_SCORE };
    }
    if depth == 0 { return ev.static_score(&state.board, root); }
    let moves = state.legal_moves(state.active);
    if moves.is_empty() {
        return if state.active == root { -WIN_SCORE } else { WIN_SCORE };
    }
    let scores = moves.into_iter().map(|m| {
        let mut c = *state;
        c.apply_move(m);
        plain(&c, depth - 1, root, ev)
    });
    if state.active == root { scores.max().unwrap_or(-WIN_SCORE) } else { scores.min().unwrap_or(WIN_SCORE) }
}

fn root_value(state: &State, depth: u32) -> i32 {
    let ev = Evaluator::new(Tier::Master);
    state
        .legal_moves(state.active)
        .into_iter()
        .map(|m| {
            let mut c = *state;
            c.apply_move(m);
            plain(&c, depth - 1, state.active, &ev)
        })
        .max()
        .expect("root has moves")
}

fn sparse(active: Player) -> State {
    let mut s = State::empty(active);
    s.place(5, 3, 7, Player::Red);
    s.place(6, 4, 1, Player::Red);
    s.place(7, 1, 3, Player::Red);
    s.place(3, 3, 6, Player::Blue);
    s.place(2, 4, 4, Player::Blue);
    s.place(1, 1, 2, Player::Blue);
    s
}

#[test]
fn pruned_search_matches_plain_minimax() {
    for active in [Player::Red, Player::Blue] {
        let s = sparse(active);
        for depth in 1..=3 {
            let mut searcher = Searcher::seeded(StrengthProfile::MASTER, 3);
            let r = searcher.search_depth(&s, active, depth);
            assert_eq!(r.score, root_value(&s, depth), "{active} to move, depth {depth}");
        }
    }
}

#[test]
fn reused_cache_does_not_change_the_value() {
    let s = sparse(Player::Red);
    let mut searcher = Searcher::seeded(StrengthProfile::MASTER, 3);
    let first = searcher.search_depth(&s, Player::Red, 3).score;
    let again = searcher.search_depth(&s, Player::Red, 3).score;
    assert_eq!(first, again);
    assert_eq!(first, root_value(&s, 3));
}
