use crate::board::State;

// Clone-per-child perft; terminal positions are leaves.
pub fn perft(state: &State, depth: u32) -> u64 {
    if depth == 0 || state.terminal { return 1; }
    let mut nodes = 0u64;
    for m in state.legal_moves(state.active) {
        let mut child = *state;
        if child.apply_move(m) { nodes += perft(&child, depth - 1); }
    }
    nodes
}

/// Per-root-move node counts, in generation order.
pub fn divide(state: &State, depth: u32) -> Vec<(crate::board::Move, u64)> {
    if depth == 0 { return Vec::new(); }
    state
        .legal_moves(state.active)
        .into_iter()
        .filter_map(|m| {
            let mut child = *state;
            child.apply_move(m).then(|| (m, perft(&child, depth - 1)))
        })
        .collect()
}
