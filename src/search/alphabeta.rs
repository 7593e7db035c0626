use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Instant;

use crate::board::{Move, Player, State};
use crate::eval::{Evaluator, WIN_SCORE};
use crate::search::noise;
use crate::search::ordering::order_moves;
use crate::search::profile::StrengthProfile;
use crate::search::tt::{Bound, Entry, Tt};
use crate::search::zobrist;

/// Stand-in for an unbounded window.
pub const INFINITY: i32 = 1_000_000;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    pub score: i32,
    pub nodes: u64,
    /// Deepest depth searched to completion.
    pub depth: u32,
}

/// Owns one transposition cache; run one top-level search at a time.
pub struct Searcher {
    tt: Tt,
    evaluator: Evaluator,
    profile: StrengthProfile,
    rng: SmallRng,
    root: Player,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(StrengthProfile::AMATEUR) }
}

impl Searcher {
    pub fn new(profile: StrengthProfile) -> Self { Self::with_rng(profile, SmallRng::from_entropy()) }

    /// Reproducible searcher: jitter and random fallbacks come from `seed`.
    pub fn seeded(profile: StrengthProfile, seed: u64) -> Self { Self::with_rng(profile, SmallRng::seed_from_u64(seed)) }

    fn with_rng(profile: StrengthProfile, rng: SmallRng) -> Self {
        Self { tt: Tt::new(), evaluator: Evaluator::new(profile.tier), profile, rng, root: Player::Red, nodes: 0 }
    }

    pub fn profile(&self) -> &StrengthProfile { &self.profile }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn tt(&self) -> &Tt { &self.tt }

    pub fn tt_mut(&mut self) -> &mut Tt { &mut self.tt }

    /// Strength-tiered move choice for `player`. Clears the cache first.
    ///
    /// Master deepens iteratively under its time budget; other tiers play a
    /// uniformly random legal move with the profile's probability and search
    /// to `max_depth` otherwise. `None` means `player` has no legal move.
    pub fn choose_move(&mut self, state: &State, player: Player) -> Option<Move> {
        let moves = state.legal_moves(player);
        if moves.is_empty() { return None; }
        self.tt.clear();
        self.nodes = 0;

        if self.profile.uses_iterative_deepening() {
            return self.iterative_deepening(state, player).bestmove;
        }
        if noise::rolls_random_move(&self.profile, &mut self.rng) {
            let m = noise::random_move(&moves, &mut self.rng);
            log::info!("{} plays a random move for {player}", self.profile.tier);
            return m;
        }
        let r = self.search_depth(state, player, self.profile.max_depth);
        log::info!("{} searched depth {} for {player}: score={} nodes={}", self.profile.tier, r.depth, r.score, r.nodes);
        r.bestmove
    }

    /// Runs depth 1, 2, ... up to `max_depth`. Depth 1 always runs; deeper
    /// searches start only while under 90% of the budget, and a depth already
    /// started always finishes.
    /// Keeps the best-scoring result (ties go to the deeper search) and stops
    /// early on a forced win.
    pub fn iterative_deepening(&mut self, state: &State, player: Player) -> SearchResult {
        let start = Instant::now();
        let cutoff = self.profile.deepening_cutoff();
        let mut best = SearchResult { bestmove: None, score: -INFINITY, nodes: 0, depth: 0 };
        for d in 1..=self.profile.max_depth {
            if d > 1 && start.elapsed() > cutoff { break; }
            let r = self.search_depth(state, player, d);
            log::debug!("depth {d}: score={} nodes={} elapsed={:?}", r.score, r.nodes, start.elapsed());
            if r.bestmove.is_none() { return r; }
            if r.score >= WIN_SCORE { return r; }
            if best.bestmove.is_none() || r.score >= best.score {
                best = r;
            } else {
                best.depth = r.depth;
                best.nodes = r.nodes;
            }
        }
        best
    }

    /// Root of the minimax search for `player` at a fixed depth. The root is
    /// never answered from the cache. `player` moves first even when
    /// `state.active` names the other side.
    pub fn search_depth(&mut self, state: &State, player: Player, depth: u32) -> SearchResult {
        // Cached scores are relative to the root player.
        if self.root != player { self.tt.clear(); }
        self.root = player;
        let mut root = *state;
        root.active = player;
        let state = &root;
        let mut moves = state.legal_moves(player);
        if moves.is_empty() { return SearchResult { bestmove: None, score: -WIN_SCORE, nodes: self.nodes, depth }; }
        order_moves(&state.board, &mut moves, player);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut bestmove = None;
        let mut best_score = -INFINITY;
        for m in moves {
            let mut child = *state;
            if !child.apply_move(m) { continue; }
            let score = self.minimax(&child, depth.saturating_sub(1), alpha, beta, false);
            if score > best_score { best_score = score; bestmove = Some(m); }
            if score > alpha { alpha = score; }
            if beta <= alpha { break; }
        }
        SearchResult { bestmove, score: best_score, nodes: self.nodes, depth }
    }

    /// Scores are always from the root player's point of view.
    fn minimax(&mut self, state: &State, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        if state.terminal {
            return if state.winner == Some(self.root) { WIN_SCORE } else { -WIN_SCORE };
        }
        if depth == 0 {
            return self.evaluator.score(state, self.root, &mut self.rng);
        }

        let key = zobrist::with_depth(zobrist::compute(&state.board, state.active), depth);
        if let Some(score) = self.tt.get(key).and_then(|e| e.cutoff(depth, alpha, beta)) {
            return score;
        }
        self.nodes += 1;

        let mover = state.active;
        let mut moves = state.legal_moves(mover);
        if moves.is_empty() {
            // The side to move has lost.
            return if mover == self.root { -WIN_SCORE } else { WIN_SCORE };
        }
        order_moves(&state.board, &mut moves, mover);

        let (orig_alpha, orig_beta) = (alpha, beta);
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for m in moves {
            let mut child = *state;
            if !child.apply_move(m) { continue; }
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha { break; }
        }

        let bound = Bound::classify(best, orig_alpha, orig_beta);
        self.tt.put(Entry { key, depth, score: best, bound });
        best
    }

    pub fn tt_probe(&self, state: &State, depth: u32) -> Option<(u32, Bound)> {
        let key = zobrist::with_depth(zobrist::compute(&state.board, state.active), depth);
        self.tt.get(key).map(|e| (e.depth, e.bound))
    }
}
