use rayon::prelude::*;
use serde::Serialize;

use crate::board::{Move, Player};
use crate::game::Game;
use crate::search::{Searcher, StrengthProfile, Tier};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub threads: usize,
    pub red: StrengthProfile,
    pub blue: StrengthProfile,
    pub seed: u64,
}

impl SelfPlayParams {
    pub fn between(red: Tier, blue: Tier) -> Self {
        Self { games: 10, max_plies: 200, threads: 1, red: red.into(), blue: blue.into(), seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub winner: Option<Player>,
    pub plies: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub games: usize,
    pub red_wins: usize,
    pub blue_wins: usize,
    pub unfinished: usize,
    pub average_plies: f64,
}

impl MatchSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut s = MatchSummary { games: records.len(), ..Default::default() };
        for r in records {
            match r.winner {
                Some(Player::Red) => s.red_wins += 1,
                Some(Player::Blue) => s.blue_wins += 1,
                None => s.unfinished += 1,
            }
        }
        if !records.is_empty() {
            s.average_plies = records.iter().map(|r| r.plies as f64).sum::<f64>() / records.len() as f64;
        }
        s
    }
}

// Distinct, reproducible seeds per game and side.
fn game_seed(base: u64, game: usize, player: Player) -> u64 {
    base ^ (game as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (player.index() as u64 + 1).rotate_left(17)
}

/// One game from the initial position. Each side owns its own searcher.
pub fn play_game(params: &SelfPlayParams, index: usize) -> GameRecord {
    let mut red = Searcher::seeded(params.red, game_seed(params.seed, index, Player::Red));
    let mut blue = Searcher::seeded(params.blue, game_seed(params.seed, index, Player::Blue));
    let mut game = Game::new();
    while !game.is_over() && game.history().len() < params.max_plies {
        let searcher = match game.side_to_move() { Player::Red => &mut red, Player::Blue => &mut blue };
        match game.ai_move(searcher) {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => break,
        }
    }
    GameRecord { moves: game.history().to_vec(), winner: game.winner(), plies: game.history().len() }
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    generate_games_with(params, |_| {})
}

/// Plays `params.games` games in parallel; `on_done` runs as each finishes.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_done: F) -> Vec<GameRecord>
where
    F: Fn(&GameRecord) + Sync,
{
    let run = || {
        (0..params.games)
            .into_par_iter()
            .map(|gi| {
                let r = play_game(params, gi);
                on_done(&r);
                r
            })
            .collect::<Vec<GameRecord>>()
    };
    match rayon::ThreadPoolBuilder::new().num_threads(params.threads.max(1)).build() {
        Ok(pool) => pool.install(run),
        Err(e) => {
            log::warn!("thread pool unavailable ({e}), running on the global pool");
            run()
        }
    }
}
