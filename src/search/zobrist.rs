use crate::board::{Board, Player, CELLS};
use std::sync::OnceLock;

// owner * 8 + (rank - 1)
const KINDS: usize = 16;
const MAX_DEPTH_KEYS: usize = 64;

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

static TABLE: OnceLock<[u64; KINDS * CELLS]> = OnceLock::new();
static DEPTH_KEYS: OnceLock<[u64; MAX_DEPTH_KEYS]> = OnceLock::new();
static SIDE_KEY: OnceLock<u64> = OnceLock::new();

fn init_table() -> &'static [u64; KINDS * CELLS] {
    TABLE.get_or_init(|| {
        let mut t = [0u64; KINDS * CELLS];
        let mut seed = 0xF00D_F00D_DEAD_BEEF;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

fn init_depths() -> &'static [u64; MAX_DEPTH_KEYS] {
    DEPTH_KEYS.get_or_init(|| {
        let mut t = [0u64; MAX_DEPTH_KEYS];
        let mut seed = 0x0DDB_A11D_EE9_5EED;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

fn init_side() -> u64 {
    *SIDE_KEY.get_or_init(|| splitmix64(0xABCDEF1234567890))
}

fn kind_index(player: Player, rank: u8) -> usize {
    player.index() * 8 + (rank.clamp(1, 8) - 1) as usize
}

/// Signature of the board contents and side to move.
pub fn compute(board: &Board, active: Player) -> u64 {
    let table = init_table();
    let mut key = 0u64;
    for (sq, p) in board.pieces() {
        key ^= table[kind_index(p.owner, p.rank) * CELLS + sq.index()];
    }
    if active == Player::Blue { key ^= init_side(); }
    key
}

/// Signature of (board, side to move, remaining depth), the cache key.
pub fn with_depth(key: u64, depth: u32) -> u64 {
    key ^ init_depths()[depth as usize % MAX_DEPTH_KEYS]
}
