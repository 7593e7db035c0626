pub mod terrain;
pub mod view;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const ROWS: usize = 9;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected four coordinates like \"6,4 5,4\", got {0:?}")]
    MoveShape(String),
    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
    #[error("unknown player {0:?} (expected red or blue)")]
    Player(String),
    #[error("unknown tier {0:?}")]
    Tier(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self { Player::Red => Player::Blue, Player::Blue => Player::Red }
    }

    pub(crate) fn index(self) -> usize {
        match self { Player::Red => 0, Player::Blue => 1 }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Player::Red => "red", Player::Blue => "blue" })
    }
}

impl FromStr for Player {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Player::Red),
            "blue" | "b" => Ok(Player::Blue),
            _ => Err(ParseError::Player(s.to_string())),
        }
    }
}

pub const RAT: u8 = 1;
pub const ELEPHANT: u8 = 8;

/// A piece: rank 1 (rat) to 8 (elephant) and its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub rank: u8,
    pub owner: Player,
}

impl Piece {
    pub fn new(rank: u8, owner: Player) -> Self { Self { rank, owner } }

    pub fn name(&self) -> &'static str {
        match self.rank {
            1 => "rat",
            2 => "cat",
            3 => "dog",
            4 => "wolf",
            5 => "leopard",
            6 => "tiger",
            7 => "lion",
            8 => "elephant",
            _ => "?",
        }
    }

    /// Tiger and lion may jump the river.
    pub fn is_jumper(&self) -> bool { self.rank == 6 || self.rank == 7 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    pub fn on_board(self) -> bool { self.row < ROWS && self.col < COLS }

    pub(crate) fn index(self) -> usize { self.row * COLS + self.col }

    pub(crate) fn from_index(idx: usize) -> Self { Self { row: idx / COLS, col: idx % COLS } }

    pub fn distance(self, other: Square) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Offset by a signed delta, `None` when it would leave the board.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let sq = Square { row, col };
        if sq.on_board() { Some(sq) } else { None }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..CELLS).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl Move {
    pub const fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self { from_row, from_col, to_row, to_col }
    }

    pub fn between(from: Square, to: Square) -> Self {
        Self::new(from.row, from.col, to.row, to.col)
    }

    pub fn from(&self) -> Square { Square::new(self.from_row, self.from_col) }
    pub fn to(&self) -> Square { Square::new(self.to_row, self.to_col) }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from(), self.to())
    }
}

impl FromStr for Move {
    type Err = ParseError;
    /// Accepts `"6,4 5,4"`, `"6 4 5 4"` or `"6,4,5,4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace() || c == '-' || c == '>')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 4 { return Err(ParseError::MoveShape(s.to_string())); }
        let mut n = [0usize; 4];
        for (slot, p) in n.iter_mut().zip(&parts) {
            *slot = p.parse().map_err(|_| ParseError::Coordinate(p.to_string()))?;
        }
        Ok(Move::new(n[0], n[1], n[2], n[3]))
    }
}

/// 9x7 grid; each cell holds at most one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Default for Board {
    fn default() -> Self { Self { cells: [None; CELLS] } }
}

impl Board {
    pub fn empty() -> Self { Self::default() }

    pub fn initial() -> Self {
        let mut b = Self::empty();
        for &(rank, owner, row, col) in terrain::INITIAL_LAYOUT.iter() {
            b.set(Square::new(row, col), Some(Piece::new(rank, owner)));
        }
        b
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        if !sq.on_board() { return None; }
        self.cells[sq.index()]
    }

    /// Off-board squares are ignored.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if sq.on_board() { self.cells[sq.index()] = piece; }
    }

    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        if !sq.on_board() { return None; }
        self.cells[sq.index()].take()
    }

    /// Occupied squares with their pieces, in row-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, c)| c.map(|p| (Square::from_index(i), p)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == player)
    }

    pub fn count(&self, player: Player) -> usize { self.pieces_of(player).count() }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0  1  2  3  4  5  6")?;
        for row in 0..ROWS {
            write!(f, "{row}  ")?;
            for col in 0..COLS {
                let sq = Square::new(row, col);
                let cell = match self.get(sq) {
                    Some(p) => {
                        let tag = if p.owner == Player::Red { 'r' } else { 'b' };
                        format!("{tag}{}", p.rank)
                    }
                    None if terrain::is_river(sq) => "~~".to_string(),
                    None if terrain::den_owner(sq).is_some() => "[]".to_string(),
                    None if terrain::trap_owner(sq).is_some() => "##".to_string(),
                    None => " .".to_string(),
                };
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A game position. Searches only ever mutate clones of the live state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    pub board: Board,
    pub active: Player,
    pub terminal: bool,
    pub winner: Option<Player>,
}

impl State {
    /// Initial placement, red to move.
    pub fn new_game() -> Self {
        Self { board: Board::initial(), active: Player::Red, terminal: false, winner: None }
    }

    /// Cleared board for set-up positions.
    pub fn empty(active: Player) -> Self {
        Self { board: Board::empty(), active, terminal: false, winner: None }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> { self.board.get(sq) }

    pub fn place(&mut self, row: usize, col: usize, rank: u8, owner: Player) {
        self.board.set(Square::new(row, col), Some(Piece::new(rank, owner)));
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.board.set(Square::new(row, col), None);
    }
}

impl Default for State {
    fn default() -> Self { Self::new_game() }
}
