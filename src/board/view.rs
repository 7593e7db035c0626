use serde::Serialize;

use super::{Piece, Player, Square, State, COLS, ROWS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub rank: u8,
    pub owner: Player,
    pub name: &'static str,
}

impl From<Piece> for CellView {
    fn from(p: Piece) -> Self { Self { rank: p.rank, owner: p.owner, name: p.name() } }
}

pub type BoardView = Vec<Vec<Option<CellView>>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub board: BoardView,
    pub current_player: Player,
    pub game_over: bool,
    pub winner: Option<Player>,
}

impl State {
    /// 9x7 rendering view, built on demand.
    pub fn board_view(&self) -> BoardView {
        (0..ROWS)
            .map(|row| (0..COLS).map(|col| self.board.get(Square::new(row, col)).map(CellView::from)).collect())
            .collect()
    }

    pub fn view(&self) -> StateView {
        StateView { board: self.board_view(), current_player: self.active, game_over: self.terminal, winner: self.winner }
    }
}
