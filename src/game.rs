use thiserror::Error;

use crate::board::{Move, Player, Square, State};
use crate::rules;
use crate::search::Searcher;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("illegal move {0}")]
    IllegalMove(Move),
}

/// The live game: the single writer of its `State`.
#[derive(Clone, Debug, Default)]
pub struct Game {
    state: State,
    history: Vec<Move>,
}

impl Game {
    pub fn new() -> Self { Self { state: State::new_game(), history: Vec::new() } }

    /// Continue from an arbitrary position.
    pub fn from_state(state: State) -> Self { Self { state, history: Vec::new() } }

    pub fn state(&self) -> &State { &self.state }

    pub fn history(&self) -> &[Move] { &self.history }

    pub fn is_over(&self) -> bool { self.state.terminal }

    pub fn winner(&self) -> Option<Player> { self.state.winner }

    pub fn side_to_move(&self) -> Player { self.state.active }

    /// Legal destinations of the piece on `from` for the side to move.
    pub fn moves_from(&self, from: Square) -> Vec<Move> {
        if self.state.terminal { return Vec::new(); }
        rules::moves_from(&self.state.board, from, self.state.active)
    }

    /// Plays `mv` for the side to move. If the opponent is then left without
    /// a legal move, the mover wins.
    pub fn play(&mut self, mv: Move) -> Result<&State, GameError> {
        if self.state.terminal { return Err(GameError::GameOver); }
        let mover = self.state.active;
        if !self.state.apply_move(mv) { return Err(GameError::IllegalMove(mv)); }
        self.history.push(mv);
        if !self.state.terminal && !self.state.has_legal_move(self.state.active) {
            self.state.terminal = true;
            self.state.winner = Some(mover);
        }
        if self.state.terminal {
            log::info!("game over after {} plies, winner {:?}", self.history.len(), self.state.winner);
        }
        Ok(&self.state)
    }

    /// Lets `searcher` move for the side to move. A side with nothing to play
    /// loses; that case returns `Ok(None)` with the game marked over.
    pub fn ai_move(&mut self, searcher: &mut Searcher) -> Result<Option<Move>, GameError> {
        if self.state.terminal { return Err(GameError::GameOver); }
        let player = self.state.active;
        match searcher.choose_move(&self.state, player) {
            Some(mv) => {
                self.play(mv)?;
                Ok(Some(mv))
            }
            None => {
                self.state.terminal = true;
                self.state.winner = Some(player.opponent());
                log::info!("{player} has no legal move and loses");
                Ok(None)
            }
        }
    }
}
