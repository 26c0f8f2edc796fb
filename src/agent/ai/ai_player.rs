use super::minimax::select_move;
use crate::agent::player::Player;
use crate::game_repr::{Board, Color, Error, Move};
use log::info;

/// The automated player: delegates to the minimax search and logs its
/// decision. Holds no search state between calls.
pub struct AiPlayer {
    name: String,
}

impl AiPlayer {
    pub fn new(color: Color) -> Self {
        Self {
            name: format!("AI ({color:?})"),
        }
    }
}

impl Player for AiPlayer {
    fn next_move(&mut self, board: &Board) -> Result<Move, Error> {
        let mv = select_move(board)?;
        info!("{} plays {mv}", self.name);
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
