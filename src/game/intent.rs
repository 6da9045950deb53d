use crate::{End, Game, Level, MoveError, NewError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// A discrete request from a player, the renderer or the clock.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Seat the players and start a round of `level`.
    StartGame {
        /// The names of the human players in turn order.
        names: Vec<String>,
        /// Whether the computer opponent takes a seat.
        computer: bool,
        /// The kind of round.
        level: Level,
    },
    /// Choose the level of the next round.
    SelectLevel(Level),
    /// Click on a tile of `player`.
    SelectTile {
        /// The identity of the tile.
        tile: u8,
        /// The index of the acting player.
        player: usize,
    },
    /// Place the selected tile on an end of the board.
    PlaceTile(End),
    /// Draw from the bank.
    Draw,
    /// Skip the turn.
    Pass,
    /// Advance the logical clock.
    Tick(Duration),
    /// Stop everything and return to setup.
    Reset,
}

/// Describes the reason why an [intent](Intent) was rejected.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum IntentError {
    /// The game could not be started.
    #[error("the game could not be started: {0:?}")]
    Start(HashSet<NewError>),
    /// The move breaks a rule.
    #[error(transparent)]
    Move(#[from] MoveError),
}

impl Game {
    /// Applies `intent` and completes the resulting transition.
    ///
    /// # Errors
    ///
    /// * [IntentError::Start] When [start_game](Game::start_game) fails.
    /// * [IntentError::Move] When any other intent breaks a rule.
    pub fn apply(&mut self, intent: Intent) -> Result<(), IntentError> {
        debug!(?intent, phase = ?self.phase, "applying intent");
        match intent {
            Intent::StartGame {
                names,
                computer,
                level,
            } => self
                .start_game(names.as_slice(), computer, level)
                .map_err(IntentError::Start),
            Intent::SelectLevel(level) => Ok(self.select_level(level)?),
            Intent::SelectTile { tile, player } => Ok(self.select_tile(tile, player)?),
            Intent::PlaceTile(end) => Ok(self.place_tile(end)?),
            Intent::Draw => Ok(self.draw()?),
            Intent::Pass => Ok(self.pass()?),
            Intent::Tick(elapsed) => {
                self.advance(elapsed);
                Ok(())
            }
            Intent::Reset => {
                self.reset_to_setup();
                Ok(())
            }
        }
    }
}
