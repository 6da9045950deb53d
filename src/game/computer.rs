use crate::{Board, Continuation, End, Game, Tile, RETRY_DELAY_MS};
use serde::Serialize;
use tracing::{debug, warn};

/// What the computer opponent decides to do on its turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum ComputerMove {
    /// Attach the [tile](Tile) with identity `tile` to `end`.
    Play {
        /// The identity of the tile.
        tile: u8,
        /// The end it is attached to.
        end: End,
    },
    /// Draw one tile from the bank.
    Draw,
    /// Skip the turn.
    Pass,
}

/// Chooses a move for the computer opponent.
///
/// Among the playable [tiles](Tile) the first double wins, otherwise the first playable tile in
/// hand order. The left end is preferred when both ends fit. Without a playable tile the computer
/// draws once while the bank holds tiles, then passes.
///
/// # Arguments
///
/// * `hand`: The tiles held by the computer.
/// * `board`: The board being played on.
/// * `bank_len`: The number of tiles left in the bank.
/// * `has_drawn`: Whether the computer already drew this turn.
pub fn choose_move(hand: &[Tile], board: &Board, bank_len: usize, has_drawn: bool) -> ComputerMove {
    let mut playable = hand.iter().filter(|tile| board.accepts_any(tile)).peekable();
    let first = playable.peek().copied().copied();
    let chosen = playable.find(|tile| tile.is_double()).copied().or(first);

    match chosen {
        Some(tile) => ComputerMove::Play {
            tile: tile.id,
            end: if board.accepts(&tile, End::Left) {
                End::Left
            } else {
                End::Right
            },
        },
        None if bank_len > 0 && !has_drawn => ComputerMove::Draw,
        None => ComputerMove::Pass,
    }
}

impl Game {
    /// Whether `player` is the seated computer, has not finished, and still holds `turn`.
    fn computer_holds_turn(&self, player: usize, turn: u64) -> bool {
        self.players.get(player).map_or(false, |seat| {
            seat.is_computer && !seat.is_winner && self.current_player == player
        }) && self.turn == turn
            && !self.turn_ending
    }

    pub(super) fn computer_play(&mut self, player: usize, turn: u64) {
        if !self.computer_holds_turn(player, turn) {
            debug!(player, "computer turn skipped");
            return;
        }

        let decision = choose_move(
            &self.players[player].hand,
            &self.board,
            self.bank.len(),
            self.has_drawn,
        );
        debug!(player, ?decision, "computer decided");
        let result = match decision {
            ComputerMove::Play { tile, end } => self
                .select_tile(tile, player)
                .and_then(|()| self.place_tile(end)),
            ComputerMove::Draw => self.draw().map(|()| {
                self.schedule(RETRY_DELAY_MS, Continuation::ComputerRetry { player, turn });
            }),
            ComputerMove::Pass => self.pass(),
        };
        if let Err(error) = result {
            warn!(%error, player, ?decision, "computer move was rejected");
        }
    }

    pub(super) fn computer_retry(&mut self, player: usize, turn: u64) {
        if !self.computer_holds_turn(player, turn) {
            debug!(player, "computer retry skipped");
            return;
        }

        if self.players[player].can_play(&self.board) {
            self.computer_play(player, turn);
        } else if let Err(error) = self.pass() {
            warn!(%error, player, "computer could not pass");
        }
    }
}
