use crate::{Board, FoundDouble, Game, Level, Phase, Player, Status, Tile};
use serde::Serialize;

/// An immutable snapshot of the [game](Game) handed to renderers and frontends.
///
/// Every field borrows from or is copied out of the game, so a view is only valid until the
/// next intent. Compare [revisions](GameView::revision) to detect changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView<'a> {
    /// The current phase.
    pub phase: Phase,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The seats in turn order with their hands and winner flags.
    pub players: &'a [Player],
    /// The placed tiles with their orientation.
    pub board: &'a Board,
    /// The number of [tiles](Tile) left in the bank.
    pub bank_len: usize,
    /// Whether the current player drew this turn.
    pub has_drawn: bool,
    /// The tile waiting for an end to be chosen.
    pub selected: Option<Tile>,
    /// Whether a placed tile is waiting for the turn to end.
    pub turn_ending: bool,
    /// Indexes of players in the order they finished.
    pub winners: &'a [usize],
    /// Doubles found in the find-the-double round.
    pub found_doubles: &'a [FoundDouble],
    /// Doubles still held when the countdown ran out.
    pub revealed_doubles: Vec<FoundDouble>,
    /// The latest wrong guess of the find-the-double round.
    pub last_wrong: Option<Tile>,
    /// Milliseconds left on the countdown while it runs.
    pub countdown_remaining_ms: Option<u64>,
    /// The chosen level.
    pub level: Level,
    /// The latest status message.
    pub status: &'a Status,
    /// Increases whenever the state or the status changes.
    pub revision: u64,
}

impl Game {
    /// # Returns
    ///
    /// A [snapshot](GameView) of everything a renderer shows.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            phase: self.phase,
            current_player: self.current_player,
            players: &self.players,
            board: &self.board,
            bank_len: self.bank.len(),
            has_drawn: self.has_drawn,
            selected: self.selected(),
            turn_ending: self.turn_ending,
            winners: &self.winners,
            found_doubles: &self.found_doubles,
            revealed_doubles: self.revealed_doubles(),
            last_wrong: self.last_wrong,
            countdown_remaining_ms: self
                .countdown_remaining()
                .map(|remaining| u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX)),
            level: self.level,
            status: &self.status,
            revision: self.revision,
        }
    }
}
