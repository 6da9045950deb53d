use crate::{
    Bank, Board, Continuation, DealError, End, FoundDoubles, Level, MemoryPreferences, Outcome,
    Phase, PreferenceStore, Players, Scheduler, Status, Tile, Value, Winners, PLAYER_CAPACITY,
    TILES_LEN,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub use computer::*;
pub use game_view::*;
pub use intent::*;

mod computer;
mod find_double;
mod game_view;
mod intent;
mod start;
#[cfg(test)]
mod test_setup;
mod turn;

/// Owns the state of one table and implements every intent a player can send.
///
/// The game is driven from a single thread of control: every intent and every
/// [advance](Game::advance) of the logical clock completes its transition before the next one
/// is accepted. Delayed work (the computer thinking, the end of a turn, the countdown) is
/// queued on the [scheduler](Scheduler) and only runs when the clock is advanced.
#[derive(Debug)]
pub struct Game {
    /// The seats in turn order.
    players: Players,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// This is the bank of all the [tiles](Tile) that haven't been dealt or drawn yet.
    bank: Bank,
    /// The line of placed [tiles](Tile).
    board: Board,
    phase: Phase,
    /// Whether the current player drew from the bank this turn.
    has_drawn: bool,
    /// Indexes of players in the order they finished.
    winners: Winners,
    /// The identity of the [tile](Tile) waiting for an [end](End) to be chosen.
    selected: Option<u8>,
    /// Whether a placed tile is waiting for [Continuation::FinishTurn].
    turn_ending: bool,
    /// The number of turns handed out since the game was created.
    turn: u64,
    level: Level,
    found_doubles: FoundDoubles,
    /// Wrong guesses of the find-the-double round.
    discarded: Vec<Tile>,
    last_wrong: Option<Tile>,
    /// The logical time in milliseconds when the countdown runs out.
    deadline: Option<u64>,
    status: Status,
    revision: u64,
    rng: ChaCha8Rng,
    scheduler: Scheduler,
    preferences: Box<dyn PreferenceStore>,
}

/// A double found by a player during the find-the-double round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundDouble {
    /// The index of the player.
    pub player: usize,
    /// The double.
    pub tile: Tile,
}

/// Describes the reason why a game could not be [started](Game::start_game).
#[derive(Debug, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum NewError {
    /// Attempting [to start](Game::start_game) while a game is running.
    #[error("a game can only be started from setup, not from {phase:?}")]
    NotInSetup {
        /// The phase of the running game.
        phase: Phase,
    },
    /// Attempting [to start](Game::start_game) without human players.
    #[error("at least one player is needed")]
    EmptyPlayers,
    /// Attempting [to start](Game::start_game) with more seats than [PLAYER_CAPACITY].
    #[error("{players} players do not fit at the table")]
    TooManyPlayers {
        /// The number of seats requested, the computer included.
        players: usize,
    },
    /// The [tiles](Tile) could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Describes the reason why an intent was rejected. The message is the warning shown to the
/// players.
#[derive(Debug, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum MoveError {
    /// Attempting an intent which the current phase does not accept.
    #[error("That cannot be done right now.")]
    WrongPhase {
        /// The phase the intent arrived in.
        phase: Phase,
    },
    /// Attempting to act for a player who is not seated.
    #[error("There is no player {player}.")]
    UnknownPlayer {
        /// The requested player index.
        player: usize,
    },
    /// Attempting to act out of turn.
    #[error("It's {current}'s turn!")]
    NotYourTurn {
        /// The name of the player whose turn it is.
        current: String,
    },
    /// Referencing a [tile](Tile) that the acting player does not hold.
    #[error("Tile {tile} is not in the hand of player {player}.")]
    TileNotInHand {
        /// The identity of the tile.
        tile: u8,
        /// The index of the acting player.
        player: usize,
    },
    /// Attempting to start with a [tile](Tile) that is not a double.
    #[error("That is not a double! Click on a DOUBLE card (same value on both sides).")]
    NotADouble,
    /// Attempting to start with a double that is not the highest one at the table.
    #[error(
        "No, no, no - it is not the highest double! \
        Find and click the HIGHEST double (E > D > C > B > A)."
    )]
    NotHighestDouble,
    /// Attempting to select a [tile](Tile) that matches neither end of the board.
    #[error("This card cannot be played! Draw from bank or select another card.")]
    Unplayable,
    /// Attempting to place before selecting a [tile](Tile).
    #[error("Select a card to play first!")]
    NothingSelected,
    /// Attempting to place the selected [tile](Tile) on an end it does not match.
    #[error("Cannot play on {end} side! The {end} end needs {needed}.")]
    IllegalEnd {
        /// The chosen end.
        end: End,
        /// The value exposed at the chosen end.
        needed: Value,
    },
    /// Attempting to draw while holding a playable [tile](Tile).
    #[error("Look around! Find your card!")]
    HasPlayableTile,
    /// Attempting to draw from an empty bank.
    #[error("Bank is empty!")]
    BankEmpty,
    /// Attempting to draw twice in one turn.
    #[error("You already drew this turn! Play a card or skip.")]
    AlreadyDrew,
    /// Attempting to draw as the only player who has not finished.
    #[error("Last player cannot draw from bank!")]
    LastPlayerCannotDraw,
    /// Attempting to pass before drawing while the bank still holds [tiles](Tile).
    #[error("You must draw from the bank first!")]
    MustDrawFirst,
    /// Attempting to pass while holding a playable [tile](Tile).
    #[error("You have a playable card! You must play it.")]
    MustPlay,
    /// Attempting to act while the previous turn is still being resolved.
    #[error("Wait a moment, the turn is ending!")]
    TurnEnding,
    /// Attempting to guess again after finding the double.
    #[error("{name} already found the double!")]
    AlreadyFound {
        /// The name of the player.
        name: String,
    },
}

const SETUP_MESSAGE: &str = "Choose the players and a level to start a new game.";

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// A game in [Phase::Setup] with a random seed and an in-memory level preference.
    pub fn new() -> Game {
        Game::with_preferences(Box::new(MemoryPreferences::new()))
    }

    /// A game in [Phase::Setup] with a random seed. The last chosen [level](Level) is loaded
    /// from `preferences`.
    pub fn with_preferences(preferences: Box<dyn PreferenceStore>) -> Game {
        Game::from_parts(ChaCha8Rng::from_entropy(), preferences)
    }

    /// A game in [Phase::Setup] whose shuffles are reproducible from `seed`.
    pub fn seeded(seed: u64, preferences: Box<dyn PreferenceStore>) -> Game {
        Game::from_parts(ChaCha8Rng::seed_from_u64(seed), preferences)
    }

    fn from_parts(rng: ChaCha8Rng, preferences: Box<dyn PreferenceStore>) -> Game {
        let level = match preferences.load_level() {
            Ok(level) => level.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "could not load the level preference");
                Level::default()
            }
        };

        Game {
            players: Players::with_capacity(PLAYER_CAPACITY),
            current_player: 0,
            bank: Bank::with_capacity(TILES_LEN),
            board: Board::new(),
            phase: Phase::Setup,
            has_drawn: false,
            winners: Winners::with_capacity(PLAYER_CAPACITY),
            selected: None,
            turn_ending: false,
            turn: 0,
            level,
            found_doubles: FoundDoubles::with_capacity(PLAYER_CAPACITY),
            discarded: Vec::with_capacity(TILES_LEN),
            last_wrong: None,
            deadline: None,
            status: Status::info(SETUP_MESSAGE),
            revision: 0,
            rng,
            scheduler: Scheduler::new(),
            preferences,
        }
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The seats in turn order.
    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The line of placed [tiles](Tile).
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of [tiles](Tile) left in the bank.
    #[inline]
    pub fn bank_len(&self) -> usize {
        self.bank.len()
    }

    /// Whether the current player drew from the bank this turn.
    #[inline]
    pub fn has_drawn(&self) -> bool {
        self.has_drawn
    }

    /// Indexes of players in the order they finished.
    #[inline]
    pub fn winners(&self) -> &Winners {
        &self.winners
    }

    /// The [tile](Tile) waiting for an [end](End) to be chosen.
    pub fn selected(&self) -> Option<Tile> {
        let player = self.players.get(self.current_player)?;
        self.selected.and_then(|tile| player.get(tile))
    }

    /// The doubles found in the find-the-double round.
    #[inline]
    pub fn found_doubles(&self) -> &FoundDoubles {
        &self.found_doubles
    }

    /// The chosen [level](Level).
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The latest status message.
    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// A counter that increases whenever the state or the status changes.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The logical clock and the delayed [continuations](Continuation).
    #[inline]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Whether a placed [tile](Tile) is waiting for the turn to end.
    #[inline]
    pub fn is_turn_ending(&self) -> bool {
        self.turn_ending
    }

    /// The time left on the find-the-double countdown while it runs.
    pub fn countdown_remaining(&self) -> Option<Duration> {
        if self.phase != Phase::FindDouble {
            return None;
        }
        self.deadline.map(|deadline| self.scheduler.remaining(deadline))
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) in hands, the bank, on the board, found and discarded.
    /// Always the whole set once a game has started.
    pub fn tile_count(&self) -> usize {
        self.players.iter().map(|player| player.hand.len()).sum::<usize>()
            + self.bank.len()
            + self.board.len()
            + self.found_doubles.len()
            + self.discarded.len()
    }

    /// Chooses the [level](Level) of the next game and stores it as the preference.
    ///
    /// # Errors
    ///
    /// * [MoveError::WrongPhase] Attempting to choose a level outside of [Phase::Setup].
    pub fn select_level(&mut self, level: Level) -> Result<(), MoveError> {
        if self.phase != Phase::Setup {
            return Err(self.reject(MoveError::WrongPhase { phase: self.phase }));
        }

        self.level = level;
        self.store_level();
        debug!(%level, "level selected");
        self.touch();
        Ok(())
    }

    /// Stops every running round, drops every pending [continuation](Continuation) and returns
    /// to a clean [Phase::Setup]. The chosen [level](Level) is kept. Calling it again changes
    /// nothing but the [revision](Game::revision).
    pub fn reset_to_setup(&mut self) {
        self.scheduler.reset();
        self.players.clear();
        self.current_player = 0;
        self.bank.clear();
        self.board.clear();
        self.phase = Phase::Setup;
        self.has_drawn = false;
        self.winners.clear();
        self.selected = None;
        self.turn_ending = false;
        self.found_doubles.clear();
        self.discarded.clear();
        self.last_wrong = None;
        self.deadline = None;
        info!(generation = self.scheduler.generation(), "reset to setup");
        self.set_status(Status::info(SETUP_MESSAGE));
    }

    /// Moves the logical clock forward by `elapsed` and runs every [continuation](Continuation)
    /// that becomes due, in due order. Continuations scheduled while advancing run too when they
    /// fall inside the same window. A continuation whose phase or generation no longer matches
    /// is dropped.
    ///
    /// # Returns
    ///
    /// The number of continuations that ran.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let elapsed = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let until = self.scheduler.now().saturating_add(elapsed);

        let mut fired = 0;
        while let Some(scheduled) = self.scheduler.pop_due(until) {
            if !self.scheduler.is_current(&scheduled, self.phase) {
                debug!(
                    continuation = ?scheduled.continuation,
                    scheduled_phase = ?scheduled.phase,
                    phase = ?self.phase,
                    "dropped stale continuation"
                );
                continue;
            }
            debug!(continuation = ?scheduled.continuation, due = scheduled.due, "resuming");
            self.resume(scheduled.continuation);
            fired += 1;
        }
        self.scheduler.finish(until);

        if elapsed > 0 && self.phase == Phase::FindDouble {
            // the countdown is part of the view
            self.touch();
        }
        fired
    }

    fn resume(&mut self, continuation: Continuation) {
        match continuation {
            Continuation::FinishTurn => self.finish_turn(),
            Continuation::ComputerPlay { player, turn } => self.computer_play(player, turn),
            Continuation::ComputerRetry { player, turn } => self.computer_retry(player, turn),
            Continuation::ComputerStartDouble { player, tile } => {
                if let Err(error) = self.select_tile(tile, player) {
                    warn!(%error, player, tile, "computer could not start");
                }
            }
            Continuation::NoMoreWinners => self.end(Outcome::NoMoreWinners),
            Continuation::FindDoubleTimeout => self.find_double_timeout(),
        }
    }

    /// Selects the [tile](Tile) with identity `tile` on behalf of `player`. What a selection
    /// means depends on the phase:
    ///
    /// * [Phase::ShowDoubles]: `player` starts the game if `tile` is the highest double.
    /// * [Phase::NoDoubles]: `player` starts the game with any held `tile`.
    /// * [Phase::Playing]: `tile` is marked as selected and waits for
    /// [place_tile](Game::place_tile).
    /// * [Phase::FindDouble]: `tile` is a guess for the double.
    ///
    /// # Errors
    ///
    /// Every [MoveError] the phase checks for. A rejected selection only changes the status.
    pub fn select_tile(&mut self, tile: u8, player: usize) -> Result<(), MoveError> {
        match self.phase {
            Phase::ShowDoubles => self.select_starting_double(tile, player),
            Phase::NoDoubles => self.select_starter(tile, player),
            Phase::Playing => self.select_playable(tile, player),
            Phase::FindDouble => self.guess_double(tile, player),
            phase => Err(self.reject(MoveError::WrongPhase { phase })),
        }
    }

    /// Queues `continuation` to run after `delay_ms` in the current phase.
    fn schedule(&mut self, delay_ms: u64, continuation: Continuation) {
        let due = self.scheduler.schedule(delay_ms, self.phase, continuation);
        debug!(?continuation, due, "scheduled");
    }

    fn store_level(&mut self) {
        if let Err(error) = self.preferences.save_level(self.level) {
            warn!(%error, level = %self.level, "could not store the level preference");
        }
    }

    /// Checks that `player` is seated.
    fn check_seat(&mut self, player: usize) -> Result<(), MoveError> {
        if player >= self.players.len() {
            return Err(self.reject(MoveError::UnknownPlayer { player }));
        }
        Ok(())
    }

    /// # Returns
    ///
    /// The [tile](Tile) with identity `tile` held by the seated `player`.
    fn held(&mut self, player: usize, tile: u8) -> Result<Tile, MoveError> {
        match self.players[player].get(tile) {
            Some(held) => Ok(held),
            None => Err(self.reject(MoveError::TileNotInHand { tile, player })),
        }
    }

    /// The number of players who have not finished.
    fn active_len(&self) -> usize {
        self.players.iter().filter(|player| !player.is_winner).count()
    }

    /// Logs `error`, shows it as a warning and hands it back to be returned.
    fn reject(&mut self, error: MoveError) -> MoveError {
        match &error {
            MoveError::TileNotInHand { tile, player } => {
                error!(tile, player, phase = ?self.phase, "tile is not in the hand");
            }
            _ => warn!(%error, phase = ?self.phase, "intent rejected"),
        }
        self.set_status(Status::warning(error.to_string()));
        error
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    #[inline]
    fn touch(&mut self) {
        self.revision += 1;
    }
}
