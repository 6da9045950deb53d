use crate::{
    deal, deal_find_double, fresh_shuffled_deck, highest_double, Continuation, Game, Level,
    MoveError, NewError, Phase, Player, Severity, Status, Tile, DEAL_LEN, PLAYER_CAPACITY,
    THINKING_DELAY_MS,
};
use map_macro::hash_set;
use std::collections::HashSet;
use tracing::{debug, error, info};

impl Game {
    /// Seats the players, deals and opens the first phase of the chosen [level](Level).
    ///
    /// Blank names become `Player N`. With `computer` set, the computer opponent is seated
    /// after the humans, except in the find-the-double levels where it only owns the countdown.
    /// The classic game deals [DEAL_LEN] tiles to every player one round at a time and
    /// continues in [Phase::ShowDoubles] or [Phase::DrawForDouble]. The find-the-double levels
    /// continue in [Phase::FindDouble]. The level is stored as the preference.
    ///
    /// # Arguments
    ///
    /// * `names`: The names of the human players in turn order.
    /// * `computer`: Whether the computer opponent takes a seat.
    /// * `level`: The kind of round to start.
    ///
    /// # Errors
    ///
    /// * [NewError::NotInSetup] Attempting to start while a game is running.
    /// * [NewError::EmptyPlayers] Attempting to start without human players.
    /// * [NewError::TooManyPlayers] Attempting to seat more than [PLAYER_CAPACITY] players.
    /// * [NewError::Deal] The tiles could not be dealt.
    pub fn start_game<S: AsRef<str>>(
        &mut self,
        names: &[S],
        computer: bool,
        level: Level,
    ) -> Result<(), HashSet<NewError>> {
        let seats_computer = computer && level.find_double_hand_len().is_none();
        let players_len = names.len() + usize::from(seats_computer);
        self.check_start(names.len(), players_len)?;

        let (hands, bank) = match level.find_double_hand_len() {
            Some(hand_len) => deal_find_double(&mut self.rng, players_len, hand_len),
            None => deal(fresh_shuffled_deck(&mut self.rng), players_len, DEAL_LEN),
        }
        .map_err(|error| hash_set! { NewError::Deal(error) })?;

        self.players = names
            .iter()
            .enumerate()
            .map(|(id, name)| Player::human(id, name.as_ref()))
            .collect();
        if seats_computer {
            self.players.push(Player::computer(names.len()));
        }
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.hand = hand;
        }
        self.bank = bank;
        self.board.clear();
        self.current_player = 0;
        self.has_drawn = false;
        self.selected = None;
        self.winners.clear();
        self.level = level;
        self.store_level();
        info!(players = players_len, computer = seats_computer, %level, "game started");

        match level.find_double_hand_len() {
            Some(_) => self.start_find_double(),
            None => self.prompt_for_doubles(),
        }
        Ok(())
    }

    fn check_start(&self, humans_len: usize, players_len: usize) -> Result<(), HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(3);
        if self.phase != Phase::Setup {
            errors.insert(NewError::NotInSetup { phase: self.phase });
        }
        if humans_len == 0 {
            errors.insert(NewError::EmptyPlayers);
        }
        if players_len > PLAYER_CAPACITY {
            errors.insert(NewError::TooManyPlayers {
                players: players_len,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    /// Opens [Phase::ShowDoubles] when any hand holds a double, otherwise
    /// [Phase::DrawForDouble].
    fn prompt_for_doubles(&mut self) {
        if self.highest_double().is_some() {
            self.phase = Phase::ShowDoubles;
            self.set_status(Status::highlight(
                "Players, push forward your DOUBLES! \
                Then click the HIGHEST double (E > D > C > B > A) to start!",
            ));
            self.schedule_computer_double();
        } else {
            self.phase = Phase::DrawForDouble;
            self.set_status(Status::warning(
                "No doubles! Click \"Draw from Bank\" - each player draws one card.",
            ));
        }
        info!(phase = ?self.phase, "looking for the starting double");
    }

    /// Every player draws one [tile](Tile) from the bank while tiles are left.
    pub(super) fn draw_round(&mut self) -> Result<(), MoveError> {
        if self.bank.is_empty() {
            return Err(self.reject(MoveError::BankEmpty));
        }

        let mut drew_double = false;
        for player in self.players.iter_mut() {
            if let Some(tile) = self.bank.pop() {
                drew_double |= tile.is_double();
                player.hand.push(tile);
            }
        }
        debug!(drew_double, bank = self.bank.len(), "everyone drew for a double");

        if drew_double {
            self.phase = Phase::ShowDoubles;
            self.set_status(Status::highlight(
                "Doubles found! Players, click the HIGHEST double to start!",
            ));
            self.schedule_computer_double();
        } else if !self.bank.is_empty() {
            self.set_status(Status::warning(
                "Still no doubles! Click \"Draw from Bank\" again.",
            ));
        } else {
            self.phase = Phase::NoDoubles;
            self.set_status(Status::warning(
                "No doubles and bank is empty! Click any card to start.",
            ));
        }
        info!(phase = ?self.phase, "draw round finished");
        Ok(())
    }

    /// # Returns
    ///
    /// The highest double at the table and the index of the player holding it.
    fn highest_double(&self) -> Option<(usize, Tile)> {
        let tile = *highest_double(self.players.iter().flat_map(|player| player.hand.iter()))?;
        self.players
            .iter()
            .position(|player| player.position(tile.id).is_some())
            .map(|player| (player, tile))
    }

    /// Lets the computer start when it holds the highest double.
    fn schedule_computer_double(&mut self) {
        if let Some((player, tile)) = self.highest_double() {
            if self.players[player].is_computer {
                self.schedule(
                    THINKING_DELAY_MS,
                    Continuation::ComputerStartDouble {
                        player,
                        tile: tile.id,
                    },
                );
            }
        }
    }

    pub(super) fn select_starting_double(&mut self, tile: u8, player: usize) -> Result<(), MoveError> {
        self.check_seat(player)?;
        let held = self.held(player, tile)?;
        if !held.is_double() {
            return Err(self.reject(MoveError::NotADouble));
        }
        if self.highest_double().map(|(_, highest)| highest.id) != Some(tile) {
            return Err(self.reject(MoveError::NotHighestDouble));
        }

        self.start_with(player, held)
    }

    pub(super) fn select_starter(&mut self, tile: u8, player: usize) -> Result<(), MoveError> {
        self.check_seat(player)?;
        let held = self.held(player, tile)?;

        self.start_with(player, held)
    }

    /// Moves `tile` from the hand of `player` to the empty board and hands the turn to the next
    /// seat.
    fn start_with(&mut self, player: usize, tile: Tile) -> Result<(), MoveError> {
        if let Err(error) = self.board.start(tile) {
            error!(%error, player, tile = %tile, "board was not empty at the start");
            return Err(self.reject(MoveError::WrongPhase { phase: self.phase }));
        }
        self.players[player].take(tile.id);

        self.current_player = (player + 1) % self.players.len();
        self.turn += 1;
        self.phase = Phase::Playing;
        self.has_drawn = false;
        self.selected = None;
        let next = &self.players[self.current_player];
        let next_is_computer = next.is_computer;
        let message = format!(
            "{} started with {}. {}'s turn!",
            self.players[player].name, tile, next.name
        );
        info!(player, tile = %tile, next = self.current_player, "game opened");
        self.set_status(Status::new(message, Severity::Success));

        if next_is_computer {
            self.schedule(
                THINKING_DELAY_MS,
                Continuation::ComputerPlay {
                    player: self.current_player,
                    turn: self.turn,
                },
            );
        }
        Ok(())
    }
}
