use crate::{
    ordinal, Continuation, End, Game, MoveError, Outcome, PlaceError, Phase, Severity, Status,
    LAST_PLAYER_DELAY_MS, PLACEMENT_DELAY_MS, THINKING_DELAY_MS, WINNER_DELAY_MS,
};
use itertools::Itertools;
use tracing::{debug, error, info};

impl Game {
    /// Marks a playable [tile](crate::Tile) of the current player as selected.
    pub(super) fn select_playable(&mut self, tile: u8, player: usize) -> Result<(), MoveError> {
        if self.turn_ending {
            return Err(self.reject(MoveError::TurnEnding));
        }
        self.check_seat(player)?;
        if player != self.current_player {
            let current = self.players[self.current_player].name.clone();
            return Err(self.reject(MoveError::NotYourTurn { current }));
        }
        let held = self.held(player, tile)?;
        if !self.board.accepts_any(&held) {
            return Err(self.reject(MoveError::Unplayable));
        }

        self.selected = Some(tile);
        debug!(player, tile = %held, "tile selected");
        self.set_status(Status::highlight(
            "Click LEFT or RIGHT on the board to place your card!",
        ));
        Ok(())
    }

    /// Attaches the selected [tile](crate::Tile) to `end` of the board.
    ///
    /// The tile leaves the hand of the current player. When the hand becomes empty the player
    /// joins the winners and the game goes on for everyone else. The turn ends after
    /// [PLACEMENT_DELAY_MS], or [PLACEMENT_DELAY_MS] + [WINNER_DELAY_MS] for a new winner, once
    /// the clock is [advanced](Game::advance). Until then other turn intents are rejected.
    ///
    /// # Errors
    ///
    /// * [MoveError::WrongPhase] Attempting to place outside of [Phase::Playing].
    /// * [MoveError::TurnEnding] Attempting to place before the previous placement resolved.
    /// * [MoveError::NothingSelected] Attempting to place without a selected tile.
    /// * [MoveError::TileNotInHand] The selected tile is no longer held.
    /// * [MoveError::IllegalEnd] The selected tile does not match `end`.
    pub fn place_tile(&mut self, end: End) -> Result<(), MoveError> {
        if self.phase != Phase::Playing {
            return Err(self.reject(MoveError::WrongPhase { phase: self.phase }));
        }
        if self.turn_ending {
            return Err(self.reject(MoveError::TurnEnding));
        }
        let tile = match self.selected {
            Some(tile) => tile,
            None => return Err(self.reject(MoveError::NothingSelected)),
        };
        let player = self.current_player;
        let held = self.held(player, tile)?;

        let new_end = match self.board.place(held, end) {
            Ok(new_end) => new_end,
            Err(PlaceError::InvalidMove { needed, .. }) => {
                return Err(self.reject(MoveError::IllegalEnd { end, needed }));
            }
            Err(error) => {
                error!(%error, player, tile = %held, "board rejected a tile while playing");
                return Err(self.reject(MoveError::WrongPhase { phase: self.phase }));
            }
        };
        self.players[player].take(tile);
        self.selected = None;
        self.has_drawn = false;
        self.turn_ending = true;
        debug!(player, tile = %held, %end, %new_end, "tile placed");

        let delay = if self.players[player].hand.is_empty() {
            self.players[player].is_winner = true;
            self.winners.push(player);
            let message = format!(
                "Here is the {} winner: {}!",
                ordinal(self.winners.len()),
                self.players[player].name
            );
            info!(player, place = self.winners.len(), "player emptied their hand");
            self.set_status(Status::new(message, Severity::Success));
            PLACEMENT_DELAY_MS + WINNER_DELAY_MS
        } else {
            self.touch();
            PLACEMENT_DELAY_MS
        };
        self.schedule(delay, Continuation::FinishTurn);
        Ok(())
    }

    /// Draws from the bank. In [Phase::DrawForDouble] every player draws one
    /// [tile](crate::Tile). In [Phase::Playing] the current player draws one tile once per
    /// turn, and only when none of their tiles can be played.
    ///
    /// # Errors
    ///
    /// * [MoveError::WrongPhase] Attempting to draw in any other phase.
    /// * [MoveError::TurnEnding] Attempting to draw before the previous placement resolved.
    /// * [MoveError::BankEmpty] Attempting to draw from an empty bank.
    /// * [MoveError::HasPlayableTile] Attempting to draw while holding a playable tile.
    /// * [MoveError::LastPlayerCannotDraw] Attempting to draw as the only player left. The game
    /// ends without more winners after [LAST_PLAYER_DELAY_MS].
    /// * [MoveError::AlreadyDrew] Attempting to draw twice in one turn.
    pub fn draw(&mut self) -> Result<(), MoveError> {
        match self.phase {
            Phase::DrawForDouble => self.draw_round(),
            Phase::Playing => self.draw_for_turn(),
            phase => Err(self.reject(MoveError::WrongPhase { phase })),
        }
    }

    fn draw_for_turn(&mut self) -> Result<(), MoveError> {
        if self.turn_ending {
            return Err(self.reject(MoveError::TurnEnding));
        }
        if self.bank.is_empty() {
            return Err(self.reject(MoveError::BankEmpty));
        }
        let player = self.current_player;
        if self.players[player].can_play(&self.board) {
            return Err(self.reject(MoveError::HasPlayableTile));
        }
        if self.active_len() == 1 {
            self.schedule(LAST_PLAYER_DELAY_MS, Continuation::NoMoreWinners);
            return Err(self.reject(MoveError::LastPlayerCannotDraw));
        }
        if self.has_drawn {
            return Err(self.reject(MoveError::AlreadyDrew));
        }
        let tile = match self.bank.pop() {
            Some(tile) => tile,
            None => return Err(self.reject(MoveError::BankEmpty)),
        };

        self.players[player].hand.push(tile);
        self.has_drawn = true;
        debug!(player, tile = %tile, bank = self.bank.len(), "drew from the bank");

        let name = &self.players[player].name;
        let status = if self.players[player].can_play(&self.board) {
            Status::info(format!("{} drew a card. Select a card to play!", name))
        } else {
            Status::warning(format!(
                "{} drew but cannot play. Click \"Skip Turn\".",
                name
            ))
        };
        self.set_status(status);
        Ok(())
    }

    /// Skips the turn of the current player.
    ///
    /// # Errors
    ///
    /// * [MoveError::WrongPhase] Attempting to pass outside of [Phase::Playing].
    /// * [MoveError::TurnEnding] Attempting to pass before the previous placement resolved.
    /// * [MoveError::MustDrawFirst] Attempting to pass without drawing while the bank still
    /// holds tiles.
    /// * [MoveError::MustPlay] Attempting to pass while holding a playable tile.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.phase != Phase::Playing {
            return Err(self.reject(MoveError::WrongPhase { phase: self.phase }));
        }
        if self.turn_ending {
            return Err(self.reject(MoveError::TurnEnding));
        }
        let player = self.current_player;
        let can_play = self.players[player].can_play(&self.board);
        if !self.has_drawn && !self.bank.is_empty() && !can_play {
            return Err(self.reject(MoveError::MustDrawFirst));
        }
        if can_play {
            return Err(self.reject(MoveError::MustPlay));
        }

        debug!(player, "passed");
        let message = format!("{} passed.", self.players[player].name);
        self.set_status(Status::info(message));
        self.next_turn();
        Ok(())
    }

    /// Resolves the placement that ended the turn.
    pub(super) fn finish_turn(&mut self) {
        self.turn_ending = false;
        if self.active_len() == 0 {
            self.end(Outcome::CircleOfWinners);
        } else {
            self.next_turn();
        }
    }

    /// Hands the turn to the next player who has not finished, then checks whether the game
    /// can still go on.
    pub(super) fn next_turn(&mut self) {
        self.has_drawn = false;
        self.selected = None;

        let players_len = self.players.len();
        for _ in 0..players_len {
            self.current_player = (self.current_player + 1) % players_len;
            if !self.players[self.current_player].is_winner {
                break;
            }
        }
        self.turn += 1;

        let active_len = self.active_len();
        if active_len == 0 {
            return self.end(Outcome::CircleOfWinners);
        }
        if self.is_blocked() {
            return self.end(Outcome::NoMoreWinners);
        }

        let player = &self.players[self.current_player];
        let can_play = player.can_play(&self.board);
        let is_computer = player.is_computer;
        debug!(player = self.current_player, can_play, "next turn");

        if active_len == 1 && !can_play {
            let message = format!("{} cannot make a move...", player.name);
            self.set_status(Status::warning(message));
            self.schedule(LAST_PLAYER_DELAY_MS, Continuation::NoMoreWinners);
            return;
        }

        let status = if can_play {
            Status::highlight(format!("{}'s turn. Select a card to play!", player.name))
        } else if !self.bank.is_empty() {
            Status::info(format!(
                "{}'s turn. No matching cards - draw from bank!",
                player.name
            ))
        } else {
            Status::warning(format!(
                "{}'s turn. No matching cards and bank is empty - skip turn!",
                player.name
            ))
        };
        self.set_status(status);

        if is_computer {
            self.schedule(
                THINKING_DELAY_MS,
                Continuation::ComputerPlay {
                    player: self.current_player,
                    turn: self.turn,
                },
            );
        }
    }

    /// Whether the bank is empty and no player who has not finished can play.
    pub(super) fn is_blocked(&self) -> bool {
        self.bank.is_empty()
            && !self
                .players
                .iter()
                .filter(|player| !player.is_winner)
                .any(|player| player.can_play(&self.board))
    }

    /// Ends the classic game.
    pub(super) fn end(&mut self, outcome: Outcome) {
        self.phase = Phase::Ended(outcome);
        self.turn_ending = false;
        self.selected = None;

        let status = match outcome {
            Outcome::CircleOfWinners if self.winners.len() == 1 => Status::new(
                format!("{} wins!", self.players[self.winners[0]].name),
                Severity::Win,
            ),
            Outcome::CircleOfWinners => Status::new(
                format!(
                    "{} form the Circle of Winners!",
                    self.winners
                        .iter()
                        .map(|&winner| self.players[winner].name.as_str())
                        .join(" & ")
                ),
                Severity::Win,
            ),
            Outcome::NoMoreWinners => Status::new("No more winners! Play again!", Severity::GameOver),
        };
        info!(?outcome, winners = ?self.winners, "game ended");
        self.set_status(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{init_test_logging, Value};
    use std::time::Duration;

    fn finish(game: &mut Game) {
        game.advance(Duration::from_millis(PLACEMENT_DELAY_MS + WINNER_DELAY_MS));
    }

    #[test]
    fn select_not_your_turn() {
        init_test_logging();
        let mut game = Game::playing(&[&[2, 3], &[7, 11]], &[], 6);

        let actual_error = game.select_tile(7, 1).unwrap_err();

        assert_eq!(
            MoveError::NotYourTurn {
                current: "Player 1".to_owned()
            },
            actual_error
        );
        assert_eq!("It's Player 1's turn!", game.status().message);
        assert_eq!(Severity::Warning, game.status().severity);
    }

    #[test]
    fn select_unplayable() {
        let mut game = Game::playing(&[&[2, 13], &[7, 11]], &[], 6);

        let actual_error = game.select_tile(13, 0).unwrap_err();

        assert_eq!(MoveError::Unplayable, actual_error);
        assert_eq!(None, game.selected());
    }

    #[test]
    fn place_without_selection() {
        let mut game = Game::playing(&[&[2, 13], &[7, 11]], &[], 6);

        assert_eq!(
            MoveError::NothingSelected,
            game.place_tile(End::Right).unwrap_err()
        );
    }

    #[test]
    fn place_illegal_end() {
        // board is B:C, so the left end needs B and the right end needs C
        let mut game = Game::playing(&[&[8, 13], &[11, 14]], &[], 7);
        game.select_tile(8, 0).expect("B:D fits the left end");

        let actual_error = game.place_tile(End::Right).unwrap_err();

        assert_eq!(
            MoveError::IllegalEnd {
                end: End::Right,
                needed: Value::C
            },
            actual_error
        );
        assert_eq!("Cannot play on right side! The right end needs C.", game.status().message);
        assert!(game.players()[0].position(8).is_some());
        assert_eq!(1, game.board().len());
        assert_eq!(crate::tile_by_id(8), game.selected());
    }

    #[test]
    fn place_then_turn_passes_after_delay() {
        init_test_logging();
        let mut game = Game::playing(&[&[2, 13], &[7, 11]], &[4], 6);
        game.select_tile(2, 0).expect("A:B fits B");

        game.place_tile(End::Left).expect("A:B fits the left end");

        assert_eq!(Some(Value::A), game.board().left_end());
        assert!(game.is_turn_ending());
        assert_eq!(0, game.current_player());
        assert_eq!(
            MoveError::TurnEnding,
            game.select_tile(13, 0).unwrap_err()
        );
        assert_eq!(MoveError::TurnEnding, game.draw().unwrap_err());

        game.advance(Duration::from_millis(PLACEMENT_DELAY_MS));

        assert!(!game.is_turn_ending());
        assert_eq!(1, game.current_player());
        assert_eq!("Player 2's turn. Select a card to play!", game.status().message);
    }

    #[test]
    fn draw_rejected_with_playable_tile() {
        init_test_logging();
        let mut game = Game::playing(&[&[2, 13], &[7, 11]], &[4, 5], 6);
        let before = (game.players().clone(), game.bank_len(), game.has_drawn());

        let actual_error = game.draw().unwrap_err();

        assert_eq!(MoveError::HasPlayableTile, actual_error);
        assert_eq!("Look around! Find your card!", game.status().message);
        assert_eq!(Severity::Warning, game.status().severity);
        assert_eq!(before, (game.players().clone(), game.bank_len(), game.has_drawn()));
    }

    #[test]
    fn draw_once_per_turn() {
        let mut game = Game::playing(&[&[13, 14], &[7, 11]], &[4, 15], 6);

        game.draw().expect("nothing is playable");

        assert!(game.has_drawn());
        assert_eq!(1, game.bank_len());
        assert_eq!(3, game.players()[0].hand.len());
        assert_eq!(
            "Player 1 drew but cannot play. Click \"Skip Turn\".",
            game.status().message
        );
        assert_eq!(MoveError::AlreadyDrew, game.draw().unwrap_err());
        assert_eq!(1, game.bank_len());
    }

    #[test]
    fn draw_playable_tile() {
        let mut game = Game::playing(&[&[13, 14], &[7, 11]], &[4, 2], 6);

        game.draw().expect("nothing is playable");

        assert_eq!("Player 1 drew a card. Select a card to play!", game.status().message);
        assert_eq!(MoveError::MustPlay, game.pass().unwrap_err());
        game.select_tile(2, 0).expect("A:B was drawn");
    }

    #[test]
    fn draw_from_empty_bank() {
        let mut game = Game::playing(&[&[13, 14], &[7, 11]], &[], 6);

        assert_eq!(MoveError::BankEmpty, game.draw().unwrap_err());
    }

    #[test]
    fn pass_rules() {
        let mut game = Game::playing(&[&[13, 14], &[7, 11]], &[4], 6);

        assert_eq!(MoveError::MustDrawFirst, game.pass().unwrap_err());
        game.draw().expect("nothing is playable");
        game.pass().expect("drew and still cannot play");

        assert_eq!(1, game.current_player());
        assert!(!game.has_drawn());
    }

    #[test]
    fn pass_with_empty_bank() {
        let mut game = Game::playing(&[&[13, 14], &[7, 11]], &[], 6);

        game.pass().expect("bank is empty");

        assert_eq!(1, game.current_player());
    }

    #[test]
    fn scenario_sole_player_stuck_ends_without_draw() {
        init_test_logging();
        // Ann already finished, Bob holds D:D and the bank still has tiles
        let mut game = Game::playing(&[&[], &[13, 14]], &[4], 6);
        game.mut_players()[0].is_winner = true;
        game.mut_winners().push(0);
        *game.mut_current_player() = 1;

        let actual_error = game.draw().unwrap_err();

        assert_eq!(MoveError::LastPlayerCannotDraw, actual_error);
        assert_eq!(1, game.bank_len());
        assert_eq!(2, game.players()[1].hand.len());
        game.advance(Duration::from_millis(LAST_PLAYER_DELAY_MS));
        assert_eq!(Phase::Ended(Outcome::NoMoreWinners), game.phase());
        assert_eq!("No more winners! Play again!", game.status().message);
    }

    #[test]
    fn scenario_bank_empty_sole_player_cannot_play() {
        init_test_logging();
        // Ann plays her last tile, Bob is left with tiles matching neither end
        let mut game = Game::playing(&[&[2], &[13, 14]], &[], 6);

        game.select_tile(2, 0).expect("A:B fits B");
        game.place_tile(End::Right).expect("A:B fits the right end");
        assert_eq!(vec![0], game.winners().to_vec());
        assert_eq!("Here is the first winner: Player 1!", game.status().message);
        finish(&mut game);

        assert_eq!(Phase::Ended(Outcome::NoMoreWinners), game.phase());
        assert!(!game.players()[1].is_winner);
        assert_eq!(2, game.players()[1].hand.len());
        assert_eq!(4, game.tile_count());
    }

    #[test]
    fn scenario_sole_player_stuck_with_bank() {
        let mut game = Game::playing(&[&[2], &[13, 14]], &[4], 6);
        game.select_tile(2, 0).expect("A:B fits B");
        game.place_tile(End::Left).expect("A:B fits the left end");
        finish(&mut game);

        assert_eq!(Phase::Playing, game.phase());
        assert_eq!("Player 2 cannot make a move...", game.status().message);

        game.advance(Duration::from_millis(LAST_PLAYER_DELAY_MS));
        assert_eq!(Phase::Ended(Outcome::NoMoreWinners), game.phase());
    }

    #[test]
    fn scenario_blocked_after_two_winners() {
        init_test_logging();
        let mut game = Game::playing(&[&[7], &[3, 10], &[12]], &[], 6);
        game.rename(&["Ann", "Bob", "Cy"]);

        // Ann: B:C on the right, right end C
        game.select_tile(7, 0).expect("B:C fits B");
        game.place_tile(End::Right).expect("fits");
        finish(&mut game);
        assert_eq!(1, game.current_player());

        // Bob: C:C on the right, right end C
        game.select_tile(10, 1).expect("C:C fits C");
        game.place_tile(End::Right).expect("fits");
        finish(&mut game);
        assert_eq!(2, game.current_player());

        // Cy: C:E on the right, right end E, and Bob's A:C fits neither end
        game.select_tile(12, 2).expect("C:E fits C");
        game.place_tile(End::Right).expect("fits");
        finish(&mut game);

        assert_eq!(Phase::Ended(Outcome::NoMoreWinners), game.phase());
        assert_eq!(vec![0, 2], game.winners().to_vec());
        assert!(!game.players()[1].is_winner);
    }

    #[test]
    fn scenario_every_player_finishes() {
        init_test_logging();
        let mut game = Game::playing(&[&[7], &[10, 14], &[12]], &[], 6);
        game.rename(&["Ann", "Bob", "Cy"]);

        game.select_tile(7, 0).expect("B:C fits B");
        game.place_tile(End::Right).expect("fits");
        finish(&mut game);
        game.select_tile(10, 1).expect("C:C fits C");
        game.place_tile(End::Right).expect("fits");
        finish(&mut game);
        game.select_tile(12, 2).expect("C:E fits C");
        game.place_tile(End::Right).expect("fits");
        finish(&mut game);
        // Ann is skipped
        assert_eq!(1, game.current_player());
        assert_eq!("Bob's turn. Select a card to play!", game.status().message);

        game.select_tile(14, 1).expect("D:E fits E");
        game.place_tile(End::Right).expect("fits");
        assert_eq!("Here is the third winner: Bob!", game.status().message);
        assert_eq!(Some(Value::D), game.board().right_end());
        finish(&mut game);

        assert_eq!(Phase::Ended(Outcome::CircleOfWinners), game.phase());
        assert_eq!(vec![0, 2, 1], game.winners().to_vec());
        assert!(game.players().iter().all(|player| player.is_winner));
        assert_eq!("Ann & Cy & Bob form the Circle of Winners!", game.status().message);
        assert_eq!(Severity::Win, game.status().severity);
        assert_eq!(5, game.tile_count());
    }

    #[test]
    fn single_player_wins() {
        let mut game = Game::playing(&[&[2]], &[], 6);

        game.select_tile(2, 0).expect("A:B fits B");
        game.place_tile(End::Left).expect("fits");
        finish(&mut game);

        assert_eq!(Phase::Ended(Outcome::CircleOfWinners), game.phase());
        assert_eq!("Player 1 wins!", game.status().message);
    }

    #[test]
    fn next_turn_blocked_game() {
        let mut game = Game::playing(&[&[13], &[14], &[15]], &[], 6);

        game.pass().expect("nothing fits and the bank is empty");

        assert_eq!(Phase::Ended(Outcome::NoMoreWinners), game.phase());
        assert!(game.winners().is_empty());
    }
}
