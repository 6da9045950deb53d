use crate::{
    ordinal, Continuation, FoundDouble, Game, MoveError, Phase, Severity, Status, Tile,
    FIND_DOUBLE_DURATION_MS,
};
use itertools::Itertools;
use tracing::{debug, info};

impl Game {
    /// Opens [Phase::FindDouble] on the dealt hands and starts the countdown.
    pub(super) fn start_find_double(&mut self) {
        self.phase = Phase::FindDouble;
        self.found_doubles.clear();
        self.discarded.clear();
        self.last_wrong = None;
        self.deadline = Some(self.scheduler.now() + FIND_DOUBLE_DURATION_MS);
        self.schedule(FIND_DOUBLE_DURATION_MS, Continuation::FindDoubleTimeout);
        info!(level = %self.level, deadline = ?self.deadline, "find the double started");
        self.set_status(Status::highlight(
            "🌞 Find the DOUBLE before time runs out! Click on it!",
        ));
    }

    /// A guess of `player` for their double.
    ///
    /// A double is taken out of the hand and recorded as found. Anything else is discarded and
    /// shown as the last wrong tile while the countdown goes on.
    pub(super) fn guess_double(&mut self, tile: u8, player: usize) -> Result<(), MoveError> {
        self.check_seat(player)?;
        if self.players[player].is_winner {
            let name = self.players[player].name.clone();
            return Err(self.reject(MoveError::AlreadyFound { name }));
        }
        let held = self.held(player, tile)?;
        self.players[player].take(tile);

        if !held.is_double() {
            debug!(player, tile = %held, "wrong guess");
            self.discarded.push(held);
            self.last_wrong = Some(held);
            self.set_status(Status::new(
                "❌ Try again! Two sides of this domino are not equal.",
                Severity::Wrong,
            ));
            return Ok(());
        }

        self.players[player].is_winner = true;
        self.winners.push(player);
        self.found_doubles.push(FoundDouble { player, tile: held });
        info!(player, tile = %held, place = self.winners.len(), "double found");

        let name = &self.players[player].name;
        let message = if self.winners.len() == 1 {
            format!("🎉 {} Won! Found the double!", name)
        } else {
            format!("🎉 {} is the {} winner!", name, ordinal(self.winners.len()))
        };
        if self.active_len() == 0 {
            self.phase = Phase::FindDoubleWon;
            self.deadline = None;
            info!(winners = ?self.winners, "every double was found");
        }
        self.set_status(Status::new(message, Severity::Win));
        Ok(())
    }

    /// Ends the find-the-double round when the countdown runs out.
    pub(super) fn find_double_timeout(&mut self) {
        self.phase = Phase::FindDoubleEnded;
        self.deadline = None;
        info!(winners = ?self.winners, "time is up");
        self.set_status(Status::new(
            "⏰ Game over! Time's up! Try again!",
            Severity::GameOver,
        ));
    }

    /// # Returns
    ///
    /// The doubles still held when the countdown ran out, with the index of their holder.
    /// Empty in every other phase.
    pub fn revealed_doubles(&self) -> Vec<FoundDouble> {
        if self.phase != Phase::FindDoubleEnded {
            return Vec::new();
        }
        self.players
            .iter()
            .enumerate()
            .flat_map(|(player, seat)| {
                seat.hand
                    .iter()
                    .filter(|tile| tile.is_double())
                    .map(move |&tile| FoundDouble { player, tile })
            })
            .collect_vec()
    }

    /// The wrong guesses of the find-the-double round in the order they were made.
    #[inline]
    pub fn discarded(&self) -> &[Tile] {
        &self.discarded
    }

    /// The latest wrong guess.
    #[inline]
    pub fn last_wrong(&self) -> Option<Tile> {
        self.last_wrong
    }
}
