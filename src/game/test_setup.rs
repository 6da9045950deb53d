use crate::{
    random_humans_len, random_names, tile_by_id, Bank, Board, Game, Hand, Level,
    MemoryPreferences, Phase, Player, Players, Tile, Winners,
};
use rand::Rng;

fn tiles_of(ids: &[u8]) -> impl Iterator<Item = Tile> + '_ {
    ids.iter().map(|&id| {
        tile_by_id(id).unwrap_or_else(|| unreachable!("tile {} should exist in tests", id))
    })
}

impl Game {
    /// Generates a [Game] in [Phase::Setup] with no players and a fixed seed.
    ///
    /// # Returns
    ///
    /// A [Game] struct with the properties set to the following:
    /// * `players`: No players.
    /// * `bank`: An empty bank.
    /// * `board`: An empty board.
    /// * `current_player`: `0`.
    /// * `level`: [Level::Circle].
    pub fn empty_game() -> Game {
        Game::seeded(0, Box::new(MemoryPreferences::new()))
    }

    /// Generates a [Game] in [Phase::Setup] whose players already hold `hands`. Players are
    /// named `Player N`. Tiles are drawn from the back of `bank`.
    pub fn staged(hands: &[&[u8]], bank: &[u8]) -> Game {
        let mut game = Game::empty_game();
        game.players = hands
            .iter()
            .enumerate()
            .map(|(id, ids)| {
                let mut player = Player::human(id, "");
                player.hand = tiles_of(ids).collect::<Hand>();
                player
            })
            .collect();
        game.bank = tiles_of(bank).collect::<Bank>();
        game
    }

    /// Generates a [Game] in [Phase::Playing] where the board was started with `starter` and
    /// it is the turn of the first player.
    pub fn playing(hands: &[&[u8]], bank: &[u8], starter: u8) -> Game {
        let mut game = Game::staged(hands, bank);
        for tile in tiles_of(&[starter]) {
            if let Err(error) = game.board.start(tile) {
                unreachable!("a staged board should start: {}", error);
            }
        }
        game.phase = Phase::Playing;
        game
    }

    /// Starts a classic game with a random number of humans, random names and the computer
    /// opponent, seeded from `rng`.
    pub fn random_classic<R: Rng + ?Sized>(rng: &mut R, computer: bool) -> Game {
        let mut game = Game::seeded(rng.gen(), Box::new(MemoryPreferences::new()));
        let humans = random_humans_len(rng);
        let names = random_names(rng, humans);
        if let Err(errors) = game.start_game(names.as_slice(), computer, Level::Classic) {
            unreachable!("a random classic game should start: {:?}", errors);
        }
        game
    }

    /// Renames the players in seat order.
    pub fn rename(&mut self, names: &[&str]) {
        for (player, name) in self.players.iter_mut().zip(names) {
            player.name = (*name).to_owned();
        }
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.bank`.
    pub fn mut_bank(&mut self) -> &mut Bank {
        &mut self.bank
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.phase`.
    pub fn mut_phase(&mut self) -> &mut Phase {
        &mut self.phase
    }

    /// A mutable reference to `self.winners`.
    pub fn mut_winners(&mut self) -> &mut Winners {
        &mut self.winners
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, TILES_LEN};
    use itertools::Itertools;

    #[test]
    fn empty_game() {
        let game = Game::empty_game();

        assert_eq!(Phase::Setup, game.phase());
        assert_eq!(Players::new(), game.players);
        assert!(game.bank.is_empty());
        assert!(game.board.is_empty());
        assert_eq!(0, game.current_player);
    }

    #[test]
    fn staged() {
        let game = Game::staged(&[&[1, 2], &[15]], &[3, 4]);

        assert_eq!(
            vec!["Player 1", "Player 2"],
            game.players.iter().map(|player| player.name.as_str()).collect_vec()
        );
        assert_eq!(vec![1, 2], game.players[0].hand.iter().map(|tile| tile.id).collect_vec());
        assert_eq!(vec![3, 4], game.bank.iter().map(|tile| tile.id).collect_vec());
        assert_eq!(Phase::Setup, game.phase);
    }

    #[test]
    fn playing() {
        let game = Game::playing(&[&[1]], &[], 13);

        assert_eq!(Phase::Playing, game.phase);
        assert_eq!(Some(Value::D), game.board.left_end());
        assert_eq!(2, game.tile_count());
    }

    #[test]
    fn random_classic() {
        let mut rng = rand::thread_rng();

        let game = Game::random_classic(&mut rng, true);

        assert!(game.players.last().map_or(false, |player| player.is_computer));
        assert_eq!(TILES_LEN, game.tile_count());
    }

    #[test]
    fn rename_in_seat_order() {
        let mut game = Game::staged(&[&[1], &[2], &[3]], &[]);

        game.rename(&["Ann", "Bob"]);

        assert_eq!(
            vec!["Ann", "Bob", "Player 3"],
            game.players.iter().map(|player| player.name.as_str()).collect_vec()
        );
    }
}
