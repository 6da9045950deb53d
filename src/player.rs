use crate::{Board, Hand, Tile, HAND_CAPACITY};
use serde::Serialize;

/// The name of the computer opponent.
pub const COMPUTER_NAME: &str = "Xeno";

/// A seat at the table, human or computer controlled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// The index of the player in turn order.
    pub id: usize,
    /// The name shown to everyone.
    pub name: String,
    /// The [tiles](Tile) held by the player.
    pub hand: Hand,
    /// Whether the player has emptied their hand (or found their double).
    pub is_winner: bool,
    /// Whether the player is the computer opponent.
    pub is_computer: bool,
}

impl Player {
    /// A human player with an empty hand. A blank `name` becomes `Player N` where `N` is the
    /// 1-based seat number.
    pub fn human(id: usize, name: &str) -> Player {
        let name = name.trim();
        Player {
            id,
            name: if name.is_empty() {
                format!("Player {}", id + 1)
            } else {
                name.to_owned()
            },
            hand: Hand::with_capacity(HAND_CAPACITY),
            is_winner: false,
            is_computer: false,
        }
    }

    /// The [computer opponent](COMPUTER_NAME) with an empty hand.
    pub fn computer(id: usize) -> Player {
        Player {
            id,
            name: COMPUTER_NAME.to_owned(),
            hand: Hand::with_capacity(HAND_CAPACITY),
            is_winner: false,
            is_computer: true,
        }
    }

    /// # Returns
    ///
    /// The position of the [tile](Tile) with identity `tile` in the hand.
    pub fn position(&self, tile: u8) -> Option<usize> {
        self.hand.iter().position(|held| held.id == tile)
    }

    /// # Returns
    ///
    /// The held [tile](Tile) with identity `tile`.
    pub fn get(&self, tile: u8) -> Option<Tile> {
        self.hand.iter().find(|held| held.id == tile).copied()
    }

    /// Removes the [tile](Tile) with identity `tile` from the hand, keeping the order of the
    /// rest.
    pub(crate) fn take(&mut self, tile: u8) -> Option<Tile> {
        self.position(tile).map(|index| self.hand.remove(index))
    }

    /// # Returns
    ///
    /// The held [tiles](Tile) which can be attached to either end of `board`, in hand order.
    pub fn playable<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = &'a Tile> {
        self.hand.iter().filter(move |tile| board.accepts_any(tile))
    }

    /// # Returns
    ///
    /// Whether any held [tile](Tile) can be attached to `board`.
    pub fn can_play(&self, board: &Board) -> bool {
        self.playable(board).next().is_some()
    }
}
