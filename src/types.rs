use crate::{FoundDouble, Player, Tile, HAND_CAPACITY, PLAYER_CAPACITY};
use smallvec::SmallVec;

/// This is the bank of all the [tiles](Tile) that haven't been dealt or drawn yet. Tiles are
/// drawn from the back.
///
/// # See Also
///
/// * [Tile]
/// * [deal](crate::deal)
/// * [Game::draw](crate::Game::draw)
pub type Bank = Vec<Tile>;
/// A vector of [tiles](Tile) held by one player. Order is kept for display only.
///
/// # See Also
///
/// * [Tile]
/// * [HAND_CAPACITY]
/// * [Hands]
pub type Hand = SmallVec<[Tile; HAND_CAPACITY]>;
/// A vector of hands for each player, where each hand is a vector of [tiles](Tile).
///
/// # See Also
///
/// * [Hand]
/// * [PLAYER_CAPACITY]
/// * [deal](crate::deal)
pub type Hands = SmallVec<[Hand; PLAYER_CAPACITY]>;
/// A vector of [players](Player) in turn order.
///
/// # See Also
///
/// * [Player]
/// * [PLAYER_CAPACITY]
/// * [Game](crate::Game)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// An ordered vector of player indexes, in the order they finished.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Game::winners](crate::Game::winners)
pub type Winners = SmallVec<[usize; PLAYER_CAPACITY]>;
/// The doubles found during the find-the-double round, in the order they were found.
///
/// # See Also
///
/// * [FoundDouble]
/// * [Game::found_doubles](crate::Game::found_doubles)
pub type FoundDoubles = SmallVec<[FoundDouble; PLAYER_CAPACITY]>;
