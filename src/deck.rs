use crate::{tiles, Bank, Hand, Hands, Tile, HAND_CAPACITY, PLAYER_CAPACITY, TILES_LEN};
use rand::seq::SliceRandom;
use rand::Rng;

/// Describes why [tiles](Tile) could not be [dealt](deal).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum DealError {
    /// Attempting to deal more [tiles](Tile) than the deck holds.
    #[error("cannot deal {requested_tiles} tiles from a deck of {tiles_in_deck}")]
    NotEnoughTiles {
        /// The number of [tiles](Tile) requested for hands.
        requested_tiles: usize,
        /// The number of [tiles](Tile) in the deck.
        tiles_in_deck: usize,
    },
}

/// # Returns
///
/// The canonical [tiles](Tile) in a uniformly random order (Fisher–Yates).
pub fn fresh_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Tile> {
    let mut deck = Vec::with_capacity(TILES_LEN);
    deck.extend(tiles());
    deck.shuffle(rng);
    deck
}

/// Deals `per_player` [tiles](Tile) to each of `players_len` players one round at a time:
/// every player receives one tile popped from the back of `deck` before anyone receives a
/// second one. The remainder becomes the [bank](Bank).
///
/// # Arguments
///
/// * `deck`: The [tiles](Tile) to deal from, usually [fresh_shuffled_deck].
/// * `players_len`: The number of players.
/// * `per_player`: The number of [tiles](Tile) each player will have in their hand.
///
/// # Errors
///
/// * [DealError::NotEnoughTiles] Attempting to deal more [tiles](Tile) than `deck` holds.
pub fn deal(
    mut deck: Vec<Tile>,
    players_len: usize,
    per_player: usize,
) -> Result<(Hands, Bank), DealError> {
    let requested_tiles = players_len * per_player;
    if requested_tiles > deck.len() {
        return Err(DealError::NotEnoughTiles {
            requested_tiles,
            tiles_in_deck: deck.len(),
        });
    }

    let mut hands: Hands = (0..players_len)
        .map(|_| Hand::with_capacity(HAND_CAPACITY))
        .collect();
    for _ in 0..per_player {
        for hand in hands.iter_mut() {
            // checked above
            if let Some(tile) = deck.pop() {
                hand.push(tile);
            }
        }
    }

    Ok((hands, deck))
}

/// Deals hands for the find-the-double round: each player receives exactly one double and
/// up to `hand_len - 1` other [tiles](Tile), then the hand is shuffled. Players receive fewer
/// tiles when the non-doubles run out. Undealt tiles are returned as a [bank](Bank) that is
/// never drawn from during the round.
///
/// # Arguments
///
/// * `players_len`: The number of players, at most the number of doubles.
/// * `hand_len`: The number of [tiles](Tile) wanted in each hand.
///
/// # Errors
///
/// * [DealError::NotEnoughTiles] Attempting to seat more players than there are doubles.
pub fn deal_find_double<R: Rng + ?Sized>(
    rng: &mut R,
    players_len: usize,
    hand_len: usize,
) -> Result<(Hands, Bank), DealError> {
    let (mut doubles, mut others): (Vec<Tile>, Vec<Tile>) =
        fresh_shuffled_deck(rng).into_iter().partition(Tile::is_double);
    if players_len > doubles.len() {
        return Err(DealError::NotEnoughTiles {
            requested_tiles: players_len,
            tiles_in_deck: doubles.len(),
        });
    }
    doubles.shuffle(rng);
    others.shuffle(rng);

    let mut hands = Hands::with_capacity(PLAYER_CAPACITY);
    for _ in 0..players_len {
        let mut hand = Hand::with_capacity(HAND_CAPACITY);
        hand.extend(doubles.pop());
        let others_len = hand_len.saturating_sub(1).min(others.len());
        hand.extend(others.drain(others.len() - others_len..));
        hand.shuffle(rng);
        hands.push(hand);
    }

    let mut bank = doubles;
    bank.append(&mut others);
    Ok((hands, bank))
}
