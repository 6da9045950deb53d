use crate::TILES_LEN;
use konst::primitive::{parse_u64, parse_usize};
use konst::{option, result};

/// The maximum number of seats at the table, humans and the computer player together.
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. If the environment
/// variable named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a
/// `usize`, set to the value of the environment variable. Otherwise, it is set to `5`.
///
/// # Panics
///
/// * When `PLAYER_CAPACITY * DEAL_LEN` is greater than [the number of tiles](TILES_LEN)
///
/// # See Also
///
/// * [DEAL_LEN]
/// * [Game::start_game](crate::Game::start_game)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    5
);
const _: () = assert!(PLAYER_CAPACITY > 0);
/// All small, dynamically allocated properties which store hand data will be stored
/// on the stack until the number of [tiles](crate::Tile) in a hand becomes greater
/// than `HAND_CAPACITY`. If the environment variable named `HAND_CAPACITY` is present at
/// compile time and is able to be parsed into a `usize`, set to the value of the environment
/// variable. Otherwise, it is set to `8`.
pub const HAND_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("HAND_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    8
);
/// The number of [tiles](crate::Tile) dealt to each player at the start of the classic game.
/// If the environment variable named `DEAL_LEN` is present at compile time and is able to be
/// parsed into a `usize`, set to the value of the environment variable. Otherwise, it is set
/// to `3`.
///
/// # See Also
///
/// * [deal](crate::deal)
pub const DEAL_LEN: usize = option::unwrap_or!(
    option::and_then!(option_env!("DEAL_LEN"), |str| result::ok!(parse_usize(
        str
    ))),
    3
);
const _: () = assert!(DEAL_LEN > 0);
const _: () = assert!(PLAYER_CAPACITY * DEAL_LEN <= TILES_LEN);
/// Milliseconds the computer player "thinks" before acting. `3000` unless overridden by the
/// `THINKING_DELAY_MS` environment variable at compile time.
pub const THINKING_DELAY_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("THINKING_DELAY_MS"), |str| result::ok!(
        parse_u64(str)
    )),
    3000
);
/// Milliseconds between a computer draw and its second attempt to play. `2000` unless
/// overridden by the `RETRY_DELAY_MS` environment variable at compile time.
pub const RETRY_DELAY_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("RETRY_DELAY_MS"), |str| result::ok!(
        parse_u64(str)
    )),
    2000
);
/// Milliseconds the matching ends stay highlighted before the turn is resolved. `1000` unless
/// overridden by the `PLACEMENT_DELAY_MS` environment variable at compile time.
pub const PLACEMENT_DELAY_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("PLACEMENT_DELAY_MS"), |str| result::ok!(
        parse_u64(str)
    )),
    1000
);
/// Extra milliseconds of celebration after a player empties their hand. `3000` unless
/// overridden by the `WINNER_DELAY_MS` environment variable at compile time.
pub const WINNER_DELAY_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("WINNER_DELAY_MS"), |str| result::ok!(
        parse_u64(str)
    )),
    3000
);
/// Milliseconds a stuck last player can look at the board before the game ends without more
/// winners. `2000` unless overridden by the `LAST_PLAYER_DELAY_MS` environment variable at
/// compile time.
pub const LAST_PLAYER_DELAY_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("LAST_PLAYER_DELAY_MS"), |str| result::ok!(
        parse_u64(str)
    )),
    2000
);
/// Length of the find-the-double countdown in milliseconds. `30000` unless overridden by the
/// `FIND_DOUBLE_DURATION_MS` environment variable at compile time.
pub const FIND_DOUBLE_DURATION_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("FIND_DOUBLE_DURATION_MS"), |str| result::ok!(
        parse_u64(str)
    )),
    30_000
);
const _: () = assert!(FIND_DOUBLE_DURATION_MS > 0);
