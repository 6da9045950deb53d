//! Concrete structs to represent and protect the state of a matching-tile domino game with
//! methods to progress through the phases of the game.
//!
//! ## Summary
//!
//! A [Game] seats one to [PLAYER_CAPACITY] players, optionally including the computer
//! opponent, and runs one of two kinds of round chosen by the [level](Level):
//!
//! * [Level::Classic]: The full domino game. Players attach [tiles](Tile) whose
//! [values](Value) match an open [end](End) of the [board](Board) until they empty their hands.
//! Everyone who empties their hand joins the winners, and the game goes on for the rest.
//! * [Level::Circle], [Level::Triangle] and [Level::Star]: A timed round where every player
//! looks for the single double in their hand.
//!
//! ## What are the phases of the game?
//!
//! * [Phase::Setup]: No game is running. Players and the level are being chosen.
//! * [Phase::ShowDoubles]: At least one double was dealt. The holder of the highest double
//! starts the game with it.
//! * [Phase::DrawForDouble]: Nobody holds a double. Every player draws one tile per round
//! until a double shows up.
//! * [Phase::NoDoubles]: The bank ran out before a double showed up. Any tile may start.
//! * [Phase::Playing]: Players take turns attaching tiles to the board.
//! * [Phase::Ended]: The classic game is over, either with a
//! [Circle of Winners](Outcome::CircleOfWinners) or with [no more winners](Outcome::NoMoreWinners).
//! * [Phase::FindDouble], [Phase::FindDoubleEnded] and [Phase::FindDoubleWon]: The
//! find-the-double round, its timeout and its early win.
//!
//! ## How is the game created?
//!
//! [Game::new], [Game::with_preferences] and [Game::seeded] create the game in
//! [Phase::Setup]. The last chosen level is loaded from a [PreferenceStore].
//! [Game::start_game] seats the players and deals.
//!
//! ## How is the game advanced?
//!
//! Every player intent is a method of [Game], or an [Intent] passed to [Game::apply]:
//!
//! * [Game::select_tile]: Start with a double, select a tile to play, or guess the double.
//! * [Game::place_tile]: Attach the selected tile to an end of the board.
//! * [Game::draw]: Draw from the bank.
//! * [Game::pass]: Skip a turn.
//! * [Game::reset_to_setup]: Stop everything and go back to setup.
//!
//! A rejected intent returns a [MoveError], shows its message as a warning [status](Status),
//! and changes nothing else.
//!
//! Delayed work is queued as a [Continuation] on the [Scheduler], a logical clock which only
//! moves through [Game::advance]. A continuation only runs in the phase and generation it was
//! scheduled in, so a reset or a phase change silently drops it.
//!
//! ### How are tiles placed?
//!
//! A [tile](Tile) may be attached to an [end](End) when either of its faces carries the value
//! exposed there. The tile is turned so that the matching face touches the line and
//! the other face becomes the new end. The orientation is recorded in the [slot](Slot).
//!
//! ### When does the classic game end?
//!
//! When every player has emptied their hand the winners form the Circle of Winners. When the
//! bank is empty and nobody left can play, or when the only player left cannot play, there are
//! no more winners.
//!
//! ## How is the game viewed?
//!
//! [Game::view] borrows an immutable, serializable [GameView] of everything a renderer shows.
//! [Game::revision] increases with every change. The [runtime] module sends views to
//! [frontends](runtime::Frontend) and collects their intents.
//!
//! ## How is the game tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. [Game] implements
//! methods to get mutable references to its properties and methods to stage common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use consts::*;
pub use deck::*;
pub use game::*;
pub use level::*;
pub use phase::*;
pub use player::*;
pub use preferences::*;
#[cfg(test)]
pub use random::*;
pub use scheduler::*;
pub use status::*;
#[cfg(test)]
pub use test_logging::*;
pub use tile::*;
pub use types::*;

mod board;
mod consts;
mod deck;
mod game;
mod level;
mod phase;
mod player;
mod preferences;
#[cfg(test)]
mod random;
pub mod runtime;
mod scheduler;
mod status;
#[cfg(test)]
mod test_logging;
mod tile;
mod types;
