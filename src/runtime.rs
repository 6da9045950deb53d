//! Plumbing between a [Game](crate::Game) and the frontends that render it and collect
//! intents from the players.

use crate::{GameView, Intent, IntentError};
use async_trait::async_trait;
pub use game_runtime::*;

mod game_runtime;

/// Defines how the runtime talks to a renderer or a remote player.
///
/// `next_intent` blocks execution until getting input.
/// `update_rejection` blocks execution until updating output.
/// `update_view` may execute in parallel with other frontends.
///
/// # Errors
///
/// The implementor of [`Frontend`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Frontend<E> {
    /// Gets the next [`Intent`]. [None] when the input has ended.
    fn next_intent(&self) -> Result<Option<Intent>, E>;

    /// When an [`Intent`] is rejected, tells the frontend the state of the game, the intent and
    /// the reason why it could not be applied.
    fn update_rejection<'a>(
        &self,
        view: &'a GameView<'a>,
        intent: Intent,
        error: IntentError,
    ) -> Result<(), E>;

    /// Updates the frontend with the state of the game.
    async fn update_view<'a>(&self, view: &'a GameView<'a>) -> Result<(), E>;
}
