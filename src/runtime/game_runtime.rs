use crate::runtime::Frontend;
use crate::Game;
use futures::future;
use itertools::Itertools;
use tracing::{debug, info};

/// It repeatedly asks `controller` for an intent, and if the intent is rejected, it tells the
/// frontend about the error and asks again. Once an intent is applied, stops asking.
///
/// # Arguments
///
/// * `controller`: The frontend whose input drives the game.
/// * `game`: The game to apply intents to.
///
/// # Errors
///
/// When `controller` fails to send input or receive a rejection.
///
/// # Returns
///
/// Whether an intent was applied. `false` once the input of `controller` has ended.
pub fn process_input<F, E>(controller: &F, game: &mut Game) -> Result<bool, E>
where
    F: Frontend<E> + ?Sized,
{
    loop {
        let intent = match controller.next_intent()? {
            Some(intent) => intent,
            None => return Ok(false),
        };
        match game.apply(intent.clone()) {
            Ok(()) => return Ok(true),
            Err(error) => {
                debug!(?intent, %error, "reporting rejected intent");
                // cannot use map_err since E needs to be propagated here
                controller.update_rejection(&game.view(), intent, error)?;
            }
        }
    }
}

/// Asynchronously sends the current state of the game to every [`Frontend`].
///
/// # Arguments
///
/// * `frontends`: The frontends to update.
/// * `game`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [`Frontend::update_view`] into a vector.
pub async fn send_updates<F, E>(frontends: &[F], game: &Game) -> Result<(), Vec<E>>
where
    F: Frontend<E>,
{
    let view = game.view();
    let update_tasks = frontends
        .iter()
        .map(|frontend| frontend.update_view(&view));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

/// Shows the game to every frontend, then applies intents from `controller` and shows every
/// applied intent until the input of `controller` ends.
///
/// # Errors
///
/// The first error of `controller` or every error of one round of updates.
pub async fn run<C, F, E>(controller: &C, frontends: &[F], game: &mut Game) -> Result<(), Vec<E>>
where
    C: Frontend<E> + ?Sized,
    F: Frontend<E>,
{
    send_updates(frontends, game).await?;
    while process_input(controller, game).map_err(|error| vec![error])? {
        send_updates(frontends, game).await?;
    }
    info!(phase = ?game.phase(), revision = game.revision(), "input ended");

    Ok(())
}
