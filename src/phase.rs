use serde::Serialize;

/// The phase of the [game](crate::Game).
///
/// The classic game moves from [Phase::Setup] through [Phase::ShowDoubles] (possibly after one
/// or more [Phase::DrawForDouble] rounds or into [Phase::NoDoubles]) to [Phase::Playing] and
/// finally [Phase::Ended]. The find-the-double round moves from [Phase::Setup] to
/// [Phase::FindDouble] and ends in [Phase::FindDoubleEnded] or [Phase::FindDoubleWon].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No game is running. Players and the level are being chosen.
    Setup,
    /// At least one double was dealt. Players look for the highest one.
    ShowDoubles,
    /// Nobody holds a double. Every player draws one tile per round.
    DrawForDouble,
    /// The bank ran out before a double appeared. Any tile may start.
    NoDoubles,
    /// Players take turns attaching tiles to the board.
    Playing,
    /// The classic game is over.
    Ended(Outcome),
    /// The timed find-the-double round is running.
    FindDouble,
    /// The countdown ran out before everyone found their double.
    FindDoubleEnded,
    /// Everyone found their double in time.
    FindDoubleWon,
}

/// How the classic game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// Every player emptied their hand.
    CircleOfWinners,
    /// The remaining players could not finish.
    NoMoreWinners,
}

impl Phase {
    /// Whether no more intents besides a reset can change the game.
    pub fn is_over(self) -> bool {
        matches!(
            self,
            Phase::Ended(_) | Phase::FindDoubleEnded | Phase::FindDoubleWon
        )
    }
}
