use crate::Phase;
use itertools::Itertools;
use serde::Serialize;
use std::time::Duration;

/// Work the [game](crate::Game) resumes after a delay.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Continuation {
    /// Ends the turn of the player who just placed a tile.
    FinishTurn,
    /// The computer takes its turn.
    ComputerPlay {
        /// The seat of the computer.
        player: usize,
        /// The turn it was scheduled in.
        turn: u64,
    },
    /// The computer tries again after drawing.
    ComputerRetry {
        /// The seat of the computer.
        player: usize,
        /// The turn it was scheduled in.
        turn: u64,
    },
    /// The computer starts the game with the highest double.
    ComputerStartDouble {
        /// The seat of the computer.
        player: usize,
        /// The identity of the double.
        tile: u8,
    },
    /// Ends the classic game without more winners.
    NoMoreWinners,
    /// Ends the find-the-double round when the countdown runs out.
    FindDoubleTimeout,
}

/// A [continuation](Continuation) waiting on the [scheduler](Scheduler).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Scheduled {
    /// The logical time in milliseconds when the continuation is due.
    pub due: u64,
    /// The generation of the [scheduler](Scheduler) when the continuation was scheduled.
    pub generation: u64,
    /// The phase of the game when the continuation was scheduled. It only runs in that phase.
    pub phase: Phase,
    /// The work to resume.
    pub continuation: Continuation,
    sequence: u64,
}

/// A logical millisecond clock with a queue of delayed [continuations](Continuation).
///
/// Time only moves through [Scheduler::pop_due] and [Scheduler::finish], so delays are
/// deterministic and never block.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: u64,
    generation: u64,
    sequence: u64,
    queue: Vec<Scheduled>,
}

impl Scheduler {
    /// An empty scheduler at time `0`.
    pub fn new() -> Scheduler {
        Scheduler::default()
    }

    /// The current logical time in milliseconds.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// The current generation. Continuations from older generations never run.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Queues `continuation` to run `delay_ms` from now if the game is still in `phase`.
    ///
    /// # Returns
    ///
    /// The logical time the continuation is due.
    pub fn schedule(&mut self, delay_ms: u64, phase: Phase, continuation: Continuation) -> u64 {
        let due = self.now.saturating_add(delay_ms);
        self.queue.push(Scheduled {
            due,
            generation: self.generation,
            phase,
            continuation,
            sequence: self.sequence,
        });
        self.sequence += 1;
        due
    }

    /// Removes the earliest continuation due at or before `until` and moves the clock to its
    /// due time. Ties run in scheduling order.
    pub fn pop_due(&mut self, until: u64) -> Option<Scheduled> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due <= until)
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.sequence))
            .map(|(index, _)| index)?;
        let scheduled = self.queue.swap_remove(index);
        self.now = self.now.max(scheduled.due);
        Some(scheduled)
    }

    /// Moves the clock forward to `until` once every due continuation was popped.
    pub fn finish(&mut self, until: u64) {
        self.now = self.now.max(until);
    }

    /// Whether `scheduled` may still run in `phase`.
    #[inline]
    pub fn is_current(&self, scheduled: &Scheduled, phase: Phase) -> bool {
        scheduled.generation == self.generation && scheduled.phase == phase
    }

    /// Drops every queued continuation and starts a new generation.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.queue.clear();
    }

    /// The queued continuations in due order.
    pub fn pending(&self) -> impl Iterator<Item = &Scheduled> {
        self.queue
            .iter()
            .sorted_by_key(|scheduled| (scheduled.due, scheduled.sequence))
    }

    /// The time left until `due`, never negative.
    pub fn remaining(&self, due: u64) -> Duration {
        Duration::from_millis(due.saturating_sub(self.now))
    }
}
