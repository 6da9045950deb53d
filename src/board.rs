use crate::{Tile, Value, TILES_LEN};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// One of the two open ends of the [board](Board).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    /// The front of the line of tiles.
    Left,
    /// The back of the line of tiles.
    Right,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Left => f.write_str("left"),
            End::Right => f.write_str("right"),
        }
    }
}

/// An oriented placement of a [tile](Tile) on the [board](Board).
///
/// The tile keeps its printed faces. `flipped` records that its right face points to the
/// left end of the line and its left face to the right end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// The placed tile.
    pub tile: Tile,
    /// Whether the tile is a double, drawn across the line instead of along it.
    pub is_double: bool,
    /// Whether the faces are swapped relative to how the tile is printed.
    pub flipped: bool,
}

impl Slot {
    fn new(tile: Tile, flipped: bool) -> Slot {
        Slot {
            tile,
            is_double: tile.is_double(),
            flipped,
        }
    }

    /// # Returns
    ///
    /// The value facing the left end of the line.
    #[inline]
    pub fn left_value(&self) -> Value {
        if self.flipped {
            self.tile.right.value
        } else {
            self.tile.left.value
        }
    }

    /// # Returns
    ///
    /// The value facing the right end of the line.
    #[inline]
    pub fn right_value(&self) -> Value {
        if self.flipped {
            self.tile.left.value
        } else {
            self.tile.right.value
        }
    }
}

/// Describes the reason why a [tile](Tile) could not be [placed](Board::place).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum PlaceError {
    /// Attempting to attach a [tile](Tile) before the board has been started.
    #[error("the board has not been started")]
    EmptyBoard,
    /// Attempting to start a board that already holds [tiles](Tile).
    #[error("the board has already been started")]
    AlreadyStarted,
    /// Attempting to attach a [tile](Tile) whose faces do not match the targeted end.
    #[error("tile {tile} cannot be played on the {end} end which needs {needed}")]
    InvalidMove {
        /// The rejected tile.
        tile: Tile,
        /// The targeted end.
        end: End,
        /// The value exposed at the targeted end.
        needed: Value,
    },
}

/// An ordered line of [slots](Slot) with two open ends.
///
/// `left_end` is always the left value of the first slot and `right_end` the right value of
/// the last slot.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Board {
    slots: VecDeque<Slot>,
}

impl Board {
    /// An empty board.
    pub fn new() -> Board {
        Board {
            slots: VecDeque::with_capacity(TILES_LEN),
        }
    }

    /// Starts the line with `tile` as printed. Both ends expose the tile's two values.
    ///
    /// # Errors
    ///
    /// * [PlaceError::AlreadyStarted] Attempting to start a board that holds tiles.
    pub fn start(&mut self, tile: Tile) -> Result<(), PlaceError> {
        if !self.slots.is_empty() {
            return Err(PlaceError::AlreadyStarted);
        }
        self.slots.push_back(Slot::new(tile, false));
        Ok(())
    }

    /// Attaches `tile` to `end`, turning it so that its matching face touches the line.
    ///
    /// On the left end the tile keeps its printed orientation when its right face matches
    /// the current left end, so that its left face becomes the new left end. Otherwise it is
    /// flipped. The right end mirrors this with the left face.
    ///
    /// # Errors
    ///
    /// * [PlaceError::EmptyBoard] Attempting to attach before the board was started.
    /// * [PlaceError::InvalidMove] Neither face of `tile` matches the targeted end.
    ///
    /// # Returns
    ///
    /// The value newly exposed at `end`.
    pub fn place(&mut self, tile: Tile, end: End) -> Result<Value, PlaceError> {
        let needed = self.end(end).ok_or(PlaceError::EmptyBoard)?;
        if !tile.can_play_on(needed) {
            return Err(PlaceError::InvalidMove { tile, end, needed });
        }

        let slot = match end {
            End::Left => {
                let slot = Slot::new(tile, tile.right.value != needed);
                self.slots.push_front(slot);
                slot
            }
            End::Right => {
                let slot = Slot::new(tile, tile.left.value != needed);
                self.slots.push_back(slot);
                slot
            }
        };

        Ok(match end {
            End::Left => slot.left_value(),
            End::Right => slot.right_value(),
        })
    }

    /// # Returns
    ///
    /// The value exposed at `end`, or [None] while the board is empty.
    #[inline]
    pub fn end(&self, end: End) -> Option<Value> {
        match end {
            End::Left => self.left_end(),
            End::Right => self.right_end(),
        }
    }

    /// # Returns
    ///
    /// The value exposed at the left end, or [None] while the board is empty.
    #[inline]
    pub fn left_end(&self) -> Option<Value> {
        self.slots.front().map(Slot::left_value)
    }

    /// # Returns
    ///
    /// The value exposed at the right end, or [None] while the board is empty.
    #[inline]
    pub fn right_end(&self) -> Option<Value> {
        self.slots.back().map(Slot::right_value)
    }

    /// # Returns
    ///
    /// Whether `tile` can be attached to `end`.
    #[inline]
    pub fn accepts(&self, tile: &Tile, end: End) -> bool {
        self.end(end).map_or(false, |value| tile.can_play_on(value))
    }

    /// # Returns
    ///
    /// Whether `tile` can be attached to either end.
    #[inline]
    pub fn accepts_any(&self, tile: &Tile) -> bool {
        self.accepts(tile, End::Left) || self.accepts(tile, End::Right)
    }

    /// The placed [slots](Slot) from left to right.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// The number of placed [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no [tile](Tile) has been placed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
