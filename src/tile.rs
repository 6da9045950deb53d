use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// The number of [`Tile`] variants. One tile for every unordered pair of the 5 values.
pub const TILES_LEN: usize = Value::VALUES_LEN * (Value::VALUES_LEN + 1) / 2;

/// Describes one of the five ordered values printed on a [`Tile`]. `E` ranks highest.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive, Serialize,
)]
pub enum Value {
    /// `1`.
    A = 1,
    /// `2`.
    B = 2,
    /// `3`.
    C = 3,
    /// `4`.
    D = 4,
    /// `5`.
    E = 5,
}

impl Value {
    /// The number of [`Value`] variants. 5 values.
    pub const VALUES_LEN: usize = 5;

    /// # Returns
    ///
    /// An array of all [`Value`] variants from lowest to highest.
    #[inline]
    pub fn values() -> [Value; Value::VALUES_LEN] {
        [Value::A, Value::B, Value::C, Value::D, Value::E]
    }

    /// # Returns
    ///
    /// The rank of the value, `1` for [`Value::A`] up to `5` for [`Value::E`].
    #[inline]
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Value::A => "A",
            Value::B => "B",
            Value::C => "C",
            Value::D => "D",
            Value::E => "E",
        };
        f.write_str(letter)
    }
}

impl Distribution<Value> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        let rank = rng.gen_range(1..=Value::VALUES_LEN);
        num::FromPrimitive::from_usize(rank).unwrap_or_else(|| {
            dbg!(rank, Value::VALUES_LEN);
            unreachable!(
                "rank ({:?}) should be matched since values cover all ranks \
                in range 1..=Value::VALUES_LEN (1..={:?}).",
                rank,
                Value::VALUES_LEN
            );
        })
    }
}

/// One half of a [`Tile`]: the printed representation code and the value it stands for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Face {
    /// The representation code, for example `"A3"`.
    pub code: &'static str,
    /// The value the code stands for.
    pub value: Value,
}

/// Describes a domino tile with an identity and two [faces](Face).
///
/// A tile never changes. Which face points to which board end is decided by the
/// [slot](crate::Slot) it is placed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Tile {
    /// The identity of the tile in `1..=15`.
    pub id: u8,
    /// The face printed on the left.
    pub left: Face,
    /// The face printed on the right.
    pub right: Face,
}

const fn tile(id: u8, left: (&'static str, Value), right: (&'static str, Value)) -> Tile {
    Tile {
        id,
        left: Face {
            code: left.0,
            value: left.1,
        },
        right: Face {
            code: right.0,
            value: right.1,
        },
    }
}

/// # Returns
///
/// An array of all [`Tile`] variants in identity order. Doubles are `1`, `6`, `10`, `13`
/// and `15`.
#[inline]
pub fn tiles() -> [Tile; TILES_LEN] {
    use Value::{A, B, C, D, E};
    [
        tile(1, ("A1", A), ("A2", A)),
        tile(2, ("A3", A), ("B1", B)),
        tile(3, ("A4", A), ("C1", C)),
        tile(4, ("A5", A), ("D1", D)),
        tile(5, ("A6", A), ("E1", E)),
        tile(6, ("B2", B), ("B3", B)),
        tile(7, ("B4", B), ("C2", C)),
        tile(8, ("B5", B), ("D2", D)),
        tile(9, ("B6", B), ("E2", E)),
        tile(10, ("C3", C), ("C4", C)),
        tile(11, ("C5", C), ("D3", D)),
        tile(12, ("C6", C), ("E3", E)),
        tile(13, ("D4", D), ("D5", D)),
        tile(14, ("D6", D), ("E4", E)),
        tile(15, ("E5", E), ("E6", E)),
    ]
}

/// # Returns
///
/// The [tile](Tile) with the given identity or [None] when no tile has it.
pub fn tile_by_id(id: u8) -> Option<Tile> {
    tiles().into_iter().find(|tile| tile.id == id)
}

impl Tile {
    /// # Returns
    ///
    /// Whether both faces carry the same [value](Value).
    #[inline]
    pub fn is_double(&self) -> bool {
        self.left.value == self.right.value
    }

    /// # Returns
    ///
    /// Whether either face carries `end_value`, so the tile can be attached to a board end
    /// exposing that value.
    #[inline]
    pub fn can_play_on(&self, end_value: Value) -> bool {
        self.left.value == end_value || self.right.value == end_value
    }

    /// # Returns
    ///
    /// The rank of a double, or [None] when the tile is not a double.
    #[inline]
    pub fn double_rank(&self) -> Option<usize> {
        self.is_double().then(|| self.left.value.rank())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.left.value, self.right.value)
    }
}

/// # Returns
///
/// Among the doubles in `tiles`, the one with the highest ranked value, or [None] when
/// `tiles` holds no double. At most one double exists per value so there are no ties.
pub fn highest_double<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Option<&'a Tile> {
    tiles
        .into_iter()
        .filter(|tile| tile.is_double())
        .max_by_key(|tile| tile.left.value.rank())
}
