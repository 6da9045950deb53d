use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of round started by [start_game](crate::Game::start_game).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// The full domino game.
    Classic,
    /// Find the double among `2` tiles.
    #[default]
    Circle,
    /// Find the double among `3` tiles.
    Triangle,
    /// Find the double among `4` tiles.
    Star,
}

impl Level {
    /// # Returns
    ///
    /// The number of [tiles](crate::Tile) in each hand of the find-the-double round, or [None]
    /// for the classic game.
    #[inline]
    pub fn find_double_hand_len(self) -> Option<usize> {
        match self {
            Level::Classic => None,
            Level::Circle => Some(2),
            Level::Triangle => Some(3),
            Level::Star => Some(4),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Classic => "classic",
            Level::Circle => "circle",
            Level::Triangle => "triangle",
            Level::Star => "star",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_lens() {
        assert_eq!(None, Level::Classic.find_double_hand_len());
        assert_eq!(Some(2), Level::Circle.find_double_hand_len());
        assert_eq!(Some(3), Level::Triangle.find_double_hand_len());
        assert_eq!(Some(4), Level::Star.find_double_hand_len());
    }

    #[test]
    fn default_is_circle() {
        assert_eq!(Level::Circle, Level::default());
    }

    #[test]
    fn lowercase_json() {
        assert_eq!(r#""star""#, serde_json::to_string(&Level::Star).expect("serializes"));
        assert_eq!(
            Level::Triangle,
            serde_json::from_str::<Level>(r#""triangle""#).expect("deserializes")
        );
    }
}
