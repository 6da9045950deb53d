use crate::{tiles, Level, Tile, Value, PLAYER_CAPACITY};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// A random, small, non-zero number of human players which leaves a seat for the computer.
pub fn random_humans_len<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(1..PLAYER_CAPACITY.max(2))
}

/// `humans` distinct names. Some of them are blank and become `Player N` once seated.
pub fn random_names<R: Rng + ?Sized>(rng: &mut R, humans: usize) -> Vec<String> {
    const NAMES: [&str; 6] = ["Ann", "Bob", "Cy", "Dee", "Eve", "Fay"];
    (0..humans)
        .map(|index| {
            if rng.gen_bool(0.2) {
                " ".repeat(index)
            } else {
                format!("{}{}", NAMES.choose(rng).copied().unwrap_or("Ann"), index)
            }
        })
        .collect()
}

/// A random [level](Level).
pub fn random_level<R: Rng + ?Sized>(rng: &mut R) -> Level {
    [Level::Classic, Level::Circle, Level::Triangle, Level::Star]
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

/// A random [tile](Tile) with `value` on one of its faces.
pub fn random_tile_with<R: Rng + ?Sized>(rng: &mut R, value: Value) -> Tile {
    let candidates = tiles()
        .into_iter()
        .filter(|tile| tile.can_play_on(value))
        .collect::<Vec<_>>()
        .tap_mut(|candidates| candidates.shuffle(rng));
    candidates[0]
}

/// A random [tile](Tile) with `value` on neither face.
pub fn random_tile_without<R: Rng + ?Sized>(rng: &mut R, value: Value) -> Tile {
    let candidates = tiles()
        .into_iter()
        .filter(|tile| !tile.can_play_on(value))
        .collect::<Vec<_>>()
        .tap_mut(|candidates| candidates.shuffle(rng));
    candidates[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn random_humans_len_leaves_a_seat() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let humans = random_humans_len(&mut rng);
            assert!(humans >= 1);
            assert!(humans < PLAYER_CAPACITY || PLAYER_CAPACITY == 1);
        }
    }

    #[test]
    fn random_names_are_distinct() {
        let names = random_names(&mut rand::thread_rng(), PLAYER_CAPACITY);

        assert_eq!(PLAYER_CAPACITY, names.len());
        assert_eq!(0, names.iter().duplicates().count());
    }

    #[test]
    fn random_tiles_match_value() {
        let mut rng = rand::thread_rng();
        let value = rng.gen::<Value>();

        assert!(random_tile_with(&mut rng, value).can_play_on(value));
        assert!(!random_tile_without(&mut rng, value).can_play_on(value));
    }

    #[test]
    fn random_level_is_any_level() {
        let mut rng = rand::thread_rng();

        let levels = (0..200).map(|_| random_level(&mut rng)).unique().count();

        assert_eq!(4, levels);
    }
}
