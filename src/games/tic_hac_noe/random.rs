//! Random source used to pick the opening player.

use super::Player;
use rand::Rng;
use tracing::instrument;

/// Uniform random values in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Picks the opening player: Player 1 when the draw is `<= 0.5`.
    #[instrument(skip(self))]
    fn choose_first_player(&mut self) -> Player {
        if self.next_unit() <= 0.5 {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        }
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    /// Thread-local generator, freshly seeded by the OS.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of values, cycling when it runs out.
///
/// For tests and reproducible demos.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    /// Creates a source that yields `values` in order, then repeats.
    ///
    /// An empty list behaves like a constant `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// A source that always opens with `player`.
    pub fn always(player: Player) -> Self {
        match player {
            Player::PlayerOne => Self::new([0.25]),
            Player::PlayerTwo => Self::new([0.75]),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let Some(&value) = self.values.get(self.next % self.values.len().max(1)) else {
            return 0.0;
        };
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_threshold_is_inclusive() {
        let mut source = ScriptedRandom::new([0.5, 0.5000001, 0.0]);
        assert_eq!(source.choose_first_player(), Player::PlayerOne);
        assert_eq!(source.choose_first_player(), Player::PlayerTwo);
        assert_eq!(source.choose_first_player(), Player::PlayerOne);
        assert_eq!(source.choose_first_player(), Player::PlayerOne);
    }

    #[test]
    fn test_empty_script_is_zero() {
        let mut source = ScriptedRandom::new(Vec::<f64>::new());
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_rng_source_in_unit_interval() {
        let mut source = RngSource(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let v = source.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_source_picks_both_players() {
        let mut source = RngSource(StdRng::seed_from_u64(11));
        let ones = (0..1000)
            .filter(|_| source.choose_first_player() == Player::PlayerOne)
            .count();
        assert!((350..650).contains(&ones), "got {ones} openings for Player 1");
    }
}
