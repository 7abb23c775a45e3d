use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

const STRENGTH_DIVISOR: f64 = 5.0;
const GOALS_OFFSET: f64 = 1.5;
const NOISE_STDDEV: f64 = 0.5;
pub const MAX_GOALS: u8 = 5;

/// Scoreline generator. The only source of randomness in the league.
#[derive(Debug, Clone)]
pub struct MatchSimulator<R = ChaCha8Rng> {
    rng: R,
}

impl MatchSimulator<ChaCha8Rng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> MatchSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns `(home_goals, away_goals)`.
    pub fn simulate(&mut self, home_strength: u8, away_strength: u8) -> (u8, u8) {
        let home = self.random_goals(home_strength);
        let away = self.random_goals(away_strength);
        (home, away)
    }

    fn random_goals(&mut self, strength: u8) -> u8 {
        let z: f64 = self.rng.sample(StandardNormal);
        goals_from_noise(strength, z * NOISE_STDDEV)
    }
}

/// `round(strength / 5 + noise + 1.5)` clamped to `0..=MAX_GOALS`.
pub fn goals_from_noise(strength: u8, noise: f64) -> u8 {
    let raw = (strength as f64 / STRENGTH_DIVISOR + noise + GOALS_OFFSET).round();
    raw.clamp(0.0, MAX_GOALS as f64) as u8
}
