use rand::{SeedableRng, rngs::StdRng};

use crate::error::GenerationError;

/// Accepts loop probabilities in [0, 1]; NaN is rejected.
pub fn check_loop_probability(loop_probability: f64) -> Result<(), GenerationError> {
    if (0.0..=1.0).contains(&loop_probability) {
        Ok(())
    } else {
        Err(GenerationError::InvalidLoopProbability(loop_probability))
    }
}

/// Knobs for a generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Fraction of cycle-closing edges that get reopened after carving.
    /// `0.0` yields a perfect maze with exactly one route between any two tiles.
    pub loop_probability: f64,
    /// Seed for the random source. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            loop_probability: 0.25,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_loop_probability(mut self, loop_probability: f64) -> Self {
        self.loop_probability = loop_probability;
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        check_loop_probability(self.loop_probability)
    }

    /// Get a random number generator, seeded if the config carries a seed.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_validate_loop_probability() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::default().with_loop_probability(0.0).validate().is_ok());
        assert!(GeneratorConfig::default().with_loop_probability(1.0).validate().is_ok());
        assert!(GeneratorConfig::default().with_loop_probability(-0.1).validate().is_err());
        assert!(GeneratorConfig::default().with_loop_probability(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GeneratorConfig::default().with_seed(42);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
