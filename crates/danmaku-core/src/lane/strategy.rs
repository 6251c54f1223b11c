use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How the next comment's lane is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneStrategy {
    /// Round-robin over lanes 0..max_lanes
    #[default]
    Sequential,
    /// Uniformly random lane on every call, repeats allowed
    Random,
}

impl std::str::FromStr for LaneStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "random" | "rand" => Ok(Self::Random),
            other => Err(format!(
                "unknown lane strategy '{}', expected 'sequential' or 'random'",
                other
            )),
        }
    }
}

impl std::fmt::Display for LaneStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// Stateful lane picker for one player
#[derive(Debug)]
pub struct LaneSelector {
    strategy: LaneStrategy,
    max_lanes: usize,
    next_line: usize,
    rng: StdRng,
}

impl LaneSelector {
    /// `max_lanes` must be at least 1; the player validates this first
    pub fn new(strategy: LaneStrategy, max_lanes: usize) -> Self {
        Self::with_rng(strategy, max_lanes, StdRng::from_os_rng())
    }

    /// Selector with a fixed seed, for reproducible random sequences
    pub fn seeded(strategy: LaneStrategy, max_lanes: usize, seed: u64) -> Self {
        Self::with_rng(strategy, max_lanes, StdRng::seed_from_u64(seed))
    }

    fn with_rng(strategy: LaneStrategy, max_lanes: usize, rng: StdRng) -> Self {
        Self {
            strategy,
            max_lanes: max_lanes.max(1),
            next_line: 0,
            rng,
        }
    }

    /// Pick the lane for the next comment
    pub fn next_lane(&mut self) -> usize {
        match self.strategy {
            LaneStrategy::Sequential => {
                let line = self.next_line;
                self.next_line = (self.next_line + 1) % self.max_lanes;
                line
            }
            LaneStrategy::Random => self.rng.random_range(0..self.max_lanes),
        }
    }

    #[inline]
    pub fn strategy(&self) -> LaneStrategy {
        self.strategy
    }

    /// Lane the sequential policy hands out next
    #[inline]
    pub fn next_line(&self) -> usize {
        self.next_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_name_parses_back() {
        for strategy in [LaneStrategy::Sequential, LaneStrategy::Random] {
            assert_eq!(strategy.to_string().parse::<LaneStrategy>(), Ok(strategy));
        }
        assert_eq!("RAND".parse::<LaneStrategy>(), Ok(LaneStrategy::Random));
        assert!("zigzag".parse::<LaneStrategy>().is_err());
    }

    #[test]
    fn test_sequential_round_robin() {
        let mut selector = LaneSelector::new(LaneStrategy::Sequential, 3);
        let lanes: Vec<usize> = (0..5).map(|_| selector.next_lane()).collect();
        assert_eq!(lanes, vec![0, 1, 2, 0, 1]);
        assert_eq!(selector.next_line(), 2);
    }

    #[test]
    fn test_single_lane_always_zero() {
        for strategy in [LaneStrategy::Sequential, LaneStrategy::Random] {
            let mut selector = LaneSelector::seeded(strategy, 1, 3);
            assert!((0..20).all(|_| selector.next_lane() == 0));
        }
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut selector = LaneSelector::seeded(LaneStrategy::Random, 4, 42);
        for _ in 0..1000 {
            assert!(selector.next_lane() < 4);
        }
    }

    #[test]
    fn test_random_is_roughly_uniform() {
        const LANES: usize = 5;
        const SAMPLES: usize = 50_000;
        let mut selector = LaneSelector::seeded(LaneStrategy::Random, LANES, 7);
        let mut counts = [0usize; LANES];
        for _ in 0..SAMPLES {
            counts[selector.next_lane()] += 1;
        }
        let expected = SAMPLES / LANES;
        for (lane, count) in counts.iter().enumerate() {
            let deviation = (*count as f64 - expected as f64).abs() / expected as f64;
            assert!(deviation < 0.05, "lane {} got {} picks", lane, count);
        }
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("Sequential".parse::<LaneStrategy>(), Ok(LaneStrategy::Sequential));
        assert_eq!("random".parse::<LaneStrategy>(), Ok(LaneStrategy::Random));
        assert!("zigzag".parse::<LaneStrategy>().is_err());
    }
}
