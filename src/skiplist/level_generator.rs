use tracing::trace;

use crate::{
    config::{
        validate_p,
        SkipListConfig,
    },
    errs::SkipListError,
    random::RandomSource,
};

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The highest level this generator will ever produce.
    fn max_level(&self) -> usize;
    /// Generate a random level for a new node in the range `[0, max_level]`.
    ///
    /// This must never return a level that is `> self.max_level()`.
    fn random(&mut self) -> usize;
}

/// A level generator which will produce geometrically distributed numbers.
///
/// The probability of generating level `n` is `p` times the probability of
/// generating level `n-1`, with the probability truncated at the maximum level
/// allowed.
#[derive(Debug, Clone)]
pub struct GeometricalLevelGenerator<R: RandomSource> {
    max_level: usize,
    p: f64,
    source: R,
}

impl<R: RandomSource> GeometricalLevelGenerator<R> {
    /// Create a new GeometricalLevelGenerator drawing from `source`, with `p`
    /// as the probability that a given node is present in the next level.
    ///
    /// Fails if `p` is not in `(0, 1)` or if `max_level` is zero.
    pub fn new(source: R, p: f64, max_level: usize) -> Result<Self, SkipListError> {
        let config = SkipListConfig::new(p, max_level)?;
        Ok(Self::from_config(source, config))
    }

    pub fn from_config(source: R, config: SkipListConfig) -> Self {
        GeometricalLevelGenerator {
            max_level: config.max_level(),
            p: config.p(),
            source,
        }
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn source(&self) -> &R {
        &self.source
    }
}

impl<R: RandomSource> LevelGenerator for GeometricalLevelGenerator<R> {
    fn random(&mut self) -> usize {
        let level = random_level(&mut self.source, self.p, self.max_level);
        trace!(level, "sampled node height");
        level
    }

    fn max_level(&self) -> usize {
        self.max_level
    }
}

/// Counts the leading draws that are `<= p`, stopping at the first draw above
/// `p` or once `max_level` is reached. A draw outside `[0, 1)` counts as a
/// failed trial.
pub fn random_level<R: RandomSource>(mut source: R, p: f64, max_level: usize) -> usize {
    debug_assert!(validate_p(p).is_ok());
    let mut level = 0;
    while level < max_level {
        let draw = source.next_f64();
        if !(0.0..1.0).contains(&draw) || draw > p {
            break;
        }
        level += 1;
    }
    level
}

#[cfg(test)]
mod tests {
    use super::{
        random_level,
        GeometricalLevelGenerator,
        LevelGenerator,
    };
    use crate::{
        config::DEFAULT_MAX_LEVEL,
        errs::SkipListError,
        random::{
            RandomSource,
            RngSource,
            SequenceSource,
        },
    };

    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_random_level_sequences() {
        let cases: [(&str, f64, &[f64], usize); 4] = [
            ("with p=0.5, expect 2", 0.5, &[0.23, 0.36, 0.6][..], 2),
            ("with p=0.25, expect 0", 0.25, &[0.8, 0.2, 0.4][..], 0),
            ("with p=0.5, expect 5", 0.5, &[0.2, 0.4, 0.5, 0.3, 0.4, 0.7][..], 5),
            ("draw equal to p advances", 0.3, &[0.3, 0.9][..], 1),
        ];

        for (description, p, sequence, expected) in cases {
            let source = SequenceSource::new(sequence).unwrap();
            assert_eq!(
                random_level(source, p, DEFAULT_MAX_LEVEL),
                expected,
                "{}",
                description
            );
        }
    }

    #[test]
    fn test_random_level_is_capped() {
        let source = SequenceSource::new([0.1]).unwrap();
        assert_eq!(random_level(source, 0.5, 4), 4);
    }

    #[test]
    fn test_out_of_range_draw_stops() {
        assert_eq!(random_level(Constant(-0.5), 0.5, 16), 0);
        assert_eq!(random_level(Constant(f64::NAN), 0.5, 16), 0);
        assert_eq!(random_level(Constant(1.0), 0.99, 16), 0);
    }

    #[test]
    fn test_generator_consumes_source() {
        let source = SequenceSource::new([0.23, 0.36, 0.6, 0.9]).unwrap();
        let mut generator = GeometricalLevelGenerator::new(source, 0.5, DEFAULT_MAX_LEVEL).unwrap();
        assert_eq!(generator.random(), 2);
        assert_eq!(generator.source().draws(), 3);
        // 0.9 fails immediately.
        assert_eq!(generator.random(), 0);
        assert_eq!(generator.max_level(), DEFAULT_MAX_LEVEL);
    }

    #[test]
    fn invalid_max_level() {
        assert!(matches!(
            GeometricalLevelGenerator::new(RngSource::seeded(0), 0.5, 0),
            Err(SkipListError::InvalidMaxLevel)
        ));
    }

    #[test]
    fn invalid_p_0() {
        assert!(matches!(
            GeometricalLevelGenerator::new(RngSource::seeded(0), 0.0, 1),
            Err(SkipListError::InvalidProbability(_))
        ));
    }

    #[test]
    fn invalid_p_1() {
        assert!(matches!(
            GeometricalLevelGenerator::new(RngSource::seeded(0), 1.0, 1),
            Err(SkipListError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_never_exceeds_max_level() {
        let mut generator = GeometricalLevelGenerator::new(RngSource::seeded(3), 0.9, 5).unwrap();
        for _ in 0..10_000 {
            assert!(generator.random() <= 5);
        }
    }

    #[test]
    fn test_distribution_is_geometric() {
        const SAMPLES: usize = 100_000;
        let mut generator =
            GeometricalLevelGenerator::new(RngSource::seeded(11), 0.5, DEFAULT_MAX_LEVEL).unwrap();
        let mut counts = [0usize; 4];
        for _ in 0..SAMPLES {
            let level = generator.random();
            if level < counts.len() {
                counts[level] += 1;
            }
        }

        // P(level = k) = p^k (1 - p)
        let expected = [0.5, 0.25, 0.125, 0.0625];
        for (k, (count, want)) in counts.iter().zip(expected).enumerate() {
            let got = *count as f64 / SAMPLES as f64;
            assert!(
                (got - want).abs() < 0.01,
                "level {} frequency {} too far from {}",
                k,
                got,
                want
            );
        }
    }
}
