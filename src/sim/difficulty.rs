//! Difficulty scaling for chain lengths
//!
//! Each chain draws one roll to pick a length bucket from the current tier's
//! odds, then (for two-value buckets) a second roll for the exact length.

use rand::Rng;

use crate::tuning::{TierOdds, Tuning};

/// Chain length bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainBucket {
    /// 4 or 5 stairs
    Long,
    /// 2 or 3 stairs
    Medium,
    /// 1 stair
    Single,
}

impl ChainBucket {
    /// Pick a bucket from a uniform roll in [0, 1)
    pub fn from_roll(odds: &TierOdds, roll: f64) -> Self {
        if roll < odds.long {
            ChainBucket::Long
        } else if roll < odds.long + odds.medium {
            ChainBucket::Medium
        } else {
            ChainBucket::Single
        }
    }

    /// Whether the exact length needs a second roll
    pub fn needs_pick(self) -> bool {
        !matches!(self, ChainBucket::Single)
    }

    /// Exact length from a uniform roll in [0, 1) (ignored for `Single`)
    pub fn length(self, pick: f64) -> u32 {
        let offset = ((pick * 2.0) as u32).min(1);
        match self {
            ChainBucket::Long => 4 + offset,
            ChainBucket::Medium => 2 + offset,
            ChainBucket::Single => 1,
        }
    }
}

/// Difficulty level derived from score
pub fn difficulty_level(score: u32, tuning: &Tuning) -> u32 {
    tuning.level_for_score(score)
}

/// Draw the length of the next stair chain at `score`
pub fn chain_length<R: Rng>(score: u32, tuning: &Tuning, rng: &mut R) -> u32 {
    let odds = tuning.tier_for_level(difficulty_level(score, tuning));
    let bucket = ChainBucket::from_roll(&odds, rng.random::<f64>());
    if bucket.needs_pick() {
        bucket.length(rng.random::<f64>())
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bucket_thresholds_level_zero() {
        let odds = Tuning::default().tier_for_level(0);
        assert_eq!(ChainBucket::from_roll(&odds, 0.0), ChainBucket::Long);
        assert_eq!(ChainBucket::from_roll(&odds, 0.69), ChainBucket::Long);
        assert_eq!(ChainBucket::from_roll(&odds, 0.7), ChainBucket::Medium);
        assert_eq!(ChainBucket::from_roll(&odds, 0.85), ChainBucket::Medium);
        assert_eq!(ChainBucket::from_roll(&odds, 0.95), ChainBucket::Single);
    }

    #[test]
    fn test_bucket_thresholds_top_tier() {
        let odds = Tuning::default().tier_for_level(12);
        assert_eq!(ChainBucket::from_roll(&odds, 0.05), ChainBucket::Long);
        assert_eq!(ChainBucket::from_roll(&odds, 0.2), ChainBucket::Medium);
        assert_eq!(ChainBucket::from_roll(&odds, 0.31), ChainBucket::Single);
    }

    #[test]
    fn test_bucket_lengths() {
        assert_eq!(ChainBucket::Long.length(0.0), 4);
        assert_eq!(ChainBucket::Long.length(0.49), 4);
        assert_eq!(ChainBucket::Long.length(0.5), 5);
        assert_eq!(ChainBucket::Long.length(0.999), 5);
        assert_eq!(ChainBucket::Medium.length(0.2), 2);
        assert_eq!(ChainBucket::Medium.length(0.7), 3);
        assert_eq!(ChainBucket::Single.length(0.9), 1);
        assert!(!ChainBucket::Single.needs_pick());
    }

    /// Empirical frequencies of (1, 2-3, 4-5) over many draws
    fn sample_buckets(score: u32, draws: usize) -> [f64; 3] {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(0xC1_1AB5 + score as u64);
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            match chain_length(score, &tuning, &mut rng) {
                1 => counts[0] += 1,
                2 | 3 => counts[1] += 1,
                4 | 5 => counts[2] += 1,
                other => panic!("chain length {} out of range", other),
            }
        }
        counts.map(|c| c as f64 / draws as f64)
    }

    #[test]
    fn test_distribution_matches_tiers() {
        // (score, single, medium, long)
        let cases = [
            (0, 0.1, 0.2, 0.7),
            (120, 0.2, 0.4, 0.4),
            (300, 0.5, 0.3, 0.2),
            (1000, 0.7, 0.2, 0.1),
        ];
        for (score, single, medium, long) in cases {
            let freq = sample_buckets(score, 20_000);
            assert!((freq[0] - single).abs() < 0.02, "score {}: single {}", score, freq[0]);
            assert!((freq[1] - medium).abs() < 0.02, "score {}: medium {}", score, freq[1]);
            assert!((freq[2] - long).abs() < 0.02, "score {}: long {}", score, freq[2]);
        }
    }

    #[test]
    fn test_both_lengths_in_bucket_appear() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..2_000 {
            seen[chain_length(0, &tuning, &mut rng) as usize] = true;
        }
        assert!(seen[1..=5].iter().all(|&s| s));
    }
}
