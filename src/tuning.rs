//! Data-driven game balance
//!
//! Everything that shapes difficulty lives here so it can be tweaked from a
//! JSON file without touching the simulation. `Tuning::default()` is the
//! shipped balance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Odds for one difficulty tier.
///
/// `long` is the chance of a 4-5 stair chain, `medium` of a 2-3 stair chain.
/// The remainder is a single stair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierOdds {
    /// First difficulty level this tier applies to
    pub min_level: u32,
    pub long: f64,
    pub medium: f64,
}

impl TierOdds {
    pub const fn new(min_level: u32, long: f64, medium: f64) -> Self {
        Self {
            min_level,
            long,
            medium,
        }
    }

    /// Chance of a single-stair chain
    pub fn single(&self) -> f64 {
        (1.0 - self.long - self.medium).max(0.0)
    }
}

/// Shipped tier table: chains get shorter as the level climbs
pub const DEFAULT_TIERS: [TierOdds; 4] = [
    TierOdds::new(0, 0.7, 0.2),
    TierOdds::new(1, 0.4, 0.4),
    TierOdds::new(4, 0.2, 0.3),
    TierOdds::new(10, 0.1, 0.2),
];

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tier table is empty")]
    EmptyTiers,
    #[error("first tier must start at level 0")]
    FirstTierNotZero,
    #[error("tier {index} does not start above the previous tier")]
    TiersOutOfOrder { index: usize },
    #[error("tier {index} odds must be within [0, 1] and sum to at most 1")]
    InvalidOdds { index: usize },
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Max horizontal miss between a stair center and the expected landing point
    pub reach_x: f32,
    /// Max vertical miss between a stair top and the expected landing height
    pub reach_y: f32,
    /// Chains laid when a run starts
    pub initial_chains: u32,
    /// Chains appended per extension
    pub extension_chains: u32,
    /// Extend the track after every this-many successful climbs
    pub extend_every: u32,
    /// Score needed per difficulty level
    pub score_per_level: u32,
    /// Tier table, ascending by `min_level`, first at level 0
    pub tiers: Vec<TierOdds>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            reach_x: 150.0,
            reach_y: 80.0,
            initial_chains: 100,
            extension_chains: 6,
            extend_every: 10,
            score_per_level: 50,
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.reach_x <= 0.0 {
            return Err(TuningError::NonPositive { field: "reach_x" });
        }
        if self.reach_y <= 0.0 {
            return Err(TuningError::NonPositive { field: "reach_y" });
        }
        if self.initial_chains == 0 {
            return Err(TuningError::NonPositive {
                field: "initial_chains",
            });
        }
        if self.extension_chains == 0 {
            return Err(TuningError::NonPositive {
                field: "extension_chains",
            });
        }
        if self.extend_every == 0 {
            return Err(TuningError::NonPositive {
                field: "extend_every",
            });
        }
        if self.score_per_level == 0 {
            return Err(TuningError::NonPositive {
                field: "score_per_level",
            });
        }

        let first = self.tiers.first().ok_or(TuningError::EmptyTiers)?;
        if first.min_level != 0 {
            return Err(TuningError::FirstTierNotZero);
        }
        for (index, tier) in self.tiers.iter().enumerate() {
            let in_range = (0.0..=1.0).contains(&tier.long) && (0.0..=1.0).contains(&tier.medium);
            // Small slack so 0.7 + 0.2 style tables pass
            if !in_range || tier.long + tier.medium > 1.0 + 1e-9 {
                return Err(TuningError::InvalidOdds { index });
            }
            if index > 0 && tier.min_level <= self.tiers[index - 1].min_level {
                return Err(TuningError::TiersOutOfOrder { index });
            }
        }
        Ok(())
    }

    /// Difficulty level for a score
    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.score_per_level.max(1)
    }

    /// Tier governing a difficulty level (last tier whose `min_level` is reached)
    pub fn tier_for_level(&self, level: u32) -> TierOdds {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_level <= level)
            .or_else(|| self.tiers.first())
            .copied()
            .unwrap_or(DEFAULT_TIERS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.reach_x, 150.0);
        assert_eq!(tuning.reach_y, 80.0);
    }

    #[test]
    fn test_tier_lookup_boundaries() {
        let tuning = Tuning::default();
        assert_eq!(tuning.tier_for_level(0).long, 0.7);
        assert_eq!(tuning.tier_for_level(1).long, 0.4);
        assert_eq!(tuning.tier_for_level(3).long, 0.4);
        assert_eq!(tuning.tier_for_level(4).long, 0.2);
        assert_eq!(tuning.tier_for_level(9).long, 0.2);
        assert_eq!(tuning.tier_for_level(10).long, 0.1);
        assert_eq!(tuning.tier_for_level(500).long, 0.1);

        assert_eq!(tuning.level_for_score(49), 0);
        assert_eq!(tuning.level_for_score(50), 1);
        assert_eq!(tuning.level_for_score(499), 9);
        assert_eq!(tuning.level_for_score(500), 10);
    }

    #[test]
    fn test_single_odds() {
        assert!((DEFAULT_TIERS[0].single() - 0.1).abs() < 1e-9);
        assert!((DEFAULT_TIERS[3].single() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "extension_chains": 8 }"#).unwrap();
        assert_eq!(tuning.extension_chains, 8);
        assert_eq!(tuning.initial_chains, 100);
        assert_eq!(tuning.tiers.len(), 4);
    }

    #[test]
    fn test_rejects_bad_tables() {
        let err = Tuning::from_json(r#"{ "tiers": [] }"#).unwrap_err();
        assert!(matches!(err, TuningError::EmptyTiers));

        let err =
            Tuning::from_json(r#"{ "tiers": [{ "min_level": 2, "long": 0.5, "medium": 0.5 }] }"#)
                .unwrap_err();
        assert!(matches!(err, TuningError::FirstTierNotZero));

        let err = Tuning::from_json(
            r#"{ "tiers": [
                { "min_level": 0, "long": 0.5, "medium": 0.2 },
                { "min_level": 0, "long": 0.5, "medium": 0.2 }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TuningError::TiersOutOfOrder { index: 1 }));

        let err =
            Tuning::from_json(r#"{ "tiers": [{ "min_level": 0, "long": 0.8, "medium": 0.3 }] }"#)
                .unwrap_err();
        assert!(matches!(err, TuningError::InvalidOdds { index: 0 }));

        let err = Tuning::from_json(r#"{ "reach_x": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NonPositive { field: "reach_x" }));

        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }
}
