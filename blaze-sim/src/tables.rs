//! Categorical effect-size tables shared across scenarios.
//!
//! Each table maps a small enum to a numeric multiplier or range. Keeping
//! them in one place means a scenario never inlines its own copy of a
//! tier table.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Player or unit performance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Poor,
    #[default]
    Average,
    Good,
    Excellent,
}

impl PerformanceTier {
    /// Multiplicative adjustment applied to a baseline probability.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Poor => 0.6,
            Self::Average => 0.9,
            Self::Good => 1.0,
            Self::Excellent => 1.15,
        }
    }
}

/// Media-market size for NIL valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketSize {
    Small,
    #[default]
    Medium,
    Large,
    Mega,
}

impl MarketSize {
    /// Multiplier bounds as `(low, span)`; the sampled value is
    /// `low + rand * span`.
    #[must_use]
    pub const fn multiplier_range(self) -> (f64, f64) {
        match self {
            Self::Small => (0.75, 0.1),
            Self::Medium => (0.95, 0.1),
            Self::Large => (1.3, 0.2),
            Self::Mega => (1.8, 0.5),
        }
    }

    /// Draw a market multiplier within the tier's range.
    pub fn sample<R: Rng>(self, rng: &mut R) -> f64 {
        let (low, span) = self.multiplier_range();
        low + rng.r#gen::<f64>() * span
    }
}

/// Injury severity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InjurySeverity {
    Minor,
    #[default]
    Moderate,
    Severe,
}

impl InjurySeverity {
    /// Inclusive range of games missed.
    #[must_use]
    pub const fn games_missed_range(self) -> (u32, u32) {
        match self {
            Self::Minor => (1, 3),
            Self::Moderate => (4, 8),
            Self::Severe => (10, 20),
        }
    }

    /// Win-probability multiplier at full player importance.
    #[must_use]
    pub const fn win_multiplier(self) -> f64 {
        match self {
            Self::Minor => 0.95,
            Self::Moderate => 0.88,
            Self::Severe => 0.75,
        }
    }

    /// Draw a games-missed count within the severity range.
    pub fn sample_games_missed<R: Rng>(self, rng: &mut R) -> u32 {
        let (low, high) = self.games_missed_range();
        rng.gen_range(low..=high)
    }
}

/// Academic class year for youth-development projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassYear {
    Freshman,
    Sophomore,
    #[default]
    Junior,
    Senior,
}

impl ClassYear {
    /// Remaining-growth multiplier; underclassmen have more runway.
    #[must_use]
    pub const fn growth_multiplier(self) -> f64 {
        match self {
            Self::Freshman => 1.3,
            Self::Sophomore => 1.15,
            Self::Junior => 1.0,
            Self::Senior => 0.85,
        }
    }

    /// How close the class year is to college readiness.
    #[must_use]
    pub const fn readiness_factor(self) -> f64 {
        match self {
            Self::Freshman => 0.55,
            Self::Sophomore => 0.7,
            Self::Junior => 0.85,
            Self::Senior => 1.0,
        }
    }
}

/// Training program quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingQuality {
    Poor,
    #[default]
    Average,
    Good,
    Elite,
}

impl TrainingQuality {
    /// Multiplicative adjustment applied to a development score.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Poor => 0.7,
            Self::Average => 0.9,
            Self::Good => 1.05,
            Self::Elite => 1.2,
        }
    }
}

/// Sport for NIL valuation base tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Football,
    Basketball,
    Baseball,
}

/// Annual NIL base value in dollars for a sport/position pair.
///
/// Unknown positions fall back to a per-sport default.
#[must_use]
pub fn nil_base_value(sport: Sport, position: &str) -> f64 {
    let position = position.to_ascii_uppercase();
    match sport {
        Sport::Football => match position.as_str() {
            "QB" => 500_000.0,
            "WR" => 300_000.0,
            "RB" => 250_000.0,
            "DE" | "EDGE" => 200_000.0,
            "DB" | "CB" | "S" => 175_000.0,
            "TE" | "LB" => 150_000.0,
            "OL" | "OT" | "OG" => 100_000.0,
            _ => 75_000.0,
        },
        Sport::Basketball => match position.as_str() {
            "PG" => 350_000.0,
            "SF" => 320_000.0,
            "SG" => 300_000.0,
            "C" => 275_000.0,
            "PF" => 250_000.0,
            _ => 150_000.0,
        },
        Sport::Baseball => match position.as_str() {
            "SS" => 175_000.0,
            "P" | "SP" | "RP" => 150_000.0,
            "OF" | "CF" => 125_000.0,
            "C" => 100_000.0,
            _ => 60_000.0,
        },
    }
}

/// Social-media uplift score in [0, ~1.3]: log10 of the follower count
/// scaled so that ten million followers lands near 1.0.
#[must_use]
pub fn follower_score(followers: u64) -> f64 {
    let followers = followers.max(1) as f64;
    followers.log10() / 7.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn performance_tiers_match_reference_table() {
        assert!((PerformanceTier::Poor.multiplier() - 0.6).abs() < f64::EPSILON);
        assert!((PerformanceTier::Average.multiplier() - 0.9).abs() < f64::EPSILON);
        assert!((PerformanceTier::Good.multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((PerformanceTier::Excellent.multiplier() - 1.15).abs() < f64::EPSILON);
    }

    #[test]
    fn mega_market_samples_stay_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..500 {
            let m = MarketSize::Mega.sample(&mut rng);
            assert!((1.8..=2.3).contains(&m), "out of range: {m}");
        }
    }

    #[test]
    fn severity_games_missed_respect_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..200 {
            let g = InjurySeverity::Severe.sample_games_missed(&mut rng);
            assert!((10..=20).contains(&g));
        }
    }

    #[test]
    fn football_qb_base_value_is_half_a_million() {
        assert!((nil_base_value(Sport::Football, "QB") - 500_000.0).abs() < f64::EPSILON);
        assert!((nil_base_value(Sport::Football, "qb") - 500_000.0).abs() < f64::EPSILON);
        // Unknown position falls back to the sport default.
        assert!((nil_base_value(Sport::Football, "K") - 75_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn follower_score_grows_logarithmically() {
        assert!(follower_score(0) < 1e-9);
        let million = follower_score(1_000_000);
        assert!((million - 6.0 / 7.0).abs() < 1e-9);
        assert!(follower_score(10_000_000) > million);
    }

    #[test]
    fn categorical_enums_deserialize_lowercase() {
        let tier: PerformanceTier = serde_json::from_str("\"excellent\"").unwrap();
        assert_eq!(tier, PerformanceTier::Excellent);
        let market: MarketSize = serde_json::from_str("\"mega\"").unwrap();
        assert_eq!(market, MarketSize::Mega);
    }
}
