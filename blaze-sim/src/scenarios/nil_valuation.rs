//! NIL (name, image, likeness) valuation projection.
//!
//! Context-free scenario: one trial multiplies a sport/position base value
//! by performance tier, a logarithmic social-media uplift, and a sampled
//! market multiplier, then clamps to the $5,000–$3,000,000 demo range.

use super::jitter;
use crate::curves::{NIL_VALUE_CEIL, NIL_VALUE_FLOOR};
use crate::params::NilValuationParams;
use crate::report::IterationResult;
use crate::rng::RngBundle;
use crate::tables::{follower_score, nil_base_value};

// Scale of the social-media uplift term; one million followers roughly
// adds 69% to the valuation.
const SOCIAL_UPLIFT_WEIGHT: f64 = 0.8;

/// Inputs resolved once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub params: NilValuationParams,
    pub base_value: f64,
    pub social_score: f64,
}

impl Inputs {
    #[must_use]
    pub fn resolve(params: NilValuationParams) -> Self {
        let base_value = nil_base_value(params.sport, &params.position);
        let social_score = follower_score(params.social_media_followers);
        Self {
            params,
            base_value,
            social_score,
        }
    }
}

/// Run one trial.
#[must_use]
pub fn simulate(inputs: &Inputs, rng: &RngBundle) -> IterationResult {
    let mut noise = rng.noise();

    let mut value = inputs.base_value;
    value *= inputs.params.performance.multiplier();
    value *= 1.0 + inputs.social_score * SOCIAL_UPLIFT_WEIGHT;
    let market_multiplier = inputs.params.market_size.sample(&mut *noise);
    value *= market_multiplier;
    value *= jitter(&mut *noise, 0.85, 0.3);

    let nil_value = value.clamp(NIL_VALUE_FLOOR, NIL_VALUE_CEIL);

    let mut result = IterationResult::new();
    result.set("nilValue", nil_value);
    result.set("marketMultiplier", market_multiplier);
    result.set("socialMediaScore", inputs.social_score);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{MarketSize, Sport};

    #[test]
    fn values_stay_in_dollar_domain() {
        let inputs = Inputs::resolve(NilValuationParams::default());
        let rng = RngBundle::from_user_seed(8);
        for _ in 0..2_000 {
            let result = simulate(&inputs, &rng);
            let v = result.get("nilValue").unwrap().as_f64().unwrap();
            assert!((NIL_VALUE_FLOOR..=NIL_VALUE_CEIL).contains(&v));
        }
    }

    #[test]
    fn mega_market_qb_beats_base_value() {
        let inputs = Inputs::resolve(NilValuationParams {
            sport: Sport::Football,
            position: "QB".to_string(),
            social_media_followers: 1_000_000,
            market_size: MarketSize::Mega,
            ..NilValuationParams::default()
        });
        let rng = RngBundle::from_user_seed(14);
        let mean = (0..3_000)
            .map(|_| simulate(&inputs, &rng).get("nilValue").unwrap().as_f64().unwrap())
            .sum::<f64>()
            / 3_000.0;
        assert!(
            mean > 500_000.0 * 1.5,
            "mega-market QB mean too low: {mean}"
        );
    }

    #[test]
    fn small_market_discounts_value() {
        let rng = RngBundle::from_user_seed(2);
        let small = Inputs::resolve(NilValuationParams {
            market_size: MarketSize::Small,
            ..NilValuationParams::default()
        });
        let large = Inputs::resolve(NilValuationParams {
            market_size: MarketSize::Large,
            ..NilValuationParams::default()
        });
        let mean = |inputs: &Inputs| {
            (0..2_000)
                .map(|_| simulate(inputs, &rng).get("nilValue").unwrap().as_f64().unwrap())
                .sum::<f64>()
                / 2_000.0
        };
        assert!(mean(&small) < mean(&large));
    }
}
