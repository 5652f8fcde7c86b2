//! Youth athlete development projection.
//!
//! Context-free scenario: one trial grows a baseline scouting rating by a
//! development score shaped by class year, training quality, and
//! competition level, then reports the projected rating on the 40–99
//! scale and a college-readiness percentage.

use super::jitter;
use crate::params::YouthDevelopmentParams;
use crate::report::IterationResult;
use crate::rng::RngBundle;

const RATING_FLOOR: f64 = 40.0;
const RATING_CEIL: f64 = 99.0;
// Base annual development before multipliers, in rating points.
const BASE_DEVELOPMENT_POINTS: f64 = 12.0;

/// Inputs resolved once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub params: YouthDevelopmentParams,
}

impl Inputs {
    #[must_use]
    pub fn resolve(mut params: YouthDevelopmentParams) -> Self {
        params.clamp_domains();
        Self { params }
    }
}

/// Run one trial.
#[must_use]
pub fn simulate(inputs: &Inputs, rng: &RngBundle) -> IterationResult {
    let mut noise = rng.noise();
    let p = &inputs.params;

    let mut development = BASE_DEVELOPMENT_POINTS;
    development *= p.class_year.growth_multiplier();
    development *= p.training_quality.multiplier();
    // Stronger competition accelerates development up to 20% either way.
    development *= 0.8 + p.competition_level * 0.4;
    development *= jitter(&mut *noise, 0.75, 0.5);

    let projected_rating = (p.baseline_rating + development).clamp(RATING_FLOOR, RATING_CEIL);
    let college_readiness = (projected_rating / RATING_CEIL * p.class_year.readiness_factor() * 100.0)
        .clamp(0.0, 100.0);

    let mut result = IterationResult::new();
    result.set("developmentScore", development);
    result.set("projectedRating", projected_rating);
    result.set("collegeReadiness", college_readiness);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{ClassYear, TrainingQuality};

    #[test]
    fn ratings_stay_on_scouting_scale() {
        let inputs = Inputs::resolve(YouthDevelopmentParams {
            baseline_rating: 95.0,
            training_quality: TrainingQuality::Elite,
            ..YouthDevelopmentParams::default()
        });
        let rng = RngBundle::from_user_seed(4);
        for _ in 0..1_000 {
            let result = simulate(&inputs, &rng);
            let r = result.get("projectedRating").unwrap().as_f64().unwrap();
            assert!((RATING_FLOOR..=RATING_CEIL).contains(&r));
        }
    }

    #[test]
    fn freshmen_develop_faster_than_seniors() {
        let rng = RngBundle::from_user_seed(6);
        let mean_dev = |year: ClassYear| {
            let inputs = Inputs::resolve(YouthDevelopmentParams {
                class_year: year,
                ..YouthDevelopmentParams::default()
            });
            (0..2_000)
                .map(|_| {
                    simulate(&inputs, &rng)
                        .get("developmentScore")
                        .unwrap()
                        .as_f64()
                        .unwrap()
                })
                .sum::<f64>()
                / 2_000.0
        };
        assert!(mean_dev(ClassYear::Freshman) > mean_dev(ClassYear::Senior));
    }

    #[test]
    fn seniors_read_closer_to_college_ready() {
        let rng = RngBundle::from_user_seed(13);
        let mean_readiness = |year: ClassYear| {
            let inputs = Inputs::resolve(YouthDevelopmentParams {
                class_year: year,
                ..YouthDevelopmentParams::default()
            });
            (0..2_000)
                .map(|_| {
                    simulate(&inputs, &rng)
                        .get("collegeReadiness")
                        .unwrap()
                        .as_f64()
                        .unwrap()
                })
                .sum::<f64>()
                / 2_000.0
        };
        // Seniors develop less but sit much closer to readiness.
        assert!(mean_readiness(ClassYear::Senior) > mean_readiness(ClassYear::Freshman));
    }

    #[test]
    fn readiness_is_a_percentage() {
        let inputs = Inputs::resolve(YouthDevelopmentParams::default());
        let rng = RngBundle::from_user_seed(9);
        for _ in 0..500 {
            let result = simulate(&inputs, &rng);
            let r = result.get("collegeReadiness").unwrap().as_f64().unwrap();
            assert!((0.0..=100.0).contains(&r));
        }
    }
}
