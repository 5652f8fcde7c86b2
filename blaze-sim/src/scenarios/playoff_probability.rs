//! Playoff probability projection from current form.
//!
//! One trial starts from the team's baseline playoff odds and nudges them
//! for the current win streak, rival form, and head-to-head record before
//! jittering and clamping to [1, 99] percent.

use super::jitter;
use crate::curves::{PLAYOFF_PCT_CEIL, PLAYOFF_PCT_FLOOR, championship_probability_pct};
use crate::params::PlayoffProbabilityParams;
use crate::report::IterationResult;
use crate::rng::RngBundle;
use crate::teams::Team;

// Percentage-point effect sizes per unit of each input.
const STREAK_PCT_PER_WIN: f64 = 1.2;
const RIVAL_PCT_SWING: f64 = 5.0;
const H2H_PCT_SWING: f64 = 8.0;

/// Inputs resolved once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub params: PlayoffProbabilityParams,
}

impl Inputs {
    #[must_use]
    pub fn resolve(mut params: PlayoffProbabilityParams) -> Self {
        params.clamp_domains();
        Self { params }
    }
}

/// Run one trial.
#[must_use]
pub fn simulate(team: &Team, inputs: &Inputs, rng: &RngBundle) -> IterationResult {
    let mut noise = rng.noise();
    let p = &inputs.params;

    let mut odds = team.base_metrics.playoff_odds;
    odds += p.win_streak as f64 * STREAK_PCT_PER_WIN;
    odds -= p.rival_performance * RIVAL_PCT_SWING;
    odds += (p.h2h_record - 0.5) * H2H_PCT_SWING;
    odds *= jitter(&mut *noise, 0.85, 0.3);

    let playoff_pct = odds.clamp(PLAYOFF_PCT_FLOOR, PLAYOFF_PCT_CEIL);
    let championship_pct = championship_probability_pct(playoff_pct, team.league);
    // Rough seeding projection: 1 (locked in) through 10 (outside looking in).
    let projected_seed = (10.0 - playoff_pct / 11.0).floor().max(1.0);

    let mut result = IterationResult::new();
    result.set("playoffProbability", playoff_pct);
    result.set("championshipProbability", championship_pct);
    result.set("projectedSeed", projected_seed);
    result
}
