//! Effect of a roster trade on the rest of the season.
//!
//! One trial shifts the team's baseline win probability by the quality
//! delta (weighted by how badly the position was needed) and the
//! chemistry impact, jitters and clamps it, then plays the remaining
//! games as Bernoulli trials.

use super::{jitter, remaining_games_estimate, simulate_game_series};
use crate::curves::{
    WIN_PROB_CEIL, WIN_PROB_FLOOR, championship_probability_pct, playoff_probability_pct,
};
use crate::params::TradeEffectsParams;
use crate::report::IterationResult;
use crate::rng::RngBundle;
use crate::teams::Team;

// Win-probability points gained per unit of quality delta at full
// position need.
const QUALITY_WIN_WEIGHT: f64 = 0.12;
const CHEMISTRY_WIN_WEIGHT: f64 = 0.1;
// Net rating points per unit of each input.
const QUALITY_RATING_WEIGHT: f64 = 10.0;
const CHEMISTRY_RATING_WEIGHT: f64 = 5.0;

/// Inputs resolved once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub params: TradeEffectsParams,
    pub remaining_games: u32,
}

impl Inputs {
    /// Fill implied defaults from the team and calendar month.
    #[must_use]
    pub fn resolve(mut params: TradeEffectsParams, team: &Team, month: u32) -> Self {
        params.clamp_domains();
        let remaining_games = params
            .remaining_games
            .unwrap_or_else(|| remaining_games_estimate(team, month))
            .clamp(1, team.season_structure.total_games);
        Self {
            params,
            remaining_games,
        }
    }
}

/// Run one trial.
#[must_use]
pub fn simulate(team: &Team, inputs: &Inputs, rng: &RngBundle) -> IterationResult {
    let mut noise = rng.noise();
    let mut games = rng.games();
    let p = &inputs.params;

    let quality_boost = p.player_quality_delta * QUALITY_WIN_WEIGHT * (0.5 + p.position_need);
    let chemistry_shift = p.chemistry_impact * CHEMISTRY_WIN_WEIGHT;

    let mut win_prob = team.base_metrics.win_probability + quality_boost + chemistry_shift;
    win_prob *= jitter(&mut *noise, 0.9, 0.2);
    let new_win_prob = win_prob.clamp(WIN_PROB_FLOOR, WIN_PROB_CEIL);

    let wins = simulate_game_series(&mut *games, inputs.remaining_games, new_win_prob);
    let win_fraction = f64::from(wins) / f64::from(inputs.remaining_games);
    let playoff_pct = playoff_probability_pct(win_fraction, team.league);
    let championship_pct = championship_probability_pct(playoff_pct, team.league);

    let net_rating_change = p.player_quality_delta * QUALITY_RATING_WEIGHT
        + p.chemistry_impact * CHEMISTRY_RATING_WEIGHT
        + jitter(&mut *noise, -0.5, 1.0);

    let mut result = IterationResult::new();
    result.set("newWinProb", new_win_prob);
    result.set("wins", f64::from(wins));
    result.set("winPercentage", win_fraction);
    result.set("playoffProbability", playoff_pct);
    result.set("championshipProbability", championship_pct);
    result.set("netRatingChange", net_rating_change);
    result
}
