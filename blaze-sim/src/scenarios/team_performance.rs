//! Rest-of-season team performance projection.
//!
//! One trial adjusts the team's baseline win probability by performance
//! tier, chemistry, schedule strength, and a Bernoulli injury shock,
//! jitters it, clamps to [0.1, 0.9], then plays out the remaining games
//! as independent Bernoulli trials and maps the resulting win fraction
//! through the league playoff curve.

use rand::Rng;
use serde_json::Value;

use super::{jitter, remaining_games_estimate, simulate_game_series};
use crate::curves::{
    WIN_PROB_CEIL, WIN_PROB_FLOOR, championship_probability_pct, playoff_probability_pct,
};
use crate::params::TeamPerformanceParams;
use crate::report::IterationResult;
use crate::rng::RngBundle;
use crate::teams::Team;

// Win-probability haircut applied when the injury shock fires.
const INJURY_SHOCK_MULT: f64 = 0.85;

/// Inputs resolved once per run, shared by every iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub params: TeamPerformanceParams,
    pub remaining_games: u32,
    pub injury_risk: f64,
}

impl Inputs {
    /// Fill implied defaults from the team and calendar month.
    #[must_use]
    pub fn resolve(mut params: TeamPerformanceParams, team: &Team, month: u32) -> Self {
        params.clamp_domains();
        let remaining_games = params
            .remaining_games
            .unwrap_or_else(|| remaining_games_estimate(team, month))
            .clamp(1, team.season_structure.total_games);
        let injury_risk = params
            .injury_risk
            .unwrap_or(team.base_metrics.injury_risk);
        Self {
            params,
            remaining_games,
            injury_risk,
        }
    }
}

/// Run one trial.
#[must_use]
pub fn simulate(team: &Team, inputs: &Inputs, rng: &RngBundle) -> IterationResult {
    let mut noise = rng.noise();
    let mut games = rng.games();

    let mut win_prob = team.base_metrics.win_probability;
    win_prob *= inputs.params.player_performance.multiplier();
    // Chemistry 0..1 maps to a 0.9..1.1 multiplier around neutral.
    win_prob *= 0.9 + inputs.params.team_chemistry * 0.2;
    win_prob -= inputs.params.sos_adjustment;

    let injury_occurred = games.r#gen::<f64>() < inputs.injury_risk;
    if injury_occurred {
        win_prob *= INJURY_SHOCK_MULT;
    }

    win_prob *= jitter(&mut *noise, 0.8, 0.4);
    let final_win_prob = win_prob.clamp(WIN_PROB_FLOOR, WIN_PROB_CEIL);

    let wins = simulate_game_series(&mut *games, inputs.remaining_games, final_win_prob);
    let win_fraction = f64::from(wins) / f64::from(inputs.remaining_games);
    let playoff_pct = playoff_probability_pct(win_fraction, team.league);
    let championship_pct = championship_probability_pct(playoff_pct, team.league);

    let mut result = IterationResult::new();
    result.set("wins", f64::from(wins));
    result.set("winPercentage", win_fraction);
    result.set("finalWinProb", final_win_prob);
    result.set("playoffProbability", playoff_pct);
    result.set("championshipProbability", championship_pct);
    result.set_value("injuryOccurred", Value::Bool(injury_occurred));
    result
}
