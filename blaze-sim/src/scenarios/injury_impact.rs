//! Impact of a key-player injury on a stretch of games.
//!
//! One trial samples (or takes) a games-missed count, discounts the
//! team's win probability by severity scaled by player importance, plays
//! the affected games as Bernoulli trials, and maps the win fraction
//! through the league playoff curve.

use super::{jitter, simulate_game_series};
use crate::curves::{
    WIN_PROB_CEIL, WIN_PROB_FLOOR, championship_probability_pct, playoff_probability_pct,
};
use crate::params::InjuryImpactParams;
use crate::report::IterationResult;
use crate::rng::RngBundle;
use crate::teams::Team;

/// Inputs resolved once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub params: InjuryImpactParams,
    /// Fixed games-missed override; when absent each iteration samples
    /// from the severity range.
    pub affected_games: Option<u32>,
}

impl Inputs {
    #[must_use]
    pub fn resolve(mut params: InjuryImpactParams, team: &Team) -> Self {
        params.clamp_domains();
        let affected_games = params
            .affected_games
            .map(|g| g.clamp(1, team.season_structure.total_games));
        Self {
            params,
            affected_games,
        }
    }
}

/// Run one trial.
#[must_use]
pub fn simulate(team: &Team, inputs: &Inputs, rng: &RngBundle) -> IterationResult {
    let mut noise = rng.noise();
    let mut games = rng.games();
    let p = &inputs.params;

    let games_missed = inputs
        .affected_games
        .unwrap_or_else(|| p.severity.sample_games_missed(&mut *games));

    // Interpolate between no effect and the full severity haircut by
    // player importance.
    let impact = 1.0 - (1.0 - p.severity.win_multiplier()) * p.player_importance;
    let mut win_prob = team.base_metrics.win_probability * impact;
    win_prob *= jitter(&mut *noise, 0.9, 0.2);
    let adjusted_win_prob = win_prob.clamp(WIN_PROB_FLOOR, WIN_PROB_CEIL);

    let wins = simulate_game_series(&mut *games, games_missed, adjusted_win_prob);
    let win_fraction = f64::from(wins) / f64::from(games_missed);
    let playoff_pct = playoff_probability_pct(win_fraction, team.league);
    let championship_pct = championship_probability_pct(playoff_pct, team.league);

    let mut result = IterationResult::new();
    result.set("gamesMissed", f64::from(games_missed));
    result.set("wins", f64::from(wins));
    result.set("winPercentage", win_fraction);
    result.set("adjustedWinProb", adjusted_win_prob);
    result.set("playoffProbability", playoff_pct);
    result.set("championshipProbability", championship_pct);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::InjurySeverity;

    #[test]
    fn adjusted_win_prob_stays_in_domain() {
        let team = crate::teams::catalog().team("grizzlies").unwrap();
        let inputs = Inputs::resolve(InjuryImpactParams::default(), team);
        let rng = RngBundle::from_user_seed(12);
        for _ in 0..1_500 {
            let result = simulate(team, &inputs, &rng);
            let p = result.get("adjustedWinProb").unwrap().as_f64().unwrap();
            assert!((WIN_PROB_FLOOR..=WIN_PROB_CEIL).contains(&p));
        }
    }

    #[test]
    fn severe_injury_hurts_more_than_minor() {
        let team = crate::teams::catalog().team("cardinals").unwrap();
        let rng = RngBundle::from_user_seed(18);
        let mean_prob = |severity: InjurySeverity| {
            let inputs = Inputs::resolve(
                InjuryImpactParams {
                    severity,
                    player_importance: 1.0,
                    affected_games: Some(10),
                },
                team,
            );
            (0..3_000)
                .map(|_| {
                    simulate(team, &inputs, &rng)
                        .get("adjustedWinProb")
                        .unwrap()
                        .as_f64()
                        .unwrap()
                })
                .sum::<f64>()
                / 3_000.0
        };
        assert!(mean_prob(InjurySeverity::Severe) < mean_prob(InjurySeverity::Minor));
    }

    #[test]
    fn sampled_games_missed_respect_severity_range() {
        let team = crate::teams::catalog().team("titans").unwrap();
        let inputs = Inputs::resolve(
            InjuryImpactParams {
                severity: InjurySeverity::Moderate,
                ..InjuryImpactParams::default()
            },
            team,
        );
        let rng = RngBundle::from_user_seed(25);
        for _ in 0..500 {
            let result = simulate(team, &inputs, &rng);
            let g = result.get("gamesMissed").unwrap().as_f64().unwrap();
            assert!((4.0..=8.0).contains(&g));
        }
    }
}
