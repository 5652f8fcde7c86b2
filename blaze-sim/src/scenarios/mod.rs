//! The six scenario iteration functions.
//!
//! Each scenario is a pure function of its resolved inputs plus draws from
//! the shared [`RngBundle`](crate::rng::RngBundle): start from a baseline,
//! apply categorical multipliers, inject uniform noise or Bernoulli
//! trials, and clamp into the documented domain.

use rand::Rng;

use crate::teams::{League, Team};

pub mod injury_impact;
pub mod nil_valuation;
pub mod playoff_probability;
pub mod team_performance;
pub mod trade_effects;
pub mod youth_development;

/// Named scenario category backed by one iteration function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    TeamPerformance,
    PlayoffProbability,
    NilValuation,
    YouthDevelopment,
    InjuryImpact,
    TradeEffects,
}

impl ScenarioKind {
    pub const ALL: [Self; 6] = [
        Self::TeamPerformance,
        Self::PlayoffProbability,
        Self::NilValuation,
        Self::YouthDevelopment,
        Self::InjuryImpact,
        Self::TradeEffects,
    ];

    /// Resolve a scenario name by exact string match.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "team-performance" => Some(Self::TeamPerformance),
            "playoff-probability" => Some(Self::PlayoffProbability),
            "nil-valuation" => Some(Self::NilValuation),
            "youth-development" => Some(Self::YouthDevelopment),
            "injury-impact" => Some(Self::InjuryImpact),
            "trade-effects" => Some(Self::TradeEffects),
            _ => None,
        }
    }

    /// Wire name of the scenario.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TeamPerformance => "team-performance",
            Self::PlayoffProbability => "playoff-probability",
            Self::NilValuation => "nil-valuation",
            Self::YouthDevelopment => "youth-development",
            Self::InjuryImpact => "injury-impact",
            Self::TradeEffects => "trade-effects",
        }
    }

    /// Whether the scenario resolves against the team catalog.
    /// Unscoped scenarios ignore any provided team id.
    #[must_use]
    pub const fn is_team_scoped(self) -> bool {
        match self {
            Self::TeamPerformance
            | Self::PlayoffProbability
            | Self::InjuryImpact
            | Self::TradeEffects => true,
            Self::NilValuation | Self::YouthDevelopment => false,
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform multiplicative jitter in `[low, low + span)`.
pub(crate) fn jitter<R: Rng>(rng: &mut R, low: f64, span: f64) -> f64 {
    low + rng.r#gen::<f64>() * span
}

/// Count wins over a Bernoulli series of `games` trials at `win_prob`.
pub(crate) fn simulate_game_series<R: Rng>(rng: &mut R, games: u32, win_prob: f64) -> u32 {
    let mut wins = 0;
    for _ in 0..games {
        if rng.r#gen::<f64>() < win_prob {
            wins += 1;
        }
    }
    wins
}

/// Estimate remaining regular-season games from the calendar month.
///
/// Months before the season window (or after it ends) count as a full
/// season ahead. Never returns zero.
#[must_use]
pub fn remaining_games_estimate(team: &Team, month: u32) -> u32 {
    let (start_month, season_months) = match team.league {
        League::Mlb => (4, 6),
        League::Nfl | League::Ncaa => (9, 4),
        League::Nba => (10, 6),
    };
    let total = team.season_structure.total_games;
    let elapsed_months = (month + 12 - start_month) % 12;
    if elapsed_months >= season_months {
        return total;
    }
    let fraction = f64::from(elapsed_months) / f64::from(season_months);
    let remaining = (f64::from(total) * (1.0 - fraction)).round();
    (remaining as u32).clamp(1, total)
}
