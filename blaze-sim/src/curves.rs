//! Derived-probability helpers shared across scenarios.
//!
//! Playoff probability maps a win fraction through a league-specific
//! sigmoid; championship probability is a flat per-league fraction of the
//! playoff odds. Clamp bounds keep demo outputs plausible.

use crate::teams::League;

/// Lower clamp for simulated per-game win probability.
pub const WIN_PROB_FLOOR: f64 = 0.1;
/// Upper clamp for simulated per-game win probability.
pub const WIN_PROB_CEIL: f64 = 0.9;
/// Lower clamp for NIL valuations in dollars.
pub const NIL_VALUE_FLOOR: f64 = 5_000.0;
/// Upper clamp for NIL valuations in dollars.
pub const NIL_VALUE_CEIL: f64 = 3_000_000.0;
/// Lower clamp for playoff probability percentages.
pub const PLAYOFF_PCT_FLOOR: f64 = 1.0;
/// Upper clamp for playoff probability percentages.
pub const PLAYOFF_PCT_CEIL: f64 = 99.0;

// Championship odds are zeroed below this playoff percentage and capped
// at CHAMPIONSHIP_PCT_CEIL regardless of league.
const CHAMPIONSHIP_MIN_PLAYOFF_PCT: f64 = 10.0;
const CHAMPIONSHIP_PCT_CEIL: f64 = 40.0;

/// Sigmoid parameters for one league's playoff qualification curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidCurve {
    /// Win fraction at which playoff odds cross 50%.
    pub threshold: f64,
    /// Slope of the curve around the threshold.
    pub steepness: f64,
}

/// Playoff curve for a league.
#[must_use]
pub const fn playoff_curve(league: League) -> SigmoidCurve {
    match league {
        League::Mlb => SigmoidCurve {
            threshold: 0.54,
            steepness: 8.0,
        },
        League::Nfl => SigmoidCurve {
            threshold: 0.56,
            steepness: 12.0,
        },
        League::Nba => SigmoidCurve {
            threshold: 0.49,
            steepness: 6.0,
        },
        League::Ncaa => SigmoidCurve {
            threshold: 0.67,
            steepness: 15.0,
        },
    }
}

/// Fraction of playoff odds that converts to championship odds.
#[must_use]
pub const fn championship_factor(league: League) -> f64 {
    match league {
        League::Mlb => 0.08,
        League::Nfl => 0.15,
        League::Nba => 0.06,
        League::Ncaa => 0.04,
    }
}

/// Playoff probability (percent) for a win fraction in the given league.
///
/// The raw sigmoid output is clamped to [0.01, 0.99] before scaling.
#[must_use]
pub fn playoff_probability_pct(win_fraction: f64, league: League) -> f64 {
    let SigmoidCurve {
        threshold,
        steepness,
    } = playoff_curve(league);
    let p = 1.0 / (1.0 + (-(win_fraction - threshold) * steepness).exp());
    p.clamp(0.01, 0.99) * 100.0
}

/// Championship probability (percent) derived from playoff probability.
///
/// Zero below a 10% playoff chance; capped at 40%.
#[must_use]
pub fn championship_probability_pct(playoff_pct: f64, league: League) -> f64 {
    if playoff_pct < CHAMPIONSHIP_MIN_PLAYOFF_PCT {
        return 0.0;
    }
    (playoff_pct * championship_factor(league)).min(CHAMPIONSHIP_PCT_CEIL)
}
