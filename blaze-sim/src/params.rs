//! Typed scenario parameters with documented defaults.
//!
//! Callers pass a loose JSON bag; each scenario parses it once at entry
//! into a typed struct, filling defaults for absent fields and ignoring
//! unrecognized ones. Continuous inputs are clamped to their documented
//! domains here so iteration functions never re-validate.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SimulationError;
use crate::tables::{
    ClassYear, InjurySeverity, MarketSize, PerformanceTier, Sport, TrainingQuality,
};

/// Parse a loose parameter bag into a typed struct, filling defaults.
///
/// # Errors
///
/// Returns `InvalidParameters` if a recognized field has the wrong type.
pub(crate) fn parse_bag<T>(bag: &Map<String, Value>) -> Result<T, SimulationError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(Value::Object(bag.clone())).map_err(|e| {
        SimulationError::InvalidParameters {
            message: e.to_string(),
        }
    })
}

/// Inputs for the `team-performance` scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformanceParams {
    #[serde(default)]
    pub player_performance: PerformanceTier,
    #[serde(default = "default_chemistry")]
    pub team_chemistry: f64,
    /// Defaults to a schedule-phase estimate from the calendar month.
    #[serde(default)]
    pub remaining_games: Option<u32>,
    #[serde(default)]
    pub sos_adjustment: f64,
    /// Defaults to the team's baseline injury risk.
    #[serde(default)]
    pub injury_risk: Option<f64>,
}

impl TeamPerformanceParams {
    pub(crate) fn clamp_domains(&mut self) {
        self.team_chemistry = self.team_chemistry.clamp(0.0, 1.0);
        self.sos_adjustment = self.sos_adjustment.clamp(-0.25, 0.25);
        if let Some(risk) = self.injury_risk.as_mut() {
            *risk = risk.clamp(0.0, 1.0);
        }
    }
}

impl Default for TeamPerformanceParams {
    fn default() -> Self {
        Self {
            player_performance: PerformanceTier::default(),
            team_chemistry: default_chemistry(),
            remaining_games: None,
            sos_adjustment: 0.0,
            injury_risk: None,
        }
    }
}

fn default_chemistry() -> f64 {
    0.75
}

/// Inputs for the `playoff-probability` scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffProbabilityParams {
    #[serde(default)]
    pub win_streak: i64,
    /// Rival form in [-1, 1]; positive hurts the team's odds.
    #[serde(default)]
    pub rival_performance: f64,
    /// Head-to-head win fraction against rivals, [0, 1].
    #[serde(default = "default_h2h")]
    pub h2h_record: f64,
}

impl PlayoffProbabilityParams {
    pub(crate) fn clamp_domains(&mut self) {
        self.win_streak = self.win_streak.clamp(-20, 20);
        self.rival_performance = self.rival_performance.clamp(-1.0, 1.0);
        self.h2h_record = self.h2h_record.clamp(0.0, 1.0);
    }
}

impl Default for PlayoffProbabilityParams {
    fn default() -> Self {
        Self {
            win_streak: 0,
            rival_performance: 0.0,
            h2h_record: default_h2h(),
        }
    }
}

fn default_h2h() -> f64 {
    0.5
}

/// Inputs for the `nil-valuation` scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NilValuationParams {
    #[serde(default)]
    pub sport: Sport,
    #[serde(default = "default_position")]
    pub position: String,
    #[serde(default)]
    pub performance: PerformanceTier,
    #[serde(default = "default_followers")]
    pub social_media_followers: u64,
    #[serde(default)]
    pub market_size: MarketSize,
}

impl Default for NilValuationParams {
    fn default() -> Self {
        Self {
            sport: Sport::default(),
            position: default_position(),
            performance: PerformanceTier::default(),
            social_media_followers: default_followers(),
            market_size: MarketSize::default(),
        }
    }
}

fn default_position() -> String {
    "QB".to_string()
}

fn default_followers() -> u64 {
    10_000
}

/// Inputs for the `youth-development` scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouthDevelopmentParams {
    #[serde(default)]
    pub class_year: ClassYear,
    #[serde(default)]
    pub training_quality: TrainingQuality,
    /// Level of competition faced, [0, 1].
    #[serde(default = "default_competition")]
    pub competition_level: f64,
    /// Current scouting rating on the 40–99 scale.
    #[serde(default = "default_baseline_rating")]
    pub baseline_rating: f64,
}

impl YouthDevelopmentParams {
    pub(crate) fn clamp_domains(&mut self) {
        self.competition_level = self.competition_level.clamp(0.0, 1.0);
        self.baseline_rating = self.baseline_rating.clamp(40.0, 99.0);
    }
}

impl Default for YouthDevelopmentParams {
    fn default() -> Self {
        Self {
            class_year: ClassYear::default(),
            training_quality: TrainingQuality::default(),
            competition_level: default_competition(),
            baseline_rating: default_baseline_rating(),
        }
    }
}

fn default_competition() -> f64 {
    0.5
}

fn default_baseline_rating() -> f64 {
    70.0
}

/// Inputs for the `injury-impact` scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryImpactParams {
    #[serde(default)]
    pub severity: InjurySeverity,
    /// Share of team output attributed to the injured player, [0, 1].
    #[serde(default = "default_importance")]
    pub player_importance: f64,
    /// Overrides the per-iteration sampled games-missed count.
    #[serde(default)]
    pub affected_games: Option<u32>,
}

impl InjuryImpactParams {
    pub(crate) fn clamp_domains(&mut self) {
        self.player_importance = self.player_importance.clamp(0.0, 1.0);
    }
}

impl Default for InjuryImpactParams {
    fn default() -> Self {
        Self {
            severity: InjurySeverity::default(),
            player_importance: default_importance(),
            affected_games: None,
        }
    }
}

fn default_importance() -> f64 {
    0.5
}

/// Inputs for the `trade-effects` scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEffectsParams {
    /// Net quality change from the trade, [-1, 1].
    #[serde(default = "default_quality_delta")]
    pub player_quality_delta: f64,
    /// Locker-room chemistry shift, [-0.5, 0.5].
    #[serde(default = "default_chemistry_impact")]
    pub chemistry_impact: f64,
    /// How badly the acquired position was needed, [0, 1].
    #[serde(default = "default_position_need")]
    pub position_need: f64,
    /// Defaults to a schedule-phase estimate from the calendar month.
    #[serde(default)]
    pub remaining_games: Option<u32>,
}

impl TradeEffectsParams {
    pub(crate) fn clamp_domains(&mut self) {
        self.player_quality_delta = self.player_quality_delta.clamp(-1.0, 1.0);
        self.chemistry_impact = self.chemistry_impact.clamp(-0.5, 0.5);
        self.position_need = self.position_need.clamp(0.0, 1.0);
    }
}

impl Default for TradeEffectsParams {
    fn default() -> Self {
        Self {
            player_quality_delta: default_quality_delta(),
            chemistry_impact: default_chemistry_impact(),
            position_need: default_position_need(),
            remaining_games: None,
        }
    }
}

fn default_quality_delta() -> f64 {
    0.1
}

fn default_chemistry_impact() -> f64 {
    -0.05
}

fn default_position_need() -> f64 {
    0.5
}
