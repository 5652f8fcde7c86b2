//! Static team reference data.
//!
//! The catalog is a fixed demo dataset embedded at compile time and loaded
//! once per process. Simulations never mutate it, so concurrent runs can
//! share the same catalog reference.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::SimulationError;

/// League a team competes in. Drives season length and probability curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Mlb,
    Nfl,
    Nba,
    Ncaa,
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            League::Mlb => write!(f, "mlb"),
            League::Nfl => write!(f, "nfl"),
            League::Nba => write!(f, "nba"),
            League::Ncaa => write!(f, "ncaa"),
        }
    }
}

/// Playoff qualification format for a season structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayoffFormat {
    Wildcard,
    PlayIn,
    CollegePlayoff,
}

/// Static baseline probabilities used as the starting point for scenarios.
///
/// `win_probability`, `strength_of_schedule`, and `injury_risk` are
/// fractions in [0, 1]; the odds fields are percentages in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMetrics {
    pub win_probability: f64,
    pub playoff_odds: f64,
    pub championship_odds: f64,
    pub strength_of_schedule: f64,
    pub injury_risk: f64,
}

/// Season shape for a team's league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStructure {
    pub total_games: u32,
    pub playoff_format: PlayoffFormat,
    #[serde(default)]
    pub division_rivals: Vec<String>,
}

/// One reference team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub league: League,
    pub division: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub key_players: Vec<String>,
    pub base_metrics: BaseMetrics,
    pub season_structure: SeasonStructure,
}

/// Container for the embedded reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCatalog {
    teams: Vec<Team>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl TeamCatalog {
    /// Load and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or if validation fails.
    pub fn from_json(json_str: &str) -> Result<Self, String> {
        let mut catalog: Self =
            serde_json::from_str(json_str).map_err(|e| format!("JSON parse error: {e}"))?;
        catalog.rebuild_index()?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn rebuild_index(&mut self) -> Result<(), String> {
        let mut index = HashMap::with_capacity(self.teams.len());
        for (i, team) in self.teams.iter().enumerate() {
            if index.insert(team.id.clone(), i).is_some() {
                return Err(format!("duplicate team id: {}", team.id));
            }
        }
        self.index = index;
        Ok(())
    }

    fn validate(&self) -> Result<(), String> {
        for team in &self.teams {
            let m = &team.base_metrics;
            check_fraction(&team.id, "winProbability", m.win_probability)?;
            check_fraction(&team.id, "strengthOfSchedule", m.strength_of_schedule)?;
            check_fraction(&team.id, "injuryRisk", m.injury_risk)?;
            check_percentage(&team.id, "playoffOdds", m.playoff_odds)?;
            check_percentage(&team.id, "championshipOdds", m.championship_odds)?;
            if team.season_structure.total_games == 0 {
                return Err(format!("{}: totalGames must be positive", team.id));
            }
        }
        Ok(())
    }

    /// Look up a team by id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTeam` if the id is absent from the catalog.
    pub fn team(&self, id: &str) -> Result<&Team, SimulationError> {
        self.index
            .get(id)
            .map(|&i| &self.teams[i])
            .ok_or_else(|| SimulationError::UnknownTeam { id: id.to_string() })
    }

    /// All teams in catalog order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }
}

fn check_fraction(team: &str, field: &str, value: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{team}: {field} must be in [0, 1] (got {value})"))
    }
}

fn check_percentage(team: &str, field: &str, value: f64) -> Result<(), String> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{team}: {field} must be in [0, 100] (got {value})"))
    }
}

/// Process-wide demo catalog, loaded on first access.
pub fn catalog() -> &'static TeamCatalog {
    static CATALOG: OnceLock<TeamCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        TeamCatalog::from_json(include_str!("../data/teams.json"))
            .expect("valid embedded team catalog")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_all_demo_teams() {
        let catalog = catalog();
        for id in ["cardinals", "titans", "longhorns", "grizzlies"] {
            assert!(catalog.team(id).is_ok(), "missing team {id}");
        }
        assert_eq!(catalog.teams().len(), 4);
    }

    #[test]
    fn longhorns_playoff_odds_match_reference() {
        let team = catalog().team("longhorns").unwrap();
        assert!((team.base_metrics.playoff_odds - 89.7).abs() < f64::EPSILON);
        assert_eq!(team.league, League::Ncaa);
        assert_eq!(team.season_structure.total_games, 12);
    }

    #[test]
    fn unknown_team_is_an_error() {
        let err = catalog().team("oilers").unwrap_err();
        assert_eq!(
            err,
            SimulationError::UnknownTeam {
                id: "oilers".to_string()
            }
        );
    }

    #[test]
    fn out_of_range_metric_fails_validation() {
        let json = r#"{"teams":[{
            "id":"t","name":"T","league":"mlb","division":"d","city":"c","state":"s",
            "baseMetrics":{"winProbability":1.4,"playoffOdds":50.0,"championshipOdds":5.0,
                           "strengthOfSchedule":0.5,"injuryRisk":0.1},
            "seasonStructure":{"totalGames":162,"playoffFormat":"wildcard"}
        }]}"#;
        let err = TeamCatalog::from_json(json).unwrap_err();
        assert!(err.contains("winProbability"));
    }

    #[test]
    fn duplicate_team_id_fails_validation() {
        let team = r#"{
            "id":"t","name":"T","league":"mlb","division":"d","city":"c","state":"s",
            "baseMetrics":{"winProbability":0.5,"playoffOdds":50.0,"championshipOdds":5.0,
                           "strengthOfSchedule":0.5,"injuryRisk":0.1},
            "seasonStructure":{"totalGames":162,"playoffFormat":"wildcard"}
        }"#;
        let json = format!(r#"{{"teams":[{team},{team}]}}"#);
        let err = TeamCatalog::from_json(&json).unwrap_err();
        assert!(err.contains("duplicate"));
    }
}
