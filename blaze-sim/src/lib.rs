//! Blaze Scenario Simulator
//!
//! Monte Carlo scenario simulation core for Blaze Sports Intel demo
//! analytics. Six scenario models share a deterministic, seedable RNG
//! bundle and a percentile-based statistics aggregator; every run executes
//! a fixed 10,000 iterations and returns a full [`SimulationReport`].

pub mod curves;
pub mod engine;
pub mod error;
pub mod params;
pub mod report;
pub mod rng;
pub mod scenarios;
pub mod stats;
pub mod tables;
pub mod teams;

// Re-export commonly used types
pub use engine::{ITERATIONS, Simulator};
pub use error::SimulationError;
pub use params::{
    InjuryImpactParams, NilValuationParams, PlayoffProbabilityParams, TeamPerformanceParams,
    TradeEffectsParams, YouthDevelopmentParams,
};
pub use report::{IterationResult, ReportMetadata, SimulationReport};
pub use rng::{CountingRng, RngBundle};
pub use scenarios::ScenarioKind;
pub use stats::{ConfidenceInterval, Percentiles, StatSummary, analyze};
pub use tables::{
    ClassYear, InjurySeverity, MarketSize, PerformanceTier, Sport, TrainingQuality,
};
pub use teams::{BaseMetrics, League, PlayoffFormat, SeasonStructure, Team, TeamCatalog, catalog};
