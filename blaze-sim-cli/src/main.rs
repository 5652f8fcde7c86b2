use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use blaze_sim::{ScenarioKind, SimulationReport, Simulator, StatSummary, catalog};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable colored summary table
    Console,
    /// Machine-readable JSON report
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "blaze-sim", version)]
#[command(about = "Monte Carlo scenario simulator for Blaze Sports Intel demo analytics")]
struct Args {
    /// Scenario to run (see --list-scenarios)
    #[arg(long, default_value = "team-performance")]
    scenario: String,

    /// Team id for team-scoped scenarios (see --list-teams)
    #[arg(long)]
    team: Option<String>,

    /// RNG seed, decimal or 0x-prefixed hex; omit for system entropy
    #[arg(long)]
    seed: Option<String>,

    /// Scenario parameters as a JSON object
    #[arg(long, default_value = "{}")]
    params: String,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// List all reference teams and exit
    #[arg(long)]
    list_teams: bool,

    /// Verbose output (RNG draw counts, run detail)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        for kind in ScenarioKind::ALL {
            let scope = if kind.is_team_scoped() {
                "team-scoped"
            } else {
                "unscoped"
            };
            println!("{:24} {scope}", kind.name());
        }
        return Ok(());
    }

    if args.list_teams {
        for team in catalog().teams() {
            println!(
                "{:12} {} ({}, {})",
                team.id,
                team.name,
                team.league.to_string().to_uppercase(),
                team.division
            );
        }
        return Ok(());
    }

    let parameters = parse_params(&args.params)?;
    let simulator = match args.seed.as_deref() {
        Some(raw) => Simulator::with_seed(parse_seed(raw)?),
        None => Simulator::from_entropy(),
    };

    let report = simulator
        .run(&args.scenario, args.team.as_deref(), &parameters)
        .with_context(|| format!("scenario '{}' failed", args.scenario))?;

    if args.verbose {
        let (noise, games) = simulator.draw_counts();
        log::info!("rng draws: noise={noise} games={games}");
    }

    let rendered = match args.report {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Console => render_console(&report),
    };

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{rendered}")?;
        }
        None => {
            writeln!(stdout(), "{rendered}")?;
        }
    }

    Ok(())
}

fn parse_params(raw: &str) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(raw).context("--params must be a valid JSON object")?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("--params must be a JSON object, got {other}"),
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    let parsed = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };
    parsed.with_context(|| format!("invalid seed '{raw}'"))
}

fn render_console(report: &SimulationReport) -> String {
    let mut out = String::new();
    let title = match &report.metadata.team {
        Some(team) => format!("{} / {}", report.metadata.scenario, team),
        None => report.metadata.scenario.clone(),
    };
    out.push_str(&format!("{}\n", title.bold().cyan()));
    out.push_str(&format!(
        "{} iterations @ {}\n\n",
        report.iterations, report.timestamp
    ));

    for (field, s) in &report.statistics {
        out.push_str(&format!("{}\n", field.bold()));
        out.push_str(&format!(
            "  mean {}   median {}   stddev {}\n",
            format_num(s.mean).green(),
            format_num(s.median),
            format_num(s.std_dev)
        ));
        out.push_str(&format!(
            "  min {}   p5 {}   p25 {}   p75 {}   p95 {}   max {}\n",
            format_num(s.min),
            format_num(s.percentiles.p5),
            format_num(s.percentiles.p25),
            format_num(s.percentiles.p75),
            format_num(s.percentiles.p95),
            format_num(s.max)
        ));
        out.push_str(&format!("  95% CI [{}]\n", format_ci(s).yellow()));
    }
    out.trim_end().to_string()
}

fn format_ci(s: &StatSummary) -> String {
    format!(
        "{}, {}",
        format_num(s.confidence_interval.lower),
        format_num(s.confidence_interval.upper)
    )
}

fn format_num(value: f64) -> String {
    if value.abs() >= 10_000.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_decimal_and_hex() {
        assert_eq!(parse_seed("1337").unwrap(), 1337);
        assert_eq!(parse_seed("0xACED").unwrap(), 0xACED);
        assert!(parse_seed("not-a-seed").is_err());
    }

    #[test]
    fn params_must_be_an_object() {
        assert!(parse_params("{}").unwrap().is_empty());
        assert!(parse_params("{\"winStreak\":5}").unwrap().contains_key("winStreak"));
        assert!(parse_params("[1,2]").is_err());
        assert!(parse_params("nonsense").is_err());
    }

    #[test]
    fn console_render_includes_every_field() {
        let report = Simulator::with_seed(1)
            .run("youth-development", None, &Map::new())
            .unwrap();
        let rendered = render_console(&report);
        for field in report.statistics.keys() {
            assert!(rendered.contains(field));
        }
    }
}
