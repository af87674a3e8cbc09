//! Competitive Pokémon dataset analytics: defensive typing math plus the
//! derived tables behind the usual meta charts.
//!
//! The core entry points are [`profile::defensive_profile`] and
//! [`team::net_spread`]; everything else turns the loaded [`dataset::Dataset`]
//! into chart-ready tables.

pub mod analysis;
pub mod dataset;
pub mod matrix;
pub mod model;
pub mod profile;
pub mod report;
pub mod team;
pub mod types;
pub mod usage;

use crate::model::{Format, Stat, TeamFile};
use crate::team::Team;
use crate::types::Type;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Report {
    Spread,
    Profile,
    Distribution,
    Matchups,
    Histogram,
    Stream,
    TopUsage,
}

impl Report {
    pub fn from_name(name: &str) -> Option<Report> {
        match name.trim().to_ascii_lowercase().as_str() {
            "spread" => Some(Report::Spread),
            "profile" => Some(Report::Profile),
            "distribution" => Some(Report::Distribution),
            "matchups" => Some(Report::Matchups),
            "histogram" => Some(Report::Histogram),
            "stream" => Some(Report::Stream),
            "top-usage" | "topusage" => Some(Report::TopUsage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub report: Report,
    pub data_path: PathBuf,
    pub usage_path: PathBuf,
    pub team_path: PathBuf,
    pub output_path: PathBuf,
    pub format: Format,
    pub year: u16,
    pub stat: Stat,
    pub bins: usize,
    pub primary: Option<Type>,
    pub typing: Vec<Type>,
}

pub fn load_team(path: &Path) -> anyhow::Result<Team> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file at {}", path.display()))?;
    let parsed: TeamFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Team::from_file(parsed)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    // The profile report is pure typing math and needs no dataset.
    if opts.report == Report::Profile {
        if opts.typing.is_empty() {
            anyhow::bail!("--types is required for the profile report (e.g. --types water/ground)");
        }
        let profile = profile::defensive_profile(&opts.typing);
        std::fs::write(&opts.output_path, report::profile_csv(&profile))?;
        println!(
            "Wrote defensive profile for {} to {}",
            opts.typing
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join("/"),
            opts.output_path.display()
        );
        return Ok(());
    }

    let (dataset, load_stats) = dataset::load_dataset(&opts.data_path)?;
    if load_stats.skipped > 0 {
        eprintln!(
            "Skipped {} of {} dataset rows",
            load_stats.skipped, load_stats.total_rows
        );
    }
    if dataset.is_empty() {
        anyhow::bail!("Dataset at {} contains no usable rows", opts.data_path.display());
    }

    match opts.report {
        Report::Profile => unreachable!("handled above"),
        Report::Spread => {
            let team = load_team(&opts.team_path)?;
            let members = team.members(&dataset);
            let spread = team::net_spread(&members);
            std::fs::write(&opts.output_path, report::spread_csv(&spread))?;
            println!(
                "Wrote net defensive spread for {} team member(s) to {}",
                members.len(),
                opts.output_path.display()
            );
        }
        Report::Distribution => {
            let distribution = analysis::type_distribution(&dataset);
            std::fs::write(&opts.output_path, report::distribution_csv(&distribution))?;
            println!(
                "Wrote type distribution of {} creatures to {}",
                dataset.len(),
                opts.output_path.display()
            );
        }
        Report::Matchups => {
            let rows = match opts.primary {
                Some(primary) => matrix::matchup_rows(&dataset, primary),
                None => matrix::matchup_matrix(&dataset),
            };
            matrix::write_matchup_csv(&rows, &opts.output_path)?;
            println!(
                "Wrote {} matchup row(s) to {}",
                rows.len(),
                opts.output_path.display()
            );
        }
        Report::Histogram => {
            let bins = analysis::stat_histogram(&dataset, opts.stat, opts.bins);
            std::fs::write(&opts.output_path, report::histogram_csv(&bins))?;
            println!(
                "Wrote {} {} histogram bin(s) to {}",
                bins.len(),
                opts.stat.column(),
                opts.output_path.display()
            );
        }
        Report::Stream => {
            let series = analysis::usage_stream(&dataset, opts.format, opts.year);
            std::fs::write(&opts.output_path, report::stream_csv(&series))?;
            println!(
                "Wrote {} {} usage stream for {} generation(s) to {}",
                opts.format,
                opts.year,
                series.len(),
                opts.output_path.display()
            );
        }
        Report::TopUsage => {
            let (usage_table, usage_stats) = usage::load_usage_table(&opts.usage_path)?;
            if usage_stats.skipped > 0 {
                eprintln!(
                    "Skipped {} of {} usage rows",
                    usage_stats.skipped, usage_stats.total_rows
                );
            }
            let entries = usage_table.top_usage(&dataset, opts.format, opts.year);
            std::fs::write(&opts.output_path, report::top_usage_csv(&entries))?;
            if let Some(pair) = usage_table.radar_pair(&dataset, opts.format, opts.year) {
                println!(
                    "Stat-total extremes: {} ({}) vs {} ({})",
                    pair.low.name, pair.low.total_stats, pair.high.name, pair.high.total_stats
                );
            }
            println!(
                "Wrote {} {} {} usage entries to {}",
                entries.len(),
                opts.format,
                opts.year,
                opts.output_path.display()
            );
        }
    }
    Ok(())
}
