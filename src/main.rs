use pokemon_meta_stats::model::{Format, Stat};
use pokemon_meta_stats::types::Type;
use pokemon_meta_stats::{run, CliOptions, Report};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- --report spread|profile|distribution|matchups|histogram|stream|top-usage \
[--data pokemon_competitive.csv] [--usage top20_usage_per_year.csv] [--team team.json] [--output report.csv] \
[--format smogon|worlds] [--year YEAR] [--stat hp|attack|defense|sp_atk|sp_def|speed] [--bins N] \
[--type TYPE] [--types TYPE1/TYPE2]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut report = Report::Spread;
    let mut data_path = PathBuf::from("pokemon_competitive.csv");
    let mut usage_path = PathBuf::from("top20_usage_per_year.csv");
    let mut team_path = PathBuf::from("team.json");
    let mut output_path = PathBuf::from("report.csv");
    let mut format = Format::Smogon;
    let mut year = 2024u16;
    let mut stat = Stat::Hp;
    let mut bins = 20usize;
    let mut primary = None;
    let mut typing = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--report" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--report requires a report name"))?;
                report = Report::from_name(&val).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Unknown report {val} (use spread, profile, distribution, matchups, histogram, stream or top-usage)"
                    )
                })?;
            }
            "--data" => {
                data_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--data requires a path (e.g. --data pokemon_competitive.csv)")
                })?;
            }
            "--usage" => {
                usage_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--usage requires a path (e.g. --usage top20_usage_per_year.csv)")
                })?;
            }
            "--team" => {
                team_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--team requires a path (e.g. --team team.json)")
                })?;
            }
            "--output" => {
                output_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output report.csv)")
                })?;
            }
            "--format" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--format requires smogon or worlds"))?;
                format = Format::from_name(&val)
                    .ok_or_else(|| anyhow::anyhow!("Unknown format {val} (use smogon or worlds)"))?;
            }
            "--year" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--year requires a number"))?;
                year = val.parse()?;
            }
            "--stat" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--stat requires a stat name"))?;
                stat = Stat::from_name(&val).ok_or_else(|| {
                    anyhow::anyhow!("Unknown stat {val} (use hp, attack, defense, sp_atk, sp_def or speed)")
                })?;
            }
            "--bins" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--bins requires a number"))?;
                bins = val.parse()?;
            }
            "--type" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--type requires a type name"))?;
                primary = Some(
                    Type::from_name(&val)
                        .ok_or_else(|| anyhow::anyhow!("Unknown type {val}"))?,
                );
            }
            "--types" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--types requires a typing (e.g. water/ground)"))?;
                typing = parse_typing(&val)?;
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        report,
        data_path,
        usage_path,
        team_path,
        output_path,
        format,
        year,
        stat,
        bins,
        primary,
        typing,
    })
}

fn parse_typing(value: &str) -> anyhow::Result<Vec<Type>> {
    let mut typing = Vec::new();
    for part in value.split('/') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let t = Type::from_name(part)
            .ok_or_else(|| anyhow::anyhow!("Unknown type {part} in typing {value}"))?;
        typing.push(t);
    }
    if typing.len() > 2 {
        anyhow::bail!("A typing has at most two types, got {value}");
    }
    Ok(typing)
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}
