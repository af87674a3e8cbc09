use crate::dataset::{Dataset, LoadStats};
use crate::model::{Creature, Format};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io;
use std::path::Path;

/// One row of the per-year top-usage table.
#[derive(Clone, Debug, Deserialize)]
pub struct UsageRecord {
    pub year: u16,
    pub format: Format,
    pub name: String,
    pub usage: f64,
}

/// The `year,format,name,usage` companion table listing the most-used
/// creatures per circuit and season.
#[derive(Debug, Default)]
pub struct UsageTable {
    records: Vec<UsageRecord>,
}

/// A usage entry joined against the creature dataset. The join is best
/// effort: names absent from the dataset keep their usage but no record.
#[derive(Clone, Debug)]
pub struct RankedUsage<'a> {
    pub name: &'a str,
    pub usage: f64,
    pub creature: Option<&'a Creature>,
}

/// The stat-comparison pair for one season: the joined entries with the
/// lowest and highest base-stat totals.
#[derive(Clone, Copy, Debug)]
pub struct RadarPair<'a> {
    pub low: &'a Creature,
    pub low_usage: f64,
    pub high: &'a Creature,
    pub high_usage: f64,
}

impl UsageTable {
    pub fn from_records(records: Vec<UsageRecord>) -> Self {
        UsageTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries for one circuit and year, most used first, joined against the
    /// dataset.
    pub fn top_usage<'a>(
        &'a self,
        dataset: &'a Dataset,
        format: Format,
        year: u16,
    ) -> Vec<RankedUsage<'a>> {
        let mut entries: Vec<RankedUsage<'a>> = self
            .records
            .iter()
            .filter(|r| r.format == format && r.year == year)
            .map(|r| RankedUsage {
                name: r.name.as_str(),
                usage: r.usage,
                creature: dataset.get(&r.name),
            })
            .collect();
        entries.sort_by(|a, b| b.usage.total_cmp(&a.usage));
        entries
    }

    pub fn radar_pair<'a>(
        &'a self,
        dataset: &'a Dataset,
        format: Format,
        year: u16,
    ) -> Option<RadarPair<'a>> {
        let mut joined: Vec<(&Creature, f64)> = self
            .top_usage(dataset, format, year)
            .into_iter()
            .filter_map(|entry| entry.creature.map(|c| (c, entry.usage)))
            .collect();
        joined.sort_by_key(|(creature, _)| creature.total_stats);
        let (low, low_usage) = *joined.first()?;
        let (high, high_usage) = *joined.last()?;
        Some(RadarPair { low, low_usage, high, high_usage })
    }
}

pub fn load_usage_table(path: &Path) -> Result<(UsageTable, LoadStats)> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open usage CSV at {}", path.display()))?;
    read_usage_table(reader)
}

pub fn read_usage_table<R: io::Read>(mut reader: csv::Reader<R>) -> Result<(UsageTable, LoadStats)> {
    let mut records = Vec::new();
    let mut stats = LoadStats::default();
    for (row, result) in reader.deserialize::<UsageRecord>().enumerate() {
        stats.total_rows += 1;
        match result {
            Ok(record) => {
                records.push(record);
                stats.parsed += 1;
            }
            Err(err) => {
                stats.skipped += 1;
                eprintln!("Warning: line {} - bad usage row: {err}", row + 2);
            }
        }
    }
    Ok((UsageTable::from_records(records), stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stats;
    use crate::types::Type;
    use std::collections::HashMap;

    const SAMPLE: &str = "\
year,format,name,usage
2024,Smogon,garchomp,23.1
2024,Smogon,blissey,11.0
2024,Smogon,unjoined,9.9
2023,Smogon,garchomp,19.4
2024,Worlds,blissey,7.0
oops,Smogon,broken,1.0
";

    fn make_creature(name: &str, total: u16) -> Creature {
        Creature {
            name: name.to_string(),
            primary_type: Type::Normal,
            secondary_type: None,
            stats: Stats::default(),
            total_stats: total,
            generation: 1,
            usage: HashMap::new(),
        }
    }

    fn sample_table() -> (UsageTable, LoadStats) {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(SAMPLE.as_bytes());
        read_usage_table(reader).expect("sample parses")
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_creatures(vec![
            make_creature("garchomp", 600),
            make_creature("blissey", 540),
        ])
    }

    #[test]
    fn bad_rows_are_skipped() {
        let (table, stats) = sample_table();
        assert_eq!(stats.total_rows, 6);
        assert_eq!(stats.parsed, 5);
        assert_eq!(stats.skipped, 1);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn top_usage_filters_and_sorts() {
        let (table, _) = sample_table();
        let dataset = sample_dataset();
        let top = table.top_usage(&dataset, Format::Smogon, 2024);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "garchomp");
        assert_eq!(top[0].usage, 23.1);
        assert!(top[0].creature.is_some());
        assert_eq!(top[2].name, "unjoined");
        assert!(top[2].creature.is_none());
    }

    #[test]
    fn radar_pair_spans_the_stat_range() {
        let (table, _) = sample_table();
        let dataset = sample_dataset();
        let pair = table
            .radar_pair(&dataset, Format::Smogon, 2024)
            .expect("two joined entries");
        assert_eq!(pair.low.name, "blissey");
        assert_eq!(pair.low_usage, 11.0);
        assert_eq!(pair.high.name, "garchomp");
        assert_eq!(pair.high_usage, 23.1);
    }

    #[test]
    fn radar_pair_needs_at_least_one_join() {
        let (table, _) = sample_table();
        let empty = Dataset::default();
        assert!(table.radar_pair(&empty, Format::Smogon, 2024).is_none());
    }
}
