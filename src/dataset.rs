use crate::model::{Creature, Format, Stats, UsageKey};
use crate::types::Type;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Row-level accounting for a dataset load. Malformed rows are skipped with a
/// warning rather than failing the whole load.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadStats {
    pub total_rows: usize,
    pub parsed: usize,
    pub skipped: usize,
}

/// The parsed creature dataset: an immutable record collection plus a
/// normalized-name index for lookups.
#[derive(Debug, Default)]
pub struct Dataset {
    creatures: Vec<Creature>,
    by_name: HashMap<String, usize>,
}

impl Dataset {
    pub fn from_creatures(creatures: Vec<Creature>) -> Self {
        let mut by_name = HashMap::with_capacity(creatures.len());
        for (idx, creature) in creatures.iter().enumerate() {
            by_name.entry(normalize_id(&creature.name)).or_insert(idx);
        }
        Dataset { creatures, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.by_name
            .get(&normalize_id(name))
            .map(|&idx| &self.creatures[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Case-insensitive substring search over creature names, in dataset
    /// order (the suggestion-box lookup).
    pub fn search(&self, query: &str) -> Vec<&Creature> {
        let needle = query.to_ascii_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.creatures
            .iter()
            .filter(|c| c.name.to_ascii_lowercase().contains(&needle))
            .collect()
    }

    /// Distinct generations present in the data, ascending.
    pub fn generations(&self) -> Vec<u8> {
        let mut gens: Vec<u8> = self.creatures.iter().map(|c| c.generation).collect();
        gens.sort_unstable();
        gens.dedup();
        gens
    }
}

/// Lookup keys keep lowercase alphanumerics and hyphens so form names like
/// `landorus-therian` stay distinct.
pub fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

// Cosmetic forms the original dataset tooling drops before analysis.
fn is_excluded_form(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.contains("-totem") || lower.contains("power-construct")
}

/// Usage columns follow the `{Format}_VGC_Usage_{year}` naming scheme.
fn usage_key_from_header(header: &str) -> Option<UsageKey> {
    let (format_part, year_part) = header.split_once("_VGC_Usage_")?;
    let format = Format::from_name(format_part)?;
    let year = year_part.parse().ok()?;
    Some(UsageKey { format, year })
}

pub fn load_dataset(path: &Path) -> Result<(Dataset, LoadStats)> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open dataset CSV at {}", path.display()))?;
    read_dataset(reader)
}

pub fn read_dataset<R: io::Read>(mut reader: csv::Reader<R>) -> Result<(Dataset, LoadStats)> {
    let headers = reader.headers().context("Dataset CSV has no header row")?.clone();

    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let name_idx = column("name").context("Dataset CSV is missing a 'name' column")?;
    let type1_idx = column("type1").context("Dataset CSV is missing a 'type1' column")?;
    let type2_idx = column("type2");
    let generation_idx = column("generation");
    let total_idx = column("total_stats");
    let stat_idx: Vec<Option<usize>> = ["hp", "attack", "defense", "sp_atk", "sp_def", "speed"]
        .iter()
        .map(|&c| column(c))
        .collect();
    let usage_columns: Vec<(usize, UsageKey)> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| usage_key_from_header(h).map(|key| (idx, key)))
        .collect();

    let mut creatures = Vec::new();
    let mut stats = LoadStats::default();
    for (row, result) in reader.records().enumerate() {
        stats.total_rows += 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                stats.skipped += 1;
                eprintln!("Warning: line {} - unreadable row: {err}", row + 2);
                continue;
            }
        };
        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            stats.skipped += 1;
            eprintln!("Warning: line {} - missing name", row + 2);
            continue;
        }
        if is_excluded_form(name) {
            stats.skipped += 1;
            continue;
        }
        let primary_type = match record.get(type1_idx).and_then(Type::from_name) {
            Some(t) => t,
            None => {
                stats.skipped += 1;
                eprintln!(
                    "Warning: line {} - unknown primary type '{}' for {name}",
                    row + 2,
                    record.get(type1_idx).unwrap_or("")
                );
                continue;
            }
        };
        let secondary_type = type2_idx
            .and_then(|idx| record.get(idx))
            .and_then(Type::from_name);

        let mut base = [0u16; 6];
        let mut stats_ok = true;
        for (slot, idx) in stat_idx.iter().enumerate() {
            let raw = idx.and_then(|idx| record.get(idx)).unwrap_or("");
            match raw.trim().parse::<u16>() {
                Ok(value) => base[slot] = value,
                Err(_) => {
                    stats_ok = false;
                    eprintln!("Warning: line {} - invalid stat value '{raw}' for {name}", row + 2);
                    break;
                }
            }
        }
        if !stats_ok {
            stats.skipped += 1;
            continue;
        }
        let creature_stats = Stats {
            hp: base[0],
            atk: base[1],
            def: base[2],
            spa: base[3],
            spd: base[4],
            spe: base[5],
        };

        let generation = generation_idx
            .and_then(|idx| record.get(idx))
            .and_then(|g| g.trim().parse().ok())
            .unwrap_or(0);
        let total_stats = total_idx
            .and_then(|idx| record.get(idx))
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or_else(|| creature_stats.total());

        let mut usage = HashMap::new();
        for (idx, key) in &usage_columns {
            if let Some(value) = record.get(*idx).and_then(|v| v.trim().parse::<f64>().ok()) {
                usage.insert(*key, value);
            }
        }

        creatures.push(Creature {
            name: name.to_string(),
            primary_type,
            secondary_type,
            stats: creature_stats,
            total_stats,
            generation,
            usage,
        });
        stats.parsed += 1;
    }

    Ok((Dataset::from_creatures(creatures), stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Format;

    const SAMPLE: &str = "\
name,type1,type2,hp,attack,defense,sp_atk,sp_def,speed,total_stats,generation,Smogon_VGC_Usage_2024,Worlds_VGC_Usage_2023
garchomp,dragon,ground,108,130,95,80,85,102,600,4,18.5,7.2
pikachu,electric,,35,55,40,50,50,90,320,1,0.4,
mimikyu-totem-disguised,ghost,fairy,55,90,80,50,105,96,476,7,1.0,2.0
glitchmon,shadow,,10,10,10,10,10,10,60,1,,
badstats,fire,,x,1,1,1,1,1,15,1,,
";

    fn sample_dataset() -> (Dataset, LoadStats) {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(SAMPLE.as_bytes());
        read_dataset(reader).expect("sample parses")
    }

    #[test]
    fn parses_rows_and_skips_bad_ones() {
        let (dataset, stats) = sample_dataset();
        assert_eq!(stats.total_rows, 5);
        assert_eq!(stats.parsed, 2);
        assert_eq!(stats.skipped, 3); // totem form, unknown type, bad stat
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let (dataset, _) = sample_dataset();
        let garchomp = dataset.get("Garchomp").expect("garchomp is present");
        assert_eq!(garchomp.primary_type, Type::Dragon);
        assert_eq!(garchomp.secondary_type, Some(Type::Ground));
        assert_eq!(garchomp.stats.atk, 130);
        assert_eq!(garchomp.generation, 4);
    }

    #[test]
    fn usage_columns_are_discovered_from_headers() {
        let (dataset, _) = sample_dataset();
        let garchomp = dataset.get("garchomp").unwrap();
        assert_eq!(garchomp.usage(Format::Smogon, 2024), Some(18.5));
        assert_eq!(garchomp.usage(Format::Worlds, 2023), Some(7.2));
        let pikachu = dataset.get("pikachu").unwrap();
        assert_eq!(pikachu.usage(Format::Smogon, 2024), Some(0.4));
        // Empty cells contribute nothing.
        assert_eq!(pikachu.usage(Format::Worlds, 2023), None);
    }

    #[test]
    fn missing_secondary_is_none() {
        let (dataset, _) = sample_dataset();
        assert_eq!(dataset.get("pikachu").unwrap().secondary_type, None);
    }

    #[test]
    fn search_matches_substrings() {
        let (dataset, _) = sample_dataset();
        assert_eq!(dataset.search("chu").len(), 1);
        assert_eq!(dataset.search("CHOMP").len(), 1);
        assert!(dataset.search("").is_empty());
    }

    #[test]
    fn normalize_keeps_hyphens() {
        assert_eq!(normalize_id("Landorus-Therian"), "landorus-therian");
        assert_eq!(normalize_id("Mr. Mime"), "mrmime");
    }
}
