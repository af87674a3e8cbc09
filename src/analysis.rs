use crate::dataset::Dataset;
use crate::model::{Format, Stat};
use crate::types::{TypeTable, Type};
use std::collections::BTreeMap;

/// Per-primary-type census: how many creatures lead with the type, split by
/// what they carry in the second slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecondaryBreakdown {
    pub total: usize,
    /// No secondary type at all.
    pub mono: usize,
    /// Secondary equal to the primary.
    pub same: usize,
    pub by_secondary: TypeTable<usize>,
}

pub fn type_distribution(dataset: &Dataset) -> TypeTable<SecondaryBreakdown> {
    let mut distribution = TypeTable::from_fn(|_| SecondaryBreakdown::default());
    for creature in dataset.iter() {
        let breakdown = &mut distribution[creature.primary_type];
        breakdown.total += 1;
        match creature.secondary_type {
            None => breakdown.mono += 1,
            Some(secondary) if secondary == creature.primary_type => breakdown.same += 1,
            Some(secondary) => breakdown.by_secondary[secondary] += 1,
        }
    }
    distribution
}

/// One equal-width histogram bucket over a base stat. `exemplar` is the
/// creature with the highest value that landed in the bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct StatBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub exemplar: Option<String>,
}

pub fn stat_histogram(dataset: &Dataset, stat: Stat, bins: usize) -> Vec<StatBin> {
    if bins == 0 || dataset.is_empty() {
        return Vec::new();
    }
    let values: Vec<(f64, &str)> = dataset
        .iter()
        .map(|c| (f64::from(c.stats.get(stat)), c.name.as_str()))
        .collect();
    let min = values.iter().map(|(v, _)| *v).fold(f64::INFINITY, f64::min);
    let max = values.iter().map(|(v, _)| *v).fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;
    let bins = if width == 0.0 { 1 } else { bins };

    let mut out: Vec<StatBin> = (0..bins)
        .map(|i| StatBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
            exemplar: None,
        })
        .collect();
    let mut best: Vec<f64> = vec![f64::NEG_INFINITY; bins];
    for (value, name) in values {
        let index = if width == 0.0 {
            0
        } else {
            (((value - min) / width) as usize).min(bins - 1)
        };
        out[index].count += 1;
        if value > best[index] {
            best[index] = value;
            out[index].exemplar = Some(name.to_string());
        }
    }
    out
}

/// Summed usage per type for one generation, the building block of the
/// usage-over-time stream.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamSeries {
    pub generation: u8,
    pub usage: TypeTable<f64>,
}

/// Usage mass per generation and type for one circuit and year. A creature's
/// usage counts toward its primary type and, when distinct, its secondary.
pub fn usage_stream(dataset: &Dataset, format: Format, year: u16) -> Vec<StreamSeries> {
    let mut per_generation: BTreeMap<u8, TypeTable<f64>> = BTreeMap::new();
    for generation in dataset.generations() {
        per_generation.insert(generation, TypeTable::default());
    }
    for creature in dataset.iter() {
        let Some(usage) = creature.usage(format, year) else {
            continue;
        };
        let table = per_generation
            .entry(creature.generation)
            .or_insert_with(TypeTable::default);
        table[creature.primary_type] += usage;
        if let Some(secondary) = creature.distinct_secondary() {
            table[secondary] += usage;
        }
    }
    per_generation
        .into_iter()
        .map(|(generation, usage)| StreamSeries { generation, usage })
        .collect()
}

/// Total usage mass per type across all generations.
pub fn usage_by_type(dataset: &Dataset, format: Format, year: u16) -> TypeTable<f64> {
    let mut totals = TypeTable::<f64>::default();
    for series in usage_stream(dataset, format, year) {
        for (t, &value) in series.usage.iter() {
            totals[t] += value;
        }
    }
    totals
}
