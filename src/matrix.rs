use crate::dataset::Dataset;
use crate::types::{dual_effectiveness, Type, TypeTable};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// One observed typing combination with its creature count and its combined
/// incoming multiplier against every attacking type.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchupRow {
    pub primary: Type,
    pub secondary: Option<Type>,
    pub count: usize,
    pub multipliers: TypeTable<f32>,
}

// A secondary equal to the primary collapses to "no secondary" here, so
// Water/Water rows merge with plain Water.
fn observed_combos(dataset: &Dataset) -> HashMap<(Type, Option<Type>), usize> {
    let mut combos = HashMap::new();
    for creature in dataset.iter() {
        *combos
            .entry((creature.primary_type, creature.distinct_secondary()))
            .or_insert(0) += 1;
    }
    combos
}

fn build_rows(combos: Vec<((Type, Option<Type>), usize)>) -> Vec<MatchupRow> {
    let mut rows: Vec<MatchupRow> = combos
        .par_iter()
        .map(|&((primary, secondary), count)| MatchupRow {
            primary,
            secondary,
            count,
            multipliers: TypeTable::from_fn(|attacking| {
                dual_effectiveness(attacking, primary, secondary)
            }),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.primary
            .cmp(&b.primary)
            .then(b.count.cmp(&a.count))
            .then(a.secondary.cmp(&b.secondary))
    });
    rows
}

/// Matchup rows for every typing combination observed under one primary type.
pub fn matchup_rows(dataset: &Dataset, primary: Type) -> Vec<MatchupRow> {
    let combos = observed_combos(dataset)
        .into_iter()
        .filter(|((p, _), _)| *p == primary)
        .collect();
    build_rows(combos)
}

/// The full matchup matrix across all observed typing combinations.
pub fn matchup_matrix(dataset: &Dataset) -> Vec<MatchupRow> {
    build_rows(observed_combos(dataset).into_iter().collect())
}

pub fn write_matchup_csv(rows: &[MatchupRow], path: &Path) -> anyhow::Result<()> {
    let mut out = String::from("type1,type2,count");
    for attacking in Type::ALL {
        out.push(',');
        out.push_str(attacking.name());
    }
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{},{}",
            row.primary,
            row.secondary.map(|s| s.name()).unwrap_or(""),
            row.count
        ));
        for value in row.multipliers.values() {
            out.push_str(&format!(",{value}"));
        }
        out.push('\n');
    }
    std::fs::write(path, out)?;
    Ok(())
}
