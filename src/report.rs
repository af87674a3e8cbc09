use crate::analysis::{SecondaryBreakdown, StatBin, StreamSeries};
use crate::types::{Type, TypeTable};
use crate::usage::RankedUsage;

fn type_header(prefix: &str) -> String {
    let mut out = String::from(prefix);
    for t in Type::ALL {
        out.push(',');
        out.push_str(t.name());
    }
    out.push('\n');
    out
}

/// `type,multiplier` rows for a single defensive profile.
pub fn profile_csv(profile: &TypeTable<f32>) -> String {
    let mut out = String::from("type,multiplier\n");
    for (t, value) in profile.iter() {
        out.push_str(&format!("{t},{value}\n"));
    }
    out
}

/// `type,net_score` rows for a team spread.
pub fn spread_csv(spread: &TypeTable<i32>) -> String {
    let mut out = String::from("type,net_score\n");
    for (t, score) in spread.iter() {
        out.push_str(&format!("{t},{score}\n"));
    }
    out
}

/// One row per primary type with the secondary-slot census.
pub fn distribution_csv(distribution: &TypeTable<SecondaryBreakdown>) -> String {
    let mut out = type_header("primary,total,mono,same");
    for (primary, breakdown) in distribution.iter() {
        out.push_str(&format!(
            "{primary},{},{},{}",
            breakdown.total, breakdown.mono, breakdown.same
        ));
        for count in breakdown.by_secondary.values() {
            out.push_str(&format!(",{count}"));
        }
        out.push('\n');
    }
    out
}

pub fn histogram_csv(bins: &[StatBin]) -> String {
    let mut out = String::from("lower,upper,count,exemplar\n");
    for bin in bins {
        out.push_str(&format!(
            "{},{},{},{}\n",
            bin.lower,
            bin.upper,
            bin.count,
            bin.exemplar.as_deref().unwrap_or("")
        ));
    }
    out
}

pub fn stream_csv(series: &[StreamSeries]) -> String {
    let mut out = type_header("generation");
    for row in series {
        out.push_str(&format!("{}", row.generation));
        for value in row.usage.values() {
            out.push_str(&format!(",{value}"));
        }
        out.push('\n');
    }
    out
}

pub fn top_usage_csv(entries: &[RankedUsage<'_>]) -> String {
    let mut out = String::from("rank,name,usage,type1,type2,total_stats\n");
    for (rank, entry) in entries.iter().enumerate() {
        let (type1, type2, total) = match entry.creature {
            Some(creature) => (
                creature.primary_type.name(),
                creature.secondary_type.map(|t| t.name()).unwrap_or(""),
                creature.total_stats.to_string(),
            ),
            None => ("", "", String::new()),
        };
        out.push_str(&format!(
            "{},{},{},{type1},{type2},{total}\n",
            rank + 1,
            entry.name,
            entry.usage
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::defensive_profile;

    #[test]
    fn profile_csv_lists_all_types() {
        let csv = profile_csv(&defensive_profile(&[Type::Water, Type::Ground]));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1 + 18);
        assert_eq!(lines[0], "type,multiplier");
        assert!(lines.contains(&"Electric,0"));
        assert!(lines.contains(&"Grass,4"));
    }

    #[test]
    fn spread_csv_shape() {
        let mut spread = TypeTable::<i32>::default();
        spread[Type::Rock] = 2;
        let csv = spread_csv(&spread);
        assert!(csv.starts_with("type,net_score\n"));
        assert!(csv.contains("Rock,2\n"));
        assert!(csv.contains("Fairy,0\n"));
    }

    #[test]
    fn stream_csv_header_carries_type_columns() {
        let csv = stream_csv(&[]);
        assert!(csv.starts_with("generation,Normal,"));
        assert!(csv.trim_end().ends_with(",Fairy"));
    }
}
