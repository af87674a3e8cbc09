use pokemon_meta_stats::dataset::Dataset;
use pokemon_meta_stats::model::{Creature, Stats, TeamFile};
use pokemon_meta_stats::profile::{classify, defensive_profile, Verdict};
use pokemon_meta_stats::team::{net_spread, Team};
use pokemon_meta_stats::types::{effectiveness, Type};
use std::collections::HashMap;

fn make_creature(name: &str, primary: Type, secondary: Option<Type>) -> Creature {
    Creature {
        name: name.to_string(),
        primary_type: primary,
        secondary_type: secondary,
        stats: Stats { hp: 80, atk: 80, def: 80, spa: 80, spd: 80, spe: 80 },
        total_stats: 480,
        generation: 3,
        usage: HashMap::new(),
    }
}

fn sample_dataset() -> Dataset {
    Dataset::from_creatures(vec![
        make_creature("swampert", Type::Water, Some(Type::Ground)),
        make_creature("charizard", Type::Fire, Some(Type::Flying)),
        make_creature("ferrothorn", Type::Grass, Some(Type::Steel)),
        make_creature("gengar", Type::Ghost, Some(Type::Poison)),
        make_creature("tyranitar", Type::Rock, Some(Type::Dark)),
        make_creature("snorlax", Type::Normal, None),
    ])
}

#[test]
fn water_ground_member_is_immune_to_electric() {
    let profile = defensive_profile(&[Type::Water, Type::Ground]);
    assert_eq!(profile[Type::Electric], 0.0);
    assert_eq!(classify(profile[Type::Electric]), Verdict::Resist);

    let member = make_creature("swampert", Type::Water, Some(Type::Ground));
    let spread = net_spread(&[&member]);
    assert_eq!(spread[Type::Electric], -1);
}

#[test]
fn fire_flying_member_is_doubly_weak_to_rock_but_counts_once() {
    let profile = defensive_profile(&[Type::Fire, Type::Flying]);
    assert_eq!(profile[Type::Rock], 4.0);

    let member = make_creature("charizard", Type::Fire, Some(Type::Flying));
    let spread = net_spread(&[&member]);
    assert_eq!(spread[Type::Rock], 1);
}

#[test]
fn monotype_profile_equals_the_chart_column() {
    let profile = defensive_profile(&[Type::Ghost]);
    for attacking in Type::ALL {
        assert_eq!(profile[attacking], effectiveness(attacking, Type::Ghost));
    }
}

#[test]
fn duplicated_typing_squares_the_chart_column() {
    let profile = defensive_profile(&[Type::Ghost, Type::Ghost]);
    for attacking in Type::ALL {
        let single = effectiveness(attacking, Type::Ghost);
        assert_eq!(profile[attacking], single * single);
    }
}

#[test]
fn full_team_spread_stays_in_range() {
    let dataset = sample_dataset();
    let mut team = Team::new();
    for name in ["swampert", "charizard", "ferrothorn", "gengar", "tyranitar", "snorlax"] {
        assert!(team.add(name));
    }
    let spread = team.net_spread(&dataset);
    for (_, &score) in spread.iter() {
        assert!((-6..=6).contains(&score));
    }
    // Two resists and one weakness net out to -1 against Electric.
    assert_eq!(spread[Type::Electric], -1);
}

#[test]
fn spread_is_the_sum_of_member_contributions() {
    let dataset = sample_dataset();
    let mut team = Team::new();
    team.add("swampert");
    team.add("ferrothorn");
    let spread = team.net_spread(&dataset);

    let members = team.members(&dataset);
    let mut expected = 0;
    for member in &members {
        expected += classify(member.defensive_profile()[Type::Fire]).score();
    }
    assert_eq!(spread[Type::Fire], expected);
}

#[test]
fn add_then_remove_round_trips_the_spread() {
    let dataset = sample_dataset();
    let mut team = Team::new();
    team.add("gengar");
    team.add("tyranitar");
    let before = team.net_spread(&dataset);

    team.add("charizard");
    assert_ne!(team.net_spread(&dataset), before);
    team.remove(2);
    assert_eq!(team.net_spread(&dataset), before);
}

#[test]
fn reordering_slots_never_moves_the_spread() {
    let dataset = sample_dataset();
    let mut team = Team::new();
    team.add("swampert");
    team.add("gengar");
    team.add("snorlax");
    let spread = team.net_spread(&dataset);
    team.swap(0, 2);
    team.swap(1, 0);
    assert_eq!(team.net_spread(&dataset), spread);
}

#[test]
fn team_files_parse_with_null_slots() {
    let raw = r#"{"slots": ["swampert", null, "gengar", null, null, null]}"#;
    let file: TeamFile = serde_json::from_str(raw).expect("team json parses");
    let team = Team::from_file(file).expect("six slots fit");
    assert_eq!(team.len(), 2);

    let dataset = sample_dataset();
    let members = team.members(&dataset);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "swampert");
}

#[test]
fn oversized_team_files_are_rejected() {
    let raw = r#"{"slots": ["a", "b", "c", "d", "e", "f", "g"]}"#;
    let file: TeamFile = serde_json::from_str(raw).expect("json parses");
    assert!(Team::from_file(file).is_err());
}
