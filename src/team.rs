use crate::dataset::Dataset;
use crate::model::{Creature, TeamFile};
use crate::profile::classify;
use crate::types::TypeTable;
use anyhow::Result;

pub const TEAM_SIZE: usize = 6;

/// An ordered team selection of up to six creature names. Slots are edited
/// one user action at a time; every derived table is recomputed from scratch
/// afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Team {
    slots: [Option<String>; TEAM_SIZE],
}

impl Team {
    pub fn new() -> Self {
        Team::default()
    }

    /// Fills the first empty slot. Returns false when the team is full.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(name.into());
                true
            }
            None => false,
        }
    }

    /// Empties a slot, returning the name that occupied it.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        self.slots.get_mut(index).and_then(|slot| slot.take())
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        if a < TEAM_SIZE && b < TEAM_SIZE {
            self.slots.swap(a, b);
        }
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    pub fn slots(&self) -> &[Option<String>; TEAM_SIZE] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Resolves filled slots against the dataset. Names missing from the
    /// dataset are ignored, like empty slots.
    pub fn members<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Creature> {
        self.slots
            .iter()
            .flatten()
            .filter_map(|name| dataset.get(name))
            .collect()
    }

    pub fn net_spread(&self, dataset: &Dataset) -> TypeTable<i32> {
        net_spread(&self.members(dataset))
    }

    pub fn type_counts(&self, dataset: &Dataset) -> TypeTable<usize> {
        type_counts(&self.members(dataset))
    }

    pub fn from_file(file: TeamFile) -> Result<Team> {
        if file.slots.len() > TEAM_SIZE {
            anyhow::bail!(
                "Team file has {} slots, expected at most {TEAM_SIZE}",
                file.slots.len()
            );
        }
        let mut team = Team::new();
        for (idx, slot) in file.slots.into_iter().enumerate() {
            team.slots[idx] = slot.filter(|name| !name.trim().is_empty());
        }
        Ok(team)
    }
}

/// Net weakness/resistance score per attacking type across a team. Each
/// member contributes +1 where its combined multiplier is above 1, -1 where
/// it is below 1 or an outright immunity, and 0 when neutral; the full-team
/// range is [-6, +6].
pub fn net_spread(members: &[&Creature]) -> TypeTable<i32> {
    let mut spread = TypeTable::<i32>::default();
    for member in members {
        let profile = member.defensive_profile();
        for (attacking, &multiplier) in profile.iter() {
            spread[attacking] += classify(multiplier).score();
        }
    }
    spread
}

/// How many team members carry each type. A secondary type counts only when
/// it differs from the primary.
pub fn type_counts(members: &[&Creature]) -> TypeTable<usize> {
    let mut counts = TypeTable::<usize>::default();
    for member in members {
        counts[member.primary_type] += 1;
        if let Some(secondary) = member.distinct_secondary() {
            counts[secondary] += 1;
        }
    }
    counts
}
