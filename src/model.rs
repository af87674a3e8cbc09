use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    /// Accepts both the short stat ids and the dataset column names.
    pub fn from_name(name: &str) -> Option<Stat> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hp" => Some(Stat::Hp),
            "atk" | "attack" => Some(Stat::Atk),
            "def" | "defense" => Some(Stat::Def),
            "spa" | "sp_atk" | "spatk" => Some(Stat::Spa),
            "spd" | "sp_def" | "spdef" => Some(Stat::Spd),
            "spe" | "speed" => Some(Stat::Spe),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Atk => "attack",
            Stat::Def => "defense",
            Stat::Spa => "sp_atk",
            Stat::Spd => "sp_def",
            Stat::Spe => "speed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl Stats {
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn total(&self) -> u16 {
        self.hp + self.atk + self.def + self.spa + self.spd + self.spe
    }
}

/// Tournament circuits the usage columns are reported for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Format {
    Smogon,
    Worlds,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Format> {
        match name.trim().to_ascii_lowercase().as_str() {
            "smogon" => Some(Format::Smogon),
            "worlds" => Some(Format::Worlds),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Smogon => "Smogon",
            Format::Worlds => "Worlds",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct UsageKey {
    pub format: Format,
    pub year: u16,
}

/// One creature row from the competitive dataset. Built once at load time and
/// never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Creature {
    pub name: String,
    pub primary_type: Type,
    pub secondary_type: Option<Type>,
    pub stats: Stats,
    pub total_stats: u16,
    pub generation: u8,
    pub usage: HashMap<UsageKey, f64>,
}

impl Creature {
    /// The creature's 1-2 defending types in slot order.
    pub fn typing(&self) -> Vec<Type> {
        let mut types = vec![self.primary_type];
        if let Some(secondary) = self.secondary_type {
            types.push(secondary);
        }
        types
    }

    /// Secondary type with a duplicate of the primary collapsed away, for
    /// callers that treat `Water/Water` as plain `Water`.
    pub fn distinct_secondary(&self) -> Option<Type> {
        self.secondary_type.filter(|s| *s != self.primary_type)
    }

    pub fn usage(&self, format: Format, year: u16) -> Option<f64> {
        self.usage.get(&UsageKey { format, year }).copied()
    }
}

/// On-disk team selection: up to six slots, empty slots as `null`.
#[derive(Debug, Deserialize)]
pub struct TeamFile {
    pub slots: Vec<Option<String>>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}
