use once_cell::sync::Lazy;
use phf::phf_map;
use std::fmt;
use std::ops::{Index, IndexMut};

/// The 18 elemental types. A missing secondary type is `Option<Type>::None`
/// throughout the crate; unknown type strings normalize to `None` as well.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

pub const TYPE_COUNT: usize = 18;

static TYPE_BY_NAME: phf::Map<&'static str, Type> = phf_map! {
    "normal" => Type::Normal,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "electric" => Type::Electric,
    "grass" => Type::Grass,
    "ice" => Type::Ice,
    "fighting" => Type::Fighting,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "flying" => Type::Flying,
    "psychic" => Type::Psychic,
    "bug" => Type::Bug,
    "rock" => Type::Rock,
    "ghost" => Type::Ghost,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "steel" => Type::Steel,
    "fairy" => Type::Fairy,
};

impl Type {
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Case-insensitive lookup. Empty strings, `No_type` markers and anything
    /// else that is not one of the 18 types return `None`.
    pub fn from_name(name: &str) -> Option<Type> {
        TYPE_BY_NAME.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-size table with one slot per type, indexed by `Type`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeTable<T>([T; TYPE_COUNT]);

impl<T> TypeTable<T> {
    pub fn from_fn(mut f: impl FnMut(Type) -> T) -> Self {
        TypeTable(Type::ALL.map(|t| f(t)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Type, &T)> {
        Type::ALL.iter().copied().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Copy> TypeTable<T> {
    pub fn filled(value: T) -> Self {
        TypeTable([value; TYPE_COUNT])
    }
}

impl<T: Copy + Default> Default for TypeTable<T> {
    fn default() -> Self {
        TypeTable::filled(T::default())
    }
}

impl<T> Index<Type> for TypeTable<T> {
    type Output = T;

    fn index(&self, t: Type) -> &T {
        &self.0[t.index()]
    }
}

impl<T> IndexMut<Type> for TypeTable<T> {
    fn index_mut(&mut self, t: Type) -> &mut T {
        &mut self.0[t.index()]
    }
}

// Multipliers from the standard attacker -> defender chart; pairs not listed
// are neutral (1x).
fn single_effectiveness(attacking: Type, defending: Type) -> f32 {
    use Type::*;
    match attacking {
        Normal => match defending {
            Rock | Steel => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Fire => match defending {
            Fire | Water | Rock | Dragon => 0.5,
            Grass | Ice | Bug | Steel => 2.0,
            _ => 1.0,
        },
        Water => match defending {
            Water | Grass | Dragon => 0.5,
            Fire | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Electric => match defending {
            Electric | Grass | Dragon => 0.5,
            Water | Flying => 2.0,
            Ground => 0.0,
            _ => 1.0,
        },
        Grass => match defending {
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => 0.5,
            Water | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Ice => match defending {
            Fire | Water | Ice | Steel => 0.5,
            Grass | Ground | Flying | Dragon => 2.0,
            _ => 1.0,
        },
        Fighting => match defending {
            Normal | Ice | Rock | Dark | Steel => 2.0,
            Poison | Flying | Psychic | Bug | Fairy => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Poison => match defending {
            Grass | Fairy => 2.0,
            Poison | Ground | Rock | Ghost => 0.5,
            Steel => 0.0,
            _ => 1.0,
        },
        Ground => match defending {
            Fire | Electric | Poison | Rock | Steel => 2.0,
            Grass | Bug => 0.5,
            Flying => 0.0,
            _ => 1.0,
        },
        Flying => match defending {
            Grass | Fighting | Bug => 2.0,
            Electric | Rock | Steel => 0.5,
            _ => 1.0,
        },
        Psychic => match defending {
            Fighting | Poison => 2.0,
            Psychic | Steel => 0.5,
            Dark => 0.0,
            _ => 1.0,
        },
        Bug => match defending {
            Grass | Psychic | Dark => 2.0,
            Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy => 0.5,
            _ => 1.0,
        },
        Rock => match defending {
            Fire | Ice | Flying | Bug => 2.0,
            Fighting | Ground | Steel => 0.5,
            _ => 1.0,
        },
        Ghost => match defending {
            Ghost | Psychic => 2.0,
            Dark => 0.5,
            Normal => 0.0,
            _ => 1.0,
        },
        Dragon => match defending {
            Dragon => 2.0,
            Steel => 0.5,
            Fairy => 0.0,
            _ => 1.0,
        },
        Dark => match defending {
            Psychic | Ghost => 2.0,
            Fighting | Dark | Fairy => 0.5,
            _ => 1.0,
        },
        Steel => match defending {
            Rock | Ice | Fairy => 2.0,
            Fire | Water | Electric | Steel => 0.5,
            _ => 1.0,
        },
        Fairy => match defending {
            Fighting | Dragon | Dark => 2.0,
            Fire | Poison | Steel => 0.5,
            _ => 1.0,
        },
    }
}

static CHART: Lazy<[[f32; TYPE_COUNT]; TYPE_COUNT]> = Lazy::new(|| {
    let mut chart = [[1.0; TYPE_COUNT]; TYPE_COUNT];
    for attacking in Type::ALL {
        for defending in Type::ALL {
            chart[attacking.index()][defending.index()] =
                single_effectiveness(attacking, defending);
        }
    }
    chart
});

pub fn effectiveness(attacking: Type, defending: Type) -> f32 {
    CHART[attacking.index()][defending.index()]
}

/// Combined multiplier against a one- or two-type defender. Dual-typed
/// multipliers stack multiplicatively, so a secondary equal to the primary
/// would square the single-type value.
pub fn dual_effectiveness(attacking: Type, primary: Type, secondary: Option<Type>) -> f32 {
    let mut multiplier = effectiveness(attacking, primary);
    if let Some(secondary) = secondary {
        multiplier *= effectiveness(attacking, secondary);
    }
    multiplier
}
