use crate::model::Creature;
use crate::types::{effectiveness, Type, TypeTable};

/// How a single incoming-damage multiplier reads for team-coverage purposes.
/// Immunities and resistances are deliberately counted the same: the spread
/// measures breadth of coverage, not damage magnitude.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Weak,
    Neutral,
    Resist,
}

impl Verdict {
    pub fn score(self) -> i32 {
        match self {
            Verdict::Weak => 1,
            Verdict::Neutral => 0,
            Verdict::Resist => -1,
        }
    }
}

pub fn classify(multiplier: f32) -> Verdict {
    if multiplier > 1.0 {
        Verdict::Weak
    } else if multiplier < 1.0 {
        Verdict::Resist
    } else {
        Verdict::Neutral
    }
}

/// Incoming-damage multiplier per attacking type for a defender with the
/// given types. Each defending type multiplies in independently, so dual
/// typings stack (2x and 2x give 4x, 2x and 0.5x cancel) and an empty slice
/// yields the all-neutral profile.
pub fn defensive_profile(defending: &[Type]) -> TypeTable<f32> {
    TypeTable::from_fn(|attacking| {
        defending
            .iter()
            .fold(1.0, |acc, &d| acc * effectiveness(attacking, d))
    })
}

impl Creature {
    pub fn defensive_profile(&self) -> TypeTable<f32> {
        defensive_profile(&self.typing())
    }
}
