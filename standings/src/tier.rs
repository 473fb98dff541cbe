use serde::Serialize;
use std::fmt;

/// Ranks below this one are on the podium and get the highlighted styling.
pub const PODIUM_SIZE: usize = 3;
/// Ranks below this one are shown with their avatar picture.
pub const AVATAR_CUTOFF: usize = 10;

/// Cosmetic grouping of ranks, used for the label under a student's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Tier {
    BigThree,
    Elite,
    Champion,
    Warrior,
}

impl Tier {
    /// Tier of a zero-based rank.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0..=2 => Self::BigThree,
            3..=5 => Self::Elite,
            6..=9 => Self::Champion,
            _ => Self::Warrior,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BigThree => "Big Three",
            Self::Elite => "Elite",
            Self::Champion => "Champion",
            Self::Warrior => "Warrior",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge drawn next to a student's avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankIcon {
    Crown,
    SilverMedal,
    BronzeMedal,
    Trophy,
}

impl RankIcon {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0 => Self::Crown,
            1 => Self::SilverMedal,
            2 => Self::BronzeMedal,
            _ => Self::Trophy,
        }
    }

    /// Icon family, without the medal colour.
    pub fn name(self) -> &'static str {
        match self {
            Self::Crown => "crown",
            Self::SilverMedal | Self::BronzeMedal => "medal",
            Self::Trophy => "trophy",
        }
    }
}

pub fn is_podium(rank: usize) -> bool {
    rank < PODIUM_SIZE
}

pub fn shows_avatar(rank: usize) -> bool {
    rank < AVATAR_CUTOFF
}
