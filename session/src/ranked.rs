use serde::{Deserialize, Serialize};
use tripick_core::Level;

use crate::{Powerup, Result, SessionError};

/// Ranked difficulty tiers; each defines its own level run and powerup
/// budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankTier {
    Easy,
    Medium,
    Hard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RankConfig {
    /// Target levels cleared in order; the last one decides the victory.
    pub levels: &'static [Level],
    pub score_per_match: u32,
    pub pop: u32,
    pub wash: u32,
    pub undo: u32,
}

impl RankTier {
    pub const fn config(self) -> RankConfig {
        match self {
            Self::Easy => RankConfig {
                levels: &[1, 2, 3],
                score_per_match: 3,
                pop: 0,
                wash: 1,
                undo: 15,
            },
            Self::Medium => RankConfig {
                levels: &[3, 4, 5],
                score_per_match: 6,
                pop: 0,
                wash: 3,
                undo: 20,
            },
            Self::Hard => RankConfig {
                levels: &[6, 7, 8, 9],
                score_per_match: 9,
                pop: 0,
                wash: 3,
                undo: 30,
            },
        }
    }
}

/// Remaining uses of one powerup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Budget {
    Unlimited,
    Limited(u32),
}

impl Budget {
    pub fn try_spend(&mut self, kind: Powerup) -> Result<()> {
        match self {
            Self::Unlimited => Ok(()),
            Self::Limited(0) => Err(SessionError::AllowanceExhausted(kind)),
            Self::Limited(left) => {
                *left -= 1;
                Ok(())
            }
        }
    }

    /// `None` means unlimited.
    pub const fn remaining(&self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Limited(left) => Some(*left),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Allowances {
    pub pop: Budget,
    pub wash: Budget,
    pub undo: Budget,
}

impl Allowances {
    pub const fn unlimited() -> Self {
        Self {
            pop: Budget::Unlimited,
            wash: Budget::Unlimited,
            undo: Budget::Unlimited,
        }
    }

    pub const fn from_config(config: &RankConfig) -> Self {
        Self {
            pop: Budget::Limited(config.pop),
            wash: Budget::Limited(config.wash),
            undo: Budget::Limited(config.undo),
        }
    }
}
