use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::board::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Easy,
    Amateur,
    Professional,
    Master,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::Beginner, Tier::Easy, Tier::Amateur, Tier::Professional, Tier::Master];

    /// Opening and midgame heuristics.
    pub fn uses_phase_heuristics(self) -> bool { self >= Tier::Professional }

    /// Endgame, coordination and advanced tactics; no evaluation jitter.
    pub fn is_master(self) -> bool { self == Tier::Master }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Beginner => "beginner",
            Tier::Easy => "easy",
            Tier::Amateur => "amateur",
            Tier::Professional => "professional",
            Tier::Master => "master",
        })
    }
}

impl FromStr for Tier {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim().to_ascii_lowercase();
        Tier::ALL.into_iter().find(|t| t.to_string() == want).ok_or_else(|| ParseError::Tier(s.to_string()))
    }
}

/// How strongly the engine plays. Immutable; adjust with the `with_*` builders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthProfile {
    pub max_depth: u32,
    pub thinking_budget_secs: f64,
    pub random_move_probability: f64,
    pub tier: Tier,
}

impl StrengthProfile {
    pub const BEGINNER: Self = Self { max_depth: 1, thinking_budget_secs: 0.1, random_move_probability: 0.85, tier: Tier::Beginner };
    pub const EASY: Self = Self { max_depth: 2, thinking_budget_secs: 0.3, random_move_probability: 0.40, tier: Tier::Easy };
    pub const AMATEUR: Self = Self { max_depth: 4, thinking_budget_secs: 0.8, random_move_probability: 0.15, tier: Tier::Amateur };
    pub const PROFESSIONAL: Self = Self { max_depth: 6, thinking_budget_secs: 2.0, random_move_probability: 0.05, tier: Tier::Professional };
    pub const MASTER: Self = Self { max_depth: 15, thinking_budget_secs: 10.0, random_move_probability: 0.0, tier: Tier::Master };

    pub const fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Beginner => Self::BEGINNER,
            Tier::Easy => Self::EASY,
            Tier::Amateur => Self::AMATEUR,
            Tier::Professional => Self::PROFESSIONAL,
            Tier::Master => Self::MASTER,
        }
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self { self.max_depth = depth.max(1); self }

    pub fn with_budget(mut self, budget: Duration) -> Self { self.thinking_budget_secs = budget.as_secs_f64(); self }

    pub fn with_random_move_probability(mut self, p: f64) -> Self { self.random_move_probability = p.clamp(0.0, 1.0); self }

    /// Master always deepens iteratively under the time budget.
    pub fn uses_iterative_deepening(&self) -> bool { self.tier.is_master() }

    /// Iterative deepening stops starting new depths past 90% of the budget.
    pub fn deepening_cutoff(&self) -> Duration { Duration::from_secs_f64(self.thinking_budget_secs * 0.9) }
}

impl From<Tier> for StrengthProfile {
    fn from(t: Tier) -> Self { Self::for_tier(t) }
}
