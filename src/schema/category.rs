//! Registration categories

use crate::error::UnknownCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registration type selecting which fields apply
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Mas band
    #[default]
    PrimaryPerformanceGroup,
    SoundSystem,
    /// Steelband
    PercussionBand,
    /// Brazilian band
    SecondaryPerformanceGroup,
    /// Contractor requesting a vehicle pass
    VehicleContractor,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 5] = [
        Category::PrimaryPerformanceGroup,
        Category::SoundSystem,
        Category::PercussionBand,
        Category::SecondaryPerformanceGroup,
        Category::VehicleContractor,
    ];

    /// Stable identifier used in payloads and config
    pub fn id(&self) -> &'static str {
        match self {
            Self::PrimaryPerformanceGroup => "primary-performance-group",
            Self::SoundSystem => "sound-system",
            Self::PercussionBand => "percussion-band",
            Self::SecondaryPerformanceGroup => "secondary-performance-group",
            Self::VehicleContractor => "vehicle-contractor",
        }
    }

    /// Human readable name shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrimaryPerformanceGroup => "Mas Band",
            Self::SoundSystem => "Sound System",
            Self::PercussionBand => "Steelband",
            Self::SecondaryPerformanceGroup => "Brazilian Band",
            Self::VehicleContractor => "Contractor",
        }
    }

    /// Position in the selector (0-based)
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
