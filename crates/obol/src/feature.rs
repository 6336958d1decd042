use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Paid features and their credit cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    BirthChart,
    PartnerChart,
    ChartAnalysis,
    SoulmateAnalysis,
    Compatibility,
    SoulmateSketch,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::BirthChart,
        Feature::PartnerChart,
        Feature::ChartAnalysis,
        Feature::SoulmateAnalysis,
        Feature::Compatibility,
        Feature::SoulmateSketch,
    ];

    pub fn cost(self) -> u32 {
        match self {
            Feature::BirthChart => 1,
            Feature::PartnerChart => 2,
            Feature::ChartAnalysis => 3,
            Feature::SoulmateAnalysis => 4,
            Feature::Compatibility => 5,
            Feature::SoulmateSketch => 6,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Feature::BirthChart => "birth_chart",
            Feature::PartnerChart => "partner_chart",
            Feature::ChartAnalysis => "chart_analysis",
            Feature::SoulmateAnalysis => "soulmate_analysis",
            Feature::Compatibility => "compatibility",
            Feature::SoulmateSketch => "soulmate_sketch",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown feature: {name}. Valid features: {valid:?}")]
pub struct UnknownFeature {
    pub name: String,
    pub valid: Vec<String>,
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Feature::ALL
            .iter()
            .copied()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| UnknownFeature {
                name: s.to_string(),
                valid: Feature::ALL.iter().map(|f| f.id().to_string()).collect(),
            })
    }
}
