use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordinal risk classification derived from aggregated signals.
///
/// One scale, two namings: the clinical naming (`low`, `moderate`, `high`)
/// used in snapshots and reports, and the alerting naming (`normal`,
/// `attention`, `urgent`) used on the caregiver notification path. Both
/// deserialize to the same variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    #[serde(alias = "normal")]
    Low,
    #[serde(alias = "attention")]
    Moderate,
    #[serde(alias = "urgent")]
    High,
}

/// Which set of names to present a [`RiskLevel`] with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskNaming {
    #[default]
    Clinical,
    Alerting,
}

impl RiskLevel {
    /// Average score at or above which risk is [`RiskLevel::Low`].
    pub const LOW_THRESHOLD: f64 = 0.7;
    /// Average score at or above which risk is at most [`RiskLevel::Moderate`].
    pub const MODERATE_THRESHOLD: f64 = 0.4;

    /// Classify an average signal score. Lower scores mean higher risk.
    pub fn from_average(average: f64) -> Self {
        if average >= Self::LOW_THRESHOLD {
            RiskLevel::Low
        } else if average >= Self::MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn clinical_name(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }

    pub fn alert_name(self) -> &'static str {
        match self {
            RiskLevel::Low => "normal",
            RiskLevel::Moderate => "attention",
            RiskLevel::High => "urgent",
        }
    }

    pub fn name(self, naming: RiskNaming) -> &'static str {
        match naming {
            RiskNaming::Clinical => self.clinical_name(),
            RiskNaming::Alerting => self.alert_name(),
        }
    }
}

/// Serde adapter that writes a [`RiskLevel`] with the alerting naming.
/// Either naming is accepted on read.
pub mod alerting_name {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::RiskLevel;

    pub fn serialize<S: Serializer>(level: &RiskLevel, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(level.alert_name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RiskLevel, D::Error> {
        RiskLevel::deserialize(deserializer)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clinical_name())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "normal" => Ok(RiskLevel::Low),
            "moderate" | "attention" => Ok(RiskLevel::Moderate),
            "high" | "urgent" => Ok(RiskLevel::High),
            other => Err(CoreError::InvalidRiskLevel(other.to_string())),
        }
    }
}
