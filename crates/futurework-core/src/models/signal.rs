use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::fmt;

use super::Status;

/// An auto-detected short-form item about an AI / software-work development
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Where the signal was picked up (feed, publication, "Auto-Detected")
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// When the scanner picked it up (RFC 3339)
    pub detected_at: String,
    /// Display date (YYYY-MM-DD)
    pub date: String,
    pub status: Status,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub category: Option<SignalCategory>,
    #[serde(default)]
    pub why_it_matters: Vec<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    #[serde(default)]
    pub risks_and_caveats: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub decision_horizon: Option<DecisionHorizon>,
}

/// Unrecognised or malformed tag values read as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalCategory {
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    #[serde(rename = "Workforce & Skills")]
    WorkforceSkills,
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Policy & Regulation")]
    PolicyRegulation,
    #[serde(rename = "Industry Adoption")]
    IndustryAdoption,
}

impl SignalCategory {
    pub const ALL: [SignalCategory; 5] = [
        Self::DeveloperTools,
        Self::WorkforceSkills,
        Self::Research,
        Self::PolicyRegulation,
        Self::IndustryAdoption,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DeveloperTools => "Developer Tools",
            Self::WorkforceSkills => "Workforce & Skills",
            Self::Research => "Research",
            Self::PolicyRegulation => "Policy & Regulation",
            Self::IndustryAdoption => "Industry Adoption",
        }
    }

    /// Step through "no filter" followed by every category, wrapping around
    pub fn cycle_next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(category) => {
                let idx = Self::ALL.iter().position(|c| *c == category).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse bucket for when a signal's implications become actionable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionHorizon {
    #[serde(rename = "2026")]
    Now,
    #[serde(rename = "2027-2028")]
    NearTerm,
    #[serde(rename = "2029+")]
    LongTerm,
}

impl DecisionHorizon {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Now => "2026",
            Self::NearTerm => "2027-2028",
            Self::LongTerm => "2029+",
        }
    }
}

impl fmt::Display for DecisionHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
