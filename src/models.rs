use serde::{Deserialize, Serialize};

/// One classified ingredient, ready for rendering. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub status: SafetyStatus,
    pub description: String,
    pub source: VerdictSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Harmful,
    /// Reserved for ingredients flagged ambiguous by an upstream source;
    /// never derived from the denylist alone.
    Neutral,
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyStatus::Safe => write!(f, "safe"),
            SafetyStatus::Harmful => write!(f, "harmful"),
            SafetyStatus::Neutral => write!(f, "neutral"),
        }
    }
}

/// Which classification strategy produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSource {
    Local,
    Remote,
}

impl std::fmt::Display for VerdictSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictSource::Local => write!(f, "local"),
            VerdictSource::Remote => write!(f, "remote"),
        }
    }
}

/// Aggregate counts over a list of [`Ingredient`] verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub harmful: usize,
    pub safe: usize,
    pub neutral: usize,
}

impl AnalysisSummary {
    /// A product is considered safe overall when nothing harmful was found.
    pub fn overall_safe(&self) -> bool {
        self.harmful == 0
    }
}
