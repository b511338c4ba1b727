use serde::{Deserialize, Serialize};

/// Severity of a finding. `Info` findings never reduce the risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Info,
}

impl RiskLevel {
    pub fn tag(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Info => "info",
        }
    }
}

/// One risk item reported by the analyzer.
///
/// `clause` is the best-effort excerpt from the source text that
/// triggered the rule; ids are a contiguous 1-based sequence in rule
/// evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub clause: String,
    pub risk: RiskLevel,
    pub suggestion: String,
}

/// Aggregate analysis output.
///
/// `findings` is never empty; `risk_score` is always within 0..=100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub findings: Vec<Finding>,
    pub risk_score: u8,
}
