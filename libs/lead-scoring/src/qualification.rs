//! Qualification attributes consumed by the scorer

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of prospect behind a lead
///
/// Deserializes from any string; values other than `private` and `company`
/// are kept as [`LeadType::Other`] and score nothing for the size factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadType {
    Private,
    Company,
    Other(String),
}

impl LeadType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "private" => LeadType::Private,
            "company" => LeadType::Company,
            other => LeadType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LeadType::Private => "private",
            LeadType::Company => "company",
            LeadType::Other(raw) => raw,
        }
    }
}

impl From<String> for LeadType {
    fn from(raw: String) -> Self {
        LeadType::parse(&raw)
    }
}

impl From<LeadType> for String {
    fn from(lead_type: LeadType) -> Self {
        match lead_type {
            LeadType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Qualification answers collected for a lead
///
/// Every field is optional. Bucket fields hold the raw keys sent by the CRM
/// forms; recognizing them is the scorer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQualification {
    #[serde(rename = "type", default)]
    pub lead_type: Option<LeadType>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub decision_maker: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pain_points: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl LeadQualification {
    pub fn company() -> Self {
        Self {
            lead_type: Some(LeadType::Company),
            ..Default::default()
        }
    }

    pub fn private() -> Self {
        Self {
            lead_type: Some(LeadType::Private),
            ..Default::default()
        }
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    pub fn with_company_size(mut self, company_size: impl Into<String>) -> Self {
        self.company_size = Some(company_size.into());
        self
    }

    pub fn with_decision_maker(mut self, decision_maker: impl Into<String>) -> Self {
        self.decision_maker = Some(decision_maker.into());
        self
    }

    pub fn with_pain_points<I, S>(mut self, pain_points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pain_points = pain_points.into_iter().map(Into::into).collect();
        self
    }

    /// Number of distinct, non-blank pain point tags
    pub fn distinct_pain_points(&self) -> usize {
        self.pain_points
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }
}
