//! Lead Score Calculator
//!
//! Calculates a score from 0-100 for each lead so sales can triage
//! which prospects to call first.
//!
//! Score Components:
//! - Budget (0-30): How much the prospect can spend
//! - Timeline (0-20): How soon they intend to buy
//! - Size/Type (0-25): Company headcount, or a flat 8 for private individuals
//! - Decision Role (0-15): How much say the contact has
//! - Pain Points (0-10): 2 points per distinct declared problem

use serde::Serialize;

use crate::{
    qualification::{LeadQualification, LeadType},
    recommendation::Recommendation,
    tables::{
        self, PointTable, BUDGET_POINTS, COMPANY_SIZE_POINTS, DECISION_MAKER_POINTS,
        MAX_PAIN_POINT_POINTS, MAX_SCORE, POINTS_PER_PAIN_POINT, PRIVATE_LEAD_POINTS,
        TIMELINE_POINTS,
    },
};

/// Result of lead score calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadScore {
    /// Total score (0-100)
    pub total: u8,
    pub recommendation: Recommendation,
    /// One entry per factor, in evaluation order
    pub breakdown: Vec<ScoreBreakdown>,
}

/// Individual score component breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub name: String,
    pub score: u8,
    pub max_score: u8,
    pub reason: String,
}

/// Lead score calculator
pub struct LeadScorer;

impl LeadScorer {
    /// Score a lead with the per-factor breakdown
    /// Budget (0-30) + Timeline (0-20) + Size/Type (0-25) + Role (0-15) + Pain Points (0-10)
    pub fn score(lead: &LeadQualification) -> LeadScore {
        let breakdown = vec![
            Self::budget_factor(lead),
            Self::timeline_factor(lead),
            Self::size_factor(lead),
            Self::decision_role_factor(lead),
            Self::pain_point_factor(lead),
        ];

        let sum: u16 = breakdown.iter().map(|factor| factor.score as u16).sum();
        let total = sum.min(MAX_SCORE as u16) as u8;

        LeadScore {
            total,
            recommendation: Self::recommendation_for(total),
            breakdown,
        }
    }

    /// Calculate the lead score (0-100)
    pub fn compute_score(lead: &LeadQualification) -> u8 {
        Self::score(lead).total
    }

    /// Get the triage bucket for a score
    pub fn recommendation_for(score: u8) -> Recommendation {
        Recommendation::from_score(score)
    }

    fn budget_factor(lead: &LeadQualification) -> ScoreBreakdown {
        let budget = lead.budget.as_deref();
        let reason = match tables::lookup(BUDGET_POINTS, budget) {
            Some(_) => format!("Budget {} PLN", budget.unwrap_or_default()),
            None => Self::miss_reason("budget", budget),
        };

        ScoreBreakdown {
            name: "Budget".to_string(),
            score: tables::points_for(BUDGET_POINTS, budget),
            max_score: tables::max_points(BUDGET_POINTS),
            reason,
        }
    }

    fn timeline_factor(lead: &LeadQualification) -> ScoreBreakdown {
        let timeline = lead.timeline.as_deref();
        let reason = match tables::lookup(TIMELINE_POINTS, timeline) {
            Some(_) => format!("Purchase timeline: {}", timeline.unwrap_or_default()),
            None => Self::miss_reason("timeline", timeline),
        };

        ScoreBreakdown {
            name: "Timeline".to_string(),
            score: tables::points_for(TIMELINE_POINTS, timeline),
            max_score: tables::max_points(TIMELINE_POINTS),
            reason,
        }
    }

    /// Companies score by headcount bracket, private individuals get a flat
    /// contribution and anything else scores nothing
    fn size_factor(lead: &LeadQualification) -> ScoreBreakdown {
        let max_score = tables::max_points(COMPANY_SIZE_POINTS).max(PRIVATE_LEAD_POINTS);

        let (score, reason) = match &lead.lead_type {
            Some(LeadType::Company) => {
                let size = lead.company_size.as_deref();
                match tables::lookup(COMPANY_SIZE_POINTS, size) {
                    Some(points) => (
                        points,
                        format!("Company with {} employees", size.unwrap_or_default()),
                    ),
                    None => (0, Self::miss_reason("company size", size)),
                }
            }
            Some(LeadType::Private) => (
                PRIVATE_LEAD_POINTS,
                "Private individual (flat score)".to_string(),
            ),
            Some(LeadType::Other(raw)) => (0, Self::miss_reason("lead type", Some(raw.as_str()))),
            None => (0, Self::miss_reason("lead type", None)),
        };

        ScoreBreakdown {
            name: "Size".to_string(),
            score,
            max_score,
            reason,
        }
    }

    fn decision_role_factor(lead: &LeadQualification) -> ScoreBreakdown {
        let role = lead.decision_maker.as_deref();
        let reason = match tables::lookup(DECISION_MAKER_POINTS, role) {
            Some(_) => format!("Contact role: {}", role.unwrap_or_default()),
            None => Self::miss_reason("decision role", role),
        };

        ScoreBreakdown {
            name: "Decision Role".to_string(),
            score: tables::points_for(DECISION_MAKER_POINTS, role),
            max_score: tables::max_points(DECISION_MAKER_POINTS),
            reason,
        }
    }

    fn pain_point_factor(lead: &LeadQualification) -> ScoreBreakdown {
        let count = lead.distinct_pain_points();
        // Saturates at 5 pain points
        let score = count
            .saturating_mul(POINTS_PER_PAIN_POINT as usize)
            .min(MAX_PAIN_POINT_POINTS as usize) as u8;

        ScoreBreakdown {
            name: "Pain Points".to_string(),
            score,
            max_score: MAX_PAIN_POINT_POINTS,
            reason: match count {
                0 => "No pain points declared".to_string(),
                1 => "1 pain point declared".to_string(),
                n => format!("{n} pain points declared"),
            },
        }
    }

    fn miss_reason(factor: &str, value: Option<&str>) -> String {
        match value {
            Some(raw) => {
                tracing::trace!(factor, value = raw, "unrecognized qualification value");
                format!("Unrecognized {factor} `{raw}`")
            }
            None => format!("No {factor} provided"),
        }
    }

    /// Ranked tables, exposed for qualification forms
    pub fn tables() -> [(&'static str, PointTable); 4] {
        [
            ("budget", BUDGET_POINTS),
            ("timeline", TIMELINE_POINTS),
            ("companySize", COMPANY_SIZE_POINTS),
            ("decisionMaker", DECISION_MAKER_POINTS),
        ]
    }
}
