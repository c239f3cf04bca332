//! Lead scoring for the BezHandlowca CRM
//!
//! Computes the lead score (0-100) from a lead's qualification answers:
//! - Budget, Timeline, Company Size and Decision Role via ranked point tables
//! - Pain Points at 2 points each, capped at 10
//!
//! and maps the score to a recommendation bucket (hot, warm, cold, nurture).

pub mod lead_score;
pub mod qualification;
pub mod recommendation;
pub mod tables;

pub use lead_score::{LeadScore, LeadScorer, ScoreBreakdown};
pub use qualification::{LeadQualification, LeadType};
pub use recommendation::{Recommendation, UnknownRecommendation};
