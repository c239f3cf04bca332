//! Lead API routes
//!
//! Scores are never stored: every response recomputes them from the lead's
//! current qualification answers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crm_db::entity::lead::{Lead, LeadStatus};
use lead_scoring::{LeadQualification, LeadScore, LeadScorer, Recommendation, ScoreBreakdown};

use crate::AppState;

/// Lead list response item - lead row annotated with its score badge
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListItem {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    #[serde(rename = "type")]
    pub lead_type: Option<String>,
    pub status: String,
    pub source: Option<String>,
    pub assigned_agent: Option<String>,
    pub created_at: Option<String>,
    pub score: u8,
    pub recommendation: Recommendation,
    pub recommendation_color: String,
}

impl From<Lead> for LeadListItem {
    fn from(l: Lead) -> Self {
        let score = LeadScorer::compute_score(&l.to_qualification());
        let recommendation = LeadScorer::recommendation_for(score);

        Self {
            id: l.id,
            name: l.name,
            email: l.email,
            phone: l.phone,
            company_name: l.company_name,
            industry: l.industry,
            lead_type: l.lead_type,
            status: l.status,
            source: l.source,
            assigned_agent: l.assigned_agent,
            created_at: l.created_at.map(|dt| dt.to_rfc3339()),
            score,
            recommendation,
            recommendation_color: recommendation.color().to_string(),
        }
    }
}

/// Lead detail response - contact data, qualification answers and score breakdown
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDetail {
    pub id: i32,
    pub tenant_id: Option<i32>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub status: String,
    pub source: Option<String>,
    pub assigned_agent: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub qualification: LeadQualification,

    // Score
    pub score: u8,
    pub recommendation: Recommendation,
    pub recommendation_color: String,
    pub breakdown: Vec<ScoreBreakdown>,
}

impl From<Lead> for LeadDetail {
    fn from(l: Lead) -> Self {
        let qualification = l.to_qualification();
        let LeadScore {
            total,
            recommendation,
            breakdown,
        } = LeadScorer::score(&qualification);

        Self {
            id: l.id,
            tenant_id: l.tenant_id,
            name: l.name,
            email: l.email,
            phone: l.phone,
            company_name: l.company_name,
            industry: l.industry,
            status: l.status,
            source: l.source,
            assigned_agent: l.assigned_agent,
            created_at: l.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: l.updated_at.map(|dt| dt.to_rfc3339()),
            qualification,
            score: total,
            recommendation,
            recommendation_color: recommendation.color().to_string(),
            breakdown,
        }
    }
}

/// Score response for an ad-hoc qualification payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub score: u8,
    pub recommendation: Recommendation,
    pub recommendation_color: String,
    pub breakdown: Vec<ScoreBreakdown>,
}

impl From<LeadScore> for ScoreResponse {
    fn from(s: LeadScore) -> Self {
        Self {
            score: s.total,
            recommendation: s.recommendation,
            recommendation_color: s.recommendation.color().to_string(),
            breakdown: s.breakdown,
        }
    }
}

/// Bucket counts over a sample of leads
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub total_leads: i64,
    pub sampled: usize,
    pub average_score: f64,
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
    pub nurture: usize,
}

impl LeadSummary {
    fn from_scores(total_leads: i64, scores: &[u8]) -> Self {
        let mut summary = LeadSummary {
            total_leads,
            sampled: scores.len(),
            ..Default::default()
        };

        for score in scores {
            match LeadScorer::recommendation_for(*score) {
                Recommendation::Hot => summary.hot += 1,
                Recommendation::Warm => summary.warm += 1,
                Recommendation::Cold => summary.cold += 1,
                Recommendation::Nurture => summary.nurture += 1,
            }
        }

        if !scores.is_empty() {
            let sum: u32 = scores.iter().map(|s| *s as u32).sum();
            summary.average_score = sum as f64 / scores.len() as f64;
        }

        summary
    }
}

/// Query params for list endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListParams {
    pub limit: Option<i32>,
    pub tenant: Option<i32>,
    pub status: Option<String>,
    pub recommendation: Option<String>,
    pub min_score: Option<u8>,
    pub sort: Option<String>,
}

/// Query params for summary endpoint
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub limit: Option<i32>,
    pub tenant: Option<i32>,
}

/// Validated list filters
#[derive(Debug, PartialEq)]
struct ListFilter {
    limit: i32,
    status: Option<LeadStatus>,
    recommendation: Option<Recommendation>,
    min_score: u8,
    by_score: bool,
}

impl ListFilter {
    fn from_params(params: &LeadListParams) -> Result<Self, String> {
        let status = match params.status.as_deref() {
            Some(raw) => Some(
                LeadStatus::parse(raw).ok_or_else(|| format!("Unknown lead status `{raw}`"))?,
            ),
            None => None,
        };

        let recommendation = match params.recommendation.as_deref() {
            Some(raw) => Some(raw.parse::<Recommendation>().map_err(|e| e.to_string())?),
            None => None,
        };

        Ok(Self {
            limit: params.limit.unwrap_or(50).clamp(1, 200),
            status,
            recommendation,
            min_score: params.min_score.unwrap_or(0),
            by_score: params.sort.as_deref() == Some("score"),
        })
    }

    fn apply(&self, leads: Vec<Lead>) -> Vec<LeadListItem> {
        let mut items: Vec<LeadListItem> = leads
            .into_iter()
            .map(LeadListItem::from)
            .filter(|item| item.score >= self.min_score)
            .filter(|item| self.recommendation.map_or(true, |r| item.recommendation == r))
            .collect();

        if self.by_score {
            items.sort_by(|a, b| b.score.cmp(&a.score));
        }

        items
    }
}

/// GET /api/leads
/// Returns leads with score and recommendation, newest first or by score
pub async fn get_leads(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeadListParams>,
) -> Response {
    let filter = match ListFilter::from_params(&params) {
        Ok(filter) => filter,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };

    let result = match filter.status {
        Some(status) => {
            Lead::find_by_status(status, filter.limit, params.tenant, &state.db_pool).await
        }
        None => Lead::find_recent(filter.limit, params.tenant, &state.db_pool).await,
    };

    match result {
        Ok(leads) => {
            let items = filter.apply(leads);
            tracing::debug!(count = items.len(), "Scored lead list");
            Json(items).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get leads: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// GET /api/leads/summary
/// Returns recommendation bucket counts over the most recent leads
pub async fn get_lead_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(500).clamp(1, 1000);

    let total = match Lead::count(params.tenant, &state.db_pool).await {
        Ok(total) => total,
        Err(e) => {
            tracing::error!("Failed to count leads: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    match Lead::find_recent(limit, params.tenant, &state.db_pool).await {
        Ok(leads) => {
            let scores: Vec<u8> = leads
                .iter()
                .map(|lead| LeadScorer::compute_score(&lead.to_qualification()))
                .collect();
            Json(LeadSummary::from_scores(total, &scores)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get lead summary: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// GET /api/leads/:id
/// Returns full lead details with the score breakdown
pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match Lead::find_by_id(id, &state.db_pool).await {
        Ok(Some(lead)) => Json(LeadDetail::from(lead)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Lead not found").into_response(),
        Err(e) => {
            tracing::error!("Failed to get lead {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// POST /api/leads/score
/// Scores qualification answers that are not stored yet (qualification forms)
pub async fn score_qualification(Json(qualification): Json<LeadQualification>) -> impl IntoResponse {
    let result = LeadScorer::score(&qualification);
    tracing::debug!(
        score = result.total,
        recommendation = %result.recommendation,
        "Scored qualification payload"
    );
    Json(ScoreResponse::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: i32, budget: &str, timeline: &str) -> Lead {
        Lead {
            id,
            name: format!("Lead {id}"),
            lead_type: Some("company".to_string()),
            budget: Some(budget.to_string()),
            timeline: Some(timeline.to_string()),
            company_size: Some("51-200".to_string()),
            decision_maker: Some("decision-maker".to_string()),
            status: "new".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_item_carries_score() {
        let item = LeadListItem::from(lead(1, "100000+", "asap"));

        // 30 + 20 + 20 + 15
        assert_eq!(item.score, 85);
        assert_eq!(item.recommendation, Recommendation::Hot);
        assert_eq!(item.recommendation_color, "red");
    }

    #[test]
    fn test_detail_breakdown_matches_score() {
        let detail = LeadDetail::from(lead(2, "unknown", "planning"));
        let sum: u8 = detail.breakdown.iter().map(|b| b.score).sum();

        assert_eq!(detail.score, sum);
        assert_eq!(detail.score, 40);
        assert_eq!(detail.recommendation, Recommendation::Cold);
    }

    #[test]
    fn test_filter_rejects_unknown_values() {
        let params = LeadListParams {
            recommendation: Some("lukewarm".to_string()),
            ..Default::default()
        };
        assert!(ListFilter::from_params(&params).is_err());

        let params = LeadListParams {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ListFilter::from_params(&params),
            Err("Unknown lead status `archived`".to_string())
        );
    }

    #[test]
    fn test_filter_defaults_and_limits() {
        let filter = ListFilter::from_params(&LeadListParams::default()).unwrap();
        assert_eq!(filter.limit, 50);
        assert!(!filter.by_score);

        let params = LeadListParams {
            limit: Some(10_000),
            sort: Some("score".to_string()),
            recommendation: Some("Warm".to_string()),
            ..Default::default()
        };
        let filter = ListFilter::from_params(&params).unwrap();
        assert_eq!(filter.limit, 200);
        assert!(filter.by_score);
        assert_eq!(filter.recommendation, Some(Recommendation::Warm));
    }

    #[test]
    fn test_filter_applies_bucket_and_sort() {
        let leads = vec![
            lead(1, "5000-15000", "planning"),
            lead(2, "100000+", "asap"),
            lead(3, "30000-50000", "3-months"),
        ];

        let params = LeadListParams {
            sort: Some("score".to_string()),
            min_score: Some(60),
            ..Default::default()
        };
        let items = ListFilter::from_params(&params).unwrap().apply(leads.clone());
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let params = LeadListParams {
            recommendation: Some("cold".to_string()),
            ..Default::default()
        };
        let items = ListFilter::from_params(&params).unwrap().apply(leads);
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_summary_counts_buckets() {
        let summary = LeadSummary::from_scores(12, &[89, 80, 79, 58, 25, 0]);

        assert_eq!(summary.total_leads, 12);
        assert_eq!(summary.sampled, 6);
        assert_eq!((summary.hot, summary.warm, summary.cold, summary.nurture), (2, 1, 1, 2));
        assert!((summary.average_score - 331.0 / 6.0).abs() < 1e-9);

        assert_eq!(LeadSummary::from_scores(0, &[]).average_score, 0.0);
    }
}
