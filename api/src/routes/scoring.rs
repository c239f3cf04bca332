//! Scoring reference routes

use axum::Json;
use serde::Serialize;

use lead_scoring::{
    tables::{self, MAX_PAIN_POINT_POINTS, POINTS_PER_PAIN_POINT, PRIVATE_LEAD_POINTS},
    LeadScorer, Recommendation,
};

/// One accepted key of a scoring table
#[derive(Debug, Serialize)]
pub struct TableEntry {
    pub key: &'static str,
    pub points: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringTable {
    pub factor: &'static str,
    pub max_points: u8,
    pub entries: Vec<TableEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Threshold {
    pub recommendation: Recommendation,
    pub min_score: u8,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringTables {
    pub tables: Vec<ScoringTable>,
    pub private_lead_points: u8,
    pub points_per_pain_point: u8,
    pub max_pain_point_points: u8,
    pub thresholds: Vec<Threshold>,
}

/// GET /api/scoring/tables
/// Returns the accepted qualification keys with their points, for qualification forms
pub async fn get_scoring_tables() -> Json<ScoringTables> {
    let scoring_tables = LeadScorer::tables()
        .into_iter()
        .map(|(factor, table)| ScoringTable {
            factor,
            max_points: tables::max_points(table),
            entries: table
                .iter()
                .map(|&(key, points)| TableEntry { key, points })
                .collect(),
        })
        .collect();

    let thresholds = Recommendation::ALL
        .into_iter()
        .map(|recommendation| Threshold {
            recommendation,
            min_score: recommendation.min_score(),
            color: recommendation.color(),
        })
        .collect();

    Json(ScoringTables {
        tables: scoring_tables,
        private_lead_points: PRIVATE_LEAD_POINTS,
        points_per_pain_point: POINTS_PER_PAIN_POINT,
        max_pain_point_points: MAX_PAIN_POINT_POINTS,
        thresholds,
    })
}
