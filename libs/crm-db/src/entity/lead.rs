use lead_scoring::{LeadQualification, LeadType};
use sqlx::{types::chrono, Executor, Postgres};

/// Lead entity representing a prospective customer in the CRM
#[derive(sqlx::FromRow, Debug, Clone, Default)]
pub struct Lead {
    pub id: i32,
    pub tenant_id: Option<i32>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub industry: Option<String>,

    // Qualification answers (raw form values)
    pub lead_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub company_size: Option<String>,
    pub decision_maker: Option<String>,
    pub pain_points: Option<Vec<String>>,

    // Pipeline
    pub status: String,
    pub source: Option<String>,
    pub assigned_agent: Option<String>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Lead pipeline statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Proposal,
        LeadStatus::Won,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Proposal => "proposal",
            LeadStatus::Won => "won",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn parse(raw: &str) -> Option<LeadStatus> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl Lead {
    /// Find lead by id
    pub async fn find_by_id<'c, E>(id: i32, connection: E) -> Result<Option<Lead>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(connection)
            .await
    }

    /// Get newest leads, optionally for a single tenant
    pub async fn find_recent<'c, E>(
        limit: i32,
        tenant_id: Option<i32>,
        connection: E,
    ) -> Result<Vec<Lead>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, Lead>(
            r#"
            SELECT * FROM leads
            WHERE ($2::INTEGER IS NULL OR tenant_id = $2)
            ORDER BY created_at DESC NULLS LAST
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(tenant_id)
        .fetch_all(connection)
        .await
    }

    /// Get newest leads in a pipeline status
    pub async fn find_by_status<'c, E>(
        status: LeadStatus,
        limit: i32,
        tenant_id: Option<i32>,
        connection: E,
    ) -> Result<Vec<Lead>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, Lead>(
            r#"
            SELECT * FROM leads
            WHERE status = $1 AND ($3::INTEGER IS NULL OR tenant_id = $3)
            ORDER BY created_at DESC NULLS LAST
            LIMIT $2
            "#,
        )
        .bind(status.as_str())
        .bind(limit)
        .bind(tenant_id)
        .fetch_all(connection)
        .await
    }

    /// Count leads, optionally for a single tenant
    pub async fn count<'c, E>(tenant_id: Option<i32>, connection: E) -> Result<i64, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM leads WHERE ($1::INTEGER IS NULL OR tenant_id = $1)",
        )
        .bind(tenant_id)
        .fetch_one(connection)
        .await?;

        Ok(count)
    }

    /// Convert to LeadQualification for lead scoring
    pub fn to_qualification(&self) -> LeadQualification {
        LeadQualification {
            lead_type: self.lead_type.as_deref().map(LeadType::parse),
            budget: self.budget.clone(),
            timeline: self.timeline.clone(),
            company_size: self.company_size.clone(),
            decision_maker: self.decision_maker.clone(),
            pain_points: self.pain_points.clone().unwrap_or_default(),
        }
    }
}
