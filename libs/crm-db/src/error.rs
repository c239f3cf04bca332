use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid `{name}` environment variable: `{value}`")]
    InvalidEnvVar { name: String, value: String },

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
