use std::{env, str::FromStr};

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    Pool, Postgres,
};

pub mod entity;
pub mod error;

pub use entity::Lead;
pub use error::DbError;

mod defaults {
    pub const DATABASE_MAX_CONNECTIONS: &str = "5";
}

async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<Pool<Postgres>, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Connection options from `DATABASE_URL`, falling back to the libpq `PG*` variables
pub fn connect_options() -> Result<PgConnectOptions, DbError> {
    match env::var("DATABASE_URL") {
        Ok(url) => Ok(PgConnectOptions::from_str(&url)?),
        Err(_) => Ok(PgConnectOptions::new()),
    }
}

pub async fn initialize_database() -> Result<Pool<Postgres>, DbError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let raw_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .unwrap_or(String::from(defaults::DATABASE_MAX_CONNECTIONS));
    let db_max_connections = raw_max_connections
        .parse::<u32>()
        .map_err(|_| DbError::InvalidEnvVar {
            name: "DATABASE_MAX_CONNECTIONS".to_string(),
            value: raw_max_connections.clone(),
        })?;

    let pool = create_pool(connect_options()?, db_max_connections).await?;

    Ok(pool)
}
