//! Init-db command - Creates the tables and exits.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::{initialize_schema, Database};

/// Execute the init-db command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    initialize_schema(&db).await?;
    Ok(())
}
