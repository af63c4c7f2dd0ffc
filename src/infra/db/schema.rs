//! Schema initialization.
//!
//! Tables are derived from the SeaORM entities and created with
//! `IF NOT EXISTS`, so running this on every start is harmless. Existing
//! tables are never altered.

use sea_orm::{DbErr, EntityTrait, Schema};

use super::Database;
use crate::infra::repositories::entities::{bike, customer, user};

/// Ensure the `bikes`, `customers` and `users` tables exist.
pub async fn initialize(db: &Database) -> Result<(), DbErr> {
    create_table(db, bike::Entity).await?;
    create_table(db, customer::Entity).await?;
    create_table(db, user::Entity).await?;

    tracing::info!("Database schema initialized");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &Database, entity: E) -> Result<(), DbErr> {
    let backend = db.backend();
    let mut create = Schema::new(backend).create_table_from_entity(entity);
    create.if_not_exists();

    let statement = backend.build(&create);
    tracing::debug!(table = entity.table_name(), "Ensuring table exists");
    db.execute(&statement.sql, Vec::new()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    async fn table_names(db: &Database) -> Vec<String> {
        db.query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
            Vec::new(),
        )
        .await
        .unwrap()
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
    }

    #[tokio::test]
    async fn test_initialize_creates_three_tables() {
        let db = Database::connect(&Config::in_memory()).await.unwrap();
        initialize(&db).await.unwrap();

        assert_eq!(table_names(&db).await, vec!["bikes", "customers", "users"]);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent_and_keeps_rows() {
        let db = Database::connect(&Config::in_memory()).await.unwrap();
        initialize(&db).await.unwrap();
        db.execute(
            "INSERT INTO bikes (id, model) VALUES (?, ?)",
            vec!["B1".into(), "Roadster".into()],
        )
        .await
        .unwrap();

        initialize(&db).await.unwrap();

        let rows = db.query("SELECT id FROM bikes", Vec::new()).await.unwrap();
        assert_eq!(rows.len(), 1);
    }
}
