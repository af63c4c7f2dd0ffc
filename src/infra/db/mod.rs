//! Database connection and raw statement primitives.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseBackend,
    DatabaseConnection, DbErr, QueryResult, Statement, Value,
};

use crate::config::Config;

pub mod schema;

pub use schema::initialize as initialize_schema;

/// Database wrapper owning the connection pool.
///
/// Every statement checks a connection out of the pool and returns it when
/// the statement completes or fails.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool.
    ///
    /// Does not create any table; call [`schema::initialize`] once before
    /// serving requests.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.database_max_connections)
            // Keeps an in-memory database alive between statements
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            max_connections = config.database_max_connections,
            "Database pool opened"
        );

        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Backend of the underlying pool (always SQLite here).
    pub fn backend(&self) -> DatabaseBackend {
        self.connection.get_database_backend()
    }

    /// Execute a row-mutating statement and return the number of affected rows.
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> Result<u64, DbErr> {
        let statement = Statement::from_sql_and_values(self.backend(), sql, values);
        let result = self.connection.execute(statement).await?;
        Ok(result.rows_affected())
    }

    /// Run a row-returning statement.
    pub async fn query(&self, sql: &str, values: Vec<Value>) -> Result<Vec<QueryResult>, DbErr> {
        let statement = Statement::from_sql_and_values(self.backend(), sql, values);
        self.connection.query_all(statement).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.query("SELECT 1", Vec::new()).await?;
        Ok(())
    }
}
