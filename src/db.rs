use crate::config::Config;
use anyhow::{anyhow, Result};
use diesel::{Connection, PgConnection};
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection = Object<AsyncPgConnection>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database handle owning the connection pool.
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a new database handle with a connection pool.
    pub async fn new(config: &Config) -> Result<Self> {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database.url);

        let pool = Pool::builder(manager)
            .max_size(config.database.max_connections as usize)
            .build()
            .map_err(|e| anyhow!("failed to build connection pool: {}", e))?;

        let db = Self { pool };

        // Test connection and run migrations
        db.initialize(config).await?;

        Ok(db)
    }

    /// Initialize the database by testing the connection and running migrations.
    async fn initialize(&self, config: &Config) -> Result<()> {
        let _conn = self.get_connection().await?;
        info!("Successfully connected to the database");

        self.run_migrations(config)?;

        Ok(())
    }

    /// Run pending migrations over a synchronous connection.
    fn run_migrations(&self, config: &Config) -> Result<()> {
        let mut conn = PgConnection::establish(&config.database.url)?;

        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow!("failed to run migrations: {}", e))?;
        info!("Database migrations applied successfully");

        Ok(())
    }

    /// Get a database connection from the pool.
    pub async fn get_connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .await
            .map_err(|e| anyhow!("failed to get database connection: {}", e))
    }

    /// Get the database connection pool reference.
    pub fn get_pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Initialize database connection pool and run migrations.
pub async fn init_database(config: &Config) -> Result<Database> {
    Database::new(config).await
}
