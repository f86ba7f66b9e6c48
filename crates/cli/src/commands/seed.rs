//! Seed the database with the demo dataset.
//!
//! Applies `seeds/schema.sql` and `seeds/sample_data.sql` to the database at
//! `SHRIMPTRACK_DATABASE_URL`. Both scripts are idempotent, so re-running the
//! command is safe; `--reset` drops the tables first for a clean slate.

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use tracing::info;

const SCHEMA_SQL: &str = include_str!("../../seeds/schema.sql");
const SAMPLE_DATA_SQL: &str = include_str!("../../seeds/sample_data.sql");

const RESET_SQL: &str = "DROP TABLE IF EXISTS orders, customers, demo_users CASCADE;";

/// Create tables and insert the demo dataset.
///
/// # Errors
///
/// Returns an error if `SHRIMPTRACK_DATABASE_URL` is not set or a statement
/// fails.
pub async fn run(reset: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("SHRIMPTRACK_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "SHRIMPTRACK_DATABASE_URL not set")?;

    info!("Connecting to database");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    if reset {
        info!("Dropping existing tables");
        sqlx::raw_sql(RESET_SQL).execute(&pool).await?;
    }

    info!("Applying schema");
    sqlx::raw_sql(SCHEMA_SQL).execute(&pool).await?;

    info!("Inserting sample data");
    sqlx::raw_sql(SAMPLE_DATA_SQL).execute(&pool).await?;

    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool)
        .await?;
    let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await?;

    info!("Seeding complete!");
    info!("  Customers: {customers}");
    info!("  Orders: {orders}");
    info!("  Demo login: admin@shrimptrack.io / admin123");

    Ok(())
}
