#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Run migrations once per test process; `false` means the database is unusable.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    DatabaseConfig {
        url: models::db::DATABASE_URL.clone(),
        max_connections: 20,
        min_connections: 1,
        connect_timeout_secs: 5,
        idle_timeout_secs: 60,
        max_lifetime_secs: 600,
        acquire_timeout_secs: 10,
        sqlx_logging: false,
    }
}

/// Fresh connection for the current test, or `None` when DB tests are
/// disabled (`SKIP_DB_TESTS`) or the database cannot be reached.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let ready = *MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&test_config()).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            if let Err(e) = migration::Migrator::up(&db, None).await {
                eprintln!("skip: migrate up failed: {}", e);
                return false;
            }
            true
        })
        .await;
    if !ready {
        return Ok(None);
    }
    let db = connect_with_config(&test_config()).await?;
    Ok(Some(db))
}
