use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// creates a fresh in memory sqlite database with all migrations applied
pub async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in memory sqlite");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    db
}
