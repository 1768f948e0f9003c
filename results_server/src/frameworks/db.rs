use sqlx::{PgPool, postgres::PgPoolOptions};

// Build a lazily connecting PostgreSQL pool; an unreachable database surfaces
// as per-request storage failures instead of aborting startup.
pub fn connect_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)
}

// Run database migrations for the results service.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
    MIGRATOR.run(pool).await
}
