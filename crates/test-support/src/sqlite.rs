use nms_core::entities;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Schema};
use sea_orm::Statement;
use tokio::sync::OnceCell;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::const_new();

/// Get a shared in-memory SQLite connection with entity-based schema created once.
pub async fn entity_db() -> DatabaseConnection {
    DB_CONN
        .get_or_init(|| async {
            let conn = Database::connect("sqlite::memory:")
                .await
                .expect("connect sqlite::memory:");
            apply_entity_schema(&conn).await.expect("apply schema");
            conn
        })
        .await
        .clone()
}

async fn apply_entity_schema(
    connection: &impl ConnectionTrait,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = Schema::new(DatabaseBackend::Sqlite);

    for stmt in [
        schema.create_table_from_entity(entities::devices::Entity),
        schema.create_table_from_entity(entities::alarms::Entity),
        schema.create_table_from_entity(entities::interface_metrics::Entity),
        schema.create_table_from_entity(entities::device_health_metrics::Entity),
        schema.create_table_from_entity(entities::device_inventory::Entity),
    ] {
        connection
            .execute(connection.get_database_backend().build(&stmt))
            .await?;
    }
    Ok(())
}

/// Run a closure within a SQLite savepoint on the shared connection. All
/// changes are rolled back afterwards, so tests can share one schema without
/// interfering with each other's rows.
pub async fn with_savepoint<F, Fut, T>(name: &str, f: F) -> T
where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: std::future::Future<Output = T>,
{
    let conn = entity_db().await;
    let backend = DatabaseBackend::Sqlite;
    let save = format!("SAVEPOINT {name}");
    let rollback = format!("ROLLBACK TO {name}");
    let release = format!("RELEASE {name}");
    let _ = conn.execute(Statement::from_string(backend, save)).await;
    let out = f(conn.clone()).await;
    let _ = conn
        .execute(Statement::from_string(backend, rollback))
        .await;
    let _ = conn.execute(Statement::from_string(backend, release)).await;
    out
}
