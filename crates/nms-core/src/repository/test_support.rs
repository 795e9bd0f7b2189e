//! In-memory SQLite schema bootstrap shared by the repository unit tests.

use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Schema};

use crate::entities;

pub async fn test_db() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("connect sqlite::memory:");

    let schema = Schema::new(DatabaseBackend::Sqlite);
    for stmt in [
        schema.create_table_from_entity(entities::devices::Entity),
        schema.create_table_from_entity(entities::alarms::Entity),
        schema.create_table_from_entity(entities::interface_metrics::Entity),
        schema.create_table_from_entity(entities::device_health_metrics::Entity),
        schema.create_table_from_entity(entities::device_inventory::Entity),
    ] {
        conn.execute(conn.get_database_backend().build(&stmt))
            .await
            .expect("create table from entity");
    }

    conn
}
