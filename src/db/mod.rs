//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for orders, reference data, mappings, and
//! the singleton OAuth token record. Loosely-shaped fields (order line items,
//! coupon product lists) are stored as JSON text columns.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Singleton OAuth token record; at most one row ever exists.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tokens (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            access_token TEXT NOT NULL,
            refresh_token TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id TEXT PRIMARY KEY,
            store_name TEXT NOT NULL DEFAULT '',
            manager_name TEXT NOT NULL DEFAULT '',
            customer_name TEXT NOT NULL,
            customer_phone TEXT NOT NULL DEFAULT '',
            address TEXT NOT NULL DEFAULT '',
            items TEXT NOT NULL,
            total_amount INTEGER NOT NULL DEFAULT 0,
            shipping_cost INTEGER NOT NULL DEFAULT 0,
            is_synced INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT,
            synced_at TEXT,
            deleted_at TEXT,
            sync_success INTEGER,
            sync_message TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Flat reference lists; whole-collection replace semantics, no ids.
    for table in [
        "ecount_stores",
        "static_managers",
        "ecount_warehouses",
        "item_codes",
    ] {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                code TEXT NOT NULL,
                name TEXT NOT NULL,
                extra TEXT
            );
            "#,
            table
        ))
        .execute(pool)
        .await?;
    }

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mappings (
            id TEXT PRIMARY KEY,
            manager_code TEXT NOT NULL,
            manager_name TEXT NOT NULL,
            store_name TEXT NOT NULL,
            store_code TEXT NOT NULL DEFAULT '',
            warehouse_code TEXT NOT NULL,
            trade_type TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS coupon_mappings (
            id TEXT PRIMARY KEY,
            coupon_no TEXT NOT NULL,
            coupon_name TEXT NOT NULL DEFAULT '',
            product_nos TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_orders_created_at ON orders(created_at);
        CREATE INDEX IF NOT EXISTS idx_orders_view ON orders(is_deleted, is_synced);
        CREATE INDEX IF NOT EXISTS idx_orders_store_name ON orders(store_name);
        CREATE INDEX IF NOT EXISTS idx_mappings_manager_code ON mappings(manager_code);
        CREATE INDEX IF NOT EXISTS idx_coupon_mappings_end_date ON coupon_mappings(end_date);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
