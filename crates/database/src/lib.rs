//! PostgreSQL connectivity and schema management.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a connection string
//! - [`ping()`] — Round-trip probe used by the health routes
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`migrate()`] — Creates a table and its indices if absent
//!
//! ## Table Names
//!
//! Constants for all persistent entities.
mod schema;

pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across handlers. The
/// connection task is spawned onto the current runtime and logs when the
/// server side goes away.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Creates the table described by `S` along with its indices.
pub async fn migrate<S: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("creating table ({})", S::name());
    client.batch_execute(S::creates()).await?;
    log::info!("indexing table ({})", S::name());
    client.batch_execute(S::indices()).await
}

/// Cheapest possible round trip to the server.
pub async fn ping(client: &Client) -> Result<(), PgErr> {
    client.execute("SELECT 1", &[]).await.map(|_| ())
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for administered member accounts.
#[rustfmt::skip]
pub const MEMBERS:     &str = "members";
