//! Member Administration Server
//!
//! Serves the login gate, member API, and UI pages.
//! Configure with flags or BIND_ADDR, DB_URL, ADMIN_USERS, SESSION_SECRET.
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = roster_server::Config::parse();
    roster_core::log(config.production)?;
    roster_core::kys();
    roster_server::run(config).await
}
