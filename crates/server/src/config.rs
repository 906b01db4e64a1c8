use clap::Parser;
use clap::builder::BoolishValueParser;
use roster_auth::Admins;
use roster_auth::AuthError;
use roster_auth::Crypto;
use roster_auth::Gate;
use roster_database::PgErr;
use roster_members::Member;
use roster_members::Memory;
use roster_members::Store;

/// Server configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend", about = "Member administration server")]
pub struct Config {
    /// Listen address.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,
    /// PostgreSQL connection string.
    #[arg(long, env = "DB_URL", hide_env_values = true)]
    pub db_url: Option<String>,
    /// Keep members in process memory when no database is configured.
    #[arg(long, env = "IN_MEMORY", value_parser = BoolishValueParser::new())]
    pub in_memory: bool,
    /// Mark cookies Secure and quiet the terminal log.
    #[arg(long, env = "PRODUCTION", value_parser = BoolishValueParser::new())]
    pub production: bool,
    /// Key for signing session tokens. Random per process when unset.
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,
    /// Administrator table as `user:password,user:password`.
    #[arg(long, env = "ADMIN_USERS", default_value = "", hide_env_values = true)]
    pub admins: String,
    /// Number of actix workers.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    /// Builds the login gate from the administrator table and signing key.
    pub fn gate(&self) -> Result<Gate, AuthError> {
        let admins = Admins::parse(&self.admins)?;
        match admins.len() {
            0 => log::warn!("[config] no administrators configured, every login will fail"),
            n => log::info!("[config] {} administrator(s) configured", n),
        }
        let crypto = match self.session_secret.as_deref() {
            Some(secret) => Crypto::new(secret.as_bytes()),
            None => {
                log::warn!("[config] no session secret, sessions end with this process");
                Crypto::random()
            }
        };
        Ok(Gate::new(admins, crypto, self.production))
    }

    /// Connects the member store. A configured database that cannot be
    /// reached is fatal; without one the server still serves non-data routes.
    pub async fn store(&self) -> Result<Store, PgErr> {
        match (self.db_url.as_deref(), self.in_memory) {
            (Some(url), _) => {
                let client = roster_database::db(url).await?;
                roster_database::migrate::<Member>(&client).await?;
                Ok(Store::from(client))
            }
            (None, true) => Ok(Store::from(Memory::default())),
            (None, false) => {
                log::warn!("[config] no database configured, member routes are offline");
                Ok(Store::Offline)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::MutexGuard;

    /// Parsing reads the process environment, which tests share.
    static ENV: Mutex<()> = Mutex::new(());

    fn lock() -> MutexGuard<'static, ()> {
        ENV.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn argv<'a>(args: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
        std::iter::once("backend").chain(args.iter().copied())
    }

    fn parse(args: &[&str]) -> Config {
        let _env = lock();
        Config::try_parse_from(argv(args)).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.workers, 4);
        assert!(!config.production);
        assert!(config.db_url.is_none());
    }

    #[test]
    fn boolean_flags_accept_boolish_env_values() {
        let _env = lock();
        for (value, expected) in [("1", true), ("yes", true), ("on", true), ("0", false), ("no", false)] {
            unsafe {
                std::env::set_var("PRODUCTION", value);
                std::env::set_var("IN_MEMORY", value);
            }
            let config = Config::try_parse_from(argv(&[]));
            unsafe {
                std::env::remove_var("PRODUCTION");
                std::env::remove_var("IN_MEMORY");
            }
            let config = config.unwrap();
            assert_eq!(config.production, expected, "PRODUCTION={}", value);
            assert_eq!(config.in_memory, expected, "IN_MEMORY={}", value);
        }
    }

    #[test]
    fn flags_still_switch_on_without_values() {
        let config = parse(&["--production", "--in-memory"]);
        assert!(config.production);
        assert!(config.in_memory);
    }

    #[test]
    fn builds_gate_from_admin_table() {
        let config = parse(&["--admins", "root:toor", "--production"]);
        let gate = config.gate().unwrap();
        assert!(gate.secure());
    }

    #[test]
    fn rejects_malformed_admin_table() {
        assert!(parse(&["--admins", "nobody"]).gate().is_err());
    }

    #[tokio::test]
    async fn store_without_database() {
        assert_eq!(parse(&[]).store().await.unwrap().kind(), "offline");
        assert_eq!(parse(&["--in-memory"]).store().await.unwrap().kind(), "memory");
    }
}
