//! Administrator login gate and signed sessions.
//!
//! A fixed table of administrators may log in; everyone else is turned
//! away. A successful login opens a server-side session and hands the
//! browser a signed token in the session cookie.
//!
//! ## Identity
//!
//! - [`Admins`] — Fixed table of administrator credentials
//! - [`Session`] — Live login session with expiry
//! - [`Sessions`] — Registry of live sessions, consulted on every check
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`password`] — Argon2 hashing and verification
//!
//! ## HTTP
//!
//! - [`Gate`] — Login, logout, and token checks bundled for handlers
//! - [`Admin`] — Extractor rejecting requests without a live session
//! - [`intercept`] — Middleware redirecting UI paths by session state
mod admins;
mod claims;
mod crypto;
mod error;
mod gate;
mod handlers;
mod middleware;
pub mod password;
mod session;

pub use admins::*;
pub use claims::*;
pub use crypto::*;
pub use error::*;
pub use gate::*;
pub use handlers::*;
pub use middleware::*;
pub use session::*;
