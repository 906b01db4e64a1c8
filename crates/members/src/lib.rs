//! Member record store.
//!
//! Members are named credential pairs administered through the panel.
//! Passwords are hashed before they reach any backend and never leave the
//! server again.
//!
//! ## Core Types
//!
//! - [`Member`] — Stored member with hashed password and timestamps
//! - [`Roster`] — Validation, duplicate pre-check, and hashing over a store
//! - [`MemberError`] — Failure taxonomy mapped onto HTTP statuses
//!
//! ## Backends
//!
//! - [`MemberRepository`] — Storage operations every backend provides
//! - [`Store`] — Postgres, in-process, or offline backend chosen at startup
//! - [`Memory`] — In-process backend for development and tests
//!
//! ## HTTP Handlers
//!
//! [`list`], [`create`], [`update`], and [`delete`] require a live
//! administrator session.
mod error;
mod handlers;
mod member;
mod memory;
mod repository;
mod roster;
mod store;

pub use error::*;
pub use handlers::*;
pub use member::*;
pub use memory::*;
pub use repository::*;
pub use roster::*;
pub use store::*;
