//! Console client for the member administration panel.
//!
//! Mirrors the dashboard page: an admin logs in, browses and searches the
//! member list, and drives a single add/edit form. Validation here is
//! advisory; the server stays the authority on every rule.
//!
//! ## State
//!
//! - [`Form`] — Username/password form, with edit mode and submit phase
//! - [`filter`] — Case-insensitive username search
//! - [`Notice`] — Transient success, info, and error messages
//!
//! ## Transport
//!
//! - [`Client`] — Cookie-keeping HTTP client for the JSON API
//! - [`Console`] — Interactive loop tying commands to client and form
mod client;
mod command;
mod console;
mod error;
mod form;
mod notice;

pub use client::*;
pub use command::*;
pub use console::*;
pub use error::*;
pub use form::*;
pub use notice::*;
