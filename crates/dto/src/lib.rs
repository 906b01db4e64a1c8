//! Data transfer objects for API communication.
//!
//! Request and response bodies of the HTTP surface, serializable via
//! `serde`. Shared by the server handlers and the console client.
mod request;
mod response;

pub use request::*;
pub use response::*;
