//! Wire types for the HTTP API.
//!
//! Kept separate from the domain models in `src/models/`; each DTO converts
//! into the domain type it carries.

pub mod chat;
pub mod search;

pub use chat::*;
pub use search::*;
