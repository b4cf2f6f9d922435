pub mod chat;
pub(crate) mod health;
pub mod search;

pub use health::health_check;
