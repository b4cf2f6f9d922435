//! JioPay support-chat proxy.
//!
//! Forwards user questions to an external question-answering backend and
//! returns the answer with its citation sources. A small built-in knowledge
//! base and a keyword matcher serve relevance lookups.

pub mod api;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod proxy;
pub mod retrieval;
pub mod session;
