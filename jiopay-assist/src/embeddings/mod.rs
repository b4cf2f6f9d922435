mod api;


pub use api::{normalize_input, EmbeddingApiClient};
