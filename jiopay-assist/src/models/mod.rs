mod backend;
mod document;
mod message;

pub use backend::*;
pub use document::*;
pub use message::*;
