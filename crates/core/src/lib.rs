pub mod error;
pub mod manifest;
pub mod types;

pub use error::{Error, Result};
pub use manifest::{parse_pages_json, write_pages_json};
pub use types::*;
