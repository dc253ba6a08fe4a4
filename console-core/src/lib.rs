//! console-core: Shared infrastructure for the panel console crates.
pub mod error;
pub mod observability;
pub mod storage;

pub use anyhow;
pub use serde;
pub use serde_json;
pub use tracing;
