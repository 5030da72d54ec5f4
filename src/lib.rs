//! # Synonymous
//!
//! An in-memory, transitively-closed synonym relation store for Rust.
//!
//! ## Features
//!
//! - Bidirectional synonym pairs with automatic group merging
//! - Sorted, normalized group-membership queries
//! - Pluggable group storage (materialized cliques or union-find)
//! - Thread-safe store shared by reference across request handlers
//! - Serde request/response types for building transports

pub mod analysis;
pub mod api;
pub mod cli;
pub mod error;
pub mod synonym;

pub mod prelude {
    pub use crate::analysis::{Word, normalize};
    pub use crate::api::{AddSynonymRequest, AddSynonymResponse, ApiResponse, SynonymPair};
    pub use crate::error::{Result, SynonymousError};
    pub use crate::synonym::{GraphBackend, RelationStore, SearchResult, StoreConfig};
}
