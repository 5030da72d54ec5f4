//! The synonym relation store.
//!
//! Words are grouped into synonym groups: maximal sets of words that are
//! transitively connected by "is a synonym of" pairs. Adding a pair merges
//! the two words' groups, and a search returns every other member of the
//! word's group.
//!
//! - [`graph`] defines the [`SynonymGraph`] storage seam and backend selection
//! - [`clique`] materializes every group as a complete pairwise clique
//! - [`disjoint_set`] stores group membership only (union-find)
//! - [`store`] wraps a backend with normalization, validation and locking
//! - [`seed`] holds the default seed pairs
//! - [`config`] configures how a store is built

pub mod clique;
pub mod config;
pub mod disjoint_set;
pub mod graph;
pub mod seed;
pub mod store;

pub use clique::CliqueGraph;
pub use config::StoreConfig;
pub use disjoint_set::DisjointSetGraph;
pub use graph::{GraphBackend, SynonymGraph};
pub use store::{RelationStore, SearchResult, StoreStats};
