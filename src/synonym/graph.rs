//! Storage seam for synonym groups.

use std::fmt::{self, Debug};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SynonymousError;
use crate::synonym::clique::CliqueGraph;
use crate::synonym::disjoint_set::DisjointSetGraph;

/// A backend that keeps words partitioned into synonym groups.
///
/// Implementations receive words that are already normalized and validated:
/// non-empty, lowercased, trimmed, and `word != synonym` for merges. Every
/// backend must answer queries identically; they differ only in how groups
/// are stored and what each operation costs.
pub trait SynonymGraph: Send + Sync + Debug {
    /// Merge the groups of `word` and `synonym` into one group.
    ///
    /// Returns the number of directed synonym links the merge added to the
    /// relation. Zero means both words were already in the same group.
    fn merge(&mut self, word: &str, synonym: &str) -> usize;

    /// Every other member of `word`'s group, sorted ascending.
    ///
    /// Unknown words have no synonyms.
    fn synonyms(&self, word: &str) -> Vec<String>;

    /// Whether `word` belongs to any group.
    fn contains(&self, word: &str) -> bool;

    /// All known words, sorted ascending.
    fn words(&self) -> Vec<String>;

    /// Every synonym group with its members sorted, ordered by first member.
    fn groups(&self) -> Vec<Vec<String>>;

    /// Number of known words.
    fn word_count(&self) -> usize;

    /// Short backend name used in logs and stats.
    fn name(&self) -> &'static str;
}

/// Available [`SynonymGraph`] implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GraphBackend {
    /// Materialized closure: O(1) lookup, O(n²) merge in the combined group size.
    #[default]
    Clique,
    /// Union-find membership: near-constant merge, O(group size) lookup.
    DisjointSet,
}

impl GraphBackend {
    /// Build an empty graph of this kind.
    pub fn build(self) -> Box<dyn SynonymGraph> {
        match self {
            GraphBackend::Clique => Box::new(CliqueGraph::new()),
            GraphBackend::DisjointSet => Box::new(DisjointSetGraph::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphBackend::Clique => "clique",
            GraphBackend::DisjointSet => "disjoint_set",
        }
    }
}

impl fmt::Display for GraphBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphBackend {
    type Err = SynonymousError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "clique" => Ok(GraphBackend::Clique),
            "disjoint_set" | "union_find" => Ok(GraphBackend::DisjointSet),
            other => Err(SynonymousError::config(format!(
                "Unknown graph backend '{other}' (expected 'clique' or 'disjoint_set')"
            ))),
        }
    }
}
