//! The relation store.
//!
//! [`RelationStore`] owns one [`SynonymGraph`] behind a readers-writer lock.
//! It normalizes and validates every word at the boundary, so backends only
//! ever see clean input. Adding pairs takes the exclusive lock for the whole
//! merge, which means readers never observe a half-merged group.
//!
//! Build one store at startup and share it by `Arc` with every request
//! handler; there is no global instance.
//!
//! # Examples
//!
//! ```
//! use synonymous::synonym::RelationStore;
//!
//! let store = RelationStore::default();
//! store.add_pair("Joyful", " content ").unwrap();
//!
//! let result = store.search("HAPPY");
//! assert_eq!(result.word, "happy");
//! assert_eq!(result.synonyms, vec!["content", "glad", "joyful"]);
//! ```

use log::{Level, debug, info, log_enabled};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::analysis::{Word, normalize};
use crate::error::{Result, SynonymousError};
use crate::synonym::config::{StoreConfig, load_seed_groups};
use crate::synonym::graph::{GraphBackend, SynonymGraph};
use crate::synonym::seed::DEFAULT_SEED_PAIRS;

/// Result of a synonym search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The normalized query word.
    pub word: String,
    /// Every other member of the word's group, sorted ascending.
    pub synonyms: Vec<String>,
}

/// Size of the relation held by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub backend: GraphBackend,
    pub words: usize,
    pub groups: usize,
    /// Directed synonym links, `k * (k - 1)` per group of `k` words.
    pub links: usize,
}

/// Thread-safe store of synonym groups.
#[derive(Debug)]
pub struct RelationStore {
    graph: RwLock<Box<dyn SynonymGraph>>,
    backend: GraphBackend,
}

impl Default for RelationStore {
    /// A clique-backed store seeded with the default pairs.
    fn default() -> Self {
        let store = Self::with_backend(GraphBackend::Clique);
        store.seed_defaults();
        store
    }
}

impl RelationStore {
    /// Build a store as described by `config`.
    ///
    /// Fails if the seed file cannot be read or contains an invalid group.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let store = Self::with_backend(config.backend);

        if config.seed_defaults {
            store.seed_defaults();
        }

        if let Some(path) = &config.seed_file {
            let groups = load_seed_groups(path)?;
            for (i, group) in groups.iter().enumerate() {
                store.add_group(group).map_err(|e| {
                    SynonymousError::config(format!(
                        "Invalid synonym group #{} in '{}': {}",
                        i + 1,
                        path.display(),
                        e
                    ))
                })?;
            }
            info!(
                "Loaded {} synonym groups from {}",
                groups.len(),
                path.display()
            );
        }

        Ok(store)
    }

    /// An empty store using `backend`.
    pub fn with_backend(backend: GraphBackend) -> Self {
        Self {
            graph: RwLock::new(backend.build()),
            backend,
        }
    }

    fn seed_defaults(&self) {
        let mut graph = self.graph.write();
        for (word, synonym) in DEFAULT_SEED_PAIRS {
            graph.merge(word, synonym);
        }
        info!(
            "Seeded {} store with {} default pairs",
            self.backend,
            DEFAULT_SEED_PAIRS.len()
        );
    }

    pub fn backend(&self) -> GraphBackend {
        self.backend
    }

    /// Record that `word` and `synonym` are synonyms.
    ///
    /// Both values are normalized first. The groups of both words are merged
    /// into one group in which every member is a synonym of every other.
    /// Adding a pair that is already connected changes nothing.
    ///
    /// # Errors
    ///
    /// [`SynonymousError::InvalidInput`] if either value is empty after
    /// normalization, or both normalize to the same word. The store is left
    /// unchanged.
    pub fn add_pair(&self, word: &str, synonym: &str) -> Result<()> {
        let (word, synonym) = validate_pair(word, synonym)?;

        let mut graph = self.graph.write();
        let added = graph.merge(word.as_str(), synonym.as_str());

        if log_enabled!(Level::Debug) {
            debug!(
                "Merged '{}' <-> '{}': group size {}, {} new links",
                word,
                synonym,
                graph.synonyms(word.as_str()).len() + 1,
                added
            );
        }

        Ok(())
    }

    /// Record that all `terms` are synonyms of each other.
    ///
    /// Every term is validated before the store is touched, and the whole
    /// group is merged under one write lock. Duplicate terms (after
    /// normalization) are allowed, but at least two distinct words are required.
    pub fn add_group<S: AsRef<str>>(&self, terms: &[S]) -> Result<()> {
        let mut words: Vec<Word> = Vec::with_capacity(terms.len());
        for term in terms {
            let word = Word::parse(term.as_ref()).map_err(|_| {
                SynonymousError::invalid_input("Synonym group cannot contain an empty word")
            })?;
            if !words.contains(&word) {
                words.push(word);
            }
        }

        let Some((first, rest)) = words.split_first() else {
            return Err(SynonymousError::invalid_input(
                "Synonym group needs at least two distinct words",
            ));
        };
        if rest.is_empty() {
            return Err(SynonymousError::invalid_input(
                "Synonym group needs at least two distinct words",
            ));
        }

        let mut graph = self.graph.write();
        let added: usize = rest
            .iter()
            .map(|other| graph.merge(first.as_str(), other.as_str()))
            .sum();
        debug!(
            "Merged group of {} words starting at '{}': {} new links",
            words.len(),
            first,
            added
        );

        Ok(())
    }

    /// Look up the synonyms of `word`.
    ///
    /// The word is normalized the same way as in [`add_pair`](Self::add_pair).
    /// Unknown words, including a word that is empty after normalization,
    /// yield an empty list rather than an error.
    pub fn search(&self, word: &str) -> SearchResult {
        let word = normalize(word);
        let synonyms = if word.is_empty() {
            Vec::new()
        } else {
            self.graph.read().synonyms(&word)
        };
        SearchResult { word, synonyms }
    }

    /// Whether `word` belongs to any synonym group.
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.graph.read().contains(&word)
    }

    /// All known words, sorted.
    pub fn words(&self) -> Vec<String> {
        self.graph.read().words()
    }

    /// All synonym groups, each sorted, ordered by first member.
    pub fn groups(&self) -> Vec<Vec<String>> {
        self.graph.read().groups()
    }

    pub fn len(&self) -> usize {
        self.graph.read().word_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> StoreStats {
        let graph = self.graph.read();
        let groups = graph.groups();
        StoreStats {
            backend: self.backend,
            words: graph.word_count(),
            groups: groups.len(),
            links: groups.iter().map(|g| g.len() * (g.len() - 1)).sum(),
        }
    }
}

fn validate_pair(word: &str, synonym: &str) -> Result<(Word, Word)> {
    let (Ok(word), Ok(synonym)) = (Word::parse(word), Word::parse(synonym)) else {
        return Err(SynonymousError::invalid_input(
            "Word and synonym cannot be empty",
        ));
    };
    if word == synonym {
        return Err(SynonymousError::invalid_input(
            "Word and synonym cannot be the same",
        ));
    }
    Ok((word, synonym))
}
