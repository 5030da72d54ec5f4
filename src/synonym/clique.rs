//! Materialized-closure synonym graph.
//!
//! Every synonym group is stored as a complete pairwise clique: each member's
//! adjacency set holds every other member of the group. A group of `k` words
//! therefore occupies `k * (k - 1)` directed entries, and a lookup is a single
//! map access.
//!
//! Merging two groups re-materializes the clique over their union, which costs
//! O(n²) in the combined group size. That is fine for thesaurus-sized groups
//! but does not scale to large dense components; use
//! [`DisjointSetGraph`](crate::synonym::DisjointSetGraph) for those.

use ahash::{AHashMap, AHashSet};

use crate::synonym::graph::SynonymGraph;

/// Synonym graph that stores the full transitive closure.
#[derive(Debug, Clone, Default)]
pub struct CliqueGraph {
    /// word -> every other word of its group
    adjacency: AHashMap<String, AHashSet<String>>,
}

impl CliqueGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every word reachable from `word`, excluding `word` itself.
    ///
    /// With the closure intact this equals `adjacency[word]`, but the merge
    /// walks the edges anyway so that it never depends on a shortcut the
    /// invariant is supposed to guarantee.
    fn reachable_from(&self, word: &str) -> AHashSet<String> {
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut to_visit = vec![word];

        while let Some(current) = to_visit.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(neighbours) = self.adjacency.get(current) {
                to_visit.extend(
                    neighbours
                        .iter()
                        .map(String::as_str)
                        .filter(|next| !visited.contains(next)),
                );
            }
        }

        visited.remove(word);
        visited.into_iter().map(str::to_string).collect()
    }

    /// Link every word of `group` to every other one.
    fn connect_all(&mut self, group: &[String]) -> usize {
        let mut added = 0;
        for word in group {
            let links = self.adjacency.entry(word.clone()).or_default();
            links.reserve(group.len().saturating_sub(1));
            for other in group {
                if other != word && links.insert(other.clone()) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Total number of directed links stored.
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(|links| links.len()).sum()
    }
}

impl SynonymGraph for CliqueGraph {
    fn merge(&mut self, word: &str, synonym: &str) -> usize {
        let group_a = self.reachable_from(word);
        let group_b = self.reachable_from(synonym);

        let mut combined: AHashSet<String> =
            AHashSet::with_capacity(group_a.len() + group_b.len() + 2);
        combined.insert(word.to_string());
        combined.insert(synonym.to_string());
        combined.extend(group_a);
        combined.extend(group_b);

        let combined: Vec<String> = combined.into_iter().collect();
        self.connect_all(&combined)
    }

    fn synonyms(&self, word: &str) -> Vec<String> {
        let mut synonyms: Vec<String> = self
            .adjacency
            .get(word)
            .map(|links| links.iter().cloned().collect())
            .unwrap_or_default();
        synonyms.sort();
        synonyms
    }

    fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.adjacency.keys().cloned().collect();
        words.sort();
        words
    }

    fn groups(&self) -> Vec<Vec<String>> {
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut groups = Vec::new();

        for (word, links) in &self.adjacency {
            if seen.contains(word.as_str()) {
                continue;
            }
            seen.insert(word.as_str());
            seen.extend(links.iter().map(String::as_str));

            let mut group: Vec<String> = std::iter::once(word).chain(links).cloned().collect();
            group.sort();
            groups.push(group);
        }

        groups.sort();
        groups
    }

    fn word_count(&self) -> usize {
        self.adjacency.len()
    }

    fn name(&self) -> &'static str {
        "clique"
    }
}
