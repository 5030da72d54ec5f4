//! Union-find synonym graph.
//!
//! Stores only group membership: each word gets a slot, slots point at a
//! parent, and the root of a tree identifies the group. Each root also keeps
//! the list of its members so that a search walks exactly one group.
//!
//! Compared to [`CliqueGraph`](crate::synonym::CliqueGraph), a merge is
//! O(α(n) + smaller group) instead of O(n²), while a search becomes
//! O(group size) instead of a single lookup.

use ahash::AHashMap;

use crate::synonym::graph::SynonymGraph;

/// Synonym graph backed by a disjoint-set forest.
#[derive(Debug, Clone, Default)]
pub struct DisjointSetGraph {
    /// word -> slot
    slots: AHashMap<String, usize>,
    /// slot -> word
    names: Vec<String>,
    parent: Vec<usize>,
    /// Members of each root's group. Empty for non-root slots.
    members: Vec<Vec<usize>>,
}

impl DisjointSetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_or_insert(&mut self, word: &str) -> usize {
        if let Some(&slot) = self.slots.get(word) {
            return slot;
        }
        let slot = self.names.len();
        self.slots.insert(word.to_string(), slot);
        self.names.push(word.to_string());
        self.parent.push(slot);
        self.members.push(vec![slot]);
        slot
    }

    /// Find the root of `slot`, halving the path on the way.
    fn find_mut(&mut self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            let grandparent = self.parent[self.parent[slot]];
            self.parent[slot] = grandparent;
            slot = grandparent;
        }
        slot
    }

    /// Find the root of `slot` without compressing.
    ///
    /// Union by size keeps trees logarithmically shallow, so reads stay cheap.
    fn find(&self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            slot = self.parent[slot];
        }
        slot
    }

    fn group_of(&self, word: &str) -> Option<&[usize]> {
        let slot = *self.slots.get(word)?;
        Some(&self.members[self.find(slot)])
    }

    /// Number of directed synonym links the relation represents.
    pub fn link_count(&self) -> usize {
        self.members
            .iter()
            .filter(|group| !group.is_empty())
            .map(|group| group.len() * (group.len() - 1))
            .sum()
    }
}

impl SynonymGraph for DisjointSetGraph {
    fn merge(&mut self, word: &str, synonym: &str) -> usize {
        let a = self.slot_or_insert(word);
        let b = self.slot_or_insert(synonym);
        let root_a = self.find_mut(a);
        let root_b = self.find_mut(b);
        if root_a == root_b {
            return 0;
        }

        let (root, child) = if self.members[root_a].len() >= self.members[root_b].len() {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        let moved = std::mem::take(&mut self.members[child]);
        let size_root = self.members[root].len();
        let size_child = moved.len();

        self.parent[child] = root;
        self.members[root].extend(moved);

        // Every member of each side gains a link to every member of the other.
        2 * size_root * size_child
    }

    fn synonyms(&self, word: &str) -> Vec<String> {
        let Some(group) = self.group_of(word) else {
            return Vec::new();
        };
        let mut synonyms: Vec<String> = group
            .iter()
            .map(|&slot| &self.names[slot])
            .filter(|name| name.as_str() != word)
            .cloned()
            .collect();
        synonyms.sort();
        synonyms
    }

    fn contains(&self, word: &str) -> bool {
        self.slots.contains_key(word)
    }

    fn words(&self) -> Vec<String> {
        let mut words = self.names.clone();
        words.sort();
        words
    }

    fn groups(&self) -> Vec<Vec<String>> {
        let mut groups: Vec<Vec<String>> = self
            .members
            .iter()
            .filter(|group| !group.is_empty())
            .map(|group| {
                let mut names: Vec<String> =
                    group.iter().map(|&slot| self.names[slot].clone()).collect();
                names.sort();
                names
            })
            .collect();
        groups.sort();
        groups
    }

    fn word_count(&self) -> usize {
        self.names.len()
    }

    fn name(&self) -> &'static str {
        "disjoint_set"
    }
}
