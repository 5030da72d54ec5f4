//! Default seed pairs.
//!
//! A freshly built store merges these pairs in order, through the same path
//! as user-submitted pairs.

/// Pairs merged into every default store.
pub const DEFAULT_SEED_PAIRS: &[(&str, &str)] = &[
    ("happy", "joyful"),
    ("happy", "glad"),
    ("sad", "unhappy"),
    ("big", "large"),
    ("small", "tiny"),
    ("fast", "quick"),
    ("clean", "wash"),
];
