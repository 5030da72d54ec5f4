//! Text analysis for synonym words.
//!
//! Every word is normalized before it is stored or looked up, so the
//! relation store only ever sees lowercased, trimmed text.

pub mod normalizer;

pub use normalizer::{Word, normalize};
