//! Top-level module for the lexical feature surface.
//!
//! Four independent components, each answering one question about a
//! candidate word or phrase:
//! - Unigram-probability lookup tables (`unigrams`)
//! - Consonant density (`consonants`)
//! - Syllable counts (`syllables`)
//! - Orthographic word shapes (`shape`)
//!
//! Components never call each other; callers combine them as needed.

/// Unigram-probability tables read from comma-delimited files.
///
/// Supports plain CSV parsing and a compact binary sidecar for fast
/// reloads.
pub mod unigrams;

/// Consonant density of a word.
pub mod consonants;

/// Syllable counting backed by per-language hyphenation patterns.
pub mod syllables;

/// Orthographic word-shape extraction for the first token of an input.
pub mod shape;
