//! Lexical complexity signal library.
//!
//! This crate computes word-level complexity signals for a candidate word
//! or phrase, intended as input features for downstream complex-word
//! identification models:
//! - Consonant density of a word
//! - Language-dependent syllable counts (hyphenation patterns)
//! - Language-dependent orthographic word shapes
//! - Unigram-probability tables loaded from delimited files
//!
//! Each signal is computed independently; no data flows between them.
//! Language-keyed linguistic resources are loaded once per process and
//! shared afterwards, so repeated calls stay cheap.

/// Feature computation (unigram tables, consonants, syllables, shapes).
///
/// This module exposes the public feature surface while keeping the
/// underlying linguistic resources private.
pub mod features;

/// The supported languages and their resource codes.
pub mod language;

/// Error type and result alias shared by all feature operations.
pub mod errors;

/// Per-language linguistic resources (hyphenation dictionaries, analyzers).
///
/// Not exposed
pub(crate) mod resources;
