use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate, defaulting to [`LexError`].
pub type Result<T, E = LexError> = std::result::Result<T, E>;

/// Errors raised by the feature operations.
///
/// Every error is raised synchronously at the point of failure and
/// propagates directly to the caller. There is no local recovery, retry,
/// or fallback language; callers wanting graceful degradation must
/// validate inputs upstream.
#[derive(Debug, Error)]
pub enum LexError {
	/// The unigram file could not be opened for reading.
	#[error("cannot open unigram file '{path}'")]
	FileNotFound {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A record in the unigram file is malformed.
	///
	/// Raised when a record does not hold exactly two fields, or when
	/// its second field is not a valid decimal float.
	#[error("malformed unigram record on line {line}: {reason}")]
	Parse { line: u64, reason: String },

	/// The binary sidecar kept next to a unigram file could not be
	/// read, decoded, or written.
	#[error("unigram sidecar '{path}': {reason}")]
	Cache { path: PathBuf, reason: String },

	/// The input word was empty where a non-empty word is required.
	#[error("input word must not be empty")]
	EmptyInput,

	/// The requested language is outside the supported set.
	///
	/// Raised eagerly, before any resource is loaded.
	#[error("language '{0}' is not supported (expected one of: english, spanish, german)")]
	UnsupportedLanguage(String),

	/// Linguistic analysis produced no tokens for the input.
	#[error("analysis produced no tokens")]
	EmptyAnalysis,

	/// A per-language hyphenation dictionary failed to load.
	#[error("cannot load the '{language}' hyphenation dictionary")]
	ResourceLoad {
		language: &'static str,
		#[source]
		source: hyphenation::load::Error,
	},
}
