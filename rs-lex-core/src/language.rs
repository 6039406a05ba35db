use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LexError;

/// Languages with linguistic resources available to this crate.
///
/// `Language` is a pure selector: it picks which hyphenation dictionary
/// and which analyzer serve a request. It carries no state of its own.
///
/// # Invariants
/// - The set is closed; any other language name is rejected at parse time
///   with [`LexError::UnsupportedLanguage`], before any resource is loaded.
/// - Parsing matches the lowercase names exactly (`"english"`, `"spanish"`,
///   `"german"`); no trimming or case folding is applied.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	English,
	Spanish,
	German,
}

impl Language {
	/// All supported languages, in declaration order.
	pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::German];

	/// Returns the fixed two-letter code keying this language's resources.
	pub fn code(self) -> &'static str {
		match self {
			Language::English => "en",
			Language::Spanish => "es",
			Language::German => "de",
		}
	}

	/// Returns the lowercase language name accepted by [`FromStr`].
	pub fn name(self) -> &'static str {
		match self {
			Language::English => "english",
			Language::Spanish => "spanish",
			Language::German => "german",
		}
	}
}

impl FromStr for Language {
	type Err = LexError;

	/// Parses a language from its exact lowercase name.
	///
	/// # Errors
	/// Returns [`LexError::UnsupportedLanguage`] carrying the offending
	/// value for anything outside the supported set.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"english" => Ok(Language::English),
			"spanish" => Ok(Language::Spanish),
			"german" => Ok(Language::German),
			other => Err(LexError::UnsupportedLanguage(other.to_owned())),
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
