use hyphenation::{Load, Standard};
use once_cell::sync::OnceCell;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::{LexError, Result};
use crate::language::Language;

/// Shape-class runs longer than this are truncated in the emitted shape.
const MAX_CLASS_RUN: usize = 4;

static EN_PATTERNS: OnceCell<Standard> = OnceCell::new();
static ES_PATTERNS: OnceCell<Standard> = OnceCell::new();
static DE_PATTERNS: OnceCell<Standard> = OnceCell::new();

static EN_ANALYZER: OnceCell<Analyzer> = OnceCell::new();
static ES_ANALYZER: OnceCell<Analyzer> = OnceCell::new();
static DE_ANALYZER: OnceCell<Analyzer> = OnceCell::new();

/// Maps a language to its embedded hyphenation pattern set.
///
/// The mapping is fixed: `en` resolves to American English patterns,
/// `es` to Spanish, `de` to reformed (1996) German.
fn pattern_set(language: Language) -> hyphenation::Language {
	match language {
		Language::English => hyphenation::Language::EnglishUS,
		Language::Spanish => hyphenation::Language::Spanish,
		Language::German => hyphenation::Language::German1996,
	}
}

/// Returns the hyphenation dictionary for `language`.
///
/// The dictionary is decoded from the embedded pattern data on first use
/// and cached for the lifetime of the process. Concurrent first calls
/// race to initialize; exactly one instance is kept and shared. The
/// cached dictionary is read-only, so no further synchronization is
/// needed.
///
/// # Errors
/// Returns [`LexError::ResourceLoad`] if the embedded patterns fail to
/// decode.
pub(crate) fn hyphenator(language: Language) -> Result<&'static Standard> {
	let cell = match language {
		Language::English => &EN_PATTERNS,
		Language::Spanish => &ES_PATTERNS,
		Language::German => &DE_PATTERNS,
	};
	cell.get_or_try_init(|| {
		tracing::debug!(language = language.code(), "loading hyphenation dictionary");
		Standard::from_embedded(pattern_set(language)).map_err(|source| LexError::ResourceLoad {
			language: language.code(),
			source,
		})
	})
}

/// Returns the analyzer for `language`.
///
/// Analyzers are initialized once per language and shared for the
/// lifetime of the process, mirroring the hyphenation registry.
pub(crate) fn analyzer(language: Language) -> &'static Analyzer {
	let cell = match language {
		Language::English => &EN_ANALYZER,
		Language::Spanish => &ES_ANALYZER,
		Language::German => &DE_ANALYZER,
	};
	cell.get_or_init(|| {
		tracing::debug!(language = language.code(), "initializing analyzer");
		Analyzer::new(language)
	})
}

/// Lightweight linguistic analyzer for one language.
///
/// Provides the two annotations the feature surface needs: word-boundary
/// tokenization and a categorical shape classification per token.
///
/// # Responsibilities
/// - Split input text into word tokens (Unicode word boundaries;
///   whitespace segments are discarded, punctuation runs are kept as
///   tokens of their own)
/// - Classify a token's orthographic shape
///
/// Tokenization follows the language-independent Unicode rules; the
/// analyzer is still keyed by language so each language keeps its own
/// shared instance.
#[derive(Debug)]
pub(crate) struct Analyzer {
	language: Language,
}

impl Analyzer {
	fn new(language: Language) -> Self {
		Self { language }
	}

	/// The language this analyzer serves.
	pub(crate) fn language(&self) -> Language {
		self.language
	}

	/// Splits `text` into word tokens.
	///
	/// Whitespace never appears in the output; an empty or
	/// whitespace-only input yields no tokens.
	pub(crate) fn tokenize<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
		text.split_word_bounds()
			.filter(|segment| !segment.chars().all(char::is_whitespace))
	}

	/// Returns the categorical shape of a single token.
	///
	/// Character classes map as follows: lowercase letters to `x`,
	/// uppercase letters to `X`, numeric characters to `d`; any other
	/// character stands for itself. Runs of the same class longer than
	/// four characters are truncated to four, so `"HELLO"` becomes
	/// `"XXXX"` and `"Apple"` stays `"Xxxxx"`.
	pub(crate) fn shape(&self, token: &str) -> String {
		let mut shape = String::new();
		let mut last: Option<char> = None;
		let mut run = 0;

		for c in token.chars() {
			let class = if c.is_alphabetic() {
				if c.is_uppercase() { 'X' } else { 'x' }
			} else if c.is_numeric() {
				'd'
			} else {
				c
			};

			if last == Some(class) {
				run += 1;
			} else {
				run = 0;
				last = Some(class);
			}

			if run < MAX_CLASS_RUN {
				shape.push(class);
			}
		}

		shape
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hyphenators_are_shared_per_language() {
		let first = hyphenator(Language::English).unwrap();
		let second = hyphenator(Language::English).unwrap();
		assert!(std::ptr::eq(first, second));
	}

	#[test]
	fn analyzers_are_shared_per_language() {
		let first = analyzer(Language::Spanish);
		let second = analyzer(Language::Spanish);
		assert!(std::ptr::eq(first, second));
		assert_eq!(first.language(), Language::Spanish);
	}

	#[test]
	fn tokenization_discards_whitespace_segments() {
		let analyzer = analyzer(Language::English);
		let tokens: Vec<&str> = analyzer.tokenize("one  two\tthree").collect();
		assert_eq!(tokens, ["one", "two", "three"]);
		assert_eq!(analyzer.tokenize("   \t ").count(), 0);
		assert_eq!(analyzer.tokenize("").count(), 0);
	}

	#[test]
	fn shape_classes_cover_case_digits_and_punctuation() {
		let analyzer = analyzer(Language::English);
		assert_eq!(analyzer.shape("Apple"), "Xxxxx");
		assert_eq!(analyzer.shape("123"), "ddd");
		assert_eq!(analyzer.shape("don't"), "xxx'x");
	}

	#[test]
	fn shape_truncates_long_class_runs() {
		let analyzer = analyzer(Language::German);
		assert_eq!(analyzer.shape("HELLO"), "XXXX");
		assert_eq!(analyzer.shape("1234567"), "dddd");
		// A run continues through different characters of the same class.
		assert_eq!(analyzer.shape("aaaaab"), "xxxx");
	}
}
