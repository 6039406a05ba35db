use crate::errors::{LexError, Result};
use crate::language::Language;
use crate::resources;

/// Extracts the orthographic shape of the first token of `word`.
///
/// The language name is validated first; nothing is initialized for an
/// unsupported value. The input is then tokenized by the language's
/// analyzer and the shape of the first token is returned; any further
/// tokens are ignored.
///
/// The shape is a short code describing the token's character-class
/// pattern — `"Apple"` yields `"Xxxxx"`, `"123"` yields `"ddd"` — as
/// defined by the analyzer (see the class mapping and run truncation on
/// the analyzer itself).
///
/// # Errors
/// - [`LexError::UnsupportedLanguage`] for a language outside the
///   supported set.
/// - [`LexError::EmptyAnalysis`] when tokenization produces no tokens,
///   i.e. for empty or whitespace-only input.
pub fn word_shape(word: &str, language: &str) -> Result<String> {
	let language: Language = language.parse()?;
	let analyzer = resources::analyzer(language);

	let first = analyzer.tokenize(word).next().ok_or(LexError::EmptyAnalysis)?;
	tracing::trace!(language = analyzer.language().code(), token = first, "classifying shape");
	Ok(analyzer.shape(first))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn capitalized_word_shape() {
		assert_eq!(word_shape("Apple", "english").unwrap(), "Xxxxx");
	}

	#[test]
	fn digit_shape_differs_from_the_alphabetic_one() {
		let digits = word_shape("123", "english").unwrap();
		let letters = word_shape("abc", "english").unwrap();
		assert_eq!(digits, "ddd");
		assert_ne!(digits, letters);
	}

	#[test]
	fn long_class_runs_are_truncated() {
		assert_eq!(word_shape("HELLO", "english").unwrap(), "XXXX");
	}

	#[test]
	fn only_the_first_token_is_classified() {
		assert_eq!(
			word_shape("hello world", "english").unwrap(),
			word_shape("hello", "english").unwrap()
		);
	}

	#[test]
	fn empty_and_whitespace_inputs_are_rejected() {
		assert!(matches!(word_shape("", "english"), Err(LexError::EmptyAnalysis)));
		assert!(matches!(word_shape("   ", "german"), Err(LexError::EmptyAnalysis)));
	}

	#[test]
	fn unsupported_language_is_rejected_eagerly() {
		let err = word_shape("word", "italian").unwrap_err();
		assert!(matches!(err, LexError::UnsupportedLanguage(ref v) if v == "italian"));
	}

	#[test]
	fn repeated_calls_are_identical() {
		let first = word_shape("Zürich", "german").unwrap();
		let second = word_shape("Zürich", "german").unwrap();
		assert_eq!(first, second);
	}
}
