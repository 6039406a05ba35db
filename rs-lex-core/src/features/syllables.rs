use hyphenation::Hyphenator;

use crate::errors::Result;
use crate::language::Language;
use crate::resources;

/// Estimates the number of syllables in a word or phrase.
///
/// The language name is validated first; nothing is loaded for an
/// unsupported value. The input is then split on whitespace and each
/// token is hyphenated independently with the language's pattern
/// dictionary: a token with `n` break opportunities contributes `n + 1`
/// syllables. Token counts are summed.
///
/// # Parameters
/// - `phrase`: a single word or a whitespace-separated phrase.
/// - `language`: one of `"english"`, `"spanish"`, `"german"` (exact,
///   case-sensitive).
///
/// # Returns
/// The summed syllable estimate. Every token contributes at least one
/// syllable, so the result is at least the number of tokens; an empty or
/// whitespace-only input has no tokens and yields 0.
///
/// # Errors
/// - [`LexError::UnsupportedLanguage`](crate::errors::LexError) for a
///   language outside the supported set.
/// - [`LexError::ResourceLoad`](crate::errors::LexError) if the pattern
///   dictionary fails to decode on first use.
pub fn num_syllables(phrase: &str, language: &str) -> Result<usize> {
	let language: Language = language.parse()?;
	let dictionary = resources::hyphenator(language)?;

	let mut total = 0;
	for token in phrase.split_whitespace() {
		total += dictionary.hyphenate(token).breaks.len() + 1;
	}

	Ok(total)
}
