use crate::errors::{LexError, Result};

/// The vowel set used for the density test. Lowercase only: membership
/// is checked without folding the input, so uppercase vowels land on the
/// consonant side of the ratio.
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Computes the fraction of consonants in `word`.
///
/// Counts the characters whose value is not one of the lowercase vowels
/// `a`, `e`, `i`, `o`, `u` and divides by the total character count.
/// Every character participates in the denominator, including spaces,
/// digits, and punctuation.
///
/// # Returns
/// A value in `[0.0, 1.0]`: `1.0` when no character is in the vowel set,
/// `0.0` only when every character is.
///
/// # Errors
/// Returns [`LexError::EmptyInput`] when `word` is empty, which would
/// otherwise make the denominator zero.
pub fn consonant_frequency(word: &str) -> Result<f64> {
	if word.is_empty() {
		return Err(LexError::EmptyInput);
	}

	let total = word.chars().count();
	let consonants = word.chars().filter(|c| !VOWELS.contains(c)).count();

	Ok(consonants as f64 / total as f64)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_consonants_score_one() {
		assert_eq!(consonant_frequency("sky").unwrap(), 1.0);
	}

	#[test]
	fn all_vowels_score_zero() {
		assert_eq!(consonant_frequency("aeiou").unwrap(), 0.0);
	}

	#[test]
	fn mixed_word_scores_its_ratio() {
		// h, l, l out of five characters.
		assert_eq!(consonant_frequency("hello").unwrap(), 0.6);
	}

	#[test]
	fn uppercase_vowels_count_as_consonants() {
		assert_eq!(consonant_frequency("AEIOU").unwrap(), 1.0);
		assert_eq!(consonant_frequency("Aeiou").unwrap(), 0.2);
	}

	#[test]
	fn spaces_count_toward_the_denominator() {
		// Vowels: e, a. Everything else, the space included, is a consonant.
		assert_eq!(consonant_frequency("the cat").unwrap(), 5.0 / 7.0);
	}

	#[test]
	fn empty_input_is_an_error() {
		assert!(matches!(consonant_frequency(""), Err(LexError::EmptyInput)));
	}
}
