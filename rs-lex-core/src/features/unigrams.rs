use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LexError, Result};

/// Reads a unigram-probability table from a comma-delimited file.
///
/// The file is UTF-8 text, one record per line, no header row, with
/// exactly two fields: `word,probability`. Records are processed in file
/// order, so a word appearing twice keeps the probability of its last
/// occurrence. Keys are taken verbatim; only the numeric field tolerates
/// surrounding padding.
///
/// The file handle lives for the duration of this call and is released
/// on every exit path.
///
/// # Errors
/// - [`LexError::FileNotFound`] if the path does not exist or cannot be
///   opened.
/// - [`LexError::Parse`] if a record does not hold exactly two fields or
///   its second field is not a valid decimal float.
pub fn load_unigrams<P: AsRef<Path>>(path: P) -> Result<HashMap<String, f64>> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|source| LexError::FileNotFound {
		path: path.to_owned(),
		source,
	})?;

	let mut reader = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.from_reader(BufReader::new(file));

	let mut words = HashMap::new();
	for record in reader.records() {
		let record = record.map_err(|e| LexError::Parse {
			line: e.position().map_or(0, csv::Position::line),
			reason: e.to_string(),
		})?;
		let line = record.position().map_or(0, csv::Position::line);

		if record.len() != 2 {
			return Err(LexError::Parse {
				line,
				reason: format!("expected exactly two fields, found {}", record.len()),
			});
		}

		let probability: f64 = record[1].trim().parse().map_err(|_| LexError::Parse {
			line,
			reason: format!("'{}' is not a valid probability", &record[1]),
		})?;
		words.insert(record[0].to_owned(), probability);
	}

	tracing::debug!(path = %path.display(), words = words.len(), "unigram table loaded");
	Ok(words)
}

/// An in-memory unigram-probability table.
///
/// Maps each word to its observed probability of occurrence in some
/// reference corpus. Built once from a file, immutable afterwards, and
/// owned exclusively by the caller; there is no shared instance.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Unigrams {
	words: HashMap<String, f64>,
}

impl Unigrams {
	/// Builds a table by parsing a comma-delimited file.
	///
	/// See [`load_unigrams`] for the accepted format and errors.
	pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
		Ok(Self { words: load_unigrams(path)? })
	}

	/// Loads a table, preferring the binary sidecar when one exists.
	///
	/// A sidecar is the same table serialized with `postcard` to
	/// `<path>.bin`. When the sidecar is present it is loaded directly;
	/// otherwise the delimited file is parsed and the sidecar written
	/// for future fast loads. For an unchanged source file the result
	/// is identical to [`Unigrams::from_csv`].
	///
	/// # Errors
	/// - Any error of [`Unigrams::from_csv`] when parsing the source.
	/// - [`LexError::Cache`] if the sidecar cannot be read, decoded, or
	///   written.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let sidecar = path.with_extension("bin");

		if sidecar.exists() {
			tracing::debug!(path = %sidecar.display(), "loading unigram sidecar");
			let bytes = fs::read(&sidecar).map_err(|e| LexError::Cache {
				path: sidecar.clone(),
				reason: e.to_string(),
			})?;
			return postcard::from_bytes(&bytes).map_err(|e| LexError::Cache {
				path: sidecar,
				reason: e.to_string(),
			});
		}

		let table = Self::from_csv(path)?;
		let bytes = postcard::to_stdvec(&table).map_err(|e| LexError::Cache {
			path: sidecar.clone(),
			reason: e.to_string(),
		})?;
		fs::write(&sidecar, bytes).map_err(|e| LexError::Cache {
			path: sidecar,
			reason: e.to_string(),
		})?;
		Ok(table)
	}

	/// Returns the probability recorded for `word`, if any.
	pub fn probability(&self, word: &str) -> Option<f64> {
		self.words.get(word).copied()
	}

	/// Number of distinct words in the table.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether the table holds no words.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Iterates over `(word, probability)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.words.iter().map(|(word, probability)| (word.as_str(), *probability))
	}

	/// Consumes the table, returning the underlying map.
	pub fn into_map(self) -> HashMap<String, f64> {
		self.words
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn write_table(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
		let path = dir.path().join(name);
		fs::write(&path, contents).unwrap();
		path
	}

	#[test]
	fn loads_every_record_in_file_order() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_table(&dir, "unigrams.csv", "the,0.0267\nof,0.0134\ncat,0.00013\n");

		let table = load_unigrams(&path).unwrap();
		assert_eq!(table.len(), 3);
		assert_eq!(table["the"], 0.0267);
		assert_eq!(table["of"], 0.0134);
		assert_eq!(table["cat"], 0.00013);
	}

	#[test]
	fn last_duplicate_key_wins() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_table(&dir, "unigrams.csv", "word,0.1\nword,0.9\n");

		let table = load_unigrams(&path).unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table["word"], 0.9);
	}

	#[test]
	fn numeric_field_tolerates_padding() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_table(&dir, "unigrams.csv", "word, 0.5\n");

		let table = load_unigrams(&path).unwrap();
		assert_eq!(table["word"], 0.5);
	}

	#[test]
	fn rejects_records_without_exactly_two_fields() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_table(&dir, "unigrams.csv", "fine,0.1\na,0.2,0.3\n");

		let err = load_unigrams(&path).unwrap_err();
		assert!(matches!(err, LexError::Parse { line: 2, .. }));
	}

	#[test]
	fn rejects_non_numeric_probabilities() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_table(&dir, "unigrams.csv", "word,often\n");

		let err = load_unigrams(&path).unwrap_err();
		assert!(matches!(err, LexError::Parse { .. }));
	}

	#[test]
	fn missing_file_is_reported_as_such() {
		let err = load_unigrams("/nonexistent/unigrams.csv").unwrap_err();
		assert!(matches!(err, LexError::FileNotFound { .. }));
	}

	#[test]
	fn open_writes_and_prefers_the_sidecar() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_table(&dir, "unigrams.csv", "word,0.25\n");

		let first = Unigrams::open(&path).unwrap();
		assert_eq!(first.probability("word"), Some(0.25));
		assert!(dir.path().join("unigrams.bin").exists());

		// The source changes, but the sidecar is authoritative once written.
		fs::write(&path, "word,0.75\n").unwrap();
		let second = Unigrams::open(&path).unwrap();
		assert_eq!(second.probability("word"), Some(0.25));
	}

	#[test]
	fn accessors_expose_the_table() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_table(&dir, "unigrams.csv", "a,0.5\nb,0.25\n");

		let table = Unigrams::from_csv(&path).unwrap();
		assert_eq!(table.len(), 2);
		assert!(!table.is_empty());
		assert_eq!(table.probability("a"), Some(0.5));
		assert_eq!(table.probability("missing"), None);

		let mut pairs: Vec<(String, f64)> =
			table.iter().map(|(w, p)| (w.to_owned(), p)).collect();
		pairs.sort_by(|x, y| x.0.cmp(&y.0));
		assert_eq!(pairs, vec![("a".to_owned(), 0.5), ("b".to_owned(), 0.25)]);

		let map = table.into_map();
		assert_eq!(map.len(), 2);
	}
}
