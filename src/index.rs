//! # Anagram index
//!
//! Herein is support for construction, lookup, and persistence of the
//! anagram index. The index maps a canonical letter signature to every word
//! sharing that signature; two words are anagrams of each other exactly when
//! their signatures are equal. The index is built once from a word-list
//! snapshot and is read-only thereafter.

use std::{
	collections::BTreeMap,
	fs::File,
	io::{self, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::wordlist::WordList;

////////////////////////////////////////////////////////////////////////////////
//                                Signatures.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Compute the signature of a word: its letters sorted into lexicographic
/// order. The signature depends only on letter content, not letter order.
/// Inputs are expected to be pre-normalized to uppercase ASCII letters.
///
/// # Arguments
///
/// * `word` - The word to compute the signature of.
///
/// # Returns
///
/// The signature of the word.
#[must_use]
pub fn signature(word: &str) -> String
{
	let mut letters = word.chars().collect::<Vec<_>>();
	letters.sort_unstable();
	letters.into_iter().collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// An anagram index is a mapping from [`signature`] to the ordered list of
/// words sharing that signature. Grouping is deterministic: the order of the
/// words within a group is the iteration order of the originating word list,
/// and the backing map is a [`BTreeMap`] so that serialization is
/// reproducible.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct AnagramIndex(BTreeMap<String, Vec<String>>);

impl AnagramIndex
{
	/// Construct an empty anagram index. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty anagram index.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the anagram index is empty.
	///
	/// # Returns
	///
	/// `true` if the anagram index is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Get the number of signature groups in the anagram index.
	///
	/// # Returns
	///
	/// The number of signature groups.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Build an anagram index by grouping every word of the given word list
	/// by its signature. Deterministic; no side effects beyond constructing
	/// the mapping.
	///
	/// # Arguments
	///
	/// * `words` - The word list to index.
	///
	/// # Returns
	///
	/// An anagram index covering the given word list.
	pub fn build(words: &WordList) -> Self
	{
		let mut groups = BTreeMap::<String, Vec<String>>::new();
		for word in words.iter()
		{
			groups.entry(signature(word)).or_default().push(word.to_string());
		}
		trace!("Indexed {} words into {} groups", words.len(), groups.len());
		Self(groups)
	}

	/// Look up the words sharing the given signature. Absence is not an
	/// error: an unknown signature answers an empty slice.
	///
	/// # Arguments
	///
	/// * `signature` - The signature to look up.
	///
	/// # Returns
	///
	/// The words sharing the given signature, in word-list order.
	#[inline]
	#[must_use]
	pub fn lookup(&self, signature: &str) -> &[String]
	{
		self.0.get(signature).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Find all anagrams of the given word, i.e. the group for the word's
	/// own signature.
	///
	/// # Arguments
	///
	/// * `word` - The word to find anagrams of.
	///
	/// # Returns
	///
	/// The anagrams of the given word, in word-list order.
	#[inline]
	#[must_use]
	pub fn find_anagrams_for(&self, word: &str) -> &[String]
	{
		self.lookup(&signature(word))
	}

	/// Open an anagram index with the given name. Only the specified
	/// directory will be searched. `name` denotes the basename shared by the
	/// word-list text file (`<name>.txt`) and the binary index file
	/// (`<name>.idx`). If the binary index exists _and_ is newer than the
	/// text file, it will be read; otherwise, the text file will be read,
	/// indexed, and a binary index will be created (to optimize future
	/// reads).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The basename of the word-list and index files.
	///
	/// # Returns
	///
	/// An anagram index covering the named word list.
	///
	/// # Errors
	///
	/// * If the word-list file cannot be opened or read, an error is
	///   returned.
	/// * If the binary index file contains invalid data, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let idx_path = dir.as_ref().join(format!("{}.idx", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Compare the modification times of the binary and text files, in
		// pursuit of using the binary index only if it's newer than the text
		// word list. If anything goes wrong, fall back to rebuilding from
		// the text file. Note that we don't have to explicitly check for the
		// existence of the binary index file, as the `metadata` call will
		// fail if it doesn't exist.
		if idx_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|idx_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| idx_time > txt_time)
			})
			.unwrap_or(false)
		{
			let index = Self::deserialize_from_file(&idx_path);
			trace!("Read binary index: {}", idx_path.display());
			index
		}
		else
		{
			let words = WordList::read_from_file(&txt_path)?;
			let index = Self::build(&words);
			trace!("Built index from word list: {}", txt_path.display());
			match index.serialize_to_file(&idx_path)
			{
				Ok(_) =>
				{
					trace!("Wrote binary index: {}", idx_path.display())
				},
				Err(e) => warn!(
					"Failed to write binary index: {}: {}",
					idx_path.display(),
					e
				)
			}
			Ok(index)
		}
	}

	/// Load an anagram index from the given file, treating a missing file as
	/// "no index yet": a missing file answers an empty index, which the
	/// caller must explicitly rebuild. Corrupt data, by contrast, fails
	/// loudly, as silently treating corruption as "empty" risks masking data
	/// loss.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// The anagram index deserialized from the file, or an empty index if
	/// the file does not exist.
	///
	/// # Errors
	///
	/// * If the file exists but cannot be read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn load_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		match Self::deserialize_from_file(path)
		{
			Ok(index) => Ok(index),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
			Err(e) => Err(e)
		}
	}

	/// Deserialize an anagram index from the given file. The file must
	/// contain a serialized index in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// An anagram index deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let index = bincode::deserialize(&content)
			.map_err(|_e| ErrorKind::InvalidData)?;
		Ok(index)
	}

	/// Serialize the anagram index to the given file. The index is
	/// serialized in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or written, an error is returned.
	/// * If the index cannot be serialized, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&content)?;
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::io::Write;

	use tempfile::NamedTempFile;

	use crate::{
		index::{signature, AnagramIndex},
		wordlist::WordList
	};

	/// Signatures are the letters in sorted order, independent of letter
	/// order in the input.
	#[test]
	fn test_signature()
	{
		assert_eq!(signature(""), "");
		assert_eq!(signature("HEEL"), "EEHL");
		assert_eq!(signature("HELE"), "EEHL");
		assert_eq!(signature("EARTH"), "AEHRT");
		assert_eq!(signature("HEART"), "AEHRT");
	}

	/// Every indexed word is found in the group for its own signature, and
	/// groups preserve word-list order.
	#[test]
	fn test_build_and_lookup()
	{
		let words =
			WordList::from_words(&["HEEL", "HELE", "LHEE", "EAR", "ERA"]);
		let index = AnagramIndex::build(&words);
		assert!(!index.is_empty());
		assert_eq!(index.len(), 2);
		for word in words.iter()
		{
			assert!(
				index.lookup(&signature(word)).contains(&word.to_string()),
				"own group must contain {}",
				word
			);
		}
		assert_eq!(
			index.find_anagrams_for("HEEL"),
			&["HEEL", "HELE", "LHEE"]
		);
		assert_eq!(index.find_anagrams_for("EAR"), &["EAR", "ERA"]);
		// Absence is not an error.
		assert_eq!(index.lookup("XYZ"), &[] as &[String]);
	}

	/// Serialization round-trips exactly, including for the empty index and
	/// for word lists containing duplicates.
	#[test]
	fn test_round_trip()
	{
		let lists = [
			WordList::new(),
			WordList::from_words(&["HEEL", "HELE", "LHEE"]),
			WordList::from_words(&["EAR", "ERA", "EAR", "HEART", "EARTH"])
		];
		for words in lists
		{
			let index = AnagramIndex::build(&words);
			let file = NamedTempFile::new().unwrap();
			index.serialize_to_file(file.path()).unwrap();
			let deserialized =
				AnagramIndex::deserialize_from_file(file.path()).unwrap();
			assert_eq!(index, deserialized);
		}
	}

	/// A missing index file is treated as "no index yet", i.e. an empty
	/// index, not an error.
	#[test]
	fn test_load_missing()
	{
		let index = AnagramIndex::load_from_file("no/such/index.idx").unwrap();
		assert!(index.is_empty());
	}

	/// A corrupt index file fails loudly, distinctly from a missing one.
	#[test]
	fn test_load_corrupt()
	{
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(b"definitely not a bincode index").unwrap();
		let result = AnagramIndex::load_from_file(file.path());
		assert!(result.is_err());
		assert_eq!(
			result.unwrap_err().kind(),
			std::io::ErrorKind::InvalidData
		);
	}

	/// Opening by basename rebuilds from the text file and writes a binary
	/// index beside it; a subsequent open reads the binary index and answers
	/// the same mapping.
	#[test]
	fn test_open()
	{
		let dir = tempfile::tempdir().unwrap();
		let txt_path = dir.path().join("words.txt");
		let mut txt = std::fs::File::create(&txt_path).unwrap();
		write!(txt, "heel\nhele\nlhee\near\nera\n").unwrap();
		drop(txt);
		let built = AnagramIndex::open(dir.path(), "words").unwrap();
		assert_eq!(built.find_anagrams_for("HEEL"), &["HEEL", "HELE", "LHEE"]);
		assert!(dir.path().join("words.idx").exists());
		let reopened = AnagramIndex::open(dir.path(), "words").unwrap();
		assert_eq!(built, reopened);
	}
}
