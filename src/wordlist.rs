//! # Word list
//!
//! Herein is support for reading word lists from disk. A word list is the
//! dictionary source for the game: an ordered sequence of cleaned, uppercase
//! words. Each line of a word-list file is considered a single word; loading
//! strips surrounding whitespace and uppercases.

use std::{
	fs::File,
	io::{self, BufRead, BufReader},
	path::Path
};

use log::trace;

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A word list is an ordered sequence of uppercase words. Iteration order is
/// the order of the lines in the originating file, which in turn fixes the
/// order of the groups in the anagram index.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct WordList(Vec<String>);

impl WordList
{
	/// Construct an empty word list. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty word list.
	#[inline]
	pub fn new() -> Self { Self(Vec::new()) }

	/// Construct a word list directly from the given words. The words are
	/// uppercased but otherwise taken verbatim, in order.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the word list.
	///
	/// # Returns
	///
	/// A word list containing the given words.
	pub fn from_words<T: AsRef<str>>(words: &[T]) -> Self
	{
		Self(words.iter().map(|w| w.as_ref().to_uppercase()).collect())
	}

	/// Check if the word list is empty.
	///
	/// # Returns
	///
	/// `true` if the word list is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Get the number of words in the word list.
	///
	/// # Returns
	///
	/// The number of words in the word list.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Get an iterator over the words in the word list, in file order.
	///
	/// # Returns
	///
	/// An iterator over the words in the word list.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &str>
	{
		self.0.iter().map(String::as_str)
	}

	/// Get the words of the word list as a slice, in file order.
	///
	/// # Returns
	///
	/// The words of the word list.
	#[inline]
	#[must_use]
	pub fn as_slice(&self) -> &[String] { self.0.as_slice() }

	/// Construct a word list from the contents of the given file. Each line
	/// in the file is considered a single word. Words are uppercased; blank
	/// lines are skipped.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A word list containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(&path)?;
		let reader = BufReader::new(file);
		let mut words = Vec::new();
		for line in reader.lines()
		{
			let word = line?.trim().to_uppercase();
			if !word.is_empty()
			{
				words.push(word);
			}
		}
		trace!(
			"Read {} words from {}",
			words.len(),
			path.as_ref().display()
		);
		Ok(Self(words))
	}

	/// Construct a word list from the contents of the given file, keeping
	/// only words of exactly the requested length. This supports building
	/// smaller anagram indices for a single word length.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	/// * `nr_letters` - The exact word length to keep.
	///
	/// # Returns
	///
	/// A word list containing the words of the requested length.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_with_length<T: AsRef<Path>>(
		path: T,
		nr_letters: usize
	) -> Result<Self, io::Error>
	{
		let all = Self::read_from_file(path)?;
		Ok(Self(
			all.0.into_iter().filter(|w| w.len() == nr_letters).collect()
		))
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

	use crate::wordlist::WordList;

	/// Test basic functionality of [`WordList`]:
	///
	/// * [`WordList::new`]
	/// * [`WordList::is_empty`]
	/// * [`WordList::from_words`]
	/// * [`WordList::iter`]
	#[test]
	fn test_from_words()
	{
		let words = WordList::new();
		assert!(words.is_empty());
		let words = WordList::from_words(&["heel", "Hele", "LHEE"]);
		assert_eq!(words.len(), 3);
		assert_eq!(
			words.iter().collect::<Vec<_>>(),
			vec!["HEEL", "HELE", "LHEE"]
		);
	}

	/// Test reading a word list from a file, including uppercasing, blank
	/// line removal, and preservation of file order:
	///
	/// * [`WordList::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "aarde\n\nearth\nHEART\nrathe\n").unwrap();
		let words = WordList::read_from_file(file.path()).unwrap();
		assert_eq!(
			words.iter().collect::<Vec<_>>(),
			vec!["AARDE", "EARTH", "HEART", "RATHE"]
		);
	}

	/// Test the exact-length variant:
	///
	/// * [`WordList::read_with_length`]
	#[test]
	fn test_read_with_length()
	{
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "ear\nearth\nhear\nheart\nhat\n").unwrap();
		let words = WordList::read_with_length(file.path(), 3).unwrap();
		assert_eq!(words.iter().collect::<Vec<_>>(), vec!["EAR", "HAT"]);
		let words = WordList::read_with_length(file.path(), 5).unwrap();
		assert_eq!(words.iter().collect::<Vec<_>>(), vec!["EARTH", "HEART"]);
	}

	/// A missing word-list file is a hard error for the caller to surface.
	#[test]
	fn test_missing_file()
	{
		assert!(WordList::read_from_file("no/such/file.txt").is_err());
	}
}
