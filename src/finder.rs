//! # Subset anagram finder
//!
//! Herein is the subset search: given a word and a minimum subset length,
//! enumerate every combination of the word's letter positions and union the
//! anagram-index lookups of their signatures. This discovers every word that
//! can be formed from some sub-multiset of the word's letters.

use std::{collections::HashSet, rc::Rc};

use itertools::Itertools;
use log::trace;

use crate::index::{signature, AnagramIndex};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A subset anagram finder resolves the words discoverable from the letter
/// subsets of a candidate word, against a shared read-only [`AnagramIndex`].
#[derive(Clone, Debug)]
#[must_use]
pub struct SubsetAnagramFinder
{
	/// The anagram index to search against.
	index: Rc<AnagramIndex>
}

impl SubsetAnagramFinder
{
	/// Construct a new finder for the given anagram index.
	///
	/// # Arguments
	///
	/// * `index` - The anagram index to search against.
	///
	/// # Returns
	///
	/// A new finder for the given anagram index.
	#[inline]
	pub fn new(index: Rc<AnagramIndex>) -> Self { Self { index } }

	/// Find every word discoverable as an anagram of a position-subset of
	/// the given word's letters, for every subset length from `min_length`
	/// to the word's full length. Position combinations are a combinatorial
	/// choice, not a permutation; repeated letters can make distinct
	/// combinations share a signature, but the results are unioned into a
	/// set, so duplicates collapse naturally.
	///
	/// The number of subsets considered is the sum of `C(len, k)` for `k`
	/// from `min_length` to `len`, so callers must bound `min_length` to
	/// keep the search tractable.
	///
	/// # Arguments
	///
	/// * `word` - The candidate word.
	/// * `min_length` - The minimum subset length, at most the word length.
	///
	/// # Returns
	///
	/// The set of discoverable words.
	pub fn find(&self, word: &str, min_length: usize) -> HashSet<String>
	{
		debug_assert!(min_length <= word.len());
		let letters = word.chars().collect::<Vec<_>>();
		let mut anagrams = HashSet::new();
		for nr_letters in min_length..=letters.len()
		{
			for subset in letters.iter().copied().combinations(nr_letters)
			{
				let key = signature(&subset.into_iter().collect::<String>());
				anagrams
					.extend(self.index.lookup(&key).iter().cloned());
			}
		}
		trace!(
			"Found {} anagrams for {} at min length {}",
			anagrams.len(),
			word,
			min_length
		);
		anagrams
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::rc::Rc;

	use crate::{
		finder::SubsetAnagramFinder,
		index::AnagramIndex,
		wordlist::WordList
	};

	/// Build a finder over a small fixed word list.
	fn finder() -> SubsetAnagramFinder
	{
		let words = WordList::from_words(&[
			"EAR", "ERA", "ART", "RAT", "TAR", "HAT", "HEAR", "RATE",
			"TEAR", "HEART", "EARTH", "THE", "HER"
		]);
		SubsetAnagramFinder::new(Rc::new(AnagramIndex::build(&words)))
	}

	/// The full-length subset finds the word's own anagram group, and
	/// shorter subsets find the words formed from partial letter sets.
	#[test]
	fn test_find()
	{
		let finder = finder();
		let anagrams = finder.find("EARTH", 3);
		for expected in [
			"EAR", "ERA", "ART", "RAT", "TAR", "HAT", "HEAR", "RATE",
			"TEAR", "HEART", "EARTH", "THE", "HER"
		]
		{
			assert!(anagrams.contains(expected), "missing {}", expected);
		}
		assert_eq!(anagrams.len(), 13);
	}

	/// Raising the minimum length excludes the shorter discoveries.
	#[test]
	fn test_min_length()
	{
		let finder = finder();
		let anagrams = finder.find("EARTH", 4);
		for expected in ["HEAR", "RATE", "TEAR", "HEART", "EARTH"]
		{
			assert!(anagrams.contains(expected), "missing {}", expected);
		}
		assert_eq!(anagrams.len(), 5);
		let anagrams = finder.find("EARTH", 5);
		assert_eq!(anagrams.len(), 2);
	}

	/// The result depends only on letter content, not on the order of the
	/// letters in the input word.
	#[test]
	fn test_letter_order_invariance()
	{
		let finder = finder();
		let a = finder.find("EARTH", 3);
		let b = finder.find("HEART", 3);
		let c = finder.find("THRAE", 3);
		assert_eq!(a, b);
		assert_eq!(a, c);
	}

	/// Repeated letters in the candidate word yield distinct position
	/// combinations with equal signatures; the result is still a proper set.
	#[test]
	fn test_repeated_letters()
	{
		let words = WordList::from_words(&["HEEL", "HELE", "EEL", "HEE"]);
		let finder =
			SubsetAnagramFinder::new(Rc::new(AnagramIndex::build(&words)));
		let anagrams = finder.find("HEEL", 3);
		assert_eq!(anagrams.len(), 4);
	}
}
