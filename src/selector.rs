//! # Puzzle selection
//!
//! Herein are the puzzle type and the selection heuristics. A puzzle is a
//! base word together with its anagram set: every discoverable word of at
//! least the minimum length chosen during selection. Selection shuffles the
//! candidate words and accepts the first one whose anagram set is
//! well-shaped, i.e. neither overwhelming nor trivial.

use std::{
	cmp::Reverse,
	error::Error,
	fmt::{self, Display, Formatter},
	rc::Rc
};

use log::debug;
use rand::seq::SliceRandom;

use crate::{
	finder::SubsetAnagramFinder,
	index::{signature, AnagramIndex},
	wordlist::WordList
};

/// The minimum length of any word in a puzzle's anagram set.
pub const MIN_WORD_LENGTH: usize = 3;

/// The inclusive range of base word lengths considered for puzzles.
const BASE_LENGTHS: std::ops::RangeInclusive<usize> = 6..=8;

/// The maximum number of anagrams in an acceptable puzzle. Larger sets
/// trigger tightening of the minimum word length.
const MAX_ANAGRAMS: usize = 80;

/// The minimum number of anagrams in an acceptable puzzle.
const MIN_ANAGRAMS: usize = 8;

/// The minimum mean word length of an acceptable anagram set. Rejects
/// puzzles consisting almost entirely of very short words.
const MIN_MEAN_LENGTH: f64 = 4.0;

////////////////////////////////////////////////////////////////////////////////
//                                  Puzzles.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A puzzle is a base word and its resolved anagram set. The anagram set is
/// ordered by descending length, then ascending alphabetical order among
/// equal lengths; the hint sequence walks this order.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Puzzle
{
	/// The base word.
	word: String,

	/// The anagram set, in canonical order.
	anagrams: Vec<String>
}

impl Puzzle
{
	/// Construct a new puzzle from the given base word and anagram set. The
	/// anagram set is put into canonical order: alphabetically ascending,
	/// then stably by length descending, so that alphabetical order is
	/// preserved among words of equal length.
	///
	/// # Arguments
	///
	/// * `word` - The base word.
	/// * `anagrams` - The anagram set, in any order.
	///
	/// # Returns
	///
	/// A new puzzle.
	pub fn new(word: impl Into<String>, mut anagrams: Vec<String>) -> Self
	{
		anagrams.sort();
		anagrams.sort_by_key(|anagram| Reverse(anagram.len()));
		Self { word: word.into(), anagrams }
	}

	/// Get the base word.
	///
	/// # Returns
	///
	/// The base word.
	#[inline]
	#[must_use]
	pub fn word(&self) -> &str { &self.word }

	/// Get the scramble shown to the player: the base word's letters in
	/// sorted order, i.e. its signature.
	///
	/// # Returns
	///
	/// The scrambled base word.
	#[inline]
	#[must_use]
	pub fn scrambled(&self) -> String { signature(&self.word) }

	/// Get the anagram set, in canonical order.
	///
	/// # Returns
	///
	/// The anagram set.
	#[inline]
	#[must_use]
	pub fn anagrams(&self) -> &[String] { self.anagrams.as_slice() }

	/// Get the number of words in the anagram set.
	///
	/// # Returns
	///
	/// The number of words in the anagram set.
	#[inline]
	#[must_use]
	pub fn nr_anagrams(&self) -> usize { self.anagrams.len() }

	/// Get the length of the shortest word in the anagram set.
	///
	/// # Returns
	///
	/// The minimum word length.
	#[must_use]
	pub fn min_length(&self) -> usize
	{
		self.anagrams.iter().map(String::len).min().unwrap_or(0)
	}

	/// Get the mean length of the words in the anagram set.
	///
	/// # Returns
	///
	/// The mean word length.
	#[must_use]
	pub fn mean_length(&self) -> f64
	{
		mean_length(self.anagrams.iter())
	}

	/// Check whether every letter of the given guess occurs somewhere in the
	/// base word. Note that this deliberately does not check multiplicities:
	/// a guess reusing a letter more often than the base word contains it
	/// still passes. This matches the game's loose classification of
	/// near-miss guesses.
	///
	/// # Arguments
	///
	/// * `guess` - The guess to check.
	///
	/// # Returns
	///
	/// `true` if every letter of the guess occurs in the base word, `false`
	/// otherwise.
	#[must_use]
	pub fn uses_known_letters(&self, guess: &str) -> bool
	{
		guess.chars().all(|letter| self.word.contains(letter))
	}
}

/// Compute the mean length of the given words. Answers zero for an empty
/// sequence.
///
/// # Arguments
///
/// * `words` - The words to average over.
///
/// # Returns
///
/// The mean word length.
fn mean_length<'a>(words: impl Iterator<Item = &'a String>) -> f64
{
	let (count, total) = words
		.fold((0usize, 0usize), |(count, total), word| {
			(count + 1, total + word.len())
		});
	if count == 0 { 0.0 } else { total as f64 / count as f64 }
}

////////////////////////////////////////////////////////////////////////////////
//                                 Selection.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A puzzle selector picks a base word and its qualifying anagram set from a
/// word list, using a [`SubsetAnagramFinder`] over a shared read-only
/// [`AnagramIndex`].
#[derive(Clone, Debug)]
#[must_use]
pub struct PuzzleSelector
{
	/// The subset search used to resolve anagram sets.
	finder: SubsetAnagramFinder
}

impl PuzzleSelector
{
	/// Construct a new selector over the given anagram index.
	///
	/// # Arguments
	///
	/// * `index` - The anagram index to select against.
	///
	/// # Returns
	///
	/// A new puzzle selector.
	#[inline]
	pub fn new(index: Rc<AnagramIndex>) -> Self
	{
		Self { finder: SubsetAnagramFinder::new(index) }
	}

	/// Select a puzzle from the given word list:
	///
	/// 1. Filter to candidate base words of 6 to 8 letters and shuffle them
	///    with a freshly seeded generator, so repeated runs pick different
	///    puzzles.
	/// 2. For each candidate, resolve its anagram set at minimum word length
	///    3. While the set holds more than 80 words, tighten the minimum
	///    length and resolve again; a candidate whose set never shrinks
	///    below the cap even at its own full length is skipped.
	/// 3. Accept the first candidate with at least 8 anagrams and a mean
	///    anagram length of at least 4.
	///
	/// # Arguments
	///
	/// * `words` - The word list to select from.
	///
	/// # Returns
	///
	/// The selected puzzle.
	///
	/// # Errors
	///
	/// [`SelectionError::NoPuzzle`] if no candidate across the whole word
	/// list qualifies. This indicates a word list that is too small or
	/// malformed, and is fatal: a degraded puzzle is never substituted.
	pub fn select(&self, words: &WordList) -> Result<Puzzle, SelectionError>
	{
		let mut candidates = words
			.iter()
			.filter(|word| BASE_LENGTHS.contains(&word.len()))
			.collect::<Vec<_>>();
		candidates.shuffle(&mut rand::rng());
		'candidates: for word in candidates
		{
			let mut min_length = MIN_WORD_LENGTH;
			let mut anagrams = self.finder.find(word, min_length);
			while anagrams.len() > MAX_ANAGRAMS
			{
				if min_length == word.len()
				{
					// Even the full-length threshold leaves too many
					// anagrams. This rare case happens when the set holds
					// essentially only short words; the candidate is
					// unusable.
					continue 'candidates;
				}
				min_length += 1;
				anagrams = self.finder.find(word, min_length);
			}
			let mean = mean_length(anagrams.iter());
			if anagrams.len() >= MIN_ANAGRAMS && mean >= MIN_MEAN_LENGTH
			{
				debug!(
					"Selected puzzle {} with {} anagrams at min length {}",
					word,
					anagrams.len(),
					min_length
				);
				return Ok(Puzzle::new(
					word,
					anagrams.into_iter().collect()
				))
			}
		}
		Err(SelectionError::NoPuzzle)
	}
}

/// The complete enumeration of puzzle selection errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionError
{
	/// No candidate word in the word list yields a qualifying anagram set.
	NoPuzzle
}

impl Display for SelectionError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::NoPuzzle =>
				write!(f, "no qualifying puzzle word in the word list")
		}
	}
}

impl Error for SelectionError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
