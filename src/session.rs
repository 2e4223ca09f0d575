//! # Game session
//!
//! Herein is the guess-handling state machine. A session owns one puzzle,
//! the set of words guessed so far, and the hint level. Each turn consumes
//! one cleaned command string and answers a [`Turn`] describing the outcome;
//! rendering the outcome is the console's concern, not the session's. The
//! session ends in a terminal state when every anagram has been found or the
//! player quits.

use std::{
	collections::{hash_map::DefaultHasher, HashSet},
	hash::{Hash, Hasher},
	time::{Duration, Instant}
};

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::selector::{Puzzle, MIN_WORD_LENGTH};

////////////////////////////////////////////////////////////////////////////////
//                                 Sessions.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The state of a game session: active, or finished by one of the two
/// terminal transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState
{
	/// The session is running and accepting commands.
	Active,

	/// Terminal: every word in the anagram set has been guessed.
	Won,

	/// Terminal: the player quit.
	Quit
}

/// The outcome of a single turn. Each variant carries exactly the data the
/// console needs to report the outcome to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Turn
{
	/// A blank command, or a command arriving after the session has already
	/// finished. Nothing happens; the console re-prompts.
	Ignored,

	/// The board report: the words guessed so far, sorted by length then
	/// alphabetically, plus the puzzle's word-length statistics.
	Board
	{
		/// The guessed words, sorted by length then alphabetically.
		guessed: Vec<String>,

		/// The length of the shortest word in the anagram set.
		min_length: usize,

		/// The mean length of the words in the anagram set, scaled by 100
		/// and truncated, to keep the outcome exactly comparable.
		mean_length_centi: usize
	},

	/// The list of available commands.
	Help,

	/// A hint for the first not-yet-guessed word in the anagram set.
	Hint
	{
		/// The hint target with the hidden positions masked by `.`.
		masked: String,

		/// The length of the hint target.
		length: usize
	},

	/// The player quit. Terminal.
	Quit
	{
		/// The words found, sorted alphabetically.
		found: Vec<String>,

		/// The words not found, in anagram-set order.
		missed: Vec<String>
	},

	/// The guess is shorter than the minimum word length.
	TooShort
	{
		/// The offending guess.
		guess: String
	},

	/// The guess was already made earlier in the session.
	AlreadyGuessed
	{
		/// The repeated guess.
		guess: String
	},

	/// The guess is a word in the anagram set, newly found.
	Correct
	{
		/// The correct guess.
		guess: String,

		/// Whether the guess was the current hint target, resetting the
		/// hint level.
		hint_reset: bool,

		/// Whether this guess completed the anagram set. Terminal if so.
		won: bool
	},

	/// Every letter of the guess occurs in the base word, but the guess is
	/// not in the anagram set. Letter multiplicities are deliberately not
	/// checked here, so a guess needing more copies of a letter than the
	/// puzzle holds lands in this variant rather than the next one.
	NotAWord
	{
		/// The offending guess.
		guess: String
	},

	/// The guess uses letters the puzzle does not contain.
	NotInPuzzle
	{
		/// The offending guess.
		guess: String,

		/// The scrambled puzzle, for the report.
		scrambled: String
	}
}

/// A game session: one puzzle, the guessed-word set, the hint level, and the
/// start time. Owned exclusively by the running play-through; a new
/// play-through constructs a fresh session, discarding the old one.
#[derive(Clone, Debug)]
#[must_use]
pub struct GameSession
{
	/// The active puzzle.
	puzzle: Puzzle,

	/// The words guessed so far. Always a subset of the anagram set.
	guessed: HashSet<String>,

	/// The hint level: how many letters of the hint target to reveal.
	hint_level: usize,

	/// The session state.
	state: SessionState,

	/// When the session started, for elapsed-time reporting.
	started: Instant
}

impl GameSession
{
	/// Construct a new session for the given puzzle. The hint level starts
	/// at 1: the player already knows the scramble's letter count, so the
	/// first hint may reveal a letter outright.
	///
	/// # Arguments
	///
	/// * `puzzle` - The puzzle to play.
	///
	/// # Returns
	///
	/// A new game session.
	pub fn new(puzzle: Puzzle) -> Self
	{
		Self
		{
			puzzle,
			guessed: HashSet::new(),
			hint_level: 1,
			state: SessionState::Active,
			started: Instant::now()
		}
	}

	/// Get the active puzzle.
	///
	/// # Returns
	///
	/// The active puzzle.
	#[inline]
	#[must_use]
	pub fn puzzle(&self) -> &Puzzle { &self.puzzle }

	/// Get the session state.
	///
	/// # Returns
	///
	/// The session state.
	#[inline]
	#[must_use]
	pub fn state(&self) -> SessionState { self.state }

	/// Check if the session has reached a terminal state.
	///
	/// # Returns
	///
	/// `true` if the session is finished, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_finished(&self) -> bool
	{
		!matches!(self.state, SessionState::Active)
	}

	/// Get the number of words guessed so far.
	///
	/// # Returns
	///
	/// The number of words guessed so far.
	#[inline]
	#[must_use]
	pub fn nr_guessed(&self) -> usize { self.guessed.len() }

	/// Get the time elapsed since the session started.
	///
	/// # Returns
	///
	/// The elapsed time.
	#[inline]
	#[must_use]
	pub fn elapsed(&self) -> Duration { self.started.elapsed() }

	/// Get the words guessed so far, sorted alphabetically.
	///
	/// # Returns
	///
	/// The guessed words, sorted alphabetically.
	#[must_use]
	pub fn found_words(&self) -> Vec<String>
	{
		let mut found = self.guessed.iter().cloned().collect::<Vec<_>>();
		found.sort();
		found
	}

	/// Handle one cleaned command string: a single-letter command (`B`,
	/// `H`, `L`, `Q`) or a guess. The input must already be uppercased and
	/// restricted to letters; that normalization is the console's contract.
	///
	/// # Arguments
	///
	/// * `command` - The cleaned command string.
	///
	/// # Returns
	///
	/// The outcome of the turn.
	pub fn handle(&mut self, command: &str) -> Turn
	{
		if self.is_finished() || command.is_empty()
		{
			return Turn::Ignored
		}
		match command
		{
			"B" => self.board(),
			"H" => Turn::Help,
			"L" => self.hint(),
			"Q" => self.quit(),
			guess if guess.len() < MIN_WORD_LENGTH =>
				Turn::TooShort { guess: guess.to_string() },
			guess if self.guessed.contains(guess) =>
				Turn::AlreadyGuessed { guess: guess.to_string() },
			guess if self.puzzle.anagrams().contains(&guess.to_string()) =>
				self.correct(guess),
			guess if self.puzzle.uses_known_letters(guess) =>
				Turn::NotAWord { guess: guess.to_string() },
			guess => Turn::NotInPuzzle
			{
				guess: guess.to_string(),
				scrambled: self.puzzle.scrambled()
			}
		}
	}

	/// Report the board: the guessed words sorted by length then
	/// alphabetically, and the puzzle's word-length statistics.
	///
	/// # Returns
	///
	/// The board report.
	fn board(&self) -> Turn
	{
		let mut guessed = self.found_words();
		guessed.sort_by_key(String::len);
		Turn::Board
		{
			guessed,
			min_length: self.puzzle.min_length(),
			mean_length_centi: (self.puzzle.mean_length() * 100.0) as usize
		}
	}

	/// Record a newly found word. If the word was the current hint target
	/// and hints were in progress, the hint level resets, since the next
	/// target is a different word whose length the player does not yet
	/// know. If the guessed set now equals the full anagram set, the session
	/// transitions to [`SessionState::Won`].
	///
	/// # Arguments
	///
	/// * `guess` - The newly found word.
	///
	/// # Returns
	///
	/// The outcome of the turn.
	fn correct(&mut self, guess: &str) -> Turn
	{
		let was_target =
			self.hint_target().map(|target| target == guess).unwrap_or(false);
		self.guessed.insert(guess.to_string());
		let hint_reset = was_target && self.hint_level > 0;
		if hint_reset
		{
			self.hint_level = 0;
		}
		// Set equality, not count equality, guards the win condition against
		// any duplicate-insertion bug.
		let won = self
			.puzzle
			.anagrams()
			.iter()
			.all(|anagram| self.guessed.contains(anagram));
		if won
		{
			debug!("Session won after {:?}", self.elapsed());
			self.state = SessionState::Won;
		}
		Turn::Correct { guess: guess.to_string(), hint_reset, won }
	}

	/// Quit the session: a normal transition to the terminal
	/// [`SessionState::Quit`] state, observed by the driver loop.
	///
	/// # Returns
	///
	/// The outcome of the turn, carrying the found and not-found words.
	fn quit(&mut self) -> Turn
	{
		self.state = SessionState::Quit;
		let missed = self
			.puzzle
			.anagrams()
			.iter()
			.filter(|anagram| !self.guessed.contains(*anagram))
			.cloned()
			.collect();
		Turn::Quit { found: self.found_words(), missed }
	}

	/// Get the current hint target: the first not-yet-guessed word in the
	/// anagram set's fixed order.
	///
	/// # Returns
	///
	/// The hint target, or `None` if every word has been guessed.
	#[must_use]
	fn hint_target(&self) -> Option<&str>
	{
		self.puzzle
			.anagrams()
			.iter()
			.find(|anagram| !self.guessed.contains(*anagram))
			.map(String::as_str)
	}

	/// Emit a hint for the current target and advance the hint level. The
	/// positions to hide are drawn from a permutation seeded by the target
	/// word itself, so repeated hints for the same target reveal the same
	/// positions plus strictly more as the level rises.
	///
	/// # Returns
	///
	/// The outcome of the turn.
	fn hint(&mut self) -> Turn
	{
		// An active session always has an unguessed word left, else it
		// would have transitioned to the won state.
		match self.hint_target()
		{
			Some(target) =>
			{
				let masked = mask(target, self.hint_level);
				let length = target.len();
				self.hint_level += 1;
				Turn::Hint { masked, length }
			},
			None => Turn::Ignored
		}
	}
}

/// Mask a hint target, revealing `hint_level` of its letters and hiding the
/// rest behind `.`. The hidden positions are the first entries of a
/// positions permutation shuffled by a generator seeded deterministically
/// from the target word, which makes the reveal reproducible per target and
/// monotonic as the level rises. A level at or beyond the word length
/// reveals the whole word.
///
/// # Arguments
///
/// * `target` - The hint target.
/// * `hint_level` - The number of letters to reveal.
///
/// # Returns
///
/// The masked hint target.
#[must_use]
fn mask(target: &str, hint_level: usize) -> String
{
	let nr_hidden = target.len().saturating_sub(hint_level);
	let mut positions = (0..target.len()).collect::<Vec<_>>();
	let mut rng = StdRng::seed_from_u64(hint_seed(target));
	positions.shuffle(&mut rng);
	let hidden = positions[..nr_hidden].iter().collect::<HashSet<_>>();
	target
		.chars()
		.enumerate()
		.map(|(position, letter)| {
			if hidden.contains(&position) { '.' } else { letter }
		})
		.collect()
}

/// Derive a deterministic seed from a hint target. Different targets get
/// independent position choices; the same target always gets the same one.
///
/// # Arguments
///
/// * `target` - The hint target.
///
/// # Returns
///
/// The seed for the target's position permutation.
#[must_use]
fn hint_seed(target: &str) -> u64
{
	let mut hasher = DefaultHasher::new();
	target.hash(&mut hasher);
	hasher.finish()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		selector::Puzzle,
		session::{mask, GameSession, SessionState, Turn}
	};

	/// Build the canonical test session: base word EARTH with a three-word
	/// anagram set of equal lengths, so the canonical order is purely
	/// alphabetical.
	fn session() -> GameSession
	{
		GameSession::new(Puzzle::new(
			"EARTH",
			vec![
				"RATHE".to_string(),
				"HEART".to_string(),
				"EARTH".to_string()
			]
		))
	}

	/// Guessing every word in the anagram set transitions to the won state.
	#[test]
	fn test_win()
	{
		let mut session = session();
		assert_eq!(session.state(), SessionState::Active);
		assert_eq!(
			session.handle("EARTH"),
			Turn::Correct
			{
				guess: "EARTH".to_string(),
				hint_reset: true,
				won: false
			}
		);
		assert_eq!(
			session.handle("HEART"),
			Turn::Correct
			{
				guess: "HEART".to_string(),
				hint_reset: false,
				won: false
			}
		);
		assert_eq!(
			session.handle("RATHE"),
			Turn::Correct
			{
				guess: "RATHE".to_string(),
				hint_reset: false,
				won: true
			}
		);
		assert_eq!(session.state(), SessionState::Won);
		assert!(session.is_finished());
		// Further commands are ignored.
		assert_eq!(session.handle("B"), Turn::Ignored);
	}

	/// A repeated guess is reported and does not grow the guessed set.
	#[test]
	fn test_already_guessed()
	{
		let mut session = session();
		let _ = session.handle("HEART");
		assert_eq!(session.nr_guessed(), 1);
		assert_eq!(
			session.handle("HEART"),
			Turn::AlreadyGuessed { guess: "HEART".to_string() }
		);
		assert_eq!(session.nr_guessed(), 1);
		assert_eq!(session.state(), SessionState::Active);
	}

	/// Quitting is a normal transition to a terminal state, reporting the
	/// remaining unguessed words in anagram-set order.
	#[test]
	fn test_quit()
	{
		let mut session = session();
		let _ = session.handle("HEART");
		assert_eq!(
			session.handle("Q"),
			Turn::Quit
			{
				found: vec!["HEART".to_string()],
				missed: vec!["EARTH".to_string(), "RATHE".to_string()]
			}
		);
		assert_eq!(session.state(), SessionState::Quit);
		assert!(session.is_finished());
	}

	/// Blank commands are no-ops.
	#[test]
	fn test_blank()
	{
		let mut session = session();
		assert_eq!(session.handle(""), Turn::Ignored);
		assert_eq!(session.state(), SessionState::Active);
	}

	/// Too-short guesses are reported without any state change.
	#[test]
	fn test_too_short()
	{
		let mut session = session();
		assert_eq!(
			session.handle("EA"),
			Turn::TooShort { guess: "EA".to_string() }
		);
		assert_eq!(session.nr_guessed(), 0);
	}

	/// A guess built only from puzzle letters, but not in the anagram set,
	/// is "not a valid word" - even when it needs more copies of a letter
	/// than the puzzle contains. A guess with a foreign letter "cannot be
	/// made" from the puzzle.
	#[test]
	fn test_near_misses()
	{
		let mut session = session();
		assert_eq!(
			session.handle("THAR"),
			Turn::NotAWord { guess: "THAR".to_string() }
		);
		// Letter multiplicities are not checked: TREE needs two Es.
		assert_eq!(
			session.handle("TREE"),
			Turn::NotAWord { guess: "TREE".to_string() }
		);
		assert_eq!(
			session.handle("HEARD"),
			Turn::NotInPuzzle
			{
				guess: "HEARD".to_string(),
				scrambled: "AEHRT".to_string()
			}
		);
		assert_eq!(session.nr_guessed(), 0);
	}

	/// The board reports guessed words and the puzzle's length statistics.
	#[test]
	fn test_board()
	{
		let mut session = session();
		let _ = session.handle("HEART");
		let _ = session.handle("EARTH");
		assert_eq!(
			session.handle("B"),
			Turn::Board
			{
				guessed: vec!["EARTH".to_string(), "HEART".to_string()],
				min_length: 5,
				mean_length_centi: 500
			}
		);
	}

	/// Consecutive hints for the same target reveal strictly more letters,
	/// and previously revealed positions stay revealed.
	#[test]
	fn test_hint_monotonicity()
	{
		let mut session = session();
		let mut previous: Option<String> = None;
		for expected_revealed in 1..=5
		{
			let turn = session.handle("L");
			let Turn::Hint { masked, length } = turn
			else
			{
				panic!("expected a hint");
			};
			assert_eq!(length, 5);
			let revealed = masked.chars().filter(|c| *c != '.').count();
			assert_eq!(revealed, expected_revealed);
			if let Some(previous) = previous
			{
				for (p, m) in previous.chars().zip(masked.chars())
				{
					if p != '.'
					{
						assert_eq!(p, m, "revealed position hidden again");
					}
				}
			}
			previous = Some(masked);
		}
		// Beyond the word length, the whole word stays revealed.
		assert_eq!(
			session.handle("L"),
			Turn::Hint { masked: "EARTH".to_string(), length: 5 }
		);
	}

	/// The masked hint always shows the target's own letters at the
	/// revealed positions, for any level.
	#[test]
	fn test_mask()
	{
		for level in 0..=6
		{
			let masked = mask("RATHE", level);
			assert_eq!(masked.len(), 5);
			for (m, t) in masked.chars().zip("RATHE".chars())
			{
				assert!(m == '.' || m == t);
			}
			let revealed = masked.chars().filter(|c| *c != '.').count();
			assert_eq!(revealed, level.min(5));
			// Reproducible for the same target.
			assert_eq!(masked, mask("RATHE", level));
		}
	}

	/// Guessing the current hint target resets the hint level; guessing a
	/// different word leaves it alone.
	#[test]
	fn test_hint_reset()
	{
		let mut session = session();
		// The hint target is EARTH, the first word in canonical order. The
		// level starts at 1, so guessing a non-target first does not reset.
		assert_eq!(
			session.handle("RATHE"),
			Turn::Correct
			{
				guess: "RATHE".to_string(),
				hint_reset: false,
				won: false
			}
		);
		// EARTH is the target and the level is positive: reset.
		assert_eq!(
			session.handle("EARTH"),
			Turn::Correct
			{
				guess: "EARTH".to_string(),
				hint_reset: true,
				won: false
			}
		);
		// The level is now 0, so guessing the new target does not report a
		// reset.
		assert_eq!(
			session.handle("HEART"),
			Turn::Correct
			{
				guess: "HEART".to_string(),
				hint_reset: false,
				won: true
			}
		);
	}
}
