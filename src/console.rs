//! # Console
//!
//! Herein is the line-oriented console boundary: cleaning raw input into
//! commands, rendering turn outcomes into player-facing messages, and
//! formatting elapsed times. The game core never prints; it answers
//! [`Turn`](crate::session::Turn) values and this module turns them into
//! text.

use std::{
	io::{self, BufRead},
	time::Duration
};

use crate::session::Turn;

////////////////////////////////////////////////////////////////////////////////
//                               Input cleaning.                              //
////////////////////////////////////////////////////////////////////////////////

/// Clean a raw input line into a command string: trim surrounding
/// whitespace and uppercase. Any token containing a character other than an
/// ASCII letter is rejected to "no value", as is a blank line. The game core
/// relies on this contract and never sees unnormalized input.
///
/// # Arguments
///
/// * `raw` - The raw input line.
///
/// # Returns
///
/// The cleaned command, or `None` if the line is blank or contains
/// disallowed characters.
#[must_use]
pub fn clean_input(raw: &str) -> Option<String>
{
	let word = raw.trim().to_uppercase();
	if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic())
	{
		None
	}
	else
	{
		Some(word)
	}
}

/// Read the next cleaned command from the given input. Blocks until a line
/// is produced; there is no timeout on a turn.
///
/// # Arguments
///
/// * `input` - The input to read from.
///
/// # Returns
///
/// The next cleaned command, `Some(None)` for a line that cleaned to
/// nothing, or `None` at end of input.
///
/// # Errors
///
/// If the input cannot be read, an error is returned.
pub fn read_command(
	input: &mut impl BufRead
) -> Result<Option<Option<String>>, io::Error>
{
	let mut line = String::new();
	if input.read_line(&mut line)? == 0
	{
		Ok(None)
	}
	else
	{
		Ok(Some(clean_input(&line)))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Rendering.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Render the outcome of a turn into the message reported to the player.
///
/// # Arguments
///
/// * `turn` - The outcome of the turn.
///
/// # Returns
///
/// The message to print, empty for outcomes that report nothing.
#[must_use]
pub fn render_turn(turn: &Turn) -> String
{
	match turn
	{
		Turn::Ignored => String::new(),
		Turn::Board { guessed, min_length, mean_length_centi } =>
		{
			format!(
				"You have guessed: {}\n\
					The min word length for this puzzle is {}\n\
					The mean word length for this puzzle is {}.{:02}",
				guessed.join(", "),
				min_length,
				mean_length_centi / 100,
				mean_length_centi % 100
			)
		},
		Turn::Help =>
		{
			"B = check which words you have already guessed.\n\
				L = get a hint, use multiple times for more revealing \
				hints.\n\
				Q = quit the game."
				.to_string()
		},
		Turn::Hint { masked, length } =>
		{
			format!("{} ({})", masked, length)
		},
		Turn::Quit { found, missed } =>
		{
			format!(
				"You have successfully found: {}\n\
					You have not found: {}",
				found.join(", "),
				missed.join(", ")
			)
		},
		Turn::TooShort { guess } =>
		{
			format!(
				"All words need to be at least 3 letters, you guessed {}",
				guess
			)
		},
		Turn::AlreadyGuessed { guess } =>
		{
			format!("You have already guessed the word {}", guess)
		},
		Turn::Correct { guess, hint_reset: true, .. } =>
		{
			format!("Correct! {} is a valid word. Next hint is reset.", guess)
		},
		Turn::Correct { guess, .. } =>
		{
			format!("Correct! {} is a valid word", guess)
		},
		Turn::NotAWord { guess } =>
		{
			format!("{} is not a valid word", guess)
		},
		Turn::NotInPuzzle { guess, scrambled } =>
		{
			format!("{} cannot be made from {}", guess, scrambled)
		}
	}
}

/// Format an elapsed duration for the end-of-session report, to whole
/// seconds.
///
/// # Arguments
///
/// * `elapsed` - The elapsed duration.
///
/// # Returns
///
/// A human-readable rendition of the duration.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String
{
	let total = elapsed.as_secs();
	let (minutes, seconds) = (total / 60, total % 60);
	match (minutes, seconds)
	{
		(0, s) => pluralize(s, "second"),
		(m, 0) => pluralize(m, "minute"),
		(m, s) =>
			format!("{} and {}", pluralize(m, "minute"), pluralize(s, "second"))
	}
}

/// Render a count with its singular or plural unit.
///
/// # Arguments
///
/// * `count` - The count.
/// * `unit` - The singular unit name.
///
/// # Returns
///
/// The count with its unit.
#[must_use]
fn pluralize(count: u64, unit: &str) -> String
{
	if count == 1
	{
		format!("1 {}", unit)
	}
	else
	{
		format!("{} {}s", count, unit)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
