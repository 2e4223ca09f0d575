//! # Word Finder
//!
//! Word Finder is an anagram guessing game. Each play-through scrambles the
//! letters of a secret 6 to 8 letter base word; the player must discover
//! every word of 3 or more letters that can be formed from a subset of those
//! letters. Progressive hints reveal more and more of the next undiscovered
//! word.
//!
//! Via command line options, the user can specify the word list to draw
//! puzzles from. The anagram index built from the word list is cached in a
//! binary file beside it, so subsequent launches skip the indexing pass.

use std::{
	io::{self, BufRead},
	rc::Rc
};

use clap::{Parser, Subcommand};
use log::{debug, trace};

use word_finder::{
	console::{format_elapsed, read_command, render_turn},
	index::AnagramIndex,
	selector::PuzzleSelector,
	session::{GameSession, SessionState},
	wordlist::WordList
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for the Word Finder anagram game.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0")]
struct Opts
{
	/// The path to the directory containing the word-list and index files.
	#[arg(short = 'd', long, default_value = "data")]
	directory: String,

	/// The basename shared by the word-list text file and the binary index
	/// file, sans the extension.
	#[arg(short = 'n', long, default_value = "dutch")]
	name: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Copy, Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary anagram index and exit.
	Generate,

	/// Play the game on the console.
	Play
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	// Open the anagram index, creating the binary index if necessary.
	let index = AnagramIndex::open(&opts.directory, &opts.name)
		.unwrap_or_else(|e|
			panic!(
				"Failed to open anagram index: {}/{}.idx or {0}/{1}.txt: {2}",
				opts.directory,
				opts.name,
				e
			)
		);

	// Execute the appropriate subcommand.
	match opts.command
	{
		Command::Generate =>
		{
			trace!("Exiting after generating binary index");
		},
		Command::Play =>
		{
			let words = WordList::read_from_file(
				format!("{}/{}.txt", opts.directory, opts.name)
			)
			.unwrap_or_else(|e|
				panic!(
					"Failed to read word list: {}/{}.txt: {}",
					opts.directory,
					opts.name,
					e
				)
			);
			play(&words, index)
				.unwrap_or_else(|e| panic!("Failed to drive console: {}", e));
		}
	}
}

/// Run play-throughs until the player declines another one. Each
/// play-through constructs a fresh puzzle and session, discarding the old
/// ones.
///
/// # Arguments
///
/// * `words` - The word list to draw puzzles from.
/// * `index` - The anagram index over that word list.
///
/// # Errors
///
/// Any error that occurs while reading from the console.
fn play(words: &WordList, index: AnagramIndex) -> io::Result<()>
{
	let selector = PuzzleSelector::new(Rc::new(index));
	let stdin = io::stdin();
	let mut input = stdin.lock();
	println!("Welcome to Word Finder!");
	loop
	{
		// No qualifying puzzle means the word list is too small or
		// malformed; never substitute a degraded puzzle.
		let puzzle = selector
			.select(words)
			.unwrap_or_else(|e| panic!("Failed to select a puzzle: {}", e));
		println!(
			"The min word length for this puzzle is {}\n\
				The mean word length for this puzzle is {:.2}",
			puzzle.min_length(),
			puzzle.mean_length()
		);
		let mut session = GameSession::new(puzzle);
		while !session.is_finished()
		{
			println!(
				"Your puzzle is {}. You have guessed {}/{} words. \
					Type H to see the game options.",
				session.puzzle().scrambled(),
				session.nr_guessed(),
				session.puzzle().nr_anagrams()
			);
			let Some(command) = read_command(&mut input)?
			else
			{
				// End of input is equivalent to quitting.
				return Ok(())
			};
			let Some(command) = command else { continue };
			let turn = session.handle(&command);
			let message = render_turn(&turn);
			if !message.is_empty()
			{
				println!("{}", message);
			}
		}
		report_end(&session);
		if !play_again(&mut input)?
		{
			println!("Thank you for playing Word Finder!");
			return Ok(())
		}
	}
}

/// Report the end-of-session statistics. A win reports the elapsed time and
/// the full word list; a quit reports the elapsed time only, the found and
/// not-found words having been reported by the quit transition itself.
///
/// # Arguments
///
/// * `session` - The finished session.
fn report_end(session: &GameSession)
{
	let elapsed = format_elapsed(session.elapsed());
	match session.state()
	{
		SessionState::Won =>
		{
			println!(
				"Congratulations! You found all {} words in {}: {}",
				session.puzzle().nr_anagrams(),
				elapsed,
				session.found_words().join(", ")
			);
		},
		_ => println!("Total playing time is {}", elapsed)
	}
}

/// Ask whether the player wants another play-through. Keep prompting until
/// a recognizable answer arrives; end of input declines.
///
/// # Arguments
///
/// * `input` - The console input.
///
/// # Returns
///
/// `true` for another play-through, `false` to stop.
///
/// # Errors
///
/// Any error that occurs while reading from the console.
fn play_again(input: &mut impl BufRead) -> io::Result<bool>
{
	println!("Do you want to play again? Y/N");
	loop
	{
		let Some(answer) = read_command(input)? else { return Ok(false) };
		match answer.as_deref()
		{
			Some("Y") => return Ok(true),
			Some("N") | Some("Q") => return Ok(false),
			_ => println!("Do you want to play again? Y/N")
		}
	}
}
