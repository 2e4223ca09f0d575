//! # Word Finder
//!
//! Word Finder is an anagram guessing game. A puzzle is a scramble of the
//! letters of a secret base word; the player must discover every word that
//! can be formed from a subset of those letters. The crate is organized
//! around four components:
//!
//! * [`index`](crate::index) - the anagram index, a persistent mapping from
//!   a canonical letter signature to every word sharing that signature.
//! * [`finder`](crate::finder) - the subset search, which unions index
//!   lookups over all letter subsets of a word.
//! * [`selector`](crate::selector) - the puzzle selection heuristics, which
//!   pick a base word with a well-shaped anagram set.
//! * [`session`](crate::session) - the turn-based guessing state machine.
//!
//! The [`wordlist`](crate::wordlist) and [`console`](crate::console) modules
//! are the plumbing: word-list files on disk and line-oriented terminal I/O,
//! respectively.

pub mod console;
pub mod finder;
pub mod index;
pub mod selector;
pub mod session;
pub mod wordlist;
