//! docpeek - Documentation previews for fuzzy finders
//!
//! Looks up a keyword in a Vim help tags index, in `man`/`--help` output,
//! or in a small table of static topics, and prints a short preview that can
//! optionally be piped through an external formatter.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DocpeekError;
