//! Print a numbered range of lines from a text file.
//!
//! The crate reads one file fully into memory, selects a contiguous block of
//! lines by a 1-based inclusive `(start, end)` pair and writes each selected
//! line as `N:content`. It is meant as a quick inspection aid.
//!
//! The main entry point is [`PrintLines`], which is also the argument parser of
//! the `printlines` binary. The building blocks [`LineRange`], [`SourceFile`]
//! and [`print_range`] can be used on their own.

mod cli;
mod printer;
mod range;
mod source;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

pub use cli::{DEFAULT_FILE, PrintLines};
pub use printer::print_range;
pub use range::LineRange;
pub use source::SourceFile;
