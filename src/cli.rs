use crate::ExitCode;
use crate::printer::print_range;
use crate::range::LineRange;
use crate::source::SourceFile;
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;

/// File read when `--file` is not given.
pub const DEFAULT_FILE: &str = "server.js";

#[derive(FromArgs, Debug, PartialEq)]
/// Print lines START through END (1-based, inclusive) of a text file,
/// each prefixed with its line number. Pass negative numbers after `--`.
pub struct PrintLines {
    #[argh(positional, from_str_fn(parse_line_number))]
    /// first line to print; values below 1 start at the first line.
    pub start: i64,

    #[argh(positional, from_str_fn(parse_line_number))]
    /// last line to print; clamped to the length of the file.
    pub end: i64,

    #[argh(option, short = 'f', default = "String::from(DEFAULT_FILE)")]
    /// file to read (default: server.js).
    pub file: String,
}

impl PrintLines {
    /// The requested range.
    pub fn range(&self) -> LineRange {
        LineRange::new(self.start, self.end)
    }

    /// Read the file and write the selected lines to `stdout`.
    ///
    /// Returns 0 on success, including when the range selects nothing. A
    /// missing or unreadable file is an error.
    pub fn execute(self, stdout: &mut dyn Write) -> Result<ExitCode> {
        let source = SourceFile::read(&self.file)?;
        print_range(&source, self.range(), stdout)?;
        Ok(0)
    }
}

/// Parse a line number, saturating values outside `i64` to its bounds.
///
/// Accepts surrounding whitespace, an optional sign and digits, optionally
/// grouped with single underscores (`1_000`). Anything else is rejected.
fn parse_line_number(value: &str) -> Result<i64, String> {
    let invalid = || format!("expected an integer, got '{}'", value);

    let trimmed = value.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(invalid());
    }

    let mut n: i64 = 0;
    let mut saturated = false;
    for c in digits.chars().filter(|&c| c != '_') {
        let d = i64::from(c.to_digit(10).ok_or_else(invalid)?);
        if saturated {
            continue;
        }
        let next = n.checked_mul(10).and_then(|n| {
            if negative {
                n.checked_sub(d)
            } else {
                n.checked_add(d)
            }
        });
        match next {
            Some(v) => n = v,
            None => {
                n = if negative { i64::MIN } else { i64::MAX };
                saturated = true;
            }
        }
    }
    Ok(n)
}
