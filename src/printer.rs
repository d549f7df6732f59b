use crate::range::LineRange;
use crate::source::SourceFile;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// Write the lines of `source` selected by `range` to `out`.
///
/// Each line is written as `{number}:{content}\n`, where `number` is the
/// original 1-based line number. Returns how many lines were written.
pub fn print_range(source: &SourceFile, range: LineRange, out: &mut dyn Write) -> Result<usize> {
    let bounds = range.bounds(source.len());
    debug!(
        "{}: lines {}..{} selected by {}..={} of {}",
        source.path().display(),
        bounds.start,
        bounds.end,
        range.start,
        range.end,
        source.len()
    );

    let selected = &source.lines()[bounds.clone()];
    for (i, line) in bounds.zip(selected) {
        writeln!(out, "{}:{}", i + 1, line)?;
    }
    out.flush()?;
    Ok(selected.len())
}
