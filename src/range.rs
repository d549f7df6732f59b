use std::ops::Range;

/// A 1-based inclusive line range as requested on the command line.
///
/// Both ends are signed so that any integer the user types is representable;
/// out-of-bounds values are clamped by [`LineRange::bounds`] rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// 1-based index of the first line to print.
    pub start: i64,
    /// 1-based index of the last line to print, inclusive.
    pub end: i64,
}

impl LineRange {
    /// A range from `start` through `end`, both 1-based and inclusive.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Zero-based, half-open slice bounds for a file of `total` lines.
    ///
    /// The lower bound is `start - 1` clamped to `0`, so a start of zero or
    /// below selects from the first line. The upper bound is `end` clamped to
    /// `0..=total`. The result always satisfies `lo <= hi <= total`.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let lo = clamp_index(self.start.saturating_sub(1), total);
        let hi = clamp_index(self.end, total);
        if lo >= hi { lo..lo } else { lo..hi }
    }
}

fn clamp_index(value: i64, total: usize) -> usize {
    if value <= 0 {
        0
    } else {
        usize::try_from(value).map_or(total, |v| v.min(total))
    }
}
