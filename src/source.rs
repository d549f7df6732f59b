use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A text file read fully into memory and split into lines.
///
/// Lines break at `\n`, `\r\n`, a lone `\r` and the other Unicode line
/// boundaries. Terminators are stripped and a final terminator does not
/// produce a trailing empty line.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// Read the whole file at `path` as UTF-8 text.
    ///
    /// Fails when the file is missing, unreadable or not valid UTF-8. The
    /// returned error names the path and keeps the I/O error as its cause.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("can't read {}", path.display()))?;
        let source = Self::from_text(path, &text);
        debug!("read {} lines from {}", source.len(), path.display());
        Ok(source)
    }

    /// Build a source from text that is already in memory.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text).map(str::to_owned).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` into lines without their terminators.
///
/// `\r\n` counts as a single break. Besides `\n` and `\r`, vertical tab, form
/// feed, the file/group/record separators `\x1c`..`\x1e`, NEL, and the
/// Unicode line and paragraph separators end a line too.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((i, c)) => {
                let line = &rest[..i];
                let mut next = i + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
