//! Character stream: delivers characters with line/column tracking and an
//! optional recording buffer, so the lexer can capture the exact text of a
//! token (or its decoded form, for string escapes) without re-scanning.

use std::borrow::Cow;
use std::io::Read;

/// Backs [`Stream`] uniformly whether the source was an in-memory buffer or
/// a file handle: both end up as an owned or borrowed string, so the lexer
/// never has to know which one it got.
pub struct Stream<'src> {
  src: Cow<'src, str>,
  pos: usize,
  line: i64,
  col: i64,
  recording: Option<String>,
}

impl<'src> Stream<'src> {
  pub fn from_str(src: &'src str) -> Self {
    Self::new(Cow::Borrowed(src))
  }

  /// Reads the handle to completion and streams over the buffered result.
  /// The distinction from [`Stream::from_str`] is invisible to the lexer:
  /// both expose the same `peek`/`pop` interface.
  pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(Self::new(Cow::Owned(buf)))
  }

  fn new(src: Cow<'src, str>) -> Self {
    Self {
      src,
      pos: 0,
      line: 1,
      col: 1,
      recording: None,
    }
  }

  #[inline]
  pub fn peek(&self) -> Option<char> {
    self.src[self.pos..].chars().next()
  }

  pub fn peek2(&self) -> Option<char> {
    let mut chars = self.src[self.pos..].chars();
    chars.next();
    chars.next()
  }

  #[inline]
  pub fn eof(&self) -> bool {
    self.pos >= self.src.len()
  }

  /// The remaining unconsumed text, for read-only lookahead (e.g. deciding
  /// whether a token sits at the end of a logical line).
  #[inline]
  pub fn rest(&self) -> &str {
    &self.src[self.pos..]
  }

  #[inline]
  pub fn current_line(&self) -> i64 {
    self.line
  }

  #[inline]
  pub fn current_col(&self) -> i64 {
    self.col
  }

  /// Advances past the current character, updating line/column and
  /// appending to the active recording buffer, if any.
  pub fn pop(&mut self) -> Option<char> {
    let ch = self.peek()?;
    self.pos += ch.len_utf8();
    if let Some(buf) = &mut self.recording {
      buf.push(ch);
    }
    if ch == '\n' {
      self.line += 1;
      self.col = 1;
    } else {
      self.col += 1;
    }
    Some(ch)
  }

  /// Begins capturing every character consumed by `pop` from this point on.
  /// A token's lexing routine calls this right before it starts consuming
  /// the token's own characters (whitespace and comments are always skipped
  /// with no recording active, so they never leak into token text).
  pub fn start_record(&mut self) {
    self.recording = Some(String::new());
  }

  /// Stops recording and returns everything captured since `start_record`.
  pub fn end_record(&mut self) -> String {
    self.recording.take().unwrap_or_default()
  }

  /// Rewrites the tail of the active recording buffer: removes the last
  /// `pop_n` *characters* and appends `s` in their place. Used by string
  /// literal scanning to fold an escape sequence (already captured verbatim
  /// by `pop`) into its decoded form, while keeping the recording in sync
  /// with what has logically been consumed.
  pub fn replace_record(&mut self, pop_n: usize, s: &str) {
    if let Some(buf) = &mut self.recording {
      let keep = buf.chars().count().saturating_sub(pop_n);
      let cut_at = buf
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(buf.len());
      buf.truncate(cut_at);
      buf.push_str(s);
    }
  }
}
