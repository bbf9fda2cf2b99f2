//! Error codes and the single-error-per-parse reporting model.
//!
//! The pipeline reports at most one error and stops (§7): the lexer's
//! internal error kinds are promoted into the same [`ParseError`] the
//! grammar driver produces for syntax/argument-order/lvalue failures, so
//! callers never need to distinguish the two at the type level.

use span::SourceLoc;

/// Lexer error kinds (`Lex::*` code namespace).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
  FatalError = 1,
  BracketMismatch = 2,
  InvalidCharacter = 3,
  IndentMismatch = 4,
  IndentStackOverflow = 5,
  InvalidAfterBackslash = 6,
  BadStream = 7,
  MixedSpacesAndTabs = 8,
  EofInString = 9,
  InvalidHexEscape = 10,
}

/// Parse error kinds (`Parse::*` code namespace), raised by the grammar
/// driver itself rather than promoted from the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
  SyntaxError = 1,
  StackOverflow = 2,
  IllegalArg = 3,
  IllegalLvalue = 4,
}

/// The single error a parse can produce: `is_lex_error` distinguishes the
/// two code namespaces above so a caller can tell a scanning failure from a
/// grammar failure without inspecting the numeric code.
#[derive(Clone, Debug)]
pub struct ParseError {
  pub is_lex_error: bool,
  pub code: i32,
  pub message: String,
  pub loc: SourceLoc,
}

impl ParseError {
  pub fn lex(kind: LexErrorKind, message: impl Into<String>, loc: SourceLoc) -> Self {
    let message = truncate(message.into());
    ParseError {
      is_lex_error: true,
      code: kind as i32,
      message,
      loc,
    }
  }

  pub fn parse(kind: ParseErrorKind, message: impl Into<String>, loc: SourceLoc) -> Self {
    let message = truncate(message.into());
    ParseError {
      is_lex_error: false,
      code: kind as i32,
      message,
      loc,
    }
  }
}

/// Error messages are bounded to 1024 bytes (§7).
const MAX_MESSAGE_LEN: usize = 1024;

fn truncate(mut message: String) -> String {
  if message.len() > MAX_MESSAGE_LEN {
    let mut cut = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(cut) {
      cut -= 1;
    }
    message.truncate(cut);
  }
  message
}

impl std::fmt::Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "error at {}: {}", self.loc, self.message)
  }
}

impl std::error::Error for ParseError {}

/// Renders the offending byte, non-printable bytes escaped as `\xhh`, for
/// `INVALID_CHARACTER` messages.
pub fn escape_char_for_message(ch: char) -> String {
  if ch.is_ascii_graphic() || ch == ' ' {
    ch.to_string()
  } else {
    let mut buf = [0u8; 4];
    let bytes = ch.encode_utf8(&mut buf).as_bytes();
    bytes.iter().map(|b| format!("\\x{b:02x}")).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncates_overlong_messages() {
    let long = "x".repeat(2000);
    let err = ParseError::lex(LexErrorKind::FatalError, long, SourceLoc::point(1, 1));
    assert_eq!(err.message.len(), MAX_MESSAGE_LEN);
  }

  #[test]
  fn escapes_non_printable_bytes() {
    assert_eq!(escape_char_for_message('a'), "a");
    assert_eq!(escape_char_for_message('\x01'), "\\x01");
    assert_eq!(escape_char_for_message('\t'), "\\x09");
  }
}
