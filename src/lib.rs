//! Parses LISN source text into a plain-data AST (§6).
//!
//! This crate is a thin façade over [`syntax`]: [`parse_str`]/[`parse_reader`]
//! wrap [`syntax::parser::parse`], and [`render_error`] turns a
//! [`ParseError`]'s line/column span into a pretty, source-annotated report
//! using [`diag`] the way the teacher's own crates report span-based errors.

use std::io::Read;

pub use syntax::ast;
pub use syntax::error::{LexErrorKind, ParseError, ParseErrorKind};
pub use syntax::{args, text};

use syntax::ast::Node;
use syntax::stream::Stream;

/// Parses an in-memory LISN source string.
///
/// On success the returned [`Node`] is rooted at a `Suite` (possibly empty,
/// per §6 — an empty top-level program is `Suite { items: [], loc: (1,1,1,1)
/// }`, not an error).
pub fn parse_str(source: &str) -> Result<Node, ParseError> {
  syntax::parse(Stream::from_str(source))
}

/// Reads `reader` to completion and parses it as a LISN source.
///
/// A failure to read is reported as a [`LexErrorKind::BadStream`] error at
/// `(1,1,1,1)`, matching how a stream failure surfaces during lexing (§4.1).
pub fn parse_reader<R: Read>(reader: R) -> Result<Node, ParseError> {
  let stream = Stream::from_reader(reader).map_err(|e| {
    ParseError::lex(
      LexErrorKind::BadStream,
      format!("failed to read source: {e}"),
      span::SourceLoc::point(1, 1),
    )
  })?;
  syntax::parse(stream)
}

/// Converts a 1-based, inclusive `SourceLoc` into a byte-offset [`span::Span`]
/// over `source`, for handing the error off to [`diag::Report`]. Erased
/// locations (`(-1,-1,-1,-1)`, §4.6) map to an empty span at the start of the
/// file rather than panicking — a non-head suite entry's own span should be
/// used instead whenever one is available.
fn loc_to_span(source: &str, loc: span::SourceLoc) -> span::Span {
  if loc.is_erased() {
    return span::Span { start: 0, end: 0 };
  }
  let mut start = None;
  let mut end = None;
  let mut line = 1i64;
  let mut col = 1i64;
  for (i, ch) in source.char_indices() {
    if line == loc.sline && col == loc.scol {
      start = Some(i);
    }
    if line == loc.eline && col == loc.ecol {
      end = Some(i);
    }
    if ch == '\n' {
      line += 1;
      col = 1;
    } else {
      col += 1;
    }
  }
  if line == loc.sline && col == loc.scol {
    start = Some(source.len());
  }
  if line == loc.eline && col == loc.ecol {
    end = Some(source.len());
  }
  let start = start.unwrap_or(0);
  let end = end.unwrap_or(source.len()).max(start);
  span::Span { start, end }
}

/// Renders a [`ParseError`] as a human-readable, source-annotated report
/// (colorized unless `color` is `false`), in the style the rest of this
/// codebase's crates use for span-based diagnostics.
pub fn render_error(source: &str, err: &ParseError, color: bool) -> String {
  let span = loc_to_span(source, err.loc);
  let label = if err.is_lex_error { "lexer" } else { "parser" };
  diag::Report::error()
    .source(source)
    .message(err.message.clone())
    .span(span)
    .label(label)
    .color(color)
    .build()
    .emit_to_string()
    // `span` can land out of bounds for an erased or end-of-file
    // location; fall back to the plain `Display` impl rather than panic.
    .unwrap_or_else(|_| err.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_source_parses_to_empty_suite() {
    let node = parse_str("").unwrap();
    match node {
      Node::Suite(s) => assert!(s.items.is_empty()),
      _ => panic!("expected Suite"),
    }
  }

  #[test]
  fn simple_assignment_parses() {
    let node = parse_str("x = 1\n").unwrap();
    match node {
      Node::Suite(s) => assert_eq!(s.items.len(), 1),
      _ => panic!("expected Suite"),
    }
  }

  #[test]
  fn render_error_includes_the_message() {
    let err = parse_str("x = \n").unwrap_err();
    let rendered = render_error("x = \n", &err, false);
    assert!(rendered.contains(&err.message) || rendered == err.to_string());
  }

  #[test]
  fn a_suite_with_a_labeled_head_parses_end_to_end() {
    let src = indoc::indoc! {"
      def greet(name): name
    "};
    let node = parse_str(src).unwrap();
    match node {
      Node::Suite(s) => assert_eq!(s.items.len(), 1),
      _ => panic!("expected Suite"),
    }
  }
}
