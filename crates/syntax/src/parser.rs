//! Grammar driver (§4.5): a hand-written recursive-descent parser that pumps
//! tokens out of [`crate::lexer::Lexer`] and calls the AST builders in
//! [`crate::ast`] and [`crate::args`] to construct the raw tree, intermediates
//! and all. [`crate::postparse`] does the rest.
//!
//! Unlike a LALR table, this driver carries its own small token buffer
//! instead of a parser stack, and reports the *first* error by short-circuit
//! (`?`) rather than collecting and resynchronizing — the source reports at
//! most one error per parse (§7), so there is nothing to recover from.
//!
//! The source's bracket-depth bookkeeping lives entirely in the lexer: a
//! newline inside `(...)`/`[...]` never reaches this driver as a token, so
//! unlike the teacher's own parser there is no separate "ignore indent"
//! context to thread through expression parsing.

use crate::args::Arguments;
use crate::ast::{self, LiteralKind, Node, Suite};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::stream::Stream;
use crate::text::Text;
use span::SourceLoc;

pub type Result<T> = std::result::Result<T, ParseError>;

pub struct Parser<'src> {
  lex: Lexer<'src>,
  cur: Token,
  peeked: Option<Token>,
}

impl<'src> Parser<'src> {
  pub fn new(stream: Stream<'src>) -> Result<Self> {
    let mut lex = Lexer::new(stream);
    let cur = lex.next_token()?;
    Ok(Parser {
      lex,
      cur,
      peeked: None,
    })
  }

  #[inline]
  pub(crate) fn current(&self) -> &Token {
    &self.cur
  }

  /// One token beyond `current`, without consuming either.
  pub(crate) fn peek2(&mut self) -> Result<&Token> {
    if self.peeked.is_none() {
      self.peeked = Some(self.lex.next_token()?);
    }
    Ok(self.peeked.as_ref().unwrap())
  }

  #[inline]
  pub(crate) fn check(&self, kind: TokenKind) -> bool {
    self.cur.kind == kind
  }

  /// Advances by one token, returning the token that was current.
  pub(crate) fn bump(&mut self) -> Result<Token> {
    let next = match self.peeked.take() {
      Some(t) => t,
      None => self.lex.next_token()?,
    };
    Ok(std::mem::replace(&mut self.cur, next))
  }

  pub(crate) fn eat(&mut self, kind: TokenKind) -> Result<bool> {
    if self.check(kind) {
      self.bump()?;
      Ok(true)
    } else {
      Ok(false)
    }
  }

  pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token> {
    if self.check(kind) {
      self.bump()
    } else {
      Err(ParseError::parse(
        ParseErrorKind::SyntaxError,
        format!(
          "expected {}, found {}",
          kind.name(),
          self.cur.kind.name()
        ),
        self.cur.loc,
      ))
    }
  }

  pub(crate) fn unexpected(&self) -> ParseError {
    ParseError::parse(
      ParseErrorKind::SyntaxError,
      format!("unexpected {}", self.cur.kind.name()),
      self.cur.loc,
    )
  }
}

// Recursive descent spends real call-stack frames on every level of
// expression/suite nesting; a pathological input (deeply nested parens, a
// long chain of trailers, a suite nested thousands of levels deep) can drive
// that past the thread's stack before the grammar itself notices anything
// wrong. `check_recursion_limit` turns that into the documented
// `STACK_OVERFLOW` error instead of a process-ending stack overflow.
//
// On average, a single parse_xxx() method consumes between 10 and 700 bytes
// of stack space. Assuming ~50 recursive calls per dive and 700 bytes per
// call, a dive requires roughly 50 * 700 = 35k bytes; rounded up for
// headroom, 64k.
const MINIMUM_STACK_REQUIRED: usize = 64_000;

#[cfg(all(feature = "check-recursion-limit", not(target_family = "wasm")))]
pub(crate) fn check_recursion_limit(loc: SourceLoc) -> Result<()> {
  if stacker::remaining_stack()
    .map(|available| available > MINIMUM_STACK_REQUIRED)
    .unwrap_or(true)
  {
    Ok(())
  } else {
    Err(ParseError::parse(
      ParseErrorKind::StackOverflow,
      "nesting limit reached",
      loc,
    ))
  }
}

// On WASM, remaining_stack() always returns None; a real stack overflow there
// becomes a host-level exception, so there's nothing useful to check against.
#[cfg(any(not(feature = "check-recursion-limit"), target_family = "wasm"))]
pub(crate) fn check_recursion_limit(_loc: SourceLoc) -> Result<()> {
  Ok(())
}

/// Parses a full source into the final AST (post-parse normalization
/// already applied). The returned tree is rooted at a [`Node::Suite`].
pub fn parse(stream: Stream<'_>) -> Result<Node> {
  let mut p = Parser::new(stream)?;
  let suite = p.parse_module()?;
  crate::postparse::normalize(Node::Suite(suite))
}

mod expr;
mod stmt;

#[cfg(test)]
mod tests;
