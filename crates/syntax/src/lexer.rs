//! Hand-rolled indentation-aware lexer.
//!
//! Indentation is significant: runs of leading whitespace are measured and
//! compared against a stack of active indent levels, synthesizing `Indent`
//! and `Dedent` tokens the way the grammar expects (much like Python's
//! tokenizer). Brackets suspend that significance: a newline inside
//! parens/brackets is just whitespace.
//!
//! A handful of punctuation tokens (`>`, `:`, `--`) get a `*Newline` variant
//! when they sit at the end of a logical line, so the grammar can tell "this
//! introduces a suite" from "this is a comparison/slice operator" with one
//! token of lookahead instead of backtracking.

use crate::error::{LexErrorKind, ParseError};
use crate::stream::Stream;
use crate::text::Text;
use span::SourceLoc;

const MAX_INDENT_DEPTH: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
  Name,
  Integer,
  Float,
  String,

  Indent,
  Dedent,
  Newline,
  Eof,

  Minus,
  Arrow,
  DMinusNewline,

  Colon,
  DefAssign,
  ColonNewline,

  Gt,
  Gte,
  GtNewline,
  Lt,
  Lte,

  Dot,
  Comma,
  Plus,
  Slash,
  Percent,

  Bang,
  Neq,
  Star,
  DStar,
  Amp,
  DAmp,
  Pipe,
  DPipe,
  Assign,
  Eq,

  LParen,
  RParen,
  LBracket,
  RBracket,
}

impl TokenKind {
  pub fn name(self) -> &'static str {
    use TokenKind::*;
    match self {
      Name => "name",
      Integer => "integer",
      Float => "float",
      String => "string",
      Indent => "indent",
      Dedent => "dedent",
      Newline => "newline",
      Eof => "end of input",
      Minus => "'-'",
      Arrow => "'->'",
      DMinusNewline => "'--'",
      Colon => "':'",
      DefAssign => "':='",
      ColonNewline => "':'",
      Gt => "'>'",
      Gte => "'>='",
      GtNewline => "'>'",
      Lt => "'<'",
      Lte => "'<='",
      Dot => "'.'",
      Comma => "','",
      Plus => "'+'",
      Slash => "'/'",
      Percent => "'%'",
      Bang => "'!'",
      Neq => "'!='",
      Star => "'*'",
      DStar => "'**'",
      Amp => "'&'",
      DAmp => "'&&'",
      Pipe => "'|'",
      DPipe => "'||'",
      Assign => "'='",
      Eq => "'=='",
      LParen => "'('",
      RParen => "')'",
      LBracket => "'['",
      RBracket => "']'",
    }
  }
}

#[derive(Clone, Debug)]
pub struct Token {
  pub kind: TokenKind,
  pub text: Text,
  pub loc: SourceLoc,
}

pub struct Lexer<'src> {
  stream: Stream<'src>,
  indent_stack: Vec<i64>,
  bracket_depth: i32,
  newline_phase: bool,
  ended: bool,
  unscanned_dedents: u32,
  indent_char: Option<char>,
}

impl<'src> Lexer<'src> {
  pub fn new(stream: Stream<'src>) -> Self {
    Lexer {
      stream,
      indent_stack: vec![0],
      bracket_depth: 0,
      newline_phase: true,
      ended: false,
      unscanned_dedents: 0,
      indent_char: None,
    }
  }

  fn here(&self) -> SourceLoc {
    SourceLoc::point(self.stream.current_line(), self.stream.current_col())
  }

  fn token(&self, kind: TokenKind, text: Text, loc: SourceLoc) -> Token {
    Token { kind, text, loc }
  }

  pub fn next_token(&mut self) -> Result<Token, ParseError> {
    if self.unscanned_dedents > 0 {
      self.unscanned_dedents -= 1;
      let loc = self.here();
      return Ok(self.token(TokenKind::Dedent, Text::empty(), loc));
    }
    if self.ended {
      let loc = self.here();
      return Ok(self.token(TokenKind::Eof, Text::empty(), loc));
    }
    if self.newline_phase {
      return self.scan_newline_phase();
    }
    self.scan_normal()
  }

  /// Reached whenever the stream is actually exhausted. `already_saw_newline`
  /// distinguishes "we were already measuring indentation for the next
  /// logical line" (empty input, or input ending in a blank line) from "we
  /// hit EOF mid-line" (no trailing newline before EOF), which needs one
  /// synthetic `Newline` first.
  fn handle_eof(&mut self, already_saw_newline: bool) -> Result<Token, ParseError> {
    if self.bracket_depth > 0 {
      let loc = self.here();
      return Err(ParseError::lex(
        LexErrorKind::BracketMismatch,
        "unexpected end of input inside brackets",
        loc,
      ));
    }
    if !already_saw_newline {
      self.newline_phase = true;
      let loc = self.here();
      return Ok(self.token(TokenKind::Newline, Text::empty(), loc));
    }
    let pops = self.indent_stack.len() - 1;
    self.indent_stack.truncate(1);
    self.ended = true;
    let loc = self.here();
    if pops > 0 {
      self.unscanned_dedents = (pops - 1) as u32;
      Ok(self.token(TokenKind::Dedent, Text::empty(), loc))
    } else {
      Ok(self.token(TokenKind::Eof, Text::empty(), loc))
    }
  }

  /// Measures one logical line's leading whitespace. A blank or
  /// comment-only line never actually indents anything (`indent` is reset
  /// to 0 as soon as its trailing newline is seen), so the whitespace
  /// character(s) it used must not get to establish or contradict the
  /// file's sticky `indent_char` — only the run belonging to the line that
  /// finally breaks out of this loop (the one whose indent is about to be
  /// compared against the stack) counts.
  fn scan_newline_phase(&mut self) -> Result<Token, ParseError> {
    let mut indent: i64 = 0;
    let mut run_char: Option<char> = None;
    let mut run_start_loc: Option<SourceLoc> = None;
    let mut run_mismatch: Option<SourceLoc> = None;
    loop {
      let Some(ch) = self.stream.peek() else {
        return self.handle_eof(true);
      };
      match ch {
        ' ' | '\t' => {
          match run_char {
            None => {
              run_char = Some(ch);
              run_start_loc = Some(self.here());
            }
            Some(established) if established != ch && run_mismatch.is_none() => {
              run_mismatch = Some(self.here());
            }
            _ => {}
          }
          self.stream.pop();
          indent += 1;
        }
        '\n' => {
          self.stream.pop();
          indent = 0;
          run_char = None;
          run_start_loc = None;
          run_mismatch = None;
        }
        '#' => {
          while let Some(c) = self.stream.peek() {
            if c == '\n' {
              break;
            }
            self.stream.pop();
          }
        }
        _ => break,
      }
    }

    if let Some(loc) = run_mismatch {
      return Err(ParseError::lex(
        LexErrorKind::MixedSpacesAndTabs,
        "mixed spaces and tabs in indentation",
        loc,
      ));
    }
    if let Some(ch) = run_char {
      match self.indent_char {
        None => self.indent_char = Some(ch),
        Some(established) if established != ch => {
          return Err(ParseError::lex(
            LexErrorKind::MixedSpacesAndTabs,
            "mixed spaces and tabs in indentation",
            run_start_loc.unwrap(),
          ));
        }
        _ => {}
      }
    }

    let n = indent;
    let top = *self.indent_stack.last().unwrap();
    if top == n {
      self.newline_phase = false;
      self.next_token()
    } else if top < n {
      if self.indent_stack.len() >= MAX_INDENT_DEPTH {
        let loc = self.here();
        return Err(ParseError::lex(
          LexErrorKind::IndentStackOverflow,
          "indentation stack overflow",
          loc,
        ));
      }
      self.indent_stack.push(n);
      self.newline_phase = false;
      let loc = self.here();
      Ok(self.token(TokenKind::Indent, Text::empty(), loc))
    } else {
      let mut pops = 0u32;
      while *self.indent_stack.last().unwrap() > n {
        self.indent_stack.pop();
        pops += 1;
      }
      if *self.indent_stack.last().unwrap() != n {
        let loc = self.here();
        return Err(ParseError::lex(
          LexErrorKind::IndentMismatch,
          "unindent does not match any outer indentation level",
          loc,
        ));
      }
      self.unscanned_dedents = pops;
      self.newline_phase = false;
      self.next_token()
    }
  }

  fn scan_normal(&mut self) -> Result<Token, ParseError> {
    loop {
      let Some(ch) = self.stream.peek() else {
        return self.handle_eof(false);
      };
      match ch {
        ' ' | '\t' => {
          self.stream.pop();
        }
        '\\' => {
          let loc = self.here();
          match self.stream.peek2() {
            Some('\n') | None => {
              self.stream.pop();
              if self.stream.peek() == Some('\n') {
                self.stream.pop();
              }
              while matches!(self.stream.peek(), Some(' ') | Some('\t')) {
                self.stream.pop();
              }
            }
            Some(_) => {
              self.stream.pop();
              return Err(ParseError::lex(
                LexErrorKind::InvalidAfterBackslash,
                "only a newline may follow a line-continuation backslash",
                loc,
              ));
            }
          }
        }
        '#' => {
          while let Some(c) = self.stream.peek() {
            if c == '\n' {
              break;
            }
            self.stream.pop();
          }
        }
        '\n' => {
          let loc = self.here();
          self.stream.pop();
          if self.bracket_depth > 0 {
            continue;
          }
          self.newline_phase = true;
          return Ok(self.token(TokenKind::Newline, Text::empty(), loc));
        }
        _ => return self.lex_token(),
      }
    }
  }

  fn lex_token(&mut self) -> Result<Token, ParseError> {
    let ch = self.stream.peek().expect("caller guarantees a char");
    if ch.is_ascii_digit() {
      return Ok(self.lex_number());
    }
    if ch == '.' && self.stream.peek2().is_some_and(|c| c.is_ascii_digit()) {
      return Ok(self.lex_number());
    }
    if ch == '\'' || ch == '"' {
      return self.lex_string();
    }
    if is_ident_start(ch) {
      return Ok(self.lex_identifier());
    }
    self.lex_punct()
  }

  fn lex_number(&mut self) -> Token {
    let loc_start = self.here();
    self.stream.start_record();
    let mut kind = TokenKind::Integer;
    if self.stream.peek() == Some('.') {
      kind = TokenKind::Float;
      self.stream.pop();
      while self.stream.peek().is_some_and(|c| c.is_ascii_digit()) {
        self.stream.pop();
      }
    } else {
      while self.stream.peek().is_some_and(|c| c.is_ascii_digit()) {
        self.stream.pop();
      }
      if self.stream.peek() == Some('.') {
        kind = TokenKind::Float;
        self.stream.pop();
        while self.stream.peek().is_some_and(|c| c.is_ascii_digit()) {
          self.stream.pop();
        }
      }
    }
    let text = self.stream.end_record();
    let loc = loc_start.join(self.here());
    self.token(kind, Text::new(text), loc)
  }

  fn lex_identifier(&mut self) -> Token {
    let loc_start = self.here();
    self.stream.start_record();
    self.stream.pop();
    while self.stream.peek().is_some_and(is_ident_continue) {
      self.stream.pop();
    }
    let text = self.stream.end_record();
    let loc = loc_start.join(self.here());
    self.token(TokenKind::Name, Text::new(text), loc)
  }

  fn lex_string(&mut self) -> Result<Token, ParseError> {
    let loc_start = self.here();
    let quote = self.stream.pop().expect("caller guarantees a quote");
    self.stream.start_record();
    loop {
      match self.stream.peek() {
        None => {
          let loc = loc_start.join(self.here());
          return Err(ParseError::lex(
            LexErrorKind::EofInString,
            "unterminated string literal",
            loc,
          ));
        }
        Some(c) if c == quote => break,
        Some('\\') => self.lex_string_escape(loc_start)?,
        Some(_) => {
          self.stream.pop();
        }
      }
    }
    let text = self.stream.end_record();
    self.stream.pop(); // closing quote
    let loc = loc_start.join(self.here());
    Ok(self.token(TokenKind::String, Text::new(text), loc))
  }

  fn lex_string_escape(&mut self, string_start: SourceLoc) -> Result<(), ParseError> {
    self.stream.pop(); // backslash
    match self.stream.peek() {
      Some('\\') => {
        self.stream.pop();
        self.stream.replace_record(2, "\\");
      }
      Some('\'') => {
        self.stream.pop();
        self.stream.replace_record(2, "'");
      }
      Some('"') => {
        self.stream.pop();
        self.stream.replace_record(2, "\"");
      }
      Some('a') => {
        self.stream.pop();
        self.stream.replace_record(2, "\u{07}");
      }
      Some('b') => {
        self.stream.pop();
        self.stream.replace_record(2, "\u{08}");
      }
      Some('f') => {
        self.stream.pop();
        self.stream.replace_record(2, "\u{0c}");
      }
      Some('n') => {
        self.stream.pop();
        self.stream.replace_record(2, "\n");
      }
      Some('r') => {
        self.stream.pop();
        self.stream.replace_record(2, "\r");
      }
      Some('t') => {
        self.stream.pop();
        self.stream.replace_record(2, "\t");
      }
      Some('v') => {
        self.stream.pop();
        self.stream.replace_record(2, "\u{0b}");
      }
      Some('x') => {
        self.stream.pop();
        let mut hex = String::new();
        for _ in 0..2 {
          match self.stream.peek() {
            Some(h) if h.is_ascii_hexdigit() => {
              hex.push(h);
              self.stream.pop();
            }
            _ => {
              let loc = self.here();
              return Err(ParseError::lex(
                LexErrorKind::InvalidHexEscape,
                "\\x escape requires exactly two hex digits",
                loc,
              ));
            }
          }
        }
        let byte = u8::from_str_radix(&hex, 16).unwrap();
        self.stream.replace_record(4, &(byte as char).to_string());
      }
      Some(d) if d.is_digit(8) => {
        let mut oct = String::new();
        for _ in 0..3 {
          match self.stream.peek() {
            Some(o) if o.is_digit(8) => {
              oct.push(o);
              self.stream.pop();
            }
            _ => break,
          }
        }
        let value = u32::from_str_radix(&oct, 8).unwrap_or(0).min(255) as u8;
        let popped = 1 + oct.len();
        self
          .stream
          .replace_record(popped, &(value as char).to_string());
      }
      Some(_) => {
        let loc = self.here();
        self.stream.pop();
        return Err(ParseError::lex(
          LexErrorKind::InvalidAfterBackslash,
          "unrecognized string escape sequence",
          loc,
        ));
      }
      None => {
        let loc = string_start.join(self.here());
        return Err(ParseError::lex(
          LexErrorKind::EofInString,
          "unterminated string literal",
          loc,
        ));
      }
    }
    Ok(())
  }

  fn lex_punct(&mut self) -> Result<Token, ParseError> {
    let loc_start = self.here();
    let ch = self.stream.pop().expect("caller guarantees a char");
    let kind = match ch {
      '-' => {
        if self.stream.peek() == Some('-') {
          self.stream.pop();
          if self.bracket_depth == 0 && at_eol_after_ws(self.stream.rest()) {
            TokenKind::DMinusNewline
          } else {
            return Err(ParseError::lex(
              LexErrorKind::FatalError,
              "'--' must be followed only by whitespace or a comment before the end of the line",
              loc_start,
            ));
          }
        } else if self.stream.peek() == Some('>') {
          self.stream.pop();
          TokenKind::Arrow
        } else {
          TokenKind::Minus
        }
      }
      ':' => {
        if self.stream.peek() == Some('=') {
          self.stream.pop();
          TokenKind::DefAssign
        } else if self.bracket_depth == 0 && at_eol_after_ws(self.stream.rest()) {
          TokenKind::ColonNewline
        } else {
          TokenKind::Colon
        }
      }
      '>' => {
        if self.stream.peek() == Some('=') {
          self.stream.pop();
          TokenKind::Gte
        } else if self.bracket_depth == 0 && at_eol_after_ws(self.stream.rest()) {
          TokenKind::GtNewline
        } else {
          TokenKind::Gt
        }
      }
      '<' => {
        if self.stream.peek() == Some('=') {
          self.stream.pop();
          TokenKind::Lte
        } else {
          TokenKind::Lt
        }
      }
      '.' => TokenKind::Dot,
      ',' => TokenKind::Comma,
      '+' => TokenKind::Plus,
      '/' => TokenKind::Slash,
      '%' => TokenKind::Percent,
      '!' => {
        if self.stream.peek() == Some('=') {
          self.stream.pop();
          TokenKind::Neq
        } else {
          TokenKind::Bang
        }
      }
      '*' => {
        if self.stream.peek() == Some('*') {
          self.stream.pop();
          TokenKind::DStar
        } else {
          TokenKind::Star
        }
      }
      '&' => {
        if self.stream.peek() == Some('&') {
          self.stream.pop();
          TokenKind::DAmp
        } else {
          TokenKind::Amp
        }
      }
      '|' => {
        if self.stream.peek() == Some('|') {
          self.stream.pop();
          TokenKind::DPipe
        } else {
          TokenKind::Pipe
        }
      }
      '=' => {
        if self.stream.peek() == Some('=') {
          self.stream.pop();
          TokenKind::Eq
        } else {
          TokenKind::Assign
        }
      }
      '(' => {
        self.bracket_depth += 1;
        TokenKind::LParen
      }
      ')' => {
        if self.bracket_depth == 0 {
          return Err(ParseError::lex(
            LexErrorKind::BracketMismatch,
            "unmatched ')'",
            loc_start,
          ));
        }
        self.bracket_depth -= 1;
        TokenKind::RParen
      }
      '[' => {
        self.bracket_depth += 1;
        TokenKind::LBracket
      }
      ']' => {
        if self.bracket_depth == 0 {
          return Err(ParseError::lex(
            LexErrorKind::BracketMismatch,
            "unmatched ']'",
            loc_start,
          ));
        }
        self.bracket_depth -= 1;
        TokenKind::RBracket
      }
      other => {
        return Err(ParseError::lex(
          LexErrorKind::InvalidCharacter,
          format!(
            "invalid character '{}'",
            crate::error::escape_char_for_message(other)
          ),
          loc_start,
        ));
      }
    };
    let loc = loc_start.join(self.here());
    Ok(self.token(kind, Text::empty(), loc))
  }
}

fn is_ident_start(ch: char) -> bool {
  ch == '$' || ch == '@' || ch == '_' || ch.is_ascii_alphabetic()
}

fn is_ident_continue(ch: char) -> bool {
  ch == '$' || ch == '@' || ch == '_' || ch == '!' || ch == '?' || ch.is_ascii_alphanumeric()
}

/// True if, after skipping spaces/tabs, the next thing is a comment, a
/// newline, or the end of input — i.e. nothing but trivia stands between
/// here and the end of the logical line.
fn at_eol_after_ws(rest: &str) -> bool {
  let mut chars = rest.chars();
  loop {
    match chars.next() {
      Some(' ') | Some('\t') => continue,
      Some('\n') | Some('#') | None => return true,
      Some(_) => return false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn kinds(src: &str) -> Vec<TokenKind> {
    let mut lex = Lexer::new(Stream::from_str(src));
    let mut out = Vec::new();
    loop {
      let tok = lex.next_token().expect("lexes cleanly");
      let end = tok.kind == TokenKind::Eof;
      out.push(tok.kind);
      if end {
        break;
      }
    }
    out
  }

  #[test]
  fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
  }

  #[test]
  fn whitespace_only_input_is_just_eof() {
    assert_eq!(kinds("   \n\t\n  \n"), vec![TokenKind::Eof]);
  }

  #[test]
  fn blank_lines_do_not_poison_the_sticky_indent_char() {
    use TokenKind::*;
    // The blank line between `a:` and `b` mixes a space and a tab, but it
    // indents nothing (its measured indent is discarded), so it must not
    // taint the indent character established by `b`'s and `c`'s real,
    // space-only indentation.
    let toks = kinds("a:\n  \t\n    b\n    c\n");
    assert_eq!(
      toks,
      vec![Name, ColonNewline, Newline, Indent, Name, Newline, Name, Newline, Dedent, Eof]
    );
  }

  #[test]
  fn comment_only_input_is_just_eof() {
    assert_eq!(kinds("# hello\n# world\n"), vec![TokenKind::Eof]);
  }

  #[test]
  fn simple_assignment_line() {
    use TokenKind::*;
    assert_eq!(kinds("x = 1\n"), vec![Name, Assign, Integer, Newline, Eof]);
  }

  #[test]
  fn indent_then_dedent() {
    use TokenKind::*;
    let toks = kinds("a:\n  b\nc\n");
    assert_eq!(
      toks,
      vec![
        Name, ColonNewline, Newline, Indent, Name, Newline, Dedent, Name, Newline, Eof
      ]
    );
  }

  #[test]
  fn final_newline_is_synthesized_when_missing() {
    use TokenKind::*;
    assert_eq!(kinds("x"), vec![Name, Newline, Eof]);
  }

  #[test]
  fn brackets_suspend_indentation_significance() {
    use TokenKind::*;
    let toks = kinds("f(1,\n  2)\n");
    assert_eq!(
      toks,
      vec![Name, LParen, Integer, Comma, Integer, RParen, Newline, Eof]
    );
  }

  #[test]
  fn gt_colon_and_dminus_get_newline_variant_at_eol() {
    use TokenKind::*;
    assert_eq!(kinds("a > b\n"), vec![Name, Gt, Name, Newline, Eof]);
    assert_eq!(kinds("a >\n"), vec![Name, GtNewline, Newline, Eof]);
    assert_eq!(
      kinds("if x:\n"),
      vec![Name, Name, ColonNewline, Newline, Eof]
    );
  }

  #[test]
  fn unmatched_closing_bracket_is_bracket_mismatch() {
    let mut lex = Lexer::new(Stream::from_str(")"));
    let err = lex.next_token().unwrap_err();
    assert_eq!(err.code, LexErrorKind::BracketMismatch as i32);
  }

  #[test]
  fn eof_inside_brackets_is_bracket_mismatch() {
    let mut lex = Lexer::new(Stream::from_str("f(1"));
    loop {
      match lex.next_token() {
        Ok(t) if t.kind == TokenKind::Eof => panic!("expected bracket mismatch error"),
        Ok(_) => continue,
        Err(e) => {
          assert_eq!(e.code, LexErrorKind::BracketMismatch as i32);
          break;
        }
      }
    }
  }

  #[test]
  fn mixed_spaces_and_tabs_is_rejected() {
    let mut lex = Lexer::new(Stream::from_str("a:\n \tb\n"));
    loop {
      match lex.next_token() {
        Ok(t) if t.kind == TokenKind::Eof => panic!("expected mixed-indent error"),
        Ok(_) => continue,
        Err(e) => {
          assert_eq!(e.code, LexErrorKind::MixedSpacesAndTabs as i32);
          break;
        }
      }
    }
  }

  #[test]
  fn unindent_to_unknown_level_is_indent_mismatch() {
    let mut lex = Lexer::new(Stream::from_str("a:\n    b\n  c\n"));
    loop {
      match lex.next_token() {
        Ok(t) if t.kind == TokenKind::Eof => panic!("expected indent mismatch error"),
        Ok(_) => continue,
        Err(e) => {
          assert_eq!(e.code, LexErrorKind::IndentMismatch as i32);
          break;
        }
      }
    }
  }

  #[test]
  fn string_escapes_decode() {
    let mut lex = Lexer::new(Stream::from_str(r#" "a\nb\tc\x41\101" "#));
    let tok = lex.next_token().unwrap();
    assert_eq!(tok.kind, TokenKind::String);
    assert_eq!(tok.text.as_str(), "a\nb\tcAA");
  }

  #[test]
  fn unterminated_string_is_eof_in_string() {
    let mut lex = Lexer::new(Stream::from_str("\"abc"));
    let err = lex.next_token().unwrap_err();
    assert_eq!(err.code, LexErrorKind::EofInString as i32);
  }

  #[test]
  fn float_literals() {
    use TokenKind::*;
    let mut lex = Lexer::new(Stream::from_str("1.5 .5 1.\n"));
    let mut ks = Vec::new();
    loop {
      let t = lex.next_token().unwrap();
      if t.kind == Eof {
        break;
      }
      ks.push(t.kind);
    }
    assert_eq!(ks, vec![Float, Float, Float, Newline]);
  }

  #[test]
  fn line_continuation_joins_lines() {
    use TokenKind::*;
    assert_eq!(
      kinds("a = 1 + \\\n    2\n"),
      vec![Name, Assign, Integer, Plus, Integer, Newline, Eof]
    );
  }

  #[test]
  fn invalid_character_is_reported() {
    let mut lex = Lexer::new(Stream::from_str("a = `"));
    loop {
      match lex.next_token() {
        Ok(t) if t.kind == TokenKind::Eof => panic!("expected invalid character error"),
        Ok(_) => continue,
        Err(e) => {
          assert_eq!(e.code, LexErrorKind::InvalidCharacter as i32);
          break;
        }
      }
    }
  }
}
