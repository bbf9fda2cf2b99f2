//! Suite items, arrow entries, assignments, and the xexpr suite-attachment
//! combinators (`vert_lookahead` / `dexpr_lookahead`, §4.6 commentary).
//!
//! A suite item is one of:
//!   - `NAME -> expr` / `STRING -> expr` — an arrow entry (labels the item).
//!   - `NAME head(args)[...]` — a double-head xexpr: the leading `NAME` is
//!     only consumed as a label when it's immediately followed by a `Name`,
//!     `String`, `Integer`, or `Float` with no operator between — i.e. another
//!     primary starting right where an infix operator or a call's `(` would
//!     otherwise go. `NAME LParen` is deliberately excluded: that shape is
//!     ordinary call syntax (`f(...)`), not a label before a head.
//!   - any other expression, optionally followed by `= rhs` / `:= rhs`
//!     (an assignment) or a suite-introducing `:` / `:\n...` / `>\n...--\n...`.

use super::*;
use crate::lexer::TokenKind;

impl<'src> Parser<'src> {
  /// Parses the whole source as a module-level suite: items separated by
  /// `Newline`, no enclosing `Indent`/`Dedent` (the module is always at
  /// column zero).
  pub(crate) fn parse_module(&mut self) -> Result<Suite> {
    let mut suite = Suite::empty();
    while !self.check(TokenKind::Eof) {
      let (label, node) = self.suite_item()?;
      let loc = node.loc();
      suite.push(label, node, loc);
      if !self.check(TokenKind::Eof) {
        self.expect(TokenKind::Newline)?;
      }
    }
    Ok(suite)
  }

  /// Parses `Newline Indent item (Newline item)* Dedent`, the body of any
  /// `:`/`:\n`/`--\n`-introduced vertical suite.
  fn parse_indented_suite(&mut self) -> Result<Suite> {
    self.expect(TokenKind::Newline)?;
    self.expect(TokenKind::Indent)?;
    let mut suite = Suite::empty();
    while !self.check(TokenKind::Dedent) {
      let (label, node) = self.suite_item()?;
      let loc = node.loc();
      suite.push(label, node, loc);
      if !self.check(TokenKind::Dedent) {
        self.expect(TokenKind::Newline)?;
      }
    }
    self.expect(TokenKind::Dedent)?;
    Ok(suite)
  }

  /// Same shape as [`Self::parse_indented_suite`], but each entry folds
  /// into [`Arguments`] instead of a [`Suite`] — the vertical argument list
  /// of the `head>` / `label head>` double-section xexpr form.
  fn parse_indented_arg_suite(&mut self) -> Result<Arguments> {
    self.expect(TokenKind::Newline)?;
    let start = self.expect(TokenKind::Indent)?.loc;
    let mut args = Arguments::empty(start);
    while !self.check(TokenKind::Dedent) {
      self.arg_suite_item(&mut args)?;
      if !self.check(TokenKind::Dedent) {
        self.expect(TokenKind::Newline)?;
      }
    }
    let end = self.expect(TokenKind::Dedent)?.loc;
    args.loc = start.join(end);
    Ok(args)
  }

  fn arg_suite_item(&mut self, args: &mut Arguments) -> Result<()> {
    if self.check(TokenKind::Star) {
      let tok = self.bump()?;
      let value = self.expr()?;
      let loc = tok.loc.join(value.loc());
      return args.set_star(value, loc);
    }
    if self.check(TokenKind::DStar) {
      let tok = self.bump()?;
      let value = self.expr()?;
      let loc = tok.loc.join(value.loc());
      return args.set_dstar(value, loc);
    }
    if self.check(TokenKind::Amp) {
      let tok = self.bump()?;
      let value = self.expr()?;
      let loc = tok.loc.join(value.loc());
      return args.set_amp(value, loc);
    }
    if self.check(TokenKind::DAmp) {
      let tok = self.bump()?;
      let value = self.expr()?;
      let loc = tok.loc.join(value.loc());
      return args.set_damp(value, loc);
    }
    if (self.check(TokenKind::Name) || self.check(TokenKind::String))
      && self.peek2()?.kind == TokenKind::Arrow
    {
      let name_tok = self.bump()?;
      self.expect(TokenKind::Arrow)?;
      let value = self.expr()?;
      let loc = name_tok.loc.join(value.loc());
      return args.push_keyword(name_tok.text, value, loc);
    }
    let value = self.expr()?;
    let loc = value.loc();
    args.push_positional(value, loc)
  }

  fn suite_item(&mut self) -> Result<(Option<Text>, Node)> {
    super::check_recursion_limit(self.current().loc)?;
    if self.check(TokenKind::Name) {
      let peek_kind = self.peek2()?.kind;
      if peek_kind == TokenKind::Arrow {
        return self.arrow_entry();
      }
      if matches!(
        peek_kind,
        TokenKind::Name | TokenKind::String | TokenKind::Integer | TokenKind::Float
      ) {
        return self.double_head_xexpr();
      }
    } else if self.check(TokenKind::String) && self.peek2()?.kind == TokenKind::Arrow {
      return self.arrow_entry();
    }

    let scope = self.expr()?;
    if self.check(TokenKind::Assign) || self.check(TokenKind::DefAssign) {
      let op = if self.check(TokenKind::Assign) {
        ast::AssignOp::Assign
      } else {
        ast::AssignOp::DefAssign
      };
      self.bump()?;
      let rhs = self.expr()?;
      let loc = scope.loc().join(rhs.loc());
      return Ok((None, ast::make_assign(op, scope, rhs, loc)?));
    }
    let node = self.maybe_attach_suite(scope)?;
    Ok((None, node))
  }

  fn arrow_entry(&mut self) -> Result<(Option<Text>, Node)> {
    let name_tok = self.bump()?;
    self.expect(TokenKind::Arrow)?;
    let value = self.expr()?;
    Ok((Some(name_tok.text), value))
  }

  fn double_head_xexpr(&mut self) -> Result<(Option<Text>, Node)> {
    let label_tok = self.bump()?;
    let scope = self.postfix_expr()?;
    let node = dexpr_lookahead(scope, label_tok.text, label_tok.loc);
    let node = self.maybe_attach_suite(node)?;
    Ok((None, node))
  }

  /// Checks for a suite-introducing `:`, `:\n...`, or `>\n...--\n...`
  /// following an already-parsed head expression, and folds it in via
  /// [`vert_lookahead`]. Returns `scope` unchanged if none follows (it may
  /// still be an `InlineApp`; [`crate::postparse`] promotes it later).
  fn maybe_attach_suite(&mut self, scope: Node) -> Result<Node> {
    if self.check(TokenKind::Colon) {
      self.bump()?;
      let body = self.expr()?;
      let loc = body.loc();
      let mut suite = Suite::empty();
      suite.push(None, body, loc);
      return Ok(vert_lookahead(scope, Some(suite), None));
    }
    if self.check(TokenKind::ColonNewline) {
      self.bump()?;
      let suite = self.parse_indented_suite()?;
      return Ok(vert_lookahead(scope, Some(suite), None));
    }
    if self.check(TokenKind::GtNewline) {
      self.bump()?;
      let args = self.parse_indented_arg_suite()?;
      self.expect(TokenKind::DMinusNewline)?;
      let body = self.parse_indented_suite()?;
      return Ok(vert_lookahead(scope, Some(body), Some(args)));
    }
    Ok(scope)
  }
}

/// `label scope` → an `XExpr` carrying `has_head_label`. If `scope` is an
/// `InlineApp` its args/head are adopted directly (§4.6); otherwise `scope`
/// becomes the head expression with empty arguments.
fn dexpr_lookahead(scope: Node, label: Text, label_loc: SourceLoc) -> Node {
  match scope {
    Node::InlineApp(app) => {
      let loc = label_loc.join(app.loc);
      Node::XExpr(ast::XExprNode {
        has_head_label: true,
        head_label: label,
        head_expr: app.scope,
        args: app.args,
        vert_suite: None,
        loc,
      })
    }
    other => {
      let loc = label_loc.join(other.loc());
      Node::XExpr(ast::XExprNode {
        has_head_label: true,
        head_label: label,
        head_expr: Box::new(other),
        args: Arguments::empty(loc),
        vert_suite: None,
        loc,
      })
    }
  }
}

/// Attaches a (possibly absent) vertical body and/or fresh argument list to
/// an already-parsed head, producing the final `XExpr` shape (§4.6):
///
/// - a double-headed xexpr still missing its body just gets the body (and,
///   after a `--` section, a replacement argument list) attached in place;
/// - a bare `InlineApp` with no fresh args is promoted to a label-less
///   xexpr, adopting its own args;
/// - anything else becomes the head of a brand new xexpr with empty args
///   unless `args` was supplied.
fn vert_lookahead(scope: Node, vert_suite: Option<Suite>, args: Option<Arguments>) -> Node {
  if let Node::XExpr(mut x) = scope {
    if x.has_head_label && x.vert_suite.is_none() {
      if let Some(new_args) = args {
        x.args = new_args;
      }
      if let Some(vs) = &vert_suite {
        x.loc = x.loc.join(vs.loc);
      }
      x.vert_suite = vert_suite;
      return Node::XExpr(x);
    }
    return wrap_fresh(Node::XExpr(x), vert_suite, args);
  }
  if args.is_none() {
    if let Node::InlineApp(app) = scope {
      let loc = match &vert_suite {
        Some(vs) => app.loc.join(vs.loc),
        None => app.loc,
      };
      return Node::XExpr(ast::XExprNode {
        has_head_label: false,
        head_label: Text::empty(),
        head_expr: app.scope,
        args: app.args,
        vert_suite,
        loc,
      });
    }
  }
  wrap_fresh(scope, vert_suite, args)
}

fn wrap_fresh(scope: Node, vert_suite: Option<Suite>, args: Option<Arguments>) -> Node {
  let base_loc = scope.loc();
  let loc = match &vert_suite {
    Some(vs) => base_loc.join(vs.loc),
    None => base_loc,
  };
  let args = args.unwrap_or_else(|| Arguments::empty(base_loc));
  Node::XExpr(ast::XExprNode {
    has_head_label: false,
    head_label: Text::empty(),
    head_expr: Box::new(scope),
    args,
    vert_suite,
    loc,
  })
}
