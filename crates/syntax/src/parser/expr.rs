//! Expression precedence climbing, trailers, and call arguments.
//!
//! LISN has no array- or object-literal syntax — the AST model (§3) has no
//! such variant, so `[` only ever appears as a trailer. The precedence
//! table below isn't dictated by the source (which ships a generated LALR
//! table, not a precedence list); it's this implementation's own choice,
//! recorded as an Open Question resolution in DESIGN.md.

use super::*;
use crate::lexer::TokenKind;

impl<'src> Parser<'src> {
  pub(super) fn expr(&mut self) -> Result<Node> {
    super::check_recursion_limit(self.current().loc)?;
    self.or_expr()
  }

  fn or_expr(&mut self) -> Result<Node> {
    let mut left = self.and_expr()?;
    while self.check(TokenKind::DPipe) {
      self.bump()?;
      let right = self.and_expr()?;
      left = ast::bin_op(Text::new("||"), left, right);
    }
    Ok(left)
  }

  fn and_expr(&mut self) -> Result<Node> {
    let mut left = self.eq_expr()?;
    while self.check(TokenKind::DAmp) {
      self.bump()?;
      let right = self.eq_expr()?;
      left = ast::bin_op(Text::new("&&"), left, right);
    }
    Ok(left)
  }

  fn eq_expr(&mut self) -> Result<Node> {
    let mut left = self.cmp_expr()?;
    loop {
      let op = match self.current().kind {
        TokenKind::Eq => "==",
        TokenKind::Neq => "!=",
        _ => break,
      };
      self.bump()?;
      let right = self.cmp_expr()?;
      left = ast::bin_op(Text::new(op), left, right);
    }
    Ok(left)
  }

  fn cmp_expr(&mut self) -> Result<Node> {
    let mut left = self.bitor_expr()?;
    loop {
      let op = match self.current().kind {
        TokenKind::Lt => "<",
        TokenKind::Lte => "<=",
        TokenKind::Gt => ">",
        TokenKind::Gte => ">=",
        _ => break,
      };
      self.bump()?;
      let right = self.bitor_expr()?;
      left = ast::bin_op(Text::new(op), left, right);
    }
    Ok(left)
  }

  fn bitor_expr(&mut self) -> Result<Node> {
    let mut left = self.bitand_expr()?;
    while self.check(TokenKind::Pipe) {
      self.bump()?;
      let right = self.bitand_expr()?;
      left = ast::bin_op(Text::new("|"), left, right);
    }
    Ok(left)
  }

  fn bitand_expr(&mut self) -> Result<Node> {
    let mut left = self.add_expr()?;
    while self.check(TokenKind::Amp) {
      self.bump()?;
      let right = self.add_expr()?;
      left = ast::bin_op(Text::new("&"), left, right);
    }
    Ok(left)
  }

  fn add_expr(&mut self) -> Result<Node> {
    let mut left = self.mul_expr()?;
    loop {
      let op = match self.current().kind {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        _ => break,
      };
      self.bump()?;
      let right = self.mul_expr()?;
      left = ast::bin_op(Text::new(op), left, right);
    }
    Ok(left)
  }

  fn mul_expr(&mut self) -> Result<Node> {
    let mut left = self.pow_expr()?;
    loop {
      let op = match self.current().kind {
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Percent => "%",
        _ => break,
      };
      self.bump()?;
      let right = self.pow_expr()?;
      left = ast::bin_op(Text::new(op), left, right);
    }
    Ok(left)
  }

  /// Right-associative: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
  fn pow_expr(&mut self) -> Result<Node> {
    let left = self.unary_expr()?;
    if self.check(TokenKind::DStar) {
      self.bump()?;
      let right = self.pow_expr()?;
      return Ok(ast::bin_op(Text::new("**"), left, right));
    }
    Ok(left)
  }

  fn unary_expr(&mut self) -> Result<Node> {
    let op = match self.current().kind {
      TokenKind::Minus => "-",
      TokenKind::Plus => "+",
      TokenKind::Bang => "!",
      _ => return self.postfix_expr(),
    };
    let tok = self.bump()?;
    let operand = self.unary_expr()?;
    Ok(ast::un_op(Text::new(op), operand, tok.loc))
  }

  pub(super) fn postfix_expr(&mut self) -> Result<Node> {
    let mut expr = self.primary_expr()?;
    loop {
      match self.current().kind {
        TokenKind::Dot => {
          self.bump()?;
          let name_tok = self.expect(TokenKind::Name)?;
          expr = ast::access_attr(expr, name_tok.text, name_tok.loc);
        }
        TokenKind::LBracket => {
          expr = self.trailer_bracket(expr)?;
        }
        TokenKind::LParen => {
          let args = self.call_args()?;
          let loc = expr.loc().join(args.loc);
          expr = Node::InlineApp(ast::InlineAppNode {
            scope: Box::new(expr),
            args,
            loc,
          });
        }
        _ => break,
      }
    }
    Ok(expr)
  }

  fn trailer_bracket(&mut self, scope: Node) -> Result<Node> {
    let lb = self.expect(TokenKind::LBracket)?.loc;
    if self.eat(TokenKind::Colon)? {
      if self.check(TokenKind::RBracket) {
        let rb = self.bump()?.loc;
        return Ok(ast::slice_none(scope, lb.join(rb)));
      }
      let r = self.expr()?;
      let rb = self.expect(TokenKind::RBracket)?.loc;
      return Ok(ast::slice_r(scope, r, lb.join(rb)));
    }
    let idx = self.expr()?;
    if self.eat(TokenKind::Colon)? {
      if self.check(TokenKind::RBracket) {
        let rb = self.bump()?.loc;
        return Ok(ast::slice_l(scope, idx, lb.join(rb)));
      }
      let r = self.expr()?;
      let rb = self.expect(TokenKind::RBracket)?.loc;
      return Ok(ast::slice_lr(scope, idx, r, lb.join(rb)));
    }
    let rb = self.expect(TokenKind::RBracket)?.loc;
    Ok(ast::access_array(scope, idx, lb.join(rb)))
  }

  fn primary_expr(&mut self) -> Result<Node> {
    if self.check(TokenKind::Name) {
      let tok = self.bump()?;
      return Ok(match tok.text.as_str() {
        "null" => ast::literal(LiteralKind::Null, Text::empty(), tok.loc),
        "true" => ast::literal(LiteralKind::True, Text::empty(), tok.loc),
        "false" => ast::literal(LiteralKind::False, Text::empty(), tok.loc),
        _ => ast::name(tok.text, tok.loc),
      });
    }
    if self.check(TokenKind::Integer) {
      let tok = self.bump()?;
      return Ok(ast::literal(LiteralKind::Integer, tok.text, tok.loc));
    }
    if self.check(TokenKind::Float) {
      let tok = self.bump()?;
      return Ok(ast::literal(LiteralKind::Float, tok.text, tok.loc));
    }
    if self.check(TokenKind::String) {
      let tok = self.bump()?;
      return Ok(ast::literal(LiteralKind::String, tok.text, tok.loc));
    }
    if self.eat(TokenKind::LParen)? {
      let inner = self.expr()?;
      self.expect(TokenKind::RParen)?;
      return Ok(inner);
    }
    Err(self.unexpected())
  }

  /// Parses `(args)` for a call trailer. Keyword arguments use `name=value`
  /// here (contrast the vertical arg-suite's `name -> value`, §4.5).
  pub(super) fn call_args(&mut self) -> Result<Arguments> {
    let start = self.expect(TokenKind::LParen)?.loc;
    let mut args = Arguments::empty(start);
    if !self.check(TokenKind::RParen) {
      self.call_arg_one(&mut args)?;
      while self.eat(TokenKind::Comma)? && !self.check(TokenKind::RParen) {
        self.call_arg_one(&mut args)?;
      }
    }
    let end = self.expect(TokenKind::RParen)?.loc;
    args.loc = start.join(end);
    Ok(args)
  }

  fn call_arg_one(&mut self, args: &mut Arguments) -> Result<()> {
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

    let value = self.expr()?;
    if self.check(TokenKind::Assign) {
      let name = match value {
        Node::Name(n) => n,
        other => {
          return Err(ParseError::parse(
            ParseErrorKind::IllegalArg,
            "only a bare name may appear on the left of a keyword argument",
            other.loc(),
          ))
        }
      };
      self.bump()?;
      let rhs = self.expr()?;
      let loc = name.loc.join(rhs.loc());
      return args.push_keyword(name.text, rhs, loc);
    }
    let loc = value.loc();
    args.push_positional(value, loc)
  }
}
