//! The AST: one tagged-sum [`Node`] type plus the structured payloads each
//! variant carries. Every node owns its children outright (no shared
//! ownership, no arena) — dropping a node drops its whole subtree.
//!
//! `InlineApp` and `Arrow` are parser-only intermediates (§4.6): they exist
//! so the grammar can build a call-with-trailers before it knows whether a
//! label or a vertical body follows, but [`crate::postparse`] eliminates
//! every one of them before a tree is handed back to a caller.

use crate::args::Arguments;
use crate::text::Text;
use span::SourceLoc;

#[derive(Debug)]
pub enum Node {
  Name(NameNode),
  Literal(LiteralNode),
  BinOp(BinOpNode),
  UnOp(UnOpNode),
  Trailer(TrailerNode),
  Assign(AssignNode),
  Suite(Suite),
  XExpr(XExprNode),
  InlineApp(InlineAppNode),
  Arrow(ArrowNode),
}

impl Node {
  pub fn loc(&self) -> SourceLoc {
    match self {
      Node::Name(n) => n.loc,
      Node::Literal(n) => n.loc,
      Node::BinOp(n) => n.loc,
      Node::UnOp(n) => n.loc,
      Node::Trailer(n) => n.loc,
      Node::Assign(n) => n.loc,
      Node::Suite(n) => n.loc,
      Node::XExpr(n) => n.loc,
      Node::InlineApp(n) => n.loc,
      Node::Arrow(n) => n.loc,
    }
  }

  /// Post-order: visits every child first, then `f` on this node. `f` may
  /// replace the node entirely (e.g. InlineApp -> XExpr), which is what
  /// makes this the substrate for the post-parse rewrites.
  pub fn visit(self, f: &mut impl FnMut(Node) -> Node) -> Node {
    let visited = match self {
      Node::Name(n) => Node::Name(n),
      Node::Literal(n) => Node::Literal(n),
      Node::BinOp(mut n) => {
        n.lhs = Box::new(n.lhs.visit(f));
        n.rhs = Box::new(n.rhs.visit(f));
        Node::BinOp(n)
      }
      Node::UnOp(mut n) => {
        n.operand = Box::new(n.operand.visit(f));
        Node::UnOp(n)
      }
      Node::Trailer(mut n) => {
        n.scope = Box::new(n.scope.visit(f));
        n.payload = n.payload.visit(f);
        Node::Trailer(n)
      }
      Node::Assign(mut n) => {
        n.lvalue = n.lvalue.visit(f);
        n.rhs = Box::new(n.rhs.visit(f));
        Node::Assign(n)
      }
      Node::Suite(n) => Node::Suite(n.visit(f)),
      Node::XExpr(mut n) => {
        n.head_expr = Box::new(n.head_expr.visit(f));
        n.args = n.args.visit(f);
        n.vert_suite = n.vert_suite.map(|s| s.visit(f));
        Node::XExpr(n)
      }
      Node::InlineApp(mut n) => {
        n.scope = Box::new(n.scope.visit(f));
        n.args = n.args.visit(f);
        Node::InlineApp(n)
      }
      Node::Arrow(mut n) => {
        n.param = Box::new(n.param.visit(f));
        Node::Arrow(n)
      }
    };
    f(visited)
  }
}

#[derive(Debug)]
pub struct NameNode {
  pub text: Text,
  pub loc: SourceLoc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
  String,
  Integer,
  Float,
  Null,
  True,
  False,
}

#[derive(Debug)]
pub struct LiteralNode {
  pub kind: LiteralKind,
  pub text: Text,
  pub loc: SourceLoc,
}

#[derive(Debug)]
pub struct BinOpNode {
  pub op_text: Text,
  pub lhs: Box<Node>,
  pub rhs: Box<Node>,
  pub loc: SourceLoc,
}

#[derive(Debug)]
pub struct UnOpNode {
  pub op_text: Text,
  pub operand: Box<Node>,
  pub loc: SourceLoc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailerKind {
  Attr,
  Array,
  SliceLr,
  SliceL,
  SliceR,
  SliceNone,
}

/// The discriminant doubles as the payload, so a `Trailer` can't claim to be
/// `kind: Attr` while carrying an index expression.
#[derive(Debug)]
pub enum TrailerPayload {
  Attr(Text),
  Array(Box<Node>),
  SliceLr(Box<Node>, Box<Node>),
  SliceL(Box<Node>),
  SliceR(Box<Node>),
  SliceNone,
}

impl TrailerPayload {
  pub fn kind(&self) -> TrailerKind {
    match self {
      TrailerPayload::Attr(_) => TrailerKind::Attr,
      TrailerPayload::Array(_) => TrailerKind::Array,
      TrailerPayload::SliceLr(..) => TrailerKind::SliceLr,
      TrailerPayload::SliceL(_) => TrailerKind::SliceL,
      TrailerPayload::SliceR(_) => TrailerKind::SliceR,
      TrailerPayload::SliceNone => TrailerKind::SliceNone,
    }
  }

  fn visit(self, f: &mut impl FnMut(Node) -> Node) -> Self {
    match self {
      TrailerPayload::Attr(name) => TrailerPayload::Attr(name),
      TrailerPayload::Array(idx) => TrailerPayload::Array(Box::new(idx.visit(f))),
      TrailerPayload::SliceLr(l, r) => {
        TrailerPayload::SliceLr(Box::new(l.visit(f)), Box::new(r.visit(f)))
      }
      TrailerPayload::SliceL(l) => TrailerPayload::SliceL(Box::new(l.visit(f))),
      TrailerPayload::SliceR(r) => TrailerPayload::SliceR(Box::new(r.visit(f))),
      TrailerPayload::SliceNone => TrailerPayload::SliceNone,
    }
  }
}

#[derive(Debug)]
pub struct TrailerNode {
  pub scope: Box<Node>,
  pub payload: TrailerPayload,
  pub loc: SourceLoc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOp {
  Assign,
  DefAssign,
}

#[derive(Debug)]
pub enum LValue {
  Name(Text),
  Attr { scope: Box<Node>, name: Text },
  Array { scope: Box<Node>, index: Box<Node> },
}

impl LValue {
  fn visit(self, f: &mut impl FnMut(Node) -> Node) -> Self {
    match self {
      LValue::Name(n) => LValue::Name(n),
      LValue::Attr { scope, name } => LValue::Attr {
        scope: Box::new(scope.visit(f)),
        name,
      },
      LValue::Array { scope, index } => LValue::Array {
        scope: Box::new(scope.visit(f)),
        index: Box::new(index.visit(f)),
      },
    }
  }
}

#[derive(Debug)]
pub struct AssignNode {
  pub op: AssignOp,
  pub lvalue: LValue,
  pub rhs: Box<Node>,
  pub loc: SourceLoc,
}

/// One top-level entry in a suite: either a bare expression or a
/// `name -> expr` / `"string" -> expr` labeled entry.
///
/// `loc` is meaningful only on the first entry of a [`Suite`] — every later
/// entry carries [`SourceLoc::ERASED`] per §8 invariant 3, mirroring the
/// source's "only the head of the cons chain keeps a real span" rule
/// ([[suite-location-erasure]]).
#[derive(Debug)]
pub struct SuiteItem {
  pub label: Option<Text>,
  pub expr: Box<Node>,
  pub loc: SourceLoc,
}

/// An ordered sequence of top-level items in an indented block. Built as a
/// plain growable list in source order rather than the source's
/// right-to-left cons list + reversal pass; see DESIGN.md for why that's an
/// observably identical, simpler substitute in a language with no
/// right-recursive-list idiom to mirror.
#[derive(Debug, Default)]
pub struct Suite {
  pub items: Vec<SuiteItem>,
  pub loc: SourceLoc,
}

impl Suite {
  /// An empty suite has no entries and the fixed location `(1,1,1,1)` (§6).
  pub fn empty() -> Self {
    Suite {
      items: vec![],
      loc: SourceLoc::new(1, 1, 1, 1),
    }
  }

  /// Appends one entry in source order. Only the first entry keeps its real
  /// span; every later one is erased to [`SourceLoc::ERASED`] (§8 prop 3).
  pub fn push(&mut self, label: Option<Text>, expr: Node, loc: SourceLoc) {
    if self.items.is_empty() {
      self.loc = loc;
      self.items.push(SuiteItem {
        label,
        expr: Box::new(expr),
        loc,
      });
    } else {
      self.items.push(SuiteItem {
        label,
        expr: Box::new(expr),
        loc: SourceLoc::ERASED,
      });
    }
  }

  fn visit(mut self, f: &mut impl FnMut(Node) -> Node) -> Self {
    for item in &mut self.items {
      let expr = std::mem::replace(&mut item.expr, Box::new(Node::Suite(Suite::empty())));
      item.expr = Box::new(expr.visit(f));
    }
    self
  }
}

#[derive(Debug)]
pub struct XExprNode {
  pub has_head_label: bool,
  pub head_label: Text,
  pub head_expr: Box<Node>,
  pub args: Arguments,
  pub vert_suite: Option<Suite>,
  pub loc: SourceLoc,
}

/// Parser-only: "head(args)" before the grammar knows whether a label or a
/// vertical body will attach. Never appears in a tree returned to a caller.
#[derive(Debug)]
pub struct InlineAppNode {
  pub scope: Box<Node>,
  pub args: Arguments,
  pub loc: SourceLoc,
}

/// Parser-only: a `name -> expr` entry captured while building a suite,
/// before it's folded into a [`SuiteItem`]. Also used transiently by
/// keyword-argument parsing. Must not survive to the final tree.
#[derive(Debug)]
pub struct ArrowNode {
  pub name: Text,
  pub param: Box<Node>,
  pub loc: SourceLoc,
}

pub fn name(text: impl Into<Text>, loc: SourceLoc) -> Node {
  Node::Name(NameNode {
    text: text.into(),
    loc,
  })
}

pub fn literal(kind: LiteralKind, text: Text, loc: SourceLoc) -> Node {
  Node::Literal(LiteralNode { kind, text, loc })
}

pub fn bin_op(op_text: Text, lhs: Node, rhs: Node) -> Node {
  let loc = lhs.loc().join(rhs.loc());
  Node::BinOp(BinOpNode {
    op_text,
    lhs: Box::new(lhs),
    rhs: Box::new(rhs),
    loc,
  })
}

pub fn un_op(op_text: Text, operand: Node, loc: SourceLoc) -> Node {
  let loc = loc.join(operand.loc());
  Node::UnOp(UnOpNode {
    op_text,
    operand: Box::new(operand),
    loc,
  })
}

pub fn access_attr(scope: Node, attr_name: Text, loc: SourceLoc) -> Node {
  let loc = scope.loc().join(loc);
  Node::Trailer(TrailerNode {
    scope: Box::new(scope),
    payload: TrailerPayload::Attr(attr_name),
    loc,
  })
}

pub fn access_array(scope: Node, index: Node, loc: SourceLoc) -> Node {
  let loc = scope.loc().join(loc);
  Node::Trailer(TrailerNode {
    scope: Box::new(scope),
    payload: TrailerPayload::Array(Box::new(index)),
    loc,
  })
}

pub fn slice_lr(scope: Node, l: Node, r: Node, loc: SourceLoc) -> Node {
  let loc = scope.loc().join(loc);
  Node::Trailer(TrailerNode {
    scope: Box::new(scope),
    payload: TrailerPayload::SliceLr(Box::new(l), Box::new(r)),
    loc,
  })
}

pub fn slice_l(scope: Node, l: Node, loc: SourceLoc) -> Node {
  let loc = scope.loc().join(loc);
  Node::Trailer(TrailerNode {
    scope: Box::new(scope),
    payload: TrailerPayload::SliceL(Box::new(l)),
    loc,
  })
}

pub fn slice_r(scope: Node, r: Node, loc: SourceLoc) -> Node {
  let loc = scope.loc().join(loc);
  Node::Trailer(TrailerNode {
    scope: Box::new(scope),
    payload: TrailerPayload::SliceR(Box::new(r)),
    loc,
  })
}

pub fn slice_none(scope: Node, loc: SourceLoc) -> Node {
  let loc = scope.loc().join(loc);
  Node::Trailer(TrailerNode {
    scope: Box::new(scope),
    payload: TrailerPayload::SliceNone,
    loc,
  })
}

/// Walks down a left-leaning trailer/InlineApp spine to its leftmost scope
/// and rewrites it to `new_leaf`, without re-parsing the chain. Used when a
/// chain built under one assumption (e.g. a bare name) turns out to need a
/// different root once more context is known.
pub fn trailer_set_leaf_scope(chain: Node, new_leaf: Node) -> Node {
  match chain {
    Node::Trailer(mut t) => {
      t.scope = Box::new(trailer_set_leaf_scope(*t.scope, new_leaf));
      Node::Trailer(t)
    }
    Node::InlineApp(mut a) => {
      a.scope = Box::new(trailer_set_leaf_scope(*a.scope, new_leaf));
      Node::InlineApp(a)
    }
    _ => new_leaf,
  }
}

/// Converts a parsed expression into an lvalue for `=`/`:=`. Only a bare
/// name, an attribute trailer, or an array-index trailer are legal lvalues;
/// anything else (a slice, a literal, an xexpr, ...) is `ILLEGAL_LVALUE`.
pub fn make_assign(
  op: AssignOp,
  lvalue_expr: Node,
  rhs: Node,
  loc: SourceLoc,
) -> Result<Node, crate::error::ParseError> {
  let lvalue = match lvalue_expr {
    Node::Name(n) => LValue::Name(n.text),
    Node::Trailer(t) => match t.payload {
      TrailerPayload::Attr(attr_name) => LValue::Attr {
        scope: t.scope,
        name: attr_name,
      },
      TrailerPayload::Array(index) => LValue::Array {
        scope: t.scope,
        index,
      },
      _ => {
        return Err(crate::error::ParseError::parse(
          crate::error::ParseErrorKind::IllegalLvalue,
          "only a name, attribute, or array index may appear on the left of an assignment",
          loc,
        ))
      }
    },
    _ => {
      return Err(crate::error::ParseError::parse(
        crate::error::ParseErrorKind::IllegalLvalue,
        "only a name, attribute, or array index may appear on the left of an assignment",
        loc,
      ))
    }
  };
  Ok(Node::Assign(AssignNode {
    op,
    lvalue,
    rhs: Box::new(rhs),
    loc,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn loc_join_spans_lhs_and_rhs() {
    let lhs = name("a", SourceLoc::new(1, 1, 1, 2));
    let rhs = name("b", SourceLoc::new(1, 5, 1, 6));
    let node = bin_op(Text::new("+"), lhs, rhs);
    assert_eq!(node.loc(), SourceLoc::new(1, 1, 1, 6));
  }

  #[test]
  fn trailer_chain_tracks_leftmost_scope() {
    let root = name("a", SourceLoc::new(1, 1, 1, 2));
    let chain = access_attr(root, Text::new("b"), SourceLoc::new(1, 3, 1, 4));
    let chain = access_attr(chain, Text::new("c"), SourceLoc::new(1, 5, 1, 6));
    let replaced = trailer_set_leaf_scope(chain, name("z", SourceLoc::new(9, 9, 9, 10)));
    match replaced {
      Node::Trailer(outer) => match *outer.scope {
        Node::Trailer(inner) => match *inner.scope {
          Node::Name(n) => assert_eq!(n.text.as_str(), "z"),
          _ => panic!("expected name leaf"),
        },
        _ => panic!("expected inner trailer"),
      },
      _ => panic!("expected outer trailer"),
    }
  }

  #[test]
  fn make_assign_accepts_name_attr_and_array_lvalues() {
    let loc = SourceLoc::new(1, 1, 1, 5);
    let n = name("x", loc);
    assert!(make_assign(AssignOp::Assign, n, literal(LiteralKind::Integer, Text::new("1"), loc), loc).is_ok());

    let scope = name("a", loc);
    let attr = access_attr(scope, Text::new("b"), loc);
    assert!(make_assign(AssignOp::Assign, attr, literal(LiteralKind::Integer, Text::new("1"), loc), loc).is_ok());
  }

  #[test]
  fn make_assign_rejects_slice_lvalues() {
    let loc = SourceLoc::new(1, 1, 1, 5);
    let scope = name("a", loc);
    let sliced = slice_l(scope, literal(LiteralKind::Integer, Text::new("1"), loc), loc);
    let err = make_assign(
      AssignOp::Assign,
      sliced,
      literal(LiteralKind::Integer, Text::new("3"), loc),
      loc,
    )
    .unwrap_err();
    assert_eq!(err.code, crate::error::ParseErrorKind::IllegalLvalue as i32);
  }

  #[test]
  fn empty_suite_has_the_fixed_location() {
    let s = Suite::empty();
    assert_eq!(s.loc, SourceLoc::new(1, 1, 1, 1));
    assert!(s.items.is_empty());
  }
}
