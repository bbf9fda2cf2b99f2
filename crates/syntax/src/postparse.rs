//! Post-parse normalization (§4.6): eliminates the parser's intermediate
//! node shapes so only the documented final-tree variants remain.
//!
//! Suite location erasure is enforced structurally at construction time by
//! [`crate::ast::Suite::push`] rather than as a separate tree walk here —
//! since this implementation builds suites in source order instead of the
//! source's right-to-left cons-then-reverse, there is no "reversal" step to
//! perform, only the inline-app/arrow cleanup below. See DESIGN.md.

use crate::ast::{InlineAppNode, NameNode, Node, XExprNode};
use crate::error::{ParseError, ParseErrorKind};
use crate::text::Text;

/// Replaces every `InlineApp` with the equivalent label-less `XExpr`, and
/// fails if an `Arrow` intermediate is still present (it should always have
/// been consumed while building a suite entry or a keyword argument).
pub fn normalize(root: Node) -> Result<Node, ParseError> {
  let mut first_error = None;
  let tree = root.visit(&mut |node| match node {
    Node::InlineApp(app) => Node::XExpr(promote(app)),
    Node::Arrow(arrow) => {
      if first_error.is_none() {
        first_error = Some(ParseError::parse(
          ParseErrorKind::SyntaxError,
          "an arrow entry was not consumed while building its enclosing suite",
          arrow.loc,
        ));
      }
      // Keep visiting so later siblings don't need special-casing; the
      // error above is what actually gets returned.
      Node::Name(NameNode {
        text: Text::empty(),
        loc: arrow.loc,
      })
    }
    other => other,
  });
  match first_error {
    Some(e) => Err(e),
    None => Ok(tree),
  }
}

fn promote(app: InlineAppNode) -> XExprNode {
  XExprNode {
    has_head_label: false,
    head_label: Text::empty(),
    head_expr: app.scope,
    args: app.args,
    vert_suite: None,
    loc: app.loc,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::args::Arguments;
  use crate::ast::name;
  use span::SourceLoc;

  #[test]
  fn inline_app_is_promoted_to_label_less_xexpr() {
    let loc = SourceLoc::new(1, 1, 1, 5);
    let app = Node::InlineApp(InlineAppNode {
      scope: Box::new(name("f", loc)),
      args: Arguments::empty(loc),
      loc,
    });
    let tree = normalize(app).unwrap();
    match tree {
      Node::XExpr(x) => {
        assert!(!x.has_head_label);
        assert!(x.vert_suite.is_none());
      }
      _ => panic!("expected XExpr"),
    }
  }

  #[test]
  fn no_inline_app_or_arrow_survives_a_nested_tree() {
    use crate::ast::{AssignOp, Suite};
    let loc = SourceLoc::new(1, 1, 1, 5);
    let app = Node::InlineApp(InlineAppNode {
      scope: Box::new(name("f", loc)),
      args: Arguments::empty(loc),
      loc,
    });
    let mut suite = Suite::empty();
    suite.push(None, app, loc);
    let assign = crate::ast::make_assign(AssignOp::Assign, name("x", loc), Node::Suite(suite), loc).unwrap();
    let tree = normalize(assign).unwrap();
    fn assert_clean(n: &Node) {
      match n {
        Node::InlineApp(_) | Node::Arrow(_) => panic!("intermediate survived normalization"),
        Node::Assign(a) => assert_clean(&a.rhs),
        Node::Suite(s) => s.items.iter().for_each(|i| assert_clean(&i.expr)),
        _ => {}
      }
    }
    assert_clean(&tree);
  }
}
