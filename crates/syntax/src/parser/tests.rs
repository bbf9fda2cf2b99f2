use super::*;
use crate::ast::{AssignOp, LValue, LiteralKind, TrailerPayload};
use crate::error::ParseErrorKind;
use crate::stream::Stream;
use indoc::indoc;

fn parse_ok(src: &str) -> Node {
  parse(Stream::from_str(src)).unwrap_or_else(|e| panic!("expected a successful parse: {e}"))
}

fn suite_items(src: &str) -> Vec<Node> {
  match parse_ok(src) {
    Node::Suite(s) => s.items.into_iter().map(|i| *i.expr).collect(),
    other => panic!("expected a top-level Suite, got {other:?}"),
  }
}

#[test]
fn simple_assignment() {
  let items = suite_items("x = 1\n");
  assert_eq!(items.len(), 1);
  match &items[0] {
    Node::Assign(a) => {
      assert_eq!(a.op, AssignOp::Assign);
      assert!(matches!(&a.lvalue, LValue::Name(n) if n.as_str() == "x"));
      match &*a.rhs {
        Node::Literal(l) => {
          assert_eq!(l.kind, LiteralKind::Integer);
          assert_eq!(l.text.as_str(), "1");
        }
        other => panic!("expected integer literal, got {other:?}"),
      }
    }
    other => panic!("expected Assign, got {other:?}"),
  }
}

#[test]
fn inline_call_with_positional_keyword_and_star_args() {
  let items = suite_items("f(a, b=2, *rest)\n");
  match &items[0] {
    Node::XExpr(x) => {
      assert!(!x.has_head_label);
      assert!(x.vert_suite.is_none());
      match &*x.head_expr {
        Node::Name(n) => assert_eq!(n.text.as_str(), "f"),
        other => panic!("expected Name(f), got {other:?}"),
      }
      assert_eq!(x.args.positional.len(), 1);
      assert_eq!(x.args.keyword.len(), 1);
      assert_eq!(x.args.keyword[0].0.as_str(), "b");
      assert!(x.args.star.is_some());
    }
    other => panic!("expected XExpr, got {other:?}"),
  }
}

#[test]
fn bare_suite_under_a_head_has_empty_args() {
  let items = suite_items(indoc! {"
    f:
      1
      2
    "});
  match &items[0] {
    Node::XExpr(x) => {
      assert!(!x.has_head_label);
      assert!(x.args.is_empty());
      let suite = x.vert_suite.as_ref().expect("expected a vertical suite");
      assert_eq!(suite.items.len(), 2);
    }
    other => panic!("expected XExpr, got {other:?}"),
  }
}

#[test]
fn double_head_label_with_inline_body() {
  let items = suite_items("def sum(a,b,c): a + b + c\n");
  match &items[0] {
    Node::XExpr(x) => {
      assert!(x.has_head_label);
      assert_eq!(x.head_label.as_str(), "def");
      match &*x.head_expr {
        Node::Name(n) => assert_eq!(n.text.as_str(), "sum"),
        other => panic!("expected Name(sum), got {other:?}"),
      }
      assert_eq!(x.args.positional.len(), 3);
      let suite = x.vert_suite.as_ref().expect("expected a body");
      assert_eq!(suite.items.len(), 1);
    }
    other => panic!("expected XExpr, got {other:?}"),
  }
}

#[test]
fn double_head_with_vertical_arg_suite_and_dminus_body() {
  let items = suite_items(indoc! {"
    def sum>
      a
      b
    --
      a + b
    "});
  match &items[0] {
    Node::XExpr(x) => {
      assert!(x.has_head_label);
      assert_eq!(x.head_label.as_str(), "def");
      assert_eq!(x.args.positional.len(), 2);
      let suite = x.vert_suite.as_ref().expect("expected a body");
      assert_eq!(suite.items.len(), 1);
    }
    other => panic!("expected XExpr, got {other:?}"),
  }
}

#[test]
fn arrow_entry_labels_a_suite_item() {
  match parse_ok("name -> 1\n") {
    Node::Suite(s) => {
      assert_eq!(s.items.len(), 1);
      assert_eq!(s.items[0].label.as_ref().unwrap().as_str(), "name");
    }
    other => panic!("expected Suite, got {other:?}"),
  }
}

#[test]
fn slice_lvalue_is_rejected() {
  let err = parse(Stream::from_str("a.b[1:] = 3\n")).unwrap_err();
  assert!(!err.is_lex_error);
  assert_eq!(err.code, ParseErrorKind::IllegalLvalue as i32);
}

#[test]
fn attr_and_array_lvalues_are_accepted() {
  let items = suite_items("a.b = 3\n");
  match &items[0] {
    Node::Assign(a) => assert!(matches!(&a.lvalue, LValue::Attr { .. })),
    other => panic!("expected Assign, got {other:?}"),
  }

  let items = suite_items("a[0] = 3\n");
  match &items[0] {
    Node::Assign(a) => assert!(matches!(&a.lvalue, LValue::Array { .. })),
    other => panic!("expected Assign, got {other:?}"),
  }
}

#[test]
fn string_escape_decoding() {
  let items = suite_items("\"a\\n\\x41\"\n");
  match &items[0] {
    Node::Literal(l) => {
      assert_eq!(l.kind, LiteralKind::String);
      assert_eq!(l.text.as_str(), "a\nA");
    }
    other => panic!("expected string literal, got {other:?}"),
  }
}

#[test]
fn empty_source_is_an_empty_suite_with_the_fixed_location() {
  match parse_ok("") {
    Node::Suite(s) => {
      assert!(s.items.is_empty());
      assert_eq!(s.loc, span::SourceLoc::new(1, 1, 1, 1));
    }
    other => panic!("expected Suite, got {other:?}"),
  }
}

#[test]
fn whitespace_and_comment_only_source_is_an_empty_suite() {
  match parse_ok("   \n# just a comment\n\n") {
    Node::Suite(s) => assert!(s.items.is_empty()),
    other => panic!("expected Suite, got {other:?}"),
  }
}

#[test]
fn non_head_suite_entries_have_erased_locations() {
  match parse_ok("1\n2\n3\n") {
    Node::Suite(s) => {
      assert_eq!(s.items.len(), 3);
      assert!(!s.items[0].loc.is_erased());
      assert!(s.items[1].loc.is_erased());
      assert!(s.items[2].loc.is_erased());
    }
    other => panic!("expected Suite, got {other:?}"),
  }
}

#[test]
fn attribute_and_index_trailers_chain_left_leaning() {
  let items = suite_items("a.b[0].c\n");
  match &items[0] {
    Node::Trailer(t) => match &t.payload {
      TrailerPayload::Attr(name) => assert_eq!(name.as_str(), "c"),
      other => panic!("expected outer attr trailer, got {other:?}"),
    },
    other => panic!("expected Trailer, got {other:?}"),
  }
}

#[test]
fn illegal_argument_order_is_reported() {
  let err = parse(Stream::from_str("f(a=1, b)\n")).unwrap_err();
  assert!(!err.is_lex_error);
  assert_eq!(err.code, ParseErrorKind::IllegalArg as i32);
}

#[test]
fn power_is_right_associative() {
  let items = suite_items("2 ** 3 ** 2\n");
  match &items[0] {
    Node::BinOp(outer) => {
      assert_eq!(outer.op_text.as_str(), "**");
      match &*outer.lhs {
        Node::Literal(l) => assert_eq!(l.text.as_str(), "2"),
        other => panic!("expected literal 2, got {other:?}"),
      }
      match &*outer.rhs {
        Node::BinOp(inner) => assert_eq!(inner.op_text.as_str(), "**"),
        other => panic!("expected nested '**', got {other:?}"),
      }
    }
    other => panic!("expected BinOp, got {other:?}"),
  }
}
