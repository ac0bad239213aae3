//! End-to-end tests for the scalar `ltree` operator table.
//!
//! Each test exercises the full invocation path: catalog lookup ->
//! operand coercion -> fragment assembly, via `Registry::shared()`.

use pretty_assertions::assert_eq;

use ltree_rs::{
    BoundExpr, Error, LabelPath, PathType, PatternDialect, Registry, ResultKind, SqlOperand,
    TaggedArray,
};

fn invoke(name: &str, right: impl Into<ltree_rs::Operand>) -> ltree_rs::Result<BoundExpr> {
    Registry::shared().invoke(PathType::Ltree, name, BoundExpr::column("path"), right)
}

// ============================================================================
// 1. ascendant / descendant containment
// ============================================================================

#[test]
fn test_ascendant_fragment() {
    let col = BoundExpr::column("path");
    let expr = Registry::shared()
        .invoke(PathType::Ltree, "ascendant", col.clone(), "a.b")
        .unwrap();

    assert_eq!(expr.kind, ResultKind::Bool);
    assert_eq!(expr.template.infix, "@>");
    assert_eq!(expr.operands.len(), 2);
    assert_eq!(expr.operands[0], SqlOperand::Expr(Box::new(col)));
    assert_eq!(expr.operands[1], SqlOperand::Literal("a.b".into()));
}

#[test]
fn test_descendant_fragment() {
    let expr = invoke("descendant", "a.b.c").unwrap();
    assert_eq!(expr.kind, ResultKind::Bool);
    assert_eq!(expr.template.infix, "<@");
    assert_eq!(expr.operands[1], SqlOperand::Literal("a.b.c".into()));
}

// ============================================================================
// 2. Pattern matching: ~ and @
// ============================================================================

#[test]
fn test_match_binds_raw_pattern() {
    let expr = invoke("match", "*.Astronomy.*").unwrap();
    assert_eq!(expr.kind, ResultKind::Bool);
    assert_eq!(expr.template.infix, "~");
    assert_eq!(expr.operands[1], SqlOperand::Literal("*.Astronomy.*".into()));
}

#[test]
fn test_match_ltextquery() {
    let expr = invoke("match_ltextquery", "Astro* & !pictures").unwrap();
    assert_eq!(expr.kind, ResultKind::Bool);
    assert_eq!(expr.template.infix, "@");
}

// ============================================================================
// 3. match_any — multi-pattern set, lquery-tagged
// ============================================================================

#[test]
fn test_match_any_from_list() {
    let expr = invoke("match_any", vec!["*.a.*", "*.b.*"]).unwrap();
    assert_eq!(expr.template.infix, "?");

    let SqlOperand::Array(array) = &expr.operands[1] else {
        panic!("expected an array operand, got {:?}", expr.operands[1]);
    };
    assert_eq!(array.dialect(), PatternDialect::Lquery);
    assert_eq!(array.elements(), ["*.a.*", "*.b.*"]);
}

#[test]
fn test_match_any_from_comma_string() {
    let expr = invoke("match_any", "*.a.*,*.b.*").unwrap();

    let SqlOperand::Array(array) = &expr.operands[1] else {
        panic!("expected an array operand");
    };
    assert_eq!(array.elements(), ["*.a.*", "*.b.*"]);
}

#[test]
fn test_match_any_restamps_foreign_tag() {
    let pretagged = TaggedArray::new(PatternDialect::Ltree, ["*.a.*"]);
    let expr = invoke("match_any", pretagged).unwrap();

    let SqlOperand::Array(array) = &expr.operands[1] else {
        panic!("expected an array operand");
    };
    assert_eq!(array.dialect(), PatternDialect::Lquery);
}

// ============================================================================
// 4. contain_ascendant / contain_descendant — ltree-tagged sets
// ============================================================================

#[test]
fn test_contain_ascendant_tags_ltree() {
    let expr = invoke("contain_ascendant", vec!["a.b", "c.d"]).unwrap();
    assert_eq!(expr.template.infix, "@>");

    let SqlOperand::Array(array) = &expr.operands[1] else {
        panic!("expected an array operand");
    };
    assert_eq!(array.dialect(), PatternDialect::Ltree);
    assert_eq!(array.elements(), ["a.b", "c.d"]);
}

#[test]
fn test_contain_descendant_tags_ltree() {
    let expr = invoke("contain_descendant", "a.b,c.d").unwrap();
    assert_eq!(expr.template.infix, "<@");

    let SqlOperand::Array(array) = &expr.operands[1] else {
        panic!("expected an array operand");
    };
    assert_eq!(array.dialect(), PatternDialect::Ltree);
}

// ============================================================================
// 5. Concatenation — the one path-valued scalar operator
// ============================================================================

#[test]
fn test_concat_binds_path_text_as_literal() {
    let expr = invoke("+", LabelPath::new("x.y")).unwrap();

    assert_eq!(expr.kind, ResultKind::Path);
    assert_eq!(expr.template.infix, "||");
    // The coerced path contributes its raw text, not a nested fragment.
    assert_eq!(expr.operands[1], SqlOperand::Literal("x.y".into()));
}

#[test]
fn test_concat_coerces_raw_string() {
    let expr = invoke("+", "x.y").unwrap();
    assert_eq!(expr.kind, ResultKind::Path);
    assert_eq!(expr.operands[1], SqlOperand::Literal("x.y".into()));
}

// ============================================================================
// 6. Failure modes
// ============================================================================

#[test]
fn test_array_only_operator_is_rejected() {
    let err = invoke("find_ancestor", "a.b").unwrap_err();
    assert!(matches!(
        err,
        Error::OperatorNotSupported { path_type: PathType::Ltree, .. }
    ));
}

#[test]
fn test_unknown_operator_is_rejected() {
    let err = invoke("sibling_of", "a.b").unwrap_err();
    assert!(matches!(err, Error::OperatorNotSupported { .. }));
}

#[test]
fn test_list_is_not_a_raw_pattern_shape() {
    let err = invoke("match", vec!["*.a.*"]).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedOperandShape { got: "LIST", .. }
    ));
}
