//! Type-narrowing predicates over swc nodes.
//!
//! These mirror the shape checks a transform makes before touching a node's
//! fields. None of them mutate anything except [`literal_boolean_mut`], which
//! only hands out the literal.
use swc_ecma_ast::{Bool, Expr, Lit, Stmt};

fn unparen(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(p) = expr {
        expr = &p.expr;
    }
    expr
}

fn unparen_mut(mut expr: &mut Expr) -> &mut Expr {
    while let Expr::Paren(p) = expr {
        expr = &mut p.expr;
    }
    expr
}

/// `true`/`false` literals, looking through parentheses.
pub fn is_literal_boolean(expr: &Expr) -> bool {
    literal_boolean(expr).is_some()
}

/// Value of a literal boolean, or `None` for every other expression.
pub fn literal_boolean(expr: &Expr) -> Option<bool> {
    match unparen(expr) {
        Expr::Lit(Lit::Bool(b)) => Some(b.value),
        _ => None,
    }
}

pub fn literal_boolean_mut(expr: &mut Expr) -> Option<&mut Bool> {
    match unparen_mut(expr) {
        Expr::Lit(Lit::Bool(b)) => Some(b),
        _ => None,
    }
}

pub fn is_if_statement(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::If(_))
}

pub fn is_block_statement(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::Block(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_common::DUMMY_SP;
    use swc_ecma_ast::{BlockStmt, EmptyStmt, Ident, ParenExpr};

    fn bool_lit(value: bool) -> Expr {
        Expr::Lit(Lit::Bool(Bool {
            span: DUMMY_SP,
            value,
        }))
    }

    #[test]
    fn literal_booleans_are_recognised() {
        assert_eq!(literal_boolean(&bool_lit(true)), Some(true));
        assert_eq!(literal_boolean(&bool_lit(false)), Some(false));
        assert!(!is_literal_boolean(&Expr::Ident(Ident::new_no_ctxt(
            "x".into(),
            DUMMY_SP
        ))));
    }

    #[test]
    fn parentheses_are_transparent() {
        let mut expr = Expr::Paren(ParenExpr {
            span: DUMMY_SP,
            expr: Box::new(Expr::Paren(ParenExpr {
                span: DUMMY_SP,
                expr: Box::new(bool_lit(false)),
            })),
        });
        assert_eq!(literal_boolean(&expr), Some(false));
        literal_boolean_mut(&mut expr).unwrap().value = true;
        assert_eq!(literal_boolean(&expr), Some(true));
    }

    #[test]
    fn statement_shapes() {
        let block = Stmt::Block(BlockStmt {
            span: DUMMY_SP,
            ctxt: Default::default(),
            stmts: vec![],
        });
        let empty = Stmt::Empty(EmptyStmt { span: DUMMY_SP });
        assert!(is_block_statement(&block));
        assert!(!is_block_statement(&empty));
        assert!(!is_if_statement(&block));
    }
}
