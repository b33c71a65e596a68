use std::mem::take;

use portal_jsc_swc_util::guard::literal_boolean;
use swc_ecma_ast::{BlockStmt, IfStmt, StaticBlock, Stmt};
use swc_ecma_visit::{VisitMut, VisitMutWith};
use tracing::debug;

/// Splices the body of an alternate-free `if (true) { .. }` into the block
/// that contains it.
///
/// Only direct entries of a [`BlockStmt`] are candidates, and only when the
/// consequent is itself a block. Each entry is addressed by its position
/// while the parent is being rebuilt, so siblings that share a span are
/// never confused with one another.
#[derive(Default)]
pub struct InlineIfStatements {
    pub inlined: usize,
}

fn inlinable_body(if_stmt: IfStmt) -> Result<Vec<Stmt>, IfStmt> {
    if if_stmt.alt.is_some() || literal_boolean(&if_stmt.test) != Some(true) {
        return Err(if_stmt);
    }
    let IfStmt {
        span,
        test,
        cons,
        alt,
    } = if_stmt;
    match *cons {
        Stmt::Block(block) => Ok(block.stmts),
        cons => Err(IfStmt {
            span,
            test,
            cons: Box::new(cons),
            alt,
        }),
    }
}

impl VisitMut for InlineIfStatements {
    fn visit_mut_block_stmt(&mut self, node: &mut BlockStmt) {
        node.visit_mut_children_with(self);
        let stmts = take(&mut node.stmts);
        node.stmts.reserve(stmts.len());
        for stmt in stmts {
            let if_stmt = match stmt {
                Stmt::If(if_stmt) => if_stmt,
                stmt => {
                    node.stmts.push(stmt);
                    continue;
                }
            };
            let span = if_stmt.span;
            match inlinable_body(if_stmt) {
                Ok(body) => {
                    debug!(?span, len = body.len(), "inlined `if (true)` body");
                    self.inlined += 1;
                    node.stmts.extend(body);
                }
                Err(if_stmt) => node.stmts.push(Stmt::If(if_stmt)),
            }
        }
    }
    // A static block's statements do not sit in a block statement.
    fn visit_mut_static_block(&mut self, node: &mut StaticBlock) {
        node.body.visit_mut_children_with(self);
    }
}

pub fn inline_if_statements(node: &mut impl VisitMutWith<InlineIfStatements>) -> usize {
    let mut rule = InlineIfStatements::default();
    node.visit_mut_with(&mut rule);
    rule.inlined
}
