use std::mem::replace;

use portal_jsc_swc_util::guard::{literal_boolean, literal_boolean_mut};
use swc_ecma_ast::{IfStmt, Stmt};
use swc_ecma_visit::{VisitMut, VisitMutWith};
use tracing::{debug, trace};

/// Rewrites `if (false) A else B` and `if (false) A else if (true) B` into
/// `if (true) B else A`.
///
/// A nested else-if that is not a bare `true` test, or that has its own
/// alternate, leaves the node as it is.
#[derive(Default)]
pub struct FlipIfStatements {
    pub flipped: usize,
}
impl FlipIfStatements {
    fn flip(&mut self, node: &mut IfStmt) {
        let Some(alt) = node.alt.as_deref() else {
            return;
        };
        if literal_boolean(&node.test) != Some(false) {
            return;
        }
        if let Stmt::If(nested) = alt {
            if literal_boolean(&nested.test) != Some(true) || nested.alt.is_some() {
                trace!(span = ?node.span, "else-if chain is not a terminal `else if (true)`");
                return;
            }
        }
        let Some(alt) = node.alt.take() else {
            return;
        };
        let reachable = match *alt {
            Stmt::If(nested) => nested.cons,
            body => Box::new(body),
        };
        let unreachable = replace(&mut node.cons, reachable);
        node.alt = Some(unreachable);
        if let Some(test) = literal_boolean_mut(&mut node.test) {
            test.value = !test.value;
        }
        debug!(span = ?node.span, "flipped `if (false)`");
        self.flipped += 1;
    }
}
impl VisitMut for FlipIfStatements {
    fn visit_mut_if_stmt(&mut self, node: &mut IfStmt) {
        node.visit_mut_children_with(self);
        self.flip(node);
    }
}

pub fn flip_if_statements(node: &mut impl VisitMutWith<FlipIfStatements>) -> usize {
    let mut rule = FlipIfStatements::default();
    node.visit_mut_with(&mut rule);
    rule.flipped
}
