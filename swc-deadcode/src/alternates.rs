use portal_jsc_swc_util::guard::{is_if_statement, literal_boolean};
use swc_ecma_ast::IfStmt;
use swc_ecma_visit::{VisitMut, VisitMutWith};
use tracing::debug;

/// Drops the plain `else` of an `if (true)`. Else-if links are kept.
#[derive(Default)]
pub struct RemoveDeadAlternates {
    pub removed: usize,
}
impl VisitMut for RemoveDeadAlternates {
    fn visit_mut_if_stmt(&mut self, node: &mut IfStmt) {
        node.visit_mut_children_with(self);
        let Some(alt) = node.alt.as_deref() else {
            return;
        };
        if literal_boolean(&node.test) != Some(true) || is_if_statement(alt) {
            return;
        }
        node.alt = None;
        debug!(span = ?node.span, "removed dead alternate");
        self.removed += 1;
    }
}

pub fn remove_dead_alternates(node: &mut impl VisitMutWith<RemoveDeadAlternates>) -> usize {
    let mut rule = RemoveDeadAlternates::default();
    node.visit_mut_with(&mut rule);
    rule.removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{apply, code};

    fn remove(src: &str) -> String {
        apply(src, |cx| {
            remove_dead_alternates(&mut cx.ast);
        })
    }

    #[test]
    fn plain_else_is_dropped() {
        assert_eq!(
            remove("if (true) { a() } else { b() }"),
            code("if (true) { a() }")
        );
    }

    #[test]
    fn else_if_is_kept() {
        let src = "if (true) { a() } else if (c) { b() }";
        assert_eq!(remove(src), code(src));
    }

    #[test]
    fn false_and_dynamic_tests_are_kept() {
        for src in [
            "if (false) { a() } else { b() }",
            "if (c) { a() } else { b() }",
            "if (1) { a() } else { b() }",
        ] {
            assert_eq!(remove(src), code(src));
        }
    }

    #[test]
    fn reaches_into_else_if_chains() {
        assert_eq!(
            remove("if (c) { a() } else if (true) { b() } else { d() }"),
            code("if (c) { a() } else if (true) { b() }")
        );
    }
}
