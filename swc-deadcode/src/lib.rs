use bitflags::bitflags;
use portal_jsc_swc_util::{Context, Transformer};
use swc_ecma_ast::Program;
use tracing::debug;

pub mod alternates;
pub mod flip;
pub mod inline;

pub use alternates::{RemoveDeadAlternates, remove_dead_alternates};
pub use flip::{FlipIfStatements, flip_if_statements};
pub use inline::{InlineIfStatements, inline_if_statements};

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct DeadCodeRules: u8 {
        const FLIP_IF_STATEMENTS = 0x1;
        const REMOVE_DEAD_ALTERNATES = 0x2;
        const INLINE_IF_STATEMENTS = 0x4;
    }
}
impl Default for DeadCodeRules {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Default, Clone, Debug)]
#[non_exhaustive]
pub struct DeadCodeOptions {
    pub rules: DeadCodeRules,
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DeadCodeStats {
    pub flipped: usize,
    pub removed: usize,
    pub inlined: usize,
}
impl DeadCodeStats {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Eliminates branches guarded by literal booleans.
///
/// One invocation runs flip, dead-alternate removal and inlining as three
/// separate traversals, in that order, and never loops. Anything a later
/// rule makes eligible for an earlier one waits for the next invocation.
#[derive(Default, Clone, Debug)]
pub struct DeadCode {
    pub options: DeadCodeOptions,
    /// Totals of the most recent invocation.
    pub stats: DeadCodeStats,
}
impl DeadCode {
    pub fn new(options: DeadCodeOptions) -> Self {
        Self {
            options,
            stats: Default::default(),
        }
    }
    pub fn run(&self, program: &mut Program) -> DeadCodeStats {
        let rules = self.options.rules;
        let mut stats = DeadCodeStats::default();
        if rules.contains(DeadCodeRules::FLIP_IF_STATEMENTS) {
            stats.flipped = flip_if_statements(program);
        }
        if rules.contains(DeadCodeRules::REMOVE_DEAD_ALTERNATES) {
            stats.removed = remove_dead_alternates(program);
        }
        if rules.contains(DeadCodeRules::INLINE_IF_STATEMENTS) {
            stats.inlined = inline_if_statements(program);
        }
        stats
    }
}
impl Transformer for DeadCode {
    fn name(&self) -> &str {
        "DeadCode"
    }
    #[tracing::instrument(skip_all, name = "DeadCode")]
    fn transform(&mut self, context: &mut Context) -> anyhow::Result<()> {
        self.stats = self.run(&mut context.ast);
        debug!(
            flipped = self.stats.flipped,
            removed = self.stats.removed,
            inlined = self.stats.inlined,
            "dead code pass finished"
        );
        Ok(())
    }
}
