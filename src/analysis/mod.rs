pub mod context;
pub mod diagnostic;
pub mod external_api;
pub mod matcher;
pub mod rule;
pub mod rule_registry;
pub mod rules;

use log::debug;

use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::Diagnostic;
use crate::analysis::rule::{CheckOutcome, LintRule};
use crate::analysis::rule_registry::RuleRegistry;
use crate::analysis::rules::overridden_options::{OverriddenOptionsRule, RuleConfig};
use crate::tree::SyntaxNode;

pub struct Analyzer {
    rule_registry: RuleRegistry,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_rule_config(RuleConfig::default())
    }

    /// Analyzer with a custom grouping-construct name and recognized-key set
    pub fn with_rule_config(config: RuleConfig) -> Self {
        let mut registry = RuleRegistry::new();

        // Register built-in rules
        registry.register(OverriddenOptionsRule::new(config));
        // Add more rules here...

        Self {
            rule_registry: registry,
        }
    }

    /// Run every enabled rule over one parsed tree
    ///
    /// A single synchronous pass; the returned offenses are in report order
    /// and are never retracted.
    pub fn analyze(&self, root: &SyntaxNode) -> Vec<Diagnostic> {
        let mut ctx = AnalysisContext::new();
        self.apply_rules(&mut ctx, root);
        ctx.diagnostics.into_diagnostics()
    }

    fn apply_rules(&self, ctx: &mut AnalysisContext, root: &SyntaxNode) {
        for rule in self.rule_registry.enabled_rules() {
            if !ctx.is_rule_enabled(rule.id()) {
                continue;
            }
            debug!("applying rule `{}`", rule.id());
            self.visit(ctx, rule, root);
        }
    }

    /// Depth-first dispatch, pruned wherever the rule claims a whole subtree
    fn visit(&self, ctx: &mut AnalysisContext, rule: &dyn LintRule, node: &SyntaxNode) {
        if rule.check(ctx, node) == CheckOutcome::Subtree {
            return;
        }
        for child in node.children() {
            self.visit(ctx, rule, child);
        }
    }
}
