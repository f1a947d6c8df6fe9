use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::DiagnosticSeverity;
use crate::tree::SyntaxNode;

/// What the analyzer traversal should do after a rule inspected a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// keep descending into the node's children
    Continue,
    /// the rule handled this node and everything beneath it, do not descend
    Subtree,
}

pub trait LintRule {
    // Unique identifier for this rule
    fn id(&self) -> &'static str;

    // Short description of what this rule checks
    fn description(&self) -> &'static str;

    // Severity level of violations (error, warning, info)
    fn severity(&self) -> DiagnosticSeverity;

    // Apply the rule to a node; returning `Subtree` prunes the traversal
    // below it, which is how a rule claims a whole region for its own
    // recursion
    fn check(&self, ctx: &mut AnalysisContext, node: &SyntaxNode) -> CheckOutcome;

    // Optional: whether this rule is enabled by default
    fn enabled_by_default(&self) -> bool {
        true
    }
}
