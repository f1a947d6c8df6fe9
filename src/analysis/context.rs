use crate::analysis::diagnostic::DiagnosticCollector;
use std::collections::HashSet;

/// Per-pass state threaded through rule checks
///
/// The tree itself is read-only during a pass, the only mutable state is the
/// pass-local offense collection handed to the host when the pass ends.
#[derive(Debug)]
pub struct AnalysisContext {
    pub diagnostics: DiagnosticCollector,
    pub disabled_rules: HashSet<String>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self {
            diagnostics: DiagnosticCollector::new(),
            disabled_rules: HashSet::new(),
        }
    }

    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        !self.disabled_rules.contains(rule_id)
    }
}
