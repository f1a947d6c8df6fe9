use std::collections::HashSet;

use log::trace;

use crate::LintError;
use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::DiagnosticSeverity;
use crate::analysis::matcher::{match_conditional_call, match_grouping_block};
use crate::analysis::rule::{CheckOutcome, LintRule};
use crate::tree::{KeyValueEntry, NodeKind, SyntaxNode};

pub const DEFAULT_MESSAGE: &str = "Avoid nesting the same conditional option inside an \
    option-grouping block. The condition may be overridden. Consider refactoring.";

const FIX_PREFIX: &str = "# Consider refactoring: ";

/// Configuration surface for the overridden-options rule
///
/// The recognized condition keys and the grouping-construct name are data,
/// not literals baked into the matching logic, so the rule can be pointed at
/// any option-grouping construct a host dialect provides.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub grouping_call: String,
    pub condition_keys: Vec<String>,
    pub message: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            grouping_call: "with_options".to_string(),
            condition_keys: vec!["if".to_string(), "unless".to_string()],
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl RuleConfig {
    /// Config for a custom grouping construct and recognized-key set
    pub fn new(grouping_call: &str, condition_keys: &[&str]) -> Result<Self, LintError> {
        if grouping_call.is_empty() {
            return Err(LintError::EmptyGroupingCall);
        }
        if condition_keys.is_empty() {
            return Err(LintError::EmptyConditionKeys);
        }

        Ok(Self {
            grouping_call: grouping_call.to_string(),
            condition_keys: condition_keys.iter().map(|k| k.to_string()).collect(),
            message: DEFAULT_MESSAGE.to_string(),
        })
    }
}

/// The condition keys in force at the current grouping depth
///
/// Extension always copies. Sibling branches of the recursion must never
/// observe each other's keys, so a level's set is frozen once computed.
#[derive(Debug, Clone, Default)]
struct ConditionKeySet(HashSet<String>);

impl ConditionKeySet {
    fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    /// A fresh set extended with the keys of the given entries
    fn extended(&self, entries: &[&KeyValueEntry]) -> Self {
        let mut keys = self.0.clone();
        keys.extend(entries.iter().map(|e| e.key.clone()));
        Self(keys)
    }
}

// Rule to check for conditional options re-declared inside an option-grouping
// block that already puts the same key in force
pub struct OverriddenOptionsRule {
    config: RuleConfig,
}

impl OverriddenOptionsRule {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Filter entries down to the recognized condition keys
    fn extract_condition_entries<'a>(&self, entries: &'a [KeyValueEntry]) -> Vec<&'a KeyValueEntry> {
        entries
            .iter()
            .filter(|entry| self.config.condition_keys.iter().any(|key| key == &entry.key))
            .collect()
    }

    /// Recursively check one grouping construct and everything nested in it
    ///
    /// Nested grouping constructs are discovered only through this descent,
    /// each carrying the union of every ancestor's keys, so sibling branches
    /// stay isolated and no call is flagged more than once.
    fn walk(&self, ctx: &mut AnalysisContext, node: &SyntaxNode, inherited: &ConditionKeySet) {
        let Some(group) = match_grouping_block(node, &self.config.grouping_call) else {
            return;
        };

        let current = self.extract_condition_entries(group.entries);
        let all_keys = inherited.extended(&current);
        trace!(
            "{} condition key(s) in force inside `{}` block",
            all_keys.len(),
            self.config.grouping_call
        );

        let mut nested = Vec::new();
        for child in group.body {
            self.scan(ctx, child, &all_keys, &mut nested);
        }
        for block in nested {
            self.walk(ctx, block, &all_keys);
        }
    }

    /// Scan for violating calls, stopping at nested grouping constructs
    ///
    /// A nested grouping's header call is checked at this level (it may
    /// itself re-declare an ancestor's key); its body belongs to the
    /// recursive walk, so every call is attributed to exactly one level
    /// while still being checked against the full inherited union.
    fn scan<'a>(
        &self,
        ctx: &mut AnalysisContext,
        node: &'a SyntaxNode,
        all_keys: &ConditionKeySet,
        nested: &mut Vec<&'a SyntaxNode>,
    ) {
        if let Some(group) = match_grouping_block(node, &self.config.grouping_call) {
            self.check_call(ctx, group.header, all_keys);
            // calls hiding inside the header's own argument values still
            // belong to the enclosing grouping's region, only the body is
            // deferred to the recursive walk
            for child in group.header.children() {
                self.scan(ctx, child, all_keys, nested);
            }
            nested.push(node);
            return;
        }

        if matches!(node.kind, NodeKind::Call { .. }) {
            self.check_call(ctx, node, all_keys);
        }
        for child in node.children() {
            self.scan(ctx, child, all_keys, nested);
        }
    }

    /// Report every entry of `call` that re-declares an in-force key
    fn check_call(&self, ctx: &mut AnalysisContext, call: &SyntaxNode, all_keys: &ConditionKeySet) {
        let Some(found) = match_conditional_call(call, &self.config.condition_keys) else {
            return;
        };

        for entry in found.entries {
            if !all_keys.contains(&entry.key) {
                continue;
            }
            let mut correction = ctx.diagnostics.report(
                self.id(),
                self.severity(),
                self.config.message.clone(),
                entry.span,
            );
            correction.insert_before(found.call, FIX_PREFIX);
        }
    }
}

impl LintRule for OverriddenOptionsRule {
    fn id(&self) -> &'static str {
        "overridden-options"
    }

    fn description(&self) -> &'static str {
        "Checks for conditional options re-declared inside an option-grouping block"
    }

    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Warning
    }

    fn check(&self, ctx: &mut AnalysisContext, node: &SyntaxNode) -> CheckOutcome {
        if match_grouping_block(node, &self.config.grouping_call).is_none() {
            return CheckOutcome::Continue;
        }

        self.walk(ctx, node, &ConditionKeySet::default());
        CheckOutcome::Subtree
    }
}
