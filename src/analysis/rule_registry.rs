use crate::analysis::rule::LintRule;
use std::collections::HashMap;

/// Every lint rule known to the analyzer, keyed by rule id
pub struct RuleRegistry {
    rules: HashMap<String, Box<dyn LintRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a rule; a later rule with the same id replaces it
    pub fn register<R: LintRule + 'static>(&mut self, rule: R) {
        let rule_id = rule.id().to_string();
        self.rules.insert(rule_id, Box::new(rule));
    }

    pub fn get_rule(&self, rule_id: &str) -> Option<&dyn LintRule> {
        self.rules.get(rule_id).map(|r| r.as_ref())
    }

    pub fn get_all_rules(&self) -> Vec<&dyn LintRule> {
        self.rules.values().map(|r| r.as_ref()).collect()
    }

    /// The rules a pass applies unless the per-pass context disables them;
    /// opt-in rules (`enabled_by_default` false) are left out here
    pub fn enabled_rules(&self) -> Vec<&dyn LintRule> {
        self.rules
            .values()
            .filter(|r| r.enabled_by_default())
            .map(|r| r.as_ref())
            .collect()
    }
}
