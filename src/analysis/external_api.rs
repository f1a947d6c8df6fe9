use crate::LintError;
use crate::analysis::Analyzer;
use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::tree::{SourcePosition, SourceSpan, SyntaxNode};

pub struct AnalyzerConfig {
    pub disabled_rules: Vec<String>,
    pub warning_as_error: bool,
    pub error_limit: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            warning_as_error: false,
            error_limit: None,
        }
    }
}

impl Analyzer {
    pub fn analyze_with_config(
        &self,
        root: &SyntaxNode,
        config: AnalyzerConfig,
    ) -> Result<Vec<Diagnostic>, LintError> {
        let mut ctx = AnalysisContext::new();

        // Apply configuration
        for rule_id in &config.disabled_rules {
            if self.rule_registry.get_rule(rule_id).is_none() {
                return Err(LintError::UnknownRule(rule_id.clone()));
            }
            ctx.disabled_rules.insert(rule_id.clone());
        }

        // Run analysis
        self.apply_rules(&mut ctx, root);

        // Process diagnostics based on config
        let mut diagnostics = ctx.diagnostics.into_diagnostics();

        if config.warning_as_error {
            for diag in &mut diagnostics {
                if diag.severity == DiagnosticSeverity::Warning {
                    diag.severity = DiagnosticSeverity::Error;
                }
            }
        }

        if let Some(limit) = config.error_limit {
            let error_count = diagnostics
                .iter()
                .filter(|d| d.severity == DiagnosticSeverity::Error)
                .count();

            if error_count > limit {
                diagnostics.push(Diagnostic {
                    message: format!("Too many errors ({}), stopping analysis", error_count),
                    span: SourceSpan {
                        start: SourcePosition { offset: 0, line: 0, column: 0 },
                        end: SourcePosition { offset: 0, line: 0, column: 0 },
                    },
                    severity: DiagnosticSeverity::Info,
                    rule_id: "error-limit".to_string(),
                    fix: None,
                });
            }
        }

        Ok(diagnostics)
    }

    // Method to get all available rules
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str, DiagnosticSeverity)> {
        self.rule_registry
            .get_all_rules()
            .iter()
            .map(|rule| (rule.id(), rule.description(), rule.severity()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build::TreeBuilder;

    fn violating_tree() -> SyntaxNode {
        let mut b = TreeBuilder::new();
        let ov = b.ident("published?");
        let op = b.pair("if", ov);
        let cv = b.literal("-> { content.present? }");
        let cp = b.pair("if", cv);
        let content = b.ident("content");
        let mapping = b.mapping(vec![cp]);
        let call = b.call("validates", vec![content, mapping]);
        let outer_mapping = b.mapping(vec![op]);
        let header = b.call("with_options", vec![outer_mapping]);
        b.block(header, vec![call])
    }

    #[test]
    fn test_disabling_the_rule_suppresses_offenses() {
        let root = violating_tree();
        let analyzer = Analyzer::new();

        let config = AnalyzerConfig {
            disabled_rules: vec!["overridden-options".to_string()],
            ..AnalyzerConfig::default()
        };
        let diags = analyzer.analyze_with_config(&root, config).unwrap();
        assert!(diags.is_empty());
    }

    #[test]
    fn test_disabling_an_unknown_rule_is_rejected() {
        let root = violating_tree();
        let analyzer = Analyzer::new();

        let config = AnalyzerConfig {
            disabled_rules: vec!["no-such-rule".to_string()],
            ..AnalyzerConfig::default()
        };
        let result = analyzer.analyze_with_config(&root, config);
        assert!(matches!(result, Err(LintError::UnknownRule(id)) if id == "no-such-rule"));
    }

    #[test]
    fn test_warning_as_error_promotion_and_limit() {
        let root = violating_tree();
        let analyzer = Analyzer::new();

        let config = AnalyzerConfig {
            disabled_rules: Vec::new(),
            warning_as_error: true,
            error_limit: Some(0),
        };
        let diags = analyzer.analyze_with_config(&root, config).unwrap();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].severity, DiagnosticSeverity::Error);
        assert_eq!(diags[1].rule_id, "error-limit");
        assert_eq!(diags[1].severity, DiagnosticSeverity::Info);
    }

    #[test]
    fn test_default_config_keeps_all_offenses() {
        let root = violating_tree();
        let analyzer = Analyzer::new();

        let diags = analyzer
            .analyze_with_config(&root, AnalyzerConfig::default())
            .unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, DiagnosticSeverity::Warning);
    }
}
