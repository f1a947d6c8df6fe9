use thiserror::Error;

pub mod analysis;
pub mod tree;

pub use analysis::Analyzer;
pub use analysis::diagnostic::{Correction, Diagnostic, DiagnosticSeverity, Fix};
pub use analysis::external_api::AnalyzerConfig;
pub use analysis::rule::{CheckOutcome, LintRule};
pub use analysis::rules::overridden_options::{DEFAULT_MESSAGE, OverriddenOptionsRule, RuleConfig};
pub use tree::{KeyValueEntry, NodeKind, SourcePosition, SourceSpan, SyntaxNode};

/// Errors from the configuration surface
///
/// The analysis core itself never fails: a tree shape that does not match is
/// silently skipped, not an error.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("The recognized condition-key set must not be empty")]
    EmptyConditionKeys,
    #[error("The grouping-construct name must not be empty")]
    EmptyGroupingCall,
    #[error("Cannot disable unknown rule: {0}")]
    UnknownRule(String),
}
