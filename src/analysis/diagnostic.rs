use crate::tree::{SourceSpan, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A single suggested textual insertion, never a deletion or rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub offset: usize,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub span: SourceSpan,
    pub severity: DiagnosticSeverity,
    pub rule_id: String,
    pub fix: Option<Fix>, // optional
}

#[derive(Debug)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

/// Handle returned by `report`, used to attach a suggested fix to the
/// offense it was created for
#[derive(Debug)]
pub struct Correction<'a> {
    fix: &'a mut Option<Fix>,
}

impl Correction<'_> {
    /// Schedule an insertion immediately preceding `target`
    ///
    /// Insertions before a flagged node never alter the anchors of other
    /// offenses, so corrections attached to different offenses cannot
    /// conflict when the host applies them iteratively.
    pub fn insert_before(&mut self, target: &SyntaxNode, text: &str) {
        *self.fix = Some(Fix {
            offset: target.span.start.offset,
            text: text.to_string(),
        });
    }
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self { diagnostics: Vec::new() }
    }

    /// Record an offense and hand back the handle for its fix slot
    pub fn report(
        &mut self,
        rule_id: &str,
        severity: DiagnosticSeverity,
        message: String,
        span: SourceSpan,
    ) -> Correction<'_> {
        let idx = self.diagnostics.len();
        self.diagnostics.push(Diagnostic {
            message,
            span,
            severity,
            rule_id: rule_id.to_string(),
            fix: None,
        });
        Correction { fix: &mut self.diagnostics[idx].fix }
    }

    pub fn report_error(&mut self, rule_id: &str, message: String, span: SourceSpan) -> Correction<'_> {
        self.report(rule_id, DiagnosticSeverity::Error, message, span)
    }

    pub fn report_warning(&mut self, rule_id: &str, message: String, span: SourceSpan) -> Correction<'_> {
        self.report(rule_id, DiagnosticSeverity::Warning, message, span)
    }

    pub fn report_info(&mut self, rule_id: &str, message: String, span: SourceSpan) -> Correction<'_> {
        self.report(rule_id, DiagnosticSeverity::Info, message, span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
