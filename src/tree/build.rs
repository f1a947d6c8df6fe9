use super::{KeyValueEntry, NodeKind, SourcePosition, SourceSpan, SyntaxNode};

/// Builds trees with synthetic, strictly increasing spans
///
/// Hosts that track real source positions construct `SyntaxNode` values
/// directly; this builder is for hosts (and tests) that only need the
/// relative ordering of spans to be meaningful.
pub struct TreeBuilder {
    next_offset: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self { next_offset: 0 }
    }

    fn next_span(&mut self) -> SourceSpan {
        let start = self.next_offset;
        self.next_offset += 1;
        SourceSpan {
            start: SourcePosition { offset: start, line: 1, column: start },
            end: SourcePosition { offset: start + 1, line: 1, column: start + 1 },
        }
    }

    pub fn ident(&mut self, name: &str) -> SyntaxNode {
        SyntaxNode {
            kind: NodeKind::Ident { name: name.to_string() },
            span: self.next_span(),
        }
    }

    pub fn literal(&mut self, text: &str) -> SyntaxNode {
        SyntaxNode {
            kind: NodeKind::Literal { text: text.to_string() },
            span: self.next_span(),
        }
    }

    pub fn pair(&mut self, key: &str, value: SyntaxNode) -> KeyValueEntry {
        KeyValueEntry {
            key: key.to_string(),
            value,
            span: self.next_span(),
        }
    }

    pub fn mapping(&mut self, entries: Vec<KeyValueEntry>) -> SyntaxNode {
        SyntaxNode {
            kind: NodeKind::Mapping { entries },
            span: self.next_span(),
        }
    }

    pub fn call(&mut self, name: &str, args: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode {
            kind: NodeKind::Call {
                receiver: None,
                name: name.to_string(),
                args,
            },
            span: self.next_span(),
        }
    }

    pub fn call_with_receiver(
        &mut self,
        receiver: SyntaxNode,
        name: &str,
        args: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        SyntaxNode {
            kind: NodeKind::Call {
                receiver: Some(Box::new(receiver)),
                name: name.to_string(),
                args,
            },
            span: self.next_span(),
        }
    }

    pub fn block(&mut self, call: SyntaxNode, body: Vec<SyntaxNode>) -> SyntaxNode {
        self.block_with_params(call, Vec::new(), body)
    }

    pub fn block_with_params(
        &mut self,
        call: SyntaxNode,
        params: Vec<String>,
        body: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        SyntaxNode {
            kind: NodeKind::Block {
                call: Box::new(call),
                params,
                body,
            },
            span: self.next_span(),
        }
    }
}
