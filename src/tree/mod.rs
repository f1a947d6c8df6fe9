pub mod build;

/// Represents a position in the analyzed source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Represents a span in the analyzed source text (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

/// A node in the parsed tree handed to the engine by the host parser
///
/// The engine borrows nodes for the duration of a single analysis pass,
/// it never mutates them and never keeps them past the pass.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: SourceSpan,
}

/// tracks the node shapes the engine can inspect, in a single enum
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// an invocation, `receiver` is `None` for bare calls
    Call {
        receiver: Option<Box<SyntaxNode>>,
        name: String,
        args: Vec<SyntaxNode>,
    },
    /// a block construct: header call, block parameters, body statements
    Block {
        call: Box<SyntaxNode>,
        params: Vec<String>,
        body: Vec<SyntaxNode>,
    },
    /// a mapping literal of keyword entries
    Mapping { entries: Vec<KeyValueEntry> },
    /// an identifier or symbol reference
    Ident { name: String },
    /// any other literal, opaque to the engine
    Literal { text: String },
}

/// A single `key: value` entry inside a mapping literal
///
/// Key equality is by symbolic name only, the value expression is never
/// compared.
#[derive(Debug, Clone)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: SyntaxNode,
    pub span: SourceSpan,
}

impl SyntaxNode {
    /// Ordered child nodes, used by the generic analyzer traversal
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match &self.kind {
            NodeKind::Call { receiver, args, .. } => {
                let mut children: Vec<&SyntaxNode> = Vec::new();
                if let Some(recv) = receiver {
                    children.push(recv);
                }
                children.extend(args.iter());
                children
            }
            NodeKind::Block { call, body, .. } => {
                let mut children = vec![call.as_ref()];
                children.extend(body.iter());
                children
            }
            NodeKind::Mapping { entries } => entries.iter().map(|e| &e.value).collect(),
            NodeKind::Ident { .. } | NodeKind::Literal { .. } => Vec::new(),
        }
    }
}
