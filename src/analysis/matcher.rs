use crate::tree::{KeyValueEntry, NodeKind, SyntaxNode};

/// Captures from a successful grouping-construct match
#[derive(Debug)]
pub struct GroupingMatch<'a> {
    pub header: &'a SyntaxNode,
    pub entries: &'a [KeyValueEntry],
    pub body: &'a [SyntaxNode],
}

/// Match a block whose header is a bare call to `grouping_call` carrying a
/// single mapping argument
///
/// A header with a receiver, without a mapping argument, or with extra
/// positional arguments is not a grouping construct. Block parameters are
/// irrelevant to the match. The captured entry sequence may be empty.
pub fn match_grouping_block<'a>(
    node: &'a SyntaxNode,
    grouping_call: &str,
) -> Option<GroupingMatch<'a>> {
    let NodeKind::Block { call, body, .. } = &node.kind else {
        return None;
    };
    let NodeKind::Call { receiver, name, args } = &call.kind else {
        return None;
    };
    if receiver.is_some() || name != grouping_call {
        return None;
    }
    let [options] = args.as_slice() else {
        return None;
    };
    let NodeKind::Mapping { entries } = &options.kind else {
        return None;
    };

    Some(GroupingMatch {
        header: call,
        entries,
        body,
    })
}

/// Captures from a successful conditional-option-call match
#[derive(Debug)]
pub struct ConditionalCallMatch<'a> {
    pub call: &'a SyntaxNode,
    pub entries: Vec<&'a KeyValueEntry>,
}

/// Match any call whose trailing argument is a mapping carrying at least one
/// recognized condition key
///
/// Receiver state and invocation target do not matter, and any number of
/// positional arguments may precede the mapping. Every qualifying entry is
/// captured independently, a call may re-declare several condition keys at
/// once.
pub fn match_conditional_call<'a>(
    node: &'a SyntaxNode,
    condition_keys: &[String],
) -> Option<ConditionalCallMatch<'a>> {
    let NodeKind::Call { args, .. } = &node.kind else {
        return None;
    };
    let NodeKind::Mapping { entries } = &args.last()?.kind else {
        return None;
    };

    let captured: Vec<&KeyValueEntry> = entries
        .iter()
        .filter(|entry| condition_keys.iter().any(|key| key == &entry.key))
        .collect();
    if captured.is_empty() {
        return None;
    }

    Some(ConditionalCallMatch {
        call: node,
        entries: captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build::TreeBuilder;

    fn condition_keys() -> Vec<String> {
        vec!["if".to_string(), "unless".to_string()]
    }

    #[test]
    fn test_grouping_block_matches_with_entries() {
        let mut b = TreeBuilder::new();
        let value = b.ident("published?");
        let pair = b.pair("if", value);
        let mapping = b.mapping(vec![pair]);
        let call = b.call("with_options", vec![mapping]);
        let inner = b.call("validates", vec![]);
        let block = b.block(call, vec![inner]);

        let group = match_grouping_block(&block, "with_options").unwrap();
        assert_eq!(group.entries.len(), 1);
        assert_eq!(group.entries[0].key, "if");
        assert_eq!(group.body.len(), 1);
    }

    #[test]
    fn test_grouping_block_matches_empty_mapping() {
        let mut b = TreeBuilder::new();
        let mapping = b.mapping(vec![]);
        let call = b.call("with_options", vec![mapping]);
        let block = b.block(call, vec![]);

        let group = match_grouping_block(&block, "with_options").unwrap();
        assert!(group.entries.is_empty());
    }

    #[test]
    fn test_grouping_block_rejects_receiver() {
        let mut b = TreeBuilder::new();
        let recv = b.ident("model");
        let mapping = b.mapping(vec![]);
        let call = b.call_with_receiver(recv, "with_options", vec![mapping]);
        let block = b.block(call, vec![]);

        assert!(match_grouping_block(&block, "with_options").is_none());
    }

    #[test]
    fn test_grouping_block_rejects_other_names_and_shapes() {
        let mut b = TreeBuilder::new();

        let mapping = b.mapping(vec![]);
        let call = b.call("shared_examples", vec![mapping]);
        let block = b.block(call, vec![]);
        assert!(match_grouping_block(&block, "with_options").is_none());

        // no mapping argument at all
        let bare = b.call("with_options", vec![]);
        let bare_block = b.block(bare, vec![]);
        assert!(match_grouping_block(&bare_block, "with_options").is_none());

        // a positional argument next to the mapping
        let extra = b.ident("extra");
        let mapping = b.mapping(vec![]);
        let call = b.call("with_options", vec![extra, mapping]);
        let block = b.block(call, vec![]);
        assert!(match_grouping_block(&block, "with_options").is_none());

        // a call that is not a block construct
        let mapping = b.mapping(vec![]);
        let call = b.call("with_options", vec![mapping]);
        assert!(match_grouping_block(&call, "with_options").is_none());
    }

    #[test]
    fn test_grouping_block_ignores_block_params() {
        let mut b = TreeBuilder::new();
        let mapping = b.mapping(vec![]);
        let call = b.call("with_options", vec![mapping]);
        let block = b.block_with_params(call, vec!["merger".to_string()], vec![]);

        assert!(match_grouping_block(&block, "with_options").is_some());
    }

    #[test]
    fn test_conditional_call_captures_every_qualifying_entry() {
        let mut b = TreeBuilder::new();
        let v1 = b.literal("-> { content.present? }");
        let p1 = b.pair("if", v1);
        let v2 = b.literal("{ minimum: 50 }");
        let p2 = b.pair("length", v2);
        let v3 = b.literal("-> { content.blank? }");
        let p3 = b.pair("unless", v3);
        let mapping = b.mapping(vec![p1, p2, p3]);
        let arg = b.ident("content");
        let call = b.call("validates", vec![arg, mapping]);

        let found = match_conditional_call(&call, &condition_keys()).unwrap();
        assert_eq!(found.entries.len(), 2);
        assert_eq!(found.entries[0].key, "if");
        assert_eq!(found.entries[1].key, "unless");
    }

    #[test]
    fn test_conditional_call_finds_trailing_mapping_after_positionals() {
        let mut b = TreeBuilder::new();
        let value = b.ident("published?");
        let pair = b.pair("if", value);
        let mapping = b.mapping(vec![pair]);
        let a1 = b.ident("title");
        let a2 = b.ident("content");
        let call = b.call("validates", vec![a1, a2, mapping]);

        assert!(match_conditional_call(&call, &condition_keys()).is_some());
    }

    #[test]
    fn test_conditional_call_allows_receiver() {
        let mut b = TreeBuilder::new();
        let recv = b.ident("record");
        let value = b.ident("published?");
        let pair = b.pair("if", value);
        let mapping = b.mapping(vec![pair]);
        let call = b.call_with_receiver(recv, "update", vec![mapping]);

        assert!(match_conditional_call(&call, &condition_keys()).is_some());
    }

    #[test]
    fn test_conditional_call_rejects_unrecognized_keys_and_missing_mapping() {
        let mut b = TreeBuilder::new();

        let value = b.literal("true");
        let pair = b.pair("presence", value);
        let mapping = b.mapping(vec![pair]);
        let call = b.call("validates", vec![mapping]);
        assert!(match_conditional_call(&call, &condition_keys()).is_none());

        let arg = b.ident("content");
        let plain = b.call("validates", vec![arg]);
        assert!(match_conditional_call(&plain, &condition_keys()).is_none());

        let empty = b.call("validates", vec![]);
        assert!(match_conditional_call(&empty, &condition_keys()).is_none());
    }
}
