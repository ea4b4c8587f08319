use super::policy_index::PolicyIndex;
use crate::license_compliance::domain::expression::{
    nesting_depth, AND, LEFT_PARENS, MAX_NESTING_DEPTH, OR, PLUS_OPERATOR, RIGHT_PARENS, WITH,
};
use crate::license_compliance::domain::{
    Conjunction, ExpressionNode, Operand, PolicyVerdict, Preposition,
};

/// Splits a license expression into tokens.
///
/// Parentheses become standalone tokens even when written flush against an
/// identifier, e.g. `(MIT OR Apache-2.0)` yields `["(", "MIT", "OR", "Apache-2.0", ")"]`.
pub fn tokenize(expression: &str) -> Vec<String> {
    expression
        .replace(LEFT_PARENS, " ( ")
        .replace(RIGHT_PARENS, " ) ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Parses a license expression and resolves its policy against `index`.
///
/// # Arguments
/// * `expression` - Raw SPDX expression, e.g. `"(MIT OR GPL-2.0+) AND Apache-2.0"`
/// * `index` - Policy index used to resolve each simple identifier
///
/// # Returns
/// The root node of the expression tree with `resolved_policy` computed.
/// An expression nesting parentheses deeper than [`MAX_NESTING_DEPTH`] is
/// not parsed and yields an empty, `UNMATCHED` node.
///
/// The grammar is deliberately simplified: each nesting level keeps a single
/// conjunction, and the last `AND`/`OR` seen on a level wins.
pub fn parse(expression: &str, index: &PolicyIndex) -> ExpressionNode {
    let depth = nesting_depth(expression);
    if depth > MAX_NESTING_DEPTH {
        log::warn!(
            "license expression nests parentheses {} levels deep (maximum {}); treating as {}",
            depth,
            MAX_NESTING_DEPTH,
            PolicyVerdict::Unmatched
        );
        return ExpressionNode::new();
    }

    let tokens = tokenize(expression);
    log::debug!("Tokens: {:?}", tokens);

    let mut root = ExpressionNode::new();
    let consumed = parse_compound(&mut root, &tokens, 0, 0, index);
    if consumed < tokens.len() {
        log::warn!(
            "unbalanced `{}` in license expression `{}`; ignoring trailing tokens {:?}",
            RIGHT_PARENS,
            expression,
            &tokens[consumed..]
        );
    }
    log::debug!(
        "Parsed expression `{}` => {} ({})",
        expression,
        root,
        root.resolved_policy
    );

    root
}

/// Fills `node` from `tokens[position..]` and returns the index just past the
/// tokens consumed. Returns early at the `)` closing this level.
fn parse_compound(
    node: &mut ExpressionNode,
    tokens: &[String],
    mut position: usize,
    depth: usize,
    index: &PolicyIndex,
) -> usize {
    while let Some(token) = tokens.get(position) {
        match token.as_str() {
            LEFT_PARENS => {
                log::trace!("[{}] open group (depth {})", position, depth + 1);
                let mut child = ExpressionNode::new();
                position = parse_compound(&mut child, tokens, position + 1, depth + 1, index);

                let side = node.open_side_mut();
                side.simple = None;
                side.has_plus_suffix = false;
                side.policy = None;
                side.usage = child.resolved_policy;
                side.child = Some(Box::new(child));
                continue;
            }
            RIGHT_PARENS => {
                log::trace!("[{}] close group (depth {})", position, depth);
                finalize(node);
                // at the root a `)` has no group to close; leave it unconsumed
                return if depth == 0 { position } else { position + 1 };
            }
            AND | OR => {
                log::trace!("[{}] conjunction `{}`", position, token);
                node.conjunction = Conjunction::from_token(token);
            }
            WITH => {
                log::trace!("[{}] preposition `{}`", position, token);
                node.open_side_mut().preposition = Some(Preposition::default());
            }
            simple => {
                log::trace!("[{}] simple expression `{}`", position, simple);
                attach_simple(node.open_side_mut(), simple, index);
            }
        }
        position += 1;
    }

    finalize(node);
    position
}

/// Fills an operand from a simple token.
///
/// After a `WITH` the token names the exception instead of a license.
fn attach_simple(operand: &mut Operand, token: &str, index: &PolicyIndex) {
    if let Some(preposition) = operand.preposition.as_mut() {
        preposition.exception = Some(token.to_string());
        return;
    }

    let (id, has_plus) = match token.strip_suffix(PLUS_OPERATOR) {
        Some(stripped) => (stripped, true),
        None => (token, false),
    };
    operand.child = None;
    operand.simple = Some(id.to_string());
    operand.has_plus_suffix = has_plus;
    operand.policy = index.find_by_id(id).cloned();
    operand.usage = index.lookup_by_id(id);
}

fn finalize(node: &mut ExpressionNode) {
    node.finalize();
    log::trace!(
        "({} ({}) {} {} ({})) == {}",
        node.left,
        node.left.usage,
        node.conjunction.map(|c| c.as_str()).unwrap_or_default(),
        node.right,
        node.right.usage,
        node.resolved_policy
    );
}
