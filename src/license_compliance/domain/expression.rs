use super::license_policy::{LicensePolicy, PolicyVerdict};
use std::fmt;

pub const AND: &str = "AND";
pub const OR: &str = "OR";
pub const WITH: &str = "WITH";
pub const LEFT_PARENS: &str = "(";
pub const RIGHT_PARENS: &str = ")";
pub const PLUS_OPERATOR: &str = "+";

/// Deepest parenthesis nesting accepted in a license expression
pub const MAX_NESTING_DEPTH: usize = 64;

/// Deepest parenthesis nesting in `expression`.
///
/// A `)` without a matching `(` does not lower the depth below zero.
pub fn nesting_depth(expression: &str) -> usize {
    let mut depth: usize = 0;
    let mut deepest = 0;
    for c in expression.chars() {
        match c {
            '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Boolean conjunction joining the two operands of an expression node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            AND => Some(Conjunction::And),
            OR => Some(Conjunction::Or),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => AND,
            Conjunction::Or => OR,
        }
    }

    /// Combines two operand verdicts. `Unmatched` never counts as allow.
    pub fn combine(&self, left: PolicyVerdict, right: PolicyVerdict) -> PolicyVerdict {
        let allowed = match self {
            Conjunction::And => left.is_allow() && right.is_allow(),
            Conjunction::Or => left.is_allow() || right.is_allow(),
        };
        if allowed {
            PolicyVerdict::Allow
        } else {
            PolicyVerdict::Deny
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `WITH <exception>` clause attached to an operand.
///
/// Recorded for reporting only; exceptions do not change the resolved policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preposition {
    pub exception: Option<String>,
}

/// One side of an [`ExpressionNode`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operand {
    /// Simple license reference with any `+` suffix removed
    pub simple: Option<String>,
    pub has_plus_suffix: bool,
    /// Policy matched for `simple`, if any
    pub policy: Option<LicensePolicy>,
    pub preposition: Option<Preposition>,
    /// Parenthesized sub-expression
    pub child: Option<Box<ExpressionNode>>,
    /// Effective verdict of this side
    pub usage: PolicyVerdict,
}

impl Operand {
    pub fn is_empty(&self) -> bool {
        self.simple.is_none() && self.child.is_none()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.child, &self.simple) {
            (Some(child), _) => write!(f, "{}{}{}", LEFT_PARENS, child, RIGHT_PARENS)?,
            (None, Some(simple)) => {
                f.write_str(simple)?;
                if self.has_plus_suffix {
                    f.write_str(PLUS_OPERATOR)?;
                }
            }
            (None, None) => {}
        }
        if let Some(preposition) = &self.preposition {
            write!(f, " {}", WITH)?;
            if let Some(exception) = &preposition.exception {
                write!(f, " {}", exception)?;
            }
        }
        Ok(())
    }
}

/// Parsed SPDX license expression.
///
/// Each node exclusively owns its children, so a parse always yields a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionNode {
    pub left: Operand,
    pub right: Operand,
    pub conjunction: Option<Conjunction>,
    pub resolved_policy: PolicyVerdict,
}

impl ExpressionNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// The side new operands attach to: left until a conjunction is seen
    pub fn open_side_mut(&mut self) -> &mut Operand {
        if self.conjunction.is_none() {
            &mut self.left
        } else {
            &mut self.right
        }
    }

    /// Computes `resolved_policy` from the conjunction and both operand verdicts.
    ///
    /// A node without a conjunction takes the verdict of its left operand.
    pub fn finalize(&mut self) {
        self.resolved_policy = match self.conjunction {
            Some(conjunction) => conjunction.combine(self.left.usage, self.right.usage),
            None => self.left.usage,
        };
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.left)?;
        if let Some(conjunction) = self.conjunction {
            write!(f, " {}", conjunction)?;
            if !self.right.is_empty() || self.right.preposition.is_some() {
                write!(f, " {}", self.right)?;
            }
        }
        Ok(())
    }
}
