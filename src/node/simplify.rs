//! Canonicalization of expression trees.
//!
//! `simplify` returns a minimal-sign canonical form and `negate` the
//! canonical form of the arithmetic negation. Both derive an outer
//! "wrap in Negation" flag from the node's own sign and push all other
//! signs inward onto leaves, so semantically equal trees converge on one
//! structure. Neither changes the represented value.

use crate::node::order;
use crate::node::Node;

impl Node {
    pub fn simplify(&self) -> Node {
        match self {
            Node::Value(_) => self.clone(),
            Node::Negation(child) => match child.as_ref() {
                Node::Value(value) => Node::Value(-value),
                _ => Node::Negation(Box::new(child.simplify())),
            },
            Node::Addition(children) => simplify_sum(children, self.value() < 0),
            Node::Multiplication(children) => simplify_product(children, self.value() < 0),
            Node::Division(numerator, denominator) => {
                simplify_quotient(numerator, denominator, self.value() < 0)
            }
        }
    }

    pub fn negate(&self) -> Node {
        match self {
            Node::Value(value) => Node::Value(-value),
            Node::Negation(child) => child.simplify(),
            Node::Addition(children) => simplify_sum(children, self.value() > 0),
            Node::Multiplication(children) => simplify_product(children, self.value() > 0),
            Node::Division(numerator, denominator) => {
                simplify_quotient(numerator, denominator, self.value() > 0)
            }
        }
    }
}

/// Flattens nested sums, splices negated sums term by term, sorts the
/// terms descending.
fn simplify_sum(children: &[Node], negate: bool) -> Node {
    let mut terms = Vec::with_capacity(children.len());
    for child in children {
        match child.simplify() {
            Node::Addition(inner) => terms.extend(inner),
            Node::Negation(inner) => match *inner {
                Node::Addition(inner) => terms.extend(inner.iter().map(Node::negate)),
                other => terms.push(Node::Negation(Box::new(other))),
            },
            simple => terms.push(simple),
        }
    }
    terms.sort_by(order::descending);
    wrap(Node::Addition(terms), negate)
}

/// Hoists every factor's sign outward, flattens nested products, sorts the
/// factors ascending.
fn simplify_product(children: &[Node], negate: bool) -> Node {
    let mut factors = Vec::with_capacity(children.len());
    for child in children {
        let simple = if child.value() < 0 {
            child.negate().simplify()
        } else {
            child.simplify()
        };
        match simple {
            Node::Multiplication(inner) => factors.extend(inner),
            other => factors.push(other),
        }
    }
    factors.sort_by(order::ascending);
    wrap(Node::Multiplication(factors), negate)
}

/// Forces both operands non-negative and rebuilds the quotient.
fn simplify_quotient(numerator: &Node, denominator: &Node, negate: bool) -> Node {
    let numerator = normalized(numerator);
    let denominator = normalized(denominator);
    wrap(
        Node::Division(Box::new(numerator), Box::new(denominator)),
        negate,
    )
}

fn normalized(operand: &Node) -> Node {
    if operand.value() < 0 {
        operand.negate().simplify()
    } else {
        operand.simplify()
    }
}

fn wrap(node: Node, negate: bool) -> Node {
    if negate {
        Node::Negation(Box::new(node))
    } else {
        node
    }
}
