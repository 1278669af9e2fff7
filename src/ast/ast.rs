use std::fmt::Display;

use crate::token::tokens::Token;

/// A node of the parsed tree.
///
/// The tree is built bottom-up during a single parse and never mutated
/// afterwards; every node is owned exclusively by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Wraps a token that could not start or continue an expression.
    /// Stands in for the malformed subexpression so parsing can go on.
    Invalid(Token),
    /// An identifier leaf.
    Ident(Token),
    /// An ordered flattening of sibling expressions. Order is source order,
    /// duplicates are allowed.
    List(Vec<AstNode>),
    /// A compile-time binding, `names :: values`. The grammar never
    /// produces a type for this form.
    DeclConst {
        names: Vec<AstNode>,
        explicit_type: Option<Box<AstNode>>,
        values: Vec<AstNode>,
    },
    /// A runtime, typed binding, `names : Type`. Initializer values after
    /// the type are not part of the grammar, so `values` stays empty.
    DeclRuntime {
        names: Vec<AstNode>,
        explicit_type: Option<Box<AstNode>>,
        values: Vec<AstNode>,
    },
}

impl AstNode {
    /// Merges two nodes into one flat list. A `List` operand is spliced
    /// element-wise rather than nested, so the result never holds a `List`
    /// that was the top level of either side. Order is preserved.
    pub fn append(self, right: AstNode) -> AstNode {
        match (self, right) {
            (AstNode::List(mut left_elements), AstNode::List(right_elements)) => {
                left_elements.extend(right_elements);
                AstNode::List(left_elements)
            }
            (AstNode::List(mut left_elements), right) => {
                left_elements.push(right);
                AstNode::List(left_elements)
            }
            (left, AstNode::List(right_elements)) => {
                let mut elements = vec![left];
                elements.extend(right_elements);
                AstNode::List(elements)
            }
            (left, right) => AstNode::List(vec![left, right]),
        }
    }

    /// A `List` yields its elements; any other node is a one-element
    /// sequence of itself.
    pub fn into_elements(self) -> Vec<AstNode> {
        match self {
            AstNode::List(elements) => elements,
            node => vec![node],
        }
    }

    /// Renders the node at the given indentation level. Lists put each
    /// child on its own line, two spaces per level; declarations render
    /// their fields inline in the order `names`, `type`, `values`, empty
    /// fields omitted.
    pub fn pretty(&self, level: usize) -> String {
        match self {
            AstNode::Invalid(_) => String::from("(inv)"),
            AstNode::Ident(token) => format!("'{}'", token),
            AstNode::List(children) => {
                let indent = "  ".repeat(level);
                let mut out = String::from("(list");
                for child in children {
                    out.push('\n');
                    out.push_str(&indent);
                    out.push_str(&child.pretty(level + 1));
                }
                out.push(')');
                out
            }
            AstNode::DeclConst {
                names,
                explicit_type,
                values,
            } => pretty_decl("declCt", names, explicit_type.as_deref(), values),
            AstNode::DeclRuntime {
                names,
                explicit_type,
                values,
            } => pretty_decl("declRt", names, explicit_type.as_deref(), values),
        }
    }
}

fn pretty_decl(
    name: &str,
    names: &[AstNode],
    explicit_type: Option<&AstNode>,
    values: &[AstNode],
) -> String {
    let mut out = format!("({}", name);
    pretty_field(&mut out, "names", names);
    if let Some(type_node) = explicit_type {
        pretty_field(&mut out, "type", std::slice::from_ref(type_node));
    }
    pretty_field(&mut out, "values", values);
    out.push(')');
    out
}

fn pretty_field(out: &mut String, field: &str, nodes: &[AstNode]) {
    if nodes.is_empty() {
        return;
    }

    out.push(' ');
    out.push_str(field);
    out.push_str(": ");

    let rendered: Vec<String> = nodes.iter().map(|node| node.pretty(1)).collect();
    out.push_str(&rendered.join(", "));
}

impl Display for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty(1))
    }
}
