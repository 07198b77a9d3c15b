use crate::predicate::ZonePredicate;

/// Abstract Syntax Tree node for a parsed zone specification.
///
/// Trees are built bottom-up by the parser and never mutated afterwards, so a
/// parsed `Expr` can be cached and shared between threads freely.
///
/// Chains of the same connective are folded into one node: `a & b & c` is a
/// single [`Expr::And`] with three children. Children are always evaluated in
/// the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Connectives
    /// Conjunction of two or more operands
    ///
    /// # Example
    /// ```text
    /// circle(0,0,500) & y(0,64)
    /// ```
    And(Vec<Expr>),

    /// Disjunction of two or more operands
    ///
    /// # Example
    /// ```text
    /// biome("DESERT") | biome("BADLANDS")
    /// ```
    Or(Vec<Expr>),

    /// Exclusive or of two or more operands, folded pairwise left to right
    Xor(Vec<Expr>),

    /// Negation
    ///
    /// # Example
    /// ```text
    /// !wg("spawn")
    /// ```
    Not(Box<Expr>),

    /// Call to a registered predicate
    ///
    /// # Example
    /// ```text
    /// donut(0,0,100,200)
    /// ```
    Predicate(PredicateCall),

    // Literals
    /// Number literal, only ever found as a predicate argument
    Number(f64),

    /// String literal, only ever found as a predicate argument
    String(String),
}

/// A validated predicate call.
///
/// The argument list has already been checked for arity, types and value
/// constraints against the predicate's registry entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateCall {
    pub predicate: ZonePredicate,
    /// The name as written in the source (lookup is case-insensitive).
    pub name: String,
    /// Literal argument nodes, one per declared parameter.
    pub args: Vec<Expr>,
}

impl Expr {
    /// Operands of a connective node, or the argument literals of a predicate
    /// call. Literals have no children.
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::And(children) | Expr::Or(children) | Expr::Xor(children) => children,
            Expr::Not(inner) => std::slice::from_ref(inner.as_ref()),
            Expr::Predicate(call) => &call.args,
            Expr::Number(_) | Expr::String(_) => &[],
        }
    }

    /// Total number of nodes in the tree, literals included.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Expr::node_count).sum::<usize>()
    }

    /// Value of a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Contents of a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::String(s) => Some(s),
            _ => None,
        }
    }
}
