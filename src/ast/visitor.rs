use crate::ast::{Expr, PredicateCall};

/// A tree-walking algorithm over [`Expr`].
///
/// [`Expr::accept`] dispatches each node to the method for its variant. Each
/// visitor decides itself whether and in which order to descend into
/// children, which is what lets the evaluator short-circuit.
pub trait Visitor {
    type Output;

    fn visit_and(&mut self, children: &[Expr]) -> Self::Output;

    fn visit_or(&mut self, children: &[Expr]) -> Self::Output;

    fn visit_xor(&mut self, children: &[Expr]) -> Self::Output;

    fn visit_not(&mut self, inner: &Expr) -> Self::Output;

    fn visit_predicate(&mut self, call: &PredicateCall) -> Self::Output;

    fn visit_number(&mut self, value: f64) -> Self::Output;

    fn visit_string(&mut self, value: &str) -> Self::Output;
}

impl Expr {
    /// Dispatch this node to the matching `visit_*` method of `visitor`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::And(children) => visitor.visit_and(children),
            Expr::Or(children) => visitor.visit_or(children),
            Expr::Xor(children) => visitor.visit_xor(children),
            Expr::Not(inner) => visitor.visit_not(inner),
            Expr::Predicate(call) => visitor.visit_predicate(call),
            Expr::Number(value) => visitor.visit_number(*value),
            Expr::String(value) => visitor.visit_string(value),
        }
    }
}
