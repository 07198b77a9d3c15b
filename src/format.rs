//! Renders expression trees back to specification text.
//!
//! Output is fully parenthesised and re-parses to a tree that evaluates the
//! same way, though it is not necessarily identical to the original text:
//! folded chains print as nested pairs, so `a & b & c` becomes
//! `((a & b) & c)`.

use std::fmt;

use crate::ast::{Expr, PredicateCall, Visitor};

/// Visitor that appends the source-like rendering of a tree to a buffer.
pub struct DebugFormatter<'a> {
    out: &'a mut String,
}

impl<'a> DebugFormatter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        DebugFormatter { out }
    }

    fn binary(&mut self, children: &[Expr], symbol: &str) {
        let Some((first, rest)) = children.split_first() else {
            return;
        };
        for _ in rest {
            self.out.push('(');
        }
        first.accept(self);
        for child in rest {
            self.out.push(' ');
            self.out.push_str(symbol);
            self.out.push(' ');
            child.accept(self);
            self.out.push(')');
        }
    }
}

impl Visitor for DebugFormatter<'_> {
    type Output = ();

    fn visit_and(&mut self, children: &[Expr]) {
        self.binary(children, "&");
    }

    fn visit_or(&mut self, children: &[Expr]) {
        self.binary(children, "|");
    }

    fn visit_xor(&mut self, children: &[Expr]) {
        self.binary(children, "^");
    }

    fn visit_not(&mut self, inner: &Expr) {
        self.out.push('!');
        inner.accept(self);
    }

    fn visit_predicate(&mut self, call: &PredicateCall) {
        self.out.push_str(&call.name);
        self.out.push('(');
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            arg.accept(self);
        }
        self.out.push(')');
    }

    fn visit_number(&mut self, value: f64) {
        self.out.push_str(&value.to_string());
    }

    fn visit_string(&mut self, value: &str) {
        self.out.push('"');
        self.out.push_str(value);
        self.out.push('"');
    }
}

/// Render `expr` as specification text.
pub fn format(expr: &Expr) -> String {
    let mut out = String::new();
    expr.accept(&mut DebugFormatter::new(&mut out));
    out
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn render(spec: &str) -> String {
        format(&parse(spec).unwrap())
    }

    #[test]
    fn binary_connectives() {
        assert_eq!(render("y(0,10) & y(5,20)"), "(y(0,10) & y(5,20))");
        assert_eq!(render("y(0,10) | y(5,20)"), "(y(0,10) | y(5,20))");
        assert_eq!(render("y(0,10) ^ y(5,20)"), "(y(0,10) ^ y(5,20))");
    }

    #[test]
    fn folded_chain_prints_as_left_fold() {
        assert_eq!(
            render("wg(\"a\") & wg(\"b\") & wg(\"c\")"),
            "((wg(\"a\") & wg(\"b\")) & wg(\"c\"))"
        );
    }

    #[test]
    fn precedence_is_made_explicit() {
        assert_eq!(
            render("wg(\"a\") | wg(\"b\") & !wg(\"c\")"),
            "(wg(\"a\") | (wg(\"b\") & !wg(\"c\")))"
        );
    }

    #[test]
    fn numbers_and_canonical_biomes() {
        assert_eq!(render("circle(-10.5, +3, 0.25)"), "circle(-10.5,3,0.25)");
        assert_eq!(render("BIOME(\"plains\")"), "BIOME(\"PLAINS\")");
    }
}
