use serde::Serialize;
use tracing::trace;

use crate::{
    ast::{Expr, PredicateCall, Visitor},
    context::SpatialContext,
    format::DebugFormatter,
    value::Value,
};

/// Tree-walking evaluator for zone specifications.
///
/// Connectives and predicates evaluate to [`Value::Boolean`], literals to
/// their scalar value. Without tracing, `&` and `|` stop at the first operand
/// that decides the result. With tracing every operand is evaluated so the
/// log is complete.
pub struct Evaluator<'c> {
    context: &'c dyn SpatialContext,
    trace: Option<String>,
}

impl<'c> Evaluator<'c> {
    /// Creates a short-circuiting evaluator for `context`.
    pub fn new(context: &'c dyn SpatialContext) -> Self {
        Evaluator {
            context,
            trace: None,
        }
    }

    /// Creates an evaluator that records every sub-result.
    pub fn tracing(context: &'c dyn SpatialContext) -> Self {
        Evaluator {
            context,
            trace: Some(String::new()),
        }
    }

    /// Evaluates an expression against this evaluator's context.
    ///
    /// # Examples
    ///
    /// ```
    /// use zonespec::{parse, Evaluator, Location, Value};
    ///
    /// let expr = parse("y(0,64)").unwrap();
    /// let here = Location::new("world", 10.0, 32.0, 10.0);
    ///
    /// let result = Evaluator::new(&here).eval_expression(&expr);
    /// assert_eq!(result, Value::Boolean(true));
    /// ```
    pub fn eval_expression(&mut self, expr: &Expr) -> Value {
        expr.accept(self)
    }

    /// The trace recorded so far, if tracing.
    pub fn into_trace(self) -> Option<String> {
        self.trace.map(|trace| trace.trim_end().to_string())
    }

    fn record(&mut self, label: &str, result: bool) {
        if let Some(trace) = &mut self.trace {
            trace.push_str(label);
            trace.push_str(if result { " => T, " } else { " => F, " });
        }
    }

    fn eval_all(&mut self, children: &[Expr]) -> Vec<bool> {
        children
            .iter()
            .map(|child| child.accept(self).as_bool())
            .collect()
    }
}

impl Visitor for Evaluator<'_> {
    type Output = Value;

    fn visit_and(&mut self, children: &[Expr]) -> Value {
        let result = if self.trace.is_some() {
            self.eval_all(children).into_iter().all(|r| r)
        } else {
            children.iter().all(|child| child.accept(self).as_bool())
        };
        self.record("&", result);
        Value::Boolean(result)
    }

    fn visit_or(&mut self, children: &[Expr]) -> Value {
        let result = if self.trace.is_some() {
            self.eval_all(children).into_iter().any(|r| r)
        } else {
            children.iter().any(|child| child.accept(self).as_bool())
        };
        self.record("|", result);
        Value::Boolean(result)
    }

    fn visit_xor(&mut self, children: &[Expr]) -> Value {
        let result = self
            .eval_all(children)
            .into_iter()
            .reduce(|left, right| left != right)
            .unwrap_or(false);
        self.record("^", result);
        Value::Boolean(result)
    }

    fn visit_not(&mut self, inner: &Expr) -> Value {
        let result = !inner.accept(self).as_bool();
        self.record("!", result);
        Value::Boolean(result)
    }

    fn visit_predicate(&mut self, call: &PredicateCall) -> Value {
        let args: Vec<Value> = call.args.iter().map(|arg| arg.accept(self)).collect();
        let matched = call.predicate.matches(self.context, &args);
        trace!(predicate = %call.predicate, matched, "evaluated predicate");

        if self.trace.is_some() {
            let mut label = String::new();
            DebugFormatter::new(&mut label).visit_predicate(call);
            self.record(&label, matched);
        }
        Value::Boolean(matched)
    }

    fn visit_number(&mut self, value: f64) -> Value {
        Value::Number(value)
    }

    fn visit_string(&mut self, value: &str) -> Value {
        Value::String(value.to_string())
    }
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Evaluates a parsed specification against a location.
///
/// # Examples
///
/// ```
/// use zonespec::{evaluate, parse, Biome, Location};
///
/// let expr = parse(r#"circle(0,0,500) & !biome("DESERT")"#).unwrap();
/// let here = Location::new("world", 300.0, 64.0, 0.0).with_biome(Biome::Plains);
///
/// let outcome = evaluate(&expr, &here, true);
/// assert!(outcome.matched);
/// assert_eq!(
///     outcome.trace.as_deref(),
///     Some(r#"circle(0,0,500) => T, biome("DESERT") => F, ! => T, & => T,"#)
/// );
/// ```
pub fn evaluate(expr: &Expr, context: &dyn SpatialContext, trace: bool) -> Evaluation {
    let mut evaluator = if trace {
        Evaluator::tracing(context)
    } else {
        Evaluator::new(context)
    };
    let matched = evaluator.eval_expression(expr).as_bool();
    Evaluation {
        matched,
        trace: evaluator.into_trace(),
    }
}

impl Expr {
    /// Short-circuiting evaluation without a trace.
    pub fn matches(&self, context: &dyn SpatialContext) -> bool {
        Evaluator::new(context).eval_expression(self).as_bool()
    }
}
