//! # Zone Specification Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) for the
//! zone specification language, a small closed expression language that
//! combines named spatial predicates with boolean connectives.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (connectives, predicate calls, literals)
//! - **[visitor]** - Visitor trait used by the formatter and the evaluator
//!
//! ## Quick Start
//!
//! ```text
//! circle(0,0,500) & !biome("DESERT")
//! ```
//!
//! Matches every location within 500 blocks of the origin that is not in a
//! desert.
//!
//! ## Precedence
//!
//! From weakest to strongest binding:
//!
//! - `|` - or
//! - `^` - exclusive or
//! - `&` - and
//! - `!` - prefix negation, predicate calls and parenthesised groups
//!
//! ```text
//! a | b ^ c & d      // parsed as  a | (b ^ (c & d))
//! ```
//!
//! ## Predicates
//!
//! The set of predicates is fixed; see [`ZonePredicate`](crate::predicate::ZonePredicate).
//!
//! ```text
//! biome("PLAINS")
//! circle(x, z, radius)
//! donut(x, z, min, max)
//! rect(x1, z1, x2, z2)
//! square(x, z, side)
//! wg("region")
//! y(min, max)
//! ```
pub mod expressions;
pub mod tokens;
pub mod visitor;

pub use expressions::{Expr, PredicateCall};
pub use tokens::{Token, TokenKind};
pub use visitor::Visitor;
