pub mod ast;
pub mod biome;
pub mod cli;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod predicate;
pub mod value;
pub mod zones;

pub use ast::{Expr, PredicateCall, Token, TokenKind, Visitor};
pub use biome::Biome;
pub use context::{GLOBAL_REGION, Location, SpatialContext};
pub use error::ParseError;
pub use evaluator::{Evaluation, Evaluator, evaluate};
pub use format::{DebugFormatter, format};
pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use predicate::{ArgumentError, ParamType, Parameter, ZonePredicate};
pub use value::Value;
pub use zones::{Zone, ZoneError, ZoneSet};
