//! The fixed table of zone predicates.
//!
//! Every predicate declares its parameters, a help line, a validation routine
//! run by the parser as soon as a call has been read, and a match routine run
//! by the evaluator against a [`SpatialContext`].

use std::fmt;

use thiserror::Error;

use crate::ast::{Expr, TokenKind};
use crate::biome::Biome;
use crate::context::{GLOBAL_REGION, SpatialContext};
use crate::value::Value;

/// Matches a location in any named region.
pub const ANY_REGION: &str = "*";

/// Declared type of a predicate parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Number,
    String,
}

impl ParamType {
    /// Whether a literal token of `kind` can be passed for this parameter.
    pub fn accepts(self, kind: TokenKind) -> bool {
        matches!(
            (self, kind),
            (ParamType::Number, TokenKind::Number) | (ParamType::String, TokenKind::String)
        )
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Number => f.write_str("number"),
            ParamType::String => f.write_str("string"),
        }
    }
}

/// A formal parameter of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: ParamType,
}

const fn number(name: &'static str) -> Parameter {
    Parameter {
        name,
        kind: ParamType::Number,
    }
}

const fn string(name: &'static str) -> Parameter {
    Parameter {
        name,
        kind: ParamType::String,
    }
}

const BIOME_PARAMS: &[Parameter] = &[string("type")];
const CIRCLE_PARAMS: &[Parameter] = &[number("x"), number("z"), number("radius")];
const DONUT_PARAMS: &[Parameter] = &[number("x"), number("z"), number("min"), number("max")];
const RECT_PARAMS: &[Parameter] = &[number("x1"), number("z1"), number("x2"), number("z2")];
const SQUARE_PARAMS: &[Parameter] = &[number("x"), number("z"), number("side")];
const WG_PARAMS: &[Parameter] = &[string("name")];
const Y_PARAMS: &[Parameter] = &[number("min"), number("max")];

/// A value constraint violated by one argument of a predicate call.
///
/// `index` is the 0-based position of the offending argument, which the
/// parser maps back to that argument's token.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ArgumentError {
    pub index: usize,
    pub message: String,
}

impl ArgumentError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        ArgumentError {
            index,
            message: message.into(),
        }
    }
}

/// A registered zone predicate.
///
/// # Examples
///
/// ```
/// use zonespec::{Location, ZonePredicate, Value};
///
/// let circle = ZonePredicate::lookup("CIRCLE").unwrap();
/// assert_eq!(circle.signature(), "circle(x,z,radius)");
///
/// let args = [Value::Number(0.0), Value::Number(0.0), Value::Number(10.0)];
/// assert!(circle.matches(&Location::new("world", 6.0, 70.0, 8.0), &args));
/// assert!(!circle.matches(&Location::new("world", 6.0, 70.0, 9.0), &args));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZonePredicate {
    Biome,
    Circle,
    Donut,
    Rect,
    Square,
    Wg,
    Y,
}

impl ZonePredicate {
    pub const ALL: [ZonePredicate; 7] = [
        ZonePredicate::Biome,
        ZonePredicate::Circle,
        ZonePredicate::Donut,
        ZonePredicate::Rect,
        ZonePredicate::Square,
        ZonePredicate::Wg,
        ZonePredicate::Y,
    ];

    /// Look a predicate up by name, ignoring case.
    pub fn lookup(name: &str) -> Option<ZonePredicate> {
        ZonePredicate::ALL
            .into_iter()
            .find(|predicate| predicate.ident().eq_ignore_ascii_case(name))
    }

    pub fn ident(self) -> &'static str {
        match self {
            ZonePredicate::Biome => "biome",
            ZonePredicate::Circle => "circle",
            ZonePredicate::Donut => "donut",
            ZonePredicate::Rect => "rect",
            ZonePredicate::Square => "square",
            ZonePredicate::Wg => "wg",
            ZonePredicate::Y => "y",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            ZonePredicate::Biome => "the location is in the named biome",
            ZonePredicate::Circle => "horizontal distance from (x,z) is at most radius",
            ZonePredicate::Donut => "horizontal distance from (x,z) is between min and max",
            ZonePredicate::Rect => "inside the rectangle with corners (x1,z1) and (x2,z2)",
            ZonePredicate::Square => "inside the square with the given side centred on (x,z)",
            ZonePredicate::Wg => {
                "inside the named region; \"*\" for any region, \"__global__\" for none"
            }
            ZonePredicate::Y => "the Y coordinate is between min and max inclusive",
        }
    }

    pub fn parameters(self) -> &'static [Parameter] {
        match self {
            ZonePredicate::Biome => BIOME_PARAMS,
            ZonePredicate::Circle => CIRCLE_PARAMS,
            ZonePredicate::Donut => DONUT_PARAMS,
            ZonePredicate::Rect => RECT_PARAMS,
            ZonePredicate::Square => SQUARE_PARAMS,
            ZonePredicate::Wg => WG_PARAMS,
            ZonePredicate::Y => Y_PARAMS,
        }
    }

    /// Call signature, e.g. `donut(x,z,min,max)`.
    pub fn signature(self) -> String {
        let names: Vec<&str> = self.parameters().iter().map(|p| p.name).collect();
        format!("{}({})", self.ident(), names.join(","))
    }

    /// Check value constraints on already type-checked literal arguments.
    ///
    /// May rewrite arguments into canonical form: a biome name becomes its
    /// upper-case identifier.
    pub fn validate(self, args: &mut [Expr]) -> Result<(), ArgumentError> {
        match self {
            ZonePredicate::Biome => {
                let name = args.first().and_then(Expr::as_str).unwrap_or_default();
                let biome = Biome::from_name(name)
                    .ok_or_else(|| ArgumentError::new(0, format!("unknown biome '{}'", name)))?;
                if let Some(slot) = args.first_mut() {
                    *slot = Expr::String(biome.name().to_string());
                }
                Ok(())
            }
            ZonePredicate::Circle => positive(args, 2, "radius"),
            ZonePredicate::Square => positive(args, 2, "side"),
            ZonePredicate::Donut => {
                positive(args, 2, "min")?;
                greater(args, 3, 2, "max", "min")
            }
            ZonePredicate::Y => greater(args, 1, 0, "max", "min"),
            ZonePredicate::Rect | ZonePredicate::Wg => Ok(()),
        }
    }

    /// Test the location against validated arguments.
    pub fn matches(self, ctx: &dyn SpatialContext, args: &[Value]) -> bool {
        match self {
            ZonePredicate::Biome => {
                let name = args.first().and_then(Value::as_str).unwrap_or_default();
                ctx.biome().is_some_and(|biome| biome.name() == name)
            }
            ZonePredicate::Circle => {
                let radius = arg(args, 2);
                distance_squared(ctx, arg(args, 0), arg(args, 1)) <= radius * radius
            }
            ZonePredicate::Donut => {
                let (min, max) = (arg(args, 2), arg(args, 3));
                let d2 = distance_squared(ctx, arg(args, 0), arg(args, 1));
                d2 >= min * min && d2 <= max * max
            }
            ZonePredicate::Rect => {
                let (x1, z1, x2, z2) = (arg(args, 0), arg(args, 1), arg(args, 2), arg(args, 3));
                let (x, z) = (ctx.x(), ctx.z());
                x >= x1.min(x2) && x <= x1.max(x2) && z >= z1.min(z2) && z <= z1.max(z2)
            }
            ZonePredicate::Square => {
                let half = arg(args, 2) / 2.0;
                let dx = ctx.x() - arg(args, 0);
                let dz = ctx.z() - arg(args, 1);
                dx * dx <= half * half && dz * dz <= half * half
            }
            ZonePredicate::Wg => {
                let name = args.first().and_then(Value::as_str).unwrap_or_default();
                let mut regions = ctx.regions().iter().filter(|id| *id != GLOBAL_REGION);
                match name {
                    ANY_REGION => regions.next().is_some(),
                    GLOBAL_REGION => regions.next().is_none(),
                    _ => regions.any(|id| id.eq_ignore_ascii_case(name)),
                }
            }
            ZonePredicate::Y => {
                let y = ctx.y();
                y >= arg(args, 0) && y <= arg(args, 1)
            }
        }
    }
}

impl fmt::Display for ZonePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

// Missing or non-numeric arguments read as NaN, which fails every comparison.
fn arg(args: &[Value], index: usize) -> f64 {
    args.get(index).and_then(Value::as_float).unwrap_or(f64::NAN)
}

fn distance_squared(ctx: &dyn SpatialContext, x: f64, z: f64) -> f64 {
    let dx = ctx.x() - x;
    let dz = ctx.z() - z;
    dx * dx + dz * dz
}

fn literal(args: &[Expr], index: usize) -> f64 {
    args.get(index).and_then(Expr::as_number).unwrap_or(f64::NAN)
}

fn positive(args: &[Expr], index: usize, name: &str) -> Result<(), ArgumentError> {
    if literal(args, index) > 0.0 {
        Ok(())
    } else {
        Err(ArgumentError::new(
            index,
            format!("{} must be greater than 0", name),
        ))
    }
}

fn greater(
    args: &[Expr],
    index: usize,
    other: usize,
    name: &str,
    other_name: &str,
) -> Result<(), ArgumentError> {
    if literal(args, index) > literal(args, other) {
        Ok(())
    } else {
        Err(ArgumentError::new(
            index,
            format!("{} must be greater than {}", name, other_name),
        ))
    }
}
