// Language Compliance Tests
//
// One section per documented property of the zone specification language.

use zonespec::{Biome, Expr, Location, ZonePredicate, evaluate, format, parse};

fn at(x: f64, y: f64, z: f64) -> Location {
    Location::new("world", x, y, z)
}

// ============================================================================
// Section: Arity is always checked
// ============================================================================

#[test]
fn test_wrong_arity_rejected_for_every_predicate() {
    for predicate in ZonePredicate::ALL {
        let arity = predicate.parameters().len();
        for supplied in 0..=5 {
            if supplied == arity {
                continue;
            }
            for literal in ["1", "\"a\""] {
                let args = vec![literal; supplied].join(",");
                let spec = format!("{}({})", predicate.ident(), args);
                let err = parse(&spec).unwrap_err();
                assert!(
                    err.message.starts_with(&format!("{} expects", predicate.ident())),
                    "{} => {}",
                    spec,
                    err.message
                );
            }
        }
    }
}

// ============================================================================
// Section: circle
// ============================================================================

#[test]
fn test_circle_radius_must_be_positive() {
    for radius in ["0", "-1", "-0.5", "0.0"] {
        let err = parse(&format!("circle(0,0,{})", radius)).unwrap_err();
        assert_eq!(err.message, "circle: radius must be greater than 0");
    }
}

#[test]
fn test_circle_matches_squared_distance() {
    let expr = parse("circle(5,-5,10)").unwrap();
    for x in -10..=20 {
        for z in -20..=10 {
            let (px, pz) = (f64::from(x), f64::from(z));
            let expected = (px - 5.0).powi(2) + (pz + 5.0).powi(2) <= 100.0;
            assert_eq!(expr.matches(&at(px, 0.0, pz)), expected, "at ({}, {})", x, z);
        }
    }
}

// ============================================================================
// Section: donut
// ============================================================================

#[test]
fn test_donut() {
    let expr = parse("donut(0,0,10,20)").unwrap();
    assert!(expr.matches(&at(15.0, 0.0, 0.0)));
    assert!(expr.matches(&at(9.0, 0.0, 12.0)));
    assert!(!expr.matches(&at(5.0, 0.0, 0.0)));
    assert!(!expr.matches(&at(0.0, 0.0, 25.0)));
}

// ============================================================================
// Section: y
// ============================================================================

#[test]
fn test_y_closed_interval() {
    let expr = parse("y(10,20)").unwrap();
    assert!(expr.matches(&at(0.0, 10.0, 0.0)));
    assert!(expr.matches(&at(0.0, 20.0, 0.0)));
    assert!(!expr.matches(&at(0.0, 9.0, 0.0)));
    assert!(!expr.matches(&at(0.0, 21.0, 0.0)));
}

#[test]
fn test_y_max_must_exceed_min() {
    assert!(parse("y(20,10)").is_err());
    assert!(parse("y(10,10)").is_err());
}

// ============================================================================
// Section: xor truth table
// ============================================================================

#[test]
fn test_xor_truth_table() {
    let here = at(0.0, 50.0, 0.0);
    let t = "y(0,100)";
    let f = "y(60,100)";
    let cases = [(t, t, false), (t, f, true), (f, t, true), (f, f, false)];

    for (left, right, expected) in cases {
        let spec = format!("{} ^ {}", left, right);
        assert_eq!(parse(&spec).unwrap().matches(&here), expected, "{}", spec);
    }
}

// ============================================================================
// Section: unknown predicates and unquoted strings
// ============================================================================

#[test]
fn test_unknown_predicate() {
    let err = parse("foo(1)").unwrap_err();
    assert!(err.message.contains("unknown predicate"));
    assert!(err.message.contains("foo"));
}

#[test]
fn test_unquoted_biome() {
    let err = parse("biome(END_BARRENS)").unwrap_err();
    assert!(err.message.contains("did you forget to quote a string"));
    assert!(parse("biome(\"END_BARRENS\")").is_ok());
}

// ============================================================================
// Section: end-to-end example
// ============================================================================

#[test]
fn test_end_to_end() {
    let expr = parse("circle(0,0,500) & !biome(\"DESERT\")").unwrap();

    match &expr {
        Expr::And(children) => {
            assert_eq!(children.len(), 2);
            assert!(matches!(&children[0], Expr::Predicate(c) if c.predicate == ZonePredicate::Circle));
            match &children[1] {
                Expr::Not(inner) => assert!(
                    matches!(inner.as_ref(), Expr::Predicate(c) if c.predicate == ZonePredicate::Biome)
                ),
                other => panic!("Expected negation, got {:?}", other),
            }
        }
        other => panic!("Expected conjunction, got {:?}", other),
    }

    let plains = at(300.0, 64.0, 0.0).with_biome(Biome::Plains);
    let desert = at(0.0, 64.0, 300.0).with_biome(Biome::Desert);
    assert!(evaluate(&expr, &plains, false).matched);
    assert!(!evaluate(&expr, &desert, false).matched);
}

// ============================================================================
// Section: pretty printer preserves meaning
// ============================================================================

#[test]
fn test_format_round_trip_examples() {
    let specs = [
        "circle(0,0,500) & !biome(\"DESERT\")",
        "y(0,10) | y(20,30) | y(40,50)",
        "y(0,10) ^ y(5,15) ^ y(8,20)",
        "!(wg(\"*\") & !wg(\"spawn\")) | donut(0,0,1.5,2.25)",
        "rect(-5,-5,5,5) & square(0,0,4) | circle(100,100,10)",
    ];
    let locations = [
        at(0.0, 0.0, 0.0),
        at(0.0, 7.0, 0.0).with_region("spawn"),
        at(1.0, 12.0, 1.5).with_region("arena"),
        at(101.0, 45.0, 99.0).with_biome(Biome::Desert),
        at(300.0, 9.0, 0.0).with_biome(Biome::Plains),
    ];

    for spec in specs {
        let expr = parse(spec).unwrap();
        let reparsed = parse(&format(&expr)).unwrap();
        for location in &locations {
            assert_eq!(
                expr.matches(location),
                reparsed.matches(location),
                "{} vs {} at {:?}",
                spec,
                format(&expr),
                location
            );
        }
    }
}

// ============================================================================
// Section: Formatted output always re-parses
// ============================================================================

#[test]
fn test_numbers_format_to_valid_syntax() {
    let long = format!("1{}", "0".repeat(300));
    let specs = [
        format!("y(0,{})", long),
        format!("circle(-{},0,0.{}1)", long, "0".repeat(40)),
        "rect(+0.5,-0.5,1000000,-1000000)".to_string(),
    ];

    for spec in &specs {
        let expr = parse(spec).unwrap();
        let printed = format(&expr);
        let reparsed = parse(&printed)
            .unwrap_or_else(|err| panic!("{} printed as {}: {}", spec, printed, err));
        assert_eq!(expr, reparsed, "{} printed as {}", spec, printed);
    }

    let too_long = format!("y(0,1{})", "0".repeat(400));
    assert_eq!(parse(&too_long).unwrap_err().message, "number out of range");
}
