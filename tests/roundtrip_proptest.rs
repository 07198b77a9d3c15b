//! Property-based tests for the parser, formatter and evaluator.
//!
//! Specifications are generated from the grammar, so every generated string
//! is valid; garbage inputs are covered separately and must only ever
//! produce errors, never panics.

use proptest::prelude::*;
use zonespec::{Biome, Location, evaluate, format, parse};

// ============================================================================
// Generators
// ============================================================================

fn coordinate() -> impl Strategy<Value = f64> {
    (-1000i32..1000).prop_map(|n| f64::from(n) / 4.0)
}

fn positive() -> impl Strategy<Value = f64> {
    (1i32..800).prop_map(|n| f64::from(n) / 4.0)
}

fn biome_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("PLAINS"),
        Just("desert"),
        Just("Forest"),
        Just("END_BARRENS"),
    ]
}

fn region_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("spawn"), Just("arena"), Just("*"), Just("__global__")]
}

fn predicate() -> impl Strategy<Value = String> {
    prop_oneof![
        biome_name().prop_map(|b| format!("biome(\"{}\")", b)),
        (coordinate(), coordinate(), positive())
            .prop_map(|(x, z, r)| format!("circle({},{},{})", x, z, r)),
        (coordinate(), coordinate(), positive(), positive())
            .prop_map(|(x, z, min, extra)| format!("donut({},{},{},{})", x, z, min, min + extra)),
        (coordinate(), coordinate(), coordinate(), coordinate())
            .prop_map(|(x1, z1, x2, z2)| format!("rect({},{},{},{})", x1, z1, x2, z2)),
        (coordinate(), coordinate(), positive())
            .prop_map(|(x, z, side)| format!("SQUARE({}, {}, {})", x, z, side)),
        region_name().prop_map(|r| format!("wg(\"{}\")", r)),
        (coordinate(), positive()).prop_map(|(min, extra)| format!("y({},{})", min, min + extra)),
    ]
}

fn specification() -> impl Strategy<Value = String> {
    predicate().prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{} & {}", a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{} | {}", a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{} ^ {}", a, b)),
            inner.clone().prop_map(|a| format!("!{}", a)),
            inner.prop_map(|a| format!("({})", a)),
        ]
    })
}

fn location() -> impl Strategy<Value = Location> {
    (
        coordinate(),
        (-64i32..320).prop_map(f64::from),
        coordinate(),
        prop::option::of(prop_oneof![
            Just(Biome::Plains),
            Just(Biome::Desert),
            Just(Biome::Forest),
            Just(Biome::EndBarrens),
        ]),
        prop::collection::vec(prop_oneof![Just("spawn"), Just("arena")], 0..3),
    )
        .prop_map(|(x, y, z, biome, regions)| {
            let mut location = Location::new("world", x, y, z);
            location.biome = biome;
            for region in regions {
                location = location.with_region(region);
            }
            location
        })
}

fn token_soup() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just(",".to_string()),
        Just(" & ".to_string()),
        Just(" | ".to_string()),
        Just("^".to_string()),
        Just("!".to_string()),
        "[a-z]{1,7}".prop_map(String::from),
        "[+-]?[0-9]{1,3}(\\.[0-9]{0,2})?".prop_map(String::from),
        r#""[A-Za-z_*]{0,8}"?"#.prop_map(String::from),
    ];
    prop::collection::vec(part, 0..40).prop_map(|parts| parts.concat())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn generated_specs_parse(spec in specification()) {
        prop_assert!(parse(&spec).is_ok(), "{}", spec);
    }

    #[test]
    fn format_preserves_meaning(spec in specification(), locations in prop::collection::vec(location(), 1..8)) {
        let expr = parse(&spec).unwrap();
        let printed = format(&expr);
        let reparsed = parse(&printed).unwrap();

        for location in &locations {
            prop_assert_eq!(
                expr.matches(location),
                reparsed.matches(location),
                "{} printed as {}", spec, printed
            );
        }
    }

    #[test]
    fn format_is_stable(spec in specification()) {
        let once = format(&parse(&spec).unwrap());
        let twice = format(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tracing_does_not_change_result(spec in specification(), here in location()) {
        let expr = parse(&spec).unwrap();
        let traced = evaluate(&expr, &here, true);
        let plain = evaluate(&expr, &here, false);

        prop_assert_eq!(traced.matched, plain.matched);
        let trace = traced.trace.unwrap();
        let expected = if plain.matched { "=> T," } else { "=> F," };
        prop_assert!(trace.ends_with(expected), "{}", trace);
    }

    #[test]
    fn parser_never_panics_on_arbitrary_text(text in "\\PC{0,200}") {
        let _ = parse(&text);
    }

    #[test]
    fn parser_never_panics_on_token_soup(text in token_soup()) {
        if let Err(err) = parse(&text) {
            prop_assert!(err.column() <= text.chars().count());
            let _ = err.render(&text);
        }
    }
}
