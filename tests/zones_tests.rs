use zonespec::{Biome, Location, ZoneError, ZoneSet};

const ZONE_FILE: &str = r#"{
    "zones": {
        "spawn": "circle(0,0,200)",
        "outskirts": "donut(0,0,200,2000)",
        "dunes": "biome(\"desert\") & !wg(\"*\")",
        "towns": "wg(\"*\")"
    }
}"#;

#[test]
fn test_load_and_match() {
    let zones = ZoneSet::from_json(ZONE_FILE).unwrap();
    assert_eq!(zones.len(), 4);
    assert_eq!(
        zones.names().collect::<Vec<_>>(),
        vec!["dunes", "outskirts", "spawn", "towns"]
    );

    let desert = Location::new("world", 500.0, 70.0, 0.0).with_biome(Biome::Desert);
    assert_eq!(zones.matching(&desert), vec!["dunes", "outskirts"]);

    let town = Location::new("world", 10.0, 70.0, 10.0).with_region("market");
    assert_eq!(zones.matching(&town), vec!["spawn", "towns"]);
}

#[test]
fn test_specs_are_parsed_once_and_kept() {
    let zones = ZoneSet::from_json(ZONE_FILE).unwrap();
    let dunes = zones.get("dunes").unwrap();
    assert_eq!(dunes.spec, "biome(\"desert\") & !wg(\"*\")");
    assert_eq!(dunes.expr.to_string(), "(biome(\"DESERT\") & !wg(\"*\"))");
    assert!(zones.get("nether").is_none());
}

#[test]
fn test_invalid_spec_names_the_zone() {
    let err = ZoneSet::from_json(r#"{"zones": {"ok": "y(0,10)", "broken": "y(10,0)"}}"#)
        .unwrap_err();
    match err {
        ZoneError::Invalid { zone, spec, error } => {
            assert_eq!(zone, "broken");
            assert_eq!(spec, "y(10,0)");
            assert_eq!(error.message, "y: max must be greater than min");
        }
        other => panic!("Expected invalid zone, got {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    let err = ZoneSet::from_json(r#"{"zones": ["circle(0,0,1)"]}"#).unwrap_err();
    assert!(matches!(err, ZoneError::Json(_)));
    assert!(err.to_string().starts_with("invalid zone file: "));
}

#[test]
fn test_insert_replaces() {
    let mut zones = ZoneSet::new();
    assert!(zones.is_empty());
    zones.insert("home", "circle(0,0,10)").unwrap();
    zones.insert("home", "circle(100,100,10)").unwrap();
    assert_eq!(zones.len(), 1);

    let here = Location::new("world", 100.0, 0.0, 100.0);
    assert_eq!(zones.matching(&here), vec!["home"]);
}

#[test]
fn test_from_specs() {
    let zones = ZoneSet::from_specs([("low", "y(-64,0)"), ("high", "y(200,320)")]).unwrap();
    let deep = Location::new("world", 0.0, -30.0, 0.0);
    assert_eq!(zones.matching(&deep), vec!["low"]);
}
