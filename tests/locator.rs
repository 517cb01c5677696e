use maidenhead::{CoordError, Error, LocatorError, ParseOptions, Point, Precision};

const FIXED_POINTS: &[(f64, f64, &str, &str)] = &[
    (48.14666, 11.60833, "JN58TD", "JN58TD25"),
    (-34.91, -56.21166, "GF15VC", "GF15VC41"),
    (38.92, -77.065, "FM18LW", "FM18LW20"),
    (-41.28333, 174.745, "RE78IR", "RE78IR92"),
    (41.714775, -72.727260, "FN31PR", "FN31PR21"),
    (37.413708, -122.1073236, "CM87WJ", "CM87WJ79"),
    (35.0542, -85.1142, "EM75KB", "EM75KB63"),
];

#[test]
fn grid_square_fixed_points() {
    for (lat, lon, expected, _) in FIXED_POINTS {
        let point = Point::new(*lat, *lon);
        assert_eq!(point.grid_square().unwrap(), *expected, "{point}");
        assert_eq!(maidenhead::grid_square(&point).unwrap(), *expected, "{point}");
    }
}

#[test]
fn extended_square_fixed_points() {
    for (lat, lon, _, expected) in FIXED_POINTS {
        let point = Point::new(*lat, *lon);
        let locator = maidenhead::encode(&point, Precision::ExtendedSquare).unwrap();
        assert_eq!(locator, *expected, "{point}");
    }
}

#[test]
fn each_precision_extends_the_previous() {
    let point = Point::new(48.14666, 11.60833);
    let full = point.locator(Precision::ExtendedSubSquare).unwrap();
    assert_eq!(full.len(), 10);
    assert!(full.starts_with("JN58TD25"));
    assert!(full[8..].chars().all(|c| c.is_ascii_lowercase()));

    for precision in [Precision::Field, Precision::Square, Precision::SubSquare, Precision::ExtendedSquare] {
        let locator = point.locator(precision).unwrap();
        assert_eq!(locator.len(), precision.chars());
        assert_eq!(locator, full[..precision.chars()]);
    }
}

#[test]
fn parse_then_encode_round_trip() {
    let locators = [
        "JN88RT", "JN89HF", "JN58TD", "GF15VC", "FM18LW", "RE78IR",
        "JN", "AA", "RR", "JN89", "AR09", "JN89HF23", "RA90XA09",
        "JN89HF23ag", "AA00AA00aa", "RR99XX99xx",
    ];

    for locator in locators {
        let point = maidenhead::parse(locator).unwrap();
        let precision = Precision::from_len(locator.len()).unwrap();
        assert_eq!(point.locator(precision).unwrap(), locator, "{locator} parsed to {point}");
    }
}

#[test]
fn parse_then_encode_round_trip_every_field() {
    for lon in 'A'..='R' {
        for lat in 'A'..='R' {
            let locator = format!("{lon}{lat}55MM");
            let point = maidenhead::parse_strict(&locator).unwrap();
            assert_eq!(point.grid_square().unwrap(), locator);
        }
    }
}

#[test]
fn permissive_round_trip_is_case_normalized() {
    let point = maidenhead::parse("jn89hf23AG").unwrap();
    let locator = point.locator(Precision::ExtendedSubSquare).unwrap();
    assert_eq!(locator, "JN89HF23ag");
}

#[test]
fn parse_corner() {
    let point = maidenhead::parse("JN58").unwrap();
    assert_eq!(point.latitude(), 48.0);
    assert_eq!(point.longitude(), 10.0);

    let point = maidenhead::parse("AA").unwrap();
    assert_eq!(point.latitude(), -90.0);
    assert_eq!(point.longitude(), -180.0);
}

#[test]
fn parse_empty_locator() {
    let corner = maidenhead::parse("").unwrap();
    assert_eq!((corner.latitude(), corner.longitude()), (-90.0, -180.0));

    let center = maidenhead::parse_centered("").unwrap();
    assert_eq!((center.latitude(), center.longitude()), (0.0, 0.0));
}

#[test]
fn parse_centered_offsets_by_half_a_cell() {
    let corner = maidenhead::parse("JN58TD").unwrap();
    let center = maidenhead::parse_centered("JN58TD").unwrap();

    assert!((center.longitude() - corner.longitude() - 2.5 / 60.0).abs() < 1e-12);
    assert!((center.latitude() - corner.latitude() - 1.25 / 60.0).abs() < 1e-12);
}

#[test]
fn centered_distance_to_corner() {
    let cases = [
        ("JN89", 91.42870273454076),
        ("JN89HF", 3.8111046375990782),
        ("JN89HF23", 0.38109528459829756),
        ("JN89HF23ag", 0.015878904160500258),
    ];

    let mut previous = f64::INFINITY;
    for (locator, expected) in cases {
        let corner = maidenhead::parse(locator).unwrap();
        let center = maidenhead::parse_centered(locator).unwrap();
        let dist = center.distance(&corner);

        assert!((dist - expected).abs() < 1e-5, "{locator}: {dist} km, expected {expected} km");
        assert!(dist < previous);
        previous = dist;
    }
}

#[test]
fn strict_and_permissive_variants_agree_on_canonical_input() {
    for locator in ["JN58TD", "GF15VC41", "JN89HF23ag"] {
        assert_eq!(maidenhead::parse(locator).unwrap(), maidenhead::parse_strict(locator).unwrap());
        assert_eq!(
            maidenhead::parse_centered(locator).unwrap(),
            maidenhead::parse_strict_centered(locator).unwrap(),
        );
    }
}

#[test]
fn parse_with_matches_named_variants() {
    let locator = "FM18LW20";
    let options = ParseOptions { strict: true, centered: true };
    assert_eq!(
        maidenhead::parse_with(locator, options).unwrap(),
        maidenhead::parse_strict_centered(locator).unwrap(),
    );
    assert_eq!(
        maidenhead::parse_with(locator, ParseOptions::default()).unwrap(),
        maidenhead::parse(locator).unwrap(),
    );
}

#[test]
fn strict_rejects_invalid_locators() {
    let locators = [
        "JN58td",
        "JN58TDAA",
        "JNH",
        "QN58jh",
        "JN77ya",
        " ",
        "JN55J",
        "JN89HA11aa2",
        "JN89HA11aa22",
        "JN58TD25AD",
        "JN 8",
        "SA00",
        "JNé",
    ];

    for locator in locators {
        assert!(maidenhead::parse_strict(locator).is_err(), "{locator:?} parsed");
        assert!(maidenhead::parse_strict_centered(locator).is_err(), "{locator:?} parsed");
    }
}

#[test]
fn permissive_accepts_either_case() {
    for locator in ["JN58td", "jn58TD", "jN58tD25", "JN58TD25AD", "jn58td25ad"] {
        assert!(maidenhead::parse(locator).is_ok(), "{locator:?} rejected");
    }
    assert_eq!(maidenhead::parse("jn58td").unwrap(), maidenhead::parse("JN58TD").unwrap());
}

#[test]
fn locator_errors() {
    assert_eq!(
        maidenhead::parse_strict("JN58td"),
        Err(Error::InvalidLocator(LocatorError::InvalidChar { offset: 4 })),
    );
    assert_eq!(
        maidenhead::parse_strict("JN58TD25AD"),
        Err(Error::InvalidLocator(LocatorError::InvalidChar { offset: 8 })),
    );
    assert_eq!(maidenhead::parse("JNH"), Err(Error::InvalidLocator(LocatorError::OddLength)));
    assert_eq!(
        maidenhead::parse("JN89HA11aa22"),
        Err(Error::InvalidLocator(LocatorError::TooLong { len: 12 })),
    );
    assert_eq!(
        maidenhead::parse("SA00"),
        Err(Error::InvalidLocator(LocatorError::InvalidChar { offset: 0 })),
    );
    assert_eq!(
        maidenhead::parse("JNé"),
        Err(Error::InvalidLocator(LocatorError::InvalidChar { offset: 2 })),
    );
    assert_eq!(
        maidenhead::parse("JN8A").unwrap_err().to_string(),
        "Locator is invalid: invalid character at offset 3",
    );
    assert_eq!(
        maidenhead::parse("JN89HA11aa22").unwrap_err().to_string(),
        "Locator is invalid: locator is too long (12 characters, maximum 10 characters allowed)",
    );
}

#[test]
fn encode_rejects_invalid_coordinates_in_order() {
    let cases = [
        (f64::NAN, f64::NAN, CoordError::LatitudeNan),
        (f64::INFINITY, f64::NAN, CoordError::LatitudeInfinite),
        (0.0, f64::NAN, CoordError::LongitudeNan),
        (0.0, f64::NEG_INFINITY, CoordError::LongitudeInfinite),
        (90.0, 500.0, CoordError::Pole),
        (-90.0, 0.0, CoordError::Pole),
        (91.0, 500.0, CoordError::Latitude(91.0)),
        (0.0, 180.5, CoordError::Longitude(180.5)),
        (0.0, -181.0, CoordError::Longitude(-181.0)),
    ];

    for (lat, lon, expected) in cases {
        let result = maidenhead::encode(&Point::new(lat, lon), Precision::SubSquare);
        assert_eq!(result, Err(Error::InvalidCoord(expected)), "({lat}, {lon})");
    }
}

#[test]
fn encode_error_messages() {
    let err = Point::new(91.0, 0.0).grid_square().unwrap_err();
    assert_eq!(err.to_string(), "Coordinate is not valid: invalid latitude 91.0000");

    let err = Point::new(0.0, 200.0).grid_square().unwrap_err();
    assert_eq!(err.to_string(), "Coordinate is not valid: invalid longitude 200.00000");

    let err = Point::new(-90.0, 0.0).grid_square().unwrap_err();
    assert_eq!(err.to_string(), "Coordinate is not valid: grid square invalid at poles");
}

#[test]
fn encode_grid_edges() {
    assert_eq!(maidenhead::encode(&Point::new(0.0, -180.0), Precision::Field).unwrap(), "AJ");
    assert_eq!(maidenhead::encode(&Point::new(0.0, 180.0), Precision::Field).unwrap(), "RJ");
    assert_eq!(maidenhead::encode(&Point::new(-89.999, -179.999), Precision::Square).unwrap(), "AA00");

    assert_eq!(maidenhead::encode(&Point::new(0.0, 180.0), Precision::SubSquare).unwrap(), "RJ90XA");
    assert_eq!(maidenhead::encode(&Point::new(89.9999995, 0.0), Precision::SubSquare).unwrap(), "JR09AX");
    assert_eq!(
        maidenhead::encode(&Point::new(89.99999999, 179.99999999), Precision::ExtendedSubSquare).unwrap(),
        "RR99XX99xx",
    );
}

#[test]
fn encoded_cell_contains_point_at_grid_edges() {
    let points = [
        (0.0, 180.0),
        (89.9999995, 0.0),
        (89.99999999, 179.99999999),
        (-89.99999999, -180.0),
        (0.0, 179.9999995),
    ];
    let precisions = [
        Precision::Field,
        Precision::Square,
        Precision::SubSquare,
        Precision::ExtendedSquare,
        Precision::ExtendedSubSquare,
    ];

    for (lat, lon) in points {
        for precision in precisions {
            let locator = maidenhead::encode(&Point::new(lat, lon), precision).unwrap();
            let corner = maidenhead::parse(&locator).unwrap();
            let center = maidenhead::parse_centered(&locator).unwrap();
            let lat_cell = 2.0 * (center.latitude() - corner.latitude());
            let lon_cell = 2.0 * (center.longitude() - corner.longitude());

            assert!(
                corner.latitude() - 1e-9 <= lat && lat <= corner.latitude() + lat_cell + 1e-9,
                "({lat}, {lon}) at {precision} encoded as {locator} with corner {corner}",
            );
            assert!(
                corner.longitude() - 1e-9 <= lon && lon <= corner.longitude() + lon_cell + 1e-9,
                "({lat}, {lon}) at {precision} encoded as {locator} with corner {corner}",
            );
        }
    }
}

#[test]
fn precision_from_integer() {
    assert_eq!(Precision::try_from(1).unwrap(), Precision::Field);
    assert_eq!(Precision::try_from(4).unwrap(), Precision::ExtendedSquare);
    assert_eq!(Precision::try_from(5).unwrap(), Precision::ExtendedSubSquare);
    assert_eq!(Precision::try_from(0), Err(Error::InvalidPrecision(0)));
    assert_eq!(Precision::try_from(6), Err(Error::InvalidPrecision(6)));
    assert_eq!(i32::from(Precision::SubSquare), 3);
}
