// ABOUTME: Integration tests for the size recommendation engine
// ABOUTME: Covers validation, envelope, tolerant matching, boundary advice, and pants asymmetry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lamode_core::{
    ChartError, Garment, Measurements, SizeChart, SizeEngine, SizeResult, SizingConfig,
};

fn engine() -> SizeEngine {
    SizeEngine::new()
}

// === Validation ===

#[test]
fn missing_fields_are_input_errors() {
    let e = engine();
    let blank = Measurements::default();
    assert!(matches!(
        e.recommend(&blank, Garment::Shirt),
        SizeResult::InvalidInput { .. }
    ));

    let no_waist = Measurements::new(169.0, 66.5);
    let result = e.recommend(&no_waist, Garment::Pants);
    match result {
        SizeResult::InvalidInput { message } => assert!(message.contains("Waist")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    // The same measurements are fine for a shirt, where waist is unused.
    assert!(matches!(
        e.recommend(&no_waist, Garment::Shirt),
        SizeResult::Success { .. }
    ));
}

#[test]
fn implausible_measurements_are_input_errors() {
    let e = engine();
    for m in [
        Measurements::new(400.0, 58.0),
        Measurements::new(119.9, 58.0),
        Measurements::new(162.0, 29.0),
        Measurements::new(162.0, 301.0),
        Measurements::with_waist(162.0, 58.0, 49.0),
    ] {
        let garment = if m.waist_cm.is_some() {
            Garment::Pants
        } else {
            Garment::Shirt
        };
        assert!(
            matches!(e.recommend(&m, garment), SizeResult::InvalidInput { .. }),
            "accepted {m:?}"
        );
    }
}

#[test]
fn non_numeric_form_input_is_an_input_error() {
    let e = engine();
    let m = Measurements::from_form_input("tall", "58", None);
    match e.recommend(&m, Garment::Shirt) {
        SizeResult::InvalidInput { message } => assert!(message.contains("Height")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn form_input_parses_with_surrounding_whitespace() {
    let m = Measurements::from_form_input(" 162 ", "58.5", Some(" 70 "));
    assert_eq!(m.height_cm, Some(162.0));
    assert_eq!(m.weight_kg, Some(58.5));
    assert_eq!(m.waist_cm, Some(70.0));
}

// === Envelope ===

#[test]
fn valid_but_far_outside_chart_is_out_of_range() {
    // 230 cm is a plausible height but well past the tallest chart row.
    let result = engine().recommend(&Measurements::new(230.0, 90.0), Garment::Shirt);
    match result {
        SizeResult::OutOfRange { message } => assert!(message.contains("height")),
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn envelope_padding_admits_near_misses() {
    // Chart heights stop at 188; 190 is within the 2 cm padding, so the
    // tolerant matching pass still gets a chance.
    let result = engine().recommend(&Measurements::new(190.0, 90.0), Garment::Shirt);
    assert!(
        !matches!(result, SizeResult::OutOfRange { .. }),
        "padding not applied: {result:?}"
    );
}

#[test]
fn pants_envelope_checks_waist_not_weight() {
    // Weight far beyond any chart row, waist and height central: the pants
    // flow never envelopes on weight.
    let m = Measurements::with_waist(170.0, 200.0, 75.0);
    let result = engine().recommend(&m, Garment::Pants);
    assert!(
        !matches!(result, SizeResult::OutOfRange { .. }),
        "weight gated the pants envelope: {result:?}"
    );
}

// === Matching ===

#[test]
fn central_shirt_measurements_match_m() {
    let result = engine().recommend(&Measurements::new(162.0, 58.0), Garment::Shirt);
    assert_eq!(
        result,
        SizeResult::Success {
            size: "M".to_owned()
        }
    );
}

#[test]
fn each_row_center_matches_its_own_size() {
    let e = engine();
    for (height, weight, size) in [
        (153.0, 50.0, "S"),
        (162.0, 58.0, "M"),
        (169.0, 66.5, "L"),
        (176.5, 75.5, "XL"),
        (184.5, 88.0, "2XL"),
    ] {
        let result = e.recommend(&Measurements::new(height, weight), Garment::Shirt);
        assert_eq!(result.size(), Some(size), "wrong size for {height}/{weight}");
    }
}

#[test]
fn just_below_a_row_boundary_warns_and_names_the_floor() {
    // 159/54 misses every row exactly but lands on S under tolerance, two
    // units from S's height ceiling.
    let result = engine().recommend(&Measurements::new(159.0, 54.0), Garment::Shirt);
    match result {
        SizeResult::BoundaryWarning {
            size,
            suggested,
            message,
        } => {
            assert!(size == "S" || size == "M", "unexpected floor {size}");
            assert_eq!(suggested.as_deref(), Some("M"));
            assert!(message.contains("sizing up"));
        }
        other => panic!("expected BoundaryWarning, got {other:?}"),
    }
}

#[test]
fn boundary_at_largest_size_has_no_suggestion() {
    // Right at the 2XL ceiling: still a warning, nothing larger to offer.
    let result = engine().recommend(&Measurements::new(188.0, 94.0), Garment::Shirt);
    match result {
        SizeResult::BoundaryWarning {
            size, suggested, ..
        } => {
            assert_eq!(size, "2XL");
            assert_eq!(suggested, None);
        }
        other => panic!("expected BoundaryWarning, got {other:?}"),
    }
}

#[test]
fn gap_between_tolerant_rows_is_no_match() {
    // Height fits M but the weight belongs three rows up: no row satisfies
    // both predicates even with tolerance, yet both stay inside the
    // envelope.
    let result = engine().recommend(&Measurements::new(160.0, 80.0), Garment::Shirt);
    assert!(
        matches!(result, SizeResult::NoMatch { .. }),
        "expected NoMatch, got {result:?}"
    );
}

#[test]
fn pants_match_keys_on_waist_and_height() {
    let m = Measurements::with_waist(162.0, 58.0, 70.0);
    let result = engine().recommend(&m, Garment::Pants);
    assert_eq!(result.size(), Some("M"));
}

#[test]
fn pants_match_ignores_weight() {
    // Kept as shipped: weight sits in the chart rows but does not gate the
    // pants match. 90 kg is nowhere near M's 55-62 row, yet waist and
    // height pin M regardless.
    let m = Measurements::with_waist(162.0, 90.0, 70.0);
    let result = engine().recommend(&m, Garment::Pants);
    assert_eq!(result.size(), Some("M"));
}

// === Results as data ===

#[test]
fn results_serialize_with_status_tag() {
    let success = engine().recommend(&Measurements::new(162.0, 58.0), Garment::Shirt);
    let json = serde_json::to_value(&success).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["size"], "M");

    let invalid = engine().recommend(&Measurements::default(), Garment::Shirt);
    let json = serde_json::to_value(&invalid).unwrap();
    assert_eq!(json["status"], "invalid_input");
    assert!(json["message"].is_string());
}

// === Configuration substitution ===

#[test]
fn zero_tolerance_config_disables_the_tolerant_pass() {
    let config = SizingConfig {
        fit_tolerance: 0.0,
        boundary_margin: 0.0,
        ..SizingConfig::default()
    };
    let e = SizeEngine::with_config(config);
    // 159/54 relied on tolerance to land on S.
    let result = e.recommend(&Measurements::new(159.0, 54.0), Garment::Shirt);
    assert!(
        matches!(result, SizeResult::NoMatch { .. }),
        "tolerant pass still ran: {result:?}"
    );
}

#[test]
fn alternate_charts_can_be_substituted() {
    let shirt = SizeChart::from_json_str(
        r#"{
            "garment": "shirt",
            "rows": [
                {"size": "ONE", "height_cm": {"min": 100.0, "max": 250.0},
                 "weight_kg": {"min": 30.0, "max": 300.0}}
            ]
        }"#,
    )
    .unwrap();
    let e = SizeEngine::with_charts(SizingConfig::default(), shirt, SizeChart::default_pants())
        .unwrap();
    let result = e.recommend(&Measurements::new(200.0, 150.0), Garment::Shirt);
    assert_eq!(result.size(), Some("ONE"));
}

#[test]
fn charts_in_the_wrong_slot_are_rejected() {
    let result = SizeEngine::with_charts(
        SizingConfig::default(),
        SizeChart::default_pants(),
        SizeChart::default_pants(),
    );
    assert!(matches!(result, Err(ChartError::GarmentMismatch { .. })));
}
