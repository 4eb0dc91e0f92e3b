//! Garage Scenario Tests
//!
//! End-to-end runs of small scripts through the parser, driver and garage.
//!
//! These tests verify:
//! - The literal outcome lines for every garage outcome
//! - Final inventory contents and order
//! - Order restoration after middle, bottom and failed departures

use carpark::{Car, Garage, MAX_SIZE, ParseOptions, apply, final_listing, parse_str};

/// Run `script` against a fresh garage and return the garage plus everything
/// written (outcome lines followed by the inventory).
fn simulate(script: &str) -> (Garage, String) {
    let commands = parse_str(script, ParseOptions::default());
    let mut garage = Garage::new();
    let mut out = Vec::new();
    apply(&commands, &mut garage, &mut out).expect("vec sink");
    final_listing(&garage, &mut out).expect("vec sink");
    (garage, String::from_utf8(out).expect("utf8 output"))
}

fn plates(garage: &Garage) -> Vec<&str> {
    garage.snapshot().iter().map(Car::plate).collect()
}

fn pop_plate(garage: &mut Garage) -> Option<String> {
    garage.pop().map(|car| car.plate().to_string())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_empty_departure() {
    let (garage, out) = simulate("D XX99-99\n");
    assert!(garage.is_empty());
    assert_eq!(
        out,
        "Departure XX99-99 -> Garage is empty.\n\nCars currently in garage:\nNone.\n"
    );
}

#[test]
fn test_fill_to_capacity_then_overflow() {
    let mut script: String = (0..MAX_SIZE).map(|i| format!("A CAR{}\n", i)).collect();
    script.push_str("A OVER\n");

    let (garage, out) = simulate(&script);
    assert_eq!(garage.len(), MAX_SIZE);
    assert!(out.contains("Arrival OVER -> Garage full, this car cannot enter.\n"));
    assert!(!out.contains(" - OVER"));
    assert_eq!(out.matches("There is room.").count(), MAX_SIZE);
}

#[test]
fn test_middle_departure() {
    let (garage, out) = simulate("A AA11-11\nA BB22-22\nA CC33-33\nD BB22-22\n");
    assert!(out.contains("Departure BB22-22 -> 1 cars moved out.\n"));
    assert_eq!(plates(&garage), ["AA11-11", "CC33-33"]);
    assert!(out.ends_with("Cars currently in garage:\n - AA11-11\n - CC33-33\n"));
}

#[test]
fn test_bottom_departure() {
    let (garage, out) = simulate("A AA\nA BB\nA CC\nD AA\n");
    assert!(out.contains("Departure AA -> 2 cars moved out.\n"));
    assert_eq!(plates(&garage), ["BB", "CC"]);
}

#[test]
fn test_top_departure_moves_zero() {
    let (garage, out) = simulate("A AA11-11\nA BB22-22\nA CC33-33\nD CC33-33\n");
    assert!(out.contains("Departure CC33-33 -> 0 cars moved out.\n"));
    assert_eq!(garage.peek().map(Car::plate), Some("BB22-22"));
}

#[test]
fn test_failed_departure_preserves_order() {
    let (mut garage, out) = simulate("A FIRST\nA SECOND\nA THIRD\nD NOTHERE\n");
    assert!(out.contains("Departure NOTHERE -> This car not in the garage.\n"));
    assert_eq!(garage.displaced(), 0);
    assert_eq!(pop_plate(&mut garage).as_deref(), Some("THIRD"));
    assert_eq!(pop_plate(&mut garage).as_deref(), Some("SECOND"));
    assert_eq!(pop_plate(&mut garage).as_deref(), Some("FIRST"));
}

#[test]
fn test_duplicates() {
    let (garage, _) = simulate("A DUP\nA DUP\nA OTHER\n");
    assert_eq!(garage.len(), 3);

    let (garage, out) = simulate("A DUP\nA DUP\nA OTHER\nD DUP\n");
    assert_eq!(garage.len(), 2);
    assert!(out.contains("Departure DUP -> 1 cars moved out.\n"));
    assert_eq!(plates(&garage), ["DUP", "OTHER"]);
}

#[test]
fn test_case_insensitive_actions() {
    let (garage, out) = simulate("a CAR1\nA CAR2\nd CAR1\n");
    assert_eq!(garage.len(), 1);
    assert_eq!(plates(&garage), ["CAR2"]);
    assert!(out.contains("Departure CAR1 -> 1 cars moved out.\n"));
}

// =============================================================================
// Mixed scripts
// =============================================================================

#[test]
fn test_departure_then_arrival_refills_full_garage() {
    let mut script: String = (0..MAX_SIZE).map(|i| format!("A CAR{}\n", i)).collect();
    script.push_str("D CAR5\nA NEWCAR\n");

    let (garage, out) = simulate(&script);
    assert!(out.contains("Departure CAR5 -> 4 cars moved out.\n"));
    assert!(out.contains("Arrival NEWCAR -> There is room.\n"));
    assert_eq!(garage.len(), MAX_SIZE);
    assert!(garage.contains("NEWCAR"));
    assert!(!garage.contains("CAR5"));
}

#[test]
fn test_malformed_and_unknown_lines_are_silent() {
    let (garage, out) = simulate("hello\n\nA  SPACED\nQ CAR1\nA CAR2\n");
    assert_eq!(plates(&garage), ["CAR2"]);
    assert_eq!(
        out,
        "Arrival CAR2 -> There is room.\n\nCars currently in garage:\n - CAR2\n"
    );
}

#[test]
fn test_reset_allows_reuse() {
    let (mut garage, _) = simulate("A CAR1\nA CAR2\n");
    garage.reset();
    assert!(garage.is_empty());
    assert_eq!(garage.displaced(), 0);

    let mut out = Vec::new();
    apply(
        &parse_str("A CAR3\n", ParseOptions::default()),
        &mut garage,
        &mut out,
    )
    .expect("vec sink");
    assert_eq!(plates(&garage), ["CAR3"]);
}
