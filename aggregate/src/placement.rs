//! Hash-based pseudo-geocoding for map display.
//!
//! Location labels are deterministically mapped to 2D canvas points via two
//! independent string hashes (the label, and the label plus a salt suffix).
//! Stable and collision-tolerant without a real coordinate system — strictly
//! a presentation heuristic.

use crate::breakdown::LocationTally;

/// Margin kept clear around the canvas edge, in canvas units.
const EDGE_MARGIN: u32 = 30;
/// Base marker radius.
const BASE_RADIUS: f64 = 8.0;
/// Radius growth per vote.
const RADIUS_PER_VOTE: f64 = 1.5;
/// Marker radius cap.
const MAX_RADIUS: f64 = 35.0;

/// Majority color class for a location marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerLean {
    /// More real than fake votes (green).
    Real,
    /// More fake than real votes (red).
    Fake,
    /// Tied (yellow).
    Split,
}

/// 32-bit string hash over UTF-16 code units (`h = 31*h + unit`, wrapping),
/// absolute value.
fn label_hash(label: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in label.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32);
    }
    h.unsigned_abs()
}

/// Deterministic canvas position for a location label, kept inside an edge
/// margin on both axes.
pub fn map_position(label: &str, width: u32, height: u32) -> (u32, u32) {
    let usable_w = width.saturating_sub(2 * EDGE_MARGIN).max(1);
    let usable_h = height.saturating_sub(2 * EDGE_MARGIN).max(1);
    let x = label_hash(label) % usable_w + EDGE_MARGIN;
    let salted = format!("{label}_s");
    let y = label_hash(&salted) % usable_h + EDGE_MARGIN;
    (x, y)
}

/// Marker radius for a location's vote total, capped.
pub fn marker_radius(total: usize) -> f64 {
    (BASE_RADIUS + total as f64 * RADIUS_PER_VOTE).min(MAX_RADIUS)
}

/// Majority class for a location's tally.
pub fn marker_lean(tally: &LocationTally) -> MarkerLean {
    use std::cmp::Ordering;
    match tally.real.cmp(&tally.fake) {
        Ordering::Greater => MarkerLean::Real,
        Ordering::Less => MarkerLean::Fake,
        Ordering::Equal => MarkerLean::Split,
    }
}
