// Host-side tests for drawing constants and their relation to the globe defaults.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use globe_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizes_are_positive() {
    assert!(ITEM_RADIUS_PX > 0.0);
    assert!(ITEM_RING_PX > 0.0 && ITEM_RING_PX < ITEM_RADIUS_PX);
    assert!(STEM_LENGTH_PX > 0.0);
    assert!(LABEL_WIDTH_PX > 0.0 && LABEL_HEIGHT_PX > 0.0);
    assert!(TAP_SLOP_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fades_stay_visible() {
    assert!(BACK_DIM > 0.0 && BACK_DIM <= 1.0);
    assert!(RING_ALPHA > 0.0 && RING_ALPHA <= 1.0);
    // dimmed back items must not vanish entirely
    assert!(core::DEFAULT_MIN_ALPHA * BACK_DIM > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rings_sit_inside_the_item_sphere() {
    for r in RING_RADII_PX {
        assert!(r < core::DEFAULT_RADIUS);
    }
    assert!(HOVER_SCALE > 1.0);
}
