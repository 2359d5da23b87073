//! Shared helpers for the integration tests.

use gradviz_components::surface::Point2D;

/// Every point the UI sliders can produce: [-2, 2] per axis in 0.1 steps.
#[must_use]
pub fn slider_points() -> Vec<Point2D> {
    let coords: Vec<f64> = (-20..=20).map(|tick| f64::from(tick) / 10.0).collect();

    coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| Point2D::new(x, y)))
        .collect()
}
