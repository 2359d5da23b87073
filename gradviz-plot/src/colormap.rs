use eframe::egui::{Color32, ColorImage};
use gradviz_components::sampler::SurfaceGrid;

/// Viridis control colors, low to high.
const STOPS: [[u8; 3]; 8] = [
    [68, 1, 84],
    [70, 50, 127],
    [54, 92, 141],
    [39, 127, 142],
    [31, 161, 135],
    [74, 194, 109],
    [159, 218, 58],
    [253, 231, 37],
];

/// Samples the colormap at `t` in [0, 1], clamping outside values.
pub(crate) fn sample(t: f32) -> Color32 {
    let scaled = t.clamp(0.0, 1.0) * (STOPS.len() - 1) as f32;
    let index = (scaled as usize).min(STOPS.len() - 2);
    let fraction = scaled - index as f32;

    let lerp = |a: u8, b: u8| {
        let value = f32::from(a) + (f32::from(b) - f32::from(a)) * fraction;
        value.round() as u8
    };

    let low = STOPS[index];
    let high = STOPS[index + 1];
    Color32::from_rgb(
        lerp(low[0], high[0]),
        lerp(low[1], high[1]),
        lerp(low[2], high[2]),
    )
}

/// Colormaps a grid's heights into an image for texture upload.
///
/// Heights are normalized against the grid's own min and max so every
/// function uses the full color range. Image rows run top-down while y runs
/// bottom-up, so rows are flipped.
pub(crate) fn grid_image(grid: &SurfaceGrid) -> ColorImage {
    let n = grid.resolution();
    let (z_min, z_max) = grid.z_bounds();
    let span = z_max - z_min;

    let mut pixels = Vec::with_capacity(n * n);
    for row in 0..n {
        let i = n - 1 - row;
        for j in 0..n {
            let t = if span > 0.0 {
                ((grid.z[[i, j]] - z_min) / span) as f32
            } else {
                0.5
            };
            pixels.push(sample(t));
        }
    }

    ColorImage {
        size: [n, n],
        pixels,
    }
}
