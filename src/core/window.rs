pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads a raw data extent and widens it to the fixed x:y ratio. Inputs and
/// outputs are physical units; pixel mapping stays with the render layer.
pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// One data window covering every simulation on screen, computed once by the
/// driver from each engine's `(range, hmax)` extent and passed down to render
/// calls.
pub fn shared_axis_window<I>(extents: I) -> (f64, f64)
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (raw_max_x, raw_max_y) = extents
        .into_iter()
        .fold((0.0f64, 0.0f64), |(mx, my), (x, y)| (mx.max(x), my.max(y)));
    fixed_ratio_axis_window(raw_max_x, raw_max_y)
}

#[cfg(test)]
mod tests {
    use super::{DISTANCE_TO_HEIGHT_RATIO, fixed_ratio_axis_window, shared_axis_window};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn window_keeps_fixed_ratio() {
        for (x, y) in [(160.0, 48.0), (10.0, 300.0), (0.0, 0.0)] {
            let (x_span, y_span) = fixed_ratio_axis_window(x, y);
            assert_close(x_span / y_span, DISTANCE_TO_HEIGHT_RATIO, 1e-9);
        }
    }

    #[test]
    fn window_covers_raw_extent() {
        let (x_span, y_span) = fixed_ratio_axis_window(160.0, 48.0);
        assert!(x_span >= 160.0);
        assert!(y_span >= 48.0);
    }

    #[test]
    fn shared_window_covers_the_widest_simulation() {
        // Earth vs Moon: the Moon shot dominates both axes.
        let extents = [(160.8, 47.9), (972.6, 289.8)];
        let shared = shared_axis_window(extents);
        let moon_only = fixed_ratio_axis_window(972.6, 289.8);
        assert_close(shared.0, moon_only.0, 1e-9);
        assert_close(shared.1, moon_only.1, 1e-9);
    }

    #[test]
    fn shared_window_of_nothing_falls_back_to_unit_extent() {
        let (x_span, y_span) = shared_axis_window([]);
        assert!(x_span >= 1.0);
        assert!(y_span >= 1.0);
    }
}
