/// Crosshair overlay — two perpendicular indicator lines marking the wind
/// datum on the profile plot.
///
/// The overlay works in the chart's pixel space: it records the plot
/// background rectangle and the axis mappings each time the chart lays
/// out, converts pointer positions to data values, and produces the
/// screen-space line segments the view strokes on top of the plot. It
/// never touches the profile model; the app controller forwards datum
/// changes.

use egui::{Pos2, Rect};

/// Linear mapping between data values on one axis and pixel offsets from
/// the plot background's top-left corner. `flipped` marks the vertical
/// axis, where pixel offset 0 is the axis maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    min: f64,
    max: f64,
    length_px: f64,
    flipped: bool,
}

impl AxisScale {
    pub fn new(min: f64, max: f64, length_px: f64, flipped: bool) -> Self {
        Self { min, max, length_px, flipped }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Pixel offset (from the background origin) of a data value
    pub fn display_position_for(&self, value: f64) -> f64 {
        let mut frac = (value - self.min) / (self.max - self.min);
        if self.flipped {
            frac = 1.0 - frac;
        }
        frac * self.length_px
    }

    /// Data value at a pixel offset from the background origin
    pub fn value_at(&self, px: f64) -> f64 {
        let mut frac = px / self.length_px;
        if self.flipped {
            frac = 1.0 - frac;
        }
        self.min + frac * (self.max - self.min)
    }
}

/// Per-layout snapshot of the chart collaborator: the plot background
/// rectangle in screen coordinates plus the two axis mappings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    bounds: Rect,
    x_axis: AxisScale,
    y_axis: AxisScale,
}

impl PlotFrame {
    pub fn new(bounds: Rect, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            bounds,
            x_axis: AxisScale::new(x_range.0, x_range.1, bounds.width() as f64, false),
            y_axis: AxisScale::new(y_range.0, y_range.1, bounds.height() as f64, true),
        }
    }

    /// Capture the current layout of an egui_plot chart
    pub fn from_transform(transform: &egui_plot::PlotTransform) -> Self {
        let bounds = *transform.frame();
        let data = transform.bounds();
        Self::new(
            bounds,
            (data.min()[0], data.max()[0]),
            (data.min()[1], data.max()[1]),
        )
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn x_axis(&self) -> &AxisScale {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &AxisScale {
        &self.y_axis
    }
}

/// The crosshair state machine.
///
/// Created unplaced (datum NaN); the view places it at the model's datum
/// on the first laid-out frame and thereafter it moves only on pointer
/// input or on a layout change.
#[derive(Debug, Clone)]
pub struct CrosshairOverlay {
    /// Datum in data units (speed, height). NaN until first placement.
    speed: f64,
    height: f64,
    /// Last recorded chart layout; None until the chart has laid out once.
    frame: Option<PlotFrame>,
    /// Horizontal line: fixed x endpoints spanning the background, moving y.
    h_line: [Pos2; 2],
    /// Vertical line: fixed y endpoints spanning the background, moving x.
    v_line: [Pos2; 2],
}

impl CrosshairOverlay {
    pub fn new() -> Self {
        Self {
            speed: f64::NAN,
            height: f64::NAN,
            frame: None,
            h_line: [Pos2::ZERO, Pos2::ZERO],
            v_line: [Pos2::ZERO, Pos2::ZERO],
        }
    }

    /// The recorded chart layout, for callers needing axis-mapping services
    pub fn frame(&self) -> Option<&PlotFrame> {
        self.frame.as_ref()
    }

    /// Datum in data units, once placed
    pub fn datum(&self) -> Option<(f64, f64)> {
        if self.is_placed() {
            Some((self.speed, self.height))
        } else {
            None
        }
    }

    pub fn is_placed(&self) -> bool {
        self.speed.is_finite() && self.height.is_finite()
    }

    /// Forget the placement; the view re-places at the model datum on the
    /// next frame (used after reset and session load).
    pub fn reset_placement(&mut self) {
        self.speed = f64::NAN;
        self.height = f64::NAN;
    }

    /// Record the plot background bounds and span the fixed endpoints
    /// across them: the horizontal line over the full width, the vertical
    /// line over the full height. Called when the chart first lays out
    /// and again on every resize.
    pub fn init_bounds(&mut self, frame: PlotFrame) {
        let bounds = frame.bounds();
        self.h_line[0].x = bounds.left();
        self.h_line[1].x = bounds.right();
        self.v_line[0].y = bounds.top();
        self.v_line[1].y = bounds.bottom();
        self.frame = Some(frame);
    }

    /// Re-record bounds after a layout change, then re-derive the moving
    /// endpoints from the datum so the intersection keeps marking the same
    /// data point.
    pub fn resize(&mut self, frame: PlotFrame) {
        self.init_bounds(frame);
        if !self.is_placed() {
            return;
        }
        let bounds = frame.bounds();
        let disp_x = bounds.left() + frame.x_axis().display_position_for(self.speed) as f32;
        self.v_line[0].x = disp_x;
        self.v_line[1].x = disp_x;
        let disp_y = bounds.top() + frame.y_axis().display_position_for(self.height) as f32;
        self.h_line[0].y = disp_y;
        self.h_line[1].y = disp_y;
    }

    /// Move the crosshair to a pointer position given in pixels relative
    /// to the plot background origin. Stores the equivalent data values
    /// and repositions the moving endpoints. Does not recompute the
    /// profile — that is the caller's job.
    ///
    /// Inert until `init_bounds` has recorded a layout.
    pub fn update(&mut self, px: f32, py: f32) {
        let Some(frame) = self.frame else {
            return;
        };
        self.speed = frame.x_axis().value_at(px as f64);
        self.height = frame.y_axis().value_at(py as f64);
        let bounds = frame.bounds();
        let x = bounds.left() + px;
        self.v_line[0].x = x;
        self.v_line[1].x = x;
        let y = bounds.top() + py;
        self.h_line[0].y = y;
        self.h_line[1].y = y;
    }

    /// Place the crosshair at a data-space datum (startup and reset path):
    /// the datum's display position is fed through the same pixel-space
    /// update the pointer uses.
    pub fn place_datum(&mut self, speed: f64, height: f64) {
        let Some(frame) = self.frame else {
            return;
        };
        let px = frame.x_axis().display_position_for(speed) as f32;
        let py = frame.y_axis().display_position_for(height) as f32;
        self.update(px, py);
    }

    /// The two line segments to stroke, once the overlay is placed
    pub fn segments(&self) -> Option<[[Pos2; 2]; 2]> {
        if self.frame.is_some() && self.is_placed() {
            Some([self.h_line, self.v_line])
        } else {
            None
        }
    }
}

impl Default for CrosshairOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn test_frame() -> PlotFrame {
        // 500x400 px background at (40, 20), speed 0..25, height 0..100
        PlotFrame::new(
            Rect::from_min_max(pos2(40.0, 20.0), pos2(540.0, 420.0)),
            (0.0, 25.0),
            (0.0, 100.0),
        )
    }

    #[test]
    fn axis_mapping_round_trips() {
        let frame = test_frame();
        for value in [0.0, 5.0, 12.5, 25.0] {
            let px = frame.x_axis().display_position_for(value);
            assert!((frame.x_axis().value_at(px) - value).abs() < 1e-9);
        }
        for value in [0.0, 30.0, 100.0] {
            let py = frame.y_axis().display_position_for(value);
            assert!((frame.y_axis().value_at(py) - value).abs() < 1e-9);
        }
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let frame = test_frame();
        assert_eq!(frame.y_axis().display_position_for(100.0), 0.0);
        assert_eq!(frame.y_axis().display_position_for(0.0), 400.0);
    }

    #[test]
    fn background_corner_maps_to_axis_extremes() {
        // Dragging to the background's top-left corner lands on the speed
        // axis minimum and the height axis maximum (screen y grows down).
        let mut overlay = CrosshairOverlay::new();
        overlay.init_bounds(test_frame());
        overlay.update(0.0, 0.0);
        let (speed, height) = overlay.datum().expect("placed by update");
        assert!((speed - 0.0).abs() < 1e-9);
        assert!((height - 100.0).abs() < 1e-9);
    }

    #[test]
    fn init_bounds_spans_background() {
        let mut overlay = CrosshairOverlay::new();
        overlay.init_bounds(test_frame());
        overlay.update(100.0, 100.0);
        let [h_line, v_line] = overlay.segments().unwrap();
        assert_eq!(h_line[0].x, 40.0);
        assert_eq!(h_line[1].x, 540.0);
        assert_eq!(v_line[0].y, 20.0);
        assert_eq!(v_line[1].y, 420.0);
    }

    #[test]
    fn update_positions_lines_at_origin_offset() {
        let mut overlay = CrosshairOverlay::new();
        overlay.init_bounds(test_frame());
        overlay.update(120.0, 80.0);
        let [h_line, v_line] = overlay.segments().unwrap();
        assert_eq!(v_line[0].x, 160.0);
        assert_eq!(v_line[1].x, 160.0);
        assert_eq!(h_line[0].y, 100.0);
        assert_eq!(h_line[1].y, 100.0);
    }

    #[test]
    fn noop_resize_keeps_the_intersection_pixel() {
        let mut overlay = CrosshairOverlay::new();
        overlay.init_bounds(test_frame());
        overlay.update(120.0, 80.0);
        let before = overlay.segments().unwrap();
        overlay.resize(test_frame());
        let after = overlay.segments().unwrap();
        for (b, a) in before.iter().flatten().zip(after.iter().flatten()) {
            assert!((b.x - a.x).abs() < 1e-3, "{:?} vs {:?}", b, a);
            assert!((b.y - a.y).abs() < 1e-3, "{:?} vs {:?}", b, a);
        }
    }

    #[test]
    fn resize_tracks_the_data_point() {
        let mut overlay = CrosshairOverlay::new();
        overlay.init_bounds(test_frame());
        overlay.update(120.0, 80.0);
        let (speed, height) = overlay.datum().unwrap();

        // Double the background size; the datum must not change and the
        // lines must land on its new display position.
        let grown = PlotFrame::new(
            Rect::from_min_max(pos2(40.0, 20.0), pos2(1040.0, 820.0)),
            (0.0, 25.0),
            (0.0, 100.0),
        );
        overlay.resize(grown);
        assert_eq!(overlay.datum(), Some((speed, height)));

        let [h_line, v_line] = overlay.segments().unwrap();
        let expected_x = 40.0 + grown.x_axis().display_position_for(speed) as f32;
        let expected_y = 20.0 + grown.y_axis().display_position_for(height) as f32;
        assert!((v_line[0].x - expected_x).abs() < 1e-3);
        assert!((h_line[0].y - expected_y).abs() < 1e-3);
    }

    #[test]
    fn place_datum_matches_axis_display_position() {
        let mut overlay = CrosshairOverlay::new();
        let frame = test_frame();
        overlay.init_bounds(frame);
        overlay.place_datum(5.0, 3.0);

        let (speed, height) = overlay.datum().unwrap();
        assert!((speed - 5.0).abs() < 1e-4);
        assert!((height - 3.0).abs() < 1e-4);

        let [h_line, v_line] = overlay.segments().unwrap();
        let expected_x = 40.0 + frame.x_axis().display_position_for(5.0) as f32;
        let expected_y = 20.0 + frame.y_axis().display_position_for(3.0) as f32;
        assert!((v_line[0].x - expected_x).abs() < 1e-3);
        assert!((h_line[0].y - expected_y).abs() < 1e-3);
    }

    #[test]
    fn update_before_init_bounds_is_inert() {
        let mut overlay = CrosshairOverlay::new();
        overlay.update(50.0, 50.0);
        assert!(!overlay.is_placed());
        assert!(overlay.segments().is_none());
    }
}
