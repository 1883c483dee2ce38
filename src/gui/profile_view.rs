/// Wind profile plot — the log-law curve with the draggable datum crosshair

use egui_plot::{Line, Plot, PlotBounds, PlotPoints, PlotUi};

use crate::gui::crosshair::{CrosshairOverlay, PlotFrame};
use crate::gui::theme::ThemeColors;

/// Fixed axis extents, matching the physical range of interest
pub const SPEED_AXIS_MAX_MPS: f64 = 25.0;
pub const HEIGHT_AXIS_MAX_M: f64 = 100.0;

/// Actions from the profile plot
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileViewAction {
    None,
    /// The crosshair was dragged to a new datum (data units)
    DatumChanged { speed: f64, height: f64 },
}

/// Show the profile plot, keep the crosshair overlay in sync with the
/// chart layout, and translate pointer input into datum changes.
///
/// `datum` is the model's current reference point, used for the initial
/// crosshair placement (and re-placement after reset/session load).
pub fn show_profile_plot(
    ui: &mut egui::Ui,
    samples: &[[f64; 2]],
    datum: (f64, f64),
    overlay: &mut CrosshairOverlay,
    colors: &ThemeColors,
) -> ProfileViewAction {
    let mut action = ProfileViewAction::None;

    let curve = Line::new(PlotPoints::from(samples.to_vec()))
        .color(colors.profile_line)
        .width(1.5);

    let plot_resp = Plot::new("wind_profile")
        .height(ui.available_height() - 4.0)
        .x_axis_label("Wind Speed (m/s)")
        .y_axis_label("Height (m)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui: &mut PlotUi| {
            // Axes are fixed; dragging moves the crosshair, not the view
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [0.0, 0.0],
                [SPEED_AXIS_MAX_MPS, HEIGHT_AXIS_MAX_M],
            ));
            plot_ui.line(curve);
        });

    let response = plot_resp
        .response
        .on_hover_text("Click or drag crosshairs to set wind height and speed datum.");

    // Track the chart layout: first lay-out records bounds, later changes
    // are resizes that must keep the crosshair on its data point.
    let frame = PlotFrame::from_transform(&plot_resp.transform);
    if overlay.frame() != Some(&frame) {
        if overlay.is_placed() {
            overlay.resize(frame);
        } else {
            overlay.init_bounds(frame);
        }
    }
    if !overlay.is_placed() {
        overlay.place_datum(datum.0, datum.1);
    }

    // Pointer input: clicks and drags on the plot move the datum
    if response.dragged() || response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - frame.bounds().min;
            overlay.update(local.x, local.y);
            if let Some((speed, height)) = overlay.datum() {
                action = ProfileViewAction::DatumChanged { speed, height };
            }
        }
    }

    // Stroke the crosshair over the plot background
    if let Some(segments) = overlay.segments() {
        let painter = ui.painter().with_clip_rect(frame.bounds());
        let stroke = egui::Stroke::new(1.0, colors.crosshair);
        for segment in segments {
            painter.line_segment(segment, stroke);
        }
    }

    action
}
