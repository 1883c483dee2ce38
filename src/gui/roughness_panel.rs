/// Roughness selector — vertical slider over the fixed z0 table

use crate::data::profile::ROUGHNESS_TABLE;
use crate::gui::theme::ThemeColors;

/// Actions from the roughness panel
#[derive(Debug, Clone, PartialEq)]
pub enum RoughnessAction {
    None,
    Changed(usize),
}

/// Render the z0 slider and return any index change
pub fn show_roughness_panel(
    ui: &mut egui::Ui,
    roughness_index: usize,
    colors: &ThemeColors,
) -> RoughnessAction {
    let mut action = RoughnessAction::None;
    let mut index = roughness_index;

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("z₀").strong().color(colors.text_primary));
        ui.add_space(4.0);

        // A vertical slider's length comes from slider_width
        ui.spacing_mut().slider_width = (ui.available_height() - 56.0).max(80.0);
        let response = ui
            .add(
                egui::Slider::new(&mut index, 0..=ROUGHNESS_TABLE.len() - 1)
                    .vertical()
                    .step_by(1.0)
                    .custom_formatter(|v, _| {
                        let i = (v as usize).min(ROUGHNESS_TABLE.len() - 1);
                        format!("{}", ROUGHNESS_TABLE[i])
                    }),
            )
            .on_hover_text("Roughness length (m)");
        if response.changed() {
            action = RoughnessAction::Changed(index);
        }

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("roughness (m)")
                .size(11.5)
                .color(colors.text_muted),
        );
    });

    action
}
