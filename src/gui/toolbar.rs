/// Toolbar — top menu bar with session operations and quick actions

use std::path::PathBuf;

/// Actions that can be triggered from the toolbar
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    None,
    SaveSession,
    LoadSession,
    ExportCsv,
    ResetDatum,
    ThemeToggle,
    ShowAbout,
}

/// Render the toolbar and return any triggered action
pub fn show_toolbar(ctx: &egui::Context, theme_label: &str) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("📁 File", |ui| {
                if ui.button("💾 Save Session…").clicked() {
                    action = ToolbarAction::SaveSession;
                    ui.close_menu();
                }
                if ui.button("📂 Load Session…").clicked() {
                    action = ToolbarAction::LoadSession;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("📋 Export Profile CSV…").clicked() {
                    action = ToolbarAction::ExportCsv;
                    ui.close_menu();
                }
            });

            // Edit menu
            ui.menu_button("✏ Edit", |ui| {
                if ui.button("⟲ Reset Datum").clicked() {
                    action = ToolbarAction::ResetDatum;
                    ui.close_menu();
                }
            });

            // View menu
            ui.menu_button("🔍 View", |ui| {
                if ui.button(format!("🎨 Theme: {}", theme_label)).clicked() {
                    action = ToolbarAction::ThemeToggle;
                    ui.close_menu();
                }
            });

            // Help menu
            ui.menu_button("❓ Help", |ui| {
                if ui.button("ℹ About").clicked() {
                    action = ToolbarAction::ShowAbout;
                    ui.close_menu();
                }
            });

            // Spacer + quick theme toggle
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(egui::RichText::new(theme_label).size(12.0))
                            .corner_radius(12.0),
                    )
                    .clicked()
                {
                    action = ToolbarAction::ThemeToggle;
                }
                ui.separator();
                ui.label(
                    egui::RichText::new("Wind Shear (Log Law)")
                        .color(egui::Color32::from_rgb(0x70, 0x75, 0x80))
                        .size(12.0),
                );
            });
        });
    });

    action
}

/// Save dialog for the session JSON
pub fn save_session_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save Wind Shear Session")
        .add_filter("JSON", &["json"])
        .save_file()
}

/// Open dialog for a previously saved session
pub fn load_session_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Load Wind Shear Session")
        .add_filter("JSON", &["json"])
        .pick_file()
}

/// Save dialog for the profile sample export
pub fn export_csv_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export Profile Samples")
        .add_filter("CSV (comma-separated)", &["csv"])
        .add_filter("Text File", &["txt"])
        .save_file()
}
