/// Main application state and eframe::App implementation
///
/// Ties together the profile model, the crosshair overlay, and the GUI:
/// overlay movement → model update → recompute → chart refresh happens
/// here and nowhere else.

use std::path::Path;

use eframe::egui;
use thiserror::Error;

use crate::data::profile::{ProfileModel, ProfileParameters};
use crate::gui::crosshair::CrosshairOverlay;
use crate::gui::profile_view::{self, ProfileViewAction};
use crate::gui::roughness_panel::{self, RoughnessAction};
use crate::gui::theme::{self, AppTheme, ThemeColors};
use crate::gui::toolbar::{self, ToolbarAction};

/// Errors from session save/load and profile export
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable session state for save/load
#[derive(serde::Serialize, serde::Deserialize)]
struct SessionSave {
    params: ProfileParameters,
    theme: AppTheme,
}

/// The main application
pub struct WindShearApp {
    /// Physical parameters + derived profile samples
    model: ProfileModel,
    /// Crosshair overlay on the profile plot
    overlay: CrosshairOverlay,

    /// Status messages
    status_message: String,
    show_about: bool,

    /// Current theme
    current_theme: AppTheme,
    theme_colors: ThemeColors,
}

impl WindShearApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // ── Apply default theme ──
        let default_theme = AppTheme::Light;
        theme::apply_theme(&cc.egui_ctx, default_theme);
        let theme_colors = ThemeColors::from_theme(default_theme);

        // ── Typography: scale for monitor DPI ──
        let ppi = cc.egui_ctx.pixels_per_point();
        let base_size = if ppi > 1.5 { 14.0 } else { 13.0 };
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(base_size, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(base_size, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(base_size * 1.25, egui::FontFamily::Proportional),
        );
        style.spacing.item_spacing = egui::vec2(8.0, 5.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        cc.egui_ctx.set_style(style);

        let model = ProfileModel::default();
        log::info!(
            "Initial datum: {:.1} m/s @ {:.1} m, z0 = {} m",
            model.params().reference_speed,
            model.params().reference_height,
            model.params().roughness_length()
        );

        Self {
            model,
            overlay: CrosshairOverlay::new(),
            status_message: "Drag the crosshair to set the wind datum".to_string(),
            show_about: false,
            current_theme: default_theme,
            theme_colors,
        }
    }

    /// Restore the startup parameters and re-place the crosshair
    fn reset_datum(&mut self) {
        self.model.set_parameters(ProfileParameters::default());
        self.overlay.reset_placement();
        self.status_message = "Datum reset".to_string();
    }

    /// Save the current session (parameters + theme) to a JSON file
    fn save_session(&self, path: &Path) -> Result<(), SessionError> {
        let save = SessionSave {
            params: self.model.params(),
            theme: self.current_theme,
        };
        let json = serde_json::to_string_pretty(&save)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a session from a JSON file
    fn load_session(&mut self, path: &Path) -> Result<(), SessionError> {
        let json = std::fs::read_to_string(path)?;
        let save: SessionSave = serde_json::from_str(&json)?;

        self.model.set_parameters(save.params);
        self.overlay.reset_placement();
        self.current_theme = save.theme;
        self.theme_colors = ThemeColors::from_theme(save.theme);
        Ok(())
    }

    /// Write the current 101 profile samples as CSV
    fn export_profile_csv(&self, path: &Path) -> Result<(), SessionError> {
        let mut out = String::from("height_m,speed_mps\n");
        for sample in self.model.samples() {
            out.push_str(&format!("{},{:.6}\n", sample[1], sample[0]));
        }
        std::fs::write(path, out)?;
        Ok(())
    }

    fn handle_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::SaveSession => {
                if let Some(path) = toolbar::save_session_dialog() {
                    match self.save_session(&path) {
                        Ok(_) => {
                            self.status_message = format!("Session saved: {}", path.display());
                            log::info!("Session saved to {}", path.display());
                        }
                        Err(e) => {
                            self.status_message = format!("Save failed: {}", e);
                            log::error!("Session save failed: {}", e);
                        }
                    }
                }
            }
            ToolbarAction::LoadSession => {
                if let Some(path) = toolbar::load_session_dialog() {
                    match self.load_session(&path) {
                        Ok(_) => {
                            self.status_message = format!("Session loaded: {}", path.display());
                            log::info!("Session loaded from {}", path.display());
                        }
                        Err(e) => {
                            self.status_message = format!("Load failed: {}", e);
                            log::error!("Session load failed: {}", e);
                        }
                    }
                }
            }
            ToolbarAction::ExportCsv => {
                if let Some(path) = toolbar::export_csv_dialog() {
                    match self.export_profile_csv(&path) {
                        Ok(_) => {
                            self.status_message = format!("Profile exported: {}", path.display());
                        }
                        Err(e) => {
                            self.status_message = format!("Export failed: {}", e);
                            log::error!("CSV export failed: {}", e);
                        }
                    }
                }
            }
            ToolbarAction::ResetDatum => self.reset_datum(),
            ToolbarAction::ThemeToggle => {
                self.current_theme = self.current_theme.next();
                self.theme_colors = ThemeColors::from_theme(self.current_theme);
            }
            ToolbarAction::ShowAbout => self.show_about = true,
            ToolbarAction::None => {}
        }
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_about;
        egui::Window::new("About")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Wind Shear (Log Law)");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(6.0);
                ui.label(
                    "Illustrates log-law wind shear in the Earth's boundary layer. \
                     Drag the crosshair to set the wind datum; pick a terrain \
                     roughness length with the z₀ slider.",
                );
            });
        self.show_about = open;
    }
}

impl eframe::App for WindShearApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Re-apply theme each frame (ensures toggle takes effect) ──
        theme::apply_theme(ctx, self.current_theme);

        // ── Toolbar ──
        let toolbar_action = toolbar::show_toolbar(ctx, self.current_theme.label());
        if toolbar_action != ToolbarAction::None {
            self.handle_toolbar_action(toolbar_action);
        }

        // ── Status Bar ──
        let params = self.model.params();
        let tc = &self.theme_colors;
        let sb_bg = tc.status_bar_bg;
        let sb_text = tc.status_text;
        let sb_muted = tc.text_muted;
        let sb_datum = tc.datum_readout;
        let sb_warning = tc.warning;
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::new()
                    .fill(sb_bg)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "v₀ = {:.2} m/s @ h₀ = {:.1} m",
                            params.reference_speed, params.reference_height
                        ))
                        .size(11.5)
                        .color(sb_datum),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("z₀ = {} m", params.roughness_length()))
                            .size(11.5)
                            .color(sb_text),
                    );
                    if params.reference_height <= params.roughness_length() {
                        ui.separator();
                        ui.colored_label(
                            sb_warning,
                            egui::RichText::new("⚠ datum at or below z₀ — curve undefined")
                                .size(11.0),
                        );
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.status_message)
                                .size(11.0)
                                .color(sb_muted),
                        );
                    });
                });
            });

        // ── Roughness slider ──
        let rough_colors = self.theme_colors.clone();
        let mut rough_action = RoughnessAction::None;
        egui::SidePanel::right("roughness_panel")
            .resizable(false)
            .default_width(64.0)
            .show(ctx, |ui| {
                rough_action =
                    roughness_panel::show_roughness_panel(ui, params.roughness_index, &rough_colors);
            });
        if let RoughnessAction::Changed(index) = rough_action {
            self.model.set_roughness_index(index);
        }

        // ── Profile plot with crosshair ──
        let view_colors = self.theme_colors.clone();
        let datum = (params.reference_speed, params.reference_height);
        let mut view_action = ProfileViewAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            view_action = profile_view::show_profile_plot(
                ui,
                self.model.samples(),
                datum,
                &mut self.overlay,
                &view_colors,
            );
        });
        if let ProfileViewAction::DatumChanged { speed, height } = view_action {
            self.model.set_reference_datum(speed, height);
            self.status_message = format!("Datum: {:.2} m/s @ {:.1} m", speed, height);
        }

        // ── About ──
        if self.show_about {
            self.show_about_window(ctx);
        }
    }
}
