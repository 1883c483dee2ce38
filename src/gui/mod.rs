pub mod crosshair;
pub mod profile_view;
pub mod roughness_panel;
pub mod theme;
pub mod toolbar;
