pub mod header;
pub mod loader;
pub mod results_panel;
pub mod settings_panel;
pub mod status_icon;
pub mod upload_area;
