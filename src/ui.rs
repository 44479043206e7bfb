pub mod app;
pub mod theme;

mod controls;
mod preset_panel;
mod scope_view;

pub use app::run;
