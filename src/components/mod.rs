//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod background;
mod confirm_dialog;
mod download_dialog;
mod icons;
mod list_state;
mod notifications;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use background::*;
pub use confirm_dialog::*;
pub use download_dialog::*;
pub use icons::*;
pub use list_state::*;
pub use notifications::*;
