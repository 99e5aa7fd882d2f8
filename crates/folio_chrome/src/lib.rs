pub mod setup;
pub mod theme;
pub mod ui;

mod app;

pub use app::FolioApp;
