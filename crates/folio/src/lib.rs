pub mod args;
pub mod calendar;
pub mod content;
pub mod date;
mod error;
mod greeting;
pub mod i18n;
mod options;
mod persist;
mod result;
pub mod route;
mod state;
pub mod storage;
mod theme;
pub mod tooltip;
pub mod validate;
pub mod views;
pub mod visibility;

pub use args::Args;
pub use calendar::{CalendarCell, CalendarView, YearMonth};
pub use content::Catalog;
pub use error::{ContentError, Error};
pub use greeting::Greeting;
pub use i18n::{FluentArgs, FluentValue, Language, LanguageIdentifier, Localization};
pub use options::FolioOptions;
pub use persist::*;
pub use result::Result;
pub use route::{Route, Section};
pub use state::{Action, AppState, DayDetails, Effect};
pub use storage::{DataPath, DataPathType, Directory};
pub use theme::Theme;
