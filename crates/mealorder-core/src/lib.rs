pub mod catalog;
pub mod config;
pub mod draft;
pub mod error;
pub mod format;
pub mod grid;
pub mod handoff;
pub mod io;
pub mod paths;
pub mod session;
pub mod types;

pub use error::{LoadError, MealOrderError, Result, WeekError};
