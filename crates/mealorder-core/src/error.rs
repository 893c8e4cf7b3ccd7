use crate::types::MealType;
use thiserror::Error;

/// Rejections from week selection. The session is left untouched when one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeekError {
    #[error("week {0} is out of range: must be between 1 and 48")]
    OutOfRange(u32),

    #[error("week {0} is not available in the menu catalog")]
    Unavailable(u32),

    #[error("week {0} is already selected for the other week slot")]
    DuplicateWeek(u32),
}

/// Failures reading a menu catalog. Callers usually degrade to an
/// unconstrained catalog instead of surfacing these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog file not found: {0}")]
    NotFound(String),

    #[error("invalid week key '{0}': expected a week number")]
    InvalidWeekKey(String),

    #[error("catalog week {0} is out of range: must be between 1 and 48")]
    WeekOutOfRange(u32),

    #[error("catalog week {0} has a negative price")]
    NegativePrice(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MealOrderError {
    #[error("not initialized: run 'mealorder init'")]
    NotInitialized,

    #[error("order file not found: {0}")]
    OrderNotFound(String),

    #[error("invalid meal type: {0}")]
    InvalidMealType(String),

    #[error("invalid day: {0}")]
    InvalidDay(String),

    #[error("invalid week slot: {0}")]
    InvalidSlot(String),

    #[error("{meal} is not on the menu for week {week}")]
    MealNotOffered { week: u32, meal: MealType },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("cannot hand off message: no application accepted the link")]
    HandOffUnavailable,

    #[error(transparent)]
    Week(#[from] WeekError),

    #[error(transparent)]
    Catalog(#[from] LoadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MealOrderError>;
