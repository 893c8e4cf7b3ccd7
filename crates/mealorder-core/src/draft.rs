use crate::catalog::Catalog;
use crate::error::{MealOrderError, Result, WeekError};
use crate::session::OrderSession;
use crate::types::{DayName, MealType, Slot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub type DayQuantities = BTreeMap<DayName, BTreeMap<MealType, u32>>;

/// An order written down as a document, replayed through [`OrderSession`]
/// so every week rule applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_a: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_b: Option<u32>,
    #[serde(default)]
    pub biweekly: bool,
    #[serde(default)]
    pub week_a_meals: DayQuantities,
    #[serde(default)]
    pub week_b_meals: DayQuantities,
}

impl OrderDraft {
    pub fn template(week_a: u32, week_b: u32) -> Self {
        Self {
            week_a: Some(week_a),
            week_b: Some(week_b),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MealOrderError::OrderNotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&data)
    }

    pub fn from_yaml_str(data: &str) -> Result<Self> {
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(data)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build a session from this draft.
    ///
    /// Weeks are assigned before biweekly is switched on. An explicit week B
    /// equal to week A with biweekly on is rejected rather than moved, as is
    /// a quantity for a meal type the week does not offer.
    pub fn apply(&self, catalog: &Catalog) -> Result<OrderSession> {
        let mut session = OrderSession::new(catalog);
        session.set_name(self.name.clone());
        session.set_notes(self.notes.clone());

        if let Some(week) = self.week_a {
            session.set_week(Slot::A, week, catalog)?;
        }
        if let Some(week) = self.week_b {
            session.set_week(Slot::B, week, catalog)?;
        }
        if self.biweekly {
            if self.week_b.is_some() && session.week(Slot::A) == session.week(Slot::B) {
                return Err(WeekError::DuplicateWeek(session.week(Slot::B)).into());
            }
            session.set_biweekly(true, catalog)?;
        }

        for (slot, meals) in [(Slot::A, &self.week_a_meals), (Slot::B, &self.week_b_meals)] {
            let week = session.week(slot);
            let offered = catalog.meal_types_for(week);
            for (day, cells) in meals {
                for (meal, qty) in cells {
                    if *qty > 0 && !offered.contains(meal) {
                        return Err(MealOrderError::MealNotOffered { week, meal: *meal });
                    }
                    session.adjust_quantity(slot, *day, *meal, i64::from(*qty));
                }
            }
        }

        Ok(session)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
