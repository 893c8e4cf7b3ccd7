use crate::catalog::Catalog;
use crate::error::WeekError;
use crate::grid::OrderGrid;
use crate::types::{week_in_range, DayName, MealType, Slot};
use rust_decimal::Decimal;
use serde::Serialize;

// ---------------------------------------------------------------------------
// DerivedTotals
// ---------------------------------------------------------------------------

/// Meal count and cost computed from the grids. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivedTotals {
    pub total_meals: u32,
    pub total_cost: Decimal,
}

impl std::ops::Add for DerivedTotals {
    type Output = DerivedTotals;

    fn add(self, rhs: DerivedTotals) -> DerivedTotals {
        DerivedTotals {
            total_meals: self.total_meals.saturating_add(rhs.total_meals),
            total_cost: self
                .total_cost
                .checked_add(rhs.total_cost)
                .unwrap_or(Decimal::MAX),
        }
    }
}

// ---------------------------------------------------------------------------
// OrderSession
// ---------------------------------------------------------------------------

/// One customer's order across one or two week slots.
///
/// Week B only counts toward totals and output while biweekly ordering is
/// enabled. Its grid keeps whatever it held when biweekly was switched off.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSession {
    customer_name: String,
    notes: String,
    week_a: u32,
    week_b: u32,
    biweekly_enabled: bool,
    grid_a: OrderGrid,
    grid_b: OrderGrid,
}

impl OrderSession {
    pub fn new(catalog: &Catalog) -> Self {
        let (week_a, week_b) = catalog.default_weeks();
        Self {
            customer_name: String::new(),
            notes: String::new(),
            week_a,
            week_b,
            biweekly_enabled: false,
            grid_a: OrderGrid::new(),
            grid_b: OrderGrid::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn biweekly_enabled(&self) -> bool {
        self.biweekly_enabled
    }

    pub fn week(&self, slot: Slot) -> u32 {
        match slot {
            Slot::A => self.week_a,
            Slot::B => self.week_b,
        }
    }

    pub fn grid(&self, slot: Slot) -> &OrderGrid {
        match slot {
            Slot::A => &self.grid_a,
            Slot::B => &self.grid_b,
        }
    }

    fn grid_mut(&mut self, slot: Slot) -> &mut OrderGrid {
        match slot {
            Slot::A => &mut self.grid_a,
            Slot::B => &mut self.grid_b,
        }
    }

    /// Slots that contribute to totals and output, in display order.
    pub fn active_slots(&self) -> Vec<Slot> {
        if self.biweekly_enabled {
            vec![Slot::A, Slot::B]
        } else {
            vec![Slot::A]
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Assign a week number to a slot.
    ///
    /// Rejects weeks outside 1..=48, weeks missing from a constrained
    /// catalog, and, while biweekly is on, the week already held by the
    /// other slot. Nothing changes on error.
    pub fn set_week(&mut self, slot: Slot, week: u32, catalog: &Catalog) -> Result<(), WeekError> {
        if !week_in_range(week) {
            return Err(WeekError::OutOfRange(week));
        }
        if !catalog.is_available(week) {
            return Err(WeekError::Unavailable(week));
        }
        if self.biweekly_enabled && self.week(slot.other()) == week {
            return Err(WeekError::DuplicateWeek(week));
        }
        match slot {
            Slot::A => self.week_a = week,
            Slot::B => self.week_b = week,
        }
        Ok(())
    }

    /// Turn biweekly ordering on or off.
    ///
    /// Turning it on while both slots hold the same week moves week B to the
    /// catalog's next distinct week; if there is none, biweekly stays off.
    pub fn set_biweekly(&mut self, enabled: bool, catalog: &Catalog) -> Result<(), WeekError> {
        if !enabled {
            self.biweekly_enabled = false;
            return Ok(());
        }
        if self.week_a == self.week_b {
            let Some(next) = catalog.next_distinct_week(self.week_a) else {
                return Err(WeekError::DuplicateWeek(self.week_b));
            };
            tracing::debug!(
                week_a = self.week_a,
                from = self.week_b,
                to = next,
                "week B collided with week A, moved to next available week"
            );
            self.week_b = next;
        }
        self.biweekly_enabled = true;
        Ok(())
    }

    pub fn adjust_quantity(&mut self, slot: Slot, day: DayName, meal: MealType, delta: i64) -> u32 {
        self.grid_mut(slot).adjust(day, meal, delta)
    }

    /// Reset to a fresh session, keeping the catalog's default weeks.
    pub fn clear(&mut self, catalog: &Catalog) {
        *self = Self::new(catalog);
    }

    // -----------------------------------------------------------------------
    // Totals
    // -----------------------------------------------------------------------

    /// Totals for one slot, counting only the meal types its week offers.
    pub fn week_totals(&self, slot: Slot, catalog: &Catalog) -> DerivedTotals {
        let grid = self.grid(slot);
        let week = self.week(slot);
        let pricing = catalog.pricing_for(week);
        let offered = catalog.meal_types_for(week);
        DerivedTotals {
            total_meals: grid.total_meals_of(&offered),
            total_cost: grid.total_cost_of(&pricing, &offered),
        }
    }

    pub fn totals(&self, catalog: &Catalog) -> DerivedTotals {
        self.active_slots()
            .into_iter()
            .map(|slot| self.week_totals(slot, catalog))
            .fold(DerivedTotals::default(), |acc, t| acc + t)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
