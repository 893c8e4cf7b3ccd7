use crate::catalog::Pricing;
use crate::types::{DayName, MealType};
use rust_decimal::Decimal;

const DAYS: usize = 5;
const MEALS: usize = 3;

/// Day × meal-type quantity table for one week slot.
///
/// Quantities are never negative: every mutation clamps at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderGrid {
    cells: [[u32; MEALS]; DAYS],
}

impl OrderGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, day: DayName, meal: MealType) -> u32 {
        self.cells[day.index()][meal.index()]
    }

    /// Apply `delta` to one cell and return the new quantity. Results below
    /// zero clamp to zero; results past `u32::MAX` saturate.
    pub fn adjust(&mut self, day: DayName, meal: MealType, delta: i64) -> u32 {
        let cell = &mut self.cells[day.index()][meal.index()];
        let next = (i64::from(*cell)).saturating_add(delta);
        *cell = next.clamp(0, i64::from(u32::MAX)) as u32;
        *cell
    }

    pub fn set(&mut self, day: DayName, meal: MealType, quantity: u32) {
        self.cells[day.index()][meal.index()] = quantity;
    }

    pub fn clear(&mut self) {
        self.cells = Default::default();
    }

    pub fn is_empty(&self) -> bool {
        self.total_meals() == 0
    }

    pub fn day_total(&self, day: DayName) -> u32 {
        self.cells[day.index()]
            .iter()
            .fold(0u32, |acc, q| acc.saturating_add(*q))
    }

    pub fn total_meals(&self) -> u32 {
        self.total_meals_of(MealType::all())
    }

    /// Meal count over the given meal types only.
    pub fn total_meals_of(&self, offered: &[MealType]) -> u32 {
        DayName::all()
            .iter()
            .flat_map(|day| self.nonzero(*day))
            .filter(|(meal, _)| offered.contains(meal))
            .fold(0u32, |acc, (_, qty)| acc.saturating_add(qty))
    }

    pub fn total_cost(&self, pricing: &Pricing) -> Decimal {
        self.total_cost_of(pricing, MealType::all())
    }

    /// Cost over the given meal types only. Saturates at `Decimal::MAX`.
    pub fn total_cost_of(&self, pricing: &Pricing, offered: &[MealType]) -> Decimal {
        DayName::all()
            .iter()
            .flat_map(|day| self.nonzero(*day))
            .filter(|(meal, _)| offered.contains(meal))
            .fold(Decimal::ZERO, |acc, (meal, qty)| {
                pricing
                    .price_of(meal)
                    .checked_mul(Decimal::from(qty))
                    .and_then(|line| acc.checked_add(line))
                    .unwrap_or(Decimal::MAX)
            })
    }

    /// Non-zero cells of one day, in fixed meal-type order.
    pub fn nonzero(&self, day: DayName) -> impl Iterator<Item = (MealType, u32)> + '_ {
        MealType::all()
            .iter()
            .map(move |meal| (*meal, self.quantity(day, *meal)))
            .filter(|(_, qty)| *qty > 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing() -> Pricing {
        Pricing::new(Decimal::from(90), Decimal::from(10))
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = OrderGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.total_meals(), 0);
        assert_eq!(grid.total_cost(&pricing()), Decimal::ZERO);
    }

    #[test]
    fn adjust_accumulates() {
        let mut grid = OrderGrid::new();
        assert_eq!(grid.adjust(DayName::Monday, MealType::Meat, 1), 1);
        assert_eq!(grid.adjust(DayName::Monday, MealType::Meat, 1), 2);
        assert_eq!(grid.adjust(DayName::Monday, MealType::Meat, -1), 1);
        assert_eq!(grid.quantity(DayName::Monday, MealType::Meat), 1);
        assert_eq!(grid.quantity(DayName::Monday, MealType::Veg), 0);
    }

    #[test]
    fn adjust_clamps_at_zero() {
        let mut grid = OrderGrid::new();
        assert_eq!(grid.adjust(DayName::Friday, MealType::Veg, -1), 0);
        grid.adjust(DayName::Friday, MealType::Veg, 3);
        assert_eq!(grid.adjust(DayName::Friday, MealType::Veg, -10), 0);
        assert_eq!(grid.adjust(DayName::Friday, MealType::Veg, i64::MIN), 0);
    }

    #[test]
    fn adjust_saturates_at_max() {
        let mut grid = OrderGrid::new();
        grid.adjust(DayName::Tuesday, MealType::Meat, i64::MAX);
        assert_eq!(grid.quantity(DayName::Tuesday, MealType::Meat), u32::MAX);
        assert_eq!(grid.adjust(DayName::Tuesday, MealType::Meat, 1), u32::MAX);
    }

    #[test]
    fn adjust_touches_one_cell() {
        let mut grid = OrderGrid::new();
        grid.adjust(DayName::Wednesday, MealType::LowCarb, 4);
        for day in DayName::all() {
            for meal in MealType::all() {
                let expected = if (*day, *meal) == (DayName::Wednesday, MealType::LowCarb) {
                    4
                } else {
                    0
                };
                assert_eq!(grid.quantity(*day, *meal), expected);
            }
        }
    }

    #[test]
    fn totals_match_scenario() {
        let mut grid = OrderGrid::new();
        grid.adjust(DayName::Monday, MealType::Meat, 2);
        grid.adjust(DayName::Wednesday, MealType::Veg, 1);
        assert_eq!(grid.total_meals(), 3);
        assert_eq!(grid.total_cost(&pricing()), Decimal::from(270));
    }

    #[test]
    fn low_carb_carries_extra() {
        let mut grid = OrderGrid::new();
        grid.adjust(DayName::Thursday, MealType::LowCarb, 2);
        grid.adjust(DayName::Thursday, MealType::Meat, 1);
        assert_eq!(grid.total_cost(&pricing()), Decimal::from(290));
        assert_eq!(grid.day_total(DayName::Thursday), 3);
    }

    #[test]
    fn totals_independent_of_mutation_order() {
        let cells = [
            (DayName::Monday, MealType::Meat, 2),
            (DayName::Tuesday, MealType::LowCarb, 1),
            (DayName::Friday, MealType::Veg, 5),
            (DayName::Monday, MealType::Veg, 1),
        ];
        let mut forward = OrderGrid::new();
        for (d, m, q) in cells {
            forward.adjust(d, m, q);
        }
        let mut backward = OrderGrid::new();
        for (d, m, q) in cells.iter().rev() {
            backward.adjust(*d, *m, *q);
        }
        assert_eq!(forward, backward);
        assert_eq!(forward.total_meals(), backward.total_meals());
        assert_eq!(forward.total_cost(&pricing()), backward.total_cost(&pricing()));
    }

    #[test]
    fn fractional_prices_do_not_drift() {
        let pricing = Pricing::new(Decimal::new(1, 1), Decimal::ZERO);
        let mut grid = OrderGrid::new();
        for day in DayName::all() {
            grid.adjust(*day, MealType::Meat, 2);
        }
        assert_eq!(grid.total_cost(&pricing), Decimal::from(1));
    }

    #[test]
    fn nonzero_skips_empty_cells() {
        let mut grid = OrderGrid::new();
        grid.adjust(DayName::Monday, MealType::LowCarb, 1);
        grid.adjust(DayName::Monday, MealType::Meat, 3);
        let cells: Vec<_> = grid.nonzero(DayName::Monday).collect();
        assert_eq!(cells, vec![(MealType::Meat, 3), (MealType::LowCarb, 1)]);
        assert_eq!(grid.nonzero(DayName::Tuesday).count(), 0);
    }

    #[test]
    fn totals_of_skip_unlisted_meal_types() {
        let mut grid = OrderGrid::new();
        grid.adjust(DayName::Monday, MealType::Meat, 1);
        grid.adjust(DayName::Monday, MealType::LowCarb, 2);
        let offered = [MealType::Meat, MealType::Veg];
        assert_eq!(grid.total_meals_of(&offered), 1);
        assert_eq!(grid.total_cost_of(&pricing(), &offered), Decimal::from(90));
        assert_eq!(grid.total_meals(), 3);
    }

    #[test]
    fn huge_prices_saturate_instead_of_overflowing() {
        let pricing = Pricing::new(Decimal::MAX, Decimal::ONE);
        let mut grid = OrderGrid::new();
        grid.adjust(DayName::Monday, MealType::Meat, i64::MAX);
        grid.adjust(DayName::Monday, MealType::LowCarb, i64::MAX);
        assert_eq!(grid.total_cost(&pricing), Decimal::MAX);
        assert_eq!(pricing.price_of(MealType::LowCarb), Decimal::MAX);
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut grid = OrderGrid::new();
        grid.set(DayName::Friday, MealType::Meat, 7);
        grid.clear();
        assert!(grid.is_empty());
    }
}
