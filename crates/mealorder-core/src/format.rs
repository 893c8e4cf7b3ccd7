//! Text renderings of an order.
//!
//! Both renderings are built from the same [`WeekBreakdown`] list so the
//! figures in the on-screen summary and the outbound message always agree.

use crate::catalog::Catalog;
use crate::session::{DerivedTotals, OrderSession};
use crate::types::{week_label, DayName, MealType, Slot};
use rust_decimal::{Decimal, RoundingStrategy};

pub const WEEKLY_HEADER: &str = "Weekly Meal Order";
pub const BIWEEKLY_HEADER: &str = "Biweekly Meal Order";
pub const NAME_PLACEHOLDER: &str = "[name]";
pub const MENU_PLACEHOLDER: &str = "Menu item coming soon.";

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub meal: MealType,
    pub quantity: u32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayLine {
    pub day: DayName,
    pub items: Vec<ItemLine>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekBreakdown {
    pub slot: Slot,
    pub week: u32,
    pub title: Option<String>,
    pub date_range: Option<String>,
    /// Days with at least one non-zero quantity, Monday first.
    pub days: Vec<DayLine>,
    pub totals: DerivedTotals,
}

impl WeekBreakdown {
    fn heading(&self) -> String {
        let mut out = week_label(self.week);
        if let Some(title) = &self.title {
            out.push_str(" - ");
            out.push_str(title);
        }
        if let Some(range) = &self.date_range {
            out.push_str(&format!(" ({range})"));
        }
        out
    }
}

/// Per-week view of the active slots of `session`.
pub fn breakdown(session: &OrderSession, catalog: &Catalog) -> Vec<WeekBreakdown> {
    session
        .active_slots()
        .into_iter()
        .map(|slot| {
            let week = session.week(slot);
            let grid = session.grid(slot);
            let entry = catalog.entry(week);
            let offered = catalog.meal_types_for(week);
            let days = DayName::all()
                .iter()
                .filter_map(|day| {
                    let items: Vec<ItemLine> = grid
                        .nonzero(*day)
                        .filter(|(meal, _)| offered.contains(meal))
                        .map(|(meal, quantity)| ItemLine {
                            meal,
                            quantity,
                            name: catalog.menu_for(week, *day, meal).map(|m| m.name.clone()),
                        })
                        .collect();
                    (!items.is_empty()).then(|| DayLine {
                        day: *day,
                        items,
                        note: catalog.day_note(week, *day).map(str::to_string),
                    })
                })
                .collect();
            WeekBreakdown {
                slot,
                week,
                title: entry.and_then(|e| non_blank(e.title.as_deref())),
                date_range: entry.and_then(|e| non_blank(e.date_range.as_deref())),
                days,
                totals: session.week_totals(slot, catalog),
            }
        })
        .collect()
}

fn grand_total(weeks: &[WeekBreakdown]) -> DerivedTotals {
    weeks
        .iter()
        .fold(DerivedTotals::default(), |acc, w| acc + w.totals)
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency}{rounded:.2}")
}

pub fn meal_count(n: u32) -> String {
    if n == 1 {
        "1 meal".to_string()
    } else {
        format!("{n} meals")
    }
}

fn totals_line(totals: &DerivedTotals, currency: &str) -> String {
    format!(
        "{} · {}",
        meal_count(totals.total_meals),
        format_money(totals.total_cost, currency)
    )
}

fn header(session: &OrderSession) -> &'static str {
    if session.biweekly_enabled() {
        BIWEEKLY_HEADER
    } else {
        WEEKLY_HEADER
    }
}

fn display_name(session: &OrderSession) -> &str {
    let name = session.customer_name().trim();
    if name.is_empty() {
        NAME_PLACEHOLDER
    } else {
        name
    }
}

fn notes_line(session: &OrderSession) -> Option<String> {
    let notes = session.notes().trim();
    (!notes.is_empty()).then(|| format!("Notes: {notes}"))
}

fn finish(lines: Vec<String>) -> String {
    lines.join("\n").trim_end().to_string()
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Full on-screen summary with menu item names and per-week subtotals.
pub fn detailed_summary(session: &OrderSession, catalog: &Catalog) -> String {
    let currency = catalog.currency();
    let weeks = breakdown(session, catalog);

    let mut lines = vec![
        header(session).to_string(),
        format!("Name: {}", display_name(session)),
        String::new(),
    ];

    for week in &weeks {
        lines.push(week.heading());
        if week.days.is_empty() {
            lines.push("  No meals selected".to_string());
        }
        for day in &week.days {
            lines.push(day.day.to_string());
            for item in &day.items {
                let name = item.name.as_deref().unwrap_or(MENU_PLACEHOLDER);
                lines.push(format!("  {}: {} ({name})", item.meal, item.quantity));
            }
            if let Some(note) = &day.note {
                lines.push(format!("  Note: {note}"));
            }
        }
        lines.push(format!(
            "{} subtotal: {}",
            week_label(week.week),
            totals_line(&week.totals, currency)
        ));
        lines.push(String::new());
    }

    lines.push(format!("Total: {}", totals_line(&grand_total(&weeks), currency)));
    lines.extend(notes_line(session));
    finish(lines)
}

/// Condensed text for the messaging hand-off.
pub fn outbound_message(session: &OrderSession, catalog: &Catalog) -> String {
    let currency = catalog.currency();
    let weeks = breakdown(session, catalog);

    let mut lines = vec![
        header(session).to_string(),
        format!("Name: {}", display_name(session)),
    ];

    for week in &weeks {
        lines.push(week_label(week.week));
        for day in &week.days {
            let items: Vec<String> = day
                .items
                .iter()
                .map(|i| format!("x{} {}", i.quantity, i.meal))
                .collect();
            lines.push(format!("{}: {}", day.day.short(), items.join(" ")));
        }
    }

    lines.push(format!("Total: {}", totals_line(&grand_total(&weeks), currency)));
    lines.extend(notes_line(session));
    finish(lines)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
