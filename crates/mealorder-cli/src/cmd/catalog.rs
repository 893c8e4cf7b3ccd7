use crate::output::{print_json, print_table};
use clap::Subcommand;
use mealorder_core::format::{format_money, MENU_PLACEHOLDER};
use mealorder_core::types::{week_in_range, week_label, DayName, MAX_WEEK, MIN_WEEK};
use std::path::Path;

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// List orderable weeks with their titles and prices
    Weeks,
    /// Show the daily menu for one week
    Show { week: u32 },
}

pub fn run(root: &Path, subcmd: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CatalogSubcommand::Weeks => weeks(root, json),
        CatalogSubcommand::Show { week } => show(root, week, json),
    }
}

fn weeks(root: &Path, json: bool) -> anyhow::Result<()> {
    let (_, catalog) = super::load_config_and_catalog(root)?;
    let currency = catalog.currency();

    if json {
        let weeks: Vec<serde_json::Value> = catalog
            .entries()
            .map(|(week, entry)| {
                let pricing = catalog.pricing_for(week);
                serde_json::json!({
                    "week": week,
                    "title": entry.title,
                    "date_range": entry.date_range,
                    "price": format!("{:.2}", pricing.base_price),
                    "low_carb_extra": format!("{:.2}", pricing.low_carb_extra),
                    "meal_types": catalog.meal_types_for(week),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "constrained": catalog.is_constrained(),
            "weeks": weeks,
        }))?;
        return Ok(());
    }

    if !catalog.is_constrained() {
        let defaults = catalog.defaults();
        println!(
            "No menu catalog: weeks {MIN_WEEK}-{MAX_WEEK} are orderable at {} (low carb +{}).",
            format_money(defaults.base_price, currency),
            format_money(defaults.low_carb_extra, currency)
        );
        return Ok(());
    }

    let rows: Vec<Vec<String>> = catalog
        .entries()
        .map(|(week, entry)| {
            let pricing = catalog.pricing_for(week);
            let meals: Vec<&str> = catalog
                .meal_types_for(week)
                .into_iter()
                .map(|m| m.label())
                .collect();
            vec![
                format!("{week:02}"),
                entry.title.clone().unwrap_or_default(),
                entry.date_range.clone().unwrap_or_default(),
                format_money(pricing.base_price, currency),
                format!("+{}", format_money(pricing.low_carb_extra, currency)),
                meals.join(", "),
            ]
        })
        .collect();
    print_table(&["WEEK", "TITLE", "DATES", "PRICE", "LOW CARB", "MEALS"], rows);
    Ok(())
}

fn show(root: &Path, week: u32, json: bool) -> anyhow::Result<()> {
    if !week_in_range(week) {
        anyhow::bail!("week {week} is out of range: must be between {MIN_WEEK} and {MAX_WEEK}");
    }
    let (_, catalog) = super::load_config_and_catalog(root)?;
    if catalog.is_constrained() && !catalog.is_available(week) {
        anyhow::bail!("week {week} is not in the menu catalog");
    }

    let meal_types = catalog.meal_types_for(week);

    if json {
        let days: Vec<serde_json::Value> = DayName::all()
            .iter()
            .map(|day| {
                let items: serde_json::Map<String, serde_json::Value> = meal_types
                    .iter()
                    .map(|meal| {
                        let item = catalog.menu_for(week, *day, *meal);
                        (meal.as_str().to_string(), serde_json::json!(item))
                    })
                    .collect();
                serde_json::json!({
                    "day": day.as_str(),
                    "items": items,
                    "note": catalog.day_note(week, *day),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "week": week,
            "entry": catalog.entry(week),
            "days": days,
        }))?;
        return Ok(());
    }

    let mut heading = week_label(week);
    if let Some(title) = catalog.entry(week).and_then(|e| e.title.as_deref()) {
        heading.push_str(&format!(" - {title}"));
    }
    println!("{heading}");
    for day in DayName::all() {
        println!("{day}");
        for meal in &meal_types {
            match catalog.menu_for(week, *day, *meal) {
                Some(item) => match &item.description {
                    Some(desc) => println!("  {meal}: {} - {desc}", item.name),
                    None => println!("  {meal}: {}", item.name),
                },
                None => println!("  {meal}: {MENU_PLACEHOLDER}"),
            }
        }
        if let Some(note) = catalog.day_note(week, *day) {
            println!("  Note: {note}");
        }
    }
    Ok(())
}
