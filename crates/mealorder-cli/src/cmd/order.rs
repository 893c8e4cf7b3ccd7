use crate::output::print_json;
use clap::Subcommand;
use mealorder_core::format::{self, format_money, meal_count};
use mealorder_core::types::week_label;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum OrderSubcommand {
    /// Print the detailed order summary
    Summary {
        /// Order draft (default: .mealorder/order.yaml)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
    /// Print the message that would be sent
    Message {
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
    /// Print meal count and cost per week and overall
    Totals {
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
    /// Validate the draft against the catalog without rendering it
    Check {
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
}

pub fn run(root: &Path, subcmd: OrderSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        OrderSubcommand::Summary { file } => summary(root, file.as_deref(), json),
        OrderSubcommand::Message { file } => message(root, file.as_deref(), json),
        OrderSubcommand::Totals { file } => totals(root, file.as_deref(), json),
        OrderSubcommand::Check { file } => check(root, file.as_deref(), json),
    }
}

fn summary(root: &Path, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let loaded = super::load_order(root, file)?;
    let text = format::detailed_summary(&loaded.session, &loaded.catalog);
    if json {
        print_json(&serde_json::json!({ "summary": text }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

fn message(root: &Path, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let loaded = super::load_order(root, file)?;
    let text = format::outbound_message(&loaded.session, &loaded.catalog);
    if json {
        print_json(&serde_json::json!({ "message": text }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

fn totals(root: &Path, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let loaded = super::load_order(root, file)?;
    let (session, catalog) = (&loaded.session, &loaded.catalog);
    let currency = catalog.currency();
    let weeks = format::breakdown(session, catalog);
    let overall = session.totals(catalog);

    if json {
        let per_week: Vec<serde_json::Value> = weeks
            .iter()
            .map(|w| {
                serde_json::json!({
                    "slot": w.slot.as_str(),
                    "week": w.week,
                    "total_meals": w.totals.total_meals,
                    "total_cost": format!("{:.2}", w.totals.total_cost),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "biweekly": session.biweekly_enabled(),
            "weeks": per_week,
            "total_meals": overall.total_meals,
            "total_cost": format!("{:.2}", overall.total_cost),
            "currency": currency,
        }))?;
    } else {
        for w in &weeks {
            println!(
                "{}: {} · {}",
                week_label(w.week),
                meal_count(w.totals.total_meals),
                format_money(w.totals.total_cost, currency)
            );
        }
        println!(
            "Total: {} · {}",
            meal_count(overall.total_meals),
            format_money(overall.total_cost, currency)
        );
    }
    Ok(())
}

fn check(root: &Path, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let loaded = super::load_order(root, file)?;
    let session = &loaded.session;
    let weeks: Vec<u32> = session
        .active_slots()
        .into_iter()
        .map(|slot| session.week(slot))
        .collect();
    if json {
        print_json(&serde_json::json!({ "valid": true, "weeks": weeks }))?;
    } else {
        let labels: Vec<String> = weeks.iter().map(|w| week_label(*w)).collect();
        println!("Order is valid ({}).", labels.join(", "));
    }
    Ok(())
}
