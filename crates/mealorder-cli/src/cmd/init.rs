use anyhow::Context;
use chrono::Datelike;
use mealorder_core::catalog::Catalog;
use mealorder_core::config::Config;
use mealorder_core::draft::OrderDraft;
use mealorder_core::io::write_if_missing;
use mealorder_core::paths;
use mealorder_core::types::{MAX_WEEK, MIN_WEEK};
use std::path::{Path, PathBuf};

pub fn run(root: &Path, phone: Option<&str>, catalog: Option<&Path>) -> anyhow::Result<()> {
    let config_path = paths::config_path(root);
    let config = if config_path.exists() {
        println!("Config already exists: {}", paths::CONFIG_FILE);
        Config::load(root).context("failed to load existing config")?
    } else {
        let mut config = Config::new(phone.unwrap_or_default());
        config.catalog = catalog.map(PathBuf::from);
        config.save(root).context("failed to write config")?;
        println!("Created {}", paths::CONFIG_FILE);
        config
    };

    let catalog = config.load_catalog(root);
    let (week_a, week_b) = starting_weeks(&catalog);
    let draft = OrderDraft::template(week_a, week_b);
    let yaml = draft.to_yaml().context("failed to serialize order draft")?;
    if write_if_missing(&paths::order_path(root), yaml.as_bytes())
        .context("failed to write order draft")?
    {
        println!("Created {}", paths::ORDER_FILE);
    } else {
        println!("Order draft already exists: {}", paths::ORDER_FILE);
    }

    if config.contact.phone.trim().is_empty() {
        println!("Set contact.phone in {} before sending orders.", paths::CONFIG_FILE);
    }
    Ok(())
}

/// Catalog defaults when the catalog lists weeks, otherwise the current ISO
/// week (capped at the last orderable week) and the one after it.
fn starting_weeks(catalog: &Catalog) -> (u32, u32) {
    if catalog.is_constrained() {
        return catalog.default_weeks();
    }
    let current = chrono::Local::now().iso_week().week().clamp(MIN_WEEK, MAX_WEEK);
    let next = catalog.next_distinct_week(current).unwrap_or(current);
    (current, next)
}
