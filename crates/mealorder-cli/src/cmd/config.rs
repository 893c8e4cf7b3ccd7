use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use mealorder_core::catalog::Catalog;
use mealorder_core::config::{Config, ConfigWarning, WarnLevel};
use mealorder_core::format::format_money;
use mealorder_core::types::{MAX_WEEK, MIN_WEEK};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Check the contact, catalog and pricing settings
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate(root);
    let catalog_path = config.catalog_path(root);
    let weeks: Vec<u32> = catalog_path
        .as_deref()
        .and_then(|p| Catalog::load(p).ok())
        .map(|c| c.available_weeks().into_iter().collect())
        .unwrap_or_default();

    if json {
        print_json(&serde_json::json!({
            "contact": config.contact,
            "catalog": catalog_path.as_ref().map(|p| p.display().to_string()),
            "weeks": weeks,
            "currency": config.currency,
            "pricing": {
                "base_price": format!("{:.2}", config.pricing.base_price),
                "low_carb_extra": format!("{:.2}", config.pricing.low_carb_extra),
            },
            "warnings": warnings,
        }))?;
    } else {
        print_settings(&config, catalog_path.as_deref(), &weeks);
        print_warnings(&warnings);
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config has errors: orders cannot be sent until they are fixed");
    }
    Ok(())
}

fn print_settings(config: &Config, catalog_path: Option<&Path>, weeks: &[u32]) {
    let phone = config.contact.phone.trim();
    println!(
        "Contact: {} ({})",
        config.contact.name,
        if phone.is_empty() { "no phone" } else { phone }
    );

    match (catalog_path, weeks) {
        (None, _) => println!("Catalog: none, weeks {MIN_WEEK}-{MAX_WEEK} orderable"),
        (Some(path), []) => println!(
            "Catalog: {} (no weeks loaded, weeks {MIN_WEEK}-{MAX_WEEK} orderable)",
            path.display()
        ),
        (Some(path), weeks) => {
            let listed: Vec<String> = weeks.iter().map(|w| format!("{w:02}")).collect();
            println!("Catalog: {} (weeks {})", path.display(), listed.join(", "));
        }
    }

    println!(
        "Pricing: {} per meal, low carb +{}",
        format_money(config.pricing.base_price, &config.currency),
        format_money(config.pricing.low_carb_extra, &config.currency)
    );
}

fn print_warnings(warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        println!("Config is valid. No warnings.");
        return;
    }
    for w in warnings {
        let prefix = match w.level {
            WarnLevel::Warning => "warning",
            WarnLevel::Error => "error",
        };
        println!("[{prefix}] {}", w.message);
    }
}
