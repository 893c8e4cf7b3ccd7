pub mod catalog;
pub mod config;
pub mod init;
pub mod order;
pub mod send;

use anyhow::Context;
use mealorder_core::catalog::Catalog;
use mealorder_core::config::Config;
use mealorder_core::draft::OrderDraft;
use mealorder_core::paths;
use mealorder_core::session::OrderSession;
use std::path::Path;

/// Everything a command needs to render or send an order.
pub struct Loaded {
    pub config: Config,
    pub catalog: Catalog,
    pub session: OrderSession,
}

pub fn load_config_and_catalog(root: &Path) -> anyhow::Result<(Config, Catalog)> {
    let config = Config::load(root).context("failed to load config")?;
    let catalog = config.load_catalog(root);
    tracing::debug!(
        constrained = catalog.is_constrained(),
        weeks = catalog.available_weeks().len(),
        "catalog loaded"
    );
    Ok((config, catalog))
}

pub fn load_order(root: &Path, file: Option<&Path>) -> anyhow::Result<Loaded> {
    let (config, catalog) = load_config_and_catalog(root)?;
    let path = match file {
        Some(f) => paths::resolve(root, f),
        None => paths::order_path(root),
    };
    let draft = OrderDraft::load(&path)
        .with_context(|| format!("failed to read order '{}'", path.display()))?;
    let session = draft
        .apply(&catalog)
        .with_context(|| format!("order '{}' is invalid", path.display()))?;
    Ok(Loaded {
        config,
        catalog,
        session,
    })
}
