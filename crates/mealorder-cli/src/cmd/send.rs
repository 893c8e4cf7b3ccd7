use crate::output::print_json;
use mealorder_core::format::outbound_message;
use mealorder_core::handoff::{hand_off, HandOffRoute, MessageLink, UrlOpener};
use std::path::Path;

/// Opens URLs with the operating system's default handler.
struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

pub fn run(root: &Path, file: Option<&Path>, dry_run: bool, json: bool) -> anyhow::Result<()> {
    let loaded = super::load_order(root, file)?;
    let message = outbound_message(&loaded.session, &loaded.catalog);
    let link = MessageLink::new(&loaded.config.contact.phone, message);

    if link.phone().is_empty() {
        anyhow::bail!("contact.phone is not set: run 'mealorder config validate'");
    }

    if dry_run {
        if json {
            print_json(&serde_json::json!({
                "contact": loaded.config.contact.name,
                "message": link.message(),
                "app_url": link.app_url(),
                "web_url": link.web_url(),
            }))?;
        } else {
            println!("{}", link.message());
            println!();
            println!("app: {}", link.app_url());
            println!("web: {}", link.web_url());
        }
        return Ok(());
    }

    tracing::info!(contact = %loaded.config.contact.name, "handing off order message");
    let route = hand_off(&link, &SystemOpener)?;

    if json {
        print_json(&serde_json::json!({ "sent": true, "route": route.as_str() }))?;
    } else {
        match route {
            HandOffRoute::App => println!(
                "Opened messaging app for {}.",
                loaded.config.contact.name
            ),
            HandOffRoute::Web => println!(
                "Messaging app unavailable, opened web link for {}.",
                loaded.config.contact.name
            ),
        }
    }
    Ok(())
}
