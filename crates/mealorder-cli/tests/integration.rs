#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mealorder(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mealorder").unwrap();
    cmd.current_dir(dir.path()).env("MEALORDER_ROOT", dir.path());
    cmd
}

const MENU: &str = r#"
7:
  title: Comfort Classics
  date_range: 10-14 Feb
  days:
    monday:
      meat: { name: Beef Lasagne, description: Layered with bechamel }
      veg: { name: Lentil Bobotie }
8:
  title: Summer Light
  price: 100
  meal_types: [meat, veg]
"#;

const ORDER: &str = r#"
name: Thandi
notes: "  no onions  "
week_a: 7
week_a_meals:
  monday: { meat: 2 }
  wednesday: { veg: 1 }
week_b_meals:
  friday: { meat: 5 }
"#;

fn init_project(dir: &TempDir) {
    std::fs::write(dir.path().join("menu.yaml"), MENU).unwrap();
    mealorder(dir)
        .args(["init", "--phone", "+27 82 000 1234", "--catalog", "menu.yaml"])
        .assert()
        .success();
}

fn write_order(dir: &TempDir, body: &str) {
    std::fs::write(dir.path().join(".mealorder/order.yaml"), body).unwrap();
}

// ---------------------------------------------------------------------------
// mealorder init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config_and_draft() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    assert!(dir.path().join(".mealorder/config.yaml").exists());
    let draft = std::fs::read_to_string(dir.path().join(".mealorder/order.yaml")).unwrap();
    assert!(draft.contains("week_a: 7"));
    assert!(draft.contains("week_b: 8"));
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(&dir, ORDER);
    mealorder(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let draft = std::fs::read_to_string(dir.path().join(".mealorder/order.yaml")).unwrap();
    assert!(draft.contains("Thandi"));
}

#[test]
fn commands_require_init() {
    let dir = TempDir::new().unwrap();
    mealorder(&dir)
        .args(["order", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

// ---------------------------------------------------------------------------
// mealorder order
// ---------------------------------------------------------------------------

#[test]
fn order_message_lists_ordered_days() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(&dir, ORDER);

    mealorder(&dir)
        .args(["order", "message"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon: x2 Meat"))
        .stdout(predicate::str::contains("Wed: x1 Veg"))
        .stdout(predicate::str::contains("Fri:").not())
        .stdout(predicate::str::contains("Total: 3 meals · R270.00"))
        .stdout(predicate::str::contains("Notes: no onions"));
}

#[test]
fn order_summary_uses_menu_names() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(&dir, ORDER);

    mealorder(&dir)
        .args(["order", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 07 - Comfort Classics (10-14 Feb)"))
        .stdout(predicate::str::contains("Meat: 2 (Beef Lasagne)"))
        .stdout(predicate::str::contains("Veg: 1 (Menu item coming soon.)"));
}

#[test]
fn order_totals_json_with_biweekly() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(
        &dir,
        "week_a: 7\nweek_b: 8\nbiweekly: true\nweek_a_meals:\n  monday: { meat: 1 }\nweek_b_meals:\n  monday: { veg: 2 }\n",
    );

    let out = mealorder(&dir)
        .args(["--json", "order", "totals"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["biweekly"], true);
    assert_eq!(value["total_meals"], 3);
    assert_eq!(value["total_cost"], "290.00");
    assert_eq!(value["weeks"].as_array().unwrap().len(), 2);
}

#[test]
fn order_rejects_unavailable_week() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(&dir, "week_a: 12\n");

    mealorder(&dir)
        .args(["order", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("week 12 is not available"));
}

#[test]
fn order_rejects_out_of_range_week() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(&dir, "week_a: 49\n");

    mealorder(&dir)
        .args(["order", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn order_reads_explicit_file() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(dir.path().join("friday.yaml"), "week_a: 8\nweek_a_meals:\n  friday: { veg: 1 }\n").unwrap();

    mealorder(&dir)
        .args(["order", "message", "--file", "friday.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 08\nFri: x1 Veg"))
        .stdout(predicate::str::contains("R100.00"));
}

#[test]
fn order_rejects_meal_type_not_on_weekly_menu() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(&dir, "week_a: 8\nweek_a_meals:\n  monday: { low_carb: 2 }\n");

    mealorder(&dir)
        .args(["order", "message"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Low Carb is not on the menu for week 8"));
}

#[test]
fn negative_config_pricing_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(
        dir.path().join(".mealorder/config.yaml"),
        "contact:\n  phone: '123'\npricing:\n  base_price: -90\n",
    )
    .unwrap();
    write_order(&dir, ORDER);

    mealorder(&dir)
        .args(["order", "message"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pricing values must not be negative"));
}

#[test]
fn broken_catalog_degrades_to_defaults() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(dir.path().join("menu.yaml"), "not: [valid").unwrap();
    write_order(&dir, "week_a: 30\nweek_a_meals:\n  tuesday: { low_carb: 1 }\n");

    mealorder(&dir)
        .args(["order", "message"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 30"))
        .stdout(predicate::str::contains("Total: 1 meal · R100.00"));
}

// ---------------------------------------------------------------------------
// mealorder catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_weeks_table() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    mealorder(&dir)
        .args(["catalog", "weeks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comfort Classics"))
        .stdout(predicate::str::contains("R100.00"));
}

#[test]
fn catalog_show_week() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    mealorder(&dir)
        .args(["catalog", "show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meat: Beef Lasagne - Layered with bechamel"))
        .stdout(predicate::str::contains("Low Carb: Menu item coming soon."));

    mealorder(&dir)
        .args(["catalog", "show", "9"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// mealorder config / send
// ---------------------------------------------------------------------------

#[test]
fn config_validate_clean() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    mealorder(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact: Kitchen (+27 82 000 1234)"))
        .stdout(predicate::str::contains("menu.yaml (weeks 07, 08)"))
        .stdout(predicate::str::contains("Pricing: R90.00 per meal, low carb +R10.00"))
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_without_catalog() {
    let dir = TempDir::new().unwrap();
    mealorder(&dir)
        .args(["init", "--phone", "123"])
        .assert()
        .success();

    mealorder(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog: none, weeks 1-48 orderable"));
}

#[test]
fn config_validate_missing_phone_fails() {
    let dir = TempDir::new().unwrap();
    mealorder(&dir).arg("init").assert().success();

    mealorder(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("contact.phone is empty"));
}

#[test]
fn send_dry_run_prints_encoded_links() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_order(&dir, ORDER);

    mealorder(&dir)
        .args(["send", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "whatsapp://send?phone=27820001234&text=Weekly%20Meal%20Order%0AName%3A%20Thandi",
        ))
        .stdout(predicate::str::contains("https://wa.me/27820001234?text="));
}

#[test]
fn send_without_phone_fails() {
    let dir = TempDir::new().unwrap();
    mealorder(&dir).arg("init").assert().success();

    mealorder(&dir)
        .args(["send", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contact.phone is not set"));
}
