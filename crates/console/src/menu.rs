use anyhow::Result;
use chrono::Utc;
use dialoguer::{Select, theme::ColorfulTheme};

use stowage_ledger::{ItemId, Ledger, NewItem};

use crate::{prompts, render};

const MENU: &[&str] = &[
    "Add item",
    "Use item",
    "Check storage status",
    "View inventory items",
    "Optimize storage",
    "Exit",
];

/// Main menu loop. The ledger lives for the duration of the session and is
/// discarded on exit.
pub fn run() -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut ledger = Ledger::new();

    render::heading("Stowage & Usage Tracking");
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => add_item(&theme, &mut ledger)?,
            1 => use_item(&theme, &mut ledger)?,
            2 => check_storage(&ledger),
            3 => view_items(&ledger),
            4 => optimize_storage(&ledger),
            _ => {
                render::info("Exiting. Safe travels!");
                return Ok(());
            }
        }
    }
}

fn add_item(theme: &ColorfulTheme, ledger: &mut Ledger) -> Result<()> {
    render::heading("Add New Item");

    let id = prompts::text(theme, "Item ID")?;
    let name = prompts::text(theme, "Item name")?;
    let category = prompts::text(theme, "Category (e.g. Food, Tool, Medical, Spare Part)")?;
    let location = prompts::text(theme, "Storage location (e.g. Module A-1)")?;
    let width = prompts::non_negative(theme, "Width (cm)")?;
    let height = prompts::non_negative(theme, "Height (cm, 0 if not applicable)")?;
    let depth = prompts::non_negative(theme, "Depth (cm)")?;
    let mass = prompts::non_negative(theme, "Mass (kg)")?;
    let usage_limit = prompts::positive_int(theme, "Usage limit (uses before replacement)")?;

    let new_item = NewItem {
        id: ItemId::new(id),
        name,
        category,
        location,
        width,
        height,
        depth,
        mass,
        usage_limit,
    };

    match ledger.add(new_item, Utc::now()) {
        Ok(record) => render::success(format!("Item '{}' added successfully.", record.name())),
        Err(e) => render::error(e),
    }
    Ok(())
}

fn use_item(theme: &ColorfulTheme, ledger: &mut Ledger) -> Result<()> {
    render::heading("Use an Item");

    let id = ItemId::new(prompts::text(theme, "Item ID to use")?);
    match ledger.consume_use(&id) {
        Ok(outcome) => {
            render::success(format!(
                "Used '{}'. Remaining uses: {}",
                outcome.name, outcome.remaining_uses
            ));
            if outcome.low_usage_alert {
                render::warning(format!(
                    "Alert: '{}' is nearing its usage limit. Consider restocking or maintenance.",
                    outcome.name
                ));
            }
        }
        Err(e) => render::error(e),
    }
    Ok(())
}

fn check_storage(ledger: &Ledger) {
    render::heading("Storage Status");

    let summary = ledger.storage_summary();
    render::info(format!(
        "Total storage volume used: {} cm³",
        summary.total_volume
    ));
    render::info(format!("Total mass stored: {} kg", summary.total_mass));
}

fn view_items(ledger: &Ledger) {
    render::heading("Inventory Items");

    if ledger.is_empty() {
        render::info("No items in the inventory.");
        return;
    }
    for record in ledger.items() {
        render::info(render::item_line(record));
    }
}

fn optimize_storage(ledger: &Ledger) {
    render::heading("Storage Optimization Suggestions");

    let plan = ledger.placement_plan();
    if plan.groups.is_empty() {
        render::info("No items to optimize.");
        return;
    }
    render::info("Suggested grouping by category:");
    for (category, names) in &plan.groups {
        render::info(format!("  Category '{}': {}", category, names.join(", ")));
    }
    render::info(plan.note);
}
