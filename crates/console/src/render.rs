//! Console output helpers.

use std::fmt;

use colored::Colorize;
use stowage_ledger::ItemRecord;

pub fn heading(title: &str) {
    println!("\n{}", format!("--- {title} ---").bold());
}

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", message.to_string().yellow());
}

pub fn error(message: impl fmt::Display) {
    println!("{}", message.to_string().red());
}

/// One listing line per record, matching the status-board layout.
pub fn item_line(record: &ItemRecord) -> String {
    format!(
        "ID: {} | Name: {} | Category: {} | Location: {} | Volume: {} cm³ | Mass: {} kg | Usage: {}/{} | Sensor: {}",
        record.id(),
        record.name(),
        record.category(),
        record.location(),
        record.volume(),
        record.mass(),
        record.remaining_uses(),
        record.usage_limit(),
        record.sensor_status(),
    )
}
