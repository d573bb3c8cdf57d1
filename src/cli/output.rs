use anyhow::Result;
use colored::Colorize;

use crate::catalog::FolderRecord;
use crate::common::format;
use crate::policy::types::{AutoDestroyConfig, FolderRef};

// ─── Tracked folders ─────────────────────────────────────────────────────────

pub fn print_tracked(policy: &AutoDestroyConfig) {
    format::print_header("🔥 Auto-Destroy Folders");

    let state = if policy.enabled {
        "enabled".green().bold()
    } else {
        "disabled".red()
    };
    println!("  Auto-destroy is {}", state);
    println!();

    if policy.folders.is_empty() {
        println!("  No folders tracked yet. Add one with {}", "shotsweep add <id>".cyan());
        println!();
        return;
    }

    for folder in &policy.folders {
        println!(
            "  {} {}  {} — {} — destroy after {}",
            folder.icon,
            folder.name.bold(),
            format!("({})", folder.id).dimmed(),
            format::format_screenshot_count(folder.screenshot_count).dimmed(),
            format::format_days_colored(folder.retention_days),
        );
    }
    println!();
    println!("  {} tracked", format::format_folder_count(policy.folders.len()));
    println!();
}

pub fn print_tracked_json(policy: &AutoDestroyConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(policy)?);
    Ok(())
}

pub fn print_tracked_quiet(folders: &[FolderRef]) {
    for f in folders {
        println!("{}  {}  {}", f.id, f.name, f.retention_days);
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

pub fn print_catalog(records: &[&FolderRecord], title: &str) {
    format::print_header(title);

    if records.is_empty() {
        println!("  Catalog is empty. Seed it with {}", "shotsweep config init --sample".cyan());
        println!();
        return;
    }

    for record in records {
        println!(
            "  {} {}  {} — {}, updated {}",
            record.icon,
            format::truncate(&record.name, 32).bold(),
            format!("({})", record.id).dimmed(),
            format::format_screenshot_count(record.screenshot_count),
            format::format_relative(record.last_updated).dimmed(),
        );
    }
    println!();
    println!("  {} in catalog view", format::format_folder_count(records.len()));
    println!();
}

pub fn print_catalog_json(records: &[&FolderRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

pub fn print_catalog_quiet(records: &[&FolderRecord]) {
    for r in records {
        println!("{}  {}  {}", r.id, r.name, r.screenshot_count);
    }
}

pub fn print_record_info(record: &FolderRecord, tracked: Option<&FolderRef>) {
    format::print_header(&format!("{} {}", record.icon, record.name));
    format::print_kv("id", &record.id);
    format::print_kv("color", &record.color);
    format::print_kv(
        "screenshots",
        &record.screenshot_count.to_string(),
    );
    format::print_kv("updated", &format::format_relative(record.last_updated));
    match tracked {
        Some(folder) => format::print_kv(
            "auto-destroy",
            &format!("after {}", format::format_days(folder.retention_days)),
        ),
        None => format::print_kv("auto-destroy", "not tracked"),
    }
    println!();
}
