use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use shotsweep::catalog::Catalog;
use shotsweep::cli::args::{Cli, Commands, ConfigAction, FoldersAction, OutputFormat};
use shotsweep::cli::output;
use shotsweep::common::config::Config;
use shotsweep::common::format;
use shotsweep::notify::{Notifier, NotifyKind, TerminalNotifier};
use shotsweep::policy::types::retention_in_range;
use shotsweep::policy::{AutoDestroyStore, FileBackend};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("shotsweep=debug")
            .init();
    }

    let notifier = TerminalNotifier;
    match run(cli, &notifier) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            notifier.notify(&format!("{:#}", err), NotifyKind::Error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, notifier: &dyn Notifier) -> Result<()> {
    match cli.command {
        Commands::Status => cmd_status(),

        Commands::Enable => cmd_set_enabled(&cli, notifier, true),
        Commands::Disable => cmd_set_enabled(&cli, notifier, false),

        Commands::List => cmd_list(&cli),

        Commands::Add {
            ref folder_id,
            days,
        } => cmd_add(&cli, notifier, folder_id, days),

        Commands::Remove { ref folder_id } => cmd_remove(&cli, notifier, folder_id),

        Commands::Set {
            ref folder_id,
            days,
        } => cmd_set(&cli, notifier, folder_id, days),

        Commands::Folders { ref action } => cmd_folders(&cli, notifier, action),

        Commands::Config { ref action } => cmd_config(notifier, action),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                shotsweep::cli::args::CompletionShell::Bash => clap_complete::Shell::Bash,
                shotsweep::cli::args::CompletionShell::Zsh => clap_complete::Shell::Zsh,
                shotsweep::cli::args::CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "shotsweep", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn open_store() -> Result<AutoDestroyStore<FileBackend>> {
    let backend = FileBackend::new(Config::store_dir());
    AutoDestroyStore::open(backend).context("Failed to open the policy store")
}

fn load_catalog() -> Result<Catalog> {
    Catalog::load(&Config::catalog_path())
}

// ─── Status ───────────────────────────────────────────────────────────────────

fn cmd_status() -> Result<()> {
    let store = open_store()?;
    let catalog = load_catalog()?;

    println!();
    println!("  {} shotsweep Status", "📊");
    println!("{}", "─".repeat(60).dimmed());
    println!();

    let state = if store.is_enabled() {
        "enabled".green().bold().to_string()
    } else {
        "disabled".red().to_string()
    };
    println!("  {} Auto-destroy: {}", "⚙️", state);

    let tracked_shots: u64 = store.folders().iter().map(|f| f.screenshot_count).sum();
    println!(
        "  {} Tracked: {}, {}",
        "🔥",
        format::format_folder_count(store.folders().len()),
        format::format_screenshot_count(tracked_shots)
    );

    let selectable = catalog.selectable(store.config()).len();
    println!(
        "  {} Catalog: {} ({} selectable)",
        "📁",
        format::format_folder_count(catalog.len()),
        selectable
    );

    println!();
    println!("  {} Data dir: {}", "📂", Config::data_dir().display());
    println!();

    Ok(())
}

// ─── Enable / disable ─────────────────────────────────────────────────────────

fn cmd_set_enabled(cli: &Cli, notifier: &dyn Notifier, enabled: bool) -> Result<()> {
    let mut store = open_store()?;
    store.set_enabled(enabled)?;
    if !cli.quiet {
        let message = if enabled {
            "Auto-destroy enabled"
        } else {
            "Auto-destroy disabled"
        };
        notifier.notify(message, NotifyKind::Success);
    }
    Ok(())
}

// ─── Tracked folders ──────────────────────────────────────────────────────────

fn cmd_list(cli: &Cli) -> Result<()> {
    let store = open_store()?;
    match cli.format {
        OutputFormat::Human => output::print_tracked(store.config()),
        OutputFormat::Json => output::print_tracked_json(store.config())?,
        OutputFormat::Quiet => output::print_tracked_quiet(store.folders()),
    }
    Ok(())
}

fn cmd_add(cli: &Cli, notifier: &dyn Notifier, folder_id: &str, days: Option<i64>) -> Result<()> {
    let config = Config::load()?;
    let catalog = load_catalog()?;
    let record = catalog.find(folder_id).with_context(|| {
        format!(
            "no folder '{}' in the catalog (see 'shotsweep folders list')",
            folder_id
        )
    })?;

    let days = days.unwrap_or(config.default_retention_days as i64);

    let mut store = open_store()?;
    store.add_folder(&record.summary(), days)?;

    if !cli.quiet {
        notifier.notify(
            &format!(
                "{} added with a retention of {}",
                record.name,
                format::format_days(days as u32)
            ),
            NotifyKind::Success,
        );
    }
    Ok(())
}

fn cmd_remove(cli: &Cli, notifier: &dyn Notifier, folder_id: &str) -> Result<()> {
    let mut store = open_store()?;
    let name = store
        .folders()
        .iter()
        .find(|f| f.id == folder_id)
        .map(|f| f.name.clone());

    store.remove_folder(folder_id)?;

    if !cli.quiet {
        match name {
            Some(name) => notifier.notify(
                &format!("{} removed from auto-destroy", name),
                NotifyKind::Success,
            ),
            None => notifier.notify(
                &format!("folder '{}' was not tracked (nothing to do)", folder_id),
                NotifyKind::Success,
            ),
        }
    }
    Ok(())
}

fn cmd_set(cli: &Cli, notifier: &dyn Notifier, folder_id: &str, days: i64) -> Result<()> {
    let mut store = open_store()?;
    let stored = store.update_retention(folder_id, days)?;

    if !cli.quiet {
        let message = if i64::from(stored) == days {
            format!(
                "Retention for '{}' set to {}",
                folder_id,
                format::format_days(stored)
            )
        } else {
            format!(
                "Retention for '{}' clamped to {}",
                folder_id,
                format::format_days(stored)
            )
        };
        notifier.notify(&message, NotifyKind::Success);
    }
    Ok(())
}

// ─── Catalog ──────────────────────────────────────────────────────────────────

fn cmd_folders(cli: &Cli, notifier: &dyn Notifier, action: &FoldersAction) -> Result<()> {
    match action {
        FoldersAction::List { selectable } => {
            let catalog = load_catalog()?;
            let store = open_store()?;

            let records: Vec<_> = if *selectable {
                catalog.selectable(store.config())
            } else {
                catalog.records().iter().collect()
            };

            match cli.format {
                OutputFormat::Human => {
                    let title = if *selectable {
                        "📁 Selectable Folders"
                    } else {
                        "📁 Folder Catalog"
                    };
                    output::print_catalog(&records, title);
                }
                OutputFormat::Json => output::print_catalog_json(&records)?,
                OutputFormat::Quiet => output::print_catalog_quiet(&records),
            }
            Ok(())
        }

        FoldersAction::Add {
            name,
            icon,
            color,
            count,
        } => {
            let mut catalog = load_catalog()?;
            let record = catalog.register(name, icon, color, *count);
            catalog.save(&Config::catalog_path())?;
            if !cli.quiet {
                notifier.notify(
                    &format!("Registered '{}' (id: {})", record.name, record.id),
                    NotifyKind::Success,
                );
            }
            Ok(())
        }

        FoldersAction::Import { file } => {
            let contents = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read '{}'", file))?;
            let records = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse '{}' as a folder record array", file))?;

            let mut catalog = load_catalog()?;
            let added = catalog.import(records);
            catalog.save(&Config::catalog_path())?;

            if !cli.quiet {
                notifier.notify(
                    &format!("Imported {}", format::format_folder_count(added)),
                    NotifyKind::Success,
                );
            }
            Ok(())
        }

        FoldersAction::Show { folder_id } => {
            let catalog = load_catalog()?;
            match catalog.find(folder_id) {
                Some(record) => {
                    let store = open_store()?;
                    let tracked = store.folders().iter().find(|f| &f.id == folder_id);
                    output::print_record_info(record, tracked);
                }
                None => println!("  No folder found matching '{}'", folder_id),
            }
            Ok(())
        }
    }
}

// ─── Config ───────────────────────────────────────────────────────────────────

fn cmd_config(notifier: &dyn Notifier, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init { sample } => {
            Config::init_dirs()?;
            let config = Config::default();
            config.save()?;

            if *sample && !Config::catalog_path().exists() {
                Catalog::sample().save(&Config::catalog_path())?;
            }

            notifier.notify(
                &format!("shotsweep initialized at {}", Config::data_dir().display()),
                NotifyKind::Success,
            );
            if *sample {
                println!("  Catalog seeded — try {}", "shotsweep folders list".cyan());
            }
            Ok(())
        }

        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }

        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            notifier.notify("Configuration reset to defaults", NotifyKind::Success);
            Ok(())
        }

        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "default_retention_days" => {
                    let days: i64 = value.parse()?;
                    if !retention_in_range(days) {
                        anyhow::bail!("default_retention_days must be between 1 and 365");
                    }
                    config.default_retention_days = days as u32;
                }
                "output_format" => {
                    config.output_format = match value.as_str() {
                        "human" => shotsweep::common::config::OutputFormat::Human,
                        "json" => shotsweep::common::config::OutputFormat::Json,
                        "quiet" => shotsweep::common::config::OutputFormat::Quiet,
                        other => anyhow::bail!("Unknown output format: {}", other),
                    };
                }
                _ => anyhow::bail!("Unknown config key: {}", key),
            }
            config.save()?;
            notifier.notify(&format!("Set {} = {}", key, value), NotifyKind::Success);
            Ok(())
        }
    }
}
