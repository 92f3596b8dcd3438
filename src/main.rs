//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_enrich` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::collections::HashMap;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use strum::IntoEnumIterator;

use ip_enrich::config::{Command, MappingAction, ADMIN_TOKEN_ENV};
use ip_enrich::initialization::init_logger_with;
use ip_enrich::mapping::{admin, load_table_or_default, FileStore, MappingKind};
use ip_enrich::{
    run_enrichment, EnrichmentReport, ExportRow, LookupResult, Opt, FAILED_BUCKET,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // setting IP2LOCATION_API_KEY and ADMIN_TOKEN without exporting them
    // manually. Try the current directory first, then the executable's.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match &opt.command {
        Some(Command::Mapping { action }) => run_mapping_command(&opt, action),
        None => {
            let config = opt.to_config();
            match run_enrichment(config).await {
                Ok(report) => {
                    print_report(&report);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("ip_enrich error: {:#}", e);
                    process::exit(1);
                }
            }
        }
    }
}

/// Applies one administrative mapping operation and persists the table.
fn run_mapping_command(opt: &Opt, action: &MappingAction) -> Result<()> {
    let store = FileStore::new(&opt.mapping_path, std::env::var(ADMIN_TOKEN_ENV).ok());
    let mut table = load_table_or_default(&store);

    match action {
        MappingAction::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                for kind in MappingKind::iter() {
                    println!("{}:", kind);
                    for (code, label) in table.entries(kind) {
                        println!("  {} = {}", code, label);
                    }
                }
            }
            return Ok(());
        }
        MappingAction::Add { kind, code, label } => {
            admin::add_entry(&mut table, (*kind).into(), code, label)?;
        }
        MappingAction::Rename { kind, old, new } => {
            admin::rename_entry(&mut table, (*kind).into(), old, new)?;
        }
        MappingAction::Remove { kind, code } => {
            admin::remove_entry(&mut table, (*kind).into(), code)?;
        }
    }

    let token = opt.admin_token.as_deref().unwrap_or_default();
    admin::save_table(&store, &table, token)?;
    println!("Mapping saved to {}", store.path().display());
    Ok(())
}

/// Prints the grouped results, summary counts, and quota state.
fn print_report(report: &EnrichmentReport) {
    // Rows carry the resolved labels; index them by address for display.
    let rows: HashMap<&str, &ExportRow> =
        report.rows.iter().map(|r| (r.ip.as_str(), r)).collect();

    for group in &report.groups {
        // The first success in a group carries the ISO code for the whole
        // bucket, the same way the upstream data keys flag icons.
        let country_code = group.entries.iter().find_map(|entry| match entry {
            LookupResult::Success(e) => e.country_code.as_deref(),
            LookupResult::Failure { .. } => None,
        });
        let header = match country_code {
            Some(code) => format!("{} [{}] ({})", group.label, code, group.entries.len()),
            None => format!("{} ({})", group.label, group.entries.len()),
        };
        if group.label == FAILED_BUCKET {
            println!("\n{}", header.red().bold());
        } else {
            println!("\n{}", header.blue().bold());
        }

        for entry in &group.entries {
            match entry {
                LookupResult::Success(e) => {
                    let badge = if e.is_proxy {
                        "proxy".red()
                    } else {
                        "direct".green()
                    };
                    let (region, city, usage) = rows
                        .get(e.ip.as_str())
                        .map(|r| (r.region.as_str(), r.city.as_str(), r.usage.as_str()))
                        .unwrap_or(("", "", ""));
                    println!(
                        "  {:<40} {:<6} {}/{}  {}  {} (AS{})",
                        e.ip,
                        badge,
                        region,
                        city,
                        usage,
                        e.as_org.as_deref().unwrap_or("-"),
                        e.asn.as_deref().unwrap_or("-")
                    );
                }
                LookupResult::Failure { ip, message } => {
                    println!("  {:<40} {}", ip, message.red());
                }
            }
        }
    }

    println!(
        "\nTotal: {}  Direct: {}  Proxy: {}  Failed: {}",
        report.stats.total,
        report.stats.direct.to_string().green(),
        report.stats.proxy.to_string().red(),
        report.stats.failed
    );
    println!("Remaining quota: {}", report.quota);
    for path in &report.exports {
        println!("Report written to {}", path.display());
    }
    println!("Completed in {:.1}s", report.elapsed_seconds);
}
