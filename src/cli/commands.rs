use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    app::{get_config_dir, init_config, load_config, Config},
    elements::{ElementIndex, ElementStorage, GroupMap},
    generator::build_element_page,
    utils::log_progress,
};

use super::{Cli, Commands};

/// Handle CLI subcommands
pub fn handle_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init => {
            println!("Initializing ApiGen configuration...");
            match init_config(&get_config_dir()?)? {
                Some(path) => println!("Created default configuration at: {}", path.display()),
                None => println!("Configuration already exists, nothing to do"),
            }
            Ok(())
        }
        Commands::Groups => {
            let config = resolve_config(cli)?;
            let storage = open_index(&config)?;
            list_groups(&storage);
            Ok(())
        }
        Commands::Page { element, compact } => {
            let config = resolve_config(cli)?;
            log_progress(1, 2, format!("Reading {}", config.index.path.display()));
            let storage = open_index(&config)?;

            log_progress(2, 2, format!("Loading page for {}", element));
            let template = build_element_page(&storage, element)?;
            let pretty = config.output.pretty && !compact;
            println!("{}", template.to_json(pretty)?);
            Ok(())
        }
        Commands::Version => {
            show_version();
            Ok(())
        }
    }
}

/// Load config and apply command line overrides
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(index) = &cli.index {
        config.index.path = index.clone();
    }
    Ok(config)
}

fn open_index(config: &Config) -> Result<ElementStorage> {
    ElementStorage::from_file(&config.index.path, &config.index.ungrouped_name)
        .context("Could not open the element index")
}

/// Print namespaces, or packages when the index has no namespaces
pub fn list_groups(storage: &ElementStorage) {
    let (label, groups) = if !storage.namespaces().is_empty() {
        ("Namespaces", storage.namespaces())
    } else {
        ("Packages", storage.packages())
    };

    if groups.is_empty() {
        println!("{}", "No namespaces or packages indexed".yellow());
        return;
    }

    println!("{}:", label);
    for line in format_groups(groups, storage.ungrouped_name()) {
        println!("  • {}", line);
    }
}

fn format_groups(groups: &GroupMap, ungrouped_name: &str) -> Vec<String> {
    groups
        .iter()
        .map(|(name, bucket)| {
            let marker = if name == ungrouped_name { " [ungrouped]" } else { "" };
            format!("{}{} ({} elements)", name.green(), marker, bucket.len())
        })
        .collect()
}

/// Show version information
pub fn show_version() {
    println!("ApiGen v{}", env!("CARGO_PKG_VERSION"));
    println!("   Namespace and package loading for documentation pages");
}
