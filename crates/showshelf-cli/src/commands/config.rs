use catalog_config::{Config, PathManager};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use crate::output::{Output, OutputFormat};

pub fn run_config(cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(output),
        crate::ConfigCommands::Init { force } => init_config(force, output),
        crate::ConfigCommands::Set {
            region,
            default_profile,
        } => set_config(region, default_profile, output),
    }
}

fn show_config(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at: {}",
            config_file.display()
        ));
        output.info("Run 'showshelf config init' to create one with defaults.");
        return Ok(());
    }

    let config = Config::load_from_file(&config_file).map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
    })?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Configuration")
                    .fg(comfy_table::Color::Cyan)
                    .add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![Cell::new("Region"), Cell::new(&config.browse.region)]);
            table.add_row(vec![
                Cell::new("Default profile"),
                Cell::new(
                    config
                        .browse
                        .default_profile
                        .as_deref()
                        .unwrap_or("(first profile)"),
                ),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "browse": {
                    "region": config.browse.region,
                    "default_profile": config.browse.default_profile,
                },
            }));
        }
    }

    Ok(())
}

fn init_config(force: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if config_file.exists() && !force {
        output.warn(format!(
            "{} already exists; pass --force to overwrite",
            config_file.display()
        ));
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    output.success(format!(
        "Wrote default configuration to {}",
        config_file.display()
    ));
    Ok(())
}

fn set_config(
    region: Option<String>,
    default_profile: Option<String>,
    output: &Output,
) -> Result<()> {
    if region.is_none() && default_profile.is_none() {
        output.warn("Nothing to change; pass --region and/or --default-profile");
        return Ok(());
    }

    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    let mut config = if config_file.exists() {
        Config::load_from_file(&config_file).map_err(|e| {
            color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
        })?
    } else {
        Config::default()
    };

    if let Some(region) = region {
        config.browse.region = region;
    }
    if let Some(name) = default_profile {
        config.browse.default_profile = if name.is_empty() { None } else { Some(name) };
    }

    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    config
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    output.success(format!("Updated {}", config_file.display()));
    Ok(())
}
