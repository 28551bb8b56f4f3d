// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - export: write the static site (markup, robots, sitemap, icons)
// - dump: print the content record as JSON
// - config --show/--reset/--edit/--path: configuration management
// No subcommand starts the TUI.

use crate::config::{Config, VERSION};
use crate::export::ExportOptions;
use crate::sections::SectionId;
use crate::tui::StartupOptions;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// folio - terminal portfolio viewer and static site exporter
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Terminal portfolio viewer and static site exporter", long_about = None)]
pub struct Cli {
    /// Open at this section, like a URL #fragment (home, about, skills,
    /// projects, education, experience, contact)
    #[arg(long)]
    pub section: Option<String>,

    /// Theme override for this run (auto, dracula, nord, gruvbox)
    #[arg(long)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the static site export
    Export {
        /// Output directory (defaults to [export].out_dir)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Apply the deployment base path to asset links
        #[arg(long)]
        production: bool,
    },

    /// Print the content record as JSON
    Dump,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// What main should do after CLI handling
pub enum CliAction {
    /// A subcommand was handled; exit
    Exit,
    /// Run the static export, then exit
    Export(ExportOptions),
    /// Start the TUI
    Tui(StartupOptions),
}

/// Parse arguments and handle immediate subcommands.
/// `--theme` is applied to the config in place.
pub fn handle_cli(config: &mut Config) -> Result<CliAction> {
    let cli = Cli::parse();

    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    match cli.command {
        Some(Commands::Export { out, production }) => {
            let mut opts = ExportOptions::from_config(config);
            if let Some(out) = out {
                opts.out_dir = out;
            }
            if production {
                opts.production = true;
            }
            Ok(CliAction::Export(opts))
        }
        Some(Commands::Dump) => {
            handle_dump()?;
            Ok(CliAction::Exit)
        }
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show(config);
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                // No flag provided, show help
                println!("Usage: folio config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            Ok(CliAction::Exit)
        }
        None => {
            let initial_section = match cli.section {
                Some(anchor) => match SectionId::from_anchor(&anchor) {
                    Some(section) => Some(section),
                    None => bail!(
                        "Unknown section {anchor:?} (known: home, about, skills, projects, \
                         education, experience, contact)"
                    ),
                },
                None => None,
            };
            Ok(CliAction::Tui(StartupOptions { initial_section }))
        }
    }
}

fn handle_dump() -> Result<()> {
    let json = serde_json::to_string_pretty(&crate::content::portfolio())
        .context("Failed to serialize content")?;
    println!("{json}");
    Ok(())
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("production = {}", config.production);
    println!();
    println!("[resolver]");
    println!("meaningful_ratio = {}", config.resolver.meaningful_ratio);
    println!("intent_ms = {}", config.resolver.intent_ms);
    println!("stale_ms = {}", config.resolver.stale_ms);
    println!("top_buffer_rows = {}", config.resolver.top_buffer_rows);
    println!("band_top_pct = {}", config.resolver.band_top_pct);
    println!("band_bottom_pct = {}", config.resolver.band_bottom_pct);
    println!();
    println!("[export]");
    println!("out_dir = {:?}", config.export.out_dir.display().to_string());
    println!("site_url = {:?}", config.export.site_url);
    println!("base_path = {:?}", config.export.base_path);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            eprintln!("Error reading input");
            std::process::exit(1);
        }

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Ensure config exists
    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status();

    match status {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}
