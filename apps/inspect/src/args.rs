//! # CLI Argument Definitions
//!
//! Global flags select the configuration file and adjust module overrides; each
//! subcommand prints one view of the registry as JSON on stdout.

use clap::{Args, Parser, Subcommand, ValueEnum};
use fhub::domain::{Locale, ModuleId};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "fhub-inspect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect the FreelanceHub module registry")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (without it, an optional `fhub.*` in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Force a module on, on top of configured overrides (repeatable)
    #[arg(long, value_parser = parse_module_id, global = true)]
    pub enable: Vec<ModuleId>,

    /// Force a module off, on top of configured overrides (repeatable)
    #[arg(long, value_parser = parse_module_id, global = true)]
    pub disable: Vec<ModuleId>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long, global = true)]
    pub compact: bool,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Every module with its default, toggleability and effective state
    Modules,
    /// Navigation entries of the enabled modules
    Nav,
    /// Router records of the enabled modules
    Routes {
        /// Print the full addressable paths instead of the record tree
        #[arg(long)]
        flat: bool,
    },
    /// Aggregated settings pages in display order
    Settings,
    /// Message catalog of the enabled modules, in the configured locale
    Messages {
        /// Print this locale instead of the configured one
        #[arg(short, long, value_parser = parse_locale, conflicts_with = "all")]
        locale: Option<Locale>,
        /// Print every locale
        #[arg(long)]
        all: bool,
    },
    /// Validate a JSON document against a built-in schema
    Validate {
        #[arg(value_enum)]
        schema: SchemaName,
        /// JSON file holding one object
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaName {
    Client,
    Project,
    TimeEntry,
    Invoice,
    Login,
    RegisterProfile,
    RegisterPassword,
    RegisterPreferences,
}

fn parse_module_id(value: &str) -> Result<ModuleId, String> {
    value.parse().map_err(|_| format!("unknown module '{value}'"))
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse().map_err(|_| format!("unknown locale '{value}' (expected en-US or zh-CN)"))
}
