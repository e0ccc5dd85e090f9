//! CLI command implementations.

use clap::{Parser, Subcommand, ValueEnum};
use evmparams::{entries, lookup, zeroed_costs, ChainParams, Param, ParamEntry, PrecisionClass, Unit};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::output::*;

/// Main CLI.
#[derive(Parser)]
#[command(name = "evmparams")]
#[command(about = "Inspect the EVM protocol parameter table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Tracing filter (overrides the config file)
    #[arg(long, global = true, env = "EVMPARAMS_LOG")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Chain-parameter TOML file to use instead of the genesis values
    #[arg(short, long, global = true)]
    pub params: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List parameters
    List {
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Only show one precision class
        #[arg(short, long)]
        class: Option<ClassFilter>,
        /// Only show one unit (gas, bytes, blocks, seconds, difficulty, bound)
        #[arg(short, long, value_parser = parse_unit)]
        unit: Option<Unit>,
    },
    /// Show a single parameter by name
    Get {
        /// Parameter name, e.g. CALL_STIPEND or target_gas_limit
        name: String,
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// List gas costs that are zero in this schedule
    Zeroed {
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Show the chain parameters in effect
    Chain {
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Write the genesis chain parameters to a TOML file
    Init {
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the CLI configuration in effect, or write it to disk
    Config {
        /// Save the configuration (default: ~/.evmparams/config.toml)
        #[arg(long)]
        write: bool,
        /// Alternative location for --write
        #[arg(long, requires = "write")]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassFilter {
    Fixed,
    Arbitrary,
}

impl ClassFilter {
    fn matches(&self, class: PrecisionClass) -> bool {
        match self {
            ClassFilter::Fixed => class == PrecisionClass::Fixed64,
            ClassFilter::Arbitrary => class == PrecisionClass::Arbitrary,
        }
    }
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    Unit::ALL
        .into_iter()
        .find(|u| u.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown unit '{}'", s))
}

/// Resolve the chain parameters: explicit flag, then config file, then genesis.
pub fn load_chain_params(cli_path: Option<&PathBuf>, config: &CliConfig) -> anyhow::Result<ChainParams> {
    match cli_path.or(config.params_file.as_ref()) {
        Some(path) => ChainParams::from_file(path).map_err(|e| {
            anyhow::anyhow!("Failed to load chain parameters '{}': {}", path.display(), e)
        }),
        None => Ok(ChainParams::genesis()),
    }
}

/// Filter entries for the `list` command.
pub fn filter_entries(
    entries: Vec<ParamEntry>,
    class: Option<ClassFilter>,
    unit: Option<Unit>,
) -> Vec<ParamEntry> {
    entries
        .into_iter()
        .filter(|e| class.map_or(true, |c| c.matches(e.class)))
        .filter(|e| unit.map_or(true, |u| e.unit == u))
        .collect()
}

/// The zero-valued gas costs as displayable entries.
pub fn zeroed_entries() -> Vec<ParamEntry> {
    let chain = ChainParams::genesis();
    zeroed_costs()
        .into_iter()
        .map(|p| Param::Fixed(p).entry(&chain))
        .collect()
}

/// Save `config`, refusing to clobber an existing file unless forced.
pub fn write_config(config: &CliConfig, path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    config.save(path)
}

/// Execute a command.
pub fn execute(command: Commands, params: Option<PathBuf>, config: &CliConfig) -> anyhow::Result<()> {
    match command {
        Commands::List { format, class, unit } => {
            let chain = load_chain_params(params.as_ref(), config)?;
            let selected = filter_entries(entries(&chain), class, unit);
            tracing::debug!(count = selected.len(), "Listing parameters");
            println!("{}", render_entries(&selected, format.unwrap_or(config.format))?);
        }
        Commands::Get { name, format } => {
            let chain = load_chain_params(params.as_ref(), config)?;
            let entry = lookup(&chain, &name)?;
            println!("{}", render_entry(&entry, format.unwrap_or(config.format))?);
        }
        Commands::Zeroed { format } => {
            let zeroed = zeroed_entries();
            let format = format.unwrap_or(config.format);
            if format == OutputFormat::Table {
                print_warning(&format!(
                    "{} gas costs are zero in this schedule; values are reported as-is",
                    zeroed.len()
                ));
            }
            println!("{}", render_entries(&zeroed, format)?);
        }
        Commands::Chain { format } => {
            let chain = load_chain_params(params.as_ref(), config)?;
            println!("{}", render_chain_params(&chain, format.unwrap_or(config.format))?);
        }
        Commands::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            ChainParams::genesis().to_file(&path)?;
            print_success(&format!("Wrote genesis chain parameters to {}", path.display()));
        }
        Commands::Config { write, path, force } => {
            if write {
                let path = path
                    .or_else(CliConfig::config_path)
                    .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
                write_config(config, &path, force)?;
                print_success(&format!("Wrote configuration to {}", path.display()));
            } else {
                print!("{}", toml::to_string_pretty(config)?);
            }
        }
    }

    Ok(())
}
