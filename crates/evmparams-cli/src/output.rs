//! Output formatting utilities.
//!
//! Renders parameter entries as a table, JSON or TOML.

use clap::ValueEnum;
use colored::Colorize;
use evmparams::{ChainParams, ParamEntry};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Toml,
}

#[derive(Serialize)]
struct ParameterList<'a> {
    parameters: &'a [ParamEntry],
}

#[derive(Tabled)]
struct ParamRow {
    name: String,
    value: String,
    class: String,
    unit: String,
    description: String,
}

impl From<&ParamEntry> for ParamRow {
    fn from(entry: &ParamEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            value: entry.value.to_string(),
            class: entry.class.to_string(),
            unit: entry.unit.to_string(),
            description: entry.description.to_string(),
        }
    }
}

/// Render parameter entries.
pub fn render_entries(entries: &[ParamEntry], format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Table => {
            let rows: Vec<ParamRow> = entries.iter().map(ParamRow::from).collect();
            Table::new(rows).to_string()
        }
        OutputFormat::Json => serde_json::to_string_pretty(entries)?,
        OutputFormat::Toml => toml::to_string_pretty(&ParameterList { parameters: entries })?,
    };
    Ok(rendered)
}

/// Render a single entry. Tables use a key/value layout.
pub fn render_entry(entry: &ParamEntry, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Table => format!(
            "{}\n{}\nValue:       {}\nClass:       {}\nUnit:        {}\nDescription: {}",
            entry.name.bold(),
            "=".repeat(50),
            entry.value.to_string().bright_green(),
            entry.class,
            entry.unit,
            entry.description,
        ),
        OutputFormat::Json => serde_json::to_string_pretty(entry)?,
        OutputFormat::Toml => toml::to_string_pretty(entry)?,
    };
    Ok(rendered)
}

/// Render the chain parameters in effect.
pub fn render_chain_params(params: &ChainParams, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Table => {
            let entries: Vec<ParamEntry> = evmparams::ArbitraryParam::ALL
                .into_iter()
                .map(|p| evmparams::Param::Arbitrary(p).entry(params))
                .collect();
            return render_entries(&entries, OutputFormat::Table);
        }
        OutputFormat::Json => serde_json::to_string_pretty(params)?,
        OutputFormat::Toml => params.to_toml_string()?,
    };
    Ok(rendered)
}

/// Print success message.
pub fn print_success(msg: &str) {
    println!("{}", format!("✓ {}", msg).green());
}

/// Print error message.
pub fn print_error(msg: &str) {
    eprintln!("{}", format!("✗ {}", msg).red());
}

/// Print warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{}", format!("⚠ {}", msg).yellow());
}
