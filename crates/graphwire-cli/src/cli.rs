// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface of the `graphwire` binary.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use comfy_table::{presets, Table};
use graphwire_models::{catalog, describe, lookup, CatalogError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, ConfigStore, DEFAULT_LOG_FILTER};
use crate::fs_store::FsConfigStore;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "graphwire", version, about = "Parse and inspect Microsoft Graph model payloads")]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands of `graphwire`.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a JSON payload through a model's factory and print it back
    Parse {
        /// Model wire name or discriminator tag whose factory is used
        #[arg(long = "type", value_name = "NAME")]
        type_name: String,
        /// Payload file; stdin when omitted or `-`
        file: Option<PathBuf>,
        /// Indent the JSON output regardless of the configured default
        #[arg(long)]
        pretty: bool,
    },
    /// List catalogued models with their tags and base types
    Types,
    /// List the wire fields a model accepts, inherited ones included
    Fields {
        /// Model wire name or discriminator tag
        #[arg(long = "type", value_name = "NAME")]
        type_name: String,
    },
    /// Show or change the persisted configuration
    Config {
        /// Configuration action.
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// Subcommands of `graphwire config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Indent `parse` output by default
    SetPretty {
        /// `true` or `false`
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Log filter used when `RUST_LOG` is unset (e.g. `graphwire_json=trace`)
    SetLogFilter {
        /// `tracing` filter directive
        filter: String,
    },
}

/// Parse arguments, load the configuration, install logging and run.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    let store = FsConfigStore::from_env().context("locating config directory")?;
    let (config, load_error) =
        CliConfig::load(&store).map_or_else(|err| (CliConfig::default(), Some(err)), |config| (config, None));
    init_tracing(&config.log_filter);
    if let Some(err) = load_error {
        warn!(%err, "ignoring unreadable config, using defaults");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &store, &config, &mut out)
}

/// Execute one command, writing its output to `out`.
pub fn run<S: ConfigStore>(
    command: Commands,
    store: &S,
    config: &CliConfig,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Parse {
            type_name,
            file,
            pretty,
        } => parse_payload(&type_name, file.as_deref(), pretty || config.pretty, out),
        Commands::Types => list_types(out),
        Commands::Fields { type_name } => list_fields(&type_name, out),
        Commands::Config { action } => configure(action, store, config, out),
    }
}

fn init_tracing(configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut content = Vec::new();
            io::stdin().lock().read_to_end(&mut content).context("reading stdin")?;
            Ok(content)
        }
    }
}

fn parse_payload(type_name: &str, file: Option<&Path>, pretty: bool, out: &mut dyn Write) -> Result<()> {
    let def = lookup(type_name)?;
    let content = read_input(file)?;
    let model = graphwire_json::from_slice(&content, def.factory())
        .with_context(|| format!("parsing payload as {}", def.name))?
        .ok_or(CatalogError::NullPayload(def.name))?;
    let concrete = describe(&*model).map_or(def.tag, |found| found.tag);
    info!(requested = def.name, concrete, "parsed payload");

    let text = if pretty {
        graphwire_json::to_string_pretty(&*model)?
    } else {
        String::from_utf8(graphwire_json::to_vec(&*model)?)?
    };
    writeln!(out, "{concrete}")?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn list_types(out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(vec!["NAME", "TAG", "BASE"]);
    for def in catalog() {
        table.add_row(vec![def.name, def.tag, def.base.unwrap_or("-")]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

fn list_fields(type_name: &str, out: &mut dyn Write) -> Result<()> {
    let def = lookup(type_name)?;
    for name in def.field_names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn configure<S: ConfigStore>(
    action: ConfigCommand,
    store: &S,
    current: &CliConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let shown = match action {
        ConfigCommand::Show => current.clone(),
        ConfigCommand::SetPretty { value } => {
            CliConfig::update(store, |config| config.pretty = value).context("saving config")?
        }
        ConfigCommand::SetLogFilter { filter } => {
            EnvFilter::try_new(&filter).with_context(|| format!("invalid log filter `{filter}`"))?;
            CliConfig::update(store, |config| config.log_filter = filter).context("saving config")?
        }
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&shown)?)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fields_include_inherited_names() {
        let mut out = Vec::new();
        list_fields("swapShiftsChangeRequest", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let names: Vec<_> = text.lines().collect();
        for expected in ["@odata.type", "id", "createdBy", "senderShiftId", "recipientShiftId"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn unknown_types_are_reported() {
        let mut out = Vec::new();
        let err = list_fields("shift", &mut out).unwrap_err();
        assert!(err.to_string().contains("unknown model type: shift"));
    }

    #[test]
    fn parse_prints_the_concrete_tag_first() {
        let dir = tempfile::tempdir().unwrap();
        let payload = dir.path().join("offer.json");
        fs::write(
            &payload,
            br##"{"@odata.type":"#microsoft.graph.swapShiftsChangeRequest","recipientShiftId":"s2"}"##,
        )
        .unwrap();
        let mut out = Vec::new();
        parse_payload("offerShiftRequest", Some(&payload), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("#microsoft.graph.swapShiftsChangeRequest"));
        assert_eq!(
            lines.next(),
            Some(r##"{"@odata.type":"#microsoft.graph.swapShiftsChangeRequest","recipientShiftId":"s2"}"##)
        );
    }
}
