use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dictionary::RuntimeId;
use netid_tools::{format_reports, load_config, lookup, validate_tables, LookupKey};
use protocol::ProtocolVersion;
use registry::DictionaryRegistry;
use table::DirTableSource;

#[derive(Parser)]
#[command(
    name = "netid-tools",
    version,
    about = "netid item table validation and lookup tools"
)]
struct Cli {
    /// Log table loading (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate every declared item table.
    Validate {
        /// Directory holding the table resources.
        #[arg(long)]
        dir: PathBuf,
        #[command(flatten)]
        config: ConfigArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Print the canonical revision a client revision is served.
    Resolve {
        /// Raw client protocol revision.
        protocol: u32,
        #[command(flatten)]
        config: ConfigArg,
    },
    /// Look an item up in the table a client revision is served.
    Lookup {
        /// Directory holding the table resources.
        #[arg(long)]
        dir: PathBuf,
        /// Raw client protocol revision.
        #[arg(long)]
        protocol: u32,
        /// Item identifier, e.g. `minecraft:apple`.
        #[arg(long, conflicts_with = "runtime_id")]
        identifier: Option<String>,
        /// Wire runtime ID.
        #[arg(long, allow_negative_numbers = true)]
        runtime_id: Option<i32>,
        #[command(flatten)]
        config: ConfigArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct ConfigArg {
    /// Registry configuration JSON (defaults to the built-in Bedrock set).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Validate {
            dir,
            config,
            format,
        } => {
            let config = load_config(config.config.as_deref()).context("load config")?;
            tracing::info!(dir = %dir.display(), tables = config.tables.len(), "validating item tables");
            let reports = validate_tables(&config, &DirTableSource::new(dir))?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&reports).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_reports(&reports));
                    println!("{} tables ok", reports.len());
                }
            }
        }
        Command::Resolve { protocol, config } => {
            let config = load_config(config.config.as_deref()).context("load config")?;
            let resolver = config.validate().context("invalid config")?;
            let raw = ProtocolVersion::new(protocol);
            let canonical = resolver.resolve(raw);
            let served = if config.tables.iter().any(|decl| decl.protocol == canonical) {
                canonical
            } else {
                config.current
            };
            println!("protocol {raw} -> canonical {canonical} (table {served})");
        }
        Command::Lookup {
            dir,
            protocol,
            identifier,
            runtime_id,
            config,
            format,
        } => {
            let key = match (identifier, runtime_id) {
                (Some(identifier), None) => LookupKey::Identifier(identifier),
                (None, Some(id)) => LookupKey::RuntimeId(RuntimeId::new(id)),
                _ => bail!("pass exactly one of --identifier or --runtime-id"),
            };
            let config = load_config(config.config.as_deref()).context("load config")?;
            let registry = DictionaryRegistry::load(&config, &DirTableSource::new(dir))
                .context("item tables are invalid")?;
            let report = lookup(&registry, ProtocolVersion::new(protocol), &key);
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    let table = if report.dedicated_table {
                        "dedicated table"
                    } else {
                        "current table"
                    };
                    println!(
                        "protocol {} -> canonical {} ({table})",
                        report.requested, report.canonical
                    );
                    match &report.entry {
                        Some(entry) => println!(
                            "{} = {} (component_based: {})",
                            entry.identifier, entry.runtime_id, entry.component_based
                        ),
                        None => println!("not found"),
                    }
                }
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
