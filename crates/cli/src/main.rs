//! svcat command-line interface
//!
//! # Usage
//!
//! ```bash
//! svcat provision wordpress-mysql-instance --class mysqldb --plan free \
//!     -p location=eastus -p sslEnforcement=disabled
//! svcat provision wordpress-mysql-instance --class mysqldb --plan free -s mysecret[dbparams]
//! svcat provision secure-instance --class mysqldb --plan secureDB \
//!     --params-json '{"encrypt": true}'
//! ```

mod config;
mod logging;
mod output;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use svcat_executor::{InMemoryProvisioner, ProvisionInput, Svcat};

use crate::config::CliConfig;
use crate::output::{write_instance, OutputFormat};

#[derive(Parser)]
#[command(name = "svcat")]
#[command(version)]
#[command(about = "Provision service catalog instances")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Configuration file (default: ~/.svcat/config.toml)
    #[arg(long, global = true, env = "SVCAT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new instance of a service
    Provision(ProvisionArgs),
}

#[derive(Args)]
struct ProvisionArgs {
    /// Name of the instance to create
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// The namespace in which to create the instance
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// The class name
    #[arg(long)]
    class: String,

    /// The plan name
    #[arg(long)]
    plan: String,

    /// Additional parameter to use when provisioning the service, format: NAME=VALUE.
    /// Repeat the flag for each parameter; commas are kept as part of the value.
    /// Cannot be combined with --params-json
    #[arg(long = "param", short = 'p', value_name = "NAME=VALUE")]
    params: Vec<String>,

    /// Additional parameter, whose value is stored in a secret, to use when
    /// provisioning the service, format: SECRET[KEY]. Repeat the flag for each
    /// secret; values are not split on commas
    #[arg(long = "secret", short = 's', value_name = "SECRET[KEY]")]
    secrets: Vec<String>,

    /// Additional parameters to use when provisioning the service, provided as
    /// a JSON object. Cannot be combined with --param
    #[arg(long = "params-json", value_name = "JSON")]
    params_json: Option<String>,
}

impl ProvisionArgs {
    fn into_input(self, config: &CliConfig) -> ProvisionInput {
        ProvisionInput {
            args: self.names,
            namespace: config.resolve_namespace(self.namespace),
            class_name: self.class,
            plan_name: self.plan,
            raw_params: self.params,
            json_params: self.params_json.unwrap_or_default(),
            raw_secrets: self.secrets,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.output.or(config.output).unwrap_or_default();
    let svcat = Svcat::new(Arc::new(InMemoryProvisioner::with_catalog(config.catalog())));

    match cli.command {
        Commands::Provision(args) => cmd_provision(&svcat, args.into_input(&config), format, out),
    }
}

fn cmd_provision(
    svcat: &Svcat,
    input: ProvisionInput,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let instance = svcat.provision(&input)?;
    write_instance(out, &instance, format)
}
