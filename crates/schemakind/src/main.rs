use clap::{Parser, Subcommand};
use schemakind::{ClassifyOptions, OutputFormat, commands};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Classify JVM type descriptors into JSON schema kinds.
#[derive(Parser)]
#[command(name = "schemakind", version, about)]
struct Cli {
    /// Config file (default: ./schemakind.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the schema kind of each descriptor
    Classify {
        /// Type descriptors, e.g. `I` or `Ljava/util/UUID;`
        #[arg(required = true)]
        descriptors: Vec<String>,

        /// Additional type table (TOML); may be repeated
        #[arg(long = "types", value_name = "FILE")]
        types: Vec<PathBuf>,

        /// Don't include the bundled JDK table
        #[arg(long)]
        no_jdk: bool,

        /// Emit JSON instead of tab-separated text
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    match cli.command {
        Command::Classify {
            descriptors,
            types,
            no_jdk,
            json,
        } => {
            let options = ClassifyOptions {
                descriptors,
                types,
                no_jdk,
                config: cli.config,
                format: if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
            };
            print!("{}", commands::classify(&options, &cwd)?);
        }
    }
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
