use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scanrecord::{
    config::Config,
    model::{Project, ScanRecord},
    output::{format_container_to_string, print_container, print_record, OutputFormat},
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Exit codes for CI integration
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "scanrecord")]
#[command(author, version, about = "Inspect scan results and narrow them to projects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Narrow the scan results of a project to its definition file's directory
    Filter {
        /// Scan record (JSON)
        #[arg(short, long)]
        record: PathBuf,

        /// Project (JSON)
        #[arg(short, long)]
        project: PathBuf,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Write JSON output to file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the contents of a scan record
    Show {
        /// Scan record (JSON)
        #[arg(short, long)]
        record: PathBuf,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config: {:#}", e);
        Config::default()
    });

    match cli.command {
        Commands::Filter {
            record,
            project,
            format,
            output,
        } => {
            let format = parse_format(format, &config)?;
            run_filter(&record, &project, format, output.as_deref(), &config)?;
            Ok(exit_codes::SUCCESS)
        }
        Commands::Show { record, format } => {
            let format = parse_format(format, &config)?;
            let record: ScanRecord = read_json(&record)?;
            print_record(&record, format)?;
            Ok(exit_codes::SUCCESS)
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_filter(
    record_path: &Path,
    project_path: &Path,
    format: OutputFormat,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let record: ScanRecord = read_json(record_path)?;
    let project: Project = read_json(project_path)?;

    let license_files = config.filter.effective_license_files();
    let filtered = record.filter_for_project_with(&project, &license_files)?;

    if let Some(path) = output_file {
        std::fs::write(path, format_container_to_string(&filtered)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if format == OutputFormat::Table {
            println!("Results written to: {}", path.display());
        }
    } else {
        print_container(&filtered, format)?;
    }

    Ok(())
}

fn parse_format(format: Option<String>, config: &Config) -> Result<OutputFormat> {
    let format = format.unwrap_or_else(|| config.default_format.clone());
    OutputFormat::from_str(&format).map_err(|e| anyhow::anyhow!(e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        Config::default().save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'scanrecord config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
