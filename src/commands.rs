//! Command handlers

use crate::app::LookupService;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{output_history, output_sample};
use crate::storage::FileStorage;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Lookup { code, payload } => {
            cmd_lookup(&config, code, payload, output_format).await
        }

        Commands::History => cmd_history(&config, output_format).await,

        Commands::Clear => cmd_clear(&config).await,

        Commands::Export { excel, output } => cmd_export(&config, *excel, output.clone()).await,

        Commands::Config {
            show,
            set_format,
            set_prefix,
            reset,
        } => cmd_config(*show, *set_format, set_prefix.clone(), *reset),
    }
}

async fn open_service(config: &Config) -> Result<LookupService> {
    let storage = FileStorage::open(config.storage_dir()?).await?;
    Ok(LookupService::open(Box::new(storage)).await)
}

fn read_payload(path: &Path) -> Result<Value> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !path.exists() {
            return Err(Error::PayloadNotFound(path.display().to_string()));
        }
        std::fs::read_to_string(path)?
    };
    // The payload is untrusted and schema-less; undecodable JSON simply
    // normalizes to a placeholder row, same as any other malformed shape.
    Ok(serde_json::from_str(&content).unwrap_or(Value::Null))
}

async fn cmd_lookup(
    config: &Config,
    code: &str,
    payload_path: &Path,
    output_format: OutputFormat,
) -> Result<()> {
    let payload = read_payload(payload_path)?;
    let mut service = open_service(config).await?;
    let sample = service.record_lookup(&payload, code).await;
    output_sample(output_format, &sample)
}

async fn cmd_history(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = open_service(config).await?;
    output_history(output_format, service.history())
}

async fn cmd_clear(config: &Config) -> Result<()> {
    let mut service = open_service(config).await?;
    service.clear_history().await;
    println!("History cleared.");
    Ok(())
}

async fn cmd_export(config: &Config, excel: bool, output: Option<PathBuf>) -> Result<()> {
    let service = open_service(config).await?;

    if service.history().is_empty() {
        println!("No samples logged yet, nothing to export.");
        return Ok(());
    }

    if excel {
        let file = service.export_workbook(&config.export_prefix)?;
        let path = output.unwrap_or_else(|| PathBuf::from(&file.file_name));
        let bytes = {
            use base64::engine::general_purpose::STANDARD;
            use base64::Engine as _;
            STANDARD
                .decode(&file.content_base64)
                .map_err(|e| Error::Excel(e.to_string()))?
        };
        std::fs::write(&path, bytes)?;
        println!("Workbook written to {}", path.display());
    } else {
        let text = service.export_text()?;
        match output {
            Some(path) => {
                std::fs::write(&path, &text)?;
                println!("Export written to {}", path.display());
            }
            None => print!("{}", text),
        }
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_prefix: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }
    if let Some(prefix) = set_prefix {
        config.export_prefix = prefix;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}
