//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::export::COLUMN_HEADERS;
use crate::types::Sample;

pub fn output_sample(output_format: OutputFormat, sample: &Sample) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(sample)?;
        println!("{}", content);
    } else {
        println!("\nSample Record");
        println!("=============");
        for (header, value) in COLUMN_HEADERS.iter().zip(sample.column_values()) {
            println!("{:<24} {}", format!("{header}:"), value);
        }
    }
    Ok(())
}

pub fn output_history(output_format: OutputFormat, samples: &[Sample]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(samples)?;
        println!("{}", content);
        return Ok(());
    }

    if samples.is_empty() {
        println!("No samples logged yet.");
        return Ok(());
    }

    println!("\nLogged Samples ({})", samples.len());
    println!("==================");
    for sample in samples {
        println!(
            "{:<12} {:<22} {:<20} collected: {}",
            sample.code, sample.status, sample.client, sample.collection_date
        );
    }
    Ok(())
}
