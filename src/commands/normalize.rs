//! Normalize command: read an export, classify it, print the JSON document.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use pubclass_core::{Classifier, InputFormat, ProfileDocument, classify_batch, read_publications};

use crate::cli::NormalizeArgs;

pub fn run_normalize_command(
    args: &NormalizeArgs,
    default_format: Option<InputFormat>,
    classifier: &Classifier,
) -> Result<()> {
    let format = args
        .format
        .map(InputFormat::from)
        .or(default_format)
        .unwrap_or_default();

    let Some(input_text) = read_input(args.input.as_deref())? else {
        info!("No input provided. Pass an export file or pipe one via stdin.");
        info!("Example: pubclass normalize citations.json > publications.json");
        return Ok(());
    };

    if input_text.trim().is_empty() {
        info!("Input is empty; no publications to classify");
        return print_document(&ProfileDocument::default(), args.pretty);
    }

    let batch = read_publications(&input_text, format).context("Failed to read publications")?;
    info!(
        publications = batch.len(),
        skipped = batch.skipped_count(),
        format = %format,
        "Parsed input"
    );

    for skipped in &batch.skipped {
        warn!(skipped = %skipped, "Skipped publication");
    }

    let report = classify_batch(batch, classifier);
    print_document(&report.into_document(), args.pretty)
}

fn print_document(document: &ProfileDocument, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .context("Failed to serialize classified records")?;
    println!("{json}");
    Ok(())
}

/// Reads the input file, or stdin when it is piped. `None` means nothing to read.
fn read_input(path: Option<&Path>) -> Result<Option<String>> {
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
        return Ok(Some(text));
    }

    if io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(Some(buffer))
}
