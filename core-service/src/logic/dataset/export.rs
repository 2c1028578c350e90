use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::record::{DatasetRecord, LabeledUrl};
use super::writer::DatasetWriter;
use super::DatasetError;
use crate::logic::features::extract_features;

/// Counts reported after an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub written: usize,
    pub skipped: usize,
}

/// Turn one labeled row into a training record, or say why it was skipped
pub fn to_record(row: LabeledUrl) -> Result<DatasetRecord, String> {
    let url = match row.url {
        Some(url) if !url.trim().is_empty() => url,
        _ => return Err("missing or blank URL".to_string()),
    };

    let label = match row.label {
        0 => 0,
        1 => 1,
        other => return Err(format!("label {} is not 0 or 1", other)),
    };

    Ok(DatasetRecord::new(extract_features(&url), label))
}

/// Read labeled URLs (JSONL) from `input`, write feature rows (JSONL) via `writer`
pub fn export(input: &Path, mut writer: DatasetWriter) -> Result<ExportSummary, DatasetError> {
    log::info!("Loading dataset from: {}", input.display());
    let reader = BufReader::new(File::open(input)?);
    let mut skipped = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let row: LabeledUrl = match serde_json::from_str(&line) {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping unparseable row {}: {}", index + 1, e);
                skipped += 1;
                continue;
            }
        };

        match to_record(row) {
            Ok(record) => writer.append(&record)?,
            Err(reason) => {
                log::warn!("Skipping invalid row {}: {}", index + 1, reason);
                skipped += 1;
            }
        }
    }

    let written = writer.written();
    let output = writer.finish()?;
    log::info!("Exported {} rows to {} ({} skipped)", written, output.display(), skipped);

    Ok(ExportSummary { output, written, skipped })
}
