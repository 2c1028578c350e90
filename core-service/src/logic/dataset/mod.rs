//! Dataset Module - Training Data Preprocessing
//!
//! Converts labeled URLs into versioned feature rows for offline training.
//! Input and output are both JSONL. Labels are attached here only; the live
//! scoring path never sees them.

pub mod record;
pub mod writer;
pub mod export;


use std::path::{Path, PathBuf};

pub use record::{DatasetRecord, LabeledUrl};
pub use writer::DatasetWriter;
pub use export::ExportSummary;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Get the base directory for dataset storage
pub fn get_dataset_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("urlrisk")
        .join("dataset")
}

/// Export `input` to `output`, or to a timestamped file in the dataset dir
pub fn export_dataset(input: &Path, output: Option<&Path>) -> Result<ExportSummary, DatasetError> {
    let writer = match output {
        Some(path) => DatasetWriter::create(path)?,
        None => DatasetWriter::in_dir(&get_dataset_dir())?,
    };
    export::export(input, writer)
}
