use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use chrono::Utc;
use crate::logic::dataset::record::DatasetRecord;

/// Buffered JSONL writer, one `DatasetRecord` per line
pub struct DatasetWriter {
    out: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl DatasetWriter {
    /// Create (truncate) the target file, creating parent directories
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    /// Timestamped file inside `base_dir`
    pub fn in_dir(base_dir: &Path) -> io::Result<Self> {
        let filename = format!("dataset-{}.jsonl", Utc::now().format("%Y-%m-%d-%H%M%S"));
        Self::create(&base_dir.join(filename))
    }

    pub fn append(&mut self, record: &DatasetRecord) -> io::Result<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.out, "{}", json)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered rows and return the output path
    pub fn finish(mut self) -> io::Result<PathBuf> {
        self.out.flush()?;
        Ok(self.path)
    }
}
