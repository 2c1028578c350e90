//! Data models

pub mod scan;

pub use scan::{
    BatchScanRequest, EmailScanResponse, FileScanResponse, ScanUrlRequest, ScanUrlResponse,
};
